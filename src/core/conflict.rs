//! Binding conflict detection
//!
//! This module flags actions whose binding collides with another action's
//! binding in the same range. The gameplay and menu ranges are scanned
//! independently: menu navigation and in-race controls are never active
//! at the same time, so sharing an input across the two ranges is fine.
//!
//! Every action sharing a duplicated binding is flagged, not just the
//! later occurrence. Conflicts are a valid (if discouraged) end state:
//! they are surfaced as a visual marker, never as an error.

use std::collections::{BTreeSet, HashMap};

use crate::core::types::{ActionRange, DeviceConfig, PlayerAction};

/// Detects binding conflicts within one action range.
///
/// Uses a HashMap where keys are binding strings and values are all
/// actions bound to that string. A conflict exists when any vector has
/// length > 1.
pub struct ConflictDetector {
    /// Maps binding string to all actions using that binding.
    bindings: HashMap<String, Vec<PlayerAction>>,
}

/// Represents a detected conflict between actions.
#[derive(Clone, Debug, PartialEq)]
pub struct Conflict {
    /// The binding string shared by the conflicting actions
    pub binding: String,

    /// All actions using this binding (always 2 or more)
    pub actions: Vec<PlayerAction>,
}

impl ConflictDetector {
    /// Creates a new empty conflict detector.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Builds a detector over one range of a config's binding table.
    pub fn scan(config: &DeviceConfig, range: ActionRange) -> Self {
        let mut detector = Self::new();
        for action in range.actions() {
            detector.add_action(*action, config.binding_string(*action));
        }
        detector
    }

    /// Records one action's binding string.
    pub fn add_action(&mut self, action: PlayerAction, binding: String) {
        self.bindings.entry(binding).or_default().push(action);
    }

    /// Finds all conflicts (binding strings with 2 or more actions).
    ///
    /// Results are ordered by the first action of each group so output
    /// is deterministic.
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        let mut conflicts: Vec<Conflict> = self
            .bindings
            .iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(binding, actions)| Conflict {
                binding: binding.clone(),
                actions: actions.clone(),
            })
            .collect();
        conflicts.sort_by_key(|c| c.actions[0]);
        conflicts
    }

    /// Checks if a specific binding string has conflicts.
    pub fn has_conflict(&self, binding: &str) -> bool {
        self.bindings
            .get(binding)
            .map(|actions| actions.len() > 1)
            .unwrap_or(false)
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns every action of `config` involved in a conflict, both ranges.
///
/// This is what the screen uses to mark rows: recomputed from scratch on
/// every refresh, never persisted.
pub fn conflicting_actions(config: &DeviceConfig) -> BTreeSet<PlayerAction> {
    let mut marked = BTreeSet::new();
    for range in [ActionRange::Game, ActionRange::Menu] {
        for conflict in ConflictDetector::scan(config, range).find_conflicts() {
            marked.extend(conflict.actions.iter().copied());
        }
    }
    marked
}
