//! MVC Controller - Mediates between Model (DeviceList) and the View
//!
//! # Responsibilities
//!
//! - Produce labelled, conflict-marked rows for the action list
//! - Run the input-capture flow when the player rebinds an action
//! - Decide what the delete/disable control should look like and do
//! - Trigger device-list persistence after every mutation
//!
//! # Architecture
//!
//! The Controller holds a shared reference to the Model but doesn't know
//! about any widget toolkit. Every event handler returns plain data (rows,
//! capture outcomes, control captions) for the View to act on, which keeps
//! the whole flow testable without a display server.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::conflict::conflicting_actions;
use crate::core::keys;
use crate::core::types::{DeviceKind, Input, InputKind, PlayerAction};
use crate::devices::{DeviceError, DeviceList, InputMode};
use crate::ui::capture::CaptureState;

/// One row of the action list: label text plus conflict marker.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionRow {
    /// The action this row represents
    pub action: PlayerAction,
    /// Display text, action name and current binding
    pub label: String,
    /// True when this action's binding collides inside its range
    pub conflict: bool,
}

/// What the screen's delete/disable button should offer.
///
/// Keyboard configs are deleted outright (confirm first); gamepad
/// configs are toggled between enabled and disabled instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeleteControl {
    /// Destructive delete; inactive when this is the last keyboard config
    Delete { active: bool },
    /// Gamepad is enabled; offer disabling it
    Disable,
    /// Gamepad is disabled; offer enabling it
    Enable,
}

impl DeleteControl {
    /// Button caption for this control.
    pub fn caption(&self) -> &'static str {
        match self {
            DeleteControl::Delete { .. } => "Delete Configuration",
            DeleteControl::Disable => "Disable Device",
            DeleteControl::Enable => "Enable Device",
        }
    }
}

/// Result of feeding a sensed input event to the capture flow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CaptureOutcome {
    /// The target action was rebound; the View should dismiss the
    /// prompt, refresh its rows and, when `shift_warning` is set, show
    /// the non-blocking shift caveat.
    Bound {
        action: PlayerAction,
        shift_warning: bool,
    },
    /// Event did not match the config's device kind; still awaiting.
    Ignored,
}

/// MVC Controller for the device-options screen.
///
/// Edits one config of the shared device list, identified by index. The
/// capture target lives here as explicit per-screen state.
pub struct ScreenController {
    /// Shared device-list model
    devices: Rc<RefCell<DeviceList>>,
    /// Which config of the list this screen edits
    config_index: usize,
    /// Capture-flow state (at most one action awaiting input)
    capture: RefCell<CaptureState>,
}

impl ScreenController {
    /// Creates a controller editing `config_index` of the device list.
    pub fn new(devices: Rc<RefCell<DeviceList>>, config_index: usize) -> Self {
        Self {
            devices,
            config_index,
            capture: RefCell::new(CaptureState::Idle),
        }
    }

    /// The edited config's name, for the screen title.
    pub fn config_name(&self) -> String {
        self.devices
            .borrow()
            .config(self.config_index)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }

    /// Builds the full action list with conflict markers.
    ///
    /// Conflicts are recomputed from scratch on every call; the View
    /// should re-request rows after every capture.
    pub fn rows(&self) -> Vec<ActionRow> {
        let devices = self.devices.borrow();
        let Some(config) = devices.config(self.config_index) else {
            return Vec::new();
        };

        let conflicts = conflicting_actions(config);
        PlayerAction::ALL
            .iter()
            .map(|action| ActionRow {
                action: *action,
                // One tab character: the font moves the cursor to the
                // middle of the row, splitting name from binding.
                label: format!("    {}\t{}", action.label(), config.binding(*action)),
                conflict: conflicts.contains(action),
            })
            .collect()
    }

    /// What the delete/disable button should currently offer.
    pub fn delete_control(&self) -> DeleteControl {
        let devices = self.devices.borrow();
        match devices.config(self.config_index) {
            Some(config) if config.kind == DeviceKind::Keyboard => DeleteControl::Delete {
                // Never offer deleting the last keyboard config
                active: devices.keyboard_amount() >= 2,
            },
            Some(config) if config.enabled => DeleteControl::Disable,
            _ => DeleteControl::Enable,
        }
    }

    /// Starts capturing a new binding for `action`.
    ///
    /// Remembers the target (overwriting any stale one) and switches
    /// the input layer into the sensing mode matching the config's
    /// device kind. The View opens the "press a key" prompt.
    pub fn begin_capture(&self, action: PlayerAction) {
        let mut devices = self.devices.borrow_mut();
        let Some(config) = devices.config(self.config_index) else {
            eprintln!("⚠ Warning: no device config selected, ignoring rebind request");
            return;
        };

        let mode = match config.kind {
            DeviceKind::Keyboard => InputMode::SenseKeyboard,
            DeviceKind::Gamepad => InputMode::SenseGamepad,
        };
        devices.set_mode(mode);
        *self.capture.borrow_mut() = CaptureState::AwaitingInput { action };
    }

    /// Feeds a sensed raw event to the capture flow.
    ///
    /// Events of the wrong device kind (a stick event while rebinding a
    /// keyboard config, or vice versa) are silently ignored and the flow
    /// keeps waiting. On a match the binding is written, the input layer
    /// returns to menu mode and the device list is persisted best
    /// effort.
    pub fn sensed_input(&self, input: &Input) -> CaptureOutcome {
        let Some(action) = self.capture.borrow().target() else {
            return CaptureOutcome::Ignored;
        };

        let mut shift_warning = false;
        {
            let mut devices = self.devices.borrow_mut();
            let Some(config) = devices.config_mut(self.config_index) else {
                return CaptureOutcome::Ignored;
            };

            match (config.kind, input.kind) {
                (DeviceKind::Keyboard, InputKind::Keyboard) => {
                    config.set_keyboard_binding(action, input.button_id, input.character);
                    shift_warning = keys::is_shift(input.button_id);
                }
                (DeviceKind::Gamepad, kind) if kind.is_gamepad() => {
                    // stick_input is Some for every gamepad kind
                    if let Some(stick) = kind.stick_input() {
                        config.set_gamepad_binding(
                            action,
                            stick,
                            input.button_id,
                            input.axis_direction,
                        );
                    }
                }
                _ => return CaptureOutcome::Ignored,
            }

            devices.set_mode(InputMode::Menu);
        }

        *self.capture.borrow_mut() = CaptureState::Idle;
        self.persist_best_effort();

        CaptureOutcome::Bound {
            action,
            shift_warning,
        }
    }

    /// Dismisses the capture prompt without a binding.
    ///
    /// Clears the target and restores menu mode so a stray later event
    /// can never be mis-attributed to a stale target action.
    pub fn cancel_capture(&self) {
        *self.capture.borrow_mut() = CaptureState::Idle;
        self.devices.borrow_mut().set_mode(InputMode::Menu);
    }

    /// The action currently awaiting input, if any.
    pub fn capture_target(&self) -> Option<PlayerAction> {
        self.capture.borrow().target()
    }

    /// Flips a gamepad config's enabled flag and persists immediately.
    ///
    /// Returns the new enabled state. Calling this on a keyboard config
    /// is a caller bug (keyboards are deleted, not disabled).
    pub fn toggle_enabled(&self) -> Result<bool, DeviceError> {
        let enabled = {
            let mut devices = self.devices.borrow_mut();
            let config = devices
                .config_mut(self.config_index)
                .ok_or(DeviceError::NotFound(self.config_index))?;
            config.enabled = !config.enabled;
            config.enabled
        };
        self.persist_best_effort();
        Ok(enabled)
    }

    /// Deletes the edited config after the View's confirmation dialog.
    ///
    /// Deleting the last keyboard config (or a config that no longer
    /// exists) is a precondition violation: the delete control should
    /// have been inactive, so the error is internal and fatal to the
    /// caller, not something to show the player.
    pub fn confirm_delete(&self) -> Result<(), DeviceError> {
        self.devices.borrow_mut().delete_config(self.config_index)?;
        self.persist_best_effort();
        Ok(())
    }

    /// Saves the device list, warning instead of failing.
    ///
    /// Persistence after an edit is best effort: the new binding is
    /// already live in memory either way.
    fn persist_best_effort(&self) {
        if let Err(e) = self.devices.borrow().serialize() {
            eprintln!("⚠ Warning: failed to save device list: {}", e);
        }
    }
}
