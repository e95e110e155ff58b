//! Input-capture state machine
//!
//! A short-lived two-state machine: the screen is `Idle` until the
//! player picks an action to rebind, then `AwaitingInput` until a
//! matching raw event arrives or the prompt is dismissed. The state is
//! an explicit field on the screen controller, not a process-wide
//! variable, so two screens can never trample each other's target.

use crate::core::types::PlayerAction;

/// Where the capture flow currently is.
///
/// "Awaiting" is durable state, not a blocking call: the screen yields
/// back to the event loop and resumes when the input layer delivers a
/// sensed event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CaptureState {
    /// No rebind in progress
    Idle,
    /// Waiting for the next matching raw event for `action`
    AwaitingInput { action: PlayerAction },
}

impl CaptureState {
    /// The action being rebound, if any.
    pub fn target(&self) -> Option<PlayerAction> {
        match self {
            CaptureState::Idle => None,
            CaptureState::AwaitingInput { action } => Some(*action),
        }
    }

    /// True while a rebind is in progress.
    pub fn is_awaiting(&self) -> bool {
        matches!(self, CaptureState::AwaitingInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_target() {
        assert_eq!(CaptureState::Idle.target(), None);
        assert!(!CaptureState::Idle.is_awaiting());
    }

    #[test]
    fn test_awaiting_exposes_target() {
        let state = CaptureState::AwaitingInput {
            action: PlayerAction::Nitro,
        };
        assert_eq!(state.target(), Some(PlayerAction::Nitro));
        assert!(state.is_awaiting());
    }
}
