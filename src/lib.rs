// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Kart Binding Editor
//!
//! The input-binding editing logic of a kart racing game's device-options
//! screen: list the bindings of one input device (keyboard or gamepad),
//! remap actions by capturing the next pressed key or button, detect
//! binding conflicts, and enable/disable or delete a device configuration.
//!
//! # Features
//!
//! - **Conflict Detection:** duplicate bindings flagged per action range
//! - **Input Capture:** modal "press a key" flow with device-kind filtering
//! - **Device Management:** keyboard deletion rules, gamepad enable toggle
//! - **Atomic Persistence:** device list saved with backup-then-rename
//!
//! # Architecture
//!
//! - **`core`:** Business logic (actions, bindings, key table, conflicts)
//! - **`devices`:** Device-list collection, sensing mode, file storage
//! - **`ui`:** Screen controller and capture-flow state machine (MVC
//!   controller; knows nothing about any widget toolkit)
//!
//! # Examples
//!
//! ## Detecting conflicts
//!
//! ```
//! use kart_binding_editor::core::conflict::conflicting_actions;
//! use kart_binding_editor::core::{DeviceConfig, PlayerAction};
//!
//! let mut config = DeviceConfig::new_keyboard("My Keyboard");
//! config.set_keyboard_binding(PlayerAction::Fire, 0x41, Some('a'));
//! config.set_keyboard_binding(PlayerAction::Nitro, 0x41, Some('a'));
//!
//! let conflicts = conflicting_actions(&config);
//! assert!(conflicts.contains(&PlayerAction::Fire));
//! assert!(conflicts.contains(&PlayerAction::Nitro));
//! ```
//!
//! ## Capturing a new binding
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use kart_binding_editor::core::types::AxisDirection;
//! use kart_binding_editor::core::{keys, DeviceConfig, Input, InputKind, PlayerAction};
//! use kart_binding_editor::devices::{DeviceList, MemoryStore};
//! use kart_binding_editor::ui::{CaptureOutcome, ScreenController};
//!
//! let mut list = DeviceList::new(Box::new(MemoryStore::default()));
//! list.add_config(DeviceConfig::new_keyboard("My Keyboard"));
//! let devices = Rc::new(RefCell::new(list));
//!
//! let controller = ScreenController::new(Rc::clone(&devices), 0);
//! controller.begin_capture(PlayerAction::Brake);
//!
//! let space = Input {
//!     kind: InputKind::Keyboard,
//!     device_id: 0,
//!     button_id: keys::KEY_SPACE,
//!     axis_direction: AxisDirection::Neutral,
//!     character: Some(' '),
//! };
//! match controller.sensed_input(&space) {
//!     CaptureOutcome::Bound { action, .. } => assert_eq!(action, PlayerAction::Brake),
//!     CaptureOutcome::Ignored => unreachable!(),
//! }
//! ```

pub mod core;
pub mod devices;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Binding, DeviceConfig, DeviceKind, Input, InputKind, PlayerAction};
