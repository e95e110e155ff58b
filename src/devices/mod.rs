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

//! Device-list management
//!
//! The `DeviceList` owns every device profile the player has set up,
//! plus the input layer's current sensing mode. The options screen
//! holds it behind `Rc<RefCell<...>>` and mutates the profile being
//! edited through it.
//!
//! # Module Structure
//!
//! ```text
//! devices/
//! ├── mod.rs     // This file - DeviceList, InputMode, DeviceError
//! └── store.rs   // DeviceListStore trait, FileStore, MemoryStore
//! ```

pub mod store;

pub use store::{DeviceListStore, FileStore, MemoryStore};

use thiserror::Error;

use crate::core::types::{DeviceConfig, DeviceKind};

/// Errors that can occur during device-list management.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// No config at the given index.
    #[error("Device config not found: index {0}")]
    NotFound(usize),
    /// Refused to delete the last remaining keyboard config.
    #[error("Cannot delete the last keyboard configuration")]
    LastKeyboardConfig,
    /// Device file exists but its contents are unusable.
    #[error("Invalid device file: {0}")]
    InvalidDeviceFile(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Mode of the input layer.
///
/// In the sensing modes the next matching raw event is diverted to the
/// capture flow instead of normal menu handling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputMode {
    /// Normal menu navigation
    Menu,
    /// Divert the next keyboard event to the capture flow
    SenseKeyboard,
    /// Divert the next gamepad event to the capture flow
    SenseGamepad,
}

/// The collection of device profiles plus the input sensing mode.
pub struct DeviceList {
    configs: Vec<DeviceConfig>,
    mode: InputMode,
    store: Box<dyn DeviceListStore>,
}

impl DeviceList {
    /// Creates an empty device list backed by the given store.
    pub fn new(store: Box<dyn DeviceListStore>) -> Self {
        Self {
            configs: Vec::new(),
            mode: InputMode::Menu,
            store,
        }
    }

    /// Loads all device configs from the store, replacing the current set.
    ///
    /// Returns the number of configs loaded. Every loaded config must
    /// carry a complete binding table; a truncated one fails the load.
    pub fn load(&mut self) -> Result<usize, DeviceError> {
        let configs = self.store.load()?;
        for config in &configs {
            if !config.is_complete() {
                return Err(DeviceError::InvalidDeviceFile(format!(
                    "config '{}' is missing bindings",
                    config.name
                )));
            }
        }
        self.configs = configs;
        Ok(self.configs.len())
    }

    /// Appends a config to the list.
    pub fn add_config(&mut self, config: DeviceConfig) {
        self.configs.push(config);
    }

    /// All configs, in list order.
    pub fn configs(&self) -> &[DeviceConfig] {
        &self.configs
    }

    /// The config at `index`, if any.
    pub fn config(&self, index: usize) -> Option<&DeviceConfig> {
        self.configs.get(index)
    }

    /// Mutable access to the config at `index`.
    pub fn config_mut(&mut self, index: usize) -> Option<&mut DeviceConfig> {
        self.configs.get_mut(index)
    }

    /// Number of keyboard configs in the list.
    pub fn keyboard_amount(&self) -> usize {
        self.configs
            .iter()
            .filter(|c| c.kind == DeviceKind::Keyboard)
            .count()
    }

    /// Removes the config at `index`.
    ///
    /// Deleting the last keyboard config is a precondition violation:
    /// the screen is expected to deactivate its delete control first,
    /// so hitting this error means a caller bug, not a user mistake.
    pub fn delete_config(&mut self, index: usize) -> Result<(), DeviceError> {
        let config = self
            .configs
            .get(index)
            .ok_or(DeviceError::NotFound(index))?;
        if config.kind == DeviceKind::Keyboard && self.keyboard_amount() < 2 {
            return Err(DeviceError::LastKeyboardConfig);
        }
        self.configs.remove(index);
        Ok(())
    }

    /// Writes the full device list to the store.
    pub fn serialize(&self) -> Result<(), DeviceError> {
        self.store.save(&self.configs)
    }

    /// The input layer's current mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switches the input layer's mode.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }
}
