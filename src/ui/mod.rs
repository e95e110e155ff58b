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

//! Options-screen logic with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: DeviceList, ConflictDetector (in `devices` and `core`)
//! - **View**: owned by the surrounding engine's widget toolkit; this
//!   crate only hands it row data and capture outcomes
//! - **Controller**: Mediates between Model and View (in `controller.rs`)
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── capture.rs      // Input-capture state machine
//! └── controller.rs   // MVC Controller for the device-options screen
//! ```

pub mod capture;
pub mod controller;

pub use {
    capture::CaptureState,
    controller::{ActionRow, CaptureOutcome, DeleteControl, ScreenController},
};

#[cfg(test)]
mod tests;
