// Copyright 2025 bakri (tidynest@proton.me)
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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for input-binding management, including:
//! - Type definitions for player actions, bindings and sensed input
//! - The keyboard key-code table used for binding labels
//! - Conflict detection over the gameplay and menu action ranges
//!
//! All business logic is isolated from UI and I/O concerns to enable
//! comprehensive unit testing without requiring a display server or a
//! physical input device.

pub mod conflict;
pub mod keys;
pub mod types;

pub use conflict::{conflicting_actions, Conflict, ConflictDetector};
pub use types::*;

#[cfg(test)]
mod tests;
