// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text labels.

/// Character size used for every label.
pub const CHARACTER_SIZE: u32 = 14;

/// A text label, drawn centered on its origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    string: String,
}

impl Text {
    /// A label showing `string`.
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
        }
    }

    /// The displayed string.
    pub fn string(&self) -> &str {
        &self.string
    }

    /// Replace the displayed string.
    pub fn set_string(&mut self, string: impl Into<String>) {
        self.string = string.into();
    }

    /// Character size in pixels.
    pub fn character_size(&self) -> u32 {
        CHARACTER_SIZE
    }
}
