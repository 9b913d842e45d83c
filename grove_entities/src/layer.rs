// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouping layers.

use grove_scene::Category;

/// A grouping node with no extent.
///
/// Layers never collide. A layer with a category, such as the scene-ground layer,
/// can still receive commands; that is how spawn commands reach it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Layer {
    /// Category used for command dispatch.
    pub category: Category,
}

impl Layer {
    /// A layer with category `category`.
    pub fn new(category: Category) -> Self {
        Self { category }
    }
}
