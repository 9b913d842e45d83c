// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broadphase backends used by collision detection.
//!
//! A backend receives the world-space bounds of every collidable node for one
//! detection pass and reports the overlapping pairs. The scene canonicalizes and
//! de-duplicates what it is given, so a backend may report a pair more than once.

use kurbo::Rect;

mod flat;
#[cfg(feature = "broadphase_grid")]
mod grid;

pub use flat::FlatPairs;
#[cfg(feature = "broadphase_grid")]
pub use grid::GridPairs;

/// Candidate-pair generator for one collision pass.
pub trait Broadphase {
    /// Forget every inserted entry.
    fn clear(&mut self);

    /// Register `bounds` for `slot`. A slot is inserted at most once per pass.
    fn insert(&mut self, slot: usize, bounds: Rect);

    /// Visit pairs `(a, b)`, `a != b`, of inserted slots whose bounds strictly overlap.
    ///
    /// Every overlapping pair must be visited at least once, in either order, and no
    /// other pair may be visited.
    fn visit_pairs<F: FnMut(usize, usize)>(&self, f: F);
}
