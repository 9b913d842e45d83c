// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with an all-pairs scan. Small and simple; good for tiny sets.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Rect;

use super::Broadphase;
use crate::util::overlaps;

/// Flat vector backend that tests every pair of entries.
#[derive(Clone, Default)]
pub struct FlatPairs {
    entries: Vec<(usize, Rect)>,
}

impl FlatPairs {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries inserted since the last clear.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was inserted since the last clear.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Debug for FlatPairs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatPairs")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Broadphase for FlatPairs {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn insert(&mut self, slot: usize, bounds: Rect) {
        self.entries.push((slot, bounds));
    }

    fn visit_pairs<F: FnMut(usize, usize)>(&self, mut f: F) {
        for (i, &(a, ra)) in self.entries.iter().enumerate() {
            for &(b, rb) in &self.entries[i + 1..] {
                if overlaps(ra, rb) {
                    f(a, b);
                }
            }
        }
    }
}
