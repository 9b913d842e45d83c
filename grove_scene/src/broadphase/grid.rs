// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform hash-grid backend. Scales to large, sparse worlds of similarly sized boxes.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashMap;
use kurbo::Rect;
use smallvec::SmallVec;

use super::Broadphase;
use crate::util::overlaps;

/// Entries spanning more cells than this per axis bypass the grid.
const MAX_CELL_SPAN: i32 = 32;

type Cell = (i32, i32);

/// Uniform grid that buckets entries by the cells their bounds cover.
///
/// Each entry is stored in every cell it touches, so pairs sharing several cells are
/// reported once per shared cell. Entries wider than a few dozen cells are kept in a
/// separate list and tested against everything.
#[derive(Clone)]
pub struct GridPairs {
    cell_size: f64,
    entries: Vec<(usize, Rect)>,
    cells: HashMap<Cell, SmallVec<[u32; 8]>>,
    oversized: Vec<u32>,
}

impl GridPairs {
    /// Create a grid with square cells of side `cell_size`.
    ///
    /// Non-positive or non-finite sizes fall back to `64.0`.
    pub fn new(cell_size: f64) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            64.0
        };
        Self {
            cell_size,
            entries: Vec::new(),
            cells: HashMap::new(),
            oversized: Vec::new(),
        }
    }

    /// Side length of a grid cell.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    fn cell_of(&self, x: f64, y: f64) -> Cell {
        (floor_div(x, self.cell_size), floor_div(y, self.cell_size))
    }
}

impl Default for GridPairs {
    fn default() -> Self {
        Self::new(64.0)
    }
}

impl Debug for GridPairs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridPairs")
            .field("cell_size", &self.cell_size)
            .field("entries", &self.entries.len())
            .field("occupied_cells", &self.cells.len())
            .field("oversized", &self.oversized.len())
            .finish_non_exhaustive()
    }
}

impl Broadphase for GridPairs {
    fn clear(&mut self) {
        self.entries.clear();
        self.cells.clear();
        self.oversized.clear();
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "entry indices are bounded by the scene's u32 slot space"
    )]
    fn insert(&mut self, slot: usize, bounds: Rect) {
        let entry = self.entries.len() as u32;
        self.entries.push((slot, bounds));

        let (x0, y0) = self.cell_of(bounds.x0, bounds.y0);
        let (x1, y1) = self.cell_of(bounds.x1, bounds.y1);
        if x1.saturating_sub(x0) >= MAX_CELL_SPAN || y1.saturating_sub(y0) >= MAX_CELL_SPAN {
            self.oversized.push(entry);
            return;
        }
        for cy in y0..=y1 {
            for cx in x0..=x1 {
                self.cells.entry((cx, cy)).or_default().push(entry);
            }
        }
    }

    fn visit_pairs<F: FnMut(usize, usize)>(&self, mut f: F) {
        let mut test = |i: u32, j: u32| {
            let (a, ra) = self.entries[i as usize];
            let (b, rb) = self.entries[j as usize];
            if overlaps(ra, rb) {
                f(a, b);
            }
        };
        for bucket in self.cells.values() {
            for (n, &i) in bucket.iter().enumerate() {
                for &j in &bucket[n + 1..] {
                    test(i, j);
                }
            }
        }
        for (n, &i) in self.oversized.iter().enumerate() {
            for &j in &self.oversized[n + 1..] {
                test(i, j);
            }
        }
        if !self.oversized.is_empty() {
            for j in 0..self.entries.len() {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "entry indices are bounded by the scene's u32 slot space"
                )]
                let j = j as u32;
                if self.oversized.contains(&j) {
                    continue;
                }
                for &i in &self.oversized {
                    test(i, j);
                }
            }
        }
    }
}

/// `floor(x / size)` clamped into `i32`, without relying on `std` float intrinsics.
#[allow(
    clippy::cast_possible_truncation,
    reason = "saturating float-to-int conversion is the intent"
)]
fn floor_div(x: f64, size: f64) -> i32 {
    let q = x / size;
    let t = q as i32;
    if f64::from(t) > q { t.saturating_sub(1) } else { t }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    fn pairs_of(grid: &GridPairs) -> BTreeSet<(usize, usize)> {
        let mut out = BTreeSet::new();
        grid.visit_pairs(|a, b| {
            out.insert((a.min(b), a.max(b)));
        });
        out
    }

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(0.0, 10.0), 0);
        assert_eq!(floor_div(9.9, 10.0), 0);
        assert_eq!(floor_div(10.0, 10.0), 1);
        assert_eq!(floor_div(-0.1, 10.0), -1);
        assert_eq!(floor_div(-10.0, 10.0), -1);
        assert_eq!(floor_div(-10.5, 10.0), -2);
    }

    #[test]
    fn finds_pairs_across_cell_borders() {
        let mut grid = GridPairs::new(10.0);
        grid.insert(0, Rect::new(8.0, 8.0, 12.0, 12.0));
        grid.insert(1, Rect::new(11.0, 11.0, 14.0, 14.0));
        grid.insert(2, Rect::new(-5.0, -5.0, -1.0, -1.0));
        assert_eq!(pairs_of(&grid), BTreeSet::from([(0, 1)]));
    }

    #[test]
    fn oversized_entries_pair_with_everything_they_touch() {
        let mut grid = GridPairs::new(1.0);
        grid.insert(7, Rect::new(0.0, 0.0, 100.0, 100.0));
        grid.insert(8, Rect::new(50.0, 50.0, 51.0, 51.0));
        grid.insert(9, Rect::new(200.0, 200.0, 201.0, 201.0));
        grid.insert(10, Rect::new(-10.0, -10.0, 300.0, 300.0));
        assert_eq!(
            pairs_of(&grid),
            BTreeSet::from([(7, 8), (7, 10), (8, 10), (9, 10)])
        );
    }

    #[test]
    fn invalid_cell_size_falls_back() {
        assert_eq!(GridPairs::new(0.0).cell_size(), 64.0);
        assert_eq!(GridPairs::new(f64::NAN).cell_size(), 64.0);
        assert_eq!(GridPairs::new(16.0).cell_size(), 16.0);
    }
}
