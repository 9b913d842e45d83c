// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision pair types returned from [`Scene::detect_collisions`](crate::Scene::detect_collisions).

use alloc::collections::BTreeSet;

use crate::types::NodeId;

/// Two distinct nodes whose world-space bounds overlap.
///
/// Pairs built with [`CollisionPair::new`] are canonical: `first` is the lesser
/// [`NodeId`], so `new(a, b) == new(b, a)`. The fields are public so that
/// resolution code can reorder a pair, typically through
/// [`Scene::match_categories`](crate::Scene::match_categories), after taking it out of
/// the set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollisionPair {
    /// First member.
    pub first: NodeId,
    /// Second member.
    pub second: NodeId,
}

impl CollisionPair {
    /// Canonical pair for two node ids, ordered `(lesser, greater)`.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        debug_assert_ne!(a, b, "a node never collides with itself");
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// Exchange the two members.
    pub fn swap(&mut self) {
        core::mem::swap(&mut self.first, &mut self.second);
    }

    /// The same pair in canonical order.
    #[must_use]
    pub fn canonical(self) -> Self {
        Self::new(self.first, self.second)
    }

    /// Returns `true` if `id` is one of the members.
    pub fn contains(&self, id: NodeId) -> bool {
        self.first == id || self.second == id
    }

    /// The member that is not `id`, if `id` is a member.
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        if self.first == id {
            Some(self.second)
        } else if self.second == id {
            Some(self.first)
        } else {
            None
        }
    }
}

/// De-duplicated set of canonical collision pairs.
///
/// Ordered, so iteration is deterministic for a given tree.
pub type CollisionSet = BTreeSet<CollisionPair>;
