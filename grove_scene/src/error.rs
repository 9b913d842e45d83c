// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

use crate::types::NodeId;

/// Error returned by [`Scene::detach`](crate::Scene::detach) when the identified node is
/// not a direct child of the given parent.
///
/// This is a caller contract violation: the child may be stale, swept, attached
/// elsewhere, or a deeper descendant rather than a direct child.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DetachError {
    /// The parent the child was to be detached from.
    pub parent: NodeId,
    /// The node that was not found among the parent's children.
    pub child: NodeId,
}

impl fmt::Debug for DetachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DetachError {{ parent: {:?}, child: {:?} }}",
            self.parent, self.child
        )
    }
}

impl fmt::Display for DetachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node {:?} is not a direct child of {:?}",
            self.child, self.parent
        )
    }
}

impl core::error::Error for DetachError {}
