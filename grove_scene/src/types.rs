// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: node identifiers, local transforms, and texture keys.

use kurbo::{Affine, Point, Vec2};

/// Identifier for a node in a [`Scene`](crate::Scene).
///
/// This is a small, copyable handle that stays stable while the node is attached
/// but becomes invalid when the node is detached or swept.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On attach, a fresh slot is allocated with generation `1`.
/// - On removal, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// ### Ordering
///
/// `NodeId` is totally ordered by slot index, then generation. Two live nodes never
/// share a slot, so among live nodes the order is simply the slot order. Collision
/// pairs use this order to canonicalize `(a, b)` and `(b, a)` into the same value.
///
/// ### Liveness
///
/// Use [`Scene::is_alive`](crate::Scene::is_alive) to check whether a `NodeId` still refers to a live node.
/// Stale `NodeId`s never alias a different live node because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Slot index of this id.
    pub const fn slot(self) -> u32 {
        self.0
    }

    /// Generation of this id.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

/// Local placement of a node relative to its parent.
///
/// The transform applies scale first, then rotation (radians, clockwise in a y-down
/// space), then translation by `position`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LocalTransform {
    /// Offset from the parent's origin.
    pub position: Vec2,
    /// Rotation in radians.
    pub rotation: f64,
    /// Non-uniform scale factors.
    pub scale: Vec2,
}

impl LocalTransform {
    /// No translation, rotation, or scale.
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        rotation: 0.0,
        scale: Vec2::new(1.0, 1.0),
    };

    /// A pure translation.
    pub const fn from_position(position: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }

    /// Builder-style rotation setter.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder-style scale setter.
    #[must_use]
    pub const fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Offset the position by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Position as a point in parent space.
    pub fn origin(&self) -> Point {
        self.position.to_point()
    }

    /// The equivalent affine map from local space into parent space.
    pub fn to_affine(&self) -> Affine {
        let mut affine = Affine::translate(self.position);
        if self.rotation != 0.0 {
            affine *= Affine::rotate(self.rotation);
        }
        if self.scale != Vec2::new(1.0, 1.0) {
            affine *= Affine::scale_non_uniform(self.scale.x, self.scale.y);
        }
        affine
    }
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Opaque key naming a texture owned by the rendering collaborator.
///
/// The scene never loads or resolves textures; it only hands this key to a
/// [`DrawTarget`](crate::DrawTarget).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u16);
