// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node capability trait, owned subtrees, and the per-node update context.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Affine, Point, Rect, Vec2};

use crate::category::Category;
use crate::command::{Command, CommandQueue};
use crate::types::{LocalTransform, NodeId, TextureId};

/// Behavior shared by every kind of node stored in a [`Scene`](crate::Scene).
///
/// A scene is generic over one `Kind` type, usually an enum with one variant per
/// concrete node kind (grouping layers, creatures, projectiles, ...). Every method has
/// a default, so a pure grouping kind can be an empty `impl`.
pub trait Kind: Sized + 'static {
    /// Categories this node belongs to. Defaults to [`Category::NONE`].
    fn category(&self) -> Category {
        Category::NONE
    }

    /// Collision bounds in the node's local space.
    ///
    /// `None` (the default) marks the node as non-collidable. Bounds with zero area
    /// are treated the same way.
    fn local_bounds(&self) -> Option<Rect> {
        None
    }

    /// Per-tick hook, called pre-order for every node in the tree.
    ///
    /// Commands pushed through `ctx` are not dispatched until the next drain.
    fn update(&mut self, ctx: &mut UpdateCtx<'_, Self>) {
        let _ = ctx;
    }

    /// Render hook, called pre-order with the node's world transform.
    fn draw<T: DrawTarget + ?Sized>(&self, world: Affine, target: &mut T) {
        let _ = (world, target);
    }

    /// Called for every node the removal sweep drops, before it is dropped.
    ///
    /// `world` is the node's world transform at removal time.
    fn on_remove(&self, world: Affine, commands: &mut CommandQueue<Self>) {
        let _ = (world, commands);
    }
}

/// Rendering collaborator used by [`Scene::draw`](crate::Scene::draw).
///
/// Implementations own textures and fonts; the scene only names them.
pub trait DrawTarget {
    /// Draw `bounds` (in local space) textured with `texture`, mapped by `transform`.
    fn draw_sprite(&mut self, transform: Affine, texture: TextureId, bounds: Rect);

    /// Draw a text label whose local origin is mapped by `transform`.
    fn draw_text(&mut self, transform: Affine, text: &str, size: u32);
}

/// A node that is not (or no longer) part of a scene, owning its subtree.
///
/// Build subtrees with [`Node::new`] and [`Node::with_child`], hand them to
/// [`Scene::attach`](crate::Scene::attach), and get them back from
/// [`Scene::detach`](crate::Scene::detach).
#[derive(Clone, Debug)]
pub struct Node<K> {
    /// The node's kind and domain data.
    pub kind: K,
    /// Placement relative to the parent.
    pub local: LocalTransform,
    pub(crate) destroyed: bool,
    pub(crate) children: Vec<Self>,
}

impl<K> Node<K> {
    /// A childless node at the parent's origin.
    pub fn new(kind: K) -> Self {
        Self {
            kind,
            local: LocalTransform::IDENTITY,
            destroyed: false,
            children: Vec::new(),
        }
    }

    /// Builder-style position setter.
    #[must_use]
    pub fn at(mut self, position: Vec2) -> Self {
        self.local.position = position;
        self
    }

    /// Builder-style transform setter.
    #[must_use]
    pub fn with_transform(mut self, local: LocalTransform) -> Self {
        self.local = local;
        self
    }

    /// Builder-style child append.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child; it is drawn and updated after existing children.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Owned children in traversal order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Mark this node destroyed. It is attached as destroyed and swept on the next sweep.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// Returns `true` if the node is marked destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }
}

/// Access granted to [`Kind::update`] for the node being updated.
///
/// The context exposes only the node's own transform, its destroyed flag, and the
/// command queue; other nodes are reached through commands.
#[derive(Debug)]
pub struct UpdateCtx<'a, K: Kind> {
    pub(crate) id: NodeId,
    pub(crate) dt: Duration,
    pub(crate) parent_world: Affine,
    pub(crate) local: &'a mut LocalTransform,
    pub(crate) destroyed: &'a mut bool,
    pub(crate) commands: &'a mut CommandQueue<K>,
}

impl<K: Kind> UpdateCtx<'_, K> {
    /// Id of the node being updated.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Elapsed time for this tick.
    pub fn dt(&self) -> Duration {
        self.dt
    }

    /// The node's local transform.
    pub fn local(&self) -> &LocalTransform {
        self.local
    }

    /// Mutable access to the node's local transform.
    pub fn local_mut(&mut self) -> &mut LocalTransform {
        self.local
    }

    /// Move the node by `delta` in parent space.
    pub fn translate(&mut self, delta: Vec2) {
        self.local.translate(delta);
    }

    /// The node's current world transform.
    pub fn world_transform(&self) -> Affine {
        self.parent_world * self.local.to_affine()
    }

    /// The node's current world position.
    pub fn world_position(&self) -> Point {
        self.parent_world * self.local.origin()
    }

    /// Mark the node destroyed; the removal sweep drops it.
    pub fn destroy(&mut self) {
        *self.destroyed = true;
    }

    /// Returns `true` if the node is marked destroyed.
    pub fn is_destroyed(&self) -> bool {
        *self.destroyed
    }

    /// Queue a command for the next drain.
    pub fn push_command(&mut self, command: Command<K>) {
        self.commands.push(command);
    }
}
