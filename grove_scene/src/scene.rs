// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The arena-backed scene tree and its per-tick phases.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Affine, Point, Rect};

use crate::broadphase::{Broadphase, FlatPairs};
use crate::category::Category;
use crate::collision::{CollisionPair, CollisionSet};
use crate::command::{Command, CommandQueue};
use crate::error::DetachError;
use crate::node::{DrawTarget, Kind, Node, UpdateCtx};
use crate::types::{LocalTransform, NodeId};
use crate::util::{has_area, transform_rect_bbox};

/// A tree of nodes of kind `K`, stored in a generational arena.
///
/// Each slot owns its kind and the ids of its children; the parent link is a plain
/// [`NodeId`], never a second owner. The scene also owns the [`CommandQueue`] that
/// producers push into and [`Scene::drain_commands`] consumes.
pub struct Scene<K: Kind> {
    nodes: Vec<Option<Slot<K>>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: NodeId,
    commands: CommandQueue<K>,
}

impl<K: Kind> core::fmt::Debug for Scene<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scene")
            .field("root", &self.root)
            .field("nodes", &self.len())
            .field("free_list", &self.free_list.len())
            .field("pending_commands", &self.commands.len())
            .finish_non_exhaustive()
    }
}

struct Slot<K> {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: LocalTransform,
    destroyed: bool,
    kind: K,
}

impl<K: Kind> Scene<K> {
    /// Create a scene whose root node has kind `root`.
    pub fn new(root: K) -> Self {
        let mut scene = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: NodeId::new(0, 0),
            commands: CommandQueue::new(),
        };
        scene.root = scene.alloc(None, LocalTransform::IDENTITY, false, root);
        scene
    }

    /// The root node. It lives as long as the scene.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, including the root.
    #[allow(
        clippy::len_without_is_empty,
        reason = "a scene always contains its root"
    )]
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Returns `true` if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes.get(id.idx()).is_some_and(Option::is_some)
            && self.generations.get(id.idx()) == Some(&id.1)
    }

    /// Attach an owned subtree as the last child of `parent`.
    ///
    /// Ownership transfers to the scene. Returns the id of the subtree's root; ids for
    /// its descendants can be read back with [`Scene::children_of`].
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a live node.
    pub fn attach(&mut self, parent: NodeId, node: Node<K>) -> NodeId {
        assert!(self.is_alive(parent), "attach to dangling NodeId {parent:?}");
        self.insert_subtree(parent, node)
    }

    /// Remove `child` and its subtree from `parent`, returning ownership of it.
    ///
    /// Ids inside the detached subtree become stale. Reattaching the returned node
    /// allocates fresh ids.
    pub fn detach(&mut self, parent: NodeId, child: NodeId) -> Result<Node<K>, DetachError> {
        if !self.is_alive(parent) || self.parent_of(child) != Some(parent) {
            return Err(DetachError { parent, child });
        }
        self.unlink_parent(child, parent);
        Ok(self.extract_subtree(child))
    }

    /// Parent of `id`, or `None` for the root and stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.slot_opt(id).and_then(|slot| slot.parent)
    }

    /// Children of `id` in traversal order. Empty for stale ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.slot_opt(id).map_or(&[], |slot| &slot.children)
    }

    /// The kind stored at `id`.
    pub fn get(&self, id: NodeId) -> Option<&K> {
        self.slot_opt(id).map(|slot| &slot.kind)
    }

    /// Mutable access to the kind stored at `id`.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut K> {
        self.slot_opt_mut(id).map(|slot| &mut slot.kind)
    }

    /// Local transform of `id`.
    pub fn local(&self, id: NodeId) -> Option<&LocalTransform> {
        self.slot_opt(id).map(|slot| &slot.local)
    }

    /// Mutable local transform of `id`.
    pub fn local_mut(&mut self, id: NodeId) -> Option<&mut LocalTransform> {
        self.slot_opt_mut(id).map(|slot| &mut slot.local)
    }

    /// A mutable handle to a live node, as handed to command actions.
    pub fn node_mut(&mut self, id: NodeId) -> Option<NodeMut<'_, K>> {
        if self.is_alive(id) {
            Some(NodeMut { scene: self, id })
        } else {
            None
        }
    }

    /// Category of `id`.
    pub fn category(&self, id: NodeId) -> Option<Category> {
        self.get(id).map(Kind::category)
    }

    /// Composition of the local transforms from the root down to `id`.
    pub fn world_transform(&self, id: NodeId) -> Option<Affine> {
        self.is_alive(id).then(|| self.world_of(id))
    }

    /// World-space position of the local origin of `id`.
    pub fn world_position(&self, id: NodeId) -> Option<Point> {
        self.world_transform(id).map(|world| world * Point::ORIGIN)
    }

    /// World-space axis-aligned bounds of `id`, or `None` if it has no bounds.
    pub fn world_bounds(&self, id: NodeId) -> Option<Rect> {
        let local = self.get(id)?.local_bounds()?;
        Some(transform_rect_bbox(self.world_of(id), local))
    }

    /// Mark `id` destroyed. It stays in the tree until the next sweep.
    ///
    /// Stale ids are ignored.
    pub fn destroy(&mut self, id: NodeId) {
        if let Some(slot) = self.slot_opt_mut(id) {
            slot.destroyed = true;
        }
    }

    /// Returns `true` if `id` is marked destroyed or has already been swept.
    pub fn is_destroyed(&self, id: NodeId) -> bool {
        self.slot_opt(id).is_none_or(|slot| slot.destroyed)
    }

    /// Queue a command for the next drain.
    pub fn push_command(&mut self, command: Command<K>) {
        self.commands.push(command);
    }

    /// The scene's command queue.
    pub fn commands_mut(&mut self) -> &mut CommandQueue<K> {
        &mut self.commands
    }

    /// Number of commands waiting for the next drain.
    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    /// Run `command` on every live node whose category matches, pre-order.
    ///
    /// Children are visited whether or not their parent matched. Children attached by
    /// the action itself are visited too.
    pub fn dispatch(&mut self, command: &Command<K>, dt: Duration) {
        self.dispatch_from(self.root, command, dt);
    }

    fn dispatch_from(&mut self, id: NodeId, command: &Command<K>, dt: Duration) {
        if command.targets(self.slot(id).kind.category()) {
            command.invoke(NodeMut { scene: self, id }, dt);
        }
        let mut i = 0;
        while let Some(&child) = self.slot(id).children.get(i) {
            self.dispatch_from(child, command, dt);
            i += 1;
        }
    }

    /// Pop every queued command, oldest first, dispatching each to the whole tree
    /// before the next. Returns the number of commands dispatched.
    pub fn drain_commands(&mut self, dt: Duration) -> usize {
        let _span = tracing::trace_span!("drain_commands").entered();
        let mut drained = 0;
        while let Some(command) = self.commands.pop() {
            self.dispatch(&command, dt);
            drained += 1;
        }
        tracing::trace!(drained, "commands dispatched");
        drained
    }

    /// Call [`Kind::update`] on every node, pre-order. Returns the number of nodes
    /// updated.
    ///
    /// A node marked destroyed is still updated, and so are its children.
    pub fn update_nodes(&mut self, dt: Duration) -> usize {
        let _span = tracing::trace_span!("update_nodes").entered();
        let updated = update_subtree(
            &mut self.nodes,
            &mut self.commands,
            self.root,
            Affine::IDENTITY,
            dt,
        );
        tracing::trace!(updated, queued = self.commands.len(), "nodes updated");
        updated
    }

    /// Drain the command queue, then update every node.
    ///
    /// Commands queued by [`Kind::update`] wait for the next call.
    pub fn update(&mut self, dt: Duration) {
        self.drain_commands(dt);
        self.update_nodes(dt);
    }

    /// Every pair of distinct collidable nodes whose world bounds overlap.
    ///
    /// A node is collidable when it is not marked destroyed and its
    /// [`Kind::local_bounds`] has positive area. Uses the all-pairs backend.
    pub fn detect_collisions(&self) -> CollisionSet {
        self.detect_collisions_with(&mut FlatPairs::new())
    }

    /// Like [`Scene::detect_collisions`], using a caller-provided broadphase backend.
    pub fn detect_collisions_with<B: Broadphase>(&self, backend: &mut B) -> CollisionSet {
        let _span = tracing::trace_span!("detect_collisions").entered();
        backend.clear();
        let mut collidable = 0_usize;
        self.walk_world(self.root, Affine::IDENTITY, &mut |id, slot, world| {
            if slot.destroyed {
                return;
            }
            if let Some(local) = slot.kind.local_bounds() {
                let bounds = transform_rect_bbox(world, local);
                if has_area(bounds) {
                    backend.insert(id.idx(), bounds);
                    collidable += 1;
                }
            }
        });
        let mut pairs = CollisionSet::new();
        backend.visit_pairs(|a, b| {
            pairs.insert(CollisionPair::new(self.id_at(a), self.id_at(b)));
        });
        tracing::trace!(collidable, pairs = pairs.len(), "collisions detected");
        pairs
    }

    /// Orient `pair` so that its first member matches `first` and its second member
    /// matches `second`.
    ///
    /// Returns `true` and leaves the pair alone if it already matches in order, returns
    /// `true` and swaps the members if it matches in the opposite order, and returns
    /// `false` otherwise. Stale members match nothing.
    pub fn match_categories(
        &self,
        pair: &mut CollisionPair,
        first: Category,
        second: Category,
    ) -> bool {
        let a = self.category(pair.first).unwrap_or(Category::NONE);
        let b = self.category(pair.second).unwrap_or(Category::NONE);
        if a.matches(first) && b.matches(second) {
            true
        } else if a.matches(second) && b.matches(first) {
            pair.swap();
            true
        } else {
            false
        }
    }

    /// Remove every destroyed node, with its subtree, bottom-up in one pass.
    ///
    /// Each node is removed by its parent after the parent's children were swept, so a
    /// destroyed node and a destroyed ancestor go in the same pass. [`Kind::on_remove`]
    /// runs for every dropped node, destroyed or not, with its world transform. The root
    /// is never removed. Returns the number of nodes dropped.
    pub fn sweep_removals(&mut self) -> usize {
        let _span = tracing::trace_span!("sweep_removals").entered();
        let mut removed = 0;
        let root_world = self.slot(self.root).local.to_affine();
        self.sweep_subtree(self.root, root_world, &mut removed);
        if removed > 0 {
            tracing::debug!(removed, live = self.len(), "swept destroyed nodes");
        }
        removed
    }

    fn sweep_subtree(&mut self, id: NodeId, world: Affine, removed: &mut usize) {
        let children = core::mem::take(&mut self.slot_mut(id).children);
        for &child in &children {
            let child_world = world * self.slot(child).local.to_affine();
            self.sweep_subtree(child, child_world, removed);
        }
        let (doomed, kept): (Vec<NodeId>, Vec<NodeId>) = children
            .into_iter()
            .partition(|&child| self.slot(child).destroyed);
        self.slot_mut(id).children = kept;
        for child in doomed {
            self.release_subtree(child, world, removed);
        }
    }

    fn release_subtree(&mut self, id: NodeId, parent_world: Affine, removed: &mut usize) {
        let Some(slot) = self.free_slot(id) else {
            return;
        };
        let world = parent_world * slot.local.to_affine();
        slot.kind.on_remove(world, &mut self.commands);
        *removed += 1;
        for child in slot.children {
            self.release_subtree(child, world, removed);
        }
    }

    /// Call [`Kind::draw`] for every node, pre-order, with its world transform.
    ///
    /// Later siblings and children draw over earlier ones.
    pub fn draw<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        self.walk_world(self.root, Affine::IDENTITY, &mut |_, slot, world| {
            slot.kind.draw(world, &mut *target);
        });
    }

    /// Iterate over live node ids, pre-order from the root.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder {
            scene: self,
            stack: alloc::vec![self.root],
        }
    }

    fn walk_world<F: FnMut(NodeId, &Slot<K>, Affine)>(
        &self,
        id: NodeId,
        parent_world: Affine,
        f: &mut F,
    ) {
        let slot = self.slot(id);
        let world = parent_world * slot.local.to_affine();
        f(id, slot, world);
        for &child in &slot.children {
            self.walk_world(child, world, f);
        }
    }

    fn world_of(&self, mut id: NodeId) -> Affine {
        let mut world = self.slot(id).local.to_affine();
        while let Some(parent) = self.slot(id).parent {
            world = self.slot(parent).local.to_affine() * world;
            id = parent;
        }
        world
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "slots are allocated through NodeId, which holds a u32 index"
    )]
    fn id_at(&self, idx: usize) -> NodeId {
        NodeId::new(idx as u32, self.generations[idx])
    }

    fn alloc(&mut self, parent: Option<NodeId>, local: LocalTransform, destroyed: bool, kind: K) -> NodeId {
        let slot = Slot {
            parent,
            children: Vec::new(),
            local,
            destroyed,
            kind,
        };
        let idx = if let Some(idx) = self.free_list.pop() {
            self.generations[idx] = self.generations[idx].saturating_add(1);
            self.nodes[idx] = Some(slot);
            idx
        } else {
            self.nodes.push(Some(slot));
            self.generations.push(1);
            self.nodes.len() - 1
        };
        let id = self.id_at(idx);
        if let Some(p) = parent {
            self.slot_mut(p).children.push(id);
        }
        id
    }

    fn insert_subtree(&mut self, parent: NodeId, node: Node<K>) -> NodeId {
        let Node {
            kind,
            local,
            destroyed,
            children,
        } = node;
        let id = self.alloc(Some(parent), local, destroyed, kind);
        for child in children {
            self.insert_subtree(id, child);
        }
        id
    }

    fn extract_subtree(&mut self, id: NodeId) -> Node<K> {
        let Some(slot) = self.free_slot(id) else {
            unreachable!("extracting dangling NodeId {id:?}");
        };
        let children = slot
            .children
            .into_iter()
            .map(|child| self.extract_subtree(child))
            .collect();
        Node {
            kind: slot.kind,
            local: slot.local,
            destroyed: slot.destroyed,
            children,
        }
    }

    fn free_slot(&mut self, id: NodeId) -> Option<Slot<K>> {
        if !self.is_alive(id) {
            return None;
        }
        let slot = self.nodes[id.idx()].take();
        self.free_list.push(id.idx());
        slot
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let siblings = &mut self.slot_mut(parent).children;
        if let Some(pos) = siblings.iter().position(|&c| c == id) {
            siblings.remove(pos);
        }
        self.slot_mut(id).parent = None;
    }

    fn slot(&self, id: NodeId) -> &Slot<K> {
        self.slot_opt(id).expect("dangling NodeId")
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut Slot<K> {
        self.slot_opt_mut(id).expect("dangling NodeId")
    }

    fn slot_opt(&self, id: NodeId) -> Option<&Slot<K>> {
        if self.generations.get(id.idx()) != Some(&id.1) {
            return None;
        }
        self.nodes.get(id.idx())?.as_ref()
    }

    fn slot_opt_mut(&mut self, id: NodeId) -> Option<&mut Slot<K>> {
        if self.generations.get(id.idx()) != Some(&id.1) {
            return None;
        }
        self.nodes.get_mut(id.idx())?.as_mut()
    }
}

/// Pre-order update walk over disjoint borrows of the arena and the queue.
fn update_subtree<K: Kind>(
    nodes: &mut [Option<Slot<K>>],
    commands: &mut CommandQueue<K>,
    id: NodeId,
    parent_world: Affine,
    dt: Duration,
) -> usize {
    let Some(slot) = nodes.get_mut(id.idx()).and_then(Option::as_mut) else {
        return 0;
    };
    let mut ctx = UpdateCtx {
        id,
        dt,
        parent_world,
        local: &mut slot.local,
        destroyed: &mut slot.destroyed,
        commands: &mut *commands,
    };
    slot.kind.update(&mut ctx);
    let world = parent_world * slot.local.to_affine();
    // Update cannot change structure, so the child list can be lent out for the walk.
    let children = core::mem::take(&mut slot.children);
    let mut updated = 1;
    for &child in &children {
        updated += update_subtree(nodes, commands, child, world, dt);
    }
    if let Some(slot) = nodes.get_mut(id.idx()).and_then(Option::as_mut) {
        slot.children = children;
    }
    updated
}

/// Mutable handle to one live node, handed to [`Command`] actions.
///
/// Through the handle an action can change the node's kind and transform, mark it
/// destroyed, and attach new children. It cannot remove nodes.
pub struct NodeMut<'a, K: Kind> {
    scene: &'a mut Scene<K>,
    id: NodeId,
}

impl<K: Kind> core::fmt::Debug for NodeMut<'_, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeMut")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<K: Kind> NodeMut<'_, K> {
    /// Id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's kind.
    pub fn kind(&self) -> &K {
        &self.scene.slot(self.id).kind
    }

    /// Mutable access to the node's kind.
    pub fn kind_mut(&mut self) -> &mut K {
        &mut self.scene.slot_mut(self.id).kind
    }

    /// The node's local transform.
    pub fn local(&self) -> &LocalTransform {
        &self.scene.slot(self.id).local
    }

    /// Mutable access to the node's local transform.
    pub fn local_mut(&mut self) -> &mut LocalTransform {
        &mut self.scene.slot_mut(self.id).local
    }

    /// The node's category.
    pub fn category(&self) -> Category {
        self.kind().category()
    }

    /// The node's parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.scene.slot(self.id).parent
    }

    /// The node's world transform.
    pub fn world_transform(&self) -> Affine {
        self.scene.world_of(self.id)
    }

    /// World-space position of the node's local origin.
    pub fn world_position(&self) -> Point {
        self.world_transform() * Point::ORIGIN
    }

    /// World-space axis-aligned bounds, if the node has bounds.
    pub fn world_bounds(&self) -> Option<Rect> {
        self.scene.world_bounds(self.id)
    }

    /// Mark the node destroyed.
    pub fn destroy(&mut self) {
        self.scene.slot_mut(self.id).destroyed = true;
    }

    /// Returns `true` if the node is marked destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.scene.slot(self.id).destroyed
    }

    /// Attach `child` as the node's last child.
    pub fn attach(&mut self, child: Node<K>) -> NodeId {
        self.scene.insert_subtree(self.id, child)
    }
}

/// Pre-order iterator over live node ids. See [`Scene::pre_order`].
#[derive(Debug)]
pub struct PreOrder<'a, K: Kind> {
    scene: &'a Scene<K>,
    stack: Vec<NodeId>,
}

impl<K: Kind> Iterator for PreOrder<'_, K> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.scene.children_of(id).iter().rev().copied());
        Some(id)
    }
}
