// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category-addressed commands and the FIFO queue that buffers them between ticks.
//!
//! A [`Command`] never names a node. It carries a [`Category`] mask and an action;
//! when the scene drains its queue, the action runs once on every node whose category
//! matches the mask, anywhere in the tree.
//!
//! ```
//! use core::time::Duration;
//! use grove_scene::{Category, Command, Kind, Node, Scene};
//!
//! struct Counter { category: Category, hits: u32 }
//! impl Kind for Counter {
//!     fn category(&self) -> Category { self.category }
//! }
//!
//! let mut scene = Scene::new(Counter { category: Category::NONE, hits: 0 });
//! let root = scene.root();
//! let enemy = scene.attach(root, Node::new(Counter { category: Category::ENEMY_NPC, hits: 0 }));
//!
//! scene.push_command(Command::<Counter>::new(Category::ENEMY_NPC, |mut node, _| {
//!     node.kind_mut().hits += 1;
//! }));
//! scene.update(Duration::from_millis(16));
//! assert_eq!(scene.get(enemy).map(|c| c.hits), Some(1));
//! ```

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::fmt;
use core::time::Duration;

use crate::category::Category;
use crate::node::Kind;
use crate::scene::NodeMut;

/// A deferred action addressed to every node matching a category mask.
///
/// Commands are cheap to clone (the action is reference counted), so a producer can
/// keep a bound command around and push copies of it every tick.
pub struct Command<K: Kind> {
    /// Nodes whose category intersects this mask receive the action.
    pub category: Category,
    action: Rc<dyn Fn(NodeMut<'_, K>, Duration)>,
}

impl<K: Kind> Command<K> {
    /// Create a command running `action` on every node matching `category`.
    pub fn new(category: Category, action: impl Fn(NodeMut<'_, K>, Duration) + 'static) -> Self {
        Self {
            category,
            action: Rc::new(action),
        }
    }

    /// Returns `true` if a node of category `node` should receive this command.
    #[inline]
    pub fn targets(&self, node: Category) -> bool {
        self.category.matches(node)
    }

    /// Run the action on `node`, bypassing the category check.
    pub fn invoke(&self, node: NodeMut<'_, K>, dt: Duration) {
        (self.action)(node, dt);
    }
}

impl<K: Kind> Clone for Command<K> {
    fn clone(&self) -> Self {
        Self {
            category: self.category,
            action: Rc::clone(&self.action),
        }
    }
}

impl<K: Kind> fmt::Debug for Command<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Unbounded first-in, first-out buffer of commands.
///
/// Single reader, single writer: the queue has no internal synchronization.
pub struct CommandQueue<K: Kind> {
    queue: VecDeque<Command<K>>,
}

impl<K: Kind> CommandQueue<K> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Append a command. Amortized O(1).
    pub fn push(&mut self, command: Command<K>) {
        self.queue.push_back(command);
    }

    /// Remove and return the oldest command, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<Command<K>> {
        self.queue.pop_front()
    }

    /// Returns `true` if no command is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of queued commands.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Drop every queued command.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl<K: Kind> Default for CommandQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kind> fmt::Debug for CommandQueue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandQueue")
            .field("len", &self.queue.len())
            .finish()
    }
}

impl<K: Kind> Extend<Command<K>> for CommandQueue<K> {
    fn extend<I: IntoIterator<Item = Command<K>>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    struct Unit;
    impl Kind for Unit {}

    fn tagged(bits: u32) -> Command<Unit> {
        Command::new(Category::from_bits_retain(bits), |_, _| {})
    }

    #[test]
    fn pops_in_push_order() {
        let mut queue = CommandQueue::new();
        queue.push(tagged(1));
        queue.push(tagged(2));
        queue.push(tagged(4));
        assert_eq!(queue.len(), 3);

        let order: Vec<u32> = core::iter::from_fn(|| queue.pop())
            .map(|c| c.category.bits())
            .collect();
        assert_eq!(order, [1, 2, 4]);
        assert!(queue.pop().is_none(), "fourth pop must report an empty queue");
        assert!(queue.is_empty());
    }

    #[test]
    fn clone_shares_the_action() {
        let original = tagged(8);
        let copy = original.clone();
        assert_eq!(copy.category, original.category);
        assert!(Rc::ptr_eq(&copy.action, &original.action));
    }

    #[test]
    fn none_category_targets_nothing() {
        let command = tagged(0);
        assert!(!command.targets(Category::all()));
        assert!(tagged(2).targets(Category::PLAYER));
    }

    #[test]
    fn extend_and_clear() {
        let mut queue = CommandQueue::default();
        queue.extend([tagged(1), tagged(2)]);
        assert_eq!(queue.len(), 2);
        queue.clear();
        assert!(queue.is_empty());
    }
}
