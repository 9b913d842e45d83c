// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Scene: a Kurbo-native 2D scene tree for small games.
//!
//! - Represents a hierarchy of nodes with local transforms, a category bitmask, and a destroyed flag.
//! - Routes category-addressed [`Command`]s to every matching node, with no references between sender and receiver.
//! - Finds every pair of nodes whose world-space bounds overlap, each pair exactly once.
//! - Prunes destroyed nodes in a dedicated bottom-up sweep, so no traversal is ever invalidated mid-flight.
//!
//! ## The tick
//!
//! A host drives the scene once per frame, always in this order:
//!
//! 1. [`Scene::drain_commands`]: pop every queued command and dispatch it to the whole tree.
//! 2. [`Scene::update_nodes`]: call [`Kind::update`] pre-order. Commands pushed here wait for the next tick.
//! 3. [`Scene::detect_collisions`]: build the [`CollisionSet`].
//! 4. The host resolves pairs (for example with [`Scene::match_categories`]) and calls [`Scene::destroy`].
//! 5. [`Scene::sweep_removals`]: drop destroyed nodes, calling [`Kind::on_remove`].
//! 6. The host attaches newly spawned nodes with [`Scene::attach`].
//!
//! [`Scene::update`] runs steps 1 and 2.
//!
//! ## Ownership
//!
//! Nodes live in a generational arena inside the [`Scene`]. A parent owns its children; the
//! parent link is a [`NodeId`], never a second owner. Subtrees outside the scene are plain
//! owned [`Node`] values: build them with [`Node::with_child`], move them in with
//! [`Scene::attach`], and move them out again with [`Scene::detach`]. A [`NodeId`] whose node
//! was detached or swept is stale and never aliases a later node.
//!
//! ## Kinds
//!
//! A scene is generic over one [`Kind`] type, typically an enum with one variant per node kind.
//! Every hook has a default, so grouping layers need no code at all.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use grove_scene::{Category, Kind, Node, Scene};
//! use kurbo::{Rect, Vec2};
//!
//! enum Thing {
//!     Layer,
//!     Hero,
//!     Slime,
//! }
//!
//! impl Kind for Thing {
//!     fn category(&self) -> Category {
//!         match self {
//!             Self::Layer => Category::NONE,
//!             Self::Hero => Category::PLAYER,
//!             Self::Slime => Category::ENEMY_NPC,
//!         }
//!     }
//!
//!     fn local_bounds(&self) -> Option<Rect> {
//!         match self {
//!             Self::Layer => None,
//!             _ => Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
//!         }
//!     }
//! }
//!
//! let mut scene = Scene::new(Thing::Layer);
//! let layer = scene.attach(scene.root(), Node::new(Thing::Layer));
//! let hero = scene.attach(layer, Node::new(Thing::Hero));
//! let slime = scene.attach(layer, Node::new(Thing::Slime).at(Vec2::new(5.0, 5.0)));
//!
//! scene.update(Duration::from_millis(16));
//! for mut pair in scene.detect_collisions() {
//!     if scene.match_categories(&mut pair, Category::ENEMY_NPC, Category::PLAYER) {
//!         assert_eq!((pair.first, pair.second), (slime, hero));
//!         scene.destroy(pair.first);
//!     }
//! }
//! assert_eq!(scene.sweep_removals(), 1);
//! assert!(!scene.is_alive(slime));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo and `tracing`.
//! - `libm`: Kurbo float math without `std`.
//! - `broadphase_grid` (default): the [`GridPairs`] uniform-grid backend.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod broadphase;
mod category;
mod collision;
mod command;
mod error;
mod node;
mod scene;
mod types;
mod util;

#[cfg(feature = "broadphase_grid")]
pub use broadphase::GridPairs;
pub use broadphase::{Broadphase, FlatPairs};
pub use category::Category;
pub use collision::{CollisionPair, CollisionSet};
pub use command::{Command, CommandQueue};
pub use error::DetachError;
pub use node::{DrawTarget, Kind, Node, UpdateCtx};
pub use scene::{NodeMut, PreOrder, Scene};
pub use types::{LocalTransform, NodeId, TextureId};
