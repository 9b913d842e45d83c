// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Entities: a small top-down shooter built on [`grove_scene`].
//!
//! - [`Entity`] is the scene's node kind: layers, sprites, creatures, projectiles, pickups, and text.
//! - [`data`] holds the static tables for creatures, projectiles, and pickups.
//! - [`World`] owns the scene and runs the tick: commands, updates, collision rules, sweep, spawning.
//! - [`Player`] maps input [`Action`]s to commands.
//!
//! ## Collision rules
//!
//! | Pair | Effect |
//! |------|--------|
//! | player, pickup | the pickup applies its action to the player and is destroyed |
//! | player, enemy | the player loses the enemy's hitpoints and the enemy is killed |
//! | player, enemy projectile | the player takes the projectile's damage |
//! | player projectile, enemy | the enemy takes the projectile's damage |
//!
//! Projectiles are destroyed on impact. Creatures at zero hitpoints are destroyed, and
//! a killed enemy may drop a pickup where it died.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use grove_entities::{Action, LevelStatus, Player, World, WorldConfig};
//!
//! let mut world = World::new(WorldConfig::default());
//! let player = Player::default();
//! for _ in 0..60 {
//!     player.handle_realtime_input([Action::MoveRight], world.commands_mut());
//!     world.update(Duration::from_millis(16));
//! }
//! assert_eq!(world.level_status(), LevelStatus::InProgress);
//! assert!(world.player().is_some());
//! ```

mod actions;
mod creature;
pub mod data;
mod entity;
mod layer;
mod pickup;
mod player;
mod projectile;
mod sprite;
mod text;
mod world;

pub use actions::{creature_action, move_player, player_attack};
pub use creature::{Creature, HEALTH_LABEL_OFFSET};
pub use entity::Entity;
pub use layer::Layer;
pub use pickup::{DROP_DRIFT, Pickup};
pub use player::{Action, LevelStatus, Player};
pub use projectile::Projectile;
pub use sprite::Sprite;
pub use text::{CHARACTER_SIZE, Text};
pub use world::{SpawnPoint, TickReport, World, WorldConfig, WorldLayer};
