// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed command helpers.

use core::time::Duration;

use grove_scene::{Category, Command};
use kurbo::Vec2;

use crate::creature::Creature;
use crate::entity::Entity;

/// A command whose action runs on [`Creature`]s matching `category`.
///
/// Nodes that match the category but are not creatures are skipped; in debug builds
/// that is treated as a mistake in the category and panics.
pub fn creature_action(
    category: Category,
    action: impl Fn(&mut Creature, Duration) + 'static,
) -> Command<Entity> {
    Command::<Entity>::new(category, move |mut node, dt| {
        match node.kind_mut() {
            Entity::Creature(creature) => action(creature, dt),
            other => {
                if cfg!(debug_assertions) {
                    panic!("creature command for {category:?} reached {other:?}");
                }
            }
        }
    })
}

/// Accelerate the player by `(vx, vy)` for this tick.
pub fn move_player(vx: f64, vy: f64) -> Command<Entity> {
    let delta = Vec2::new(vx, vy);
    creature_action(Category::PLAYER, move |creature, _| creature.accelerate(delta))
}

/// Ask the player to attack. The attack interval still applies.
pub fn player_attack() -> Command<Entity> {
    creature_action(Category::PLAYER, |creature, _| creature.attack())
}
