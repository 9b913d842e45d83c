// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projectiles fired by creatures.

use grove_scene::Category;
use kurbo::{Rect, Vec2};

use crate::data::{ProjectileData, ProjectileType};

/// A projectile travelling at constant velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    ty: ProjectileType,
    velocity: Vec2,
}

impl Projectile {
    /// A motionless projectile of type `ty`.
    pub fn new(ty: ProjectileType) -> Self {
        Self {
            ty,
            velocity: Vec2::ZERO,
        }
    }

    /// Builder-style velocity setter.
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// The projectile's type.
    pub fn ty(&self) -> ProjectileType {
        self.ty
    }

    /// Tuning table entry.
    pub fn data(&self) -> &'static ProjectileData {
        self.ty.data()
    }

    /// Hitpoints removed from the creature it hits.
    pub fn damage(&self) -> i32 {
        self.data().damage
    }

    /// Maximum speed from the tuning table.
    pub fn max_speed(&self) -> f64 {
        self.data().speed
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Category by firing side.
    pub fn category(&self) -> Category {
        match self.ty {
            ProjectileType::PlayerFire => Category::PLAYER_PROJECTILE,
            ProjectileType::EnemyFire => Category::ENEMY_PROJECTILE,
        }
    }

    /// Collision box, centered on the origin.
    pub fn local_bounds(&self) -> Rect {
        let half = self.data().size / 2.0;
        Rect::new(-half, -half, half, half)
    }
}
