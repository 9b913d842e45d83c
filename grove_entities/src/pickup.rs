// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pickups dropped by defeated enemies.

use grove_scene::Category;
use kurbo::{Rect, Vec2};

use crate::creature::Creature;
use crate::data::{PickupData, PickupType};

/// Drift applied to freshly dropped pickups, in units per second.
pub const DROP_DRIFT: Vec2 = Vec2::new(0.0, 1.0);

/// A collectable item.
#[derive(Clone, Debug, PartialEq)]
pub struct Pickup {
    ty: PickupType,
    velocity: Vec2,
}

impl Pickup {
    /// A pickup of type `ty`, drifting slowly down.
    pub fn new(ty: PickupType) -> Self {
        Self {
            ty,
            velocity: DROP_DRIFT,
        }
    }

    /// The pickup's type.
    pub fn ty(&self) -> PickupType {
        self.ty
    }

    /// Tuning table entry.
    pub fn data(&self) -> &'static PickupData {
        self.ty.data()
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Apply the pickup's effect to `creature`.
    pub fn apply(&self, creature: &mut Creature) {
        (self.data().action)(creature);
    }

    /// Pickups are only collectable by the player.
    pub fn category(&self) -> Category {
        Category::PLAYER_PICKUP
    }

    /// Collision box, centered on the origin.
    pub fn local_bounds(&self) -> Rect {
        let half = self.data().size / 2.0;
        Rect::new(-half, -half, half, half)
    }
}
