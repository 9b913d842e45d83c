// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static tuning tables for creatures, projectiles, and pickups.

use core::time::Duration;

use grove_scene::TextureId;

use crate::creature::Creature;

/// Texture keys understood by the rendering collaborator.
pub mod textures {
    use grove_scene::TextureId;

    /// The player's creature.
    pub const PLAYER: TextureId = TextureId(0);
    /// Tiled background.
    pub const GRASS: TextureId = TextureId(1);
    /// Fire projectile, shared by both sides.
    pub const FIRE_PROJECTILE: TextureId = TextureId(2);
    /// Bunny creature.
    pub const BUNNY: TextureId = TextureId(3);
    /// Bear creature.
    pub const BEAR: TextureId = TextureId(4);
    /// Title screen backdrop.
    pub const TITLE_SCREEN: TextureId = TextureId(5);
    /// Health refill pickup.
    pub const HEALTH_REFILL: TextureId = TextureId(6);
}

/// One leg of a scripted path: head towards `angle` degrees for `distance` units.
///
/// Angles are measured clockwise from the positive x axis in y-down space, so
/// `90.0` heads down the screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Direction {
    /// Heading in degrees.
    pub angle: f64,
    /// Distance to travel before the next leg.
    pub distance: f64,
}

impl Direction {
    /// A path leg.
    pub const fn new(angle: f64, distance: f64) -> Self {
        Self { angle, distance }
    }
}

/// Down, up twice as far, then back down to the start.
const PATROL: &[Direction] = &[
    Direction::new(90.0, 150.0),
    Direction::new(-90.0, 300.0),
    Direction::new(90.0, 150.0),
];

/// Creature kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CreatureType {
    /// The player's creature.
    Player,
    /// Small, quick, fragile enemy.
    Bunny,
    /// Large, slow, tough enemy.
    Bear,
}

/// Tuning for one [`CreatureType`].
#[derive(Clone, Debug, PartialEq)]
pub struct CreatureData {
    /// Starting and maximum hitpoints.
    pub hitpoints: i32,
    /// Movement speed in units per second.
    pub speed: f64,
    /// Sprite texture.
    pub texture: TextureId,
    /// Side of the square sprite and collision box.
    pub size: f64,
    /// Minimum time between attacks. Zero means the creature never attacks.
    pub attack_interval: Duration,
    /// Scripted path, cycled forever. Empty for creatures steered by commands.
    pub directions: &'static [Direction],
}

const PLAYER_DATA: CreatureData = CreatureData {
    hitpoints: 100,
    speed: 75.0,
    texture: textures::PLAYER,
    size: 32.0,
    attack_interval: Duration::from_secs(1),
    directions: &[],
};

const BUNNY_DATA: CreatureData = CreatureData {
    hitpoints: 5,
    speed: 100.0,
    texture: textures::BUNNY,
    size: 24.0,
    attack_interval: Duration::from_millis(2500),
    directions: PATROL,
};

const BEAR_DATA: CreatureData = CreatureData {
    hitpoints: 25,
    speed: 50.0,
    texture: textures::BEAR,
    size: 48.0,
    attack_interval: Duration::from_secs(4),
    directions: PATROL,
};

impl CreatureType {
    /// Every creature type.
    pub const ALL: [Self; 3] = [Self::Player, Self::Bunny, Self::Bear];

    /// Tuning table entry.
    pub fn data(self) -> &'static CreatureData {
        match self {
            Self::Player => &PLAYER_DATA,
            Self::Bunny => &BUNNY_DATA,
            Self::Bear => &BEAR_DATA,
        }
    }

    /// Returns `true` for creatures on the player's side.
    pub fn is_allied(self) -> bool {
        self == Self::Player
    }
}

/// Projectile kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProjectileType {
    /// Fired by the player.
    PlayerFire,
    /// Fired by enemies.
    EnemyFire,
}

/// Tuning for one [`ProjectileType`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectileData {
    /// Hitpoints removed on impact.
    pub damage: i32,
    /// Travel speed in units per second.
    pub speed: f64,
    /// Sprite texture.
    pub texture: TextureId,
    /// Side of the square sprite and collision box.
    pub size: f64,
}

const FIRE: ProjectileData = ProjectileData {
    damage: 5,
    speed: 200.0,
    texture: textures::FIRE_PROJECTILE,
    size: 8.0,
};

impl ProjectileType {
    /// Tuning table entry.
    pub fn data(self) -> &'static ProjectileData {
        match self {
            Self::PlayerFire | Self::EnemyFire => &FIRE,
        }
    }

    /// The projectile a creature on the given side fires.
    pub fn fired_by(allied: bool) -> Self {
        if allied { Self::PlayerFire } else { Self::EnemyFire }
    }
}

/// Pickup kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PickupType {
    /// Restores some hitpoints.
    HealthRefill,
}

/// Tuning for one [`PickupType`].
#[derive(Copy, Clone, Debug)]
pub struct PickupData {
    /// Effect on the creature that collects the pickup.
    pub action: fn(&mut Creature),
    /// Sprite texture.
    pub texture: TextureId,
    /// Side of the square sprite and collision box.
    pub size: f64,
}

const HEALTH_REFILL: PickupData = PickupData {
    action: |creature| creature.heal(15),
    texture: textures::HEALTH_REFILL,
    size: 16.0,
};

impl PickupType {
    /// Every pickup type, for random drops.
    pub const ALL: [Self; 1] = [Self::HealthRefill];

    /// Tuning table entry.
    pub fn data(self) -> &'static PickupData {
        match self {
            Self::HealthRefill => &HEALTH_REFILL,
        }
    }
}
