// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category bitmask used to address commands and filter collision pairs.

bitflags::bitflags! {
    /// Interaction groups a node belongs to.
    ///
    /// Primitive categories are single bits; composite categories such as
    /// [`Category::CREATURE`] are unions of primitives. A node may belong to several
    /// groups at once, and a command or collision filter matches a node when the two
    /// masks share at least one bit (see [`Category::matches`]).
    ///
    /// [`Category::NONE`] is the empty mask. It never matches anything, which is why
    /// it is the default for grouping nodes.
    ///
    /// The mask is 32 bits wide; bits 13 and above are free for application-defined
    /// categories built with [`Category::from_bits_retain`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Category: u32 {
        /// Layer that receives spawned entities (projectiles, pickups).
        const SCENE_GROUND_LAYER = 1 << 0;
        /// The player's creature.
        const PLAYER = 1 << 1;
        /// Creature friendly to the player.
        const FRIENDLY_NPC = 1 << 2;
        /// Creature neutral to both sides.
        const NEUTRAL_NPC = 1 << 3;
        /// Creature hostile to the player.
        const ENEMY_NPC = 1 << 4;
        /// Projectile fired by the player.
        const PLAYER_PROJECTILE = 1 << 5;
        /// Projectile fired by a friendly creature.
        const FRIENDLY_PROJECTILE = 1 << 6;
        /// Projectile fired by a neutral creature.
        const NEUTRAL_PROJECTILE = 1 << 7;
        /// Projectile fired by an enemy.
        const ENEMY_PROJECTILE = 1 << 8;
        /// Pickup collectable by the player.
        const PLAYER_PICKUP = 1 << 9;
        /// Pickup collectable by friendly creatures.
        const FRIENDLY_PICKUP = 1 << 10;
        /// Pickup collectable by neutral creatures.
        const NEUTRAL_PICKUP = 1 << 11;
        /// Pickup collectable by enemies.
        const ENEMY_PICKUP = 1 << 12;

        /// Every creature category.
        const CREATURE = Self::PLAYER.bits()
            | Self::FRIENDLY_NPC.bits()
            | Self::NEUTRAL_NPC.bits()
            | Self::ENEMY_NPC.bits();
        /// Every projectile category.
        const PROJECTILE = Self::PLAYER_PROJECTILE.bits()
            | Self::FRIENDLY_PROJECTILE.bits()
            | Self::NEUTRAL_PROJECTILE.bits()
            | Self::ENEMY_PROJECTILE.bits();
        /// Every pickup category.
        const PICKUP = Self::PLAYER_PICKUP.bits()
            | Self::FRIENDLY_PICKUP.bits()
            | Self::NEUTRAL_PICKUP.bits()
            | Self::ENEMY_PICKUP.bits();
    }
}

impl Category {
    /// The empty mask. Matches nothing.
    pub const NONE: Self = Self::empty();

    /// Returns `true` if the masks share at least one bit.
    ///
    /// This is the test used for command dispatch and collision filtering.
    /// It is symmetric, and always `false` when either side is [`Category::NONE`].
    #[inline]
    pub const fn matches(self, other: Self) -> bool {
        self.bits() & other.bits() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_matches_nothing() {
        assert!(!Category::NONE.matches(Category::NONE));
        assert!(!Category::NONE.matches(Category::all()));
        assert!(!Category::all().matches(Category::NONE));
        assert_eq!(Category::default(), Category::NONE);
    }

    #[test]
    fn composites_contain_their_primitives() {
        assert!(Category::CREATURE.contains(Category::PLAYER | Category::ENEMY_NPC));
        assert!(Category::PROJECTILE.contains(Category::ENEMY_PROJECTILE));
        assert!(Category::PICKUP.contains(Category::PLAYER_PICKUP));
        assert!(!Category::CREATURE.matches(Category::PROJECTILE));
        assert!(!Category::PICKUP.matches(Category::SCENE_GROUND_LAYER));
    }

    #[test]
    fn matches_is_symmetric_intersection() {
        let a = Category::PLAYER | Category::PLAYER_PICKUP;
        assert!(a.matches(Category::CREATURE));
        assert!(Category::CREATURE.matches(a));
        assert!(!a.matches(Category::ENEMY_NPC));
    }

    #[test]
    fn primitive_bits_are_distinct() {
        let primitives = [
            Category::SCENE_GROUND_LAYER,
            Category::PLAYER,
            Category::FRIENDLY_NPC,
            Category::NEUTRAL_NPC,
            Category::ENEMY_NPC,
            Category::PLAYER_PROJECTILE,
            Category::FRIENDLY_PROJECTILE,
            Category::NEUTRAL_PROJECTILE,
            Category::ENEMY_PROJECTILE,
            Category::PLAYER_PICKUP,
            Category::FRIENDLY_PICKUP,
            Category::NEUTRAL_PICKUP,
            Category::ENEMY_PICKUP,
        ];
        let mut seen = Category::NONE;
        for p in primitives {
            assert_eq!(p.bits().count_ones(), 1, "{p:?} must be a single bit");
            assert!(!seen.matches(p), "{p:?} overlaps an earlier primitive");
            seen |= p;
        }
    }

    #[test]
    fn application_bits_round_trip() {
        let custom = Category::from_bits_retain(1 << 20);
        assert!(custom.matches(custom | Category::PLAYER));
        assert!(!custom.matches(Category::all()));
    }
}
