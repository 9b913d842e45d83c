// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of node kinds stored in the world's scene.

use grove_scene::{Category, CommandQueue, DrawTarget, Kind, UpdateCtx};
use kurbo::{Affine, Rect};

use crate::creature::Creature;
use crate::layer::Layer;
use crate::pickup::Pickup;
use crate::projectile::Projectile;
use crate::sprite::Sprite;
use crate::text::Text;

/// Every kind of node in a game scene.
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    /// Grouping layer.
    Layer(Layer),
    /// Static textured rectangle.
    Sprite(Sprite),
    /// Player or NPC.
    Creature(Creature),
    /// Projectile in flight.
    Projectile(Projectile),
    /// Collectable item.
    Pickup(Pickup),
    /// Text label.
    Text(Text),
}

impl Entity {
    /// The creature, if this is one.
    pub fn as_creature(&self) -> Option<&Creature> {
        match self {
            Self::Creature(c) => Some(c),
            _ => None,
        }
    }

    /// Mutable access to the creature, if this is one.
    pub fn as_creature_mut(&mut self) -> Option<&mut Creature> {
        match self {
            Self::Creature(c) => Some(c),
            _ => None,
        }
    }

    /// The projectile, if this is one.
    pub fn as_projectile(&self) -> Option<&Projectile> {
        match self {
            Self::Projectile(p) => Some(p),
            _ => None,
        }
    }

    /// The pickup, if this is one.
    pub fn as_pickup(&self) -> Option<&Pickup> {
        match self {
            Self::Pickup(p) => Some(p),
            _ => None,
        }
    }

    /// Mutable access to the text, if this is a label.
    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl Kind for Entity {
    fn category(&self) -> Category {
        match self {
            Self::Layer(layer) => layer.category,
            Self::Creature(c) => c.category(),
            Self::Projectile(p) => p.category(),
            Self::Pickup(p) => p.category(),
            Self::Sprite(_) | Self::Text(_) => Category::NONE,
        }
    }

    fn local_bounds(&self) -> Option<Rect> {
        match self {
            Self::Creature(c) => Some(c.local_bounds()),
            Self::Projectile(p) => Some(p.local_bounds()),
            Self::Pickup(p) => Some(p.local_bounds()),
            Self::Layer(_) | Self::Sprite(_) | Self::Text(_) => None,
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_, Self>) {
        let dt = ctx.dt().as_secs_f64();
        match self {
            Self::Creature(c) => c.update(ctx),
            Self::Projectile(p) => ctx.translate(p.velocity() * dt),
            Self::Pickup(p) => ctx.translate(p.velocity() * dt),
            Self::Layer(_) | Self::Sprite(_) | Self::Text(_) => {}
        }
    }

    fn draw<T: DrawTarget + ?Sized>(&self, world: Affine, target: &mut T) {
        match self {
            Self::Sprite(s) => target.draw_sprite(world, s.texture, s.rect),
            Self::Creature(c) => target.draw_sprite(world, c.data().texture, c.local_bounds()),
            Self::Projectile(p) => target.draw_sprite(world, p.data().texture, p.local_bounds()),
            Self::Pickup(p) => target.draw_sprite(world, p.data().texture, p.local_bounds()),
            Self::Text(t) => target.draw_text(world, t.string(), t.character_size()),
            Self::Layer(_) => {}
        }
    }

    fn on_remove(&self, world: Affine, commands: &mut CommandQueue<Self>) {
        if let Self::Creature(c) = self {
            c.on_remove(world, commands);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CreatureType, PickupType, ProjectileType, textures};
    use grove_scene::{Node, Scene, TextureId};
    use kurbo::Vec2;

    #[derive(Default)]
    struct Log {
        sprites: Vec<TextureId>,
        texts: Vec<String>,
    }

    impl DrawTarget for Log {
        fn draw_sprite(&mut self, _: Affine, texture: TextureId, _: Rect) {
            self.sprites.push(texture);
        }

        fn draw_text(&mut self, _: Affine, text: &str, size: u32) {
            assert_eq!(size, 14);
            self.texts.push(text.to_owned());
        }
    }

    #[test]
    fn kinds_report_categories_and_bounds() {
        let layer = Entity::Layer(Layer::new(Category::SCENE_GROUND_LAYER));
        assert_eq!(layer.category(), Category::SCENE_GROUND_LAYER);
        assert!(layer.local_bounds().is_none());

        let text = Entity::Text(Text::new("hi"));
        assert_eq!(text.category(), Category::NONE);
        assert!(text.local_bounds().is_none());

        let fire = Entity::Projectile(Projectile::new(ProjectileType::PlayerFire));
        assert_eq!(fire.category(), Category::PLAYER_PROJECTILE);
        assert!(fire.local_bounds().is_some());
    }

    #[test]
    fn projectiles_and_pickups_integrate_velocity() {
        let mut scene = Scene::new(Entity::Layer(Layer::default()));
        let root = scene.root();
        let fire = scene.attach(
            root,
            Node::new(Entity::Projectile(
                Projectile::new(ProjectileType::EnemyFire).with_velocity(Vec2::new(0.0, 200.0)),
            )),
        );
        let pickup = scene.attach(root, Node::new(Entity::Pickup(Pickup::new(PickupType::HealthRefill))));
        scene.update(core::time::Duration::from_millis(500));
        assert_eq!(scene.local(fire).map(|l| l.position), Some(Vec2::new(0.0, 100.0)));
        assert_eq!(scene.local(pickup).map(|l| l.position), Some(Vec2::new(0.0, 0.5)));
    }

    #[test]
    fn draw_dispatches_by_kind() {
        let mut scene = Scene::new(Entity::Layer(Layer::default()));
        let root = scene.root();
        scene.attach(
            root,
            Node::new(Entity::Sprite(Sprite::new(textures::GRASS, Rect::new(0.0, 0.0, 64.0, 64.0)))),
        );
        scene.attach(root, Creature::new(CreatureType::Bunny).into_node(Vec2::ZERO));
        let mut log = Log::default();
        scene.draw(&mut log);
        assert_eq!(log.sprites, [textures::GRASS, textures::BUNNY]);
        assert_eq!(log.texts, ["5 HP"]);
    }
}
