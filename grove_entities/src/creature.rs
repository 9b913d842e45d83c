// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Creatures: the player and the NPCs.

use core::time::Duration;

use grove_scene::{Category, Command, CommandQueue, Node, UpdateCtx};
use kurbo::{Affine, Point, Rect, Vec2};

use crate::data::{CreatureData, CreatureType, PickupType, ProjectileType};
use crate::entity::Entity;
use crate::pickup::Pickup;
use crate::projectile::Projectile;
use crate::text::Text;

/// Offset of the health label from the creature's origin.
pub const HEALTH_LABEL_OFFSET: Vec2 = Vec2::new(0.0, 50.0);

/// A creature with hitpoints, a velocity, a scripted path, and an attack.
#[derive(Clone, Debug, PartialEq)]
pub struct Creature {
    ty: CreatureType,
    hitpoints: i32,
    velocity: Vec2,
    attack_countdown: Duration,
    is_attacking: bool,
    travelled_distance: f64,
    direction_index: usize,
    drop: Option<PickupType>,
}

impl Creature {
    /// A creature at full health, standing still.
    pub fn new(ty: CreatureType) -> Self {
        Self {
            ty,
            hitpoints: ty.data().hitpoints,
            velocity: Vec2::ZERO,
            attack_countdown: Duration::ZERO,
            is_attacking: false,
            travelled_distance: 0.0,
            direction_index: 0,
            drop: None,
        }
    }

    /// Builder-style setter for the pickup left behind when the creature is killed.
    #[must_use]
    pub fn with_drop(mut self, drop: Option<PickupType>) -> Self {
        self.drop = drop;
        self
    }

    /// The creature together with its health label, ready to attach.
    pub fn into_node(self, position: Vec2) -> Node<Entity> {
        let label = Node::new(Entity::Text(Text::new(self.health_text()))).at(HEALTH_LABEL_OFFSET);
        Node::new(Entity::Creature(self)).at(position).with_child(label)
    }

    /// The creature's type.
    pub fn ty(&self) -> CreatureType {
        self.ty
    }

    /// Tuning table entry for this creature's type.
    pub fn data(&self) -> &'static CreatureData {
        self.ty.data()
    }

    /// Current hitpoints. Zero or less means dead.
    pub fn hitpoints(&self) -> i32 {
        self.hitpoints
    }

    /// Restore `points` hitpoints, up to the type's maximum.
    pub fn heal(&mut self, points: i32) {
        self.hitpoints = (self.hitpoints + points).min(self.data().hitpoints);
    }

    /// Remove `points` hitpoints.
    pub fn damage(&mut self, points: i32) {
        self.hitpoints -= points;
    }

    /// Drop hitpoints to zero. The creature counts as killed, so it may still drop a pickup.
    pub fn kill(&mut self) {
        self.hitpoints = 0;
    }

    /// Returns `true` once hitpoints reach zero.
    pub fn is_dead(&self) -> bool {
        self.hitpoints <= 0
    }

    /// Label text for the health display.
    pub fn health_text(&self) -> String {
        format!("{} HP", self.hitpoints)
    }

    /// Returns `true` for the player's side.
    pub fn is_allied(&self) -> bool {
        self.ty.is_allied()
    }

    /// Category used for commands and collisions.
    pub fn category(&self) -> Category {
        if self.is_allied() {
            Category::PLAYER
        } else {
            Category::ENEMY_NPC
        }
    }

    /// Collision box, centered on the origin.
    pub fn local_bounds(&self) -> Rect {
        let half = self.data().size / 2.0;
        Rect::new(-half, -half, half, half)
    }

    /// Maximum speed from the tuning table.
    pub fn max_speed(&self) -> f64 {
        self.data().speed
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Replace the velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Add `delta` to the velocity.
    pub fn accelerate(&mut self, delta: Vec2) {
        self.velocity += delta;
    }

    /// Request an attack. Creatures with a zero attack interval ignore this.
    pub fn attack(&mut self) {
        if !self.data().attack_interval.is_zero() {
            self.is_attacking = true;
        }
    }

    /// Returns `true` while an attack is requested but not yet launched.
    pub fn is_attacking(&self) -> bool {
        self.is_attacking
    }

    /// Pickup left behind on death, if any.
    pub fn pickup_drop(&self) -> Option<PickupType> {
        self.drop
    }

    pub(crate) fn update(&mut self, ctx: &mut UpdateCtx<'_, Entity>) {
        if self.is_dead() {
            ctx.destroy();
            return;
        }
        let dt = ctx.dt();
        self.check_projectile_launch(dt, ctx);
        self.update_pathing(dt);
        ctx.translate(self.velocity * dt.as_secs_f64());
    }

    fn check_projectile_launch(&mut self, dt: Duration, ctx: &mut UpdateCtx<'_, Entity>) {
        if !self.is_allied() {
            self.attack();
        }
        if self.is_attacking && self.attack_countdown.is_zero() {
            ctx.push_command(self.fire_command(ctx.world_position()));
            self.attack_countdown += self.data().attack_interval;
            self.is_attacking = false;
        } else {
            self.attack_countdown = self.attack_countdown.saturating_sub(dt);
        }
    }

    fn update_pathing(&mut self, dt: Duration) {
        let directions = self.data().directions;
        if directions.is_empty() {
            return;
        }
        if self.travelled_distance > directions[self.direction_index].distance {
            self.direction_index = (self.direction_index + 1) % directions.len();
            self.travelled_distance = 0.0;
        }
        let radians = directions[self.direction_index].angle.to_radians();
        let speed = self.max_speed();
        self.velocity = Vec2::new(speed * radians.cos(), speed * radians.sin());
        self.travelled_distance += speed * dt.as_secs_f64();
    }

    /// Command spawning this creature's projectile in the scene-ground layer.
    ///
    /// Projectiles leave half a sprite ahead of `origin`: upwards for allies,
    /// downwards for enemies.
    fn fire_command(&self, origin: Point) -> Command<Entity> {
        let allied = self.is_allied();
        let sign = if allied { -1.0 } else { 1.0 };
        let ty = ProjectileType::fired_by(allied);
        let position = origin + Vec2::new(0.0, 0.5 * self.data().size * sign);
        let velocity = Vec2::new(0.0, ty.data().speed * sign);
        spawn_in_layer(position, move || {
            Node::new(Entity::Projectile(Projectile::new(ty).with_velocity(velocity)))
        })
    }

    pub(crate) fn on_remove(&self, world: Affine, commands: &mut CommandQueue<Entity>) {
        if self.is_allied() || !self.is_dead() {
            return;
        }
        if let Some(ty) = self.drop {
            tracing::debug!(creature = ?self.ty, pickup = ?ty, "dropping pickup");
            commands.push(spawn_in_layer(world * Point::ORIGIN, move || {
                Node::new(Entity::Pickup(Pickup::new(ty)))
            }));
        }
    }
}

/// Command attaching `build()` to the scene-ground layer at world position `at`.
pub(crate) fn spawn_in_layer(
    at: Point,
    build: impl Fn() -> Node<Entity> + 'static,
) -> Command<Entity> {
    Command::<Entity>::new(Category::SCENE_GROUND_LAYER, move |mut layer, _| {
        let local = layer.world_transform().inverse() * at;
        layer.attach(build().at(local.to_vec2()));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grove_scene::{NodeId, Scene};

    use crate::layer::Layer;

    fn ground_scene() -> (Scene<Entity>, NodeId) {
        let mut scene = Scene::new(Entity::Layer(Layer::new(Category::NONE)));
        let ground = scene.attach(
            scene.root(),
            Node::new(Entity::Layer(Layer::new(Category::SCENE_GROUND_LAYER))),
        );
        (scene, ground)
    }

    fn creature(scene: &Scene<Entity>, id: NodeId) -> &Creature {
        scene
            .get(id)
            .and_then(Entity::as_creature)
            .expect("node is a creature")
    }

    #[test]
    fn heal_is_capped_and_damage_kills() {
        let mut bunny = Creature::new(CreatureType::Bunny);
        bunny.heal(10);
        assert_eq!(bunny.hitpoints(), 5);
        bunny.damage(5);
        assert!(bunny.is_dead());
        assert_eq!(bunny.health_text(), "0 HP");
    }

    #[test]
    fn categories_by_side() {
        assert_eq!(Creature::new(CreatureType::Player).category(), Category::PLAYER);
        assert_eq!(Creature::new(CreatureType::Bear).category(), Category::ENEMY_NPC);
        assert_eq!(
            Creature::new(CreatureType::Player).local_bounds(),
            Rect::new(-16.0, -16.0, 16.0, 16.0)
        );
    }

    #[test]
    fn enemies_fire_downwards_on_a_timer() {
        let (mut scene, ground) = ground_scene();
        let bunny = scene.attach(
            ground,
            Creature::new(CreatureType::Bunny).into_node(Vec2::new(100.0, 100.0)),
        );
        let step = Duration::from_millis(500);

        scene.update(step);
        assert_eq!(scene.pending_commands(), 1, "first attack is immediate");
        scene.update(step);
        let projectiles: Vec<_> = scene
            .children_of(ground)
            .iter()
            .copied()
            .filter(|&id| matches!(scene.get(id), Some(Entity::Projectile(_))))
            .collect();
        assert_eq!(projectiles.len(), 1);
        let Some(Entity::Projectile(p)) = scene.get(projectiles[0]) else {
            unreachable!("filtered above");
        };
        assert_eq!(p.ty(), ProjectileType::EnemyFire);
        assert!(p.velocity().y > 0.0, "enemy fire travels down");

        // 2.5 s interval: nothing more until the countdown runs out.
        for _ in 0..3 {
            scene.update(step);
        }
        assert_eq!(scene.pending_commands(), 0);
        assert!(creature(&scene, bunny).is_attacking());
    }

    #[test]
    fn player_attacks_only_on_request() {
        let (mut scene, ground) = ground_scene();
        let player = scene.attach(
            ground,
            Creature::new(CreatureType::Player).into_node(Vec2::new(0.0, 0.0)),
        );
        scene.update(Duration::from_millis(100));
        assert_eq!(scene.pending_commands(), 0);

        scene
            .get_mut(player)
            .and_then(Entity::as_creature_mut)
            .expect("player")
            .attack();
        scene.update(Duration::from_millis(100));
        assert_eq!(scene.pending_commands(), 1);
        assert!(!creature(&scene, player).is_attacking());
    }

    #[test]
    fn pathing_follows_the_patrol() {
        let (mut scene, ground) = ground_scene();
        let bear = scene.attach(
            ground,
            Creature::new(CreatureType::Bear).into_node(Vec2::ZERO),
        );
        // 50 units per second, heading 90 degrees: straight down.
        scene.update(Duration::from_secs(1));
        let pos = scene.world_position(bear).expect("bear alive");
        assert!(pos.x.abs() < 1e-9 && (pos.y - 50.0).abs() < 1e-9, "got {pos:?}");

        // After more than 150 units the bear turns around.
        for _ in 0..4 {
            scene.update(Duration::from_secs(1));
        }
        let v = creature(&scene, bear).velocity();
        assert!(v.y < 0.0, "second leg heads up, got {v:?}");
    }

    #[test]
    fn dead_creature_destroys_itself_and_drops_its_pickup() {
        let (mut scene, ground) = ground_scene();
        let mut bunny = Creature::new(CreatureType::Bunny).with_drop(Some(PickupType::HealthRefill));
        bunny.damage(5);
        let id = scene.attach(ground, bunny.into_node(Vec2::new(30.0, 40.0)));
        scene.update_nodes(Duration::from_millis(16));
        assert!(scene.is_destroyed(id));
        assert_eq!(scene.sweep_removals(), 2, "creature and its label");

        scene.drain_commands(Duration::ZERO);
        let pickup = scene
            .children_of(ground)
            .iter()
            .copied()
            .find(|&c| matches!(scene.get(c), Some(Entity::Pickup(_))))
            .expect("pickup dropped");
        assert_eq!(scene.world_position(pickup), Some(Point::new(30.0, 40.0)));
    }

    #[test]
    fn culled_creature_drops_nothing() {
        let (mut scene, ground) = ground_scene();
        let bunny = Creature::new(CreatureType::Bunny).with_drop(Some(PickupType::HealthRefill));
        let id = scene.attach(ground, bunny.into_node(Vec2::ZERO));
        scene.destroy(id);
        scene.sweep_removals();
        assert_eq!(scene.pending_commands(), 0);
    }
}
