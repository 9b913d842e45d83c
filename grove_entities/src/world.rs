// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The game world: scene layout, the per-tick loop, and the collision rules.

use core::f64::consts::SQRT_2;
use core::time::Duration;

use grove_scene::{
    Category, CollisionSet, Command, CommandQueue, DrawTarget, GridPairs, Node, NodeId, Scene,
};
use kurbo::{Point, Rect, Size, Vec2};

use crate::creature::{Creature, HEALTH_LABEL_OFFSET};
use crate::data::{CreatureType, PickupType, textures};
use crate::entity::Entity;
use crate::layer::Layer;
use crate::player::LevelStatus;
use crate::sprite::Sprite;

/// Tuning for a [`World`].
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Playable area. The player starts at its center.
    pub world_bounds: Rect,
    /// Size of the camera view.
    pub view_size: Size,
    /// Vertical camera drift in units per second, also applied to the player.
    pub scroll_speed: f64,
    /// How close the player may get to the view edge before the view pans.
    pub border_distance: f64,
    /// Player movement speed bound to the movement actions.
    pub player_speed: f64,
    /// How far beyond the view the active chunk reaches on every side.
    pub chunk_margin: f64,
    /// Enemies drop a pickup with probability `1 / drop_one_in`. Zero disables drops.
    pub drop_one_in: u32,
    /// Seed for drop rolls.
    pub seed: u64,
    /// Cell size of the collision grid.
    pub grid_cell_size: f64,
    /// NPCs to spawn, with positions relative to the player's start.
    pub npcs: Vec<(CreatureType, Vec2)>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_bounds: Rect::new(0.0, 0.0, 5000.0, 5000.0),
            view_size: Size::new(480.0, 270.0),
            scroll_speed: 0.0,
            border_distance: 16.0,
            player_speed: 75.0,
            chunk_margin: 1000.0,
            drop_one_in: 3,
            seed: 0x5eed,
            grid_cell_size: 64.0,
            npcs: vec![
                (CreatureType::Bunny, Vec2::new(20.0, 50.0)),
                (CreatureType::Bear, Vec2::new(100.0, 200.0)),
            ],
        }
    }
}

/// The two top-level layers, in draw order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WorldLayer {
    /// Backdrop. Receives no commands.
    Background,
    /// Creatures, projectiles, and pickups. Category [`Category::SCENE_GROUND_LAYER`].
    Foreground,
}

/// A creature waiting to enter the world.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnPoint {
    /// What to spawn.
    pub ty: CreatureType,
    /// Where, in world space.
    pub position: Point,
}

/// Counters from one [`World::update`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Commands dispatched.
    pub commands: usize,
    /// Nodes updated.
    pub updated: usize,
    /// Collision pairs found.
    pub collisions: usize,
    /// Pairs that matched a collision rule.
    pub resolved: usize,
    /// Nodes swept.
    pub removed: usize,
    /// NPCs spawned.
    pub spawned: usize,
}

/// The game world: a scene with a background and a foreground layer, the player,
/// pending NPC spawns, and the camera.
#[derive(Debug)]
pub struct World {
    config: WorldConfig,
    scene: Scene<Entity>,
    layers: [NodeId; 2],
    player: NodeId,
    view_center: Point,
    spawn_points: Vec<SpawnPoint>,
    rng: fastrand::Rng,
    broadphase: GridPairs,
    level_status: LevelStatus,
}

impl World {
    /// Build the scene described by `config`.
    pub fn new(config: WorldConfig) -> Self {
        let mut scene = Scene::new(Entity::Layer(Layer::default()));
        let root = scene.root();
        let background = scene.attach(root, Node::new(Entity::Layer(Layer::new(Category::NONE))));
        let foreground = scene.attach(
            root,
            Node::new(Entity::Layer(Layer::new(Category::SCENE_GROUND_LAYER))),
        );

        let bounds = config.world_bounds;
        let grass = Sprite::new(textures::GRASS, bounds.with_origin(Point::ORIGIN));
        scene.attach(
            background,
            Node::new(Entity::Sprite(grass)).at(bounds.origin().to_vec2()),
        );

        let player_spawn = bounds.center();
        let player = scene.attach(
            foreground,
            Creature::new(CreatureType::Player).into_node(player_spawn.to_vec2()),
        );

        let mut spawn_points: Vec<SpawnPoint> = config
            .npcs
            .iter()
            .map(|&(ty, offset)| SpawnPoint {
                ty,
                position: player_spawn + offset,
            })
            .collect();
        spawn_points.sort_by(|a, b| a.position.y.total_cmp(&b.position.y));

        tracing::debug!(
            npcs = spawn_points.len(),
            x = player_spawn.x,
            y = player_spawn.y,
            "world built"
        );

        Self {
            rng: fastrand::Rng::with_seed(config.seed),
            broadphase: GridPairs::new(config.grid_cell_size),
            config,
            scene,
            layers: [background, foreground],
            player,
            view_center: player_spawn,
            spawn_points,
            level_status: LevelStatus::InProgress,
        }
    }

    /// Advance the world by `dt`.
    ///
    /// Drains queued commands, updates every node, resolves collisions, sweeps
    /// destroyed nodes, then spawns NPCs that entered the active chunk.
    pub fn update(&mut self, dt: Duration) -> TickReport {
        let _span = tracing::trace_span!("world_update").entered();
        self.view_center.y += self.config.scroll_speed * dt.as_secs_f64();
        if let Some(player) = self.player_mut() {
            player.set_velocity(Vec2::ZERO);
        }
        self.destroy_entities_outside_chunk();

        let commands = self.scene.drain_commands(dt);
        self.adapt_player_velocity();
        let updated = self.scene.update_nodes(dt);
        self.adapt_player_position();

        let pairs = self.scene.detect_collisions_with(&mut self.broadphase);
        let collisions = pairs.len();
        let resolved = self.handle_collisions(pairs);
        let removed = self.scene.sweep_removals();
        self.update_health_labels();
        let spawned = self.spawn_npcs();
        self.update_level_status();

        let report = TickReport {
            commands,
            updated,
            collisions,
            resolved,
            removed,
            spawned,
        };
        tracing::trace!(?report, "tick complete");
        report
    }

    /// Draw the whole scene. The host maps world space through [`World::view_bounds`].
    pub fn draw<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        self.scene.draw(target);
    }

    /// Queue for input handlers and other producers.
    pub fn commands_mut(&mut self) -> &mut CommandQueue<Entity> {
        self.scene.commands_mut()
    }

    /// Queue a command for the next update.
    pub fn push_command(&mut self, command: Command<Entity>) {
        self.scene.push_command(command);
    }

    /// Attach `node` to the foreground layer. Its position is in world space.
    pub fn attach(&mut self, node: Node<Entity>) -> NodeId {
        self.scene.attach(self.layer(WorldLayer::Foreground), node)
    }

    /// The underlying scene.
    pub fn scene(&self) -> &Scene<Entity> {
        &self.scene
    }

    /// Mutable access to the underlying scene.
    pub fn scene_mut(&mut self) -> &mut Scene<Entity> {
        &mut self.scene
    }

    /// The configuration the world was built with.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Id of a top-level layer.
    pub fn layer(&self, layer: WorldLayer) -> NodeId {
        match layer {
            WorldLayer::Background => self.layers[0],
            WorldLayer::Foreground => self.layers[1],
        }
    }

    /// Id of the player's node. Stale once the player has been swept.
    pub fn player_id(&self) -> NodeId {
        self.player
    }

    /// The player's creature, while it lives.
    pub fn player(&self) -> Option<&Creature> {
        self.scene.get(self.player).and_then(Entity::as_creature)
    }

    fn player_mut(&mut self) -> Option<&mut Creature> {
        self.scene.get_mut(self.player).and_then(Entity::as_creature_mut)
    }

    /// The area currently shown.
    pub fn view_bounds(&self) -> Rect {
        Rect::from_center_size(self.view_center, self.config.view_size)
    }

    /// The active chunk: the view grown by the chunk margin on every side.
    pub fn chunk_bounds(&self) -> Rect {
        let margin = self.config.chunk_margin;
        self.view_bounds().inflate(margin, margin)
    }

    /// NPCs that have not spawned yet, sorted by y.
    pub fn spawn_points(&self) -> &[SpawnPoint] {
        &self.spawn_points
    }

    /// Current level status.
    pub fn level_status(&self) -> LevelStatus {
        self.level_status
    }

    /// Queue a command destroying projectiles and enemies that left the active chunk.
    fn destroy_entities_outside_chunk(&mut self) {
        let chunk = self.chunk_bounds();
        self.scene.push_command(Command::<Entity>::new(
            Category::PROJECTILE | Category::ENEMY_NPC,
            move |mut node, _| {
                let inside = node
                    .world_bounds()
                    .is_some_and(|bounds| chunk.intersect(bounds).area() > 0.0);
                if !inside {
                    node.destroy();
                }
            },
        ));
    }

    /// Keep diagonal movement at the same speed as straight movement, then add scrolling.
    fn adapt_player_velocity(&mut self) {
        let scroll = self.config.scroll_speed;
        if let Some(player) = self.player_mut() {
            let velocity = player.velocity();
            if velocity.x != 0.0 && velocity.y != 0.0 {
                player.set_velocity(velocity / SQRT_2);
            }
            player.accelerate(Vec2::new(0.0, scroll));
        }
    }

    /// Keep the player inside the view, panning the view by half its size when the
    /// player reaches the border.
    fn adapt_player_position(&mut self) {
        let view = self.view_bounds();
        let border = self.config.border_distance;
        let Some(local) = self.scene.local_mut(self.player) else {
            return;
        };
        let mut position = local.position;
        let mut pan = Vec2::ZERO;

        position.x = position.x.max(view.x0 + border);
        if position.x <= view.x0 + border {
            pan.x -= view.width() / 2.0;
        }
        position.x = position.x.min(view.x1 - border);
        if position.x >= view.x1 - border {
            pan.x += view.width() / 2.0;
        }
        position.y = position.y.max(view.y0 + border);
        if position.y <= view.y0 + border {
            pan.y -= view.height() / 2.0;
        }
        position.y = position.y.min(view.y1 - border);
        if position.y >= view.y1 - border {
            pan.y += view.height() / 2.0;
        }

        local.position = position;
        if pan != Vec2::ZERO {
            tracing::trace!(dx = pan.x, dy = pan.y, "view panned");
            self.view_center += pan;
        }
    }

    /// Refresh every creature's health label and keep it upright.
    fn update_health_labels(&mut self) {
        let scene = &self.scene;
        let labels: Vec<(NodeId, String, f64)> = scene
            .pre_order()
            .filter_map(|id| {
                let creature = scene.get(id)?.as_creature()?;
                let label = scene
                    .children_of(id)
                    .iter()
                    .copied()
                    .find(|&child| matches!(scene.get(child), Some(Entity::Text(_))))?;
                let rotation = scene.local(id)?.rotation;
                Some((label, creature.health_text(), -rotation))
            })
            .collect();
        for (label, text, rotation) in labels {
            if let Some(t) = self.scene.get_mut(label).and_then(Entity::as_text_mut) {
                t.set_string(text);
            }
            if let Some(local) = self.scene.local_mut(label) {
                local.position = HEALTH_LABEL_OFFSET;
                local.rotation = rotation;
            }
        }
    }

    /// Apply the gameplay rules to each pair. Returns the number of pairs that matched.
    fn handle_collisions(&mut self, pairs: CollisionSet) -> usize {
        let mut resolved = 0;
        for mut pair in pairs {
            if self.scene.is_destroyed(pair.first) || self.scene.is_destroyed(pair.second) {
                continue;
            }
            if self
                .scene
                .match_categories(&mut pair, Category::PLAYER, Category::PLAYER_PICKUP)
            {
                let Some(pickup) = self.scene.get(pair.second).and_then(Entity::as_pickup).cloned()
                else {
                    continue;
                };
                if let Some(player) = self.creature_mut(pair.first) {
                    pickup.apply(player);
                }
                self.scene.destroy(pair.second);
                tracing::debug!(pickup = ?pickup.ty(), "pickup collected");
            } else if self
                .scene
                .match_categories(&mut pair, Category::PLAYER, Category::ENEMY_NPC)
            {
                let Some(enemy) = self.creature_mut(pair.second) else {
                    continue;
                };
                let impact = enemy.hitpoints();
                enemy.kill();
                if let Some(player) = self.creature_mut(pair.first) {
                    player.damage(impact);
                }
                self.scene.destroy(pair.second);
                self.destroy_if_dead(pair.first);
            } else if self
                .scene
                .match_categories(&mut pair, Category::PLAYER, Category::ENEMY_PROJECTILE)
                || self
                    .scene
                    .match_categories(&mut pair, Category::ENEMY_NPC, Category::PLAYER_PROJECTILE)
            {
                let Some(damage) = self
                    .scene
                    .get(pair.second)
                    .and_then(Entity::as_projectile)
                    .map(|p| p.damage())
                else {
                    continue;
                };
                if let Some(creature) = self.creature_mut(pair.first) {
                    creature.damage(damage);
                }
                self.scene.destroy(pair.second);
                self.destroy_if_dead(pair.first);
            } else {
                continue;
            }
            resolved += 1;
        }
        resolved
    }

    fn creature_mut(&mut self, id: NodeId) -> Option<&mut Creature> {
        self.scene.get_mut(id).and_then(Entity::as_creature_mut)
    }

    fn destroy_if_dead(&mut self, id: NodeId) {
        let Some(creature) = self.scene.get(id).and_then(Entity::as_creature) else {
            return;
        };
        if creature.is_dead() {
            if creature.is_allied() {
                tracing::info!("player died");
            } else {
                tracing::debug!(creature = ?creature.ty(), "creature killed");
            }
            self.scene.destroy(id);
        }
    }

    /// Spawn every pending NPC inside the active chunk. Returns how many spawned.
    fn spawn_npcs(&mut self) -> usize {
        let chunk = self.chunk_bounds();
        let (ready, waiting): (Vec<SpawnPoint>, Vec<SpawnPoint>) =
            core::mem::take(&mut self.spawn_points)
                .into_iter()
                .partition(|spawn| chunk.contains(spawn.position));
        self.spawn_points = waiting;
        if ready.is_empty() {
            return 0;
        }
        let foreground = self.layer(WorldLayer::Foreground);
        for spawn in &ready {
            let drop = self.roll_drop(spawn.ty);
            let creature = Creature::new(spawn.ty).with_drop(drop);
            self.scene
                .attach(foreground, creature.into_node(spawn.position.to_vec2()));
            tracing::debug!(
                ty = ?spawn.ty,
                x = spawn.position.x,
                y = spawn.position.y,
                "npc spawned"
            );
        }
        ready.len()
    }

    fn roll_drop(&mut self, ty: CreatureType) -> Option<PickupType> {
        let one_in = self.config.drop_one_in;
        if ty.is_allied() || one_in == 0 || self.rng.u32(..one_in) != 0 {
            return None;
        }
        Some(PickupType::ALL[self.rng.usize(..PickupType::ALL.len())])
    }

    fn update_level_status(&mut self) {
        let status = if self.player().is_none_or(Creature::is_dead) {
            LevelStatus::Failure
        } else if self.spawn_points.is_empty() && !self.enemies_remain() {
            LevelStatus::Success
        } else {
            LevelStatus::InProgress
        };
        if status != self.level_status {
            tracing::info!(?status, "level status changed");
            self.level_status = status;
        }
    }

    fn enemies_remain(&self) -> bool {
        self.scene.pre_order().any(|id| {
            !self.scene.is_destroyed(id)
                && self
                    .scene
                    .category(id)
                    .is_some_and(|c| c.matches(Category::ENEMY_NPC))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::move_player;
    use crate::data::ProjectileType;
    use crate::pickup::Pickup;
    use crate::projectile::Projectile;
    use grove_scene::TextureId;
    use kurbo::Affine;

    const TICK: Duration = Duration::from_millis(16);

    fn quiet() -> WorldConfig {
        WorldConfig {
            npcs: Vec::new(),
            ..WorldConfig::default()
        }
    }

    fn player_position(world: &World) -> Point {
        world
            .scene()
            .world_position(world.player_id())
            .expect("player alive")
    }

    fn hitpoints(world: &World) -> i32 {
        world.player().map_or(0, Creature::hitpoints)
    }

    fn wound_player(world: &mut World, points: i32) {
        let id = world.player_id();
        world
            .scene_mut()
            .get_mut(id)
            .and_then(Entity::as_creature_mut)
            .expect("player")
            .damage(points);
    }

    fn creature_hitpoints(world: &World, id: NodeId) -> Option<i32> {
        world
            .scene()
            .get(id)
            .and_then(Entity::as_creature)
            .map(Creature::hitpoints)
    }

    #[derive(Default)]
    struct Labels(Vec<String>);

    impl DrawTarget for Labels {
        fn draw_sprite(&mut self, _: Affine, _: TextureId, _: Rect) {}

        fn draw_text(&mut self, _: Affine, text: &str, _: u32) {
            self.0.push(text.to_owned());
        }
    }

    #[test]
    fn new_world_layout() {
        let world = World::new(WorldConfig::default());
        let scene = world.scene();
        assert_eq!(
            scene.children_of(scene.root()),
            &[world.layer(WorldLayer::Background), world.layer(WorldLayer::Foreground)]
        );
        assert_eq!(
            scene.category(world.layer(WorldLayer::Foreground)),
            Some(Category::SCENE_GROUND_LAYER)
        );
        assert_eq!(player_position(&world), Point::new(2500.0, 2500.0));
        assert_eq!(world.view_bounds().center(), Point::new(2500.0, 2500.0));
        let ys: Vec<f64> = world.spawn_points().iter().map(|s| s.position.y).collect();
        assert_eq!(ys, [2550.0, 2700.0]);
        assert_eq!(world.level_status(), LevelStatus::InProgress);
    }

    #[test]
    fn npcs_spawn_once_when_inside_the_chunk() {
        let mut config = WorldConfig::default();
        config.npcs.push((CreatureType::Bear, Vec2::new(0.0, 2000.0)));
        let mut world = World::new(config);
        let report = world.update(TICK);
        assert_eq!(report.spawned, 2);
        assert_eq!(world.spawn_points().len(), 1, "far bear waits for the chunk");
        assert_eq!(world.update(TICK).spawned, 0);
    }

    #[test]
    fn diagonal_movement_is_normalized() {
        let mut world = World::new(quiet());
        world.push_command(move_player(75.0, 0.0));
        world.push_command(move_player(0.0, -75.0));
        world.update(Duration::from_secs(1));
        let moved = player_position(&world) - Point::new(2500.0, 2500.0);
        let expected = 75.0 / SQRT_2;
        assert!((moved.x - expected).abs() < 1e-9, "got {moved:?}");
        assert!((moved.y + expected).abs() < 1e-9, "got {moved:?}");
        assert!((moved.hypot() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn velocity_resets_every_tick() {
        let mut world = World::new(quiet());
        world.push_command(move_player(75.0, 0.0));
        world.update(Duration::from_secs(1));
        world.update(Duration::from_secs(1));
        assert_eq!(player_position(&world), Point::new(2575.0, 2500.0));
    }

    #[test]
    fn player_is_clamped_to_the_view_and_the_view_pans() {
        let mut world = World::new(quiet());
        world.push_command(move_player(1000.0, 0.0));
        world.update(Duration::from_secs(1));
        assert_eq!(player_position(&world), Point::new(2724.0, 2500.0));
        assert_eq!(world.view_bounds().center(), Point::new(2740.0, 2500.0));
    }

    #[test]
    fn pickup_heals_the_player() {
        let mut world = World::new(quiet());
        wound_player(&mut world, 30);
        let pickup = world.attach(
            Node::new(Entity::Pickup(Pickup::new(PickupType::HealthRefill)))
                .at(Vec2::new(2500.0, 2500.0)),
        );
        let report = world.update(TICK);
        assert_eq!(report.resolved, 1);
        assert_eq!(hitpoints(&world), 85);
        assert!(!world.scene().is_alive(pickup));
    }

    #[test]
    fn enemy_fire_damages_the_player() {
        let mut world = World::new(quiet());
        let fire = world.attach(
            Node::new(Entity::Projectile(Projectile::new(ProjectileType::EnemyFire)))
                .at(Vec2::new(2500.0, 2505.0)),
        );
        world.update(TICK);
        assert_eq!(hitpoints(&world), 95);
        assert!(!world.scene().is_alive(fire));
    }

    #[test]
    fn player_fire_damages_an_enemy() {
        let mut world = World::new(quiet());
        let at = Vec2::new(2600.0, 2400.0);
        let bear = world.attach(Creature::new(CreatureType::Bear).into_node(at));
        let fire = world.attach(
            Node::new(Entity::Projectile(Projectile::new(ProjectileType::PlayerFire))).at(at),
        );
        let report = world.update(TICK);
        assert_eq!(report.resolved, 1, "{report:?}");
        assert_eq!(creature_hitpoints(&world, bear), Some(20));
        assert!(!world.scene().is_alive(fire), "projectile spent on impact");
        assert_eq!(hitpoints(&world), 100);
    }

    #[test]
    fn health_label_shows_hits_from_the_same_tick() {
        let mut world = World::new(quiet());
        world.attach(
            Node::new(Entity::Projectile(Projectile::new(ProjectileType::EnemyFire)))
                .at(Vec2::new(2500.0, 2505.0)),
        );
        world.update(TICK);
        let mut labels = Labels::default();
        world.draw(&mut labels);
        assert_eq!(hitpoints(&world), 95);
        assert_eq!(labels.0, ["95 HP"]);
    }

    #[test]
    fn enemy_contact_costs_its_hitpoints() {
        let mut world = World::new(quiet());
        let bear = world.attach(Creature::new(CreatureType::Bear).into_node(Vec2::new(2510.0, 2500.0)));
        world.update(TICK);
        assert_eq!(hitpoints(&world), 75);
        assert!(!world.scene().is_alive(bear));
        assert_eq!(world.level_status(), LevelStatus::Success);
    }

    #[test]
    fn player_fire_kills_a_bunny_which_drops_its_pickup() {
        let mut world = World::new(quiet());
        let at = Vec2::new(2600.0, 2400.0);
        let bunny = world.attach(
            Creature::new(CreatureType::Bunny)
                .with_drop(Some(PickupType::HealthRefill))
                .into_node(at),
        );
        world.attach(Node::new(Entity::Projectile(Projectile::new(ProjectileType::PlayerFire))).at(at));
        world.update(TICK);
        assert!(!world.scene().is_alive(bunny));

        world.update(TICK);
        let foreground = world.layer(WorldLayer::Foreground);
        let pickups = world
            .scene()
            .children_of(foreground)
            .iter()
            .filter(|&&id| matches!(world.scene().get(id), Some(Entity::Pickup(_))))
            .count();
        assert_eq!(pickups, 1);
    }

    #[test]
    fn projectiles_outside_the_chunk_are_culled() {
        let mut world = World::new(quiet());
        let far = world.attach(
            Node::new(Entity::Projectile(Projectile::new(ProjectileType::EnemyFire)))
                .at(Vec2::new(10.0, 10.0)),
        );
        let near = world.attach(
            Node::new(Entity::Projectile(Projectile::new(ProjectileType::EnemyFire)))
                .at(Vec2::new(2500.0, 2000.0)),
        );
        world.update(TICK);
        assert!(!world.scene().is_alive(far));
        assert!(world.scene().is_alive(near));
    }

    #[test]
    fn player_death_fails_the_level() {
        let mut world = World::new(quiet());
        wound_player(&mut world, 95);
        world.attach(
            Node::new(Entity::Projectile(Projectile::new(ProjectileType::EnemyFire)))
                .at(Vec2::new(2500.0, 2500.0)),
        );
        world.update(TICK);
        assert!(world.player().is_none());
        assert_eq!(world.level_status(), LevelStatus::Failure);
        // Ticking without a player is harmless.
        world.push_command(move_player(75.0, 0.0));
        world.update(TICK);
        assert_eq!(world.level_status(), LevelStatus::Failure);
    }

    #[test]
    fn drops_are_deterministic_per_seed() {
        let roll = |seed| {
            let mut world = World::new(WorldConfig {
                seed,
                ..quiet()
            });
            (0..32)
                .map(|_| world.roll_drop(CreatureType::Bunny).is_some())
                .collect::<Vec<_>>()
        };
        assert_eq!(roll(7), roll(7));
        assert!(roll(7).contains(&true) && roll(7).contains(&false));

        let mut never = World::new(WorldConfig {
            drop_one_in: 0,
            ..quiet()
        });
        assert_eq!(never.roll_drop(CreatureType::Bear), None);
        assert_eq!(never.roll_drop(CreatureType::Player), None);
    }
}
