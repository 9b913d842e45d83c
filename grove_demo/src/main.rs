// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless Grove run.
//!
//! Plays a fixed number of ticks with the player walking right and firing, then
//! prints what one frame would draw. Set `RUST_LOG=grove_entities=debug` (or `trace`)
//! to follow spawns, kills, and tick reports.
//!
//! Usage: `grove_demo [TICKS]`

use std::process::ExitCode;
use std::time::Duration;

use grove_entities::{Action, Player, TickReport, World, WorldConfig};
use grove_scene::{DrawTarget, TextureId};
use kurbo::{Affine, Rect};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_TICKS: u32 = 600;
const TICK: Duration = Duration::from_micros(16_667);

/// Counts draw calls and remembers labels.
#[derive(Debug, Default)]
struct FrameStats {
    sprites: usize,
    labels: Vec<String>,
}

impl DrawTarget for FrameStats {
    fn draw_sprite(&mut self, _: Affine, _: TextureId, _: Rect) {
        self.sprites += 1;
    }

    fn draw_text(&mut self, _: Affine, text: &str, _: u32) {
        self.labels.push(text.to_owned());
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let ticks = match std::env::args().nth(1).map(|arg| arg.parse::<u32>()) {
        None => DEFAULT_TICKS,
        Some(Ok(ticks)) => ticks,
        Some(Err(err)) => {
            tracing::error!(%err, "TICKS must be a non-negative integer");
            return ExitCode::FAILURE;
        }
    };

    let mut world = World::new(WorldConfig::default());
    let player = Player::default();
    let mut total = TickReport::default();
    for _ in 0..ticks {
        player.handle_realtime_input([Action::MoveRight, Action::MagicAttack], world.commands_mut());
        let report = world.update(TICK);
        total.commands += report.commands;
        total.updated += report.updated;
        total.collisions += report.collisions;
        total.resolved += report.resolved;
        total.removed += report.removed;
        total.spawned += report.spawned;
    }

    let mut frame = FrameStats::default();
    world.draw(&mut frame);
    tracing::info!(
        ticks,
        commands = total.commands,
        collisions = total.collisions,
        resolved = total.resolved,
        removed = total.removed,
        spawned = total.spawned,
        "run finished"
    );
    tracing::info!(
        sprites = frame.sprites,
        labels = ?frame.labels,
        status = ?world.level_status(),
        hitpoints = world.player().map_or(0, |p| p.hitpoints()),
        "last frame"
    );
    ExitCode::SUCCESS
}
