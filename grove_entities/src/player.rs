// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Player input: actions bound to commands, and the level status.
//!
//! Keys and windows belong to the host. The host decides which [`Action`]s are
//! active each frame and hands them to [`Player::handle_realtime_input`].

use grove_scene::{Command, CommandQueue};
use hashbrown::HashMap;

use crate::actions::{move_player, player_attack};
use crate::entity::Entity;

/// Something the player can ask their creature to do.
///
/// Every action is held: its command is pushed each frame the host reports it active.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Move up.
    MoveUp,
    /// Move down.
    MoveDown,
    /// Move left.
    MoveLeft,
    /// Move right.
    MoveRight,
    /// Fire a projectile.
    MagicAttack,
}

impl Action {
    /// Every bindable action.
    pub const ALL: [Self; 5] = [
        Self::MoveUp,
        Self::MoveDown,
        Self::MoveLeft,
        Self::MoveRight,
        Self::MagicAttack,
    ];
}

/// State of the current level, as reported by [`World::level_status`](crate::World::level_status).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LevelStatus {
    /// Still playing.
    #[default]
    InProgress,
    /// Every enemy was defeated.
    Success,
    /// The player died.
    Failure,
}

/// Maps actions to the commands they push.
#[derive(Debug)]
pub struct Player {
    bindings: HashMap<Action, Command<Entity>>,
}

impl Player {
    /// Default bindings, moving at `speed` units per second.
    pub fn new(speed: f64) -> Self {
        let bindings = Action::ALL
            .into_iter()
            .map(|action| {
                let command = match action {
                    Action::MoveUp => move_player(0.0, -speed),
                    Action::MoveDown => move_player(0.0, speed),
                    Action::MoveLeft => move_player(-speed, 0.0),
                    Action::MoveRight => move_player(speed, 0.0),
                    Action::MagicAttack => player_attack(),
                };
                (action, command)
            })
            .collect();
        Self { bindings }
    }

    /// Replace the command bound to `action`.
    pub fn bind(&mut self, action: Action, command: Command<Entity>) {
        self.bindings.insert(action, command);
    }

    /// The command bound to `action`.
    pub fn command(&self, action: Action) -> Option<&Command<Entity>> {
        self.bindings.get(&action)
    }

    /// Push the commands for every held action, in the order given.
    pub fn handle_realtime_input(
        &self,
        held: impl IntoIterator<Item = Action>,
        commands: &mut CommandQueue<Entity>,
    ) {
        for action in held {
            if let Some(command) = self.bindings.get(&action) {
                commands.push(command.clone());
            }
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(crate::world::WorldConfig::default().player_speed)
    }
}
