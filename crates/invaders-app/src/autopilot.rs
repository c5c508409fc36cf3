//! Scripted player for headless runs.
//!
//! Tracks the lowest live invader, leads it by the bullet's flight time and
//! fires on a fixed cadence.

use invaders_core::commands::GameCommand;
use invaders_core::constants::BULLET_SPEED;
use invaders_core::enums::{GamePhase, SweepState};
use invaders_core::state::{InvaderView, RoundSnapshot};

#[derive(Debug, Clone)]
pub struct Autopilot {
    fire_interval: u32,
    cooldown: u32,
}

impl Autopilot {
    /// Fire every `fire_interval` ticks (at least every tick).
    pub fn new(fire_interval: u32) -> Self {
        Self {
            fire_interval: fire_interval.max(1),
            cooldown: 0,
        }
    }

    /// Commands for the next tick, given the latest snapshot.
    pub fn plan(&mut self, snapshot: &RoundSnapshot) -> Vec<GameCommand> {
        if snapshot.phase != GamePhase::Running {
            return Vec::new();
        }
        let Some(target) = lowest_invader(&snapshot.invaders) else {
            return Vec::new();
        };

        let flight_time = ((target.position.y - snapshot.player.y) / BULLET_SPEED).max(0.0);
        let aim_x = target.position.x + horizontal_velocity(target) * flight_time;

        let mut commands = vec![GameCommand::MovePlayer {
            x: aim_x,
            y: snapshot.player.y,
            z: target.position.z,
        }];

        if self.cooldown == 0 {
            commands.push(GameCommand::Fire);
            self.cooldown = self.fire_interval;
        }
        self.cooldown -= 1;
        commands
    }
}

/// Lowest invader, preferring the one nearest the centre line on ties.
fn lowest_invader(invaders: &[InvaderView]) -> Option<&InvaderView> {
    invaders.iter().min_by(|a, b| {
        a.position
            .y
            .total_cmp(&b.position.y)
            .then(a.position.x.abs().total_cmp(&b.position.x.abs()))
    })
}

fn horizontal_velocity(invader: &InvaderView) -> f32 {
    if !invader.does_move {
        return 0.0;
    }
    match invader.move_state {
        SweepState::SweepRight => invader.speed,
        SweepState::SweepLeft => -invader.speed,
        SweepState::DropRight | SweepState::DropLeft => 0.0,
    }
}
