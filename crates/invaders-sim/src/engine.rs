//! Simulation engine.
//!
//! `SimulationEngine` owns the entity registry and the round state, processes
//! player commands, runs the systems, routes collision notifications and
//! produces `RoundSnapshot`s. It reaches the outside world only through the
//! `SceneGraph` and `Presenter` collaborators, so it runs headless in tests.

use std::collections::VecDeque;

use glam::Vec3;

use invaders_core::commands::GameCommand;
use invaders_core::config::{ConfigError, GameConfig};
use invaders_core::enums::{EntityRole, GamePhase};
use invaders_core::events::GameEvent;
use invaders_core::state::RoundSnapshot;
use invaders_core::types::{EntityId, SimTime};

use crate::error::EngineError;
use crate::presenter::Presenter;
use crate::registry::Registry;
use crate::round::RoundState;
use crate::scene::SceneGraph;
use crate::systems;
use crate::systems::collision_router::CollisionKind;
use crate::world_setup;

/// Configuration for creating an engine.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// Settings for the first round.
    pub game: GameConfig,
    /// Where the ship starts; bullets spawn here.
    pub player_position: Vec3,
}

/// The simulation engine. Owns the registry and all round state.
pub struct SimulationEngine<S: SceneGraph, P: Presenter> {
    registry: Registry,
    scene: S,
    presenter: P,
    /// Settings the current round was spawned with.
    config: GameConfig,
    /// Settings waiting for the next restart.
    pending_config: Option<GameConfig>,
    round: RoundState,
    rounds_started: u32,
    time: SimTime,
    player_position: Vec3,
    zones_spawned: bool,
    command_queue: VecDeque<GameCommand>,
    despawn_buffer: Vec<EntityId>,
    events: Vec<GameEvent>,
}

impl<S: SceneGraph, P: Presenter> SimulationEngine<S, P> {
    /// Create an engine in the Setup phase. Call [`start`](Self::start) to spawn the first round.
    pub fn new(config: SimConfig, scene: S, presenter: P) -> Result<Self, EngineError> {
        config.game.validate()?;

        Ok(Self {
            registry: Registry::new(),
            scene,
            presenter,
            config: config.game,
            pending_config: None,
            round: RoundState::default(),
            rounds_started: 0,
            time: SimTime::default(),
            player_position: config.player_position,
            zones_spawned: false,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: GameCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = GameCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `delta` seconds and return the resulting snapshot.
    ///
    /// Fails only when a queued restart cannot respawn the round.
    pub fn tick(&mut self, delta: f32) -> Result<RoundSnapshot, EngineError> {
        self.process_commands()?;

        if self.round.phase != GamePhase::Setup {
            self.run_systems(delta);
        }
        self.check_win();

        if self.round.phase == GamePhase::Running {
            self.time.advance(delta);
        }

        let events = std::mem::take(&mut self.events);
        Ok(systems::snapshot::build_snapshot(
            &self.registry,
            &self.round,
            &self.time,
            self.player_position,
            events,
        ))
    }

    /// Run the spawn protocol for the first round. No-op outside Setup.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.round.phase != GamePhase::Setup {
            log::warn!("Start ignored in phase {:?}", self.round.phase);
            return Ok(());
        }
        self.spawn_round()
    }

    /// Tear down every invader and bullet, reset the round and spawn a new one
    /// with the current configuration.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        let removed = world_setup::clear_round(&mut self.registry, &mut self.scene);
        log::info!("Restarting round, detached {removed} entities");

        self.round = RoundState::default();
        self.time = SimTime::default();
        self.spawn_round()
    }

    /// Fire a bullet from the ship. Only possible while Running.
    pub fn fire(&mut self) -> Result<Option<EntityId>, EngineError> {
        if self.round.phase != GamePhase::Running {
            log::debug!("Fire ignored in phase {:?}", self.round.phase);
            return Ok(None);
        }

        let bullet =
            world_setup::spawn_bullet(&mut self.registry, &mut self.scene, self.player_position)?;
        self.round.stats.shots_fired += 1;
        self.events.push(GameEvent::BulletFired { bullet });
        Ok(Some(bullet))
    }

    /// Freeze every invader. Bullets in flight keep moving.
    pub fn pause(&mut self) -> bool {
        if self.round.phase != GamePhase::Running {
            log::debug!("Pause ignored in phase {:?}", self.round.phase);
            return false;
        }

        self.round.paused = true;
        self.round.phase = GamePhase::Paused;
        systems::invader_movement::set_all_moving(&mut self.registry, &mut self.scene, false);

        log::info!("Round paused");
        self.events.push(GameEvent::Paused);
        self.presenter.on_status("GAME PAUSED");
        true
    }

    /// Unfreeze the invaders. Refused once the round is lost.
    pub fn resume(&mut self) -> bool {
        if self.round.lost {
            log::warn!("Resume refused: round is lost");
            return false;
        }
        if self.round.phase != GamePhase::Paused {
            log::debug!("Resume ignored in phase {:?}", self.round.phase);
            return false;
        }

        self.round.paused = false;
        self.round.phase = GamePhase::Running;
        systems::invader_movement::set_all_moving(&mut self.registry, &mut self.scene, true);

        log::info!("Round resumed");
        self.events.push(GameEvent::Resumed);
        self.presenter.on_status("");
        true
    }

    /// Handle a collision-began notification from the broad phase.
    pub fn collision_began(&mut self, a: EntityId, b: EntityId) -> CollisionKind {
        systems::collision_router::run(
            &mut self.registry,
            &mut self.scene,
            &mut self.presenter,
            &mut self.round,
            &mut self.events,
            a,
            b,
        )
    }

    /// Store settings for the next restart. The running round is unaffected.
    pub fn set_config(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        log::info!(
            "Settings changed (rows {}, columns {}, max speed {:.3}); applies at next restart",
            config.rows,
            config.columns,
            config.max_speed
        );
        self.pending_config = Some(config);
        Ok(())
    }

    /// Move the ship. Bullets fired afterwards spawn at the new position.
    pub fn set_player_position(&mut self, position: Vec3) {
        self.player_position = position;
    }

    /// Apply a single command immediately.
    ///
    /// A refused bullet or invalid settings are logged and dropped. Only a
    /// restart that cannot respawn the round is returned as an error.
    pub fn apply(&mut self, command: GameCommand) -> Result<(), EngineError> {
        match command {
            GameCommand::Fire => {
                if let Err(err) = self.fire() {
                    log::warn!("Fire dropped: {err}");
                }
            }
            GameCommand::MovePlayer { x, y, z } => {
                self.set_player_position(Vec3::new(x, y, z));
            }
            GameCommand::Pause => {
                self.pause();
            }
            GameCommand::Resume => {
                self.resume();
            }
            GameCommand::Restart => {
                self.restart()?;
            }
            GameCommand::Configure { config } => {
                if let Err(err) = self.set_config(config) {
                    log::warn!("Settings rejected: {err}");
                }
            }
        }
        Ok(())
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.round.phase
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn live_invader_count(&self) -> u32 {
        self.round.live_invader_count
    }

    /// Settings the current round was spawned with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Settings waiting for the next restart, if any.
    pub fn pending_config(&self) -> Option<&GameConfig> {
        self.pending_config.as_ref()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn player_position(&self) -> Vec3 {
        self.player_position
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Process all queued commands. Stops at a failed restart.
    fn process_commands(&mut self) -> Result<(), EngineError> {
        while let Some(command) = self.command_queue.pop_front() {
            self.apply(command)?;
        }
        Ok(())
    }

    /// Run all per-tick systems in order.
    fn run_systems(&mut self, delta: f32) {
        // 1. Invader sweep
        let moved = systems::invader_movement::run(
            &mut self.registry,
            &mut self.scene,
            self.round.paused,
            self.config.max_speed,
            delta,
        );
        // 2. Bullet flight
        systems::projectile::run(&mut self.registry, &mut self.scene, delta);
        // 3. Cleanup (bullets outside the play volume)
        let removed =
            systems::cleanup::run(&mut self.registry, &mut self.scene, &mut self.despawn_buffer);

        log::trace!("Tick: {moved} invaders moved, {removed} stray bullets removed");
    }

    /// Polled every tick so the last hit and the final decrement can land in any order.
    fn check_win(&mut self) {
        if self.round.phase != GamePhase::Running
            || self.round.won
            || self.round.live_invader_count > 0
        {
            return;
        }

        self.round.won = true;
        self.round.phase = GamePhase::Won;
        log::info!(
            "Round {} won after {} shots",
            self.round.stats.round,
            self.round.stats.shots_fired
        );
        self.events.push(GameEvent::RoundWon {
            round: self.round.stats.round,
        });
        self.presenter.on_win();
        self.presenter.on_status("YOU WIN");
    }

    /// Spawn zones (once) and the invader grid, then enter Running.
    ///
    /// On failure everything spawned for the round is detached and the
    /// engine stays in Setup, so the counter never disagrees with the scene.
    fn spawn_round(&mut self) -> Result<(), EngineError> {
        if let Some(config) = self.pending_config.take() {
            self.config = config;
        }

        if !self.zones_spawned {
            if let Err(err) = world_setup::spawn_zones(&mut self.registry, &mut self.scene) {
                world_setup::clear_roles(
                    &mut self.registry,
                    &mut self.scene,
                    &[EntityRole::LossTrigger, EntityRole::BulletSponge],
                );
                log::error!("Spawn protocol failed while creating zones: {err}");
                return Err(err.into());
            }
            self.zones_spawned = true;
        }

        let spawned =
            match world_setup::spawn_formation(&mut self.registry, &mut self.scene, &self.config) {
                Ok(count) => count,
                Err(err) => {
                    world_setup::clear_round(&mut self.registry, &mut self.scene);
                    log::error!("Spawn protocol failed while creating invaders: {err}");
                    return Err(err.into());
                }
            };

        self.rounds_started += 1;
        self.round.stats.round = self.rounds_started;
        self.round.live_invader_count = spawned;
        self.round.phase = GamePhase::Running;

        log::info!(
            "Round {} started: {} rows x {} columns, max speed {:.3}",
            self.rounds_started,
            self.config.rows,
            self.config.columns,
            self.config.max_speed
        );
        self.events.push(GameEvent::RoundStarted {
            round: self.rounds_started,
            invaders: spawned,
        });
        self.presenter.on_status("");
        Ok(())
    }
}
