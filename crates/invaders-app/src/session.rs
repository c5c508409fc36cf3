//! One running game: engine, headless scene, contact detection and an
//! optional autopilot, stepped together.

use invaders_core::commands::GameCommand;
use invaders_core::config::GameConfig;
use invaders_core::state::RoundSnapshot;
use invaders_sim::error::EngineError;
use invaders_sim::presenter::Presenter;
use invaders_sim::scene::HeadlessScene;
use invaders_sim::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::broad_phase::BroadPhase;

pub struct Session<P: Presenter> {
    engine: SimulationEngine<HeadlessScene, P>,
    broad_phase: BroadPhase,
    autopilot: Option<Autopilot>,
    last_snapshot: Option<RoundSnapshot>,
}

impl<P: Presenter> Session<P> {
    /// Build the engine and spawn the first round.
    pub fn new(
        config: GameConfig,
        presenter: P,
        autopilot: Option<Autopilot>,
    ) -> Result<Self, EngineError> {
        let sim_config = SimConfig {
            game: config,
            ..Default::default()
        };
        let mut engine = SimulationEngine::new(sim_config, HeadlessScene::new(), presenter)?;
        engine.start()?;

        Ok(Self {
            engine,
            broad_phase: BroadPhase::new(),
            autopilot,
            last_snapshot: None,
        })
    }

    pub fn queue_command(&mut self, command: GameCommand) {
        self.engine.queue_command(command);
    }

    /// Deliver contacts for the current poses, then advance one tick.
    pub fn step(&mut self, delta: f32) -> Result<RoundSnapshot, EngineError> {
        if let (Some(pilot), Some(snapshot)) = (self.autopilot.as_mut(), self.last_snapshot.as_ref()) {
            self.engine.queue_commands(pilot.plan(snapshot));
        }

        for (a, b) in self.broad_phase.update(self.engine.scene()) {
            self.engine.collision_began(a, b);
        }

        let snapshot = self.engine.tick(delta)?;
        self.last_snapshot = Some(snapshot.clone());
        Ok(snapshot)
    }

    pub fn engine(&self) -> &SimulationEngine<HeadlessScene, P> {
        &self.engine
    }
}
