//! Presentation collaborator: semantic callbacks for the UI layer.

use invaders_core::types::EntityId;

/// Receives round outcomes. Every method defaults to a no-op.
pub trait Presenter {
    /// An invader was destroyed; `remaining` invaders are still alive.
    fn on_hit(&mut self, _invader: EntityId, _remaining: u32) {}

    /// The round was lost. Called once per round.
    fn on_loss(&mut self) {}

    /// The round was won. Called once per round.
    fn on_win(&mut self) {}

    /// Status text to overlay on the view; empty clears it.
    fn on_status(&mut self, _status: &str) {}
}

/// Reports callbacks through the `log` facade.
#[derive(Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn on_hit(&mut self, invader: EntityId, remaining: u32) {
        log::info!("Invader {invader} destroyed, {remaining} remaining");
    }

    fn on_loss(&mut self) {
        log::info!("Round lost");
    }

    fn on_win(&mut self) {
        log::info!("Round won");
    }

    fn on_status(&mut self, status: &str) {
        if !status.is_empty() {
            log::info!("Status: {status}");
        }
    }
}

/// Records every callback, for tests and for shells that poll.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    pub hits: Vec<(EntityId, u32)>,
    pub losses: u32,
    pub wins: u32,
    pub statuses: Vec<String>,
}

impl RecordingPresenter {
    /// Most recent status text, if any was pushed.
    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }
}

impl Presenter for RecordingPresenter {
    fn on_hit(&mut self, invader: EntityId, remaining: u32) {
        self.hits.push((invader, remaining));
    }

    fn on_loss(&mut self) {
        self.losses += 1;
    }

    fn on_win(&mut self) {
        self.wins += 1;
    }

    fn on_status(&mut self, status: &str) {
        self.statuses.push(status.to_string());
    }
}
