//! Application state shared between the front end and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;

use invaders_core::commands::GameCommand;
use invaders_core::state::RoundSnapshot;
use invaders_sim::presenter::Presenter;

use crate::config::AppError;
use crate::game_loop::{self, LoopExit, LoopSettings};
use crate::session::Session;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A command to forward to the simulation engine.
    Game(GameCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// `Sender` is not `Sync`, so it lives behind a `Mutex`. The latest snapshot
/// is shared with the game loop thread through an `Arc<Mutex<...>>`.
pub struct AppState {
    /// Channel sender to the game loop thread. `None` before `start`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<RoundSnapshot>>>,
    /// Whether the game loop has been started.
    pub running: Mutex<bool>,
    loop_handle: Mutex<Option<JoinHandle<LoopExit>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the game loop thread. Fails if it was already started.
    pub fn start<P>(&self, session: Session<P>, settings: LoopSettings) -> Result<(), AppError>
    where
        P: Presenter + Send + 'static,
    {
        let mut running = lock(&self.running);
        if *running {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(session, settings, self.latest_snapshot.clone())?;

        *lock(&self.command_tx) = Some(cmd_tx);
        *lock(&self.loop_handle) = Some(handle);
        *running = true;
        Ok(())
    }

    /// Forward a command to the simulation.
    pub fn send(&self, command: GameCommand) -> Result<(), AppError> {
        self.send_raw(GameLoopCommand::Game(command))
    }

    /// Ask the game loop to stop. The loop exits at its next tick boundary.
    pub fn shutdown(&self) -> Result<(), AppError> {
        self.send_raw(GameLoopCommand::Shutdown)
    }

    /// Latest snapshot, if the loop has ticked.
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        lock(&self.latest_snapshot).clone()
    }

    /// Block until the game loop thread exits.
    pub fn wait(&self) -> Result<LoopExit, AppError> {
        let handle = lock(&self.loop_handle).take().ok_or(AppError::NotStarted)?;
        let exit = handle.join().map_err(|_| AppError::Panicked)?;
        *lock(&self.running) = false;
        *lock(&self.command_tx) = None;
        Ok(exit)
    }

    fn send_raw(&self, command: GameLoopCommand) -> Result<(), AppError> {
        match lock(&self.command_tx).as_ref() {
            Some(tx) => tx.send(command).map_err(|_| AppError::Disconnected),
            None => Err(AppError::NotStarted),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
