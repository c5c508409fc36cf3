//! Game loop thread: steps a session at a fixed rate and publishes snapshots.
//!
//! The session is moved into the thread and owned there. Commands arrive via
//! an `mpsc` channel; the latest snapshot is stored in shared state for
//! polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use invaders_core::constants::{DT, TICK_RATE};
use invaders_core::enums::GamePhase;
use invaders_core::state::RoundSnapshot;
use invaders_sim::error::EngineError;
use invaders_sim::presenter::Presenter;

use crate::config::AppError;
use crate::session::Session;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    /// Sleep between ticks to hold the tick rate. Off runs as fast as possible.
    pub realtime: bool,
    /// Wall-clock speed multiplier when `realtime` is set.
    pub time_scale: f64,
    /// Stop after this many ticks.
    pub max_ticks: Option<u64>,
    /// Stop once the round is won or lost.
    pub stop_when_over: bool,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            realtime: true,
            time_scale: 1.0,
            max_ticks: None,
            stop_when_over: false,
        }
    }
}

/// Why the game loop returned.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopExit {
    Shutdown,
    Disconnected,
    RoundOver(GamePhase),
    TickLimit(u64),
    Failed(EngineError),
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop<P>(
    session: Session<P>,
    settings: LoopSettings,
    latest_snapshot: Arc<Mutex<Option<RoundSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopExit>), AppError>
where
    P: Presenter + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("invaders-game-loop".into())
        .spawn(move || run_game_loop(session, settings, cmd_rx, &latest_snapshot))
        .map_err(AppError::Thread)?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, or a stop condition.
pub fn run_game_loop<P: Presenter>(
    mut session: Session<P>,
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<RoundSnapshot>>,
) -> LoopExit {
    let mut next_tick_time = Instant::now();
    let mut ticks = 0u64;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Game(cmd)) => session.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return LoopExit::Shutdown,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return LoopExit::Disconnected,
            }
        }

        // 2. Advance one tick
        let snapshot = match session.step(DT) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::error!("Simulation stopped: {err}");
                return LoopExit::Failed(err);
            }
        };
        ticks += 1;
        let phase = snapshot.phase;

        // 3. Store latest snapshot for polling
        *latest_snapshot.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot);

        if settings.stop_when_over && phase.is_terminal() {
            log::info!("Round over ({phase:?}) after {ticks} ticks");
            return LoopExit::RoundOver(phase);
        }
        if settings.max_ticks.is_some_and(|max| ticks >= max) {
            log::info!("Tick limit reached ({ticks})");
            return LoopExit::TickLimit(ticks);
        }

        if !settings.realtime {
            continue;
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let effective_tick_duration = if settings.time_scale > 0.001 {
            TICK_DURATION.div_f64(settings.time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
