use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use invaders_app::autopilot::Autopilot;
use invaders_app::config::{load_config, Overrides};
use invaders_app::game_loop::{LoopExit, LoopSettings};
use invaders_app::session::Session;
use invaders_app::state::AppState;
use invaders_core::config::GameConfig;
use invaders_sim::presenter::LogPresenter;

/// Run an invaders round headless and print the final snapshot as JSON.
#[derive(Debug, Parser)]
#[command(name = "invaders", version)]
struct Args {
    /// JSON settings file (max_speed, rows, columns).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    rows: Option<u32>,
    #[arg(long)]
    columns: Option<u32>,
    #[arg(long)]
    max_speed: Option<f32>,
    /// Give up after this many ticks.
    #[arg(long, default_value_t = 36_000)]
    max_ticks: u64,
    /// Ticks between autopilot shots.
    #[arg(long, default_value_t = 12)]
    fire_interval: u32,
    /// Leave the ship idle; the invaders will win.
    #[arg(long)]
    no_autopilot: bool,
    /// Hold the tick rate instead of running flat out.
    #[arg(long)]
    realtime: bool,
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    let config = Overrides {
        max_speed: args.max_speed,
        rows: args.rows,
        columns: args.columns,
    }
    .apply(base)
    .context("invalid settings")?;

    let autopilot = (!args.no_autopilot).then(|| Autopilot::new(args.fire_interval));
    let session =
        Session::new(config, LogPresenter, autopilot).context("failed to start the first round")?;

    let state = AppState::new();
    state.start(
        session,
        LoopSettings {
            realtime: args.realtime,
            time_scale: args.time_scale,
            max_ticks: Some(args.max_ticks),
            stop_when_over: true,
        },
    )?;

    match state.wait()? {
        LoopExit::Failed(err) => return Err(err).context("simulation failed"),
        exit => log::info!("Game loop exited: {exit:?}"),
    }

    let snapshot = state.snapshot().context("game loop produced no snapshot")?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{json}");
    Ok(())
}
