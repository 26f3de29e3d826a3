use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use log::info;

use holdout_app::autopilot::Autopilot;
use holdout_app::game_loop::{self, LoopConfig, TICK_DURATION};
use holdout_app::logging;
use holdout_app::session::{self, SessionSummary};
use holdout_app::state::{shared_snapshot, GameLoopCommand};
use holdout_core::commands::PlayerCommand;
use holdout_core::config::Tuning;
use holdout_core::constants::TICK_RATE;
use holdout_core::enums::GamePhase;
use holdout_sim::engine::{SimConfig, SimulationEngine};

/// Headless top-down survival shooter driven by a built-in autopilot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON tuning file; unnamed fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for world generation and spawns
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Quit the session after this many seconds of simulation time
    #[arg(long, default_value_t = 120.0)]
    max_secs: f64,

    /// Run as fast as possible on the main thread instead of at 60Hz
    #[arg(long)]
    unpaced: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let tuning = match &args.config {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    tuning.validate().context("tuning rejected")?;
    if args.max_secs.is_nan() || args.max_secs <= 0.0 {
        bail!("--max-secs must be positive, got {}", args.max_secs);
    }

    let sim = SimConfig {
        seed: args.seed,
        tuning,
    };
    let max_ticks = (args.max_secs * TICK_RATE as f64).ceil() as u64;
    info!(
        "seed {}, limit {:.0}s, {}",
        sim.seed,
        args.max_secs,
        if args.unpaced { "unpaced" } else { "60Hz" }
    );

    let summary = if args.unpaced {
        let mut engine = SimulationEngine::new(sim);
        session::run_to_end(&mut engine, &mut Autopilot::new(), max_ticks)
    } else {
        run_paced(sim, max_ticks)?
    };

    info!(
        "{} after {:.1}s: wave {}, score {}, health {}",
        if summary.died { "player died" } else { "session over" },
        summary.elapsed_secs,
        summary.wave,
        summary.score,
        summary.health
    );
    Ok(())
}

/// Run the game loop thread in real time, feeding it autopilot input
/// from the latest published snapshot.
fn run_paced(sim: SimConfig, max_ticks: u64) -> Result<SessionSummary> {
    let latest = shared_snapshot();
    let handle = game_loop::spawn_game_loop(LoopConfig { sim, paced: true }, latest.clone());
    let mut autopilot = Autopilot::new();
    let mut last_planned = None;
    let mut died = false;
    let started = Instant::now();
    let wall_limit = Duration::from_secs_f64(max_ticks as f64 / TICK_RATE as f64) * 2 + Duration::from_secs(5);

    let final_snapshot = loop {
        std::thread::sleep(TICK_DURATION / 2);

        let snapshot = latest
            .lock()
            .map_err(|_| anyhow!("snapshot lock poisoned"))?
            .clone();
        let Some(snapshot) = snapshot else {
            continue;
        };
        died |= snapshot.phase == GamePhase::GameOver;

        if snapshot.phase == GamePhase::Ended || handle.is_finished() {
            break snapshot;
        }
        if last_planned == Some(snapshot.time.tick) && snapshot.phase == GamePhase::Active {
            continue;
        }
        last_planned = Some(snapshot.time.tick);

        let out_of_time = snapshot.time.tick >= max_ticks || started.elapsed() > wall_limit;
        if out_of_time && snapshot.phase == GamePhase::Active {
            info!("time limit reached at tick {}", snapshot.time.tick);
            handle
                .send(GameLoopCommand::PlayerCommand(PlayerCommand::Quit))
                .context("game loop stopped")?;
            continue;
        }

        let plan = autopilot.plan(&snapshot);
        handle
            .send(GameLoopCommand::SetInput(plan.held))
            .context("game loop stopped")?;
        for command in plan.commands {
            handle
                .send(GameLoopCommand::PlayerCommand(command))
                .context("game loop stopped")?;
        }
    };

    handle.join().map_err(|_| anyhow!("game loop thread panicked"))?;
    Ok(SessionSummary::from_snapshot(&final_snapshot, died))
}
