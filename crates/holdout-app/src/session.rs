//! Unpaced sessions: the engine runs on the calling thread, one autopilot
//! plan per tick, as fast as the CPU allows.

use log::{info, trace};

use holdout_core::commands::PlayerCommand;
use holdout_core::enums::GamePhase;
use holdout_core::state::GameStateSnapshot;
use holdout_sim::engine::SimulationEngine;

use crate::autopilot::{Autopilot, Plan};

/// End-of-session figures for the CLI report.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub wave: u32,
    pub score: u32,
    pub health: i32,
    /// Whether the player died, as opposed to the run being cut short.
    pub died: bool,
}

impl SessionSummary {
    pub fn from_snapshot(snapshot: &GameStateSnapshot, died: bool) -> Self {
        Self {
            ticks: snapshot.time.tick,
            elapsed_secs: snapshot.time.elapsed_secs,
            wave: snapshot.hud.wave,
            score: snapshot.hud.score,
            health: snapshot.hud.health,
            died,
        }
    }
}

/// Apply one plan to the engine.
pub fn apply(engine: &mut SimulationEngine, plan: Plan) {
    engine.set_held_input(plan.held);
    engine.queue_commands(plan.commands);
}

/// Drive `engine` with `autopilot` until the session ends or `max_ticks`
/// of simulation time have passed, in which case the session is quit.
pub fn run_to_end(engine: &mut SimulationEngine, autopilot: &mut Autopilot, max_ticks: u64) -> SessionSummary {
    let mut snapshot = engine.snapshot();
    let mut died = false;
    let mut last_wave = 0;

    while snapshot.phase != GamePhase::Ended {
        if snapshot.time.tick >= max_ticks && snapshot.phase == GamePhase::Active {
            info!("time limit reached at tick {}", snapshot.time.tick);
            engine.queue_command(PlayerCommand::Quit);
        } else {
            apply(engine, autopilot.plan(&snapshot));
        }

        snapshot = engine.tick();
        died |= snapshot.phase == GamePhase::GameOver;
        if snapshot.hud.wave != last_wave {
            last_wave = snapshot.hud.wave;
            trace!(
                "tick {}: wave {} with {} hostiles",
                snapshot.time.tick,
                last_wave,
                snapshot.hud.hostiles_alive
            );
        }
    }

    SessionSummary::from_snapshot(&snapshot, died)
}
