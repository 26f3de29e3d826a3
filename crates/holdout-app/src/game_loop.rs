//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via `mpsc` channel; the latest snapshot is
//! stored in shared state for polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use holdout_core::constants::TICK_RATE;
use holdout_core::enums::GamePhase;
use holdout_core::state::GameStateSnapshot;
use holdout_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop thread runs.
#[derive(Debug, Clone, Default)]
pub struct LoopConfig {
    pub sim: SimConfig,
    /// Sleep to the next tick boundary. When false the loop ticks as fast
    /// as it can.
    pub paced: bool,
}

/// Owner side of a running game loop.
pub struct GameLoopHandle {
    commands: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<()>,
}

impl GameLoopHandle {
    pub fn send(&self, command: GameLoopCommand) -> Result<(), mpsc::SendError<GameLoopCommand>> {
        self.commands.send(command)
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the loop thread to exit.
    pub fn join(self) -> std::thread::Result<()> {
        drop(self.commands);
        self.thread.join()
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(config: LoopConfig, latest_snapshot: SharedSnapshot) -> GameLoopHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("holdout-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    GameLoopHandle {
        commands: cmd_tx,
        thread,
    }
}

/// The game loop. Runs until Shutdown, channel disconnect, or the session ends.
fn run_game_loop(
    config: LoopConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let mut engine = SimulationEngine::new(config.sim);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::SetInput(held)) => engine.set_held_input(held),
                Ok(GameLoopCommand::Shutdown) => {
                    info!("game loop shut down at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel closed; stopping game loop");
                    return;
                }
            }
        }

        // 2. Advance one tick (engine handles phase gating internally)
        let snapshot = engine.tick();
        let ended = snapshot.phase == GamePhase::Ended;

        // 3. Store latest snapshot for polling
        publish(latest_snapshot, snapshot);
        if ended {
            return;
        }

        // 4. Sleep until next tick
        if !config.paced {
            continue;
        }
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // More than two ticks behind: drop the backlog
            next_tick_time = now;
        }
    }
}

fn publish(latest_snapshot: &SharedSnapshot, snapshot: GameStateSnapshot) {
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::shared_snapshot;
    use holdout_core::commands::{HeldInput, PlayerCommand};

    fn unpaced() -> LoopConfig {
        LoopConfig {
            paced: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession))
            .unwrap();
        tx.send(GameLoopCommand::SetInput(HeldInput {
            up: true,
            ..Default::default()
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartSession)
        );
        assert!(matches!(commands[1], GameLoopCommand::SetInput(h) if h.up));
        assert_eq!(commands[2], GameLoopCommand::Shutdown);
    }

    #[test]
    fn test_loop_exits_when_session_ends() {
        let latest = shared_snapshot();
        let handle = spawn_game_loop(unpaced(), latest.clone());
        handle
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession))
            .unwrap();
        handle
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::Quit))
            .unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Ended);
    }

    #[test]
    fn test_loop_exits_on_shutdown() {
        let latest = shared_snapshot();
        let handle = spawn_game_loop(unpaced(), latest.clone());
        handle.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        // Never started, so whatever was published is still Ready.
        if let Some(snapshot) = latest.lock().unwrap().clone() {
            assert_eq!(snapshot.phase, GamePhase::Ready);
        };
    }

    #[test]
    fn test_loop_exits_on_disconnect() {
        let latest = shared_snapshot();
        let handle = spawn_game_loop(unpaced(), latest);
        // Dropping the only sender disconnects the channel.
        handle.join().unwrap();
    }

    #[test]
    fn test_paced_loop_runs_near_real_time() {
        let latest = shared_snapshot();
        let handle = spawn_game_loop(
            LoopConfig {
                paced: true,
                ..Default::default()
            },
            latest.clone(),
        );
        handle
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession))
            .unwrap();
        std::thread::sleep(Duration::from_millis(250));
        handle.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let ticks = latest.lock().unwrap().as_ref().map_or(0, |s| s.time.tick);
        // ~15 ticks in 250 ms; generous bounds for loaded CI machines.
        assert!(ticks > 0 && ticks < 60, "ran {ticks} ticks");
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
