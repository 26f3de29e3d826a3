//! The simulation engine.
//!
//! `SimulationEngine` owns the hecs world (hostiles, boss, projectiles),
//! the static world (obstacles, stations), the player, and all session
//! state. It processes player input, runs every system in a fixed order,
//! and produces `GameStateSnapshot`s. Completely headless, so a whole
//! session can be driven from a test.

use std::collections::VecDeque;

use hecs::World;
use log::{info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use holdout_core::commands::{HeldInput, PlayerCommand};
use holdout_core::components::Station;
use holdout_core::config::Tuning;
use holdout_core::enums::GamePhase;
use holdout_core::events::AudioEvent;
use holdout_core::state::GameStateSnapshot;
use holdout_core::types::SimTime;

use holdout_director::wave::WaveDirector;

use crate::camera::Viewport;
use crate::collision::CollisionResolver;
use crate::player::Player;
use crate::systems;
use crate::systems::snapshot::SnapshotSource;
use crate::systems::waves::Spawner;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same input = same session.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// Edge-triggered actions collected from the command queue, consumed by
/// the systems during the tick.
#[derive(Debug, Clone, Copy, Default)]
struct PendingActions {
    fire: u32,
    reload: bool,
    interact: bool,
    force_next_wave: bool,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    tuning: Tuning,
    rng: ChaCha8Rng,
    player: Player,
    resolver: CollisionResolver,
    stations: Vec<Station>,
    viewport: Viewport,
    director: WaveDirector,
    score: u32,
    held: HeldInput,
    pending: PendingActions,
    command_queue: VecDeque<PlayerCommand>,
    next_serial: u32,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    last_ambient_cue_secs: Option<f64>,
    game_over_at_secs: Option<f64>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let tuning = config.tuning;
        let center = tuning.world_center();
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: Player::new(&tuning, center),
            resolver: CollisionResolver::default(),
            stations: Vec::new(),
            viewport: Viewport::centered_on(center, tuning.viewport_size()),
            director: WaveDirector::new(),
            score: 0,
            held: HeldInput::default(),
            pending: PendingActions::default(),
            command_queue: VecDeque::new(),
            next_serial: 0,
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            last_ambient_cue_secs: None,
            game_over_at_secs: None,
            tuning,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the held inputs sampled by the next tick.
    pub fn set_held_input(&mut self, held: HeldInput) {
        self.held = held;
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        match self.phase {
            GamePhase::Active => {
                self.run_systems();
                self.time.advance();
            }
            GamePhase::GameOver => {
                self.time.advance();
                let delay_elapsed = self
                    .game_over_at_secs
                    .is_some_and(|at| self.time.since(at) >= self.tuning.game_over_delay_secs);
                if delay_elapsed {
                    info!("session ended with score {} on wave {}", self.score, self.director.wave());
                    self.phase = GamePhase::Ended;
                }
            }
            GamePhase::Ready | GamePhase::Paused | GamePhase::Ended => {}
        }
        self.pending = PendingActions::default();

        self.snapshot()
    }

    /// Build a snapshot of the current state without advancing, draining
    /// any cues produced since the last one.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let audio_events = std::mem::take(&mut self.audio_events);
        let source = SnapshotSource {
            time: &self.time,
            phase: self.phase,
            viewport: &self.viewport,
            resolver: &self.resolver,
            stations: &self.stations,
            player: &self.player,
            director: &self.director,
            tuning: &self.tuning,
            score: self.score,
        };
        systems::snapshot::build_snapshot(&self.world, &source, audio_events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn resolver(&self) -> &CollisionResolver {
        &self.resolver
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Gameplay commands only register
    /// while the session is active; everything else is silently dropped.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if self.phase == GamePhase::Ready {
                    self.start_session();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Quit => {
                if self.phase != GamePhase::Ended {
                    info!("session quit at {:.2}s", self.time.elapsed_secs);
                    self.phase = GamePhase::Ended;
                }
            }
            PlayerCommand::Fire if self.phase == GamePhase::Active => self.pending.fire += 1,
            PlayerCommand::Reload if self.phase == GamePhase::Active => self.pending.reload = true,
            PlayerCommand::Interact if self.phase == GamePhase::Active => self.pending.interact = true,
            PlayerCommand::ForceNextWave if self.phase == GamePhase::Active => {
                self.pending.force_next_wave = true
            }
            PlayerCommand::Fire
            | PlayerCommand::Reload
            | PlayerCommand::Interact
            | PlayerCommand::ForceNextWave => {}
        }
    }

    /// Build the static world, place the player, spawn wave 1.
    fn start_session(&mut self) {
        let center = self.tuning.world_center();
        self.world.clear();
        self.stations = world_setup::build_stations(&self.tuning);

        let mut keep_clear = vec![center];
        keep_clear.extend(self.stations.iter().map(|s| s.position));
        self.resolver = CollisionResolver::new(world_setup::generate_obstacles(
            &mut self.rng,
            &self.tuning,
            &keep_clear,
        ));

        self.player = Player::new(&self.tuning, center);
        self.viewport = Viewport::centered_on(center, self.tuning.viewport_size());
        self.director = WaveDirector::new();
        self.score = 0;
        self.next_serial = 0;
        self.last_ambient_cue_secs = None;
        self.game_over_at_secs = None;
        self.time = SimTime::default();

        let opening = self.director.opening_wave(&self.tuning);
        let mut spawner = Spawner {
            rng: &mut self.rng,
            resolver: &self.resolver,
            tuning: &self.tuning,
            player_position: center,
            next_serial: &mut self.next_serial,
        };
        systems::waves::apply_respawn(
            &mut self.world,
            &opening,
            &mut spawner,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );

        info!(
            "session started: {} obstacles, wave 1 with {} hostiles",
            self.resolver.len(),
            opening.hostile_count
        );
        self.phase = GamePhase::Active;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;
        let pending = self.pending;

        // 1. Reload request (edge input)
        if pending.reload {
            systems::reload::request(&mut self.player, now, &mut self.audio_events);
        }
        // 2. Reload completion
        systems::reload::run(&mut self.player, now, &self.tuning, &mut self.audio_events);
        // 3. Player movement, then face the pointer
        systems::movement::run(&mut self.player, &self.held, &self.resolver, &self.tuning);
        systems::movement::update_facing(&mut self.player, &self.held);
        // 4. Camera follows the player
        self.viewport = Viewport::centered_on(self.player.position(), self.tuning.viewport_size());
        // 5. Fire
        for _ in 0..pending.fire {
            systems::weapons::fire(
                &mut self.world,
                &mut self.player,
                self.held.pointer,
                &self.tuning,
                now,
                &mut self.audio_events,
            );
        }
        // 6. Projectiles: advance, cull, resolve hits
        systems::projectiles::run(
            &mut self.world,
            &self.viewport,
            &self.tuning,
            now,
            &mut self.score,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 7. Basic hostiles: pursue, contact damage
        systems::hostiles::run(
            &mut self.world,
            &mut self.player,
            &self.resolver,
            &self.tuning,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 8. Boss: pursue, contact damage
        systems::boss::run(
            &mut self.world,
            &mut self.player,
            &self.resolver,
            &self.tuning,
            now,
            &mut self.audio_events,
        );
        // 9. Wave bookkeeping
        let mut spawner = Spawner {
            rng: &mut self.rng,
            resolver: &self.resolver,
            tuning: &self.tuning,
            player_position: self.player.position(),
            next_serial: &mut self.next_serial,
        };
        systems::waves::run(
            &mut self.world,
            &mut self.director,
            &mut spawner,
            now,
            pending.force_next_wave,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 10. Station purchase
        if pending.interact {
            systems::economy::interact(
                &mut self.player,
                &self.stations,
                &mut self.score,
                &self.tuning,
                &mut self.audio_events,
            );
        }
        // 11. Proximity cue
        systems::ambience::run(
            &self.world,
            &self.player,
            &self.tuning,
            now,
            &mut self.last_ambient_cue_secs,
            &mut self.audio_events,
        );
        trace!(
            "tick {}: health {}, magazine {}/{}, score {}",
            self.time.tick,
            self.player.health,
            self.player.bullets_in_magazine,
            self.player.reserve_ammo,
            self.score
        );

        // 12. Termination
        if self.player.is_dead() {
            info!(
                "player died at {:.2}s on wave {} with score {}",
                now,
                self.director.wave(),
                self.score
            );
            self.audio_events.push(AudioEvent::PlayerDied);
            self.game_over_at_secs = Some(now);
            self.phase = GamePhase::GameOver;
        }
    }
}

/// Direct state access for scenario tests.
#[cfg(test)]
impl SimulationEngine {
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Drop every obstacle so movement tests see open ground.
    pub fn clear_obstacles(&mut self) {
        self.resolver = CollisionResolver::default();
    }

    pub fn set_obstacles(&mut self, obstacles: Vec<holdout_core::components::Obstacle>) {
        self.resolver = CollisionResolver::new(obstacles);
    }

    /// Remove every hostile and projectile.
    pub fn clear_entities(&mut self) {
        self.world.clear();
    }

    pub fn spawn_hostile_at(&mut self, position: holdout_core::Vec2) -> hecs::Entity {
        let serial = self.next_serial;
        self.next_serial += 1;
        world_setup::spawn_hostile(&mut self.world, &self.tuning, position, serial)
    }

    pub fn spawn_boss_at(&mut self, position: holdout_core::Vec2) -> hecs::Entity {
        let serial = self.next_serial;
        self.next_serial += 1;
        world_setup::spawn_boss(&mut self.world, &self.tuning, position, serial)
    }

    pub fn spawn_projectile_at(&mut self, position: holdout_core::Vec2, angle: f32) -> hecs::Entity {
        world_setup::spawn_projectile(&mut self.world, &self.tuning, position, angle, self.time.elapsed_secs)
    }
}
