//! Wave director finite state machine.
//!
//! `Active` → `ClearedPending` → `Cooldown` → (respawn) → `Active`.
//! A forced advance performs the respawn from any state. Pure logic: the
//! caller reports the population and applies the returned [`Respawn`].

use log::{debug, info};

use holdout_core::config::Tuning;
use holdout_core::enums::WavePhase;

/// What the director observed this tick.
#[derive(Debug, Clone, Copy)]
pub struct WaveContext {
    pub hostiles_alive: u32,
    pub boss_alive: bool,
    pub now_secs: f64,
    /// Player asked to skip ahead.
    pub force_next: bool,
}

/// Population to spawn for a new wave. Existing basic hostiles are
/// replaced, not topped up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Respawn {
    pub wave: u32,
    pub hostile_count: u32,
    pub spawn_boss: bool,
}

#[derive(Debug, Clone)]
pub struct WaveDirector {
    wave: u32,
    phase: WavePhase,
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveDirector {
    /// Director positioned at wave 1, hostiles live.
    pub fn new() -> Self {
        Self {
            wave: 1,
            phase: WavePhase::Active,
        }
    }

    /// The opening population. Wave 1 uses the base count on its own; the
    /// `base + wave * increment` formula applies from the first respawn on.
    pub fn opening_wave(&self, tuning: &Tuning) -> Respawn {
        Respawn {
            wave: self.wave,
            hostile_count: tuning.wave_base_hostiles,
            spawn_boss: false,
        }
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    /// Seconds left before the next wave, while cooling down.
    pub fn cooldown_remaining(&self, now_secs: f64, tuning: &Tuning) -> Option<f64> {
        match self.phase {
            WavePhase::Cooldown { started_at_secs } => {
                Some((tuning.wave_cooldown_secs - (now_secs - started_at_secs)).max(0.0))
            }
            _ => None,
        }
    }

    /// Advance the state machine. Returns the wave to spawn, if any.
    pub fn evaluate(&mut self, ctx: &WaveContext, tuning: &Tuning) -> Option<Respawn> {
        if ctx.force_next {
            debug!("wave {} skipped by player", self.wave);
            return Some(self.respawn(ctx, tuning));
        }

        if self.phase == WavePhase::Active {
            if ctx.hostiles_alive > 0 || ctx.boss_alive {
                return None;
            }
            self.phase = WavePhase::ClearedPending;
        }

        if self.phase == WavePhase::ClearedPending {
            debug!("wave {} cleared at {:.2}s", self.wave, ctx.now_secs);
            self.phase = WavePhase::Cooldown {
                started_at_secs: ctx.now_secs,
            };
        }

        if let WavePhase::Cooldown { started_at_secs } = self.phase {
            if ctx.now_secs - started_at_secs >= tuning.wave_cooldown_secs {
                return Some(self.respawn(ctx, tuning));
            }
        }

        None
    }

    fn respawn(&mut self, ctx: &WaveContext, tuning: &Tuning) -> Respawn {
        self.wave += 1;
        self.phase = WavePhase::Active;

        let respawn = Respawn {
            wave: self.wave,
            hostile_count: tuning.hostiles_for_wave(self.wave),
            spawn_boss: self.wave % tuning.boss_wave_interval == 0 && !ctx.boss_alive,
        };
        info!(
            "wave {} begins: {} hostiles{}",
            respawn.wave,
            respawn.hostile_count,
            if respawn.spawn_boss { " + boss" } else { "" }
        );
        respawn
    }
}
