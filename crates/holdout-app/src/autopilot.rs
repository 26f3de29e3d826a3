//! Built-in input source for headless sessions.
//!
//! Reads only the published snapshot, so it can drive either a local engine
//! or a game loop thread. Keeps away from the nearest hostile, shoots at
//! it, reloads when dry and buys ammo when standing at the ammo station.

use glam::Vec2;

use holdout_core::commands::{HeldInput, PlayerCommand};
use holdout_core::enums::{EntityKind, GamePhase, StationKind};
use holdout_core::state::GameStateSnapshot;

/// Hostiles closer than this make the autopilot back off.
const RETREAT_DISTANCE: f32 = 250.0;
/// Ticks between shots.
const FIRE_INTERVAL_TICKS: u64 = 8;
/// Ignore axis components smaller than this when choosing keys.
const AXIS_DEADZONE: f32 = 1.0;

/// Input for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    pub held: HeldInput,
    pub commands: Vec<PlayerCommand>,
}

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    last_fire_tick: Option<u64>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the input for the tick after `snapshot`.
    pub fn plan(&mut self, snapshot: &GameStateSnapshot) -> Plan {
        let mut plan = Plan::default();
        match snapshot.phase {
            GamePhase::Ready => {
                plan.commands.push(PlayerCommand::StartSession);
                return plan;
            }
            GamePhase::Active => {}
            GamePhase::Paused | GamePhase::GameOver | GamePhase::Ended => return plan,
        }

        let Some(player) = find(snapshot, EntityKind::Player) else {
            return plan;
        };
        let hud = &snapshot.hud;
        let target = nearest_hostile(snapshot, player);

        plan.held.pointer = target.unwrap_or(player + Vec2::X * 100.0);

        let low_on_ammo = hud.reserve_ammo < hud.magazine_capacity;
        let ammo_station = find(snapshot, EntityKind::AmmoStation);
        if let Some(hostile) = target.filter(|t| t.distance(player) < RETREAT_DISTANCE) {
            steer(&mut plan.held, player - hostile);
        } else if let Some(station) = ammo_station.filter(|_| low_on_ammo) {
            steer(&mut plan.held, station - player);
        }

        if hud.station_in_range == Some(StationKind::Ammo) && low_on_ammo {
            plan.commands.push(PlayerCommand::Interact);
        }

        if hud.reloading {
            return plan;
        }
        if hud.bullets_in_magazine == 0 {
            if hud.reserve_ammo > 0 {
                plan.commands.push(PlayerCommand::Reload);
            }
            return plan;
        }

        let tick = snapshot.time.tick;
        let cooled = self
            .last_fire_tick
            .map_or(true, |last| tick >= last + FIRE_INTERVAL_TICKS);
        if target.is_some() && cooled {
            plan.commands.push(PlayerCommand::Fire);
            self.last_fire_tick = Some(tick);
        }

        plan
    }
}

fn find(snapshot: &GameStateSnapshot, kind: EntityKind) -> Option<Vec2> {
    snapshot
        .drawables
        .iter()
        .find(|d| d.kind == kind)
        .map(|d| d.position)
}

/// Nearest visible hostile, or failing that the nearest edge marker
/// mapped back to world space.
fn nearest_hostile(snapshot: &GameStateSnapshot, player: Vec2) -> Option<Vec2> {
    let visible = snapshot
        .drawables
        .iter()
        .filter(|d| matches!(d.kind, EntityKind::Hostile | EntityKind::Boss))
        .map(|d| d.position);
    let off_screen = snapshot
        .indicators
        .iter()
        .map(|marker| snapshot.camera.offset + *marker);

    visible
        .chain(off_screen)
        .min_by(|a, b| a.distance_squared(player).total_cmp(&b.distance_squared(player)))
}

fn steer(held: &mut HeldInput, direction: Vec2) {
    held.left = direction.x < -AXIS_DEADZONE;
    held.right = direction.x > AXIS_DEADZONE;
    held.up = direction.y < -AXIS_DEADZONE;
    held.down = direction.y > AXIS_DEADZONE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdout_core::state::{Drawable, HudView};

    fn active(drawables: Vec<Drawable>) -> GameStateSnapshot {
        GameStateSnapshot {
            phase: GamePhase::Active,
            drawables,
            hud: HudView {
                bullets_in_magazine: 30,
                magazine_capacity: 30,
                reserve_ammo: 90,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn drawable(kind: EntityKind, x: f32, y: f32) -> Drawable {
        Drawable {
            kind,
            position: Vec2::new(x, y),
            facing: 0.0,
        }
    }

    #[test]
    fn test_starts_session_when_ready() {
        let plan = Autopilot::new().plan(&GameStateSnapshot::default());
        assert_eq!(plan.commands, vec![PlayerCommand::StartSession]);
    }

    #[test]
    fn test_retreats_and_fires_at_close_hostile() {
        let snapshot = active(vec![
            drawable(EntityKind::Hostile, 1600.0, 1000.0),
            drawable(EntityKind::Player, 1500.0, 1000.0),
        ]);
        let plan = Autopilot::new().plan(&snapshot);

        assert_eq!(plan.held.pointer, Vec2::new(1600.0, 1000.0));
        assert!(plan.held.left && !plan.held.right);
        assert!(!plan.held.up && !plan.held.down);
        assert_eq!(plan.commands, vec![PlayerCommand::Fire]);
    }

    #[test]
    fn test_fire_cadence() {
        let mut pilot = Autopilot::new();
        let mut snapshot = active(vec![
            drawable(EntityKind::Boss, 1900.0, 1000.0),
            drawable(EntityKind::Player, 1500.0, 1000.0),
        ]);

        let shots = (0..16)
            .filter(|tick| {
                snapshot.time.tick = *tick;
                pilot.plan(&snapshot).commands.contains(&PlayerCommand::Fire)
            })
            .count();
        assert_eq!(shots, 2);
    }

    #[test]
    fn test_reloads_when_dry() {
        let mut snapshot = active(vec![
            drawable(EntityKind::Hostile, 1900.0, 1000.0),
            drawable(EntityKind::Player, 1500.0, 1000.0),
        ]);
        snapshot.hud.bullets_in_magazine = 0;
        let plan = Autopilot::new().plan(&snapshot);
        assert_eq!(plan.commands, vec![PlayerCommand::Reload]);

        snapshot.hud.reserve_ammo = 0;
        let plan = Autopilot::new().plan(&snapshot);
        assert!(plan.commands.is_empty());
    }

    #[test]
    fn test_heads_for_ammo_and_buys() {
        let mut snapshot = active(vec![
            drawable(EntityKind::AmmoStation, 1250.0, 1150.0),
            drawable(EntityKind::Player, 1500.0, 1000.0),
        ]);
        snapshot.hud.reserve_ammo = 10;
        let plan = Autopilot::new().plan(&snapshot);
        assert!(plan.held.left && plan.held.down);
        assert!(plan.commands.is_empty(), "nothing to shoot, not yet in range");

        snapshot.hud.station_in_range = Some(StationKind::Ammo);
        let plan = Autopilot::new().plan(&snapshot);
        assert!(plan.commands.contains(&PlayerCommand::Interact));
    }

    #[test]
    fn test_uses_edge_marker_when_nothing_visible() {
        let mut snapshot = active(vec![drawable(EntityKind::Player, 1500.0, 1000.0)]);
        snapshot.camera.offset = Vec2::new(900.0, 650.0);
        snapshot.indicators = vec![Vec2::new(1190.0, 350.0)];
        let plan = Autopilot::new().plan(&snapshot);
        assert_eq!(plan.held.pointer, Vec2::new(2090.0, 1000.0));
    }

    #[test]
    fn test_idle_outside_active() {
        let snapshot = GameStateSnapshot {
            phase: GamePhase::GameOver,
            ..Default::default()
        };
        assert_eq!(Autopilot::new().plan(&snapshot), Plan::default());
    }
}
