//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for
//! read-only) plus the engine-owned state they need. They do not own state.

pub mod ambience;
pub mod boss;
pub mod economy;
pub mod hostiles;
pub mod movement;
pub mod projectiles;
pub mod reload;
pub mod snapshot;
pub mod waves;
pub mod weapons;
