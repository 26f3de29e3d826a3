//! Decision logic for HOLDOUT.
//!
//! Implements the wave director state machine and hostile pursuit
//! steering. Operates on plain data; the simulation crate feeds it.

pub mod pursuit;
pub mod wave;

pub use holdout_core as core;
