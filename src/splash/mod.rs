//! Deterministic splash state machine
//!
//! All progress logic lives here. This module must be pure:
//! - Advanced only by explicit tick/timeout events
//! - No rendering, timers, or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Phase, SplashRun};
pub use tick::{TickOutcome, TimeoutOutcome, tick, timeout};
