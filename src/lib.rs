//! Preloader - a one-time page-load splash animation
//!
//! Core modules:
//! - `splash`: Deterministic progress state machine (no platform dependencies)
//! - `controller`: Drives one run against injected storage/render capabilities
//! - `storage`: Session-scoped key-value abstraction (sessionStorage on web)
//! - `render`: Splash render surface abstraction (DOM-backed on web)

pub mod controller;
pub mod render;
pub mod splash;
pub mod storage;

pub use controller::{InitOutcome, SplashController, TimerOp};
pub use render::RenderTarget;
pub use splash::{Phase, SplashRun};
pub use storage::{MemoryStore, SessionStore};

/// Timing configuration constants
pub mod consts {
    /// Total simulated loading duration (ms)
    pub const TOTAL_DURATION_MS: u32 = 5000;
    /// Repeating tick interval (ms)
    pub const TICK_INTERVAL_MS: u32 = 50;
    /// Ticks in a full run (100 for the fixed configuration)
    pub const TICK_COUNT: u32 = TOTAL_DURATION_MS / TICK_INTERVAL_MS;
    /// Progress added per tick, in percent
    pub const PROGRESS_INCREMENT: f32 = 100.0 / TICK_COUNT as f32;
    /// Pause at 100% before the fade starts (ms)
    pub const COMPLETE_PAUSE_MS: u32 = 300;
    /// Delay before removal - must match the CSS fade transition length (ms)
    pub const FADE_DURATION_MS: u32 = 500;

    /// Session storage key marking that the splash already ran
    pub const SHOWN_FLAG_KEY: &str = "preloaderShown";
    /// Value written for the session flag
    pub const SHOWN_FLAG_VALUE: &str = "true";
}
