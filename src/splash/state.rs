//! State for a single animation run

/// Phase of one animation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Repeating ticker active, progress accumulating
    Running,
    /// Progress clamped at 100, waiting out the pause before the fade
    Completing,
    /// Fade marker applied, waiting for the CSS transition to finish
    FadingOut,
    /// Splash removed from layout. Terminal.
    Removed,
}

/// State of one animation run
///
/// Transitions are one-directional: Running -> Completing -> FadingOut ->
/// Removed. Events that arrive in the wrong phase (stale timers) leave the
/// state untouched.
#[derive(Debug, Clone)]
pub struct SplashRun {
    /// Accumulated progress in percent, [0, 100]
    pub progress: f32,
    /// Current phase
    pub phase: Phase,
    /// Ticks processed so far
    pub ticks: u32,
}

impl SplashRun {
    /// Fresh run at 0%
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            phase: Phase::Running,
            ticks: 0,
        }
    }

    /// True once the run has finished and no further events are acted on
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Removed
    }
}

impl Default for SplashRun {
    fn default() -> Self {
        Self::new()
    }
}
