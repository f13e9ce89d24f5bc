//! Splash controller
//!
//! Owns the session store, the render target, and at most one animation
//! run. The host keeps ownership of the actual timers; after every event
//! the controller hands back a `TimerOp` describing what to do with them,
//! so tests can drive the whole timeline with a simulated clock.

use crate::consts::*;
use crate::render::RenderTarget;
use crate::splash::{Phase, SplashRun, TickOutcome, TimeoutOutcome, tick, timeout};
use crate::storage::SessionStore;

/// Result of `initialize`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Session flag was set: splash hidden synchronously, no run started
    Skipped,
    /// Fresh session: host must start the ticker at `TICK_INTERVAL_MS`
    Started,
    /// A run is already in flight; the call did nothing
    AlreadyRunning,
}

/// Timer operation the host must perform after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOp {
    /// Keep the current timers as they are
    None,
    /// Cancel the repeating ticker, then fire one shot after `delay_ms`
    CancelTickerThenDelay { delay_ms: u32 },
    /// Fire one shot after `delay_ms`
    Delay { delay_ms: u32 },
    /// Run finished; no timers remain
    Done,
}

/// Drives one splash run per page load
pub struct SplashController<S, R> {
    store: S,
    target: R,
    run: Option<SplashRun>,
}

impl<S: SessionStore, R: RenderTarget> SplashController<S, R> {
    pub fn new(store: S, target: R) -> Self {
        Self {
            store,
            target,
            run: None,
        }
    }

    /// Decide between the skip path and an animation run.
    ///
    /// Reads the session flag at call time. A truthy (non-empty) value
    /// means a run already completed this session: the splash is hidden
    /// synchronously and content revealed, with zero timers. A failing
    /// read counts as absent. Calling again while a run is in flight is
    /// a no-op.
    pub fn initialize(&mut self) -> InitOutcome {
        if let Some(run) = &self.run {
            if !run.is_terminal() {
                log::warn!("initialize() called while a run is in flight, ignoring");
                return InitOutcome::AlreadyRunning;
            }
        }

        let shown = self
            .store
            .get(SHOWN_FLAG_KEY)
            .is_some_and(|v| !v.is_empty());

        if shown {
            log::info!("splash already shown this session, skipping");
            self.target.remove_splash();
            self.target.reveal_content();
            InitOutcome::Skipped
        } else {
            log::info!(
                "starting splash run ({} ticks at {} ms)",
                TICK_COUNT,
                TICK_INTERVAL_MS
            );
            self.run = Some(SplashRun::new());
            InitOutcome::Started
        }
    }

    /// Handle one repeating-timer tick.
    pub fn on_tick(&mut self) -> TimerOp {
        let Some(run) = self.run.as_mut() else {
            return TimerOp::None;
        };

        match tick(run) {
            TickOutcome::Progress { fill, label } => {
                self.target.set_fill(fill);
                self.target.set_label(label);
                TimerOp::None
            }
            TickOutcome::Complete => {
                self.target.set_fill(100.0);
                self.target.set_label(100);
                log::info!("progress complete after {} ticks", run.ticks);
                TimerOp::CancelTickerThenDelay {
                    delay_ms: COMPLETE_PAUSE_MS,
                }
            }
            TickOutcome::Stale => TimerOp::None,
        }
    }

    /// Handle one of the two one-shot delays firing.
    ///
    /// The session flag is written at fade start, before content is
    /// revealed; a dropped write only means the splash replays next load.
    pub fn on_timeout(&mut self) -> TimerOp {
        let Some(run) = self.run.as_mut() else {
            return TimerOp::None;
        };

        match timeout(run) {
            TimeoutOutcome::BeginFade => {
                self.target.begin_fade();
                self.store.set(SHOWN_FLAG_KEY, SHOWN_FLAG_VALUE);
                self.target.reveal_content();
                log::info!("fade started, session flag set");
                TimerOp::Delay {
                    delay_ms: FADE_DURATION_MS,
                }
            }
            TimeoutOutcome::Remove => {
                self.target.remove_splash();
                log::info!("splash removed from layout");
                TimerOp::Done
            }
            TimeoutOutcome::Stale => {
                log::warn!("stale delay fired in phase {:?}", run.phase);
                TimerOp::None
            }
        }
    }

    /// Current run phase, `None` before a run starts or after a skip
    pub fn phase(&self) -> Option<Phase> {
        self.run.as_ref().map(|r| r.phase)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> &R {
        &self.target
    }
}
