//! Tick and timeout transitions for a splash run
//!
//! The host owns the actual timers; these functions only advance state and
//! report what must happen next, so a test can simulate the full timeline
//! without waiting on real time.

use super::state::{Phase, SplashRun};
use crate::consts::*;

/// Result of one repeating-timer tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Still running: apply these display values and keep ticking
    Progress {
        /// Fill width in percent (fractional)
        fill: f32,
        /// Rounded label value
        label: u32,
    },
    /// Progress reached 100: display 100%, cancel the ticker, wait
    /// `COMPLETE_PAUSE_MS` before the fade
    Complete,
    /// Tick arrived outside `Running` (stale timer); nothing to do
    Stale,
}

/// Advance one repeating-timer tick.
///
/// Progress accumulates by repeated float addition of a fixed increment.
/// Completion clamps at/above 100 rather than testing for equality, so
/// accumulated float drift cannot stall the run.
pub fn tick(run: &mut SplashRun) -> TickOutcome {
    if run.phase != Phase::Running {
        return TickOutcome::Stale;
    }

    run.ticks += 1;
    run.progress += PROGRESS_INCREMENT;

    if run.progress >= 100.0 {
        run.progress = 100.0;
        run.phase = Phase::Completing;
        TickOutcome::Complete
    } else {
        TickOutcome::Progress {
            fill: run.progress,
            label: run.progress.round() as u32,
        }
    }
}

/// Result of one of the two one-shot delays firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutOutcome {
    /// Completion pause elapsed: apply the fade marker, persist the session
    /// flag, reveal content, then wait `FADE_DURATION_MS` for removal
    BeginFade,
    /// Fade finished: remove the splash from layout. Terminal.
    Remove,
    /// Delay fired in an unexpected phase; nothing to do
    Stale,
}

/// Advance a one-shot delay.
pub fn timeout(run: &mut SplashRun) -> TimeoutOutcome {
    match run.phase {
        Phase::Completing => {
            run.phase = Phase::FadingOut;
            TimeoutOutcome::BeginFade
        }
        Phase::FadingOut => {
            run.phase = Phase::Removed;
            TimeoutOutcome::Remove
        }
        Phase::Running | Phase::Removed => TimeoutOutcome::Stale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_run_takes_exactly_tick_count_ticks() {
        let mut run = SplashRun::new();
        let mut completed_at = None;
        for i in 1..=TICK_COUNT + 10 {
            match tick(&mut run) {
                TickOutcome::Complete => {
                    completed_at = Some(i);
                    break;
                }
                TickOutcome::Progress { fill, .. } => {
                    assert!(fill < 100.0);
                }
                TickOutcome::Stale => panic!("unexpected stale tick at {}", i),
            }
        }
        assert_eq!(completed_at, Some(TICK_COUNT));
        assert_eq!(run.progress, 100.0);
        assert_eq!(run.phase, Phase::Completing);
    }

    #[test]
    fn test_labels_monotonic_non_decreasing() {
        let mut run = SplashRun::new();
        let mut labels = Vec::new();
        while let TickOutcome::Progress { label, .. } = tick(&mut run) {
            labels.push(label);
        }
        assert_eq!(labels.first(), Some(&1));
        assert_eq!(labels.last(), Some(&99));
        assert!(labels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_clamp_tolerates_float_drift() {
        // A run that drifted just short of 100 must still complete and land
        // on exactly 100
        let mut run = SplashRun::new();
        run.progress = 99.99999;
        assert_eq!(tick(&mut run), TickOutcome::Complete);
        assert_eq!(run.progress, 100.0);
    }

    #[test]
    fn test_tick_after_completion_is_stale() {
        let mut run = SplashRun::new();
        run.phase = Phase::Completing;
        run.progress = 100.0;
        assert_eq!(tick(&mut run), TickOutcome::Stale);
        assert_eq!(run.progress, 100.0);
        assert_eq!(run.phase, Phase::Completing);
    }

    #[test]
    fn test_timeout_sequence() {
        let mut run = SplashRun::new();
        run.phase = Phase::Completing;

        assert_eq!(timeout(&mut run), TimeoutOutcome::BeginFade);
        assert_eq!(run.phase, Phase::FadingOut);

        assert_eq!(timeout(&mut run), TimeoutOutcome::Remove);
        assert_eq!(run.phase, Phase::Removed);
        assert!(run.is_terminal());

        // Any further delay is ignored
        assert_eq!(timeout(&mut run), TimeoutOutcome::Stale);
        assert_eq!(run.phase, Phase::Removed);
    }

    #[test]
    fn test_timeout_while_running_is_stale() {
        let mut run = SplashRun::new();
        assert_eq!(timeout(&mut run), TimeoutOutcome::Stale);
        assert_eq!(run.phase, Phase::Running);
    }

    proptest! {
        /// After n ticks (n < 100) the label equals n - one integer percent
        /// per tick with the fixed 50ms/5000ms configuration
        #[test]
        fn prop_label_tracks_tick_index(n in 1u32..TICK_COUNT) {
            let mut run = SplashRun::new();
            let mut last_label = 0;
            for _ in 0..n {
                match tick(&mut run) {
                    TickOutcome::Progress { fill, label } => {
                        prop_assert!(label >= last_label);
                        prop_assert!((0.0..100.0).contains(&fill));
                        last_label = label;
                    }
                    other => prop_assert!(false, "unexpected outcome {:?}", other),
                }
            }
            prop_assert_eq!(last_label, n);
        }

        /// Progress never exceeds 100 no matter how many ticks arrive
        #[test]
        fn prop_progress_bounded(n in 0u32..400) {
            let mut run = SplashRun::new();
            for _ in 0..n {
                tick(&mut run);
                prop_assert!(run.progress <= 100.0);
            }
        }
    }
}
