//! # Count-Up Animation
//!
//! Frames for the final price ticking up from zero after a calculation.
//!
//! ```text
//! target = 74984, duration = 1000 ms, step = 20 ms
//!
//!   frames    = 1000 / 20        = 50
//!   increment = 74984 / 50       = 1499.68
//!
//!   1499.68, 2999.36, ... , 73484.32, 74984 (clamped, stop)
//! ```
//!
//! This is only the arithmetic. The caller owns the clock and waits
//! [`CountUp::step`] between frames.

use rust_decimal::Decimal;
use std::time::Duration;

/// Whole animation length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

/// Delay between frames.
pub const DEFAULT_STEP: Duration = Duration::from_millis(20);

/// Iterator over animated values ending exactly at the target.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: Decimal,
    increment: Decimal,
    step: Duration,
    frames: u64,
    emitted: u64,
    finished: bool,
}

impl CountUp {
    /// Plans frames toward `target` over `duration`, one every `step`.
    ///
    /// There is always at least one frame, even when `step` exceeds
    /// `duration` or is zero.
    pub fn new(target: Decimal, duration: Duration, step: Duration) -> Self {
        let frames = match duration.as_nanos().checked_div(step.as_nanos()) {
            Some(frames) => u64::try_from(frames).unwrap_or(u64::MAX).max(1),
            None => 1,
        };
        let increment = target / Decimal::from(frames);

        CountUp {
            target,
            increment,
            step,
            frames,
            emitted: 0,
            finished: false,
        }
    }

    /// Default one-second animation in 20 ms steps.
    pub fn with_defaults(target: Decimal) -> Self {
        Self::new(target, DEFAULT_DURATION, DEFAULT_STEP)
    }

    /// Time to wait between frames.
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Planned number of frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn target(&self) -> Decimal {
        self.target
    }
}

impl Iterator for CountUp {
    type Item = Decimal;

    fn next(&mut self) -> Option<Decimal> {
        if self.finished {
            return None;
        }

        self.emitted += 1;
        let current = self.increment.saturating_mul(Decimal::from(self.emitted));

        // Clamp on overshoot, and always land on the target on the last frame.
        if self.emitted >= self.frames || current >= self.target {
            self.finished = true;
            return Some(self.target);
        }

        Some(current)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
