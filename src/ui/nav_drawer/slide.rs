// SPDX-License-Identifier: MPL-2.0
//! Time-based horizontal slide used by the navigation drawer.
//!
//! A [`Slide`] is a pure value: its position is a function of an explicit
//! `Instant`, so tests drive the animation with synthetic clocks instead of
//! sleeping. Retargeting mid-flight starts a new slide from the current
//! intermediate position; there is no cancellation contract.

use std::time::{Duration, Instant};

/// How long a slide takes from start to settle.
pub const SLIDE_DURATION: Duration = Duration::from_millis(220);

/// An eased transition of a horizontal offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    from: f32,
    to: f32,
    started: Option<Instant>,
}

impl Slide {
    /// A slide at rest at `at`.
    #[must_use]
    pub fn settled(at: f32) -> Self {
        Self {
            from: at,
            to: at,
            started: None,
        }
    }

    /// The offset this slide is heading toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Starts a new slide toward `to` from wherever the current one is now.
    #[must_use]
    pub fn retarget(self, to: f32, now: Instant) -> Self {
        Self {
            from: self.position(now),
            to,
            started: Some(now),
        }
    }

    /// The eased offset at `now`.
    #[must_use]
    pub fn position(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.to;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= SLIDE_DURATION {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / SLIDE_DURATION.as_secs_f32();
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// Returns `true` once the slide has reached its target.
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        match self.started {
            None => true,
            Some(started) => now.saturating_duration_since(started) >= SLIDE_DURATION,
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}
