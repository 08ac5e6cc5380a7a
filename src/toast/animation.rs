// SPDX-License-Identifier: MPL-2.0
//! Time-based entrance and exit animation for the visible toast.
//!
//! Toasts move through `Entering → Visible → Exiting`. The entrance fades in
//! while sliding up from below its final position; the exit does the reverse.
//! A zero phase duration completes on the first check.

use crate::config::AnimationConfig;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Fading/sliding in.
    Entering,
    /// Fully shown.
    Visible,
    /// Fading/sliding out.
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Decelerating, used for the entrance.
    EaseOut,
    /// Accelerating, used for the exit.
    EaseIn,
}

impl Easing {
    /// Applies the curve to a progress value, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseIn => t * t * t,
        }
    }
}

/// Animation progress of one toast.
#[derive(Debug, Clone)]
pub struct AnimationState {
    phase: AnimationPhase,
    phase_started: Instant,
    entrance: Duration,
    exit: Duration,
    slide_distance: f32,
}

impl AnimationState {
    /// Starts a new entrance at `now`.
    #[must_use]
    pub fn entering(now: Instant, config: &AnimationConfig) -> Self {
        Self {
            phase: AnimationPhase::Entering,
            phase_started: now,
            entrance: config.entrance(),
            exit: config.exit(),
            slide_distance: config.slide_distance(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn transition_to(&mut self, phase: AnimationPhase, now: Instant) {
        self.phase = phase;
        self.phase_started = now;
    }

    fn phase_duration(&self) -> Duration {
        match self.phase {
            AnimationPhase::Entering => self.entrance,
            AnimationPhase::Exiting => self.exit,
            AnimationPhase::Visible => Duration::ZERO,
        }
    }

    /// Instant the current entrance or exit completes.
    ///
    /// Transitions are stamped with this instead of the observing tick so a
    /// late tick does not stretch the toast's lifetime.
    #[must_use]
    pub fn phase_end(&self) -> Instant {
        self.phase_started + self.phase_duration()
    }

    /// Raw progress through the current phase, from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let duration = self.phase_duration();
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.phase_started);
        (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
    }

    /// Whether an entrance or exit has run its full duration.
    #[must_use]
    pub fn is_phase_complete(&self, now: Instant) -> bool {
        match self.phase {
            AnimationPhase::Entering | AnimationPhase::Exiting => self.progress(now) >= 1.0,
            AnimationPhase::Visible => false,
        }
    }

    /// Opacity to render with.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            AnimationPhase::Entering => Easing::EaseOut.apply(self.progress(now)),
            AnimationPhase::Visible => 1.0,
            AnimationPhase::Exiting => 1.0 - Easing::EaseIn.apply(self.progress(now)),
        }
    }

    /// Downward displacement from the resting position.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        match self.phase {
            AnimationPhase::Entering => {
                (1.0 - Easing::EaseOut.apply(self.progress(now))) * self.slide_distance
            }
            AnimationPhase::Visible => 0.0,
            AnimationPhase::Exiting => Easing::EaseIn.apply(self.progress(now)) * self.slide_distance,
        }
    }
}
