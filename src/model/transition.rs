// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Enter and exit animation state for the detail panel.
//!
//! The phase is derived purely from the panel-open flag and the time elapsed
//! since the flag last changed. It has no influence on the catalog itself.

use std::time::{Duration, Instant};

pub(crate) const PANEL_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum TransitionPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Debug)]
pub(crate) struct PanelTransition {
    phase: TransitionPhase,
    changed_at: Instant,
    duration: Duration,
}

impl PanelTransition {
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            phase: TransitionPhase::Closed,
            changed_at: Instant::now(),
            duration,
        }
    }

    pub(crate) fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.phase != TransitionPhase::Closed
    }

    /// Advances the phase for the given panel state at time `now`.
    ///
    /// Reversing direction part way through continues from the current
    /// progress rather than restarting the animation.
    pub(crate) fn update(&mut self, panel_open: bool, now: Instant) {
        let elapsed = now.saturating_duration_since(self.changed_at);

        match (self.phase, panel_open) {
            (TransitionPhase::Closed, true) => self.begin(TransitionPhase::Opening, now, Duration::ZERO),
            (TransitionPhase::Open, false) => self.begin(TransitionPhase::Closing, now, Duration::ZERO),

            (TransitionPhase::Opening, false) => {
                let done = elapsed.min(self.duration);
                self.begin(TransitionPhase::Closing, now, self.duration - done);
            }
            (TransitionPhase::Closing, true) => {
                let done = elapsed.min(self.duration);
                self.begin(TransitionPhase::Opening, now, self.duration - done);
            }

            (TransitionPhase::Opening, true) if elapsed >= self.duration => {
                self.phase = TransitionPhase::Open;
            }
            (TransitionPhase::Closing, false) if elapsed >= self.duration => {
                self.phase = TransitionPhase::Closed;
            }

            _ => {}
        }
    }

    /// How far the panel is shown, from `0.0` (hidden) to `1.0` (fully open).
    pub(crate) fn progress(&self, now: Instant) -> f64 {
        let fraction = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(self.changed_at);
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };

        match self.phase {
            TransitionPhase::Closed => 0.0,
            TransitionPhase::Open => 1.0,
            TransitionPhase::Opening => fraction,
            TransitionPhase::Closing => 1.0 - fraction,
        }
    }

    fn begin(&mut self, phase: TransitionPhase, now: Instant, already_done: Duration) {
        self.phase = phase;
        self.changed_at = now.checked_sub(already_done).unwrap_or(now);
    }
}
