use super::*;
use crate::gesture::Color;
use std::time::Duration;

/// Judge for one colour flash.
#[derive(Debug, Clone)]
pub struct Round {
    target: Color,
    window: Duration,
    required: usize,
    streak: Streak,
    phase: Phase,
    samples: usize,
}

impl Round {
    pub fn new(target: Color, window: Duration, required: usize) -> Self {
        Self {
            target,
            window,
            required,
            streak: Streak::default(),
            phase: Phase::default(),
            samples: 0,
        }
    }
    pub fn target(&self) -> Color {
        self.target
    }
    pub fn window(&self) -> Duration {
        self.window
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn streak(&self) -> &Streak {
        &self.streak
    }
    pub fn samples(&self) -> usize {
        self.samples
    }
    pub fn matched(&self) -> bool {
        self.phase == Phase::Matched
    }
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }
    /// Feed the colour observed `elapsed` after the round began.
    /// Samples at or past the window close the round instead of counting.
    /// Once terminal, further samples are ignored.
    pub fn observe(&mut self, elapsed: Duration, observed: Option<Color>) -> Phase {
        if self.is_over() {
            return self.phase;
        }
        if elapsed >= self.window {
            return self.expire();
        }
        self.samples += 1;
        let length = self.streak.observe(observed);
        self.phase = match self.streak.color() {
            Some(color) if color == self.target && length >= self.required => Phase::Matched,
            Some(_) => Phase::Streaking,
            None => Phase::Awaiting,
        };
        self.phase
    }
    /// Close the window. A round already matched stays matched.
    pub fn expire(&mut self) -> Phase {
        if !self.is_over() {
            self.phase = Phase::TimedOut;
        }
        self.phase
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "target={} streak={} samples={} {}",
            self.target, self.streak, self.samples, self.phase
        )
    }
}
