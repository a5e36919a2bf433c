use crate::gesture::Palette;
use std::time::Duration;

/// Game tuning, fixed for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Colour flashes per game.
    pub rounds: usize,
    /// Time allowed to show each gesture.
    pub window: Duration,
    /// Dark time between colours.
    pub rest: Duration,
    /// Repeats of the target after its first sighting that confirm a gesture.
    pub streak: usize,
    /// Pause around the START / END bracket.
    pub pause: Duration,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rounds: crate::ROUND_COUNT,
            window: crate::ROUND_WINDOW,
            rest: crate::REST_INTERVAL,
            streak: crate::REQUIRED_STREAK,
            pause: crate::SESSION_PAUSE,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.rounds > 0, "round count must be positive");
        anyhow::ensure!(!self.window.is_zero(), "round window must be positive");
        Ok(())
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "rounds={} window={:.2}s rest={:.2}s streak={} palette={}",
            self.rounds,
            self.window.as_secs_f32(),
            self.rest.as_secs_f32(),
            self.streak,
            self.palette
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_games() {
        let zero_rounds = Settings {
            rounds: 0,
            ..Settings::default()
        };
        let zero_window = Settings {
            window: Duration::ZERO,
            ..Settings::default()
        };
        assert!(zero_rounds.validate().is_err());
        assert!(zero_window.validate().is_err());
    }
}
