use crate::Points;
use crate::judge::Round;
use colored::Colorize;

/// Running tally over a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    score: Points,
    played: Points,
    planned: Points,
}

impl Scoreboard {
    pub fn new(planned: Points) -> Self {
        Self {
            score: 0,
            played: 0,
            planned,
        }
    }
    pub fn score(&self) -> Points {
        self.score
    }
    pub fn played(&self) -> Points {
        self.played
    }
    pub fn planned(&self) -> Points {
        self.planned
    }
    pub fn is_complete(&self) -> bool {
        self.played >= self.planned
    }
    /// Count a finished round and return the operator line for it.
    pub fn record(&mut self, round: &Round) -> String {
        self.played += 1;
        if round.matched() {
            self.score += 1;
        }
        format!(
            "Round {}: {} {} Score={}",
            self.played,
            round.target().paint(),
            match round.matched() {
                true => "CORRECT".green(),
                false => "INCORRECT".red(),
            },
            self.score
        )
    }
    /// Final result. After a quit the denominator is the rounds actually
    /// finished, not the rounds planned.
    pub fn summary(&self, aborted: bool) -> Summary {
        Summary {
            score: self.score,
            rounds: match aborted {
                true => self.played,
                false => self.planned,
            },
            aborted,
        }
    }
}

/// Score out of rounds, as reported to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: Points,
    pub rounds: Points,
    pub aborted: bool,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.aborted {
            true => write!(f, "Quit. Final score: {}/{}", self.score, self.rounds),
            false => write!(f, "Game over!! Final score: {}/{}", self.score, self.rounds),
        }
    }
}
