use crate::gesture::Hand;

/// Outcome of one capture-and-detect attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    /// Capture failed or the reply could not be decoded.
    Missing,
    /// Frame captured, no hand in it.
    Empty,
    /// Frame captured with a hand in it.
    Hand(Hand),
}

impl Sample {
    pub fn hand(&self) -> Option<&Hand> {
        match self {
            Self::Hand(hand) => Some(hand),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "no frame"),
            Self::Empty => write!(f, "no hand"),
            Self::Hand(hand) => write!(f, "{}", hand),
        }
    }
}
