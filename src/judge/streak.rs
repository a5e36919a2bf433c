use crate::gesture::Color;

/// Run of consecutive identical observations.
///
/// The length counts repeats of the current colour after its first
/// sighting, so a colour seen on three frames in a row has length 2.
/// An empty observation (no hand, or a count with no colour) breaks any run
/// and starts none of its own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    color: Option<Color>,
    length: usize,
}

impl Streak {
    pub fn color(&self) -> Option<Color> {
        self.color
    }
    pub fn length(&self) -> usize {
        self.length
    }
    /// Record the next observation and return the new run length.
    pub fn observe(&mut self, observed: Option<Color>) -> usize {
        match observed {
            Some(color) if self.color == Some(color) => self.length += 1,
            Some(color) => {
                self.color = Some(color);
                self.length = 0;
            }
            None => {
                self.color = None;
                self.length = 0;
            }
        }
        self.length
    }
}

impl std::fmt::Display for Streak {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.color {
            Some(color) => write!(f, "{}x{}", color, self.length),
            None => write!(f, "-"),
        }
    }
}
