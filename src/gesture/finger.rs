/// The five digits of a hand, with the landmark indices used to decide
/// whether each one is extended.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Finger {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

impl Finger {
    pub const fn all() -> [Self; 5] {
        [
            Self::Thumb,
            Self::Index,
            Self::Middle,
            Self::Ring,
            Self::Pinky,
        ]
    }
    /// Landmark index of the fingertip.
    pub const fn tip(&self) -> usize {
        match self {
            Self::Thumb => 4,
            Self::Index => 8,
            Self::Middle => 12,
            Self::Ring => 16,
            Self::Pinky => 20,
        }
    }
    /// Landmark index of the joint the tip is compared against:
    /// the interphalangeal joint for the thumb, the PIP joint otherwise.
    pub const fn joint(&self) -> usize {
        match self {
            Self::Thumb => self.tip() - 1,
            _ => self.tip() - 2,
        }
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Thumb => write!(f, "thumb"),
            Self::Index => write!(f, "index"),
            Self::Middle => write!(f, "middle"),
            Self::Ring => write!(f, "ring"),
            Self::Pinky => write!(f, "pinky"),
        }
    }
}
