/// Where a round stands after its latest sample.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Phase {
    /// No run in progress.
    #[default]
    Awaiting,
    /// A colour has been seen on the latest sample(s) but not long enough.
    Streaking,
    /// The target held for the required run. Terminal.
    Matched,
    /// The window closed first. Terminal.
    TimedOut,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Matched | Self::TimedOut)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Awaiting => write!(f, "awaiting"),
            Self::Streaking => write!(f, "streaking"),
            Self::Matched => write!(f, "matched"),
            Self::TimedOut => write!(f, "timed out"),
        }
    }
}
