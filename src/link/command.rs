use crate::gesture::Color;

/// Controller command. A session is `START (colour OFF)* END OFF`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Command {
    Start,
    Show(Color),
    Off,
    End,
}

impl Command {
    /// The newline-terminated bytes put on the wire.
    pub fn line(&self) -> String {
        format!("{}\n", self)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "START"),
            Self::Show(color) => write!(f, "{}", color),
            Self::Off => write!(f, "OFF"),
            Self::End => write!(f, "END"),
        }
    }
}
