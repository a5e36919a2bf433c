use colored::Colorize;

/// A colour the light controller can show. The `Display` form is the token
/// sent over the wire.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
    Red = 0,
    Green = 1,
    Blue = 2,
    Yellow = 3,
}

impl Color {
    pub const fn all() -> [Self; 4] {
        [Self::Red, Self::Green, Self::Blue, Self::Yellow]
    }
    /// The wire token, painted in its own colour for the terminal.
    pub fn paint(&self) -> colored::ColoredString {
        match self {
            Self::Red => self.to_string().red(),
            Self::Green => self.to_string().green(),
            Self::Blue => self.to_string().blue(),
            Self::Yellow => self.to_string().yellow(),
        }
    }
}

impl crate::Arbitrary for Color {
    fn random() -> Self {
        use rand::seq::IndexedRandom;
        *Self::all()
            .choose(&mut rand::rng())
            .expect("colour set is not empty")
    }
}

impl TryFrom<&str> for Color {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "RED" => Ok(Self::Red),
            "GREEN" => Ok(Self::Green),
            "BLUE" => Ok(Self::Blue),
            "YELLOW" => Ok(Self::Yellow),
            _ => Err(format!("unknown colour: {}", s)),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Red => "RED",
                Self::Green => "GREEN",
                Self::Blue => "BLUE",
                Self::Yellow => "YELLOW",
            }
        )
    }
}
