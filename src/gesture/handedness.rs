/// Which hand the detector believes it saw, in the mirrored camera view.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Handedness {
    Left,
    #[default]
    Right,
}

impl TryFrom<&str> for Handedness {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "Left" | "left" | "LEFT" => Ok(Self::Left),
            "Right" | "right" | "RIGHT" => Ok(Self::Right),
            _ => Err(format!("unknown handedness label: {}", s)),
        }
    }
}

impl std::fmt::Display for Handedness {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_detector_labels() {
        assert_eq!(Handedness::try_from("Left"), Ok(Handedness::Left));
        assert_eq!(Handedness::try_from("Right"), Ok(Handedness::Right));
        assert!(Handedness::try_from("Both").is_err());
    }

    #[test]
    fn display_inverts_parse() {
        for h in [Handedness::Left, Handedness::Right] {
            assert_eq!(Handedness::try_from(h.to_string().as_str()), Ok(h));
        }
    }
}
