use super::*;
use crate::Fingers;

/// Highest finger count a single hand can show.
const MAX_FINGERS: usize = 5;

/// Bidirectional colour ↔ finger-count table.
///
/// Construction rejects any table where two colours share a count, so the
/// reverse lookup is a function and a gesture never names two colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<(Color, Fingers)>,
    lookup: [Option<Color>; MAX_FINGERS + 1],
}

impl Palette {
    pub fn new(entries: &[(Color, Fingers)]) -> anyhow::Result<Self> {
        anyhow::ensure!(!entries.is_empty(), "palette needs at least one colour");
        let mut lookup = [None; MAX_FINGERS + 1];
        let mut colors = Vec::with_capacity(entries.len());
        for &(color, fingers) in entries {
            anyhow::ensure!(
                fingers as usize <= MAX_FINGERS,
                "{} mapped to {} fingers, a hand has {}",
                color,
                fingers,
                MAX_FINGERS
            );
            anyhow::ensure!(
                colors.iter().all(|(c, _)| *c != color),
                "{} appears twice in palette",
                color
            );
            if let Some(other) = lookup[fingers as usize] {
                anyhow::bail!("{} and {} both mapped to {} fingers", other, color, fingers);
            }
            lookup[fingers as usize] = Some(color);
            colors.push((color, fingers));
        }
        Ok(Self { colors, lookup })
    }
    /// Colour named by a finger count, if any.
    pub fn color(&self, fingers: Fingers) -> Option<Color> {
        self.lookup.get(fingers as usize).copied().flatten()
    }
    /// Finger count that names a colour, if the colour is in the palette.
    pub fn fingers(&self, color: Color) -> Option<Fingers> {
        self.colors
            .iter()
            .find(|(c, _)| *c == color)
            .map(|(_, fingers)| *fingers)
    }
    /// Colours in table order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().map(|(color, _)| *color)
    }
    /// Uniform choice of a target colour; repeats are allowed.
    pub fn choose<R>(&self, rng: &mut R) -> Color
    where
        R: rand::Rng + ?Sized,
    {
        use rand::seq::IndexedRandom;
        self.colors
            .choose(rng)
            .map(|(color, _)| *color)
            .expect("palette is not empty")
    }
}

impl Default for Palette {
    /// Open hand, fist, two fingers, four fingers.
    fn default() -> Self {
        Self {
            colors: vec![
                (Color::Red, 5),
                (Color::Green, 0),
                (Color::Blue, 2),
                (Color::Yellow, 4),
            ],
            lookup: [
                Some(Color::Green),
                None,
                Some(Color::Blue),
                None,
                Some(Color::Yellow),
                Some(Color::Red),
            ],
        }
    }
}

/// Parses `RED=5,GREEN=0,...`.
impl TryFrom<&str> for Palette {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let entries = s
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| -> Result<(Color, Fingers), String> {
                let (color, fingers) = entry
                    .split_once('=')
                    .ok_or_else(|| format!("expected COLOR=fingers, got {}", entry))?;
                let color = Color::try_from(color)?;
                let fingers = fingers
                    .trim()
                    .parse::<Fingers>()
                    .map_err(|_| format!("invalid finger count in {}", entry))?;
                Ok((color, fingers))
            })
            .collect::<Result<Vec<_>, String>>()?;
        Self::new(&entries).map_err(|e| e.to_string())
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let entries = self
            .colors
            .iter()
            .map(|(color, fingers)| format!("{}={}", color, fingers))
            .collect::<Vec<_>>();
        write!(f, "{}", entries.join(","))
    }
}
