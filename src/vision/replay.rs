use super::*;
use anyhow::Context;
use std::collections::VecDeque;
use std::path::Path;

/// Camera that plays back a fixed sequence of samples, then reports
/// missing frames forever. Drives dry runs from a recorded detector
/// transcript and drives tests from scripted hands.
#[derive(Debug, Default, Clone)]
pub struct Replay(VecDeque<Sample>);

impl Replay {
    /// Load a transcript of detector replies, one JSON object per line.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read replay {}", path.display()))?;
        let replay = Self::parse(&text)?;
        log::info!("loaded {} samples from {}", replay.len(), path.display());
        Ok(replay)
    }
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter(|(_, line)| !line.trim_start().starts_with('#'))
            .map(|(i, line)| {
                Reply::try_from(line)
                    .map(Sample::from)
                    .with_context(|| format!("replay line {}", i + 1))
            })
            .collect::<anyhow::Result<VecDeque<_>>>()
            .map(Self)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Sample>> for Replay {
    fn from(samples: Vec<Sample>) -> Self {
        Self(samples.into())
    }
}

impl Camera for Replay {
    fn sample(&mut self) -> Sample {
        self.0.pop_front().unwrap_or(Sample::Missing)
    }
}
