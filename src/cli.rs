use crate::game::Settings;
use crate::gesture::Palette;
use crate::link::Console;
use crate::link::Link;
use crate::link::Serial;
use crate::vision::Camera;
use crate::vision::Detector;
use crate::vision::DetectorConfig;
use crate::vision::Replay;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

fn palette(s: &str) -> Result<Palette, String> {
    Palette::try_from(s)
}

/// Whole milliseconds from a decimal number of seconds.
fn seconds(s: &str) -> Result<Duration, String> {
    match s.parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs >= 0. => {
            Ok(Duration::from_millis((secs * 1000.).round() as u64))
        }
        _ => Err(format!("not a number of seconds: {}", s)),
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = crate::ROUND_COUNT, help = "Colour flashes per game")]
    pub rounds: usize,
    #[arg(long, value_parser = seconds, default_value = "2.0", help = "Seconds to show each gesture")]
    pub window: Duration,
    #[arg(long, value_parser = seconds, default_value = "0.15", help = "Seconds between colours")]
    pub rest: Duration,
    #[arg(long, default_value_t = crate::REQUIRED_STREAK, help = "Repeats of the target, after its first frame, that confirm a gesture")]
    pub streak: usize,
    #[arg(long, value_parser = palette, help = "Colour table, e.g. RED=5,GREEN=0,BLUE=2,YELLOW=4")]
    pub palette: Option<Palette>,
    #[arg(long, default_value = crate::SERIAL_PORT, help = "Serial device of the light controller")]
    pub port: String,
    #[arg(long, default_value_t = crate::BAUD_RATE)]
    pub baud: u32,
    #[arg(long, help = "Log controller commands instead of opening the serial port")]
    pub dry_run: bool,
    #[arg(long, help = "Play back a detector transcript instead of using the webcam")]
    pub replay: Option<PathBuf>,
    #[arg(long, default_value_t = crate::CAMERA_INDEX)]
    pub camera: u32,
    #[arg(long, default_value = crate::DETECTOR_PYTHON, help = "Interpreter for the detector helper")]
    pub python: String,
    #[arg(long, default_value = crate::DETECTOR_SCRIPT, help = "Detector helper script")]
    pub detector: String,
    #[arg(long, default_value_t = crate::DETECTION_CONFIDENCE)]
    pub confidence: f32,
    #[arg(long, help = "Seed for target colours")]
    pub seed: Option<u64>,
}

impl Args {
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let settings = Settings {
            rounds: self.rounds,
            window: self.window,
            rest: self.rest,
            streak: self.streak,
            palette: self.palette.clone().unwrap_or_default(),
            ..Settings::default()
        };
        settings.validate()?;
        Ok(settings)
    }
    pub fn detector(&self) -> DetectorConfig {
        DetectorConfig {
            python: self.python.clone(),
            script: self.detector.clone(),
            camera: self.camera,
            confidence: self.confidence,
            ..DetectorConfig::default()
        }
    }
    /// Open the controller link. Fatal if the port can't be opened.
    pub fn link(&self) -> anyhow::Result<Box<dyn Link>> {
        match self.dry_run {
            true => Ok(Box::new(Console::default())),
            false => Serial::open(&self.port, self.baud)
                .map(|serial| Box::new(serial) as Box<dyn Link>),
        }
    }
    /// Open the frame source. Fatal if the webcam can't be opened.
    pub fn camera(&self) -> anyhow::Result<Box<dyn Camera>> {
        match self.replay {
            Some(ref path) => Ok(Box::new(Replay::load(path)?)),
            None => Ok(Box::new(Detector::spawn(&self.detector())?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Color;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("arcade").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_constants() {
        let args = parse(&[]);
        assert_eq!(args.settings().unwrap(), Settings::default());
        assert_eq!(args.detector(), DetectorConfig::default());
        assert_eq!(args.port, crate::SERIAL_PORT);
        assert!(!args.dry_run);
    }

    #[test]
    fn overrides_game_tuning() {
        let args = parse(&["--rounds", "5", "--window", "1.5", "--rest", "0", "--streak", "4"]);
        let settings = args.settings().unwrap();
        assert_eq!(settings.rounds, 5);
        assert_eq!(settings.window, Duration::from_millis(1500));
        assert_eq!(settings.rest, Duration::ZERO);
        assert_eq!(settings.streak, 4);
    }

    #[test]
    fn custom_palette() {
        let args = parse(&["--palette", "BLUE=1,YELLOW=3"]);
        let palette = args.settings().unwrap().palette;
        assert_eq!(palette.color(1), Some(Color::Blue));
        assert_eq!(palette.color(5), None);
    }

    #[test]
    fn rejects_bad_values() {
        let bad = |args: &[&str]| {
            Args::try_parse_from(std::iter::once("arcade").chain(args.iter().copied())).is_err()
        };
        assert!(bad(&["--palette", "RED=2,BLUE=2"]));
        assert!(bad(&["--window", "-1"]));
        assert!(bad(&["--window", "soon"]));
        assert!(parse(&["--rounds", "0"]).settings().is_err());
        assert!(parse(&["--streak", "0"]).settings().is_ok());
    }

    #[test]
    fn dry_run_skips_the_serial_port() {
        let args = parse(&["--dry-run", "--port", "/dev/does-not-exist"]);
        assert!(args.link().is_ok());
    }

    #[test]
    fn missing_port_is_fatal() {
        let args = parse(&["--port", "/dev/does-not-exist"]);
        assert!(args.link().is_err());
    }
}
