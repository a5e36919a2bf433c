//! Webcam finger-counting colour game.
//!
//! A player holds up fingers to name the colour a serial-attached light
//! controller is showing. This crate provides the landmark geometry that turns
//! a detected hand into a colour, the per-round streak judge, and the blocking
//! session loop that ties camera, judge and controller together.

pub mod cli;
pub mod game;
pub mod gesture;
pub mod judge;
pub mod link;
pub mod vision;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Number of raised fingers on one hand, in 0..=5.
pub type Fingers = u8;
/// Normalized image coordinate (0.0 = left/top edge, 1.0 = right/bottom edge).
pub type Coordinate = f32;
/// Rounds won, rounds played.
pub type Points = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and target selection.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Colour flashes per game.
pub const ROUND_COUNT: usize = 20;
/// Time the player has to show the gesture for one colour.
pub const ROUND_WINDOW: std::time::Duration = std::time::Duration::from_millis(2000);
/// Dark interval between two colours.
pub const REST_INTERVAL: std::time::Duration = std::time::Duration::from_millis(150);
/// Repeats of the target after its first sighting needed to accept a gesture;
/// 3 means four identical frames in a row.
pub const REQUIRED_STREAK: usize = 3;

// ============================================================================
// CONTROLLER LINK
// The microcontroller resets when the port opens, so give it time to boot
// before the first command, and space out session bracketing commands.
// ============================================================================
/// Default serial device of the light controller.
pub const SERIAL_PORT: &str = "/dev/ttyACM0";
/// Serial line speed.
pub const BAUD_RATE: u32 = 115_200;
/// Write timeout on the serial port.
pub const SERIAL_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(100);
/// Boot time of the controller after the port opens.
pub const SERIAL_SETTLE: std::time::Duration = std::time::Duration::from_millis(2000);
/// Pause after START and around END.
pub const SESSION_PAUSE: std::time::Duration = std::time::Duration::from_millis(300);

// ============================================================================
// HAND DETECTOR
// Parameters forwarded to the landmark helper process.
// ============================================================================
/// Helper script that owns the webcam and the landmark model.
pub const DETECTOR_SCRIPT: &str = "scripts/hand_detect.py";
/// Interpreter used to run the helper script.
pub const DETECTOR_PYTHON: &str = "python3";
/// Webcam index.
pub const CAMERA_INDEX: u32 = 0;
/// Capture width; lower resolution keeps detection fast.
pub const CAPTURE_WIDTH: u32 = 320;
/// Capture height.
pub const CAPTURE_HEIGHT: u32 = 240;
/// Minimum detection and tracking confidence.
pub const DETECTION_CONFIDENCE: f32 = 0.6;
/// Landmarks per detected hand.
pub const LANDMARK_COUNT: usize = 21;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

/// Global interrupt flag, raised by the operator typing "q".
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Check if the operator asked to quit.
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
}
/// Register quit handler. Type "q" + Enter to stop the game at the next sample.
pub fn brb() {
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().eq_ignore_ascii_case("q") => {
                    log::warn!("quit requested, stopping at next sample...");
                    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}
