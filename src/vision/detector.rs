use super::*;
use anyhow::Context;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::process::Child;
use std::process::ChildStdin;
use std::process::ChildStdout;
use std::process::Command;
use std::process::Stdio;

/// How to launch the landmark helper.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    pub python: String,
    pub script: String,
    pub camera: u32,
    pub width: u32,
    pub height: u32,
    pub confidence: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            python: crate::DETECTOR_PYTHON.to_string(),
            script: crate::DETECTOR_SCRIPT.to_string(),
            camera: crate::CAMERA_INDEX,
            width: crate::CAPTURE_WIDTH,
            height: crate::CAPTURE_HEIGHT,
            confidence: crate::DETECTION_CONFIDENCE,
        }
    }
}

impl DetectorConfig {
    fn command(&self) -> Command {
        let mut command = Command::new(&self.python);
        command
            .arg(&self.script)
            .arg("--camera")
            .arg(self.camera.to_string())
            .arg("--width")
            .arg(self.width.to_string())
            .arg("--height")
            .arg(self.height.to_string())
            .arg("--confidence")
            .arg(self.confidence.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        command
    }
}

/// Webcam + landmark model running in a helper process.
///
/// The helper prints `READY` once the camera is open, then answers every
/// `NEXT` line on its stdin with one JSON [`Reply`] line for a freshly
/// captured, mirrored frame. `QUIT` releases the camera.
pub struct Detector {
    process: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    closed: bool,
}

impl Detector {
    /// Start the helper and wait for it to open the camera.
    pub fn spawn(config: &DetectorConfig) -> anyhow::Result<Self> {
        log::info!("starting hand detector {} {}", config.python, config.script);
        anyhow::ensure!(
            std::path::Path::new(&config.script).exists(),
            "hand detection script not found at {}",
            config.script
        );
        let mut process = config
            .command()
            .spawn()
            .with_context(|| format!("spawn {}", config.python))?;
        let stdin = process.stdin.take().context("detector stdin")?;
        let stdout = process.stdout.take().context("detector stdout")?;
        let mut stdout = BufReader::new(stdout);
        let ref mut ready = String::new();
        stdout.read_line(ready).context("read detector handshake")?;
        if ready.trim() != "READY" {
            let _ = process.kill();
            let _ = process.wait();
            anyhow::bail!("can't open webcam (detector said {:?})", ready.trim());
        }
        log::info!("hand detector ready on camera {}", config.camera);
        Ok(Self {
            process,
            stdin,
            stdout,
            closed: false,
        })
    }

    fn request(&mut self) -> anyhow::Result<Sample> {
        writeln!(self.stdin, "NEXT").context("write detector request")?;
        self.stdin.flush().context("flush detector request")?;
        let ref mut line = String::new();
        let n = self.stdout.read_line(line).context("read detector reply")?;
        anyhow::ensure!(n > 0, "detector closed its output");
        Reply::try_from(line.as_str()).map(Sample::from)
    }
}

impl Camera for Detector {
    fn sample(&mut self) -> Sample {
        if self.closed {
            return Sample::Missing;
        }
        match self.request() {
            Ok(sample) => sample,
            Err(e) => {
                log::warn!("{:#}", e);
                if let Ok(Some(status)) = self.process.try_wait() {
                    log::error!("hand detector exited ({})", status);
                    self.closed = true;
                }
                Sample::Missing
            }
        }
    }
}

impl Drop for Detector {
    fn drop(&mut self) {
        let _ = writeln!(self.stdin, "QUIT");
        let _ = self.stdin.flush();
        match self.process.try_wait() {
            Ok(Some(_)) => {}
            _ => {
                std::thread::sleep(crate::SESSION_PAUSE);
                if let Ok(None) = self.process.try_wait() {
                    let _ = self.process.kill();
                }
                let _ = self.process.wait();
            }
        }
    }
}
