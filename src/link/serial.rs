use super::*;
use anyhow::Context;
use std::io::Write;

/// Light controller attached to a serial port.
pub struct Serial {
    port: Box<dyn serialport::SerialPort>,
    name: String,
}

impl Serial {
    /// Open the port and wait for the controller to boot.
    pub fn open(path: &str, baud: u32) -> anyhow::Result<Self> {
        let port = serialport::new(path, baud)
            .timeout(crate::SERIAL_TIMEOUT)
            .open()
            .with_context(|| {
                format!(
                    "can't open serial {} (list ports with `ls /dev/ttyACM* /dev/ttyUSB*` and pass --port)",
                    path
                )
            })?;
        log::info!("opened serial {} at {} baud", path, baud);
        std::thread::sleep(crate::SERIAL_SETTLE);
        Ok(Self {
            port,
            name: path.to_string(),
        })
    }
}

impl Link for Serial {
    fn send(&mut self, command: Command) -> anyhow::Result<()> {
        log::debug!("[link] {}", command);
        self.port
            .write_all(command.line().as_bytes())
            .and_then(|_| self.port.flush())
            .with_context(|| format!("write {} to {}", command, self.name))
    }
}

impl std::fmt::Debug for Serial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Serial").field(&self.name).finish()
    }
}
