use super::*;

/// Dry-run link: logs each command instead of writing it anywhere.
#[derive(Debug, Default)]
pub struct Console;

impl Link for Console {
    fn send(&mut self, command: Command) -> anyhow::Result<()> {
        log::info!("[link] {}", command);
        Ok(())
    }
}
