//! Write-only line protocol to the light controller.
//!
//! Every command is one ASCII token followed by `\n`. Nothing is read back.
pub mod command;
pub use command::*;

pub mod console;
pub use console::*;

pub mod serial;
pub use serial::*;

/// Outbound command sink.
pub trait Link {
    fn send(&mut self, command: Command) -> anyhow::Result<()>;
}

impl<L> Link for Box<L>
where
    L: Link + ?Sized,
{
    fn send(&mut self, command: Command) -> anyhow::Result<()> {
        (**self).send(command)
    }
}
