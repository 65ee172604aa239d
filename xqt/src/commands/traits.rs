//! Command trait for the xqt CLI.
//!
//! Every subcommand is built from its arguments and the loaded
//! configuration, then executed once.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all xqt commands implement.
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance.
    fn new(args: Self::Args, config: Config) -> Result<Self>;

    /// Execute the command.
    fn execute(&self) -> Result<()>;

    /// The subcommand name, used in log events.
    fn name() -> &'static str;
}

/// Build and run a command.
pub fn run<C: Command>(args: C::Args, config: Config) -> Result<()> {
    tracing::debug!(command = C::name(), "running");
    C::new(args, config)?.execute()
}
