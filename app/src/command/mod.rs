//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input type, so
//! dispatch is resolved at compile time.

use ordersift_config::Config;
use ordersift_providers::PrecomputedParser;

mod extract;
mod info;
mod init;
mod version;

pub use extract::{ExtractInput, ExtractStrategy};
pub use info::{InfoInput, InfoStrategy};
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Load the configured annotation file off the async runtime.
async fn load_parser(config: &Config) -> anyhow::Result<PrecomputedParser> {
    let path = config.input.annotations.clone();
    let format = config.input.format;

    let parser =
        tokio::task::spawn_blocking(move || PrecomputedParser::load(&path, format)).await??;
    Ok(parser)
}
