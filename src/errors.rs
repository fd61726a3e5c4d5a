use color_eyre::eyre::{eyre, Result};
use std::io;
use tracing_subscriber::EnvFilter;

/// Installs the eyre report and panic hooks and a `RUST_LOG` driven
/// subscriber writing to stderr.
pub fn install_hooks() -> Result<()> {
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| eyre!(err))
}
