use crate::config::LogFormat;
use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tower_http=debug";

pub fn init(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| Error::Config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Plain => builder.compact().try_init(),
    };
    installed.map_err(|e| Error::Config(format!("Failed to install tracing subscriber: {}", e)))
}
