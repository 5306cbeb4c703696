use std::path::PathBuf;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::{Error, FactorEditConfig, args::ConfigArgs};

const CONFIG_PATH_ENV_NAME: &str = "FACTOR_EDIT_CONFIG_PATH";

/// Get config path from input or env FACTOR_EDIT_CONFIG_PATH
pub fn get_config_path(config_path: Option<PathBuf>) -> Option<PathBuf> {
    if config_path.is_some() {
        config_path
    } else {
        std::env::var(CONFIG_PATH_ENV_NAME)
            .map(|s| {
                warn!("### ENV VAR {} is used ###", s);
                PathBuf::from(s)
            })
            .ok()
    }
}

/// Loads the config selected by `args`, falling back to the defaults.
pub fn load_config(args: &ConfigArgs) -> Result<FactorEditConfig, Error> {
    let mut config = match get_config_path(args.config_path.clone()) {
        Some(path) => FactorEditConfig::new(path)?,
        None => FactorEditConfig::default(),
    };
    if let Some(namespace) = &args.namespace {
        config.namespace.clone_from(namespace);
    }
    Ok(config)
}

/// Logs go to stderr, filtered by `RUST_LOG` (default: `warn`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
