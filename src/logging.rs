//! Logger setup for the `clitree` binary
//!
//! `RUST_LOG` wins when set; otherwise the level follows
//! `[general] verbose` (and `--verbose`).

use crate::config::Config;
use env_logger::{Builder, Env};

/// Logger builder for `config`, reading overrides from `env`
pub fn builder(config: &Config, env: Env<'_>) -> Builder {
    let mut builder = Builder::from_env(env.default_filter_or(config.general.log_filter()));
    builder.format_timestamp(None);
    builder
}

/// Install the global logger
pub fn init(config: &Config) {
    builder(config, Env::default()).init();
}
