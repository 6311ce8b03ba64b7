//! Configuration file loading for dsa-ask
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DSA_ASK_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./dsa-ask.toml` or `./.dsa-ask.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/dsa-ask/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FilePathsConfig, FileProviderConfig, FileProvidersConfig, FileRunConfig,
};
pub use loader::ConfigLoader;
