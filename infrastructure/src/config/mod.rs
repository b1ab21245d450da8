//! Configuration loading for tld-guesser
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `TLD_GUESSER_<SECTION>__<KEY>` and `PORT`
//! 2. `--config <path>` specified file
//! 3. Project root: `./tld-guesser.toml` or `./.tld-guesser.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/tld-guesser/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDatasetConfig, FileGameConfig, FileModelArtifacts,
    FileModelsConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
