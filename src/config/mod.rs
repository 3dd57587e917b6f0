//! Configuration file management and resolution.

mod manager;

pub use manager::{
    AzuConfig, ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    KNOWN_MODELS, ResolveOptions, ResolvedConfig, resolve_config,
};
