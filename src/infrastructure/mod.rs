//! Infrastructure layer - Configuration, filesystem and URI hand-off

pub mod config;
pub mod file_provider;
pub mod opener;

pub use config::{
    ConfigDriver, ConfigProvider, EnvConfigDriver, FileConfigDriver, IntervalConfig,
    VAULT_NAME_KEY,
};
pub use file_provider::{FileProvider, FileSystemProvider, NOTE_EXTENSION};
pub use opener::{SystemOpener, UriOpener};
