//! Inspector and catalog configuration.
/// Settings file loader
mod loader;
/// Catalog file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use types::{
    CatalogSettings,
    ConfigError,
    FlagNames,
    InspectorSettings,
    ValidationError,
};
