//! Translation inspection.
//!
//! [`InspectingLocalizationManager`] intercepts translation lookups and, when the current request
//! carries one of the inspection flags, hands back an [`InspectedTranslation`] that renders keys,
//! hover hints or records what was rendered.

mod manager;
mod options;
mod translation;

pub use manager::InspectingLocalizationManager;
pub use options::InspectOptions;
pub use translation::InspectedTranslation;
