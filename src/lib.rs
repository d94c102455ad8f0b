//! translation-inspector
//!
//! Translation lookup interceptor that lets a request show translation keys, render hover hints
//! or collect every rendered `key → text` pair, plus the catalog and rendering pieces it runs on.

pub mod block;
pub mod catalog;
pub mod config;
pub mod context;
pub mod inspector;
pub mod locale;
pub mod render;
pub mod translation;

#[cfg(test)]
mod test_utils;

pub use catalog::{
    Catalog,
    CatalogLocalization,
};
pub use inspector::{
    InspectOptions,
    InspectedTranslation,
    InspectingLocalizationManager,
};
pub use translation::{
    LocalizationManager,
    Translation,
};
