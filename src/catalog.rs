//! JSON translation catalogs and the localization manager that serves them.

mod loader;
mod message;

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;

pub use loader::flatten_messages;
pub use message::{
    MessageTranslation,
    format_message,
    parse_message,
};
use serde_json::Value;
use thiserror::Error;

use crate::config::{
    CatalogSettings,
    FileMatcher,
    MatcherError,
};
use crate::context::RequestScope;
use crate::locale::Locale;
use crate::translation::{
    BundleId,
    LocalizationManager,
    Translation,
};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Matcher(#[from] MatcherError),

    #[error("Failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Translations by locale, then by key.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Joins nested JSON keys.
    key_separator: String,
    entries: HashMap<Locale, HashMap<String, Arc<MessageTranslation>>>,
}

impl Catalog {
    #[must_use]
    pub fn new(key_separator: impl Into<String>) -> Self {
        Self { key_separator: key_separator.into(), entries: HashMap::new() }
    }

    /// Loads every catalog file under `root` matching the settings' patterns.
    ///
    /// Files are read in path order; the locale comes from the path (see
    /// [`Catalog::insert_json`] for duplicate handling) and the bundle id is the path
    /// relative to `root`.
    ///
    /// # Errors
    /// - Invalid glob pattern
    /// - Unreadable file or invalid JSON
    pub fn load(root: &Path, settings: &CatalogSettings) -> Result<Self, CatalogError> {
        tracing::debug!(root = %root.display(), "Loading catalog");

        let matcher = FileMatcher::new(root.to_path_buf(), settings)?;
        let mut catalog = Self::new(settings.key_separator.clone());

        for path in loader::find_catalog_files(&matcher) {
            let content = std::fs::read_to_string(&path)
                .map_err(|source| CatalogError::Io { path: path.clone(), source })?;
            let json: Value = serde_json::from_str(&content)
                .map_err(|source| CatalogError::Parse { path: path.clone(), source })?;

            let relative_path = path.strip_prefix(root).unwrap_or(&path);
            let locale = loader::detect_locale_from_path(relative_path);
            let bundle = BundleId::new(relative_path.to_string_lossy().replace('\\', "/"));

            let count = catalog.insert_json(&locale, &bundle, &json);
            tracing::debug!(%bundle, %locale, keys = count, "Loaded catalog file");
        }

        Ok(catalog)
    }

    /// Adds a message. The first message registered for a key and locale wins.
    ///
    /// Returns false if the key was already defined for the locale.
    pub fn insert(
        &mut self,
        locale: &Locale,
        bundle: &BundleId,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> bool {
        let key = key.into();
        let messages = self.entries.entry(locale.clone()).or_default();

        if let Some(existing) = messages.get(&key) {
            tracing::debug!(
                %key,
                %locale,
                kept = %existing.bundle(),
                ignored = %bundle,
                "Duplicate translation key"
            );
            return false;
        }

        let translation =
            MessageTranslation::new(key.clone(), locale.clone(), bundle.clone(), message);
        messages.insert(key, Arc::new(translation));
        true
    }

    /// Flattens a JSON document and adds its messages in key order.
    ///
    /// Returns the number of messages added.
    pub fn insert_json(&mut self, locale: &Locale, bundle: &BundleId, json: &Value) -> usize {
        let mut added = 0;
        for (key, message) in flatten_messages(json, &self.key_separator) {
            if self.insert(locale, bundle, key, message) {
                added += 1;
            }
        }
        added
    }

    /// Exact lookup, without locale fallback.
    #[must_use]
    pub fn get(&self, key: &str, locale: &Locale) -> Option<&Arc<MessageTranslation>> {
        self.entries.get(locale)?.get(key)
    }

    /// Locales with at least one message, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<_> = self.entries.keys().collect();
        locales.sort();
        locales
    }

    /// Number of messages across all locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// [`LocalizationManager`] backed by a [`Catalog`].
///
/// Lookup order: the requested locale and its parents, then the default locale and its
/// parents, then the root locale.
#[derive(Debug, Clone)]
pub struct CatalogLocalization {
    catalog: Catalog,
    default_locale: Option<Locale>,
}

impl CatalogLocalization {
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog, default_locale: None }
    }

    #[must_use]
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = Some(locale);
        self
    }

    /// Loads the catalog under `root` and applies the configured default locale.
    ///
    /// # Errors
    /// See [`Catalog::load`].
    pub fn from_settings(root: &Path, settings: &CatalogSettings) -> Result<Self, CatalogError> {
        let catalog = Catalog::load(root, settings)?;
        let default_locale = settings.default_locale.as_deref().map(Locale::new);
        Ok(Self { catalog, default_locale })
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn default_locale(&self) -> Option<&Locale> {
        self.default_locale.as_ref()
    }

    /// Locales tried for `locale`, most specific first.
    fn lookup_chain(&self, locale: &Locale) -> Vec<Locale> {
        let mut chain: Vec<Locale> =
            locale.fallback_chain().into_iter().filter(|l| !l.is_root()).collect();

        if let Some(default_locale) = &self.default_locale {
            for candidate in default_locale.fallback_chain() {
                if !candidate.is_root() && !chain.contains(&candidate) {
                    chain.push(candidate);
                }
            }
        }

        chain.push(Locale::root());
        chain
    }
}

impl LocalizationManager for CatalogLocalization {
    fn translation(
        &self,
        key: &str,
        locale: &Locale,
        _scope: Option<&RequestScope>,
    ) -> Option<Arc<dyn Translation>> {
        let found = self
            .lookup_chain(locale)
            .iter()
            .find_map(|candidate| self.catalog.get(key, candidate))
            .map(|translation| Arc::clone(translation) as Arc<dyn Translation>);

        if found.is_none() {
            tracing::debug!(key, %locale, "Translation not found");
        }

        found
    }
}
