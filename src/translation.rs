//! Translation capabilities shared by catalog entries and their decorators.

use std::fmt;
use std::sync::Arc;

use crate::block::Block;
use crate::context::RequestScope;
use crate::locale::Locale;

/// Identifier of the bundle a translation was loaded from (e.g. a catalog file path).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BundleId(String);

impl BundleId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BundleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved, immutable translation.
pub trait Translation: fmt::Debug + Send + Sync {
    fn bundle(&self) -> &BundleId;

    /// Locale the translation was actually found in (may be a fallback of the requested one).
    fn locale(&self) -> &Locale;

    /// Translation key, if the translation has one.
    fn key(&self) -> Option<&str>;

    /// Unformatted message source.
    fn raw_source(&self) -> &str;

    /// Renders the translation with positional parameters.
    ///
    /// `locale` selects locale-sensitive formatting; `None` uses the translation's own.
    fn render_with_locale(&self, locale: Option<&Locale>, parameters: &[&str]) -> Block;

    fn render(&self, parameters: &[&str]) -> Block {
        self.render_with_locale(None, parameters)
    }

    /// True for translations already wrapped by the inspector.
    fn is_inspected(&self) -> bool {
        false
    }
}

/// Resolves translation keys for a locale.
///
/// `scope` carries the current request, if any. Plain catalogs ignore it; decorating
/// managers read request flags from it.
pub trait LocalizationManager: Send + Sync {
    fn translation(
        &self,
        key: &str,
        locale: &Locale,
        scope: Option<&RequestScope>,
    ) -> Option<Arc<dyn Translation>>;
}

impl<M: LocalizationManager + ?Sized> LocalizationManager for Arc<M> {
    fn translation(
        &self,
        key: &str,
        locale: &Locale,
        scope: Option<&RequestScope>,
    ) -> Option<Arc<dyn Translation>> {
        (**self).translation(key, locale, scope)
    }
}
