//! Localization manager that decorates translations for inspecting requests.

use std::fmt;
use std::sync::Arc;

use super::{
    InspectOptions,
    InspectedTranslation,
};
use crate::config::{
    FlagNames,
    InspectorSettings,
};
use crate::context::RequestScope;
use crate::locale::Locale;
use crate::render::BlockRenderer;
use crate::translation::{
    LocalizationManager,
    Translation,
};

/// Wraps another [`LocalizationManager`] and decorates what it resolves with
/// [`InspectedTranslation`] when the current request asks for it.
///
/// Built once at startup and shared; all per-request state arrives through the
/// [`RequestScope`] argument.
pub struct InspectingLocalizationManager<M> {
    /// Resolves the actual translations.
    inner: M,
    /// Request properties that switch each mode on.
    flags: FlagNames,
    /// Handed to every decorated translation.
    plain_text_renderer: Arc<dyn BlockRenderer>,
}

impl<M: LocalizationManager> InspectingLocalizationManager<M> {
    /// Uses the default flag names (`showKeys`, `saveKeys`, `showHints`).
    #[must_use]
    pub fn new(inner: M, plain_text_renderer: Arc<dyn BlockRenderer>) -> Self {
        Self { inner, flags: FlagNames::default(), plain_text_renderer }
    }

    #[must_use]
    pub fn with_settings(
        inner: M,
        plain_text_renderer: Arc<dyn BlockRenderer>,
        settings: &InspectorSettings,
    ) -> Self {
        Self { inner, flags: settings.flags.clone(), plain_text_renderer }
    }

    #[must_use]
    pub const fn flags(&self) -> &FlagNames {
        &self.flags
    }
}

impl<M: LocalizationManager> LocalizationManager for InspectingLocalizationManager<M> {
    fn translation(
        &self,
        key: &str,
        locale: &Locale,
        scope: Option<&RequestScope>,
    ) -> Option<Arc<dyn Translation>> {
        tracing::debug!(key, %locale, "Translation lookup");

        let translation = self.inner.translation(key, locale, scope)?;
        if translation.is_inspected() {
            return Some(translation);
        }

        let Some(scope) = scope else {
            tracing::debug!(key, %locale, "No request for translation key");
            return Some(translation);
        };

        let options = InspectOptions::from_request(scope.request(), &self.flags);
        if !options.any() {
            return Some(translation);
        }

        tracing::debug!(key, ?options, "Inspecting translation");
        Some(Arc::new(InspectedTranslation::new(
            translation,
            options,
            scope.execution_context().cloned(),
            Arc::clone(&self.plain_text_renderer),
        )))
    }
}

impl<M: fmt::Debug> fmt::Debug for InspectingLocalizationManager<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectingLocalizationManager")
            .field("inner", &self.inner)
            .field("flags", &self.flags)
            .field("plain_text_renderer", &"<BlockRenderer>")
            .finish()
    }
}
