//! Translation decorator applying the requested inspection mode at render time.

use std::fmt;
use std::sync::Arc;

use super::InspectOptions;
use crate::block::Block;
use crate::context::ExecutionContext;
use crate::locale::Locale;
use crate::render::{
    BlockRenderer,
    render_to_string,
    root_cause_message,
};
use crate::translation::{
    BundleId,
    Translation,
};

/// Wraps a resolved translation and changes how it renders.
///
/// Modes are checked in a fixed order and the first enabled one decides the output:
///
/// 1. `save_keys`: renders normally and records `key → plain text` in the execution context
/// 2. `show_keys`: renders the key itself
/// 3. `show_hints`: renders `%%plain text%%key%%` as inline verbatim text
///
/// With no mode enabled it renders exactly like the wrapped translation.
pub struct InspectedTranslation {
    wrapped: Arc<dyn Translation>,
    options: InspectOptions,
    /// Where saved keys go; saving is skipped without one.
    execution_context: Option<ExecutionContext>,
    /// Produces the plain text for saved keys and hints.
    plain_text_renderer: Arc<dyn BlockRenderer>,
}

impl InspectedTranslation {
    #[must_use]
    pub fn new(
        wrapped: Arc<dyn Translation>,
        options: InspectOptions,
        execution_context: Option<ExecutionContext>,
        plain_text_renderer: Arc<dyn BlockRenderer>,
    ) -> Self {
        Self { wrapped, options, execution_context, plain_text_renderer }
    }

    fn generate_block(&self, locale: Option<&Locale>, parameters: &[&str]) -> Block {
        if let Some(block) = self.handle_save_keys(locale, parameters) {
            return block;
        }
        if let Some(block) = self.handle_show_keys() {
            return block;
        }
        if let Some(block) = self.handle_show_hints(locale, parameters) {
            return block;
        }
        self.wrapped.render_with_locale(locale, parameters)
    }

    fn handle_save_keys(&self, locale: Option<&Locale>, parameters: &[&str]) -> Option<Block> {
        if !self.options.save_keys {
            return None;
        }

        let result = self.wrapped.render_with_locale(locale, parameters);
        if let Some(context) = &self.execution_context {
            // Render before taking the context lock.
            let entry = self.key().map(|key| (key, self.plain_text(&result)));
            context.with_saved_keys(|saved_keys| {
                if let Some((key, text)) = entry {
                    saved_keys.insert(key, text);
                }
            });
        }
        Some(result)
    }

    fn handle_show_keys(&self) -> Option<Block> {
        if !self.options.show_keys {
            return None;
        }

        Some(self.key().map_or_else(Block::empty, Block::word))
    }

    /// The marker is meant to be turned into a hover element client-side, e.g. with
    /// `/%%(.*)%%(.*)%%/` → `<span class='translation' alt=$2>$1</span>`.
    fn handle_show_hints(&self, locale: Option<&Locale>, parameters: &[&str]) -> Option<Block> {
        if !self.options.show_hints {
            return None;
        }

        let Some(key) = self.key() else {
            return Some(Block::empty());
        };
        let result = self.wrapped.render_with_locale(locale, parameters);
        Some(Block::verbatim(format!("%%{}%%{key}%%", self.plain_text(&result))))
    }

    /// Never fails: a rendering error becomes `ERROR: [<root cause>]`.
    fn plain_text(&self, block: &Block) -> String {
        render_to_string(self.plain_text_renderer.as_ref(), block)
            .unwrap_or_else(|e| format!("ERROR: [{}]", root_cause_message(&e)))
    }
}

impl Translation for InspectedTranslation {
    fn bundle(&self) -> &BundleId {
        self.wrapped.bundle()
    }

    fn locale(&self) -> &Locale {
        self.wrapped.locale()
    }

    fn key(&self) -> Option<&str> {
        self.wrapped.key()
    }

    fn raw_source(&self) -> &str {
        self.wrapped.raw_source()
    }

    fn render_with_locale(&self, locale: Option<&Locale>, parameters: &[&str]) -> Block {
        self.generate_block(locale, parameters)
    }

    fn render(&self, parameters: &[&str]) -> Block {
        self.generate_block(None, parameters)
    }

    fn is_inspected(&self) -> bool {
        true
    }
}

impl fmt::Debug for InspectedTranslation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectedTranslation")
            .field("wrapped", &self.wrapped)
            .field("options", &self.options)
            .field("execution_context", &self.execution_context)
            .field("plain_text_renderer", &"<BlockRenderer>")
            .finish()
    }
}
