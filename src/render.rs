//! Block renderers.

use std::fmt;

use thiserror::Error;

use crate::block::Block;

/// Errors raised while rendering blocks.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The output sink rejected a write.
    #[error("Failed to write rendered output: {0}")]
    Write(#[from] fmt::Error),

    /// Renderer-specific failure with an optional underlying cause.
    #[error("{message}")]
    Renderer {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RenderError {
    #[must_use]
    pub fn renderer(message: impl Into<String>) -> Self {
        Self::Renderer { message: message.into(), source: None }
    }

    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Renderer { message: message.into(), source: Some(Box::new(source)) }
    }
}

/// Renders a block into a text sink.
pub trait BlockRenderer: Send + Sync {
    /// # Errors
    /// Returns an error if the block cannot be rendered or the sink fails.
    fn render(&self, block: &Block, sink: &mut dyn fmt::Write) -> Result<(), RenderError>;
}

/// Renders blocks as unstyled plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BlockRenderer for PlainTextRenderer {
    fn render(&self, block: &Block, sink: &mut dyn fmt::Write) -> Result<(), RenderError> {
        match block {
            Block::Word(text) | Block::Verbatim { text, .. } => sink.write_str(text)?,
            Block::Space(ch) | Block::Special(ch) => sink.write_char(*ch)?,
            Block::NewLine => sink.write_char('\n')?,
            Block::Format { children, .. } | Block::Composite(children) => {
                for child in children {
                    self.render(child, sink)?;
                }
            }
        }
        Ok(())
    }
}

/// Renders a block to a `String`.
///
/// # Errors
/// Propagates the renderer's error.
pub fn render_to_string(
    renderer: &dyn BlockRenderer,
    block: &Block,
) -> Result<String, RenderError> {
    let mut printer = String::new();
    renderer.render(block, &mut printer)?;
    Ok(printer)
}

/// Message of the innermost error in the `source()` chain.
#[must_use]
pub fn root_cause_message(error: &(dyn std::error::Error + 'static)) -> String {
    let mut cause = error;
    while let Some(next) = cause.source() {
        cause = next;
    }
    cause.to_string()
}
