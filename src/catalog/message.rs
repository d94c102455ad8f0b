//! Catalog messages: positional formatting and inline markup.

use crate::block::{
    Block,
    Format,
};
use crate::locale::Locale;
use crate::translation::{
    BundleId,
    Translation,
};

/// Inline style markers, each closed by the same marker.
const MARKERS: [(&str, Format); 3] =
    [("**", Format::Bold), ("//", Format::Italic), ("##", Format::Monospace)];

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTranslation {
    key: String,
    locale: Locale,
    bundle: BundleId,
    source: String,
}

impl MessageTranslation {
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        locale: Locale,
        bundle: BundleId,
        source: impl Into<String>,
    ) -> Self {
        Self { key: key.into(), locale, bundle, source: source.into() }
    }
}

impl Translation for MessageTranslation {
    fn bundle(&self) -> &BundleId {
        &self.bundle
    }

    fn locale(&self) -> &Locale {
        &self.locale
    }

    fn key(&self) -> Option<&str> {
        Some(&self.key)
    }

    fn raw_source(&self) -> &str {
        &self.source
    }

    /// Messages have no locale-sensitive parts, so `_locale` is not consulted.
    fn render_with_locale(&self, _locale: Option<&Locale>, parameters: &[&str]) -> Block {
        parse_message(&format_message(&self.source, parameters))
    }
}

/// Substitutes `{0}`, `{1}`, … with positional parameters.
///
/// Without parameters the pattern is returned untouched. Otherwise `''` is a literal
/// quote, text between single quotes is not interpreted, and placeholders without a
/// matching parameter are kept as written.
///
/// ```
/// use translation_inspector::catalog::format_message;
///
/// assert_eq!(format_message("Hello {0}", &["Alice"]), "Hello Alice");
/// assert_eq!(format_message("It''s '{0}'", &["x"]), "It's {0}");
/// ```
#[must_use]
pub fn format_message(pattern: &str, parameters: &[&str]) -> String {
    if parameters.is_empty() {
        return pattern.to_string();
    }

    let mut output = String::with_capacity(pattern.len());
    let mut chars = pattern.char_indices().peekable();
    let mut quoted = false;

    while let Some((index, ch)) = chars.next() {
        match ch {
            '\'' if chars.peek().is_some_and(|(_, next)| *next == '\'') => {
                chars.next();
                output.push('\'');
            }
            '\'' => quoted = !quoted,
            '{' if !quoted => {
                let rest = pattern.get(index + 1..).unwrap_or_default();
                let value = rest.split_once('}').and_then(|(placeholder, _)| {
                    placeholder
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .and_then(|position| parameters.get(position))
                });

                if let Some(value) = value {
                    output.push_str(value);
                    for (_, skipped) in chars.by_ref() {
                        if skipped == '}' {
                            break;
                        }
                    }
                } else {
                    output.push('{');
                }
            }
            c => output.push(c),
        }
    }

    output
}

/// Parses message text into blocks.
///
/// `**bold**`, `//italic//` and `##monospace##` become [`Block::Format`]; an unclosed
/// marker is kept as text.
#[must_use]
pub fn parse_message(text: &str) -> Block {
    Block::Composite(parse_inline(text))
}

fn parse_inline(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        let next = MARKERS
            .iter()
            .filter_map(|(marker, format)| rest.find(marker).map(|at| (at, *marker, *format)))
            .min_by_key(|(at, ..)| *at);

        let Some((at, marker, format)) = next else {
            literal.push_str(rest);
            break;
        };

        let (before, from_marker) = rest.split_at(at);
        literal.push_str(before);
        let after_open = from_marker.strip_prefix(marker).unwrap_or_default();

        if let Some((inner, after_close)) = after_open.split_once(marker) {
            blocks.extend(Block::words(&std::mem::take(&mut literal)));
            blocks.push(Block::Format { format, children: parse_inline(inner) });
            rest = after_close;
        } else {
            literal.push_str(marker);
            rest = after_open;
        }
    }

    blocks.extend(Block::words(&literal));
    blocks
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::render::{
        PlainTextRenderer,
        render_to_string,
    };

    fn plain(block: &Block) -> String {
        render_to_string(&PlainTextRenderer, block).unwrap_or_default()
    }

    #[rstest]
    #[case::no_parameters("Hello {0}", &[], "Hello {0}")]
    #[case::single("Hello {0}", &["Alice"], "Hello Alice")]
    #[case::reordered("{1} then {0}", &["a", "b"], "b then a")]
    #[case::repeated("{0}{0}", &["x"], "xx")]
    #[case::missing_parameter("{0} and {3}", &["x"], "x and {3}")]
    #[case::not_a_placeholder("{name} {0}", &["x"], "{name} x")]
    #[case::unclosed("{0", &["x"], "{0")]
    #[case::escaped_quote("It''s {0}", &["me"], "It's me")]
    #[case::quoted_placeholder("'{0}' is {0}", &["x"], "{0} is x")]
    #[case::spaced_placeholder("{ 0 }", &["x"], "x")]
    fn format_message_cases(
        #[case] pattern: &str,
        #[case] parameters: &[&str],
        #[case] expected: &str,
    ) {
        assert_that!(format_message(pattern, parameters), eq(expected));
    }

    #[rstest]
    fn parse_message_plain_text() {
        let block = parse_message("Hello world");

        assert_that!(
            block,
            eq(&Block::Composite(vec![
                Block::word("Hello"),
                Block::Space(' '),
                Block::word("world"),
            ]))
        );
    }

    #[rstest]
    fn parse_message_bold() {
        let block = parse_message("a **b** c");

        assert_that!(
            block,
            eq(&Block::Composite(vec![
                Block::word("a"),
                Block::Space(' '),
                Block::Format { format: Format::Bold, children: vec![Block::word("b")] },
                Block::Space(' '),
                Block::word("c"),
            ]))
        );
    }

    #[rstest]
    fn parse_message_nested_formats() {
        let block = parse_message("**//x//**");

        assert_that!(
            block,
            eq(&Block::Composite(vec![Block::Format {
                format: Format::Bold,
                children: vec![Block::Format {
                    format: Format::Italic,
                    children: vec![Block::word("x")],
                }],
            }]))
        );
    }

    #[rstest]
    #[case::unclosed_bold("a **b")]
    #[case::unclosed_mono("##x")]
    #[case::plain("no markup here")]
    fn parse_message_keeps_text(#[case] text: &str) {
        assert_that!(plain(&parse_message(text)), eq(text));
    }

    #[rstest]
    fn render_formats_then_parses() {
        let translation = MessageTranslation::new(
            "welcome",
            Locale::new("en"),
            BundleId::new("en.json"),
            "Welcome, **{0}**!",
        );

        let block = translation.render(&["Ada"]);

        assert_that!(plain(&block), eq("Welcome, Ada!"));
        assert_that!(translation.key(), some(eq("welcome")));
        assert_that!(translation.raw_source(), eq("Welcome, **{0}**!"));
        assert_that!(translation.is_inspected(), eq(false));
    }
}
