//! Locale identifiers and fallback chains.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A language/region identifier such as `fr` or `fr_CA`.
///
/// Tags are normalized on construction: `-` becomes `_`, the language part is
/// lowercased and a two-letter region is uppercased. The empty tag is the root
/// locale, the last step of every fallback chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(normalize(tag))
    }

    /// The root locale.
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language part of the tag (`fr` for `fr_CA`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('_').next().unwrap_or_default()
    }

    /// Next less specific locale: `fr_CA` → `fr` → root. The root locale has no parent.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(self.0.rsplit_once('_').map_or_else(Self::root, |(head, _)| Self(head.to_string())))
    }

    /// This locale followed by each of its parents, ending with the root locale.
    #[must_use]
    pub fn fallback_chain(&self) -> Vec<Self> {
        let mut chain = vec![self.clone()];
        let mut current = self.parent();
        while let Some(locale) = current {
            current = locale.parent();
            chain.push(locale);
        }
        chain
    }
}

/// Lowercases the language, uppercases a two-letter region, keeps scripts and variants as written.
fn normalize(tag: &str) -> String {
    let tag = tag.trim();
    if tag.is_empty() {
        return String::new();
    }

    tag.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(index, part)| match index {
            0 => part.to_ascii_lowercase(),
            _ if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) => {
                part.to_ascii_uppercase()
            }
            _ => part.to_string(),
        })
        .collect::<Vec<_>>()
        .join("_")
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}
