//! Output blocks produced by rendering a translation.

/// Inline text style carried by [`Block::Format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Bold,
    Italic,
    Monospace,
}

/// A node of rendered output handed back to the rendering pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A run of letters and digits.
    Word(String),
    /// A whitespace character other than `\n`, kept as written (`' '`, `'\t'`, `'\r'`...).
    Space(char),
    /// A single punctuation or symbol character.
    Special(char),
    NewLine,
    /// Styled children.
    Format { format: Format, children: Vec<Self> },
    /// Text emitted as-is, without escaping or interpretation.
    Verbatim { text: String, inline: bool },
    /// Unstyled group of children.
    Composite(Vec<Self>),
}

impl Block {
    /// Empty composite block.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Composite(Vec::new())
    }

    #[must_use]
    pub fn word(text: impl Into<String>) -> Self {
        Self::Word(text.into())
    }

    /// Inline verbatim block.
    #[must_use]
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self::Verbatim { text: text.into(), inline: true }
    }

    /// Returns true if the block produces no output at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Word(text) | Self::Verbatim { text, .. } => text.is_empty(),
            Self::Space(_) | Self::Special(_) | Self::NewLine => false,
            Self::Format { children, .. } | Self::Composite(children) => {
                children.iter().all(Self::is_empty)
            }
        }
    }

    /// Splits plain text into word, space, newline and special blocks.
    ///
    /// Rendering the blocks as plain text gives back `text` unchanged.
    ///
    /// ```
    /// use translation_inspector::block::Block;
    ///
    /// let blocks = Block::words("Hi, you");
    /// assert_eq!(
    ///     blocks,
    ///     vec![Block::word("Hi"), Block::Special(','), Block::Space(' '), Block::word("you")]
    /// );
    /// ```
    #[must_use]
    pub fn words(text: &str) -> Vec<Self> {
        let mut blocks = Vec::new();
        let mut word = String::new();

        for ch in text.chars() {
            let separator = match ch {
                '\n' => Self::NewLine,
                c if c.is_whitespace() => Self::Space(c),
                c if c.is_alphanumeric() => {
                    word.push(c);
                    continue;
                }
                c => Self::Special(c),
            };

            if !word.is_empty() {
                blocks.push(Self::Word(std::mem::take(&mut word)));
            }
            blocks.push(separator);
        }

        if !word.is_empty() {
            blocks.push(Self::Word(word));
        }

        blocks
    }
}
