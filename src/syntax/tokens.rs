//! Color categories for syntax highlighting
//!
//! This module defines the closed set of semantic classes a glyph can be
//! assigned, and their default visual styles.

use super::style::{Color, Style};

/// Semantic color category of a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorCategory {
    /// Plain text, whitespace, and anything that could not be classified
    #[default]
    Default,
    /// Language keywords (class, if, return, ...)
    Keyword,
    /// Identifiers with no special meaning
    Identifier,
    /// Built-in types and functions listed by the language
    KnownIdentifier,
    /// String literals, including verbatim and interpolated strings
    String,
    /// Character literals
    CharLiteral,
    /// Numeric literals
    Number,
    /// Single-line comments
    Comment,
    /// Block comments, which may span lines
    MultiLineComment,
    /// Preprocessor directives
    Preprocessor,
    /// Operators and delimiters
    Punctuation,
}

impl ColorCategory {
    /// Every category, in declaration order
    pub const ALL: [ColorCategory; 11] = [
        ColorCategory::Default,
        ColorCategory::Keyword,
        ColorCategory::Identifier,
        ColorCategory::KnownIdentifier,
        ColorCategory::String,
        ColorCategory::CharLiteral,
        ColorCategory::Number,
        ColorCategory::Comment,
        ColorCategory::MultiLineComment,
        ColorCategory::Preprocessor,
        ColorCategory::Punctuation,
    ];

    /// Get the default style for this category
    pub fn default_style(&self) -> Style {
        match self {
            ColorCategory::Default => Style::default(),
            ColorCategory::Keyword => Style::fg(Color::Magenta).with_bold(),
            ColorCategory::Identifier => Style::default(),
            ColorCategory::KnownIdentifier => Style::fg(Color::Yellow),
            ColorCategory::String => Style::fg(Color::Green),
            ColorCategory::CharLiteral => Style::fg(Color::BrightGreen),
            ColorCategory::Number => Style::fg(Color::Cyan),
            ColorCategory::Comment => Style::fg(Color::BrightBlack).with_italic(),
            ColorCategory::MultiLineComment => Style::fg(Color::BrightBlack).with_italic(),
            ColorCategory::Preprocessor => Style::fg(Color::BrightMagenta),
            ColorCategory::Punctuation => Style::fg(Color::BrightWhite),
        }
    }

    /// Get the stable name used in language files
    pub fn name(&self) -> &'static str {
        match self {
            ColorCategory::Default => "Default",
            ColorCategory::Keyword => "Keyword",
            ColorCategory::Identifier => "Identifier",
            ColorCategory::KnownIdentifier => "KnownIdentifier",
            ColorCategory::String => "String",
            ColorCategory::CharLiteral => "CharLiteral",
            ColorCategory::Number => "Number",
            ColorCategory::Comment => "Comment",
            ColorCategory::MultiLineComment => "MultiLineComment",
            ColorCategory::Preprocessor => "Preprocessor",
            ColorCategory::Punctuation => "Punctuation",
        }
    }

    /// Parse a category from its name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }
}
