//! Language definitions for syntax highlighting
//!
//! A `LanguageDefinition` is a plain table: keywords, known identifiers,
//! ordered token rules and comment markers. It is assembled with the builder
//! methods below, validated once, and then handed to a highlighter which
//! owns it for the rest of its life.

use super::rules::TokenRule;
use super::tokens::ColorCategory;
use crate::error::{Result, SyntaxError};

/// A complete language definition for syntax highlighting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDefinition {
    /// Language name (e.g., "C#", "Lua")
    pub name: String,
    /// File extensions without the dot (e.g., ["c", "h"])
    pub extensions: Vec<String>,
    /// Words colored as keywords
    pub keywords: Vec<String>,
    /// Built-in types and functions colored as known identifiers
    pub identifiers: Vec<String>,
    /// Token rules, tried in declaration order
    pub rules: Vec<TokenRule>,
    /// Single-line comment marker; empty disables it
    pub single_line_comment: String,
    /// Multi-line comment start marker; empty disables block comments
    pub comment_start: String,
    /// Multi-line comment end marker
    pub comment_end: String,
    /// Preprocessor marker, recognized only as the first non-blank char
    pub preproc_char: Option<char>,
    /// Whether keywords and rules match case-sensitively
    pub case_sensitive: bool,
    /// Whether the host should auto-indent new lines
    pub auto_indentation: bool,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            keywords: Vec::new(),
            identifiers: Vec::new(),
            rules: Vec::new(),
            single_line_comment: String::new(),
            comment_start: String::new(),
            comment_end: String::new(),
            preproc_char: None,
            case_sensitive: true,
            auto_indentation: true,
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    /// Add keywords
    pub fn add_keywords(&mut self, words: &[&str]) {
        self.keywords.extend(words.iter().map(|w| w.to_string()));
    }

    /// Add known identifiers
    pub fn add_identifiers(&mut self, names: &[&str]) {
        self.identifiers.extend(names.iter().map(|n| n.to_string()));
    }

    /// Append a token rule; earlier rules win over later ones
    pub fn add_rule(&mut self, pattern: &str, color: ColorCategory) {
        self.rules.push(TokenRule::new(pattern, color));
    }

    /// Set single-line and block comment markers
    pub fn set_comments(&mut self, single_line: &str, start: &str, end: &str) {
        self.single_line_comment = single_line.to_string();
        self.comment_start = start.to_string();
        self.comment_end = end.to_string();
    }

    /// Check the table is usable by a highlighter
    ///
    /// Rule patterns are checked when they are compiled.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SyntaxError::MissingName);
        }
        if !self.comment_start.is_empty() && self.comment_end.is_empty() {
            return Err(SyntaxError::MissingCommentEnd(self.name.clone()));
        }
        Ok(())
    }
}
