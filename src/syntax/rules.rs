//! Token rules and line state
//!
//! This module defines the declarative `(pattern, color)` rules a language
//! table carries, their compiled form, and the carry state threaded from
//! one line to the next.

use regex::{Regex, RegexBuilder};

use super::tokens::ColorCategory;
use crate::error::{Result, SyntaxError};

/// A declarative single-line rule: a regex pattern and the color it assigns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRule {
    /// Regex source, matched at the current scan position
    pub pattern: String,
    /// Color assigned to the matched text
    pub color: ColorCategory,
}

impl TokenRule {
    /// Create a new rule
    pub fn new(pattern: &str, color: ColorCategory) -> Self {
        Self {
            pattern: pattern.to_string(),
            color,
        }
    }

    /// Compile the rule, anchored so it only matches at the scan position
    pub fn compile(&self, language: &str, case_sensitive: bool) -> Result<CompiledRule> {
        if self.pattern.is_empty() {
            return Err(SyntaxError::EmptyPattern(language.to_string()));
        }

        let anchored = format!("^(?:{})", self.pattern);
        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|source| SyntaxError::InvalidPattern {
                language: language.to_string(),
                pattern: self.pattern.clone(),
                source,
            })?;

        Ok(CompiledRule {
            regex,
            color: self.color,
        })
    }
}

/// A rule ready for matching
#[derive(Debug)]
pub struct CompiledRule {
    regex: Regex,
    /// Color assigned to the matched text
    pub color: ColorCategory,
}

impl CompiledRule {
    /// Byte length of the match at the start of `text`, if any
    pub fn match_len(&self, text: &str) -> Option<usize> {
        self.regex.find(text).map(|m| m.end())
    }
}

/// Carry state for multi-line constructs
///
/// Stored per line by the host and passed to the next line's call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineState {
    /// Not inside any multi-line construct
    #[default]
    Normal,
    /// Inside an unterminated block comment
    MultiLineComment,
    /// Inside an unterminated verbatim string
    VerbatimString,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_is_anchored() {
        let rule = TokenRule::new(r"\d+", ColorCategory::Number)
            .compile("Test", true)
            .unwrap();
        assert_eq!(rule.match_len("123 abc"), Some(3));
        assert_eq!(rule.match_len("abc 123"), None);
    }

    #[test]
    fn test_alternation_is_anchored() {
        let rule = TokenRule::new(r"a|\d+", ColorCategory::Number)
            .compile("Test", true)
            .unwrap();
        assert_eq!(rule.match_len("x12"), None);
    }

    #[test]
    fn test_case_insensitive_rule() {
        let rule = TokenRule::new("select", ColorCategory::Keyword)
            .compile("SQL", false)
            .unwrap();
        assert_eq!(rule.match_len("SELECT *"), Some(6));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = TokenRule::new("(unclosed", ColorCategory::Default)
            .compile("Test", true)
            .unwrap_err();
        assert!(matches!(err, SyntaxError::InvalidPattern { .. }));
    }

    #[test]
    fn test_empty_pattern() {
        let err = TokenRule::new("", ColorCategory::Default)
            .compile("Test", true)
            .unwrap_err();
        assert!(matches!(err, SyntaxError::EmptyPattern(_)));
    }

    #[test]
    fn test_line_state_defaults_to_normal() {
        assert_eq!(LineState::default(), LineState::Normal);
    }
}
