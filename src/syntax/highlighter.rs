//! The highlighter capability contract
//!
//! Hosts only ever talk to a `dyn SyntaxHighlighter`. Both the hardcoded
//! C# tokenizer and the table-driven pattern tokenizer implement it.

use super::language::LanguageDefinition;
use super::rules::LineState;
use super::style::Glyph;
use super::tokens::ColorCategory;
use super::trie::IdentifierTrie;

/// Lines a host may recolor per rendering pass unless configured otherwise
pub const DEFAULT_MAX_LINES_PER_FRAME: usize = 1000;

/// A per-line syntax highlighter
pub trait SyntaxHighlighter: Send + Sync {
    /// Whether the host should auto-indent new lines for this language
    fn auto_indentation(&self) -> bool;

    /// Upper bound on lines the host should recolor in one frame
    fn max_lines_per_frame(&self) -> usize;

    /// Hover text for an identifier, if it has any
    fn tooltip(&self, identifier: &str) -> Option<&str>;

    /// Color every glyph of `line` and return the state for the next line
    fn colorize(&self, line: &mut [Glyph], state: LineState) -> LineState;
}

/// What the trie knows about a spelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub color: ColorCategory,
    pub declaration: Option<String>,
}

impl Identifier {
    pub fn keyword() -> Self {
        Self {
            color: ColorCategory::Keyword,
            declaration: None,
        }
    }

    pub fn known(declaration: &str) -> Self {
        Self {
            color: ColorCategory::KnownIdentifier,
            declaration: Some(declaration.to_string()),
        }
    }
}

/// Build the keyword/known-identifier trie for a language
///
/// Known identifiers are inserted after keywords, so a name listed in both
/// ends up as a known identifier.
pub(crate) fn identifier_trie(
    language: &LanguageDefinition,
    declaration: &str,
) -> IdentifierTrie<Identifier> {
    let mut trie = if language.case_sensitive {
        IdentifierTrie::new()
    } else {
        IdentifierTrie::case_insensitive()
    };

    for keyword in language.keywords.iter().filter(|k| !k.is_empty()) {
        trie.insert(keyword, Identifier::keyword());
    }
    for name in language.identifiers.iter().filter(|n| !n.is_empty()) {
        trie.insert(name, Identifier::known(declaration));
    }
    trie
}
