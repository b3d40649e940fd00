//! Syntax highlighting engine
//!
//! This module provides per-line syntax highlighting for live-edited
//! buffers:
//! - `SyntaxHighlighter`, the contract hosts depend on
//! - `CSharpHighlighter`, a hardcoded tokenizer for C#
//! - `PatternHighlighter`, a table-driven tokenizer for any language
//! - `HighlightCache` and `SyntaxManager` for the host side

mod style;
mod tokens;
mod trie;
mod rules;
mod language;
mod highlighter;
mod csharp;
mod pattern;
mod loader;
mod manager;
mod builtin;

pub use style::{runs, Color, Glyph, Span, Style};
pub use tokens::ColorCategory;
pub use trie::IdentifierTrie;
pub use rules::{CompiledRule, LineState, TokenRule};
pub use language::LanguageDefinition;
pub use highlighter::{Identifier, SyntaxHighlighter, DEFAULT_MAX_LINES_PER_FRAME};
pub use csharp::CSharpHighlighter;
pub use pattern::PatternHighlighter;
pub use loader::{load_language_dir, load_language_file, parse_language, LanguageFile, RuleFile};
pub use manager::{HighlightCache, SyntaxManager};
pub use builtin::all_languages;
