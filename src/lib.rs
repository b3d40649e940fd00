//! glyphlight - incremental per-line syntax highlighting
//!
//! The host hands a highlighter one line of [`Glyph`]s at a time together
//! with the previous line's [`LineState`]; the highlighter colors every
//! glyph in place and returns the state for the next line.
//!
//! ```
//! use glyphlight::{CSharpHighlighter, ColorCategory, Glyph, LineState, SyntaxHighlighter};
//!
//! let highlighter = CSharpHighlighter::new();
//! let mut line = Glyph::line_from_str("var s = @\"multi");
//! let state = highlighter.colorize(&mut line, LineState::Normal);
//! assert_eq!(state, LineState::VerbatimString);
//! assert_eq!(line[0].color, ColorCategory::Keyword);
//! ```

pub mod config;
pub mod error;
pub mod syntax;

pub use error::{Result, SyntaxError};
pub use syntax::{
    CSharpHighlighter, ColorCategory, Glyph, HighlightCache, LanguageDefinition, LineState,
    PatternHighlighter, SyntaxHighlighter, SyntaxManager,
};
