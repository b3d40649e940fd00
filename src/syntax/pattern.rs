//! Generic pattern highlighter
//!
//! Drives the highlighter contract purely from a `LanguageDefinition`:
//! comment markers and the preprocessor char are handled directly, and
//! everything else goes through the language's regex rules in declared
//! order. Slower and less precise than a hardcoded tokenizer for
//! context-sensitive constructs, but needs no per-language code.

use smallvec::SmallVec;

use super::highlighter::{identifier_trie, Identifier, SyntaxHighlighter, DEFAULT_MAX_LINES_PER_FRAME};
use super::language::LanguageDefinition;
use super::rules::{CompiledRule, LineState};
use super::style::{find_marker, matches_at, paint, Glyph};
use super::tokens::ColorCategory;
use super::trie::IdentifierTrie;
use crate::error::Result;

const KNOWN_IDENTIFIER_DECLARATION: &str = "Built-in function";

/// Lines whose UTF-8 text fits here are matched without touching the heap
const INLINE_LINE_BYTES: usize = 512;

/// Table-driven highlighter for any language definition
#[derive(Debug)]
pub struct PatternHighlighter {
    language: LanguageDefinition,
    rules: Vec<CompiledRule>,
    identifiers: IdentifierTrie<Identifier>,
    max_lines_per_frame: usize,
}

impl PatternHighlighter {
    /// Validate `language` and compile its rules
    pub fn new(language: LanguageDefinition) -> Result<Self> {
        language.validate()?;

        let rules = language
            .rules
            .iter()
            .map(|rule| rule.compile(&language.name, language.case_sensitive))
            .collect::<Result<Vec<_>>>()?;
        let identifiers = identifier_trie(&language, KNOWN_IDENTIFIER_DECLARATION);

        tracing::debug!(
            language = %language.name,
            rules = rules.len(),
            identifiers = identifiers.len(),
            "built pattern highlighter"
        );

        Ok(Self {
            language,
            rules,
            identifiers,
            max_lines_per_frame: DEFAULT_MAX_LINES_PER_FRAME,
        })
    }

    /// Override the per-frame line budget
    pub fn with_max_lines_per_frame(mut self, lines: usize) -> Self {
        self.max_lines_per_frame = lines.max(1);
        self
    }

    /// The language this highlighter was built from
    pub fn language(&self) -> &LanguageDefinition {
        &self.language
    }

    /// Color a block comment whose body starts at `from`; returns the glyph
    /// index after it, or `None` if it runs past the end of the line
    fn block_comment(&self, line: &mut [Glyph], start: usize, from: usize) -> Option<usize> {
        let end_marker = &self.language.comment_end;
        match find_marker(line, from, end_marker) {
            Some(close) => {
                let end = close + end_marker.chars().count();
                paint(&mut line[start..end], ColorCategory::MultiLineComment);
                Some(end)
            }
            None => {
                paint(&mut line[start..], ColorCategory::MultiLineComment);
                None
            }
        }
    }

    /// Try the rule table at glyph `i` (byte offset `byte` into `text`);
    /// returns the number of glyphs colored
    fn match_rules(&self, line: &mut [Glyph], i: usize, text: &str, byte: usize) -> Option<usize> {
        let rest = &text[byte..];
        let (rule, len) = self
            .rules
            .iter()
            .find_map(|rule| rule.match_len(rest).filter(|len| *len > 0).map(|len| (rule, len)))?;

        let count = rest[..len].chars().count();
        let token = &mut line[i..i + count];
        let color = if rule.color == ColorCategory::Identifier {
            self.identifiers
                .get_with(token, |glyph| glyph.ch)
                .map_or(ColorCategory::Identifier, |entry| entry.color)
        } else {
            rule.color
        };
        paint(token, color);
        Some(count)
    }
}

impl SyntaxHighlighter for PatternHighlighter {
    fn auto_indentation(&self) -> bool {
        self.language.auto_indentation
    }

    fn max_lines_per_frame(&self) -> usize {
        self.max_lines_per_frame
    }

    fn tooltip(&self, identifier: &str) -> Option<&str> {
        self.identifiers.get(identifier)?.declaration.as_deref()
    }

    fn colorize(&self, line: &mut [Glyph], state: LineState) -> LineState {
        let mut i = 0;
        if state == LineState::MultiLineComment && !self.language.comment_end.is_empty() {
            match self.block_comment(line, 0, 0) {
                Some(end) => i = end,
                None => return LineState::MultiLineComment,
            }
        }

        let mut text: SmallVec<[u8; INLINE_LINE_BYTES]> = SmallVec::new();
        for glyph in line.iter() {
            let mut buf = [0u8; 4];
            text.extend_from_slice(glyph.ch.encode_utf8(&mut buf).as_bytes());
        }
        let text = std::str::from_utf8(&text).unwrap_or_default();
        let mut byte: usize = line[..i].iter().map(|glyph| glyph.ch.len_utf8()).sum();

        let language = &self.language;
        let mut seen_code = i > 0;
        while i < line.len() {
            let ch = line[i].ch;

            let consumed = if ch.is_whitespace() {
                line[i].color = ColorCategory::Default;
                1
            } else if matches_at(line, i, &language.comment_start) {
                let from = i + language.comment_start.chars().count();
                match self.block_comment(line, i, from) {
                    Some(end) => end - i,
                    None => return LineState::MultiLineComment,
                }
            } else if matches_at(line, i, &language.single_line_comment) {
                paint(&mut line[i..], ColorCategory::Comment);
                return LineState::Normal;
            } else if !seen_code && language.preproc_char == Some(ch) {
                paint(&mut line[i..], ColorCategory::Preprocessor);
                return LineState::Normal;
            } else if let Some(count) = self.match_rules(line, i, text, byte) {
                count
            } else {
                line[i].color = ColorCategory::Default;
                1
            };

            debug_assert!(consumed > 0, "rule matched nothing at column {i}");
            seen_code |= !ch.is_whitespace();
            byte += line[i..i + consumed]
                .iter()
                .map(|glyph| glyph.ch.len_utf8())
                .sum::<usize>();
            i += consumed;
        }

        LineState::Normal
    }
}
