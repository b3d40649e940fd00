//! Hardcoded C# tokenizer
//!
//! A fixed chain of recognizers that handles the C# constructs a regex
//! table gets wrong: verbatim strings (`@"..."`) spanning lines with `""`
//! as the escaped quote, interpolated strings, and numeric suffixes.

use super::builtin;
use super::highlighter::{identifier_trie, Identifier, SyntaxHighlighter, DEFAULT_MAX_LINES_PER_FRAME};
use super::language::LanguageDefinition;
use super::rules::LineState;
use super::style::{find_marker, matches_at, paint, Glyph};
use super::tokens::ColorCategory;
use super::trie::IdentifierTrie;

const KNOWN_IDENTIFIER_DECLARATION: &str = "Built-in type/function";

/// Dedicated highlighter for C# source
pub struct CSharpHighlighter {
    identifiers: IdentifierTrie<Identifier>,
    max_lines_per_frame: usize,
}

impl CSharpHighlighter {
    /// Create a highlighter using the built-in C# keyword tables
    pub fn new() -> Self {
        Self::with_language(&builtin::csharp::csharp_language())
    }

    /// Create a highlighter taking keywords and known identifiers from `language`
    ///
    /// Only the word lists and the case-sensitivity flag are used; the
    /// token rules are fixed.
    pub fn with_language(language: &LanguageDefinition) -> Self {
        let identifiers = identifier_trie(language, KNOWN_IDENTIFIER_DECLARATION);
        tracing::debug!(
            language = %language.name,
            identifiers = identifiers.len(),
            "built C# highlighter"
        );
        Self {
            identifiers,
            max_lines_per_frame: DEFAULT_MAX_LINES_PER_FRAME,
        }
    }

    /// Override the per-frame line budget
    pub fn with_max_lines_per_frame(mut self, lines: usize) -> Self {
        self.max_lines_per_frame = lines.max(1);
        self
    }

    /// Try each recognizer in priority order on the start of `span`
    fn tokenize(&self, span: &mut [Glyph], state: &mut LineState) -> Option<usize> {
        let blank = span
            .iter()
            .take_while(|glyph| matches!(glyph.ch, ' ' | '\t'))
            .count();
        if blank > 0 {
            paint(&mut span[..blank], ColorCategory::Default);
            return Some(blank);
        }

        if let Some(n) = verbatim_continuation(span, state) {
            return Some(n);
        }
        if let Some(n) = multi_line_comment(span, state) {
            return Some(n);
        }
        if let Some(n) = single_line_comment(span, state) {
            return Some(n);
        }
        if let Some(n) = preprocessor_directive(span) {
            return Some(n);
        }
        if let Some(n) = verbatim_string(span, state) {
            return Some(n);
        }
        if let Some(n) = interpolated_string(span) {
            return Some(n);
        }
        if let Some(n) = plain_string(span) {
            return Some(n);
        }
        if let Some(n) = char_literal(span) {
            return Some(n);
        }
        if let Some(n) = self.identifier(span) {
            return Some(n);
        }
        if let Some(n) = number(span) {
            return Some(n);
        }
        punctuation(span)
    }

    /// Identifier or keyword, with `@` allowed as an escape prefix (`@class`)
    fn identifier(&self, span: &mut [Glyph]) -> Option<usize> {
        let mut i = 0;
        if span[0].ch == '@' {
            i = 1;
        }
        if !char_at(span, i).is_some_and(is_identifier_start) {
            return None;
        }
        i += 1;
        while char_at(span, i).is_some_and(is_identifier_continue) {
            i += 1;
        }

        let color = self
            .identifiers
            .get_with(&span[..i], |glyph| glyph.ch)
            .map_or(ColorCategory::Identifier, |entry| entry.color);
        paint(&mut span[..i], color);
        Some(i)
    }
}

impl Default for CSharpHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter for CSharpHighlighter {
    fn auto_indentation(&self) -> bool {
        true
    }

    fn max_lines_per_frame(&self) -> usize {
        self.max_lines_per_frame
    }

    fn tooltip(&self, identifier: &str) -> Option<&str> {
        self.identifiers.get(identifier)?.declaration.as_deref()
    }

    fn colorize(&self, line: &mut [Glyph], mut state: LineState) -> LineState {
        let mut i = 0;
        while i < line.len() {
            let consumed = match self.tokenize(&mut line[i..], &mut state) {
                Some(n) => n,
                None => {
                    line[i].color = ColorCategory::Default;
                    1
                }
            };
            debug_assert!(consumed > 0, "recognizer matched nothing at column {i}");
            i += consumed.max(1);
        }
        state
    }
}

fn char_at(span: &[Glyph], index: usize) -> Option<char> {
    span.get(index).map(|glyph| glyph.ch)
}

fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

fn is_identifier_continue(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Scan a verbatim string body from `from`, returning its end and whether it closed
fn verbatim_body(span: &[Glyph], from: usize) -> (usize, bool) {
    let mut i = from;
    while i < span.len() {
        if span[i].ch == '"' {
            if char_at(span, i + 1) == Some('"') {
                i += 2;
                continue;
            }
            return (i + 1, true);
        }
        i += 1;
    }
    (span.len(), false)
}

/// Scan an escaped quoted body from `from`, returning the end past the closing quote
fn quoted_body(span: &[Glyph], from: usize) -> Option<usize> {
    let mut i = from;
    while i < span.len() {
        match span[i].ch {
            '"' => return Some(i + 1),
            '\\' => i += 2,
            _ => i += 1,
        }
    }
    None
}

fn verbatim_continuation(span: &mut [Glyph], state: &mut LineState) -> Option<usize> {
    if *state != LineState::VerbatimString {
        return None;
    }

    let (end, closed) = verbatim_body(span, 0);
    paint(&mut span[..end], ColorCategory::String);
    if closed {
        *state = LineState::Normal;
    }
    Some(end)
}

fn multi_line_comment(span: &mut [Glyph], state: &mut LineState) -> Option<usize> {
    let from = if *state == LineState::MultiLineComment {
        0
    } else if matches_at(span, 0, "/*") {
        2
    } else {
        return None;
    };

    let end = match find_marker(span, from, "*/") {
        Some(close) => {
            *state = LineState::Normal;
            close + 2
        }
        None => {
            *state = LineState::MultiLineComment;
            span.len()
        }
    };
    paint(&mut span[..end], ColorCategory::MultiLineComment);
    Some(end)
}

fn single_line_comment(span: &mut [Glyph], state: &mut LineState) -> Option<usize> {
    if !matches_at(span, 0, "//") {
        return None;
    }
    paint(span, ColorCategory::Comment);
    *state = LineState::Normal;
    Some(span.len())
}

fn preprocessor_directive(span: &mut [Glyph]) -> Option<usize> {
    if span[0].ch != '#' {
        return None;
    }
    paint(span, ColorCategory::Preprocessor);
    Some(span.len())
}

/// `@"`, `$@"` or `@$"`; may run past the end of the line
fn verbatim_string(span: &mut [Glyph], state: &mut LineState) -> Option<usize> {
    let prefix = if matches_at(span, 0, "@\"") {
        2
    } else if matches_at(span, 0, "$@\"") || matches_at(span, 0, "@$\"") {
        3
    } else {
        return None;
    };

    let (end, closed) = verbatim_body(span, prefix);
    paint(&mut span[..end], ColorCategory::String);
    *state = if closed {
        LineState::Normal
    } else {
        LineState::VerbatimString
    };
    Some(end)
}

fn interpolated_string(span: &mut [Glyph]) -> Option<usize> {
    if !matches_at(span, 0, "$\"") {
        return None;
    }
    let end = quoted_body(span, 2)?;
    paint(&mut span[..end], ColorCategory::String);
    Some(end)
}

fn plain_string(span: &mut [Glyph]) -> Option<usize> {
    if span[0].ch != '"' {
        return None;
    }
    let end = quoted_body(span, 1)?;
    paint(&mut span[..end], ColorCategory::String);
    Some(end)
}

fn char_literal(span: &mut [Glyph]) -> Option<usize> {
    if span[0].ch != '\'' {
        return None;
    }

    let mut i = 1;
    if char_at(span, i) == Some('\\') {
        i += 1;
    }
    i += 1;
    if char_at(span, i) != Some('\'') {
        return None;
    }

    paint(&mut span[..=i], ColorCategory::CharLiteral);
    Some(i + 1)
}

fn skip_integer_suffix(span: &[Glyph], mut i: usize) -> usize {
    while matches!(char_at(span, i), Some('u' | 'U' | 'l' | 'L')) {
        i += 1;
    }
    i
}

fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

fn is_binary_digit(ch: char) -> bool {
    matches!(ch, '0' | '1' | '_')
}

/// `0x` or `0b` literal with an optional integer suffix
fn radix_number(span: &mut [Glyph]) -> Option<usize> {
    let is_digit = match char_at(span, 1) {
        Some('x' | 'X') => is_hex_digit as fn(char) -> bool,
        Some('b' | 'B') => is_binary_digit,
        _ => return None,
    };

    let mut i = 2;
    while char_at(span, i).is_some_and(is_digit) {
        i += 1;
    }
    let end = skip_integer_suffix(span, i);
    paint(&mut span[..end], ColorCategory::Number);
    Some(end)
}

fn number(span: &mut [Glyph]) -> Option<usize> {
    let first = span[0].ch;
    if first != '+' && first != '-' && !first.is_ascii_digit() {
        return None;
    }

    if first == '0' {
        if let Some(end) = radix_number(span) {
            return Some(end);
        }
    }

    let mut i = 1;
    let mut has_digits = first.is_ascii_digit();
    while let Some(c) = char_at(span, i).filter(|c| c.is_ascii_digit() || *c == '_') {
        has_digits |= c.is_ascii_digit();
        i += 1;
    }
    if !has_digits {
        return None;
    }

    let mut is_float = false;
    if char_at(span, i) == Some('.') {
        is_float = true;
        i += 1;
        while char_at(span, i).is_some_and(|c| c.is_ascii_digit() || c == '_') {
            i += 1;
        }
    }

    if matches!(char_at(span, i), Some('e' | 'E')) {
        is_float = true;
        i += 1;
        if matches!(char_at(span, i), Some('+' | '-')) {
            i += 1;
        }
        let exponent_start = i;
        while char_at(span, i).is_some_and(|c| c.is_ascii_digit()) {
            i += 1;
        }
        if i == exponent_start {
            return None;
        }
    }

    // Float suffix, or an integer suffix run; never both
    if matches!(char_at(span, i), Some('f' | 'F' | 'd' | 'D' | 'm' | 'M')) {
        i += 1;
    } else if !is_float {
        i = skip_integer_suffix(span, i);
    }

    paint(&mut span[..i], ColorCategory::Number);
    Some(i)
}

fn punctuation(span: &mut [Glyph]) -> Option<usize> {
    match span[0].ch {
        '[' | ']' | '{' | '}' | '(' | ')' | '-' | '+' | '<' | '>' | '?' | ':' | ';' | '!' | '%'
        | '^' | '&' | '|' | '*' | '/' | '=' | '~' | ',' | '.' | '@' => {
            span[0].color = ColorCategory::Punctuation;
            Some(1)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColorCategory::*;

    fn highlight(text: &str, state: LineState) -> (Vec<Glyph>, LineState) {
        let highlighter = CSharpHighlighter::new();
        let mut line = Glyph::line_from_str(text);
        let next = highlighter.colorize(&mut line, state);
        (line, next)
    }

    fn colors(line: &[Glyph]) -> Vec<ColorCategory> {
        line.iter().map(|glyph| glyph.color).collect()
    }

    #[test]
    fn test_multi_line_comment_round_trip() {
        let (line, state) = highlight("/* abc", LineState::Normal);
        assert_eq!(state, LineState::MultiLineComment);
        assert!(line.iter().all(|g| g.color == MultiLineComment));

        let (line, state) = highlight("def */ x", state);
        assert_eq!(state, LineState::Normal);
        assert!(line[..6].iter().all(|g| g.color == MultiLineComment));
        assert_eq!(line[6].color, Default);
        assert_eq!(line[7].color, Identifier);
    }

    #[test]
    fn test_comment_opener_is_not_a_closer() {
        let (_, state) = highlight("/*/ still open", LineState::Normal);
        assert_eq!(state, LineState::MultiLineComment);
    }

    #[test]
    fn test_verbatim_string_continuation() {
        let (line, state) = highlight("@\"abc", LineState::Normal);
        assert_eq!(state, LineState::VerbatimString);
        assert!(line.iter().all(|g| g.color == String));

        let (line, state) = highlight("def\"\"ghi\"", state);
        assert_eq!(state, LineState::Normal);
        assert!(line.iter().all(|g| g.color == String));
    }

    #[test]
    fn test_verbatim_string_closes_mid_line() {
        let (line, state) = highlight("end\"; x", LineState::VerbatimString);
        assert_eq!(state, LineState::Normal);
        assert_eq!(&colors(&line)[..4], &[String; 4]);
        assert_eq!(line[4].color, Punctuation);
        assert_eq!(line[6].color, Identifier);
    }

    #[test]
    fn test_interpolated_verbatim_prefixes() {
        for text in ["$@\"a\"\"b", "@$\"a\"\"b"] {
            let (line, state) = highlight(text, LineState::Normal);
            assert_eq!(state, LineState::VerbatimString, "{text}");
            assert!(line.iter().all(|g| g.color == String));
        }
    }

    #[test]
    fn test_interpolated_string() {
        let (line, state) = highlight("$\"{x}\\\"\";", LineState::Normal);
        assert_eq!(state, LineState::Normal);
        assert_eq!(&colors(&line)[..8], &[String; 8]);
        assert_eq!(line[8].color, Punctuation);
    }

    #[test]
    fn test_unterminated_plain_string_falls_back() {
        let (line, state) = highlight("\"abc", LineState::Normal);
        assert_eq!(state, LineState::Normal);
        assert_eq!(line[0].color, Default);
        assert_eq!(line[1].color, Identifier);
    }

    #[test]
    fn test_plain_string_with_escape() {
        let (line, _) = highlight(r#""a\"b" x"#, LineState::Normal);
        assert_eq!(&colors(&line)[..6], &[String; 6]);
        assert_eq!(line[7].color, Identifier);
    }

    #[test]
    fn test_char_literals() {
        let (line, _) = highlight(r"'a' '\n' 'ab'", LineState::Normal);
        assert_eq!(&colors(&line)[..3], &[CharLiteral; 3]);
        assert_eq!(&colors(&line)[4..8], &[CharLiteral; 4]);
        assert_eq!(line[9].color, Default);
    }

    #[test]
    fn test_keyword_vs_near_miss() {
        let (line, _) = highlight("class classs", LineState::Normal);
        assert_eq!(&colors(&line)[..5], &[Keyword; 5]);
        assert_eq!(&colors(&line)[6..], &[Identifier; 6]);
    }

    #[test]
    fn test_known_identifier() {
        let (line, _) = highlight("Console", LineState::Normal);
        assert!(line.iter().all(|g| g.color == KnownIdentifier));
    }

    #[test]
    fn test_escaped_identifier() {
        let (line, _) = highlight("@class", LineState::Normal);
        assert!(line.iter().all(|g| g.color == Identifier));

        let (line, _) = highlight("@1", LineState::Normal);
        assert_eq!(line[0].color, Punctuation);
        assert_eq!(line[1].color, Number);
    }

    #[test]
    fn test_hex_number() {
        let (line, _) = highlight("0x1F", LineState::Normal);
        assert!(line.iter().all(|g| g.color == Number));

        let (line, _) = highlight("0xFFul", LineState::Normal);
        assert!(line.iter().all(|g| g.color == Number));

        let (line, _) = highlight("0b1010_1010", LineState::Normal);
        assert!(line.iter().all(|g| g.color == Number));
    }

    #[test]
    fn test_exponent_without_digits() {
        let (line, _) = highlight("1e", LineState::Normal);
        assert_eq!(colors(&line), vec![Default, Identifier]);

        let (line, _) = highlight("1.5e+10", LineState::Normal);
        assert!(line.iter().all(|g| g.color == Number));
    }

    #[test]
    fn test_number_suffixes() {
        for text in ["1.5f", "2d", "3m", "10ul", "1_000L", "-42", "3.14"] {
            let (line, _) = highlight(text, LineState::Normal);
            assert!(line.iter().all(|g| g.color == Number), "{text}");
        }
    }

    #[test]
    fn test_integer_then_float_suffix() {
        let (line, _) = highlight("1uf", LineState::Normal);
        assert_eq!(colors(&line), vec![Number, Number, Identifier]);

        let (line, _) = highlight("1.5ul", LineState::Normal);
        assert_eq!(&colors(&line)[..3], &[Number; 3]);
        assert_eq!(line[3].color, Identifier);
    }

    #[test]
    fn test_sign_alone_is_punctuation() {
        let (line, _) = highlight("- x", LineState::Normal);
        assert_eq!(line[0].color, Punctuation);
    }

    #[test]
    fn test_single_line_comment_dominance() {
        let (line, state) = highlight("x; // \"oops /* @\"", LineState::Normal);
        assert_eq!(state, LineState::Normal);
        assert!(line[3..].iter().all(|g| g.color == Comment));
    }

    #[test]
    fn test_preprocessor() {
        let (line, state) = highlight("#region Fields", LineState::Normal);
        assert_eq!(state, LineState::Normal);
        assert!(line.iter().all(|g| g.color == Preprocessor));
    }

    #[test]
    fn test_every_glyph_recolored() {
        let highlighter = CSharpHighlighter::new();
        let mut line = Glyph::line_from_str("  \u{00a7} x");
        for glyph in &mut line {
            glyph.color = Keyword;
        }
        highlighter.colorize(&mut line, LineState::Normal);
        assert_eq!(colors(&line), vec![Default, Default, Default, Default, Identifier]);
    }

    #[test]
    fn test_empty_line_keeps_carry() {
        let (_, state) = highlight("", LineState::VerbatimString);
        assert_eq!(state, LineState::VerbatimString);
        let (_, state) = highlight("", LineState::MultiLineComment);
        assert_eq!(state, LineState::MultiLineComment);
    }

    #[test]
    fn test_capabilities() {
        let highlighter = CSharpHighlighter::new().with_max_lines_per_frame(0);
        assert!(highlighter.auto_indentation());
        assert_eq!(highlighter.max_lines_per_frame(), 1);
        assert_eq!(highlighter.tooltip("Console"), Some(KNOWN_IDENTIFIER_DECLARATION));
        assert_eq!(highlighter.tooltip("class"), None);
        assert_eq!(highlighter.tooltip("nothing"), None);
    }
}
