//! Glyphs, styles and rendered spans
//!
//! A line handed to a highlighter is a slice of [`Glyph`]s. The highlighter
//! rewrites each glyph's color in place; the host later groups the result
//! into [`Span`]s and maps categories to a [`Style`].

use super::tokens::ColorCategory;

/// A character together with its assigned color category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph {
    pub ch: char,
    pub color: ColorCategory,
}

impl Glyph {
    /// Create a glyph
    pub fn new(ch: char, color: ColorCategory) -> Self {
        Self { ch, color }
    }

    /// Build an uncolored line of glyphs from text (without terminator)
    pub fn line_from_str(text: &str) -> Vec<Glyph> {
        text.chars().map(|ch| Glyph::new(ch, ColorCategory::Default)).collect()
    }
}

/// Paint `color` over every glyph in `glyphs`
pub(crate) fn paint(glyphs: &mut [Glyph], color: ColorCategory) {
    for glyph in glyphs {
        glyph.color = color;
    }
}

/// Check whether `marker` occurs in `line` starting at glyph `index`
///
/// An empty marker never matches.
pub(crate) fn matches_at(line: &[Glyph], index: usize, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    let mut glyphs = line.get(index..).unwrap_or_default().iter();
    marker
        .chars()
        .all(|ch| glyphs.next().is_some_and(|glyph| glyph.ch == ch))
}

/// Glyph index of the first occurrence of `marker` at or after `from`
pub(crate) fn find_marker(line: &[Glyph], from: usize, marker: &str) -> Option<usize> {
    (from..line.len()).find(|&index| matches_at(line, index, marker))
}

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A run of same-colored glyphs within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Glyph index where this span starts (inclusive)
    pub start: usize,
    /// Glyph index where this span ends (exclusive)
    pub end: usize,
    /// Category shared by every glyph in the span
    pub color: ColorCategory,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, color: ColorCategory) -> Self {
        Self { start, end, color }
    }

    /// Check if this span contains a glyph index
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Number of glyphs covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Group a colored line into maximal runs of equal color
pub fn runs(line: &[Glyph]) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for (i, glyph) in line.iter().enumerate() {
        match spans.last_mut() {
            Some(span) if span.color == glyph.color => span.end = i + 1,
            _ => spans.push(Span::new(i, i + 1, glyph.color)),
        }
    }
    spans
}
