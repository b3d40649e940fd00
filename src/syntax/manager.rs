//! Syntax highlighting manager
//!
//! This module provides the host side of the engine: a per-buffer
//! `HighlightCache` holding each line's carry state and spreading
//! recoloring across frames, and a `SyntaxManager` that maps languages
//! and file extensions to highlighters.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::builtin;
use super::csharp::CSharpHighlighter;
use super::highlighter::{SyntaxHighlighter, DEFAULT_MAX_LINES_PER_FRAME};
use super::language::LanguageDefinition;
use super::pattern::PatternHighlighter;
use super::rules::LineState;
use super::style::Glyph;
use crate::error::{Result, SyntaxError};

/// Per-buffer highlighting cache
#[derive(Debug, Default)]
pub struct HighlightCache {
    /// Carry state at the end of each line
    line_states: Vec<LineState>,
    /// First line whose colors are out of date
    invalid_from: usize,
    /// Lines before this one must be recolored even if their carry-in is unchanged
    stale_until: usize,
}

impl HighlightCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `line` as edited; it and possibly later lines get recolored
    pub fn invalidate_from(&mut self, line: usize) {
        self.invalid_from = self.invalid_from.min(line);
        self.stale_until = self.stale_until.max(line + 1);
    }

    /// Invalidate entire cache
    pub fn invalidate_all(&mut self) {
        self.invalid_from = 0;
        self.stale_until = 0;
        self.line_states.clear();
    }

    /// Carry state to pass when coloring `line`
    pub fn state_before(&self, line: usize) -> LineState {
        match line.checked_sub(1) {
            Some(prev) => self.line_states.get(prev).copied().unwrap_or_default(),
            None => LineState::Normal,
        }
    }

    /// Whether every line of a `line_count`-line buffer is up to date
    pub fn is_up_to_date(&self, line_count: usize) -> bool {
        self.line_states.len() == line_count && self.invalid_from >= line_count
    }

    /// Recolor out-of-date lines, at most `max_lines_per_frame` of them
    ///
    /// Stops early once a line past the edited region produces the same
    /// carry state it did last time, since nothing after it can change.
    /// Returns the number of lines colored.
    pub fn refresh(&mut self, highlighter: &dyn SyntaxHighlighter, lines: &mut [Vec<Glyph>]) -> usize {
        if self.line_states.len() != lines.len() {
            self.line_states.resize(lines.len(), LineState::Normal);
            self.stale_until = lines.len();
        }

        let budget = highlighter.max_lines_per_frame();
        let start = self.invalid_from;
        let mut line = start;
        let mut colored = 0;
        while line < lines.len() && colored < budget {
            let carry_in = self.state_before(line);
            let carry_out = highlighter.colorize(&mut lines[line], carry_in);
            let previous = std::mem::replace(&mut self.line_states[line], carry_out);
            colored += 1;
            line += 1;

            if line >= self.stale_until && previous == carry_out {
                line = lines.len();
            }
        }

        self.invalid_from = line;
        if line >= lines.len() {
            self.stale_until = 0;
        } else {
            // out of budget: `line` has not seen its new carry-in yet
            self.stale_until = self.stale_until.max(line + 1);
        }
        tracing::trace!(start, colored, pending = lines.len().saturating_sub(line), "refreshed highlight cache");
        colored
    }
}

/// Registry of highlighters by language name and file extension
pub struct SyntaxManager {
    /// Highlighters by language name
    highlighters: HashMap<String, Arc<dyn SyntaxHighlighter>>,
    /// Extension to language name mapping
    extension_map: HashMap<String, String>,
    /// Line budget handed to highlighters built by this manager
    max_lines_per_frame: usize,
}

impl SyntaxManager {
    /// Create a manager with the built-in languages
    pub fn new() -> Result<Self> {
        Self::with_max_lines_per_frame(DEFAULT_MAX_LINES_PER_FRAME)
    }

    /// Create a manager whose highlighters use a custom per-frame budget
    pub fn with_max_lines_per_frame(max_lines_per_frame: usize) -> Result<Self> {
        let mut manager = Self {
            highlighters: HashMap::new(),
            extension_map: HashMap::new(),
            max_lines_per_frame,
        };

        for lang in builtin::all_languages() {
            if lang.name == builtin::csharp::NAME {
                let highlighter =
                    CSharpHighlighter::with_language(&lang).with_max_lines_per_frame(max_lines_per_frame);
                manager.add_highlighter(&lang.name, &lang.extensions, Arc::new(highlighter));
            } else {
                manager.add_language(lang)?;
            }
        }

        Ok(manager)
    }

    /// Add a language driven by the generic pattern highlighter
    ///
    /// Replaces any language with the same name.
    pub fn add_language(&mut self, lang: LanguageDefinition) -> Result<()> {
        let name = lang.name.clone();
        let extensions = lang.extensions.clone();
        let highlighter =
            PatternHighlighter::new(lang)?.with_max_lines_per_frame(self.max_lines_per_frame);
        self.add_highlighter(&name, &extensions, Arc::new(highlighter));
        Ok(())
    }

    /// Register any highlighter under a name and file extensions
    pub fn add_highlighter(
        &mut self,
        name: &str,
        extensions: &[String],
        highlighter: Arc<dyn SyntaxHighlighter>,
    ) {
        for ext in extensions {
            self.extension_map.insert(ext.to_lowercase(), name.to_string());
        }
        self.highlighters.insert(name.to_string(), highlighter);
        tracing::debug!(language = name, extensions = ?extensions, "registered highlighter");
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// Get a highlighter by language name
    pub fn get(&self, name: &str) -> Option<Arc<dyn SyntaxHighlighter>> {
        self.highlighters.get(name).cloned()
    }

    /// Get a highlighter by language name, or fail
    pub fn require(&self, name: &str) -> Result<Arc<dyn SyntaxHighlighter>> {
        self.get(name)
            .ok_or_else(|| SyntaxError::UnknownLanguage(name.to_string()))
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.highlighters.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::ColorCategory;

    fn buffer(text: &[&str]) -> Vec<Vec<Glyph>> {
        text.iter().map(|line| Glyph::line_from_str(line)).collect()
    }

    fn refresh_all(cache: &mut HighlightCache, highlighter: &dyn SyntaxHighlighter, lines: &mut [Vec<Glyph>]) {
        while !cache.is_up_to_date(lines.len()) {
            cache.refresh(highlighter, lines);
        }
    }

    #[test]
    fn test_detect_language() {
        let manager = SyntaxManager::new().unwrap();

        assert_eq!(manager.detect_language(Path::new("Program.cs")), Some("C#"));
        assert_eq!(manager.detect_language(Path::new("main.C")), Some("C"));
        assert_eq!(manager.detect_language(Path::new("init.lua")), Some("Lua"));
        assert_eq!(manager.detect_language(Path::new("test.py")), Some("Python"));
        assert_eq!(manager.detect_language(Path::new("schema.sql")), Some("SQL"));
        assert_eq!(manager.detect_language(Path::new("notes.txt")), None);
        assert_eq!(manager.detect_language(Path::new("no_extension")), None);
    }

    #[test]
    fn test_list_and_require() {
        let manager = SyntaxManager::new().unwrap();
        assert_eq!(manager.list_languages(), vec!["C", "C#", "Lua", "Python", "SQL"]);
        assert!(manager.require("C#").is_ok());
        assert!(matches!(
            manager.require("Cobol"),
            Err(SyntaxError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_refresh_threads_carry_state() {
        let manager = SyntaxManager::new().unwrap();
        let name = manager.detect_language(Path::new("a.cs")).unwrap();
        let highlighter = manager.require(name).unwrap();
        let mut cache = HighlightCache::new();

        let mut lines = buffer(&["var s = @\"one", "two", "three\";", "int x;"]);
        assert_eq!(cache.refresh(highlighter.as_ref(), &mut lines), 4);

        assert!(lines[1].iter().all(|g| g.color == ColorCategory::String));
        assert_eq!(lines[2][6].color, ColorCategory::Punctuation);
        assert_eq!(lines[3][0].color, ColorCategory::Keyword);
        assert_eq!(cache.state_before(2), LineState::VerbatimString);
        assert!(cache.is_up_to_date(4));
    }

    #[test]
    fn test_refresh_respects_budget() {
        let highlighter = CSharpHighlighter::new().with_max_lines_per_frame(2);
        let mut cache = HighlightCache::new();
        let mut lines = buffer(&["a", "b", "c", "d", "e"]);

        assert_eq!(cache.refresh(&highlighter, &mut lines), 2);
        assert!(!cache.is_up_to_date(5));
        assert_eq!(cache.refresh(&highlighter, &mut lines), 2);
        assert_eq!(cache.refresh(&highlighter, &mut lines), 1);
        assert!(cache.is_up_to_date(5));
        assert_eq!(cache.refresh(&highlighter, &mut lines), 0);
    }

    #[test]
    fn test_edit_stops_when_state_settles() {
        let highlighter = CSharpHighlighter::new();
        let mut cache = HighlightCache::new();
        let mut lines = buffer(&["int a;", "int b;", "int c;", "int d;"]);
        assert_eq!(cache.refresh(&highlighter, &mut lines), 4);

        lines[1] = Glyph::line_from_str("int bb;");
        cache.invalidate_from(1);
        assert_eq!(cache.refresh(&highlighter, &mut lines), 1);
        assert!(cache.is_up_to_date(4));
    }

    #[test]
    fn test_edit_propagates_changed_state() {
        let highlighter = CSharpHighlighter::new();
        let mut cache = HighlightCache::new();
        let mut lines = buffer(&["int a;", "int b;", "int c;", "int d;"]);
        cache.refresh(&highlighter, &mut lines);

        lines[1] = Glyph::line_from_str("/* open");
        cache.invalidate_from(1);
        assert_eq!(cache.refresh(&highlighter, &mut lines), 3);
        assert!(lines[3].iter().all(|g| g.color == ColorCategory::MultiLineComment));
        assert_eq!(cache.state_before(3), LineState::MultiLineComment);
    }

    #[test]
    fn test_earlier_edit_after_partial_refresh() {
        let highlighter = CSharpHighlighter::new().with_max_lines_per_frame(1);
        let mut cache = HighlightCache::new();
        let mut lines = buffer(&["int a;", "int b;", "int c;", "/* x */", "int e;"]);
        refresh_all(&mut cache, &highlighter, &mut lines);

        // open a comment, but run out of budget before the next line
        lines[3] = Glyph::line_from_str("/* open");
        cache.invalidate_from(3);
        assert_eq!(cache.refresh(&highlighter, &mut lines), 1);

        lines[1] = Glyph::line_from_str("int bb;");
        cache.invalidate_from(1);
        refresh_all(&mut cache, &highlighter, &mut lines);

        assert_eq!(cache.state_before(4), LineState::MultiLineComment);
        assert!(lines[4].iter().all(|g| g.color == ColorCategory::MultiLineComment));
    }

    #[test]
    fn test_line_count_change_recolors_rest() {
        let highlighter = CSharpHighlighter::new();
        let mut cache = HighlightCache::new();
        let mut lines = buffer(&["int a;", "int b;"]);
        cache.refresh(&highlighter, &mut lines);

        lines.insert(1, Glyph::line_from_str("// new"));
        cache.invalidate_from(1);
        assert_eq!(cache.refresh(&highlighter, &mut lines), 2);
        assert_eq!(lines[2][0].color, ColorCategory::Keyword);
    }

    #[test]
    fn test_buffer_shrinks() {
        let highlighter = CSharpHighlighter::new();
        let mut cache = HighlightCache::new();
        let mut lines = buffer(&["int a;", "int b;", "int c;"]);
        cache.refresh(&highlighter, &mut lines);

        lines.truncate(1);
        assert_eq!(cache.refresh(&highlighter, &mut lines), 0);
        assert!(cache.is_up_to_date(1));
    }

    #[test]
    fn test_invalidate_all() {
        let highlighter = CSharpHighlighter::new();
        let mut cache = HighlightCache::new();
        let mut lines = buffer(&["int a;", "int b;"]);
        cache.refresh(&highlighter, &mut lines);

        cache.invalidate_all();
        assert!(!cache.is_up_to_date(2));
        assert_eq!(cache.refresh(&highlighter, &mut lines), 2);
    }

    #[test]
    fn test_add_language_replaces() {
        let mut manager = SyntaxManager::with_max_lines_per_frame(7).unwrap();
        let mut lang = LanguageDefinition::new("C");
        lang.add_extension("c");
        manager.add_language(lang).unwrap();

        let highlighter = manager.require("C").unwrap();
        assert_eq!(highlighter.max_lines_per_frame(), 7);
        assert_eq!(highlighter.tooltip("printf"), None);
    }
}
