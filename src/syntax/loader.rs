//! Language tables from TOML files
//!
//! Lets users add languages without new code. A file looks like:
//!
//! ```toml
//! name = "Go"
//! extensions = ["go"]
//! keywords = ["func", "package", "return"]
//! identifiers = ["fmt", "len"]
//! single_line_comment = "//"
//! comment_start = "/*"
//! comment_end = "*/"
//!
//! [[rules]]
//! pattern = '"(?:[^"\\]|\\.)*"'
//! color = "String"
//!
//! [[rules]]
//! pattern = '[a-zA-Z_][a-zA-Z0-9_]*'
//! color = "Identifier"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::language::LanguageDefinition;
use super::tokens::ColorCategory;
use crate::error::{Result, SyntaxError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageFile {
    pub name: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub identifiers: Vec<String>,
    #[serde(default)]
    pub rules: Vec<RuleFile>,
    #[serde(default)]
    pub single_line_comment: String,
    #[serde(default)]
    pub comment_start: String,
    #[serde(default)]
    pub comment_end: String,
    pub preproc_char: Option<char>,
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
    #[serde(default = "default_true")]
    pub auto_indentation: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    pub pattern: String,
    pub color: String,
}

fn default_true() -> bool {
    true
}

impl LanguageFile {
    /// Convert into a definition, resolving color names
    pub fn into_definition(self) -> Result<LanguageDefinition> {
        let mut lang = LanguageDefinition::new(&self.name);
        lang.extensions = self.extensions;
        lang.keywords = self.keywords;
        lang.identifiers = self.identifiers;
        lang.single_line_comment = self.single_line_comment;
        lang.comment_start = self.comment_start;
        lang.comment_end = self.comment_end;
        lang.preproc_char = self.preproc_char;
        lang.case_sensitive = self.case_sensitive;
        lang.auto_indentation = self.auto_indentation;

        for rule in self.rules {
            let color = ColorCategory::from_name(&rule.color)
                .ok_or(SyntaxError::UnknownColor(rule.color))?;
            lang.add_rule(&rule.pattern, color);
        }

        lang.validate()?;
        Ok(lang)
    }
}

/// Parse a language table; `origin` names the source in errors
pub fn parse_language(contents: &str, origin: &str) -> Result<LanguageDefinition> {
    let file: LanguageFile =
        toml::from_str(contents).map_err(|source| SyntaxError::InvalidLanguageFile {
            path: origin.to_string(),
            source,
        })?;
    file.into_definition()
}

/// Load one language table from disk
pub fn load_language_file(path: &Path) -> Result<LanguageDefinition> {
    let contents = fs::read_to_string(path)?;
    parse_language(&contents, &path.display().to_string())
}

/// Load every `*.toml` table in `dir`, skipping files that fail to load
pub fn load_language_dir(dir: &Path) -> Result<Vec<LanguageDefinition>> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();

    let mut languages = Vec::new();
    for path in paths {
        match load_language_file(&path) {
            Ok(lang) => {
                tracing::debug!(language = %lang.name, path = %path.display(), "loaded language file");
                languages.push(lang);
            }
            Err(err) => tracing::warn!(path = %path.display(), "skipping language file: {err}"),
        }
    }
    Ok(languages)
}
