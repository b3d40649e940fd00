//! Settings file
//!
//! Read from `$GLYPHLIGHT_CONFIG` if set, else `~/.glyphlight.conf`
//! (`%USERPROFILE%\.glyphlight.conf` on Windows). One `key = value` per
//! line; `#` starts a comment line. Unknown keys are logged and ignored.
//!
//! ```text
//! # glyphlight
//! max-lines-per-frame = 500
//! language-dir = /home/me/.config/glyphlight/languages
//! color = true
//! tab-width = 4
//! ```

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::syntax::DEFAULT_MAX_LINES_PER_FRAME;

const FILE_NAME: &str = ".glyphlight.conf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Line budget per rendering pass handed to every highlighter
    pub max_lines_per_frame: usize,
    /// Directory of extra TOML language tables
    pub language_dir: Option<PathBuf>,
    /// Emit terminal colors
    pub color: bool,
    pub tab_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_lines_per_frame: DEFAULT_MAX_LINES_PER_FRAME,
            language_dir: None,
            color: true,
            tab_width: 4,
        }
    }
}

impl Config {
    /// Where the settings file is looked for
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = env::var_os("GLYPHLIGHT_CONFIG") {
            return Some(PathBuf::from(path));
        }
        let home = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
        env::var_os(home).map(|dir| PathBuf::from(dir).join(FILE_NAME))
    }

    /// Defaults overlaid with whatever the settings file provides
    pub fn load() -> Self {
        let mut config = Config::default();
        let Some(path) = Self::config_path() else {
            return config;
        };
        if let Ok(contents) = fs::read_to_string(&path) {
            tracing::debug!(path = %path.display(), "loading config");
            config.apply(&Self::parse(&contents));
        }
        config
    }

    fn parse(contents: &str) -> HashMap<String, String> {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_lowercase(), value.trim().to_string()))
            .collect()
    }

    fn apply(&mut self, settings: &HashMap<String, String>) {
        for (key, value) in settings {
            match key.as_str() {
                "max-lines-per-frame" => match value.parse::<usize>() {
                    Ok(n) => self.max_lines_per_frame = n.clamp(1, 100_000),
                    Err(_) => tracing::warn!(value = %value, "ignoring invalid max-lines-per-frame"),
                },
                "language-dir" if !value.is_empty() => {
                    self.language_dir = Some(PathBuf::from(value));
                }
                "language-dir" => {}
                "color" => self.color = parse_bool(value),
                "tab-width" => match value.parse::<usize>() {
                    Ok(n) => self.tab_width = n.clamp(1, 16),
                    Err(_) => tracing::warn!(value = %value, "ignoring invalid tab-width"),
                },
                other => tracing::warn!(key = other, "unknown config key"),
            }
        }
    }
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "on" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let settings = Config::parse(
            "\n# max-lines-per-frame = 9\n  Max-Lines-Per-Frame = 250  \nlanguage-dir = /tmp/langs\nno equals sign\n",
        );
        assert_eq!(settings.len(), 2);
        assert_eq!(settings["max-lines-per-frame"], "250");
        assert_eq!(settings["language-dir"], "/tmp/langs");
    }

    #[test]
    fn test_apply_clamps() {
        let mut config = Config::default();
        config.apply(&Config::parse(
            "max-lines-per-frame = 250\nlanguage-dir = langs\ncolor = no\ntab-width = 99\n",
        ));

        assert_eq!(config.max_lines_per_frame, 250);
        assert_eq!(config.language_dir, Some(PathBuf::from("langs")));
        assert!(!config.color);
        assert_eq!(config.tab_width, 16);

        config.apply(&Config::parse("max-lines-per-frame = 0"));
        assert_eq!(config.max_lines_per_frame, 1);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let mut config = Config::default();
        config.apply(&Config::parse(
            "max-lines-per-frame = lots\ntab-width = wide\nlanguage-dir =\nfrobnicate = 1\n",
        ));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bool_spellings() {
        for yes in ["true", "YES", "on", "1"] {
            assert!(parse_bool(yes), "{yes}");
        }
        for no in ["false", "off", "0", "maybe"] {
            assert!(!parse_bool(no), "{no}");
        }
    }
}
