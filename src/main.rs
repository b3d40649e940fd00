//! glyphlight - print a source file with per-line syntax highlighting
//!
//! Exercises the engine the way an editor would: lines are colored
//! through a `HighlightCache`, one frame's budget at a time.

mod terminal;

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use glyphlight::config::Config;
use glyphlight::syntax::{load_language_dir, load_language_file, Glyph, HighlightCache, SyntaxManager};
use glyphlight::{Result, SyntaxError};
use terminal::Terminal;

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Highlight(Options),
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    file: Option<PathBuf>,
    lang: Option<String>,
    language_files: Vec<PathBuf>,
    tooltips: Vec<String>,
    verbose: u8,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args)? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            print_version();
            return Ok(());
        }
        Command::Highlight(options) => options,
    };

    init_logging(options.verbose);
    let config = Config::load();

    let mut manager = SyntaxManager::with_max_lines_per_frame(config.max_lines_per_frame)?;
    if let Some(dir) = &config.language_dir {
        match load_language_dir(dir) {
            Ok(languages) => {
                for lang in languages {
                    manager.add_language(lang)?;
                }
            }
            Err(err) => tracing::warn!(dir = %dir.display(), "cannot read language dir: {err}"),
        }
    }
    for path in &options.language_files {
        manager.add_language(load_language_file(path)?)?;
    }

    let lang_name = match (&options.lang, &options.file) {
        (Some(name), _) => name.clone(),
        (None, Some(file)) => manager
            .detect_language(file)
            .map(str::to_string)
            .ok_or_else(|| SyntaxError::UnknownLanguage(file.display().to_string()))?,
        (None, None) => return Err(SyntaxError::Message("no input file".to_string())),
    };
    let highlighter = manager.require(&lang_name)?;

    for word in &options.tooltips {
        println!("{}: {}", word, highlighter.tooltip(word).unwrap_or("(no tooltip)"));
    }

    let Some(file) = &options.file else {
        return Ok(());
    };

    let contents = fs::read_to_string(file)?;
    let mut lines: Vec<Vec<Glyph>> = contents.lines().map(Glyph::line_from_str).collect();

    let mut cache = HighlightCache::new();
    let mut frames = 0;
    while !cache.is_up_to_date(lines.len()) {
        cache.refresh(highlighter.as_ref(), &mut lines);
        frames += 1;
    }
    tracing::info!(language = %lang_name, lines = lines.len(), frames, "highlighted {}", file.display());

    let mut terminal = Terminal::stdout(config.color, config.tab_width);
    for line in &lines {
        terminal.write_line(line)?;
    }
    terminal.flush()
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--lang" | "-l" => options.lang = Some(expect_value(&mut iter, arg)?),
            "--language-file" => options.language_files.push(expect_value(&mut iter, arg)?.into()),
            "--tooltip" | "-t" => options.tooltips.push(expect_value(&mut iter, arg)?),
            "-v" | "--verbose" => options.verbose = options.verbose.saturating_add(1),
            "-vv" => options.verbose = options.verbose.saturating_add(2),
            flag if flag.starts_with('-') => {
                return Err(SyntaxError::Message(format!("unknown option: {flag}")));
            }
            path => {
                if options.file.is_some() {
                    return Err(SyntaxError::Message(format!("unexpected argument: {path}")));
                }
                options.file = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Command::Highlight(options))
}

fn expect_value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| SyntaxError::Message(format!("{flag} needs a value")))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("glyphlight {} - per-line syntax highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: glyphlight [OPTIONS] [FILE]");
    println!();
    println!("Options:");
    println!("  -l, --lang NAME          Use language NAME instead of detecting it");
    println!("      --language-file PATH Load an extra TOML language table");
    println!("  -t, --tooltip WORD       Print the tooltip for WORD");
    println!("  -v, --verbose            More logging (repeat for more)");
    println!("  -h, --help               Show this help message");
    println!("  -V, --version            Show version information");
    println!();
    println!("Built-in languages: C, C#, Lua, Python, SQL");
    println!("Settings are read from ~/.glyphlight.conf");
}

fn print_version() {
    println!("glyphlight {}", env!("CARGO_PKG_VERSION"));
}
