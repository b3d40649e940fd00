//! Styled line output using crossterm

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{self, Attribute, Print, SetAttribute, SetForegroundColor},
};

use glyphlight::syntax::{runs, Color, Glyph, Style};
use glyphlight::Result;

/// Writes colored lines to a terminal (or any writer)
pub struct Terminal<W: Write> {
    out: W,
    /// Emit escape sequences; plain text when false
    color: bool,
    /// Tab width for display
    tab_width: usize,
}

impl Terminal<io::Stdout> {
    /// Terminal writing to stdout
    pub fn stdout(color: bool, tab_width: usize) -> Self {
        Self::new(io::stdout(), color, tab_width)
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, color: bool, tab_width: usize) -> Self {
        Self {
            out,
            color,
            tab_width: tab_width.max(1),
        }
    }

    /// Write one colored line followed by a newline
    pub fn write_line(&mut self, line: &[Glyph]) -> Result<()> {
        let mut column = 0;
        let mut text = String::new();
        for span in runs(line) {
            text.clear();
            for glyph in &line[span.start..span.end] {
                if glyph.ch == '\t' {
                    let pad = self.tab_width - column % self.tab_width;
                    text.extend(std::iter::repeat(' ').take(pad));
                    column += pad;
                } else {
                    text.push(glyph.ch);
                    column += 1;
                }
            }

            if self.color {
                self.set_style(span.color.default_style())?;
            }
            queue!(self.out, Print(&text))?;
            if self.color {
                self.reset_attributes()?;
            }
        }
        queue!(self.out, Print('\n'))?;
        Ok(())
    }

    /// Set foreground color and attributes
    fn set_style(&mut self, style: Style) -> Result<()> {
        if style.is_default() {
            return Ok(());
        }
        queue!(self.out, SetForegroundColor(to_crossterm(style.fg)))?;
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        Ok(())
    }

    /// Reset all attributes
    pub fn reset_attributes(&mut self) -> Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    /// Flush output buffer
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphlight::{CSharpHighlighter, LineState, SyntaxHighlighter};

    fn render(text: &str, color: bool) -> String {
        let highlighter = CSharpHighlighter::new();
        let mut line = Glyph::line_from_str(text);
        highlighter.colorize(&mut line, LineState::Normal);

        let mut terminal = Terminal::new(Vec::new(), color, 4);
        terminal.write_line(&line).unwrap();
        String::from_utf8(terminal.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_output() {
        assert_eq!(render("int x = 1;", false), "int x = 1;\n");
    }

    #[test]
    fn test_tab_expansion() {
        assert_eq!(render("\tx\ty", false), "    x   y\n");
    }

    #[test]
    fn test_colored_output() {
        let out = render("int x;", true);
        assert!(out.contains('\x1b'));
        assert!(out.contains("int"));
        assert!(out.ends_with('\n'));
    }
}
