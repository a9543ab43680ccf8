use std::io::{self, IsTerminal, Write};

use nu_ansi_term::{Color, Style};

use crate::Error;

/// Bytes of context shown on each side of the offending position.
const WINDOW_BYTES: usize = 32;

/// Print `err` to stderr, prefixed with `program`, followed by a caret
/// context window into `code` when the error carries a position.
/// Colors are used only when stderr is a terminal.
pub fn print_error(program: &str, code: &[u8], err: &Error) {
    let color = io::stderr().is_terminal();
    let rendered = render_error(program, code, err, color);
    let mut stderr = io::stderr().lock();
    let _ = stderr.write_all(rendered.as_bytes());
    let _ = stderr.flush();
}

/// Build the text [`print_error`] writes.
pub fn render_error(program: &str, code: &[u8], err: &Error, color: bool) -> String {
    let (header, caret) = if color {
        (Style::new().bold().fg(Color::Red), Style::new().fg(Color::Red))
    } else {
        (Style::new(), Style::new())
    };

    let mut out = format!("{}\n", header.paint(format!("{program}: {err}")));

    if let Some(pos) = err.position() {
        if pos < code.len() {
            let start = pos.saturating_sub(WINDOW_BYTES);
            let end = (pos + WINDOW_BYTES + 1).min(code.len());
            let window: String = code[start..end].iter().map(|&b| printable(b)).collect();
            out.push_str(&format!("  {window}\n"));
            out.push_str(&format!("  {}{}\n", " ".repeat(pos - start), caret.paint("^")));
        }
    }

    out
}

/// One column per byte keeps the caret aligned.
fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else if byte.is_ascii() {
        ' '
    } else {
        '?'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BracketError, LoadError, RuntimeError, UnmatchedBracketKind};

    #[test]
    fn caret_points_at_the_offending_byte() {
        let err = Error::from(RuntimeError::CursorUnderflow { position: 3 });
        let text = render_error("bf", b"+\n+<+", &err, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "bf: Error at ch:3: Passed minimum cell position.");
        assert_eq!(lines[1], "  + +<+");
        assert_eq!(lines[2], "     ^");
    }

    #[test]
    fn long_programs_are_windowed() {
        let code = format!("{}]{}", "+".repeat(100), "-".repeat(100));
        let err = Error::from(BracketError { position: 100, kind: UnmatchedBracketKind::Close });
        let text = render_error("bf", code.as_bytes(), &err, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1].len(), 2 + WINDOW_BYTES * 2 + 1);
        assert_eq!(lines[2], format!("  {}^", " ".repeat(WINDOW_BYTES)));
    }

    #[test]
    fn load_errors_have_no_context_window() {
        let err = Error::from(LoadError::EmptyProgram { path: "empty.bf".into() });
        let text = render_error("bf", b"", &err, false);
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("empty source file"));
    }

    #[test]
    fn color_wraps_header_in_escape_codes() {
        let err = Error::from(RuntimeError::CursorOverflow { position: 0 });
        let text = render_error("bf", b">", &err, true);
        assert!(text.starts_with("\u{1b}["));
    }
}
