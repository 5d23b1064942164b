//! Formatting of one-line status messages.
//!
//! Colors are only emitted when `use_color` is set, which callers derive from
//! whether the target stream is a terminal.

use std::io::{self, Write};

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    use_color: bool,
    paint: fn(&str) -> String,
) -> io::Result<()> {
    if use_color {
        writeln!(writer, "{}", paint(&format!("{}{}", prefix, msg)))
    } else {
        writeln!(writer, "{}{}", prefix, msg)
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, use_color: bool) -> io::Result<()> {
    print_prefixed(writer, "", msg, use_color, |s| s.cyan().to_string())
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, use_color: bool) -> io::Result<()> {
    print_prefixed(writer, "", msg, use_color, |s| s.green().to_string())
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, use_color: bool) -> io::Result<()> {
    print_prefixed(writer, "Warning: ", msg, use_color, |s| s.yellow().to_string())
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, use_color: bool) -> io::Result<()> {
    print_prefixed(writer, "Error: ", msg, use_color, |s| s.red().bold().to_string())
}

/// Prints an info line to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let use_color = io::stderr().is_terminal();
    let _ = print_info_message(&mut io::stderr(), msg.as_ref(), use_color);
}

/// Prints a success line to stderr.
pub fn success_msg(msg: impl AsRef<str>) {
    let use_color = io::stderr().is_terminal();
    let _ = print_success_message(&mut io::stderr(), msg.as_ref(), use_color);
}

/// Prints a warning line to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let use_color = io::stderr().is_terminal();
    let _ = print_warn_message(&mut io::stderr(), msg.as_ref(), use_color);
}

/// Prints an error line to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let use_color = io::stderr().is_terminal();
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), use_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_messages_have_no_escapes() {
        let mut out = Vec::new();
        print_warn_message(&mut out, "element 4 is locked", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Warning: element 4 is locked\n");
    }

    #[test]
    fn test_colored_messages_are_wrapped() {
        let mut out = Vec::new();
        print_error_message(&mut out, "boom", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Error: boom"));
        assert!(text.starts_with('\u{1b}'));
    }
}
