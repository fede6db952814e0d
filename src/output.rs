//! Terminal output formatting for the colornodes CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs go to stderr;
//! stdout carries only results (hex strings, RGB triples, JSON).

use std::io::{self, IsTerminal, Write};

use crate::types::Colour;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "   Replacing photo.png"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Render `text` on a 24-bit background of `colour`, with a black or
    /// white foreground chosen for contrast.
    pub fn swatch(&self, colour: Colour, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let fg = colour.contrast_label();
        format!(
            "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m {text} {RESET}",
            colour.r, colour.g, colour.b, fg.r, fg.g, fg.b
        )
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "image", "images")` → "1 image".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "node", "nodes"), "1 node");
        assert_eq!(plural(0, "node", "nodes"), "0 nodes");
        assert_eq!(plural(5, "image", "images"), "5 images");
    }

    #[test]
    fn test_display_path_absolute() {
        use std::path::Path;
        let p = Path::new("/nonexistent/path/to/file.png");
        assert_eq!(display_path(p), "/nonexistent/path/to/file.png");
    }

    #[test]
    fn test_plain_swatch_has_no_escapes() {
        let printer = Printer::plain();
        assert_eq!(printer.swatch(Colour::RED, "#ff0000"), "#ff0000");
    }

    #[test]
    fn test_coloured_swatch_uses_contrast_label() {
        let printer = Printer { color: true };
        let out = printer.swatch(Colour::WHITE, "#ffffff");
        assert!(out.starts_with("\x1b[48;2;255;255;255m\x1b[38;2;0;0;0m"));
        assert!(out.ends_with(RESET));
    }
}
