#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Byte offset into the lexed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Finds the line holding `position`, for diagnostics only.
///
/// Returns the 1-based line number, the line without its terminator and the
/// offset of `position` within that line. A position at the end of the
/// source maps to the end of the last line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, &str, usize) {
    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, "", 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();
        let text = line.trim_end_matches(['\n', '\r']);

        if (start..end).contains(&position) {
            return (line_number, text, position - start);
        }

        last = (line_number, text, position.saturating_sub(start));
        start = end;
        line_number += 1;
    }

    last
}


/// Renders a lexical error against its source as a multi-line diagnostic.
///
/// ```text
/// Error: UnexpectedCharacter
///   |
/// 1 | int x = @;
///   | --------^
/// ```
pub fn format_error(error: &Error, source: &str, name: Option<&str>) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    if let Some(name) = name {
        out.push_str(&format!("-> {}\n", name));
    }
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text));

    let arrows = line_text[..line_pos.min(line_text.len())].chars().count() + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}
