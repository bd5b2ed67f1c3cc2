#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset within that
/// line. Offsets past the end of the source point just after the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = String::new();

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        last_line = line.to_string();
        start = end;
        line_number += 1;
    }

    if last_line.is_empty() || last_line.ends_with('\n') {
        return (line_number, String::new(), 0);
    }

    // EOF on the last, unterminated line
    let line_pos = last_line.len();
    (line_number - 1, last_line, line_pos)
}


/// Prints an error with the offending source line to stderr.
pub fn display_error(error: &Error, source: &str) {
    /*
        error: message
        -> input.kal
           |
        20 | def f(x y) x + y
           | ---------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", position.1);
    eprintln!("{:>padding$}", "|");

    eprintln!("{} | {}", line_string, line_text.trim_start_matches(INDENT).trim_end());

    let arrows = caret_column(&line_text, line_pos) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

const INDENT: &[char] = &[' ', '\t'];

/// Characters between the end of the line's indentation and the byte offset
/// `line_pos`.
fn caret_column(line: &str, line_pos: usize) -> usize {
    let indent = line.len() - line.trim_start_matches(INDENT).len();
    line.get(indent.min(line_pos)..line_pos)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(0)
}
