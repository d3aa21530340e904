#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source, tagged with the source's label.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    /// Offsets past `u32::MAX` saturate rather than wrap.
    pub fn at(offset: usize, file: Rc<String>) -> Self {
        Position(u32::try_from(offset).unwrap_or(u32::MAX), file)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text and the column within it.
/// A position equal to the source length points just past the last character.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut last_start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last_start = start;
        start = end;
        line_number += 1;
    }

    if source.is_empty() || source.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        Some((
            line_number - 1,
            source[last_start..].to_string(),
            pos - last_start,
        ))
    }
}

/// Renders an error as a caret diagnostic against the source it came from.
pub fn display_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedToken (Unexpected token `=`, expected IDENTIFIER)
        -> shell
           |
        1 | let = 1337;
           | ----^
    */

    let position = error.get_position();
    let mut lines = vec![];

    if let ErrorTip::None = error.get_tip() {
        lines.push(format!("Error: {}", error.get_error_name()));
    } else {
        lines.push(format!(
            "Error: {} ({})",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    lines.push(format!("-> {}", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        lines.push(format!("   {}", error));
        return lines.join("\n");
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    lines.push(format!("{:>padding$}", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    lines.push(format!("{} | {}", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    lines.push(format!("{:>padding$} {:->arrows$}", "|", "^"));

    lines.join("\n")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}
