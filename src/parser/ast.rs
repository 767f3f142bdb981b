//! Abstract Syntax Tree for GCode
//!
//! Minimal types representing one parsed line. Values stay as borrowed text
//! until a caller asks for a number.

use crate::parser::lexer::{Token, TokenKind};

/// A parsed line of GCode
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine<'a> {
    /// A GCode command with parameters and optional comment
    Command(Command<'a>),
    /// A comment-only line
    Comment(Comment<'a>),
    /// An empty or whitespace-only line
    Empty,
}

/// A GCode command like "G1" or "M104"
#[derive(Debug, Clone, PartialEq)]
pub struct Command<'a> {
    /// Command name (e.g., "G1", "M104")
    pub name: &'a str,
    /// Command parameters (e.g., X10, Y20)
    pub parameters: Vec<Parameter<'a>>,
    /// Optional trailing comment
    pub comment: Option<Comment<'a>>,
}

impl Command<'_> {
    /// Numeric value of the first parameter with this letter.
    ///
    /// Returns `None` when the letter is missing or its value is not a finite
    /// number; a malformed word never turns into zero.
    pub fn value(&self, letter: char) -> Option<f64> {
        self.parameters
            .iter()
            .find(|p| p.letter == letter)
            .and_then(Parameter::number)
    }
}

/// A command parameter like "X10" or "F1500"
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter<'a> {
    /// Parameter letter (e.g., 'X', 'Y', 'F')
    pub letter: char,
    /// Raw value text following the letter
    pub value: &'a str,
}

impl Parameter<'_> {
    pub fn number(&self) -> Option<f64> {
        self.value.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// A comment (semicolon or parenthetical)
#[derive(Debug, Clone, PartialEq)]
pub struct Comment<'a> {
    /// Comment text (without the delimiters)
    pub text: &'a str,
}

/// Convert tokens into a parsed line
pub fn tokens_to_parsed_line(tokens: Vec<Token<'_>>) -> ParsedLine<'_> {
    let comment = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Comment)
        .map(|t| Comment {
            text: extract_comment_text(t.text),
        });

    match tokens.iter().find(|t| t.kind == TokenKind::Command) {
        Some(cmd_token) => {
            let parameters = tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Parameter)
                .filter_map(|t| parse_parameter_token(t.text))
                .collect();

            ParsedLine::Command(Command {
                name: cmd_token.text,
                parameters,
                comment,
            })
        }
        None => comment.map_or(ParsedLine::Empty, ParsedLine::Comment),
    }
}

/// Parse a parameter token like "X10.5" into a Parameter
fn parse_parameter_token(text: &str) -> Option<Parameter<'_>> {
    let letter = text.chars().next()?;

    if !letter.is_ascii_alphabetic() || text.len() < 2 {
        return None;
    }

    Some(Parameter {
        letter,
        value: &text[letter.len_utf8()..],
    })
}

/// Extract comment text, removing delimiters
fn extract_comment_text(text: &str) -> &str {
    if let Some(stripped) = text.strip_prefix(';') {
        stripped
    } else if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        inner
    } else {
        text
    }
}
