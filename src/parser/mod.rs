//! GCode Parser
//!
//! Line-oriented tokenization and AST construction with borrowed text.

pub mod ast;
pub mod lexer;

pub use ast::{Command, Comment, Parameter, ParsedLine};
pub use lexer::{tokenize_line, Token, TokenKind};

/// Parse a single line of GCode into structured data
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    ast::tokens_to_parsed_line(lexer::tokenize_line(line))
}

/// Whether the line is a linear move (`G0` or `G1`).
///
/// The code must open the line and is case-sensitive. Its number may be
/// zero-padded (`G00`, `G01`) but must be the integer 0 or 1, so `G10`, `G11`
/// and `G1.5` are not moves.
pub fn is_linear_move(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('G') else {
        return false;
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let (number, tail) = rest.split_at(end);

    !number.is_empty()
        && !tail.starts_with('.')
        && matches!(number.trim_start_matches('0'), "" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_command() {
        let ParsedLine::Command(cmd) = parse_line("G1 X10 Y20") else {
            panic!("Expected command");
        };
        assert_eq!(cmd.name, "G1");
        assert_eq!(cmd.parameters.len(), 2);
        assert_eq!(cmd.parameters[0].letter, 'X');
        assert_eq!(cmd.parameters[0].value, "10");
    }

    #[test]
    fn test_parse_with_comment() {
        let ParsedLine::Command(cmd) = parse_line("G1 X10 ; move to X10") else {
            panic!("Expected command");
        };
        assert_eq!(cmd.name, "G1");
        assert_eq!(
            cmd.comment,
            Some(Comment {
                text: " move to X10"
            })
        );
    }

    #[test]
    fn test_comment_words_are_not_parameters() {
        let ParsedLine::Command(cmd) = parse_line("G1 X10 ; X99 Y99") else {
            panic!("Expected command");
        };
        assert_eq!(cmd.value('X'), Some(10.0));
        assert_eq!(cmd.value('Y'), None);
    }

    #[test]
    fn test_parse_comment_only() {
        let ParsedLine::Comment(comment) = parse_line("; this is a comment") else {
            panic!("Expected comment");
        };
        assert_eq!(comment.text, " this is a comment");
    }

    #[test]
    fn test_parse_empty_line() {
        assert!(matches!(parse_line("   "), ParsedLine::Empty));
    }

    #[test]
    fn test_is_linear_move() {
        assert!(is_linear_move("G0 X1"));
        assert!(is_linear_move("G1 X1 Y2"));
        assert!(is_linear_move("G1X1"));
        assert!(is_linear_move("G1"));
        assert!(is_linear_move("G1;comment"));
        assert!(is_linear_move("G00 X1"));
        assert!(is_linear_move("G01 X1 Y2"));
        assert!(is_linear_move("G01X1"));

        assert!(!is_linear_move("g1 X1"));
        assert!(!is_linear_move(" G1 X1"));
        assert!(!is_linear_move("G10"));
        assert!(!is_linear_move("G11"));
        assert!(!is_linear_move("G28"));
        assert!(!is_linear_move("G1.5 X1"));
        assert!(!is_linear_move("G01.5 X1"));
        assert!(!is_linear_move("G010"));
        assert!(!is_linear_move("G X1"));
        assert!(!is_linear_move("M104 S200"));
        assert!(!is_linear_move("; G1 X10"));
    }
}
