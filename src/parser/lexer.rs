//! GCode Lexer
//!
//! Fast, simple tokenization of GCode lines.
//! Focus: extract tokens quickly with minimal allocations.

/// Token types in GCode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Command like "G1", "M104"
    Command,
    /// Parameter like "X10", "F1500"
    Parameter,
    /// Comment (semicolon or parenthetical)
    Comment,
}

/// A token borrowing its text from the source line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Tokenize a line of GCode into tokens
///
/// A word is one letter followed by its numeric run (digits, `.`, `-`, `+`),
/// so packed words such as `G1X10Y-2.5` split the same way as spaced ones.
pub fn tokenize_line(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start_idx, ch)) = chars.next() {
        match ch {
            // Skip whitespace
            ' ' | '\t' | '\r' | '\n' => continue,

            // Semicolon comment: consume rest of line
            ';' => {
                tokens.push(Token {
                    kind: TokenKind::Comment,
                    text: &line[start_idx..],
                });
                break;
            }

            // Parenthetical comment
            '(' => {
                let mut end_idx = line.len();

                for (idx, ch) in chars.by_ref() {
                    if ch == ')' {
                        end_idx = idx + 1;
                        break;
                    }
                }

                tokens.push(Token {
                    kind: TokenKind::Comment,
                    text: &line[start_idx..end_idx],
                });
            }

            // Letter starts command or parameter
            c if c.is_ascii_alphabetic() => {
                let mut end_idx = start_idx + 1;

                while let Some(&(idx, next_ch)) = chars.peek() {
                    if is_number_char(next_ch) {
                        end_idx = idx + 1;
                        chars.next();
                    } else {
                        break;
                    }
                }

                let text = &line[start_idx..end_idx];
                let kind = if is_command(text) {
                    TokenKind::Command
                } else {
                    TokenKind::Parameter
                };

                tokens.push(Token { kind, text });
            }

            // Skip other characters (malformed input)
            _ => continue,
        }
    }

    tokens
}

fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+')
}

/// Determine if a token is a command
///
/// G/M/T codes are commands, everything else is a parameter.
fn is_command(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_uppercase(), 'G' | 'M' | 'T'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_command() {
        let tokens = tokenize_line("G1 X10 Y20");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::Command);
        assert_eq!(tokens[0].text, "G1");
        assert_eq!(tokens[1].kind, TokenKind::Parameter);
        assert_eq!(tokens[1].text, "X10");
        assert_eq!(tokens[2].kind, TokenKind::Parameter);
        assert_eq!(tokens[2].text, "Y20");
    }

    #[test]
    fn test_tokenize_packed_words() {
        let tokens = tokenize_line("G1X10Y-2.5F1200");

        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, ["G1", "X10", "Y-2.5", "F1200"]);
        assert_eq!(tokens[0].kind, TokenKind::Command);
    }

    #[test]
    fn test_tokenize_with_semicolon_comment() {
        let tokens = tokenize_line("G1 X10 ; move to X20");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].kind, TokenKind::Comment);
        assert_eq!(tokens[2].text, "; move to X20");
    }

    #[test]
    fn test_tokenize_paren_comment() {
        let tokens = tokenize_line("G1 (rapid move) X10");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Comment);
        assert_eq!(tokens[1].text, "(rapid move)");
    }

    #[test]
    fn test_tokenize_unclosed_paren_comment() {
        let tokens = tokenize_line("G1 X1 (never closed");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].text, "(never closed");
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert!(tokenize_line("   ").is_empty());
        assert!(tokenize_line("").is_empty());
    }

    #[test]
    fn test_is_command() {
        assert!(is_command("G1"));
        assert!(is_command("M104"));
        assert!(is_command("T0"));
        assert!(!is_command("X10"));
        assert!(!is_command("F1500"));
    }

    #[test]
    fn test_float_parameters() {
        let tokens = tokenize_line("G1 X10.5 Y-2.3 Z+1.0");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].text, "X10.5");
        assert_eq!(tokens[2].text, "Y-2.3");
        assert_eq!(tokens[3].text, "Z+1.0");
    }
}
