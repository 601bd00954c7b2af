//! Lexer for .molb source text
//!
//! Turns source text into a sequence of [`Token`]s with 1-based line and
//! column positions. Works purely in memory; reading the source file is the
//! caller's job.
//!
//! # Example
//!
//! ```
//! use molbc::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("return 67;").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Return);
//! assert_eq!(tokens[1].kind, TokenKind::IntLiteral(67));
//! assert_eq!(tokens[2].kind, TokenKind::Semicolon);
//! ```

pub mod token;

pub use token::{Token, TokenKind};

use crate::error::LexError;

/// Tokenize a whole source string
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Character-level scanner over source text
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    index: usize,
    line: usize,
    column: usize,
    failed: bool,
}

impl Lexer {
    /// Create a lexer positioned at line 1, column 1
    pub fn new(source: &str) -> Self {
        Self {
            input: source.chars().collect(),
            index: 0,
            line: 1,
            column: 1,
            failed: false,
        }
    }

    fn location(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.index + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.index += 1;

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek(0).is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Scan the next token
    ///
    /// # Errors
    /// Returns `LexError::EndOfInput` once only whitespace remains, and
    /// `UnexpectedChar` / `UnknownToken` for malformed input.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let c = self.peek(0).ok_or(LexError::EndOfInput)?;
        let (line, column) = self.location();

        let kind = if c.is_ascii_digit() {
            self.int_literal(line, column)?
        } else if c.is_alphanumeric() {
            self.word(c, line, column)?
        } else {
            self.operator(c, line, column)?
        };

        Ok(Token::new(kind, line, column))
    }

    fn int_literal(&mut self, line: usize, column: usize) -> Result<TokenKind, LexError> {
        let mut digits = String::new();

        while let Some(c) = self.peek(0) {
            if c.is_ascii_digit() {
                digits.push(c);
                self.bump();
            } else if c.is_alphabetic() {
                return Err(LexError::UnexpectedChar {
                    character: c,
                    line,
                    column,
                });
            } else {
                break;
            }
        }

        // Only overflow can fail here; report the last digit.
        digits
            .parse()
            .map(TokenKind::IntLiteral)
            .map_err(|_| LexError::UnexpectedChar {
                character: digits.chars().last().unwrap_or(' '),
                line,
                column,
            })
    }

    fn word(&mut self, first: char, line: usize, column: usize) -> Result<TokenKind, LexError> {
        if !first.is_alphabetic() {
            return Err(LexError::UnexpectedChar {
                character: first,
                line,
                column,
            });
        }

        let mut word = String::new();
        while let Some(c) = self.peek(0) {
            if c.is_alphanumeric() || c == '_' {
                word.push(c);
                self.bump();
            } else {
                break;
            }
        }

        Ok(TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier(word)))
    }

    fn operator(&mut self, c: char, line: usize, column: usize) -> Result<TokenKind, LexError> {
        if let Some(kind) = self.peek(1).and_then(|next| TokenKind::double(c, next)) {
            self.bump();
            self.bump();
            return Ok(kind);
        }

        if let Some(kind) = TokenKind::single(c) {
            self.bump();
            return Ok(kind);
        }

        Err(LexError::UnknownToken {
            character: c,
            line,
            column,
        })
    }

    /// Scan all remaining tokens, stopping at the first error
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let tokens: Vec<Token> = self.by_ref().collect::<Result<_, _>>()?;
        log::debug!("tokenized {} tokens", tokens.len());
        Ok(tokens)
    }
}

/// Yields tokens until end of input; stops after the first error.
impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.next_token() {
            Err(LexError::EndOfInput) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
            Ok(token) => {
                log::trace!("token {}", token);
                Some(Ok(token))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_next_token_end_of_input() {
        let mut lexer = Lexer::new("   ");
        assert_eq!(lexer.next_token(), Err(LexError::EndOfInput));
    }

    #[test]
    fn test_return_statements() {
        assert_eq!(
            kinds("return 67;\nreturn 0;"),
            vec![
                TokenKind::Return,
                TokenKind::IntLiteral(67),
                TokenKind::Semicolon,
                TokenKind::Return,
                TokenKind::IntLiteral(0),
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("function entry var x_1 iffy if else while break continue int"),
            vec![
                TokenKind::Function,
                TokenKind::Identifier("entry".to_string()),
                TokenKind::Var,
                TokenKind::Identifier("x_1".to_string()),
                TokenKind::Identifier("iffy".to_string()),
                TokenKind::If,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::Break,
                TokenKind::Continue,
                TokenKind::IntType,
            ]
        );
    }

    #[test]
    fn test_double_char_operators_take_precedence() {
        assert_eq!(
            kinds("== != <= >= && || = ! < >"),
            vec![
                TokenKind::DoubleEqual,
                TokenKind::NotEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Equal,
                TokenKind::Not,
                TokenKind::LessThan,
                TokenKind::GreaterThan,
            ]
        );
    }

    #[test]
    fn test_operators_without_spaces() {
        assert_eq!(
            kinds("!x==(1+2)*3/4-5,"),
            vec![
                TokenKind::Not,
                TokenKind::Identifier("x".to_string()),
                TokenKind::DoubleEqual,
                TokenKind::LeftParentheses,
                TokenKind::IntLiteral(1),
                TokenKind::Plus,
                TokenKind::IntLiteral(2),
                TokenKind::RightParentheses,
                TokenKind::Star,
                TokenKind::IntLiteral(3),
                TokenKind::Slash,
                TokenKind::IntLiteral(4),
                TokenKind::Minus,
                TokenKind::IntLiteral(5),
                TokenKind::Comma,
            ]
        );
    }

    #[test]
    fn test_positions_across_lines() {
        let tokens = tokenize("function entry() {\n    return 1;\n}").unwrap();
        let positions: Vec<_> = tokens.iter().map(|t| (t.line, t.column)).collect();
        assert_eq!(
            positions,
            vec![(1, 1), (1, 10), (1, 15), (1, 16), (1, 18), (2, 5), (2, 12), (2, 13), (3, 1)]
        );
    }

    #[test]
    fn test_letter_after_digits() {
        assert_eq!(
            tokenize("x = 12ab;"),
            Err(LexError::UnexpectedChar {
                character: 'a',
                line: 1,
                column: 5,
            })
        );
    }

    #[test]
    fn test_int_literal_overflow() {
        assert_eq!(
            tokenize("99999999999999999999"),
            Err(LexError::UnexpectedChar {
                character: '9',
                line: 1,
                column: 1,
            })
        );
    }

    #[test]
    fn test_int_literal_max() {
        assert_eq!(
            kinds("9223372036854775807"),
            vec![TokenKind::IntLiteral(i64::MAX)]
        );
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(
            tokenize("a\n  @"),
            Err(LexError::UnknownToken {
                character: '@',
                line: 2,
                column: 3,
            })
        );
        assert!(matches!(
            tokenize("a & b"),
            Err(LexError::UnknownToken { character: '&', .. })
        ));
        assert!(matches!(
            tokenize("_hidden"),
            Err(LexError::UnknownToken { character: '_', .. })
        ));
    }

    #[test]
    fn test_non_ascii_digit_start() {
        assert!(matches!(
            tokenize("\u{0663}"),
            Err(LexError::UnexpectedChar { character: '\u{0663}', .. })
        ));
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(kinds("café"), vec![TokenKind::Identifier("café".to_string())]);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut lexer = Lexer::new("1 @ 2");
        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(matches!(lexer.next(), Some(Err(LexError::UnknownToken { .. }))));
        assert!(lexer.next().is_none());
    }
}
