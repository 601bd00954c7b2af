//! Token types
//!
//! Lexical units of .molb source together with their source position.

use std::fmt;

/// A token and the 1-based position of its first character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.kind)
    }
}

/// Kinds of tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    IntLiteral(i64),
    Identifier(String),

    // Keywords
    Return,
    Function,
    IntType,
    Var,
    If,
    Else,
    While,
    Break,
    Continue,

    // Punctuation
    LeftParentheses,
    RightParentheses,
    LeftBrace,
    RightBrace,
    Semicolon,
    Comma,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Equal,
    LessThan,
    GreaterThan,
    Not,
    DoubleEqual,
    NotEqual,
    LessEqual,
    GreaterEqual,
    And,
    Or,
}

impl TokenKind {
    /// Map a word to its keyword, or `None` for an identifier
    pub fn keyword(word: &str) -> Option<Self> {
        let kind = match word {
            "return" => Self::Return,
            "function" => Self::Function,
            "int" => Self::IntType,
            "var" => Self::Var,
            "if" => Self::If,
            "else" => Self::Else,
            "while" => Self::While,
            "break" => Self::Break,
            "continue" => Self::Continue,
            _ => return None,
        };
        Some(kind)
    }

    /// Kind for a single punctuation or operator character
    pub fn single(c: char) -> Option<Self> {
        let kind = match c {
            '(' => Self::LeftParentheses,
            ')' => Self::RightParentheses,
            '{' => Self::LeftBrace,
            '}' => Self::RightBrace,
            ';' => Self::Semicolon,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Star,
            '/' => Self::Slash,
            '=' => Self::Equal,
            ',' => Self::Comma,
            '<' => Self::LessThan,
            '>' => Self::GreaterThan,
            '!' => Self::Not,
            _ => return None,
        };
        Some(kind)
    }

    /// Kind for a two-character operator
    pub fn double(first: char, second: char) -> Option<Self> {
        let kind = match (first, second) {
            ('=', '=') => Self::DoubleEqual,
            ('!', '=') => Self::NotEqual,
            ('<', '=') => Self::LessEqual,
            ('>', '=') => Self::GreaterEqual,
            ('&', '&') => Self::And,
            ('|', '|') => Self::Or,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::IntLiteral(value) => return write!(f, "{}", value),
            Self::Identifier(name) => return write!(f, "{}", name),
            Self::Return => "return",
            Self::Function => "function",
            Self::IntType => "int",
            Self::Var => "var",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::LeftParentheses => "(",
            Self::RightParentheses => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Equal => "=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Not => "!",
            Self::DoubleEqual => "==",
            Self::NotEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
        };
        f.write_str(text)
    }
}
