//! Tokenizer for save record lines
//!
//! Every field is built from the same small alphabet: brackets, braces,
//! parentheses, commas, colons, unsigned integers, bare identifiers
//! (`Wall`, `Coin`) and single-quoted names (`'Coin'`). Integers may have any
//! number of digits.

use std::fmt;
use super::LoadErrorKind;

/// A single token with its 1-based column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Comma,
    Colon,
    Int(u64),
    Ident(String),
    Str(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LBracket => write!(f, "`[`"),
            TokenKind::RBracket => write!(f, "`]`"),
            TokenKind::LBrace => write!(f, "`{{`"),
            TokenKind::RBrace => write!(f, "`}}`"),
            TokenKind::LParen => write!(f, "`(`"),
            TokenKind::RParen => write!(f, "`)`"),
            TokenKind::Comma => write!(f, "`,`"),
            TokenKind::Colon => write!(f, "`:`"),
            TokenKind::Int(n) => write!(f, "integer {}", n),
            TokenKind::Ident(s) => write!(f, "`{}`", s),
            TokenKind::Str(s) => write!(f, "'{}'", s),
        }
    }
}

fn syntax(column: usize, message: impl Into<String>) -> LoadErrorKind {
    LoadErrorKind::Syntax {
        column,
        message: message.into(),
    }
}

/// Split one line into tokens
pub fn tokenize(input: &str) -> Result<Vec<Token>, LoadErrorKind> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        let column = pos + 1;

        if b.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        let punct = match b {
            b'[' => Some(TokenKind::LBracket),
            b']' => Some(TokenKind::RBracket),
            b'{' => Some(TokenKind::LBrace),
            b'}' => Some(TokenKind::RBrace),
            b'(' => Some(TokenKind::LParen),
            b')' => Some(TokenKind::RParen),
            b',' => Some(TokenKind::Comma),
            b':' => Some(TokenKind::Colon),
            _ => None,
        };
        if let Some(kind) = punct {
            tokens.push(Token { kind, column });
            pos += 1;
            continue;
        }

        if b.is_ascii_digit() {
            let start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            let value = input[start..pos]
                .parse::<u64>()
                .map_err(|_| syntax(column, "integer too large"))?;
            tokens.push(Token { kind: TokenKind::Int(value), column });
            continue;
        }

        if b.is_ascii_alphabetic() || b == b'_' {
            let start = pos;
            while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
                pos += 1;
            }
            tokens.push(Token {
                kind: TokenKind::Ident(input[start..pos].to_string()),
                column,
            });
            continue;
        }

        if b == b'\'' {
            let start = pos + 1;
            let end = input[start..]
                .find('\'')
                .map(|i| start + i)
                .ok_or_else(|| syntax(column, "unterminated quoted name"))?;
            tokens.push(Token {
                kind: TokenKind::Str(input[start..end].to_string()),
                column,
            });
            pos = end + 1;
            continue;
        }

        // Report the whole character, not just its first byte
        let ch = input[pos..].chars().next().unwrap_or('?');
        return Err(syntax(column, format!("unexpected character {:?}", ch)));
    }

    Ok(tokens)
}

/// Read cursor over the tokens of one line
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    /// Column reported for errors at end of line
    end_column: usize,
}

impl TokenStream {
    pub fn new(line: &str) -> Result<Self, LoadErrorKind> {
        Ok(Self {
            tokens: tokenize(line)?,
            pos: 0,
            end_column: line.len() + 1,
        })
    }

    pub fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn column(&self) -> usize {
        self.tokens.get(self.pos).map(|t| t.column).unwrap_or(self.end_column)
    }

    /// Syntax error at the current token
    pub fn unexpected(&self, expected: &str) -> LoadErrorKind {
        let found = match self.peek() {
            Some(kind) => kind.to_string(),
            None => "end of line".to_string(),
        };
        syntax(self.column(), format!("expected {}, found {}", expected, found))
    }

    /// Consume the next token if it matches
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<(), LoadErrorKind> {
        if self.eat(&kind) {
            Ok(())
        } else {
            Err(self.unexpected(&kind.to_string()))
        }
    }

    pub fn expect_int(&mut self) -> Result<u64, LoadErrorKind> {
        match self.peek() {
            Some(TokenKind::Int(n)) => {
                let n = *n;
                self.pos += 1;
                Ok(n)
            }
            _ => Err(self.unexpected("an integer")),
        }
    }

    pub fn expect_usize(&mut self) -> Result<usize, LoadErrorKind> {
        let column = self.column();
        let n = self.expect_int()?;
        usize::try_from(n).map_err(|_| syntax(column, "integer too large"))
    }

    pub fn expect_u32(&mut self) -> Result<u32, LoadErrorKind> {
        let column = self.column();
        let n = self.expect_int()?;
        u32::try_from(n).map_err(|_| syntax(column, "integer too large"))
    }

    pub fn expect_ident(&mut self) -> Result<String, LoadErrorKind> {
        match self.peek() {
            Some(TokenKind::Ident(s)) => {
                let s = s.clone();
                self.pos += 1;
                Ok(s)
            }
            _ => Err(self.unexpected("a type name")),
        }
    }

    pub fn expect_str(&mut self) -> Result<String, LoadErrorKind> {
        match self.peek() {
            Some(TokenKind::Str(s)) => {
                let s = s.clone();
                self.pos += 1;
                Ok(s)
            }
            _ => Err(self.unexpected("a quoted name")),
        }
    }

    /// Read comma-separated elements up to and including `close`.
    /// The opening delimiter must already be consumed.
    pub fn list<T>(
        &mut self,
        close: TokenKind,
        mut element: impl FnMut(&mut Self) -> Result<T, LoadErrorKind>,
    ) -> Result<Vec<T>, LoadErrorKind> {
        let mut out = Vec::new();
        if self.eat(&close) {
            return Ok(out);
        }
        loop {
            out.push(element(self)?);
            if self.eat(&close) {
                return Ok(out);
            }
            if !self.eat(&TokenKind::Comma) {
                return Err(self.unexpected(&format!("`,` or {}", close)));
            }
        }
    }

    /// Fail if anything follows the value
    pub fn finish(&self) -> Result<(), LoadErrorKind> {
        if self.pos < self.tokens.len() {
            Err(self.unexpected("end of line"))
        } else {
            Ok(())
        }
    }
}
