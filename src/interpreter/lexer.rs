//! Lexical scanner for the command language
//!
//! Reads bytes from any `BufRead` and yields tokens tagged with the 1-based
//! byte offset of their first character. Whitespace and `$$ ... $$`
//! comments are skipped.

use std::io::BufRead;

use crate::errors::{PhoneForwardError, Result};
use crate::forward::digits::is_digit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Number(String),
    Ident(String),
    New,
    Del,
    /// `?`
    Query,
    /// `>`
    Arrow,
    /// `@`
    At,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

pub struct Lexer<R> {
    reader: R,
    consumed: usize,
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            consumed: 0,
        }
    }

    /// Bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Next token, or `None` at a clean end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_blanks()?;
        let offset = self.consumed + 1;
        let Some(first) = self.peek()? else {
            return Ok(None);
        };

        let kind = match first {
            b'?' => {
                self.bump()?;
                TokenKind::Query
            }
            b'>' => {
                self.bump()?;
                TokenKind::Arrow
            }
            b'@' => {
                self.bump()?;
                TokenKind::At
            }
            b if is_digit(b) => TokenKind::Number(self.take_while(is_digit)?),
            b if b.is_ascii_alphabetic() => {
                let word = self.take_while(|b| b.is_ascii_alphabetic() || is_digit(b))?;
                match word.as_str() {
                    "NEW" => TokenKind::New,
                    "DEL" => TokenKind::Del,
                    _ => TokenKind::Ident(word),
                }
            }
            _ => return Err(PhoneForwardError::syntax(offset)),
        };

        Ok(Some(Token { kind, offset }))
    }

    fn skip_blanks(&mut self) -> Result<()> {
        while let Some(b) = self.peek()? {
            if b.is_ascii_whitespace() {
                self.bump()?;
            } else if b == b'$' {
                self.skip_comment()?;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn skip_comment(&mut self) -> Result<()> {
        let start = self.consumed + 1;
        self.bump()?;
        match self.bump()? {
            Some(b'$') => {}
            Some(_) => return Err(PhoneForwardError::syntax(start)),
            None => return Err(PhoneForwardError::UnexpectedEof),
        }

        let mut dollar = false;
        loop {
            match self.bump()? {
                Some(b'$') if dollar => return Ok(()),
                Some(b) => dollar = b == b'$',
                None => return Err(PhoneForwardError::UnexpectedEof),
            }
        }
    }

    fn take_while(&mut self, accept: impl Fn(u8) -> bool) -> Result<String> {
        let mut out = String::new();
        while let Some(b) = self.peek()? {
            if !accept(b) {
                break;
            }
            out.push(b as char);
            self.bump()?;
        }
        Ok(out)
    }

    fn peek(&mut self) -> Result<Option<u8>> {
        let buf = self.reader.fill_buf()?;
        Ok(buf.first().copied())
    }

    fn bump(&mut self) -> Result<Option<u8>> {
        let b = self.peek()?;
        if b.is_some() {
            self.reader.consume(1);
            self.consumed += 1;
        }
        Ok(b)
    }
}
