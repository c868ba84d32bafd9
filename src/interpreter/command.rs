//! Command grammar
//!
//! ```text
//! NEW id        create/select a base
//! DEL id        delete a base
//! DEL num       remove redirections with prefix num
//! num > num     add a redirection
//! num ?         forward lookup
//! ? num         reverse lookup
//! @ word        non-trivial count over the digits of word
//! ```

use std::io::BufRead;

use super::lexer::{Lexer, Token, TokenKind};
use crate::errors::{PhoneForwardError, Result};

/// A parsed command. `offset` is the position of the operator's first
/// character and is what operation failures report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New { name: String, offset: usize },
    DeleteBase { name: String, offset: usize },
    Remove { prefix: String, offset: usize },
    Add { source: String, target: String, offset: usize },
    Get { num: String, offset: usize },
    Reverse { num: String, offset: usize },
    Count { set: String, offset: usize },
}

/// Read one full command, or `None` at a clean end of input.
pub fn next_command<R: BufRead>(lexer: &mut Lexer<R>) -> Result<Option<Command>> {
    let Some(Token { kind, offset }) = lexer.next_token()? else {
        return Ok(None);
    };

    let command = match kind {
        TokenKind::New => match expect_token(lexer)? {
            Token {
                kind: TokenKind::Ident(name),
                ..
            } => Command::New { name, offset },
            other => return Err(PhoneForwardError::syntax(other.offset)),
        },
        TokenKind::Del => match expect_token(lexer)? {
            Token {
                kind: TokenKind::Ident(name),
                ..
            } => Command::DeleteBase { name, offset },
            Token {
                kind: TokenKind::Number(prefix),
                ..
            } => Command::Remove { prefix, offset },
            other => return Err(PhoneForwardError::syntax(other.offset)),
        },
        TokenKind::Number(num) => {
            let operator = expect_token(lexer)?;
            match operator.kind {
                TokenKind::Query => Command::Get {
                    num,
                    offset: operator.offset,
                },
                TokenKind::Arrow => Command::Add {
                    source: num,
                    target: expect_number(lexer)?,
                    offset: operator.offset,
                },
                _ => return Err(PhoneForwardError::syntax(operator.offset)),
            }
        }
        TokenKind::Query => Command::Reverse {
            num: expect_number(lexer)?,
            offset,
        },
        // Any word is accepted; only its digits matter.
        TokenKind::At => match expect_token(lexer)? {
            Token {
                kind: TokenKind::Number(set) | TokenKind::Ident(set),
                ..
            } => Command::Count { set, offset },
            other => return Err(PhoneForwardError::syntax(other.offset)),
        },
        TokenKind::Ident(_) | TokenKind::Arrow => return Err(PhoneForwardError::syntax(offset)),
    };

    Ok(Some(command))
}

fn expect_token<R: BufRead>(lexer: &mut Lexer<R>) -> Result<Token> {
    lexer.next_token()?.ok_or(PhoneForwardError::UnexpectedEof)
}

fn expect_number<R: BufRead>(lexer: &mut Lexer<R>) -> Result<String> {
    match expect_token(lexer)? {
        Token {
            kind: TokenKind::Number(num),
            ..
        } => Ok(num),
        other => Err(PhoneForwardError::syntax(other.offset)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(input: &str) -> Result<Vec<Command>> {
        let mut lexer = Lexer::new(input.as_bytes());
        let mut commands = Vec::new();
        while let Some(cmd) = next_command(&mut lexer)? {
            commands.push(cmd);
        }
        Ok(commands)
    }

    #[test]
    fn test_parse_every_command() {
        let commands = parse_all("NEW a 1>2 1? ?2 @12 DEL 1 DEL a").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::New {
                    name: "a".into(),
                    offset: 1
                },
                Command::Add {
                    source: "1".into(),
                    target: "2".into(),
                    offset: 8
                },
                Command::Get {
                    num: "1".into(),
                    offset: 12
                },
                Command::Reverse {
                    num: "2".into(),
                    offset: 14
                },
                Command::Count {
                    set: "12".into(),
                    offset: 17
                },
                Command::Remove {
                    prefix: "1".into(),
                    offset: 21
                },
                Command::DeleteBase {
                    name: "a".into(),
                    offset: 27
                },
            ]
        );
    }

    #[test]
    fn test_count_accepts_word_argument() {
        assert_eq!(
            parse_all("@ a12"),
            Ok(vec![Command::Count {
                set: "a12".into(),
                offset: 1
            }])
        );
        assert_eq!(parse_all("@ NEW"), Err(PhoneForwardError::syntax(3)));
        assert_eq!(parse_all("@ >"), Err(PhoneForwardError::syntax(3)));
    }

    #[test]
    fn test_keyword_is_not_identifier() {
        assert_eq!(parse_all("NEW NEW"), Err(PhoneForwardError::syntax(5)));
        assert_eq!(parse_all("NEW DEL"), Err(PhoneForwardError::syntax(5)));
        assert_eq!(parse_all("NEW 12"), Err(PhoneForwardError::syntax(5)));
    }

    #[test]
    fn test_missing_operand_is_eof() {
        assert_eq!(parse_all("NEW"), Err(PhoneForwardError::UnexpectedEof));
        assert_eq!(parse_all("12"), Err(PhoneForwardError::UnexpectedEof));
        assert_eq!(parse_all("12 >"), Err(PhoneForwardError::UnexpectedEof));
        assert_eq!(parse_all("?"), Err(PhoneForwardError::UnexpectedEof));
    }

    #[test]
    fn test_misplaced_tokens() {
        assert_eq!(parse_all("abc"), Err(PhoneForwardError::syntax(1)));
        assert_eq!(parse_all("> 1"), Err(PhoneForwardError::syntax(1)));
        assert_eq!(parse_all("12 13"), Err(PhoneForwardError::syntax(4)));
        assert_eq!(parse_all("12 > ?"), Err(PhoneForwardError::syntax(6)));
    }
}
