//! Command interpreter
//!
//! Executes a stream of commands against a named collection of
//! [`PhoneForward`](crate::forward::PhoneForward) bases. The first failure
//! stops execution and is returned to the caller, which decides how to
//! report it (see [`PhoneForwardError::diagnostic`]).

pub mod bases;
pub mod command;
pub mod lexer;

pub use bases::BaseRegistry;
pub use command::{Command, next_command};
pub use lexer::{Lexer, Token, TokenKind};

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::EngineConfig;
use crate::errors::{Operator, PhoneForwardError, Result};
use crate::forward::digits::count_digits;
use crate::forward::{OverflowPolicy, PhoneForward, PhoneNumbers};

/// Digits in an `@` argument beyond this many give the counted length.
pub const COUNT_LENGTH_OFFSET: usize = 12;

#[derive(Debug, Default)]
pub struct Interpreter {
    registry: BaseRegistry,
    current: Option<String>,
    overflow: OverflowPolicy,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(engine: &EngineConfig) -> Self {
        Self {
            registry: BaseRegistry::new(engine.max_bases),
            current: None,
            overflow: engine.count_overflow,
        }
    }

    /// Execute every command in `input`, writing query results to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        let mut lexer = Lexer::new(input);
        let mut executed = 0usize;
        while let Some(command) = next_command(&mut lexer)? {
            self.execute(command, output)?;
            executed += 1;
        }
        debug!(
            executed,
            bytes = lexer.consumed(),
            bases = ?self.registry.names().collect::<Vec<_>>(),
            "input exhausted"
        );
        Ok(())
    }

    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<()> {
        debug!(?command, "executing");
        match command {
            Command::New { name, offset } => {
                self.registry
                    .create(&name)
                    .map_err(|_| PhoneForwardError::operation(Operator::New, offset))?;
                self.current = Some(name);
            }
            Command::DeleteBase { name, offset } => {
                self.registry
                    .delete(&name)
                    .map_err(|_| PhoneForwardError::operation(Operator::Del, offset))?;
                if self.current.as_deref() == Some(name.as_str()) {
                    self.current = None;
                }
            }
            Command::Remove { prefix, offset } => {
                self.current_base_mut(Operator::Del, offset)?.remove(&prefix);
            }
            Command::Add {
                source,
                target,
                offset,
            } => {
                self.current_base_mut(Operator::Add, offset)?
                    .add(&source, &target)
                    .map_err(|_| PhoneForwardError::operation(Operator::Add, offset))?;
            }
            Command::Get { num, offset } => {
                let result = self.current_base(Operator::Get, offset)?.get(&num);
                write_numbers(output, &result, Operator::Get, offset)?;
            }
            Command::Reverse { num, offset } => {
                let result = self.current_base(Operator::Reverse, offset)?.reverse(&num);
                write_numbers(output, &result, Operator::Reverse, offset)?;
            }
            Command::Count { set, offset } => {
                let len = count_digits(&set).saturating_sub(COUNT_LENGTH_OFFSET);
                let count = self
                    .current_base(Operator::Count, offset)?
                    .non_trivial_count_with(&set, len, self.overflow);
                writeln!(output, "{}", count)?;
            }
        }
        Ok(())
    }

    /// Name of the base commands currently apply to.
    pub fn current_base_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn registry(&self) -> &BaseRegistry {
        &self.registry
    }

    fn current_base(&self, op: Operator, offset: usize) -> Result<&PhoneForward> {
        self.current
            .as_deref()
            .and_then(|name| self.registry.get(name))
            .ok_or(PhoneForwardError::operation(op, offset))
    }

    fn current_base_mut(&mut self, op: Operator, offset: usize) -> Result<&mut PhoneForward> {
        let Some(name) = self.current.as_deref() else {
            return Err(PhoneForwardError::operation(op, offset));
        };
        self.registry
            .get_mut(name)
            .ok_or(PhoneForwardError::operation(op, offset))
    }
}

fn write_numbers<W: Write>(
    output: &mut W,
    numbers: &PhoneNumbers,
    op: Operator,
    offset: usize,
) -> Result<()> {
    if numbers.is_empty() {
        return Err(PhoneForwardError::operation(op, offset));
    }
    write!(output, "{}", numbers)?;
    Ok(())
}
