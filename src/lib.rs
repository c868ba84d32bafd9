//! phone-forward - Bidirectional prefix redirection of phone numbers
//!
//! A redirection `source -> target` rewrites every number beginning with
//! `source` by replacing that prefix with `target`. The library keeps the
//! forward and reverse views of a redirection set in step and answers
//! forward, reverse and counting queries over them.
//!
//! # Architecture
//! - `forward`: Digit alphabet, tries and the `PhoneForward` index
//! - `interpreter`: Command language driving named indexes
//! - `config`: Configuration management
//! - `errors`: Crate-wide error type
//! - `system`: Logging initialization
//! - `cli`: Command-line definitions

pub mod cli;
pub mod config;
pub mod errors;
pub mod forward;
pub mod interpreter;
pub mod system;

pub use errors::{PhoneForwardError, Result};
pub use forward::{OverflowPolicy, PhoneForward, PhoneNumbers};
pub use interpreter::Interpreter;
