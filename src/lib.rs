//! A minimal interactive command interpreter.
//!
//! This crate implements the classic read-parse-execute loop: read one line
//! from standard input, split it into whitespace-delimited words, run the
//! result as a child process and block until it finishes before prompting
//! again. There is no scripting language, no pipes or redirection, no job
//! control and no globbing; the only built-in command is `exit`, which ends
//! the loop. It is intentionally small and easy to read, suitable for
//! experiments with process management and argument handling.
//!
//! The main entry point is [`Interpreter`], which owns the prompt string and
//! drives the loop. The public [`command`] module exposes the small
//! vocabulary of types shared between the components.

pub mod command;
mod external;
mod interpreter;
mod lexer;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
