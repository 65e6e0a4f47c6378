//! A tiny interactive command interpreter.
//!
//! Each input line goes through the same pipeline: it is split into tokens on
//! spaces, tokens starting with `$` are expanded from the environment (or, for
//! `$?`, from the status of the last program), and the result is either run by
//! a builtin such as `cd` or resolved against `PATH` and launched as a child
//! process whose exit status becomes the new `$?`.
//!
//! The main entry point is [`Interpreter`]. The public modules expose each
//! stage on its own: [`lexer`], [`expand`], [`builtin`] and [`external`], plus
//! the [`command::Launcher`] seam used to start processes.

pub mod builtin;
pub mod command;
pub mod config;
pub mod env;
pub mod error;
pub mod expand;
pub mod external;
mod interpreter;
pub mod lexer;

pub use error::ShellError;
/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::{Interpreter, is_exit};
