//! A minimal Brainfuck interpreter library.
//!
//! This crate runs Brainfuck programs on a fixed 2,048-cell tape with a
//! single, strictly bounds-checked cursor.
//!
//! A run is a one-way pipeline:
//! - [`load_program`] reads the program file into an immutable buffer and
//!   rejects missing or empty files.
//! - [`validate`] checks bracket balance before anything executes.
//! - [`Interpreter::run`] executes the validated program, resolving loop
//!   jumps on demand by scanning for the partner bracket.
//!
//! Quick start:
//!
//! ```no_run
//! use std::io;
//!
//! let code = b"++++++++[>++++++++<-]>+.";
//! minibf::execute(code, io::stdin().lock(), io::stdout().lock()).expect("program should run");
//! ```

use std::io::{Read, Write};

pub mod cli_util;
pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod jump;
pub mod loader;
pub mod validator;

pub use error::{BracketError, Error, LoadError, RuntimeError, UnmatchedBracketKind};
pub use instruction::Instruction;
pub use interpreter::{EofBehavior, Interpreter, TAPE_LEN};
pub use jump::{find_matching_close, find_matching_open};
pub use loader::{Program, load_program};
pub use validator::validate;

/// Validate `program` and, if its brackets balance, run it on a fresh
/// [`TAPE_LEN`]-cell tape with default settings.
pub fn execute<R: Read, W: Write>(program: &[u8], input: R, output: W) -> Result<(), Error> {
    validate(program)?;
    Interpreter::new(program, input, output).run()?;
    Ok(())
}
