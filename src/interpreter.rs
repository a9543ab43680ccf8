//! The execution loop.
//!
//! An [`Interpreter`] owns a fixed-length tape of byte cells and a cursor
//! into it, and walks a borrowed program one byte at a time:
//! - The tape starts zeroed and never grows.
//! - Strict cursor bounds: moving left from cell 0 or right past the last
//!   cell aborts the run with the offending character index.
//! - Cells wrap modulo 256 on `+` and `-`.
//! - `,` reads one byte from the input stream; what lands in the cell on
//!   end of input is chosen by [`EofBehavior`].
//! - `.` writes the current cell to the output stream as a raw byte.
//! - Loop jumps are resolved on demand by scanning for the partner bracket.
//! - Every other byte is a comment.

use std::io::{self, Read, Write};

use crate::error::RuntimeError;
use crate::instruction::Instruction;
use crate::jump::{find_matching_close, find_matching_open};

/// Number of cells on the tape.
pub const TAPE_LEN: usize = 2048;

/// What `,` stores when the input stream is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EofBehavior {
    /// Store 0.
    Zero,
    /// Leave the current cell as it was.
    Unchanged,
    /// Store 255, the byte a C `EOF` (-1) truncates to.
    #[default]
    AllOnes,
}

/// A bounds-checked Brainfuck interpreter over a borrowed program.
pub struct Interpreter<'p, R: Read, W: Write> {
    program: &'p [u8],
    tape: Vec<u8>,
    cursor: usize,
    input: R,
    output: W,
    eof: EofBehavior,
    max_steps: Option<usize>,
}

impl<'p, R: Read, W: Write> Interpreter<'p, R, W> {
    /// Create an interpreter with a [`TAPE_LEN`]-cell tape.
    pub fn new(program: &'p [u8], input: R, output: W) -> Self {
        Self::new_with_tape_len(program, TAPE_LEN, input, output)
    }

    /// Create an interpreter with a custom tape length (at least one cell).
    pub fn new_with_tape_len(program: &'p [u8], tape_len: usize, input: R, output: W) -> Self {
        Self {
            program,
            tape: vec![0; tape_len.max(1)],
            cursor: 0,
            input,
            output,
            eof: EofBehavior::default(),
            max_steps: None,
        }
    }

    pub fn set_eof_behavior(&mut self, eof: EofBehavior) {
        self.eof = eof;
    }

    /// Abort with [`RuntimeError::StepLimitExceeded`] after `limit` executed
    /// instructions. Comment bytes are not counted.
    pub fn set_max_steps(&mut self, limit: Option<usize>) {
        self.max_steps = limit;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn tape(&self) -> &[u8] {
        &self.tape
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Execute the program from a zeroed tape until the instruction pointer
    /// passes the end, or the first fault.
    ///
    /// The program must already have passed [`validate`](crate::validate).
    /// Output is flushed before returning, on success and on failure.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        self.tape.fill(0);
        self.cursor = 0;

        let result = self.execute();
        let flushed = self.output.flush().map_err(|source| RuntimeError::Io {
            position: self.program.len(),
            source,
        });
        result.and(flushed)
    }

    fn execute(&mut self) -> Result<(), RuntimeError> {
        let program = self.program;
        let mut ip: usize = 0;
        let mut steps: usize = 0;

        while ip < program.len() {
            let Some(instr) = Instruction::decode(program[ip]) else {
                ip += 1;
                continue;
            };

            if let Some(limit) = self.max_steps {
                if steps >= limit {
                    return Err(RuntimeError::StepLimitExceeded { limit });
                }
            }

            log::trace!(
                "step={steps} ip={ip} ptr={} cell={} instr={instr}",
                self.cursor,
                self.tape[self.cursor]
            );

            match instr {
                Instruction::MoveRight => {
                    if self.cursor >= self.tape.len() - 1 {
                        return Err(RuntimeError::CursorOverflow { position: ip });
                    }
                    self.cursor += 1;
                }
                Instruction::MoveLeft => {
                    if self.cursor == 0 {
                        return Err(RuntimeError::CursorUnderflow { position: ip });
                    }
                    self.cursor -= 1;
                }
                Instruction::Increment => {
                    self.tape[self.cursor] = self.tape[self.cursor].wrapping_add(1);
                }
                Instruction::Decrement => {
                    self.tape[self.cursor] = self.tape[self.cursor].wrapping_sub(1);
                }
                Instruction::Output => {
                    let byte = self.tape[self.cursor];
                    self.output
                        .write_all(&[byte])
                        .map_err(|source| RuntimeError::Io { position: ip, source })?;
                }
                Instruction::Input => {
                    let cell = self.tape[self.cursor];
                    self.tape[self.cursor] = match self.read_byte(ip)? {
                        Some(byte) => byte,
                        None => match self.eof {
                            EofBehavior::Zero => 0,
                            EofBehavior::Unchanged => cell,
                            EofBehavior::AllOnes => u8::MAX,
                        },
                    };
                }
                Instruction::LoopOpen => {
                    if self.tape[self.cursor] == 0 {
                        ip = find_matching_close(program, ip)
                            .ok_or(RuntimeError::UnbalancedJump { position: ip })?;
                    }
                }
                Instruction::LoopClose => {
                    if self.tape[self.cursor] != 0 {
                        ip = find_matching_open(program, ip)
                            .ok_or(RuntimeError::UnbalancedJump { position: ip })?;
                    }
                }
            }

            steps += 1;
            // A jump lands on the partner bracket; step past it.
            ip += 1;
        }

        log::debug!("run finished after {steps} steps, cursor at {}", self.cursor);
        Ok(())
    }

    /// Read one byte, flushing pending output first so prompts are visible
    /// before the read blocks. `None` means end of input.
    fn read_byte(&mut self, position: usize) -> Result<Option<u8>, RuntimeError> {
        self.output
            .flush()
            .map_err(|source| RuntimeError::Io { position, source })?;

        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => return Err(RuntimeError::Io { position, source }),
            }
        }
    }
}
