use std::fmt;

pub const MOVE_RIGHT: u8 = b'>';
pub const MOVE_LEFT: u8 = b'<';
pub const INCREMENT: u8 = b'+';
pub const DECREMENT: u8 = b'-';
pub const OUTPUT: u8 = b'.';
pub const INPUT: u8 = b',';
pub const LOOP_OPEN: u8 = b'[';
pub const LOOP_CLOSE: u8 = b']';

/// One of the eight Brainfuck commands. Every other byte is a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    MoveRight,  // >
    MoveLeft,   // <
    Increment,  // +
    Decrement,  // -
    Output,     // .
    Input,      // ,
    LoopOpen,   // [
    LoopClose,  // ]
}

impl Instruction {
    /// Decode a program byte, returning `None` for comment bytes.
    pub fn decode(byte: u8) -> Option<Self> {
        Some(match byte {
            MOVE_RIGHT => Instruction::MoveRight,
            MOVE_LEFT => Instruction::MoveLeft,
            INCREMENT => Instruction::Increment,
            DECREMENT => Instruction::Decrement,
            OUTPUT => Instruction::Output,
            INPUT => Instruction::Input,
            LOOP_OPEN => Instruction::LoopOpen,
            LOOP_CLOSE => Instruction::LoopClose,
            _ => return None,
        })
    }

    pub fn as_char(self) -> char {
        match self {
            Instruction::MoveRight => '>',
            Instruction::MoveLeft => '<',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::LoopOpen => '[',
            Instruction::LoopClose => ']',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
