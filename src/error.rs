use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading a program file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The named file does not exist.
    #[error("The file \"{}\" does not exist!", path.display())]
    FileNotFound { path: PathBuf },

    /// The file exists but could not be opened or read.
    #[error("Could not read \"{}\": {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is zero bytes long.
    #[error("An empty source file was given! (\"{}\")", path.display())]
    EmptyProgram { path: PathBuf },
}

/// Which side of the loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedBracketKind {
    /// A `[` with no matching `]`.
    Open,
    /// A `]` with no matching `[`.
    Close,
}

impl fmt::Display for UnmatchedBracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedBracketKind::Open => write!(f, "'[' without matching ']'"),
            UnmatchedBracketKind::Close => write!(f, "']' without matching '['"),
        }
    }
}

/// Loops were not balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Error at ch:{position}: {kind}")]
pub struct BracketError {
    pub position: usize,
    pub kind: UnmatchedBracketKind,
}

/// Errors that abort a run part way through.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// `>` on the last cell of the tape.
    #[error("Error at ch:{position}: Passed maximum cell position.")]
    CursorOverflow { position: usize },

    /// `<` on cell 0.
    #[error("Error at ch:{position}: Passed minimum cell position.")]
    CursorUnderflow { position: usize },

    /// Reading stdin or writing stdout failed.
    #[error("I/O error at ch:{position}: {source}")]
    Io {
        position: usize,
        #[source]
        source: std::io::Error,
    },

    /// No partner bracket was found while jumping. Only reachable when
    /// running a program that skipped validation.
    #[error("Error at ch:{position}: no matching bracket to jump to")]
    UnbalancedJump { position: usize },

    /// Execution aborted due to step limit.
    #[error("Execution aborted: step limit exceeded ({limit})")]
    StepLimitExceeded { limit: usize },
}

/// Any error produced by the load, validate, run pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Bracket(#[from] BracketError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Character index of the offending program byte, if the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Load(_) => None,
            Error::Bracket(err) => Some(err.position),
            Error::Runtime(err) => err.position(),
        }
    }
}

impl RuntimeError {
    pub fn position(&self) -> Option<usize> {
        match self {
            RuntimeError::CursorOverflow { position }
            | RuntimeError::CursorUnderflow { position }
            | RuntimeError::Io { position, .. }
            | RuntimeError::UnbalancedJump { position } => Some(*position),
            RuntimeError::StepLimitExceeded { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_messages_distinguish_the_two_sides() {
        let open = BracketError { position: 4, kind: UnmatchedBracketKind::Open };
        let close = BracketError { position: 0, kind: UnmatchedBracketKind::Close };
        assert_eq!(open.to_string(), "Error at ch:4: '[' without matching ']'");
        assert_eq!(close.to_string(), "Error at ch:0: ']' without matching '['");
    }

    #[test]
    fn position_is_forwarded_through_the_umbrella_error() {
        let err: Error = RuntimeError::CursorUnderflow { position: 7 }.into();
        assert_eq!(err.position(), Some(7));

        let err: Error = LoadError::EmptyProgram { path: "x.bf".into() }.into();
        assert_eq!(err.position(), None);
    }
}
