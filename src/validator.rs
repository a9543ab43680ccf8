//! Static bracket check run before any instruction executes.

use crate::error::{BracketError, UnmatchedBracketKind};
use crate::instruction::{LOOP_CLOSE, LOOP_OPEN};

/// Verify that every `[` has a matching `]` and vice versa.
///
/// The first `]` with nothing to close is reported at its own position.
/// If opens are still pending at the end, the most recent one is reported.
/// Comment bytes are ignored.
pub fn validate(program: &[u8]) -> Result<(), BracketError> {
    let mut stack: Vec<usize> = Vec::new();

    for (i, &b) in program.iter().enumerate() {
        if b == LOOP_OPEN {
            stack.push(i);
        } else if b == LOOP_CLOSE {
            if stack.pop().is_none() {
                return Err(BracketError {
                    position: i,
                    kind: UnmatchedBracketKind::Close,
                });
            }
        }
    }

    if let Some(unmatched_open) = stack.last().copied() {
        return Err(BracketError {
            position: unmatched_open,
            kind: UnmatchedBracketKind::Open,
        });
    }

    log::debug!("bracket validation passed ({} bytes)", program.len());
    Ok(())
}
