//! On-demand loop jump resolution.
//!
//! The interpreter does not precompute a jump table; each taken jump scans
//! the program for the partner bracket, counting nesting depth on the way.

use crate::instruction::{LOOP_CLOSE, LOOP_OPEN};

/// Position of the `]` matching the `[` at `open_pos`.
///
/// Returns `None` when the scan runs off the end of the program, which
/// cannot happen for a program that passed [`validate`](crate::validate).
pub fn find_matching_close(program: &[u8], open_pos: usize) -> Option<usize> {
    let mut depth: usize = 0;
    for (i, &b) in program.iter().enumerate().skip(open_pos) {
        if b == LOOP_OPEN {
            depth += 1;
        } else if b == LOOP_CLOSE {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Position of the `[` matching the `]` at `close_pos`, scanning backward.
pub fn find_matching_open(program: &[u8], close_pos: usize) -> Option<usize> {
    let end = close_pos.checked_add(1)?.min(program.len());
    let mut depth: usize = 0;
    for (i, &b) in program[..end].iter().enumerate().rev() {
        if b == LOOP_CLOSE {
            depth += 1;
        } else if b == LOOP_OPEN {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}
