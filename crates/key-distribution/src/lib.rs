//! Key-distribution puzzle.
//!
//! A group of `holders` participants guards a set of locks that only open
//! when every key is present. [`distribute`] assigns numbered keys so that
//! any `required` participants together hold every key, while any group of
//! fewer than `required` is always missing at least one.
//!
//! The construction is tight: every key must survive the absence of any
//! `required - 1` participants, so each key goes to exactly
//! `holders - required + 1` of them, one key per way of choosing the
//! `required - 1` participants who are left out. Keys are numbered in
//! ascending order of that left-out set, holder 0 at the most significant
//! bit, which keeps each keyring sorted and the whole assignment canonical.

use puzzle_core::PuzzleError;

pub const MAX_HOLDERS: usize = 9;

/// Returns each holder's ascending key list.
pub fn distribute(holders: usize, required: usize) -> Result<Vec<Vec<usize>>, PuzzleError> {
    if holders == 0 || holders > MAX_HOLDERS {
        return Err(PuzzleError::HolderCountOutOfRange(holders));
    }
    if required > holders {
        return Err(PuzzleError::RequiredExceedsHolders { required, holders });
    }
    if required == 0 {
        return Ok(vec![Vec::new(); holders]);
    }

    let full = (1u32 << holders) - 1;
    let mut keyrings = vec![Vec::new(); holders];
    let mut key = 0;
    for leave_out in 0..=full {
        if leave_out.count_ones() as usize != required - 1 {
            continue;
        }
        let column = full & !leave_out;
        for (b, keyring) in keyrings.iter_mut().enumerate() {
            if column & (1 << (holders - 1 - b)) != 0 {
                keyring.push(key);
            }
        }
        key += 1;
    }
    Ok(keyrings)
}
