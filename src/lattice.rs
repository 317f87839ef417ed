//! Stars-and-bars lattice: every binary sequence of length `n` with exactly
//! `k` ones, produced lazily in decreasing lexicographic order.

use crate::error::{EnumerationError, Result};

/// Lazy generator of all `n`-long binary sequences containing `k` ones.
///
/// The first sequence is `1^k 0^(n-k)`; each following one is derived from
/// the previous in place, so only the current sequence is held in memory.
#[derive(Debug, Clone)]
pub struct BinarySequences {
    choice: Option<Vec<bool>>,
    fresh: bool,
}

impl BinarySequences {
    pub fn new(n: usize, k: usize) -> Result<Self> {
        if k > n {
            return Err(EnumerationError::InvalidArgument(format!(
                "cannot place {k} ones in a sequence of length {n}"
            )));
        }
        let mut choice = vec![false; n];
        choice[..k].fill(true);
        Ok(Self {
            choice: Some(choice),
            fresh: true,
        })
    }
}

impl Iterator for BinarySequences {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Vec<bool>> {
        if self.fresh {
            self.fresh = false;
            return self.choice.clone();
        }
        let choice = self.choice.as_mut()?;
        if advance(choice) {
            Some(choice.clone())
        } else {
            self.choice = None;
            None
        }
    }
}

/// Steps `choice` to the next combination. Returns false once exhausted.
fn advance(choice: &mut [bool]) -> bool {
    // trailing ones after the last zero
    let mut one_count = 0;
    let mut last_zero = None;
    for (i, &bit) in choice.iter().enumerate().rev() {
        if bit {
            one_count += 1;
        } else {
            last_zero = Some(i);
            break;
        }
    }
    let Some(last_zero) = last_zero else {
        return false;
    };
    let Some(last_one) = choice[..last_zero].iter().rposition(|&bit| bit) else {
        return false;
    };

    // move that one right by a slot and pack the trailing ones behind it
    choice[last_one] = false;
    for (offset, slot) in choice[last_one + 1..].iter_mut().enumerate() {
        *slot = offset <= one_count;
    }
    true
}

/// `C(n, k)`, or `None` when the value does not fit in a `u64`.
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    let mut acc: u128 = 1;
    for i in 0..k {
        // exact at every step: acc holds C(n - k + i + 1, i + 1)
        acc = acc * u128::from(n - k + i + 1) / u128::from(i + 1);
        if acc > u128::from(u64::MAX) {
            return None;
        }
    }
    u64::try_from(acc).ok()
}
