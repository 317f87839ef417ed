//! Conversion between stars-and-bars sequences and reduced vectors.
//!
//! A reduced vector is the lower triangle of the adjacency matrix, diagonal
//! included, flattened row-major: `(0,0), (1,0), (1,1), (2,0), ...`.

use crate::error::{EnumerationError, Result};

/// Counts the zeros before every one, with a sentinel one appended so the
/// trailing zeros form the last entry.
pub fn decode(bits: &[bool]) -> Vec<usize> {
    let mut reduced = Vec::with_capacity(bits.iter().filter(|&&b| b).count() + 1);
    let mut counter = 0;
    for &bit in bits.iter().chain(std::iter::once(&true)) {
        if bit {
            reduced.push(counter);
            counter = 0;
        } else {
            counter += 1;
        }
    }
    reduced
}

/// Inverse of [`decode`]: each multiplicity becomes that many zeros followed
/// by a one, and the final (sentinel) one is dropped.
pub fn encode(reduced: &[usize]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(reduced.len() + reduced.iter().sum::<usize>());
    for &multiplicity in reduced {
        bits.extend(std::iter::repeat_n(false, multiplicity));
        bits.push(true);
    }
    bits.pop();
    bits
}

/// Number of entries in the reduced vector of a graph with `order` vertices.
pub fn reduced_len(order: usize) -> usize {
    order * (order + 1) / 2
}

/// [`reduced_len`], or `None` when it does not fit in a `usize`.
pub fn checked_reduced_len(order: usize) -> Option<usize> {
    // halve the even factor first so only the true result can overflow
    if order % 2 == 0 {
        (order / 2).checked_mul(order.checked_add(1)?)
    } else {
        order.checked_mul(order.checked_add(1)? / 2)
    }
}

/// Linear offset of `(row, col)`, `row >= col`, in a reduced vector.
pub fn triangular_index(row: usize, col: usize) -> usize {
    debug_assert!(row >= col);
    row * (row + 1) / 2 + col
}

/// Vertex count of a reduced vector of length `len`.
pub fn order_of(len: usize) -> Result<usize> {
    let estimate = (((8 * len + 1) as f64).sqrt() as usize).saturating_sub(1) / 2;
    // float sqrt can be off by one for large inputs
    (estimate.saturating_sub(1)..=estimate + 1)
        .find(|&v| reduced_len(v) == len)
        .ok_or(EnumerationError::MalformedInput { len })
}
