//! Square and bitboard helpers.
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the board.
//! Square indexing: bit `i` is square `i`, with `row = i / 8` and `col = i % 8`.
//! Row 0 is the first rank and column 0 the first file, so a1 = 0, h1 = 7, a8 = 56, h8 = 63.

use std::fmt;

use crate::error::{MagicError, Result};

/// Number of squares on the board
pub const SQUARES: usize = 64;

/// Bitboard with every square set. No rook or bishop attack can ever equal it.
pub const FULL: u64 = !0;

/// Convert a square index to a bitboard with that single bit set
#[inline(always)]
pub const fn sq_to_bb(sq: u8) -> u64 {
    1u64 << sq
}

/// Get the row (0-7) from a square index
#[inline(always)]
pub const fn sq_row(sq: u8) -> u8 {
    sq >> 3
}

/// Get the column (0-7) from a square index
#[inline(always)]
pub const fn sq_col(sq: u8) -> u8 {
    sq & 7
}

/// Convert a 0-indexed row and column to a square index
#[inline(always)]
pub const fn row_col_to_sq(row: u8, col: u8) -> u8 {
    row * 8 + col
}

/// Iterate over set bits in a bitboard, returning square indices
pub struct BitboardIter(pub u64);

impl Iterator for BitboardIter {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let sq = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1; // Clear the lowest set bit
            Some(sq)
        }
    }
}

/// Renders a bitboard as an 8x8 grid, row 8 at the top and column a on the left.
///
/// ```text
/// 8 | . . . 1 . . . 1
/// ...
/// 1 | . . . . . . . .
///   +----------------
///     a b c d e f g h
/// ```
pub struct BoardDisplay(pub u64);

impl fmt::Display for BoardDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            write!(f, "{} |", row + 1)?;
            for col in 0..8u8 {
                let set = self.0 & sq_to_bb(row_col_to_sq(row, col)) != 0;
                write!(f, " {}", if set { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  +----------------")?;
        write!(f, "    a b c d e f g h")
    }
}

/// Parse a board layout written row 8 first, e.g. `"1.11..1./.1...1.1/..."`.
///
/// Rows are separated by `/` or whitespace. `1`, `x` and `X` mark occupied squares,
/// `.` and `0` empty ones. Exactly 8 rows of 8 squares are required.
pub fn parse_layout(layout: &str) -> Result<u64> {
    let rows: Vec<&str> = layout
        .split(|c: char| c == '/' || c.is_whitespace())
        .filter(|r| !r.is_empty())
        .collect();
    if rows.len() != 8 {
        return Err(MagicError::Layout(format!("expected 8 rows, found {}", rows.len())));
    }

    let mut bb = 0u64;
    for (i, row_str) in rows.iter().enumerate() {
        let row = 7 - i as u8;
        if row_str.chars().count() != 8 {
            return Err(MagicError::Layout(format!(
                "row {} `{}` does not have 8 squares",
                row + 1,
                row_str
            )));
        }
        for (col, c) in row_str.chars().enumerate() {
            match c {
                '1' | 'x' | 'X' => bb |= sq_to_bb(row_col_to_sq(row, col as u8)),
                '.' | '0' => {}
                other => {
                    return Err(MagicError::Layout(format!(
                        "unexpected character `{}` in row {}",
                        other,
                        row + 1
                    )))
                }
            }
        }
    }
    Ok(bb)
}
