//! Trial-and-error search for magic multipliers.
//!
//! A magic for a square maps every relevant occupancy `O` to a slot
//! `(O * magic) >> (64 - shift)` of a private table of `2^shift` entries. Two occupancies may
//! share a slot only if their attacks are identical. Candidates come from any iterator of
//! `u64`, so replaying known constants and searching random ones go through the same loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bitboard::FULL;

/// Marks a slot nothing has been written to. Real attacks never cover the source square,
/// so they can never be `FULL`.
pub const EMPTY_SLOT: u64 = FULL;

/// Outcome of a successful search for one square
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicSearch {
    pub magic: u64,
    /// Private attack table of `2^shift` slots; unused slots hold [`EMPTY_SLOT`]
    pub table: Vec<u64>,
    /// Number of candidates tried, including the accepted one
    pub attempts: u64,
}

/// Slot of an already masked occupancy in a square's private table
#[inline(always)]
pub fn magic_index(occupancy: u64, magic: u64, shift: u8) -> usize {
    (occupancy.wrapping_mul(magic) >> (64 - shift)) as usize
}

/// Try candidates until one hashes `occupancies` into `2^shift` slots without conflict.
///
/// `attacks[k]` is the ground-truth attack for `occupancies[k]`. Returns `None` only if the
/// candidate iterator runs dry; with an endless source such as [`SparseRandom`] the loop
/// runs until it succeeds. There is no proven bound on the number of attempts. With sparse
/// candidates it typically takes tens to a few thousand tries per square, the corner rook
/// squares being the slowest.
pub fn find_magic<I>(occupancies: &[u64], attacks: &[u64], shift: u8, candidates: I) -> Option<MagicSearch>
where
    I: IntoIterator<Item = u64>,
{
    assert_eq!(occupancies.len(), attacks.len());
    assert!((1..=32).contains(&shift), "shift {} out of range", shift);
    assert!(
        attacks.iter().all(|&a| a != EMPTY_SLOT),
        "an attack covers the whole board and would be read as an empty slot"
    );

    let mut table = vec![EMPTY_SLOT; 1 << shift];
    for (attempts, magic) in (1u64..).zip(candidates) {
        if try_magic(occupancies, attacks, shift, magic, &mut table) {
            return Some(MagicSearch { magic, table, attempts });
        }
        table.fill(EMPTY_SLOT);
    }
    None
}

/// Fill `table` using `magic`; stops at the first slot that would need two different attacks.
fn try_magic(occupancies: &[u64], attacks: &[u64], shift: u8, magic: u64, table: &mut [u64]) -> bool {
    for (&occupancy, &attack) in occupancies.iter().zip(attacks) {
        let slot = &mut table[magic_index(occupancy, magic, shift)];
        if *slot == EMPTY_SLOT {
            *slot = attack;
        } else if *slot != attack {
            return false;
        }
    }
    true
}

/// Endless source of magic candidates biased towards few set bits.
///
/// Each candidate is the AND of three uniform draws, so a bit is set with probability 1/8.
/// Sparse multipliers find collision-free hashes far faster than uniform ones.
pub struct SparseRandom {
    rng: StdRng,
}

impl SparseRandom {
    /// Seeded from the operating system
    pub fn new() -> Self {
        SparseRandom { rng: StdRng::from_entropy() }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        SparseRandom { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn next_candidate(&mut self) -> u64 {
        self.rng.gen::<u64>() & self.rng.gen::<u64>() & self.rng.gen::<u64>()
    }
}

impl Default for SparseRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SparseRandom {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        Some(self.next_candidate())
    }
}
