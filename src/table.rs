//! Per-square magic records and the flat attack table of one sliding piece.

use rayon::prelude::*;

use crate::bitboard::SQUARES;
use crate::config::BuildConfig;
use crate::error::{MagicError, Result};
use crate::magic::{find_magic, magic_index, MagicSearch};
use crate::slider::Slider;

/// Everything needed to find the attacks of one square in the flat table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Magic {
    /// Relevant occupancy mask
    pub mask: u64,
    /// Multiplier hashing masked occupancies to slots
    pub magic: u64,
    /// Number of hash bits kept; the square owns `2^shift` slots
    pub shift: u8,
    /// First slot of the square in the flat table
    pub offset: usize,
}

impl Magic {
    /// Flat table index for a full-board occupancy
    #[inline(always)]
    pub fn index(&self, occupied: u64) -> usize {
        magic_index(occupied & self.mask, self.magic, self.shift) + self.offset
    }

    #[inline]
    pub fn table_len(&self) -> usize {
        1 << self.shift
    }
}

/// Magic search statistics for one table build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub slider: &'static str,
    /// Candidates tried per square
    pub attempts: Vec<u64>,
}

impl BuildReport {
    pub fn total_attempts(&self) -> u64 {
        self.attempts.iter().sum()
    }

    /// Square that needed the most candidates, with its count
    pub fn hardest_square(&self) -> (u8, u64) {
        self.attempts
            .iter()
            .enumerate()
            .max_by_key(|&(_, &a)| a)
            .map(|(sq, &a)| (sq as u8, a))
            .unwrap_or((0, 0))
    }
}

/// Magic records of all 64 squares plus their private tables concatenated in square order.
/// Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderTable {
    magics: [Magic; SQUARES],
    attacks: Vec<u64>,
}

impl SliderTable {
    pub fn build(slider: &Slider, config: &BuildConfig) -> Result<Self> {
        Self::build_with_report(slider, config).map(|(table, _)| table)
    }

    /// Find a magic for every square and assemble the flat table
    pub fn build_with_report(slider: &Slider, config: &BuildConfig) -> Result<(Self, BuildReport)> {
        let searches: Vec<MagicSearch> = if config.parallel {
            (0..SQUARES as u8)
                .into_par_iter()
                .map(|sq| search_square(slider, config, sq))
                .collect::<Result<_>>()?
        } else {
            (0..SQUARES as u8)
                .map(|sq| search_square(slider, config, sq))
                .collect::<Result<_>>()?
        };

        let mut magics = [Magic::default(); SQUARES];
        let mut attacks = Vec::with_capacity(slider.shifts.iter().map(|&s| 1usize << s).sum());
        let mut report = BuildReport {
            slider: slider.name,
            attempts: Vec::with_capacity(SQUARES),
        };

        for (sq, search) in searches.into_iter().enumerate() {
            magics[sq] = Magic {
                mask: slider.relevant_mask(sq as u8),
                magic: search.magic,
                shift: slider.shifts[sq],
                offset: attacks.len(),
            };
            attacks.extend_from_slice(&search.table);
            report.attempts.push(search.attempts);
        }

        Ok((SliderTable { magics, attacks }, report))
    }

    /// Reassemble a table from stored parts, checking that every square's slots are in bounds
    pub fn from_parts(magics: [Magic; SQUARES], attacks: Vec<u64>) -> Result<Self> {
        for (sq, m) in magics.iter().enumerate() {
            if !(1..=32).contains(&m.shift) {
                return Err(MagicError::InvalidShift {
                    square: sq as u8,
                    shift: m.shift as u64,
                });
            }
            let end = m.offset.checked_add(m.table_len());
            if end.map_or(true, |end| end > attacks.len()) {
                return Err(MagicError::TableBounds {
                    square: sq as u8,
                    offset: m.offset,
                    end: end.unwrap_or(usize::MAX),
                    len: attacks.len(),
                });
            }
        }
        Ok(SliderTable { magics, attacks })
    }

    #[inline(always)]
    pub fn lookup(&self, occupied: u64, sq: u8) -> u64 {
        self.attacks[self.magics[sq as usize].index(occupied)]
    }

    pub fn magics(&self) -> &[Magic; SQUARES] {
        &self.magics
    }

    pub fn attacks(&self) -> &[u64] {
        &self.attacks
    }

    /// Magic numbers only, in square order
    pub fn magic_numbers(&self) -> [u64; SQUARES] {
        self.magics.map(|m| m.magic)
    }

    /// Check every relevant occupancy of every square against ray casting.
    ///
    /// This also proves the table has no conflicting collisions, since each occupancy reads
    /// back its own attack.
    pub fn verify(&self, slider: &Slider) -> Result<()> {
        for sq in 0..SQUARES as u8 {
            for occupancy in slider.occupancies(sq) {
                let expected = slider.attack(sq, occupancy);
                let found = self.lookup(occupancy, sq);
                if found != expected {
                    return Err(MagicError::Mismatch {
                        slider: slider.name,
                        square: sq,
                        occupancy,
                        expected,
                        found,
                    });
                }
            }
        }
        Ok(())
    }
}

fn search_square(slider: &Slider, config: &BuildConfig, sq: u8) -> Result<MagicSearch> {
    let occupancies = slider.occupancies(sq);
    let attacks: Vec<u64> = occupancies.iter().map(|&o| slider.attack(sq, o)).collect();
    let candidates = config.source.candidates(slider, sq);
    find_magic(&occupancies, &attacks, slider.shifts[sq as usize], candidates).ok_or(
        MagicError::CandidatesExhausted {
            slider: slider.name,
            square: sq,
        },
    )
}
