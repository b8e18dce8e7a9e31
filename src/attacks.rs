//! O(1) rook, bishop and queen attack queries.
//!
//! A query masks the occupancy to the square's relevant squares, multiplies by the magic,
//! keeps the top `shift` bits and reads the flat table. Square bounds are not checked but it
//! is expected that `sq < 64`.

use once_cell::sync::Lazy;

use crate::config::BuildConfig;
use crate::error::Result;
use crate::slider::Slider;
use crate::table::SliderTable;

/// Rook and bishop attack tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attacks {
    rook: SliderTable,
    bishop: SliderTable,
}

impl Attacks {
    /// Tables built from the built-in magic numbers
    pub fn new() -> Self {
        Self::with_config(&BuildConfig::default()).expect("built-in magics are collision-free")
    }

    pub fn with_config(config: &BuildConfig) -> Result<Self> {
        Ok(Attacks {
            rook: SliderTable::build(&Slider::ROOK, config)?,
            bishop: SliderTable::build(&Slider::BISHOP, config)?,
        })
    }

    pub fn from_tables(rook: SliderTable, bishop: SliderTable) -> Self {
        Attacks { rook, bishop }
    }

    /// Get rook attacks using magic lookup
    #[inline(always)]
    pub fn rook(&self, occupied: u64, sq: u8) -> u64 {
        self.rook.lookup(occupied, sq)
    }

    /// Get bishop attacks using magic lookup
    #[inline(always)]
    pub fn bishop(&self, occupied: u64, sq: u8) -> u64 {
        self.bishop.lookup(occupied, sq)
    }

    /// Get queen attacks (combines rook and bishop)
    #[inline(always)]
    pub fn queen(&self, occupied: u64, sq: u8) -> u64 {
        self.rook(occupied, sq) | self.bishop(occupied, sq)
    }

    pub fn rook_table(&self) -> &SliderTable {
        &self.rook
    }

    pub fn bishop_table(&self) -> &SliderTable {
        &self.bishop
    }
}

impl Default for Attacks {
    fn default() -> Self {
        Self::new()
    }
}

/// Global attack tables built from the built-in magics (lazily initialized at runtime)
pub static ATTACKS: Lazy<Attacks> = Lazy::new(Attacks::new);

/// Get rook attacks using the global tables
#[inline(always)]
pub fn rook_attacks(occupied: u64, sq: u8) -> u64 {
    ATTACKS.rook(occupied, sq)
}

/// Get bishop attacks using the global tables
#[inline(always)]
pub fn bishop_attacks(occupied: u64, sq: u8) -> u64 {
    ATTACKS.bishop(occupied, sq)
}

/// Get queen attacks using the global tables
#[inline(always)]
pub fn queen_attacks(occupied: u64, sq: u8) -> u64 {
    ATTACKS.queen(occupied, sq)
}
