//! Plain-text storage of built tables.
//!
//! Each table is stored as five files holding one hexadecimal value per line: masks, magics,
//! shifts and offsets with exactly 64 entries, plus the flat attack table. Readers accept any
//! whitespace between values and an optional `0x` prefix.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::attacks::Attacks;
use crate::bitboard::SQUARES;
use crate::error::{MagicError, Result};
use crate::table::{Magic, SliderTable};

/// File names of one piece's table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFiles {
    pub masks: &'static str,
    pub magics: &'static str,
    pub shifts: &'static str,
    pub offsets: &'static str,
    pub attack_table: &'static str,
}

pub const ROOK_FILES: TableFiles = TableFiles {
    masks: "rook_masks.magic",
    magics: "rook_magics.magic",
    shifts: "rook_shifts.magic",
    offsets: "rook_offsets.magic",
    attack_table: "rook_attack_table.magic",
};

pub const BISHOP_FILES: TableFiles = TableFiles {
    masks: "bishop_masks.magic",
    magics: "bishop_magics.magic",
    shifts: "bishop_shifts.magic",
    offsets: "bishop_offsets.magic",
    attack_table: "bishop_attack_table.magic",
};

/// Write the rook and bishop tables into `dir`, creating it if needed
pub fn write_tables(dir: &Path, attacks: &Attacks) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| MagicError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    write_table(dir, &ROOK_FILES, attacks.rook_table())?;
    write_table(dir, &BISHOP_FILES, attacks.bishop_table())
}

/// Load the rook and bishop tables written by [`write_tables`]
pub fn read_tables(dir: &Path) -> Result<Attacks> {
    Ok(Attacks::from_tables(
        read_table(dir, &ROOK_FILES)?,
        read_table(dir, &BISHOP_FILES)?,
    ))
}

pub fn write_table(dir: &Path, files: &TableFiles, table: &SliderTable) -> Result<()> {
    let magics = table.magics();
    write_hex_file(&dir.join(files.masks), magics.iter().map(|m| m.mask))?;
    write_hex_file(&dir.join(files.magics), magics.iter().map(|m| m.magic))?;
    write_hex_file(&dir.join(files.shifts), magics.iter().map(|m| m.shift as u64))?;
    write_hex_file(&dir.join(files.offsets), magics.iter().map(|m| m.offset as u64))?;
    write_hex_file(&dir.join(files.attack_table), table.attacks().iter().copied())
}

pub fn read_table(dir: &Path, files: &TableFiles) -> Result<SliderTable> {
    let masks = read_per_square(&dir.join(files.masks))?;
    let magic_numbers = read_per_square(&dir.join(files.magics))?;
    let shifts = read_per_square(&dir.join(files.shifts))?;
    let offsets = read_per_square(&dir.join(files.offsets))?;
    let attacks = read_hex_file(&dir.join(files.attack_table))?;

    let mut magics = [Magic::default(); SQUARES];
    for sq in 0..SQUARES {
        if shifts[sq] == 0 || shifts[sq] > 32 {
            return Err(MagicError::InvalidShift {
                square: sq as u8,
                shift: shifts[sq],
            });
        }
        magics[sq] = Magic {
            mask: masks[sq],
            magic: magic_numbers[sq],
            shift: shifts[sq] as u8,
            offset: usize::try_from(offsets[sq]).unwrap_or(usize::MAX),
        };
    }
    SliderTable::from_parts(magics, attacks)
}

fn write_hex_file(path: &Path, values: impl IntoIterator<Item = u64>) -> Result<()> {
    let io_err = |source| MagicError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    for value in values {
        writeln!(writer, "{:x}", value).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)
}

/// Read a whole file of whitespace-separated hex values
pub fn read_hex_file(path: &Path) -> Result<Vec<u64>> {
    let contents = fs::read_to_string(path).map_err(|source| MagicError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_hex_values(&contents).map_err(|(line, token)| MagicError::Parse {
        path: path.to_path_buf(),
        line,
        token,
    })
}

fn read_per_square(path: &Path) -> Result<[u64; SQUARES]> {
    let values = read_hex_file(path)?;
    <[u64; SQUARES]>::try_from(values.as_slice()).map_err(|_| MagicError::EntryCount {
        path: path.to_path_buf(),
        expected: SQUARES,
        found: values.len(),
    })
}

/// Parse whitespace-separated hex values; on failure returns the 1-based line and bad token
fn parse_hex_values(contents: &str) -> std::result::Result<Vec<u64>, (usize, String)> {
    let mut values = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        for token in line.split_whitespace() {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            let value = u64::from_str_radix(digits, 16).map_err(|_| (i + 1, token.to_string()))?;
            values.push(value);
        }
    }
    Ok(values)
}
