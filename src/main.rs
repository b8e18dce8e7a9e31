//! Command line front end for the magic bitboard tables.
//!
//! Usage: cargo run --release -- attacks --piece queen --square 36 --occupancy 0xF7F6F3748CA5B610
//!        cargo run --release -- generate --seed 1 --parallel
//!        cargo run --release -- dump --dir tables
//!        cargo run --release -- check --dir tables

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use magic_bits::bitboard::{parse_layout, BoardDisplay};
use magic_bits::table::BuildReport;
use magic_bits::{persist, Attacks, BuildConfig, Slider, SliderTable, ATTACKS};

#[derive(Parser, Debug)]
#[command(name = "magic_bits")]
#[command(about = "Build and query magic bitboard attack tables for sliding pieces")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the attacks of a piece for a given occupancy
    Attacks {
        #[arg(short, long, value_enum, default_value_t = Piece::Queen)]
        piece: Piece,

        /// Square index (a1 = 0, h1 = 7, h8 = 63)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..64))]
        square: u8,

        /// Occupancy bitboard in hex, e.g. 0xF7F6F3748CA5B610
        #[arg(short, long, value_parser = parse_hex, conflicts_with = "layout")]
        occupancy: Option<u64>,

        /// Occupancy as 8 rows, row 8 first, e.g. "1.11..1./.1...1.1/..."
        #[arg(short, long)]
        layout: Option<String>,
    },

    /// Search for new magic numbers and print them as Rust constants
    Generate {
        /// Seed for reproducible magics (defaults to OS entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Search squares on all cores
        #[arg(long)]
        parallel: bool,

        #[arg(short, long, value_enum, default_value_t = Target::Both)]
        piece: Target,
    },

    /// Write the rook and bishop tables as .magic text files
    Dump {
        /// Output directory
        #[arg(short, long)]
        dir: PathBuf,

        /// Search for new magics instead of using the built-in ones
        #[arg(long)]
        regenerate: bool,

        #[arg(long, requires = "regenerate")]
        seed: Option<u64>,
    },

    /// Load .magic text files and check them exhaustively
    Check {
        /// Directory holding the .magic files
        #[arg(short, long)]
        dir: PathBuf,

        /// Random positions compared against the built-in tables
        #[arg(long, default_value_t = 100_000)]
        samples: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Piece {
    Rook,
    Bishop,
    Queen,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Target {
    Rook,
    Bishop,
    Both,
}

impl Target {
    fn sliders(self) -> Vec<Slider> {
        match self {
            Target::Rook => vec![Slider::ROOK],
            Target::Bishop => vec![Slider::BISHOP],
            Target::Both => vec![Slider::ROOK, Slider::BISHOP],
        }
    }
}

fn parse_hex(s: &str) -> std::result::Result<u64, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u64::from_str_radix(digits, 16).map_err(|e| format!("`{}` is not a hex bitboard: {}", s, e))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    match args.command {
        Command::Attacks {
            piece,
            square,
            occupancy,
            layout,
        } => show_attacks(piece, square, occupancy, layout.as_deref()),
        Command::Generate {
            seed,
            parallel,
            piece,
        } => generate(seed, parallel, piece),
        Command::Dump {
            dir,
            regenerate,
            seed,
        } => dump(&dir, regenerate, seed),
        Command::Check { dir, samples } => check(&dir, samples),
    }
}

fn show_attacks(piece: Piece, square: u8, occupancy: Option<u64>, layout: Option<&str>) -> Result<()> {
    let occupied = match (occupancy, layout) {
        (Some(bb), _) => bb,
        (None, Some(layout)) => parse_layout(layout).wrap_err("invalid --layout")?,
        (None, None) => 0,
    };

    let attacks = match piece {
        Piece::Rook => ATTACKS.rook(occupied, square),
        Piece::Bishop => ATTACKS.bishop(occupied, square),
        Piece::Queen => ATTACKS.queen(occupied, square),
    };

    println!("Occupancy: {:#018x}", occupied);
    println!("{}\n", BoardDisplay(occupied));
    println!("{:?} attacks from square {}: {:#018x}", piece, square, attacks);
    println!("{}", BoardDisplay(attacks));
    Ok(())
}

fn generate(seed: Option<u64>, parallel: bool, target: Target) -> Result<()> {
    let config = BuildConfig::regenerate(seed).parallel(parallel);
    let seed_label = seed.map_or_else(|| "entropy".to_string(), |s| s.to_string());

    println!("// Generated {} (seed: {})", chrono::Utc::now().to_rfc3339(), seed_label);
    for slider in target.sliders() {
        eprintln!("Searching {} magics...", slider);
        let start = Instant::now();
        let (table, report) = SliderTable::build_with_report(&slider, &config)?;
        table
            .verify(&slider)
            .wrap_err_with(|| format!("regenerated {} table failed verification", slider))?;
        print_report(&report, start.elapsed());

        println!();
        println!("{}", format_magics(slider.name, &table.magic_numbers()));
    }
    Ok(())
}

fn print_report(report: &BuildReport, elapsed: Duration) {
    let (square, attempts) = report.hardest_square();
    eprintln!(
        "  {}: {} candidates in {:?} (hardest square {} took {})",
        report.slider,
        report.total_attempts(),
        elapsed,
        square,
        attempts
    );
}

fn format_magics(name: &str, magics: &[u64; 64]) -> String {
    let rows = magics
        .chunks(4)
        .map(|row| format!("    {},", row.iter().map(|m| format!("0x{:016X}", m)).join(", ")))
        .join("\n");
    format!("const {}_MAGICS: [u64; 64] = [\n{}\n];", name.to_uppercase(), rows)
}

fn dump(dir: &Path, regenerate: bool, seed: Option<u64>) -> Result<()> {
    let attacks = if regenerate {
        let start = Instant::now();
        let attacks = Attacks::with_config(&BuildConfig::regenerate(seed).parallel(true))?;
        eprintln!("Regenerated magics in {:?}", start.elapsed());
        attacks
    } else {
        Attacks::new()
    };

    persist::write_tables(dir, &attacks)
        .wrap_err_with(|| format!("failed to write tables to {}", dir.display()))?;
    println!("Wrote rook and bishop tables to {}", dir.display());
    Ok(())
}

fn check(dir: &Path, samples: usize) -> Result<()> {
    let loaded = persist::read_tables(dir)
        .wrap_err_with(|| format!("failed to load tables from {}", dir.display()))?;

    let start = Instant::now();
    loaded.rook_table().verify(&Slider::ROOK)?;
    loaded.bishop_table().verify(&Slider::BISHOP)?;
    eprintln!("Exhaustive check passed in {:?}", start.elapsed());

    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..samples {
        let occupied: u64 = rng.gen();
        let square = rng.gen_range(0..64u8);
        let expected = ATTACKS.queen(occupied, square);
        let found = loaded.queen(occupied, square);
        if found != expected {
            bail!(
                "square {} occupancy {:#018x}: loaded tables give {:#018x}, built-in tables give {:#018x}",
                square,
                occupied,
                found,
                expected
            );
        }
    }
    println!("{}: ok ({} random positions agree)", dir.display(), samples);
    Ok(())
}
