pub mod error;
pub mod bitboard;
pub mod direction;
pub mod occupancy;
pub mod attack;
pub mod slider;
pub mod magic;
pub mod config;
pub mod table;
pub mod attacks;
pub mod persist;

pub use attacks::{bishop_attacks, queen_attacks, rook_attacks, Attacks, ATTACKS};
pub use config::{BuildConfig, MagicSource};
pub use error::{MagicError, Result};
pub use slider::Slider;
pub use table::{Magic, SliderTable};
