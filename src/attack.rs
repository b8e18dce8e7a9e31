//! Ray-casting attack generation. Slow, but it is the ground truth the magic tables must reproduce.

use crate::bitboard::sq_to_bb;
use crate::direction::Direction;

/// Squares attacked from `sq` along one direction. The walk stops on the first
/// occupied square, which is itself attacked.
pub fn ray_attack(sq: u8, direction: Direction, occupied: u64) -> u64 {
    let mut attacks = 0u64;
    for s in direction.ray(sq) {
        let target = sq_to_bb(s);
        attacks |= target;
        if occupied & target != 0 {
            break;
        }
    }
    attacks
}

/// Union of [`ray_attack`] over `directions`. `occupied` may contain any squares.
pub fn sliding_attack(sq: u8, directions: &[Direction], occupied: u64) -> u64 {
    directions
        .iter()
        .fold(0u64, |attacks, &d| attacks | ray_attack(sq, d, occupied))
}
