//! Relevant occupancy masks and enumeration of every blocker configuration they allow.

use itertools::iproduct;

use crate::bitboard::sq_to_bb;
use crate::direction::Direction;

/// Squares strictly between `sq` and the edge along `direction`, nearest first.
/// The edge square never changes the attack, so it is left out.
pub fn relevant_squares(sq: u8, direction: Direction) -> impl Iterator<Item = u8> {
    let n = direction.edge_distance(sq).saturating_sub(1);
    direction.ray(sq).take(n as usize)
}

/// Every square whose occupancy can change the attack from `sq` along `directions`.
pub fn relevant_mask(sq: u8, directions: &[Direction]) -> u64 {
    directions
        .iter()
        .flat_map(|&d| relevant_squares(sq, d))
        .fold(0u64, |mask, s| mask | sq_to_bb(s))
}

/// All occupancies of the relevant squares along one direction.
///
/// Bit `k` of a counter running over `0..2^n` decides whether the `k`-th square
/// in ray order is occupied. For example, direction = NorthWest, sq = 29 (X)
/// enumerates the 8 combinations of the squares marked #:
///
/// ```text
/// 8 | . . . . . . . .
/// 7 | . . # . . . . .
/// 6 | . . . # . . . .
/// 5 | . . . . # . . .
/// 4 | . . . . . X . .
/// 3 | . . . . . . . .
/// 2 | . . . . . . . .
/// 1 | . . . . . . . .
/// ```
///
/// With no relevant squares the only occupancy is the empty board.
pub fn ray_occupancies(sq: u8, direction: Direction) -> Vec<u64> {
    let squares: Vec<u8> = relevant_squares(sq, direction).collect();
    (0u32..1 << squares.len())
        .map(|counter| {
            squares
                .iter()
                .enumerate()
                .filter(|(k, _)| counter & (1 << k) != 0)
                .fold(0u64, |bb, (_, &s)| bb | sq_to_bb(s))
        })
        .collect()
}

/// All occupancies of the relevant mask of `sq` over `directions`.
///
/// Per-direction occupancies are combined as a cross product of unions. The
/// directions' masks are disjoint, so the result holds each of the
/// `2^popcount(mask)` subsets exactly once.
pub fn occupancies(sq: u8, directions: &[Direction]) -> Vec<u64> {
    directions
        .iter()
        .map(|&d| ray_occupancies(sq, d))
        .filter(|ray| ray.len() > 1)
        .fold(vec![0u64], |acc, ray| {
            iproduct!(ray.iter(), acc.iter())
                .map(|(r, o)| r | o)
                .collect()
        })
}
