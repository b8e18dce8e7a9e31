//! Ray geometry over square indices.

use crate::bitboard::{row_col_to_sq, sq_col, sq_row};

/// One of the eight compass rays a sliding piece can move along.
/// North increases the row, east increases the column.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Rook directions
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Bishop directions
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Queen directions
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// (row, col) step
    #[inline]
    const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (1, -1),
            Direction::SouthEast => (-1, 1),
            Direction::SouthWest => (-1, -1),
        }
    }

    /// Square one step along this direction, or `None` if the step leaves the board.
    #[inline]
    pub fn next_square(self, sq: u8) -> Option<u8> {
        let (dr, dc) = self.delta();
        let row = sq_row(sq) as i8 + dr;
        let col = sq_col(sq) as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(row_col_to_sq(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Number of steps from `sq` to the last square on the board along this direction.
    pub fn edge_distance(self, sq: u8) -> u8 {
        let row = sq_row(sq);
        let col = sq_col(sq);
        let inv = |x: u8| 7 - x;

        let d = match self {
            Direction::North => inv(row),
            Direction::South => row,
            Direction::East => inv(col),
            Direction::West => col,
            Direction::NorthEast => inv(row).min(inv(col)),
            Direction::NorthWest => inv(row).min(col),
            Direction::SouthEast => row.min(inv(col)),
            Direction::SouthWest => row.min(col),
        };
        debug_assert!(d <= 7);
        d
    }

    /// Squares visited walking away from `sq` until the edge, nearest first. `sq` itself is excluded.
    pub fn ray(self, sq: u8) -> impl Iterator<Item = u8> {
        std::iter::successors(self.next_square(sq), move |&s| self.next_square(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_square_interior() {
        // e4 = 28
        assert_eq!(Direction::North.next_square(28), Some(36));
        assert_eq!(Direction::South.next_square(28), Some(20));
        assert_eq!(Direction::East.next_square(28), Some(29));
        assert_eq!(Direction::West.next_square(28), Some(27));
        assert_eq!(Direction::NorthEast.next_square(28), Some(37));
        assert_eq!(Direction::NorthWest.next_square(28), Some(35));
        assert_eq!(Direction::SouthEast.next_square(28), Some(21));
        assert_eq!(Direction::SouthWest.next_square(28), Some(19));
    }

    #[test]
    fn test_next_square_does_not_wrap() {
        // h1 east would be a2 if columns wrapped
        assert_eq!(Direction::East.next_square(7), None);
        assert_eq!(Direction::NorthEast.next_square(7), None);
        assert_eq!(Direction::West.next_square(8), None);
        assert_eq!(Direction::South.next_square(3), None);
        assert_eq!(Direction::North.next_square(60), None);
        assert_eq!(Direction::SouthWest.next_square(0), None);
    }

    #[test]
    fn test_edge_distance() {
        assert_eq!(Direction::North.edge_distance(0), 7);
        assert_eq!(Direction::South.edge_distance(0), 0);
        assert_eq!(Direction::NorthEast.edge_distance(0), 7);
        // f4 = 29: row 3, col 5
        assert_eq!(Direction::NorthWest.edge_distance(29), 4);
        assert_eq!(Direction::NorthEast.edge_distance(29), 2);
        assert_eq!(Direction::SouthEast.edge_distance(29), 2);
        assert_eq!(Direction::SouthWest.edge_distance(29), 3);
    }

    #[test]
    fn test_ray_length_matches_edge_distance() {
        for sq in 0..64u8 {
            for dir in Direction::ALL {
                assert_eq!(dir.ray(sq).count(), dir.edge_distance(sq) as usize, "sq={} dir={:?}", sq, dir);
            }
        }
    }

    #[test]
    fn test_ray_order() {
        let squares: Vec<u8> = Direction::NorthWest.ray(29).collect();
        assert_eq!(squares, vec![36, 43, 50, 57]);
    }
}
