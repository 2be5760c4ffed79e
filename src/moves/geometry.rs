//! Precomputed per-square geometry.
//!
//! `DISTANCE_TO_EDGE` bounds sliding scans without per-step bounds checks and
//! `FILE_RANK` gives O(1) adjacency tests that reject raw index offsets which
//! wrap across a board edge. Both are pure functions of the 8x8 topology and
//! are built at compile time.

use crate::game_state::chess_types::Square;

pub const NORTH: usize = 0;
pub const SOUTH: usize = 1;
pub const EAST: usize = 2;
pub const WEST: usize = 3;
pub const NORTH_WEST: usize = 4;
pub const SOUTH_EAST: usize = 5;
pub const NORTH_EAST: usize = 6;
pub const SOUTH_WEST: usize = 7;

/// Square index deltas, in the same order as `DISTANCE_TO_EDGE` entries.
/// Orthogonal directions come first, diagonals after.
pub const DIRECTION_OFFSETS: [i8; 8] = [-8, 8, 1, -1, -9, 9, -7, 7];

pub const ORTHOGONAL_DIRECTIONS: core::ops::Range<usize> = 0..4;
pub const DIAGONAL_DIRECTIONS: core::ops::Range<usize> = 4..8;
pub const ALL_DIRECTIONS: core::ops::Range<usize> = 0..8;

/// L-shaped knight jumps as raw index deltas.
pub const KNIGHT_OFFSETS: [i8; 8] = [
    -16 - 1,
    -16 + 1,
    2 - 8,
    2 + 8,
    16 + 1,
    16 - 1,
    -2 + 8,
    -2 - 8,
];

pub const DISTANCE_TO_EDGE: [[u8; 8]; 64] = generate_distance_to_edge();
pub const FILE_RANK: [(u8, u8); 64] = generate_file_rank();

#[inline]
pub const fn distance_to_edge(square: Square, direction: usize) -> u8 {
    DISTANCE_TO_EDGE[square as usize][direction]
}

/// `(file, row-from-top)` of a square.
#[inline]
pub const fn file_rank(square: Square) -> (u8, u8) {
    FILE_RANK[square as usize]
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    FILE_RANK[square as usize].0
}

#[inline]
pub const fn row_of(square: Square) -> u8 {
    FILE_RANK[square as usize].1
}

/// Adds a raw index offset, rejecting results off the board.
#[inline]
pub const fn offset_square(square: Square, offset: i8) -> Option<Square> {
    let target = square as i16 + offset as i16;
    if target < 0 || target > 63 {
        None
    } else {
        Some(target as Square)
    }
}

/// Offsets `square` and keeps the result only if it stays within
/// `max_step` files and rows of the origin.
#[inline]
pub const fn offset_within(square: Square, offset: i8, max_step: u8) -> Option<Square> {
    match offset_square(square, offset) {
        Some(target) => {
            let (file, row) = file_rank(square);
            let (target_file, target_row) = file_rank(target);
            if file.abs_diff(target_file) <= max_step && row.abs_diff(target_row) <= max_step {
                Some(target)
            } else {
                None
            }
        }
        None => None,
    }
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b {
        a
    } else {
        b
    }
}

const fn generate_distance_to_edge() -> [[u8; 8]; 64] {
    let mut table = [[0u8; 8]; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as u8;
        let row = (sq / 8) as u8;

        let north = row;
        let south = 7 - row;
        let east = 7 - file;
        let west = file;

        table[sq] = [
            north,
            south,
            east,
            west,
            min(north, west),
            min(south, east),
            min(north, east),
            min(south, west),
        ];
        sq += 1;
    }

    table
}

const fn generate_file_rank() -> [(u8, u8); 64] {
    let mut table = [(0u8, 0u8); 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = ((sq % 8) as u8, (sq / 8) as u8);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_distances() {
        // a8
        assert_eq!(DISTANCE_TO_EDGE[0], [0, 7, 7, 0, 0, 7, 0, 0]);
        // h1
        assert_eq!(DISTANCE_TO_EDGE[63], [7, 0, 0, 7, 7, 0, 0, 0]);
    }

    #[test]
    fn walking_to_the_edge_stays_on_the_board() {
        for sq in 0..64u8 {
            for dir in ALL_DIRECTIONS {
                let steps = distance_to_edge(sq, dir) as i16;
                let last = sq as i16 + DIRECTION_OFFSETS[dir] as i16 * steps;
                assert!((0..64).contains(&last), "square {sq} direction {dir}");
                let (f0, r0) = file_rank(sq);
                let (f1, r1) = file_rank(last as u8);
                assert!((f0.abs_diff(f1) as i16) <= steps && (r0.abs_diff(r1) as i16) <= steps);
            }
        }
    }

    #[test]
    fn offset_within_rejects_file_wraparound() {
        // h5 (31) + 1 would land on a4 (32)
        assert_eq!(offset_within(31, 1, 1), None);
        // a7 (8) knight jump -2+8 wraps around to g7
        assert_eq!(offset_within(8, -2 + 8, 2), None);
        assert_eq!(offset_within(8, 2 + 8, 2), Some(18));
        assert_eq!(offset_square(3, -8), None);
    }
}
