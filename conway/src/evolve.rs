// evolve.rs - Generation advance for standard Life (B3/S23) on a bounded board
//
// The board edge is a hard boundary: neighbours outside it count as dead.

use rayon::prelude::*;

use crate::board::Board;
use crate::coords::{NEIGHBOR_OFFSETS, offset_within};

/// Number of live cells among the 8 neighbours of `(x, y)`.
pub fn live_neighbors(board: &Board, x: usize, y: usize) -> u8 {
    let (width, height) = (board.width(), board.height());
    let mut count = 0;
    for &offset in &NEIGHBOR_OFFSETS {
        if let Some((nx, ny)) = offset_within(x, y, offset, width, height) {
            if board.get(nx, ny) {
                count += 1;
            }
        }
    }
    count
}

/// The Life rule.
#[inline]
pub fn next_state(alive: bool, count: u8) -> bool {
    match (alive, count) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Death or stays dead
    }
}

/// Writes the generation after `current` into `next`.
///
/// Rows are computed in parallel; each worker reads only `current` and
/// writes only its own row of `next`. If `next` has a different shape it is
/// reallocated to match. The caller swaps the two boards afterwards.
pub fn step(current: &Board, next: &mut Board) {
    if !next.same_shape(current) {
        *next = Board::new(current.width(), current.height());
    }
    let width = current.width();
    if width == 0 || current.is_empty() {
        return;
    }

    next.cells_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                let count = live_neighbors(current, x, y);
                *cell = next_state(current.get(x, y), count);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(board: &mut Board, scratch: &mut Board, generations: usize) {
        for _ in 0..generations {
            step(board, scratch);
            std::mem::swap(board, scratch);
        }
    }

    #[test]
    fn test_rule_table() {
        for count in 0..=8 {
            assert_eq!(count == 2 || count == 3, next_state(true, count), "alive, {}", count);
            assert_eq!(count == 3, next_state(false, count), "dead, {}", count);
        }
    }

    #[test]
    fn test_neighbors_at_edges() {
        let mut board = Board::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                board.set(x, y, true);
            }
        }
        assert_eq!(3, live_neighbors(&board, 0, 0));
        assert_eq!(5, live_neighbors(&board, 1, 0));
        assert_eq!(8, live_neighbors(&board, 1, 1));
        assert_eq!(3, live_neighbors(&board, 2, 2));
    }

    #[test]
    fn test_blinker_period_two() {
        let mut board = Board::new(5, 5);
        for x in 1..4 {
            board.set(x, 2, true);
        }
        let horizontal = board.clone();
        let mut scratch = Board::new(5, 5);

        advance(&mut board, &mut scratch, 1);
        let mut vertical = Board::new(5, 5);
        for y in 1..4 {
            vertical.set(2, y, true);
        }
        assert_eq!(vertical, board);

        advance(&mut board, &mut scratch, 1);
        assert_eq!(horizontal, board);
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let mut board = Board::new(8, 8);
        for &(x, y) in &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            board.set(x, y, true);
        }
        let mut scratch = Board::new(8, 8);
        advance(&mut board, &mut scratch, 4);

        let mut expected = Board::new(8, 8);
        for &(x, y) in &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)] {
            expected.set(x, y, true);
        }
        assert_eq!(expected, board);
    }

    #[test]
    fn test_edges_are_not_toroidal() {
        // A block in the corner is stable; with wraparound it would not be.
        let mut board = Board::new(4, 4);
        for &(x, y) in &[(0, 0), (1, 0), (0, 1), (1, 1), (3, 3)] {
            board.set(x, y, true);
        }
        let mut scratch = Board::new(4, 4);
        advance(&mut board, &mut scratch, 1);
        assert_eq!(4, board.population());
        assert!(!board.get(3, 3));
    }

    #[test]
    fn test_step_reshapes_next() {
        let mut board = Board::new(6, 2);
        board.set(1, 0, true);
        let mut next = Board::new(1, 1);
        step(&board, &mut next);
        assert!(next.same_shape(&board));
        assert_eq!(0, next.population());

        let empty = Board::new(0, 4);
        step(&empty, &mut next);
        assert!(next.is_empty());
    }
}
