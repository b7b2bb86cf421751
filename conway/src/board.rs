// board.rs - The live cell grid: dimensions, cell access, resizing and pattern placement

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::coords::to_index;
use crate::rle::Pattern;

/// Row-major grid of cells. Coordinates outside `[0, width) x [0, height)`
/// read as dead and ignore writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn same_shape(&self, other: &Board) -> bool {
        self.width == other.width && self.height == other.height
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.contains(x, y) && self.cells[to_index(x, y, self.width)]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if self.contains(x, y) {
            self.cells[to_index(x, y, self.width)] = alive;
        }
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        if self.contains(x, y) {
            let i = to_index(x, y, self.width);
            self.cells[i] = !self.cells[i];
        }
    }

    /// One row of cells; `y` must be in range.
    pub fn row(&self, y: usize) -> &[bool] {
        let start = to_index(0, y, self.width);
        &self.cells[start..start + self.width]
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Changes the dimensions, keeping every cell whose coordinate exists in
    /// both the old and new shape at the same `(x, y)`.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        if new_width == self.width && new_height == self.height {
            return;
        }
        let mut cells = vec![false; new_width * new_height];
        let keep_w = self.width.min(new_width);
        let keep_h = self.height.min(new_height);
        for y in 0..keep_h {
            let old = to_index(0, y, self.width);
            let new = to_index(0, y, new_width);
            cells[new..new + keep_w].copy_from_slice(&self.cells[old..old + keep_w]);
        }
        self.width = new_width;
        self.height = new_height;
        self.cells = cells;
    }

    /// Stamps `pattern` with its top-left cell at `(anchor_x, anchor_y)`.
    /// Pattern cells landing outside the board are clipped.
    pub fn place(&mut self, pattern: &Pattern, anchor_x: isize, anchor_y: isize) {
        for (py, row) in pattern.rows().enumerate() {
            let Some(y) = anchor_y.checked_add_unsigned(py).and_then(|y| usize::try_from(y).ok())
            else {
                continue;
            };
            if y >= self.height {
                break;
            }
            for (px, &alive) in row.iter().enumerate() {
                let Some(x) = anchor_x.checked_add_unsigned(px).and_then(|x| usize::try_from(x).ok())
                else {
                    continue;
                };
                if x >= self.width {
                    break;
                }
                self.cells[to_index(x, y, self.width)] = alive;
            }
        }
    }

    /// Anchor that centers `pattern` on the board. Negative when the pattern
    /// is larger than the board along that axis.
    pub fn centered_anchor(&self, pattern: &Pattern) -> (isize, isize) {
        let center = |board: usize, pat: usize| (board / 2) as isize - (pat / 2) as isize;
        (
            center(self.width, pattern.width()),
            center(self.height, pattern.height()),
        )
    }

    pub fn place_centered(&mut self, pattern: &Pattern) {
        let (x, y) = self.centered_anchor(pattern);
        self.place(pattern, x, y);
    }

    /// Fills the board with a deterministic pseudo-random soup, roughly one
    /// live cell in three.
    pub fn randomize(&mut self, seed_value: u64) {
        let mut hasher = DefaultHasher::new();
        seed_value.hash(&mut hasher);
        let mut seed = hasher.finish();

        for cell in &mut self.cells {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            *cell = (seed >> 33) % 3 == 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(width: usize, height: usize, live: &[(usize, usize)]) -> Board {
        let mut board = Board::new(width, height);
        for &(x, y) in live {
            board.set(x, y, true);
        }
        board
    }

    fn live_cells(board: &Board) -> Vec<(usize, usize)> {
        let mut ret = vec![];
        for y in 0..board.height() {
            for x in 0..board.width() {
                if board.get(x, y) {
                    ret.push((x, y));
                }
            }
        }
        ret
    }

    #[test]
    fn test_resize_keeps_coordinates() {
        let mut board = board_from(4, 3, &[(0, 0), (3, 0), (1, 2), (3, 2)]);

        // Wider: cells stay at the same (x, y), not the same linear index.
        board.resize(6, 3);
        assert_eq!(18, board.len());
        assert_eq!(vec![(0, 0), (3, 0), (1, 2), (3, 2)], live_cells(&board));

        // Narrower and shorter: cells outside the overlap are dropped.
        board.resize(2, 2);
        assert_eq!(vec![(0, 0)], live_cells(&board));

        board.resize(0, 0);
        assert!(board.is_empty());
        board.resize(3, 3);
        assert_eq!(0, board.population());
    }

    #[test]
    fn test_resize_grow_and_back() {
        let original = board_from(5, 4, &[(1, 1), (2, 1), (4, 3), (0, 3)]);
        let mut board = original.clone();
        board.resize(9, 11);
        board.resize(5, 4);
        assert_eq!(original, board);
    }

    #[test]
    fn test_place_clips_on_every_side() {
        let block: Pattern = "x = 2, y = 2\n2o$2o!".parse().unwrap();

        for &(ax, ay) in &[(-1, -1), (2, -1), (-1, 2), (2, 2)] {
            let mut board = Board::new(3, 3);
            board.place(&block, ax, ay);
            assert_eq!(1, board.population(), "anchor ({}, {})", ax, ay);
        }

        let mut board = Board::new(3, 3);
        board.place(&block, 5, 0);
        board.place(&block, 0, 5);
        board.place(&block, -5, -5);
        assert_eq!(0, board.population());
    }

    #[test]
    fn test_place_overwrites_with_dead_cells() {
        let glider: Pattern = "x = 3, y = 3\nbo$2bo$3o!".parse().unwrap();
        let mut board = Board::new(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                board.set(x, y, true);
            }
        }
        board.place(&glider, 1, 1);
        assert_eq!(25 - 9 + 5, board.population());
        assert!(!board.get(1, 1));
        assert!(board.get(2, 1));
    }

    #[test]
    fn test_centered_anchor() {
        let glider: Pattern = "x = 3, y = 3\nbo$2bo$3o!".parse().unwrap();
        let board = Board::new(128, 128);
        assert_eq!((63, 63), board.centered_anchor(&glider));
        let small = Board::new(2, 1);
        assert_eq!((0, -1), small.centered_anchor(&glider));
    }

    #[test]
    fn test_toggle_and_out_of_range() {
        let mut board = Board::new(3, 2);
        board.toggle(2, 1);
        assert!(board.get(2, 1));
        board.toggle(2, 1);
        assert!(!board.get(2, 1));

        board.set(3, 0, true);
        board.toggle(0, 2);
        assert!(!board.get(3, 0));
        assert_eq!(0, board.population());
    }

    #[test]
    fn test_randomize_is_deterministic() {
        let mut a = Board::new(40, 30);
        let mut b = Board::new(40, 30);
        a.randomize(7);
        b.randomize(7);
        assert_eq!(a, b);
        let population = a.population();
        assert!(population > 200 && population < 600, "population {}", population);
    }
}
