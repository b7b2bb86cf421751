//! Pattern recognition over the live board.
//!
//! Every board cell is tried as the top-left anchor of every catalogue
//! pattern. A pattern matches when its whole bounding box fits on the board
//! and every covered cell, dead or alive, equals the pattern cell. Matches
//! then claim their cells in the overlay; a match that would touch an
//! already-claimed cell is dropped.
//!
//! Precedence is ascending anchor index, then catalogue order. To keep that
//! exact under parallel execution the scan is split in two:
//!
//! 1. [`detect`] runs in parallel and only reads the board, producing
//!    independent [`Match`] records;
//! 2. [`resolve`] walks the sorted records sequentially and does the claims.

use log::trace;
use rayon::prelude::*;

use crate::board::Board;
use crate::catalogue::Catalogue;
use crate::coords::{to_coords, to_index};
use crate::rle::Pattern;

/// Per-cell tags parallel to a [`Board`]: 0 is unmatched, `k > 0` means the
/// cell was claimed by catalogue entry `k - 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Overlay {
    width: usize,
    height: usize,
    tags: Vec<u8>,
}

impl Overlay {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tags: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn tags(&self) -> &[u8] {
        &self.tags
    }

    /// Tag at `(x, y)`, or 0 outside the overlay.
    pub fn tag(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.tags[to_index(x, y, self.width)]
        } else {
            0
        }
    }

    pub fn clear(&mut self) {
        self.tags.fill(0);
    }

    /// Matches the shape of `board`, clearing all tags.
    pub fn reshape_like(&mut self, board: &Board) {
        if self.width != board.width() || self.height != board.height() {
            *self = Overlay::new(board.width(), board.height());
        } else {
            self.clear();
        }
    }

    /// Number of claimed cells.
    pub fn claimed(&self) -> usize {
        self.tags.iter().filter(|&&tag| tag != 0).count()
    }

    fn row_span(&self, x: usize, y: usize, len: usize) -> std::ops::Range<usize> {
        let start = to_index(x, y, self.width);
        start..start + len
    }
}

/// A pattern found at an anchor. Ordering is precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    /// Board index of the pattern's top-left cell.
    pub anchor: usize,
    /// Catalogue index of the pattern.
    pub pattern: usize,
}

fn fits(board: &Board, pattern: &Pattern, x: usize, y: usize) -> bool {
    x + pattern.width() <= board.width() && y + pattern.height() <= board.height()
}

fn matches_at(board: &Board, pattern: &Pattern, x: usize, y: usize) -> bool {
    fits(board, pattern, x, y)
        && pattern
            .rows()
            .enumerate()
            .all(|(py, row)| &board.row(y + py)[x..x + pattern.width()] == row)
}

/// Phase 1: finds every `(anchor, pattern)` match, sorted by precedence.
/// Reads the board only, so anchors are checked in parallel.
pub fn detect(board: &Board, catalogue: &Catalogue) -> Vec<Match> {
    if board.is_empty() || catalogue.is_empty() {
        return vec![];
    }
    let width = board.width();

    let mut matches: Vec<Match> = (0..board.len())
        .into_par_iter()
        .flat_map_iter(|anchor| {
            let (x, y) = to_coords(anchor, width);
            catalogue
                .entries()
                .iter()
                .enumerate()
                .filter(move |(_, entry)| matches_at(board, &entry.pattern, x, y))
                .map(move |(pattern, _)| Match { anchor, pattern })
        })
        .collect();

    matches.par_sort_unstable();
    matches
}

/// Phase 2: claims cells for `matches` in order, skipping any match whose
/// footprint is already partly claimed. Anchors are read with the overlay's
/// width as stride; footprints that fall outside the overlay are skipped.
/// Existing tags are respected.
pub fn resolve(catalogue: &Catalogue, matches: &[Match], overlay: &mut Overlay) {
    let width = overlay.width();
    if overlay.tags.is_empty() {
        return;
    }
    for m in matches {
        let Some(entry) = catalogue.entries().get(m.pattern) else {
            continue;
        };
        let Ok(tag) = u8::try_from(m.pattern + 1) else {
            continue;
        };
        let (pw, ph) = (entry.pattern.width(), entry.pattern.height());
        let (x, y) = to_coords(m.anchor, width);
        if x + pw > overlay.width || y + ph > overlay.height {
            continue;
        }

        let free = (y..y + ph).all(|row| {
            let span = overlay.row_span(x, row, pw);
            overlay.tags[span].iter().all(|&t| t == 0)
        });
        if !free {
            continue;
        }
        for row in y..y + ph {
            let span = overlay.row_span(x, row, pw);
            overlay.tags[span].fill(tag);
        }
    }
}

/// Recomputes `overlay` for `board` from scratch.
pub fn scan_into(board: &Board, catalogue: &Catalogue, overlay: &mut Overlay) {
    overlay.reshape_like(board);
    let matches = detect(board, catalogue);
    resolve(catalogue, &matches, overlay);
    trace!(
        "scan: {} candidate matches, {} cells claimed",
        matches.len(),
        overlay.claimed()
    );
}

/// Builds a fresh overlay for `board`.
pub fn scan(board: &Board, catalogue: &Catalogue) -> Overlay {
    let mut overlay = Overlay::new(board.width(), board.height());
    scan_into(board, catalogue, &mut overlay);
    overlay
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{BLACK, BLUE, GREEN, RED};

    fn pattern(rle: &str) -> Pattern {
        rle.parse().unwrap()
    }

    fn catalogue(patterns: &[&str]) -> Catalogue {
        let colors = [RED, GREEN, BLUE];
        Catalogue::new(
            patterns
                .iter()
                .zip(colors.iter().cycle())
                .map(|(rle, &color)| (pattern(rle), color))
                .collect(),
            BLACK,
        )
        .unwrap()
    }

    const GLIDER: &str = "x = 3, y = 3\nbo$2bo$3o!";
    const BLOCK: &str = "x = 2, y = 2\n2o$2o!";
    const DOMINO: &str = "x = 2, y = 1\n2o!";

    #[test]
    fn test_dead_board_has_no_matches() {
        let board = Board::new(20, 10);
        let overlay = scan(&board, &Catalogue::standard().unwrap());
        assert_eq!(200, overlay.tags().len());
        assert_eq!(0, overlay.claimed());
    }

    #[test]
    fn test_single_glider_footprint() {
        let mut board = Board::new(10, 8);
        board.place(&pattern(GLIDER), 4, 2);
        let overlay = scan(&board, &catalogue(&[GLIDER]));

        for y in 0..8 {
            for x in 0..10 {
                let inside = (4..7).contains(&x) && (2..5).contains(&y);
                assert_eq!(inside as u8, overlay.tag(x, y), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_dead_cells_must_match() {
        // Glider with an extra live cell inside its bounding box.
        let mut board = Board::new(6, 6);
        board.place(&pattern(GLIDER), 1, 1);
        board.set(1, 1, true);
        assert!(detect(&board, &catalogue(&[GLIDER])).is_empty());
    }

    #[test]
    fn test_no_wraparound_at_right_edge() {
        // A domino split across the row boundary is not a domino.
        let mut board = Board::new(4, 2);
        board.set(3, 0, true);
        board.set(0, 1, true);
        assert!(detect(&board, &catalogue(&[DOMINO])).is_empty());
    }

    #[test]
    fn test_catalogue_order_breaks_ties_at_same_anchor() {
        let mut board = Board::new(6, 6);
        board.place(&pattern(BLOCK), 2, 2);

        let overlay = scan(&board, &catalogue(&[GLIDER, BLOCK, DOMINO]));
        assert_eq!(4, overlay.claimed());
        assert!(overlay.tags().iter().all(|&t| t == 0 || t == 2));

        // The domino now wins at the block's anchor and again one row down.
        let overlay = scan(&board, &catalogue(&[GLIDER, DOMINO, BLOCK]));
        assert_eq!(4, overlay.claimed());
        assert!(overlay.tags().iter().all(|&t| t == 0 || t == 2));
        let matches = detect(&board, &catalogue(&[GLIDER, DOMINO, BLOCK]));
        assert_eq!(
            vec![
                Match { anchor: 14, pattern: 1 },
                Match { anchor: 14, pattern: 2 },
                Match { anchor: 20, pattern: 1 },
            ],
            matches
        );
    }

    #[test]
    fn test_lower_anchor_wins_overlap() {
        let mut board = Board::new(5, 1);
        for x in 1..4 {
            board.set(x, 0, true);
        }
        let overlay = scan(&board, &catalogue(&[DOMINO]));
        assert_eq!(&[0, 1, 1, 0, 0], overlay.tags());
    }

    #[test]
    fn test_resolve_skips_footprints_outside_overlay() {
        let mut board = Board::new(4, 4);
        board.place(&pattern(BLOCK), 2, 2);
        let cat = catalogue(&[BLOCK]);
        let matches = detect(&board, &cat);
        assert_eq!(vec![Match { anchor: 10, pattern: 0 }], matches);

        let mut small = Overlay::new(2, 2);
        resolve(&cat, &matches, &mut small);
        assert_eq!(0, small.claimed());

        // Anchor 10 is (1, 3) in a 3x4 overlay, so the block overhangs the bottom.
        let mut narrow = Overlay::new(3, 4);
        resolve(&cat, &matches, &mut narrow);
        assert_eq!(0, narrow.claimed());

        let mut empty = Overlay::new(0, 0);
        resolve(&cat, &matches, &mut empty);
        assert!(empty.tags().is_empty());

        let mut same = Overlay::new(4, 4);
        resolve(&cat, &matches, &mut same);
        assert_eq!(4, same.claimed());
    }

    #[test]
    fn test_scan_into_reshapes_and_clears() {
        let mut board = Board::new(4, 4);
        board.place(&pattern(BLOCK), 0, 0);
        let cat = catalogue(&[BLOCK]);

        let mut overlay = Overlay::new(2, 2);
        scan_into(&board, &cat, &mut overlay);
        assert_eq!((4, 4), (overlay.width(), overlay.height()));
        assert_eq!(4, overlay.claimed());

        board.clear();
        scan_into(&board, &cat, &mut overlay);
        assert_eq!(0, overlay.claimed());
    }
}
