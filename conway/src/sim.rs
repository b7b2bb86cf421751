// sim.rs - Double-buffered simulation loop state: board pair, overlay, generation counter

use std::sync::Arc;

use log::debug;

use crate::board::Board;
use crate::catalogue::Catalogue;
use crate::evolve;
use crate::rle::Pattern;
use crate::scan::{self, Overlay};

/// Owns the live board, its spare buffer and the pattern overlay.
///
/// Each [`tick`](Simulation::tick) writes the next generation into the
/// spare buffer, swaps ownership of the two, then rescans the overlay.
/// Resizes happen between ticks only, since every method takes `&mut self`.
pub struct Simulation {
    current: Board,
    next: Board,
    overlay: Overlay,
    catalogue: Arc<Catalogue>,
    generation: u64,
}

impl Simulation {
    pub fn new(width: usize, height: usize, catalogue: Arc<Catalogue>) -> Self {
        Self {
            current: Board::new(width, height),
            next: Board::new(width, height),
            overlay: Overlay::new(width, height),
            catalogue,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.current
    }
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }
    pub fn catalogue(&self) -> &Arc<Catalogue> {
        &self.catalogue
    }
    pub fn generation(&self) -> u64 {
        self.generation
    }
    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Clears the board and stamps `pattern` in the middle.
    pub fn seed(&mut self, pattern: &Pattern) {
        self.current.clear();
        self.stamp(pattern);
        self.generation = 0;
    }

    /// Stamps `pattern` in the middle without clearing the board.
    pub fn stamp(&mut self, pattern: &Pattern) {
        let (x, y) = self.current.centered_anchor(pattern);
        debug!(
            "Placing {:?} ({}x{}) at ({}, {})",
            pattern.name(),
            pattern.width(),
            pattern.height(),
            x,
            y
        );
        self.current.place(pattern, x, y);
        self.rescan();
    }

    /// Re-accommodates the board to new dimensions, keeping content at the
    /// same coordinates.
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.current.width() == width && self.current.height() == height {
            return;
        }
        debug!(
            "Resizing board {}x{} -> {}x{}",
            self.current.width(),
            self.current.height(),
            width,
            height
        );
        self.current.resize(width, height);
        self.next.resize(width, height);
        self.rescan();
    }

    /// Advances one generation.
    pub fn tick(&mut self) {
        evolve::step(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        self.rescan();
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.generation = 0;
        self.rescan();
    }

    pub fn randomize(&mut self, seed: u64) {
        self.current.randomize(seed);
        self.generation = 0;
        self.rescan();
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        self.current.toggle(x, y);
        self.rescan();
    }

    fn rescan(&mut self) {
        scan::scan_into(&self.current, &self.catalogue, &mut self.overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn sim(width: usize, height: usize) -> Simulation {
        Simulation::new(width, height, Arc::new(Catalogue::standard().unwrap()))
    }

    #[test]
    fn test_seed_centers_and_scans() {
        let mut sim = sim(9, 9);
        sim.seed(&patterns::BLINKER.decode().unwrap());
        assert_eq!(3, sim.population());
        for x in 3..6 {
            assert!(sim.board().get(x, 4));
            // Blinker is the fourth catalogue entry.
            assert_eq!(4, sim.overlay().tag(x, 4));
        }
    }

    #[test]
    fn test_tick_swaps_and_rescans() {
        let mut sim = sim(9, 9);
        sim.seed(&patterns::BLINKER.decode().unwrap());
        sim.tick();
        assert_eq!(1, sim.generation());
        for y in 3..6 {
            assert!(sim.board().get(4, y));
        }
        // The vertical phase is not in the catalogue.
        assert_eq!(0, sim.overlay().claimed());

        sim.tick();
        assert_eq!(3, sim.overlay().claimed());
    }

    #[test]
    fn test_resize_between_ticks() {
        let mut sim = sim(9, 9);
        sim.seed(&patterns::BLOCK.decode().unwrap());
        sim.resize(20, 6);
        assert_eq!((20, 6), (sim.board().width(), sim.board().height()));
        assert_eq!((20, 6), (sim.overlay().width(), sim.overlay().height()));
        sim.tick();
        assert_eq!(4, sim.population());
        assert_eq!(4, sim.overlay().claimed());
    }

    #[test]
    fn test_seeded_glider_loop_is_tagged() {
        let mut sim = sim(80, 160);
        let glider_loop = patterns::GLIDER_LOOP.decode().unwrap();
        sim.seed(&glider_loop);
        // Glider loop is the sixth catalogue entry and covers its whole box.
        assert_eq!(73 * 150, sim.overlay().claimed());
        let (x, y) = sim.board().centered_anchor(&glider_loop);
        assert_eq!(6, sim.overlay().tag(x as usize, y as usize));
    }

    #[test]
    fn test_clear_and_randomize_reset_generation() {
        let mut sim = sim(16, 16);
        sim.randomize(3);
        sim.tick();
        sim.tick();
        assert_eq!(2, sim.generation());
        sim.clear();
        assert_eq!(0, sim.generation());
        assert_eq!(0, sim.population());
        assert_eq!(0, sim.overlay().claimed());
    }
}
