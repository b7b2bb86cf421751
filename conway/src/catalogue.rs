// catalogue.rs - Registered patterns the scanner looks for, with their display colors

use crate::error::CatalogueError;
use crate::patterns;
use crate::rle::Pattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
pub const CYAN: Rgb = Rgb::new(0, 255, 255);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub pattern: Pattern,
    pub color: Rgb,
}

/// Ordered, immutable list of patterns to highlight. Entry `i` is reported
/// in the overlay as tag `i + 1`; registration order is match precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
    unmatched: Rgb,
}

impl Catalogue {
    /// Largest number of patterns a catalogue can hold, since tags are `u8`
    /// and tag 0 means "unmatched".
    pub const MAX_PATTERNS: usize = u8::MAX as usize;

    /// `unmatched` is the color of live cells no pattern claimed.
    pub fn new(entries: Vec<(Pattern, Rgb)>, unmatched: Rgb) -> Result<Self, CatalogueError> {
        if entries.len() > Self::MAX_PATTERNS {
            return Err(CatalogueError::TooManyPatterns {
                count: entries.len(),
            });
        }
        Ok(Self {
            entries: entries
                .into_iter()
                .map(|(pattern, color)| CatalogueEntry { pattern, color })
                .collect(),
            unmatched,
        })
    }

    /// Common still lifes, oscillators and spaceships, plus the glider loop.
    pub fn standard() -> Result<Self, CatalogueError> {
        Self::new(
            vec![
                (patterns::BEEHIVE.decode()?, RED),
                (patterns::GLIDER.decode()?, GREEN),
                (patterns::BLOCK.decode()?, BLUE),
                (patterns::BLINKER.decode()?, YELLOW),
                (patterns::R_PENTOMINO.decode()?, MAGENTA),
                (patterns::GLIDER_LOOP.decode()?, CYAN),
            ],
            BLACK,
        )
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn unmatched_color(&self) -> Rgb {
        self.unmatched
    }

    /// Entry a nonzero overlay tag refers to.
    pub fn entry_for_tag(&self, tag: u8) -> Option<&CatalogueEntry> {
        (tag as usize).checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Fill color for a live cell carrying `tag`.
    pub fn color_for_tag(&self, tag: u8) -> Rgb {
        self.entry_for_tag(tag)
            .map_or(self.unmatched, |entry| entry.color)
    }
}
