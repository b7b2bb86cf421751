// lib.rs - Core of the Game of Life: RLE decoding, boards, evolution, pattern scanning

pub mod board;
pub mod catalogue;
pub mod coords;
pub mod error;
pub mod evolve;
pub mod patterns;
pub mod rle;
pub mod scan;
pub mod sim;

pub use board::Board;
pub use catalogue::{Catalogue, Rgb};
pub use error::{CatalogueError, FormatError};
pub use rle::Pattern;
pub use scan::{Match, Overlay};
pub use sim::Simulation;
