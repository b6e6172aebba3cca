//! Plaintext pattern parsing.
//!
//! A block of text becomes a world: an `x` at text row `y`, column `x`
//! marks a live cell at `(y, x)`. Every other character means dead, so
//! there is no malformed input - ragged rows and stray characters are
//! simply dead space.

use super::{Coord, World};

/// The character that marks a live cell in pattern text
pub const LIVE_MARKER: char = 'x';

/// Parse a block of ASCII art into an initial world
pub fn parse(text: &str) -> World {
    let mut world = World::new();
    for (row, line) in text.lines().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch == LIVE_MARKER {
                world.insert(Coord::new(row as i64, col as i64));
            }
        }
    }
    world
}
