use super::{Coord, World, ascii};

/// A named pattern that can be stamped onto a world
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    /// Live cells relative to the pattern's top-left corner
    pub cells: Vec<Coord>,
}

impl Pattern {
    /// Define a pattern from ASCII art (`x` = live, anything else dead)
    pub fn from_ascii(name: &'static str, description: &'static str, art: &str) -> Self {
        Self {
            name,
            description,
            cells: ascii::parse(art).cells().collect(),
        }
    }

    /// Stamp the pattern onto a world with its corner at `(row, col)`
    pub fn place_on(&self, world: &mut World, row: i64, col: i64) {
        for cell in &self.cells {
            world.insert(cell.offset(row, col));
        }
    }

    /// A fresh world containing only this pattern at `(row, col)`
    pub fn to_world(&self, row: i64, col: i64) -> World {
        let mut world = World::new();
        self.place_on(&mut world, row, col);
        world
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::from_ascii(
            "Glider",
            "Moves diagonally (period 4)",
            ".x.\n\
             ..x\n\
             xxx",
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::from_ascii("Blinker", "Oscillator (period 2)", "xxx")
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::from_ascii(
            "Toad",
            "Oscillator (period 2)",
            ".xxx\n\
             xxx.",
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::from_ascii(
            "Beacon",
            "Oscillator (period 2)",
            "xx..\n\
             x...\n\
             ...x\n\
             ..xx",
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::from_ascii(
            "Block",
            "Still life",
            "xx\n\
             xx",
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::from_ascii(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            ".xx\n\
             xx.\n\
             .x.",
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::from_ascii(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            ".x.....\n\
             ...x...\n\
             xx..xxx",
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::from_ascii(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            "........................x...........\n\
             ......................x.x...........\n\
             ............xx......xx............xx\n\
             ...........x...x....xx............xx\n\
             xx........x.....x...xx..............\n\
             xx........x...x.xx....x.x...........\n\
             ..........x.....x.......x...........\n\
             ...........x...x....................\n\
             ............xx......................",
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            r_pentomino(),
            acorn(),
            glider_gun(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_offsets_cells() {
        let mut world = World::new();
        presets::block().place_on(&mut world, 10, -3);
        assert_eq!(world.population(), 4);
        assert!(world.contains(Coord::new(10, -3)));
        assert!(world.contains(Coord::new(11, -2)));
    }

    #[test]
    fn test_glider_matches_canonical_cells() {
        let world = presets::glider().to_world(0, 0);
        let expected: World = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
            .into_iter()
            .map(Coord::from)
            .collect();
        assert_eq!(world, expected);
    }

    #[test]
    fn test_still_lifes_and_oscillators() {
        let block = presets::block().to_world(0, 0);
        assert_eq!(block.step(), block);

        let blinker = presets::blinker().to_world(0, 0);
        assert_eq!(blinker.step().step(), blinker);

        let beacon = presets::beacon().to_world(0, 0);
        assert_eq!(beacon.step().step(), beacon);
    }

    #[test]
    fn test_glider_gun_grows() {
        let mut world = presets::glider_gun().to_world(0, 0);
        let initial = world.population();
        for _ in 0..60 {
            world = world.step();
        }
        assert!(world.population() > initial);
    }

    #[test]
    fn test_all_patterns_are_named_and_nonempty() {
        for pattern in presets::all_patterns() {
            assert!(!pattern.name.is_empty());
            assert!(!pattern.cells.is_empty(), "{} has no cells", pattern.name);
        }
    }
}
