use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::application::Simulation;
use crate::domain::{Coord, World};

/// Glyph drawn for a live cell
pub const LIVE_GLYPH: char = '█';
/// Glyph drawn for dead background
pub const DEAD_GLYPH: char = '.';

/// A fixed square window onto the infinite grid.
///
/// Only coordinates with both components in `[0, size)` are drawn; cells
/// outside are omitted from the frame but stay in the underlying set, so
/// a pattern can wander off screen and come back.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub size: i64,
}

impl Viewport {
    pub const fn new(size: i64) -> Self {
        Self { size }
    }

    /// Render the visible part of the world as a `size x size` glyph block
    pub fn render_world(&self, world: &World) -> String {
        let mut out = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    out.push(' ');
                }
                if world.contains(Coord::new(row, col)) {
                    out.push(LIVE_GLYPH);
                } else {
                    out.push(DEAD_GLYPH);
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Format large numbers with K/M/B suffixes
pub fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Queue a full frame (viewport, status line, key help) and flush it.
/// The cursor is homed rather than the screen cleared, so a steady frame
/// rate does not flicker.
pub fn draw(out: &mut impl Write, sim: &Simulation, viewport: &Viewport) -> io::Result<()> {
    queue!(out, MoveTo(0, 0))?;

    for line in viewport.render_world(&sim.world).lines() {
        queue!(out, Print(line), Clear(ClearType::UntilNewLine), Print("\r\n"))?;
    }

    let state = if sim.is_running { "running" } else { "paused" };
    let status = format!(
        "Generation {} | Population {} | Step {:.2} ms | {:.0} gen/s | {}",
        sim.generation,
        format_number(sim.world.population()),
        sim.last_step_time_ms,
        sim.updates_per_second,
        state,
    );
    queue!(out, Print(status), Clear(ClearType::UntilNewLine), Print("\r\n"))?;
    queue!(
        out,
        Print("space pause | s step | +/- speed | r randomize | c clear | q quit"),
        Clear(ClearType::UntilNewLine),
    )?;

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_render_small_viewport() {
        let world = presets::block().to_world(0, 0);
        let frame = Viewport::new(3).render_world(&world);
        assert_eq!(frame, "█ █ .\n█ █ .\n. . .\n");
    }

    #[test]
    fn test_cells_outside_viewport_are_omitted() {
        let world: World = [(-1, 0), (0, -1), (2, 2), (1, 1)]
            .into_iter()
            .map(Coord::from)
            .collect();
        let frame = Viewport::new(2).render_world(&world);
        assert_eq!(frame, ". .\n. █\n");
        // Rendering never drops cells from the set itself
        assert_eq!(world.population(), 4);
    }

    #[test]
    fn test_empty_world_renders_background() {
        let frame = Viewport::new(2).render_world(&World::new());
        assert_eq!(frame, ". .\n. .\n");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
        assert_eq!(format_number(3_000_000_000), "3.0B");
    }
}
