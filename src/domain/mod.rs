pub mod ascii;
mod cell;
mod coord;
mod patterns;
mod world;

pub use cell::Cell;
pub use coord::Coord;
pub use patterns::{Pattern, presets};
pub use world::World;
