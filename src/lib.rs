// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - terminal rendering and input
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::Simulation;
pub use domain::{Cell, Coord, Pattern, World, presets};
pub use rendering::Viewport;
