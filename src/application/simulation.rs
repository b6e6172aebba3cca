use rand::Rng;

use crate::domain::World;

/// Simulation orchestrates the generation loop.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    pub world: World,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32, // Engine performance metric
}

impl Simulation {
    /// Create a simulation around an initial world
    pub fn new(world: World) -> Self {
        Self {
            world,
            is_running: true,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_step_time_ms: 0.0,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Clear the world and reset the generation counter
    pub fn clear(mut self) -> Self {
        self.world = World::new();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Replace the world with a fresh random region and reset the counter
    pub fn randomize(mut self, rows: i64, cols: i64, density: f64, rng: &mut impl Rng) -> Self {
        self.world = World::random(rows, cols, density, rng);
        self.generation = 0;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Advance exactly one generation (used for single-stepping while paused)
    pub fn step_once(mut self) -> Self {
        let start = std::time::Instant::now();
        self.world = self.world.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self
    }

    /// Update the simulation by one frame.
    /// Accumulates elapsed time and advances a generation once the
    /// configured interval has passed.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.update_timer = 0.0;
            self = self.step_once();
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_tick_waits_for_interval() {
        let sim = Simulation::new(presets::blinker().to_world(0, 0));
        let sim = sim.tick(0.05); // below the 0.1s default interval
        assert_eq!(sim.generation, 0);
        let sim = sim.tick(0.06);
        assert_eq!(sim.generation, 1);
    }

    #[test]
    fn test_paused_simulation_does_not_advance() {
        let sim = Simulation::new(presets::blinker().to_world(0, 0)).toggle_running();
        let before = sim.world.clone();
        let sim = sim.tick(10.0);
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.world, before);
    }

    #[test]
    fn test_step_once_advances_while_paused() {
        let sim = Simulation::new(presets::blinker().to_world(0, 0)).toggle_running();
        let sim = sim.step_once();
        assert_eq!(sim.generation, 1);
        assert_eq!(sim.world, presets::blinker().to_world(0, 0).step());
    }

    #[test]
    fn test_speed_is_clamped() {
        let sim = Simulation::new(World::new());
        assert_eq!(sim.adjust_speed(1000.0).updates_per_second, 60.0);
        let sim = Simulation::new(World::new());
        assert_eq!(sim.adjust_speed(-1000.0).updates_per_second, 1.0);
    }

    #[test]
    fn test_clear_resets_world_and_counter() {
        let sim = Simulation::new(presets::glider().to_world(0, 0)).step_once().clear();
        assert!(sim.world.is_empty());
        assert_eq!(sim.generation, 0);
        assert!(!sim.is_running);
    }

    #[test]
    fn test_randomize_resets_counter() {
        let mut rng = StdRng::seed_from_u64(1);
        let sim = Simulation::new(World::new()).step_once();
        let sim = sim.randomize(20, 20, 0.5, &mut rng);
        assert_eq!(sim.generation, 0);
        assert!(!sim.world.is_empty());
    }
}
