use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::Rng;

use crate::application::Simulation;

/// Dimensions of the region re-populated by the randomize key
const RANDOM_REGION: i64 = 30;
const RANDOM_DENSITY: f64 = 0.5;

/// A user request decoded from the keyboard
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Quit,
    TogglePause,
    Step,
    SpeedUp,
    SpeedDown,
    Randomize,
    Clear,
}

/// Wait up to `timeout` for a key press and decode it.
/// The timeout doubles as frame pacing for the driver loop.
pub fn poll_action(timeout: Duration) -> io::Result<Option<Action>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(decode(key.code));
            }
        }
    }
    Ok(None)
}

fn decode(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Char('s') => Some(Action::Step),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::SpeedUp),
        KeyCode::Char('-') => Some(Action::SpeedDown),
        KeyCode::Char('r') => Some(Action::Randomize),
        KeyCode::Char('c') => Some(Action::Clear),
        _ => None,
    }
}

/// Apply a decoded action to the simulation.
/// `Quit` is the caller's concern and passes through unchanged.
pub fn apply(sim: Simulation, action: Action, rng: &mut impl Rng) -> Simulation {
    match action {
        Action::Quit => sim,
        Action::TogglePause => sim.toggle_running(),
        Action::Step => sim.step_once(),
        Action::SpeedUp => sim.adjust_speed(5.0),
        Action::SpeedDown => sim.adjust_speed(-5.0),
        Action::Randomize => sim.randomize(RANDOM_REGION, RANDOM_REGION, RANDOM_DENSITY, rng),
        Action::Clear => sim.clear(),
    }
}
