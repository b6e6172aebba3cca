use std::io::{self, stdout};
use std::time::{Duration, Instant};
use std::{env, fs, process};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use sparse_life::domain::{World, ascii};
use sparse_life::input::Action;
use sparse_life::{Simulation, Viewport, input, rendering};

/// Side length of the rendered viewport
const VIEWPORT_SIZE: i64 = 30;
/// Default random-soup region and density when no pattern file is given
const RANDOM_REGION: i64 = 30;
const RANDOM_DENSITY: f64 = 0.5;

fn usage(program: &str) {
    eprintln!("Usage: {program} [PATTERN_FILE]");
    eprintln!();
    eprintln!("Runs Conway's Game of Life on an infinite grid in the terminal.");
    eprintln!("PATTERN_FILE is ASCII art where '{}' marks a live cell;", ascii::LIVE_MARKER);
    eprintln!("without it the world starts as a random {RANDOM_REGION}x{RANDOM_REGION} soup.");
}

/// Build the initial world from the command line: a pattern file if one
/// was given, a random soup otherwise.
fn initial_world() -> io::Result<World> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "sparse-life".into());

    match args.next().as_deref() {
        Some("-h") | Some("--help") => {
            usage(&program);
            process::exit(0);
        }
        Some(path) => Ok(ascii::parse(&fs::read_to_string(path)?)),
        None => Ok(World::random(
            RANDOM_REGION,
            RANDOM_REGION,
            RANDOM_DENSITY,
            &mut rand::rng(),
        )),
    }
}

fn run(mut sim: Simulation) -> io::Result<()> {
    let mut out = stdout();
    let viewport = Viewport::new(VIEWPORT_SIZE);
    let mut rng = rand::rng();
    let mut last_frame = Instant::now();

    loop {
        rendering::draw(&mut out, &sim, &viewport)?;

        // The poll timeout is also the frame pacing
        if let Some(action) = input::poll_action(Duration::from_millis(16))? {
            if action == Action::Quit {
                return Ok(());
            }
            sim = input::apply(sim, action, &mut rng);
        }

        let delta = last_frame.elapsed().as_secs_f32();
        last_frame = Instant::now();
        sim = sim.tick(delta);
    }
}

fn main() -> io::Result<()> {
    let sim = Simulation::new(initial_world()?);

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;

    let result = run(sim);

    // Restore the terminal before reporting any error
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}
