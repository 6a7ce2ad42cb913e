mod adjacency;
mod controller;
mod cube;
mod display;
mod error;
mod grid;
mod orientation;

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use controller::{Command, Session};
use cube::Cube;

type Result<T> = std::result::Result<T, anyhow::Error>;

const MAX_COMMAND_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scramble {
    /// Swap stickers at random; the cube may not be solvable by turning.
    Swap,
    /// Apply random turns.
    Turns,
}

#[derive(Parser, Debug)]
#[command(about = "Turn the faces of a sticker cube until every face is one colour")]
struct Args {
    /// Stickers per face, a perfect square.
    #[arg(long, default_value_t = 9)]
    area: usize,

    /// Seed for the scramble; taken from the system when absent.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Scramble::Swap)]
    scramble: Scramble,

    /// Number of turns for `--scramble turns`.
    #[arg(long, default_value_t = 30)]
    scramble_turns: usize,
}

/// Reads lines until one holds a command. `None` once input runs out.
fn read_command<I>(lines: &mut I) -> Result<Option<Command>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    print!("Command (type h for reference sheet): ");
    loop {
        std::io::stdout().flush()?;
        let line = match lines.next() {
            None => return Ok(None),
            Some(line) => line?,
        };

        let line: String = line.trim().chars().take(MAX_COMMAND_LEN).collect();
        match Command::parse(&line) {
            Some(command) => return Ok(Some(command)),
            None => print!("No input detected. Please enter a command: "),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut cube = Cube::new(args.area)
        .with_context(|| format!("invalid --area {}", args.area))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    match args.scramble {
        Scramble::Swap => cube.shuffle(&mut rng),
        Scramble::Turns => cube.scramble_with_turns(&mut rng, args.scramble_turns),
    }
    info!(
        "starting with {} stickers per face, {:?} scramble",
        args.area, args.scramble
    );

    let mut session = Session::new(cube);
    let mut lines = std::io::stdin().lock().lines();

    while !session.cube().is_solved() {
        println!("{}", display::render_cube(session.cube()));
        println!();
        println!(
            "{}",
            display::render_facing(session.cube(), session.camera())
        );

        let command = match read_command(&mut lines)? {
            Some(command) => command,
            None => {
                info!("input closed before the cube was solved");
                return Ok(());
            }
        };

        let event = session.apply_command(&command);
        println!("{}", display::describe(&event));
    }

    println!("{}", display::render_cube(session.cube()));
    println!("Solved!");
    Ok(())
}
