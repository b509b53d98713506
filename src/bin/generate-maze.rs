//! CLI for maze generation

use std::slice;

use clap::Parser;
use itertools::Itertools;
use labyrinthe::{Difficulty, Direction, GameSession, MazeConfig, MazeGenerator, Status};

/// Random maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Difficulty tier, sets the number of extra passages
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Generated field width, the tier default if not given
    #[arg(long)]
    width: Option<usize>,

    /// Generated field height, the tier default if not given
    #[arg(long)]
    height: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Moves to play from the start, e.g. `RRDD` (U, R, D, L)
    #[arg(short, long)]
    moves: Option<String>,

    /// Draw the shortest path from the player to the exit
    #[arg(short, long)]
    solve: bool,
}

/// Generate maze, optionally play moves on it, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (default_width, default_height) = args.difficulty.dimensions();
    let config = MazeConfig::new(
        args.width.unwrap_or(default_width),
        args.height.unwrap_or(default_height),
        args.difficulty,
    )?;
    let moves = match &args.moves {
        Some(script) => Direction::parse_moves(script)?,
        None => vec![],
    };

    let mut session = GameSession::new(config, MazeGenerator::new(args.seed))?;
    let mut accepted = 0;
    for direction in &moves {
        if session.attempt_move(*direction) {
            accepted += 1;
        }
    }

    let visited = session.visited().iter().copied().collect_vec();
    let path = if args.solve {
        session.shortest_path()
    } else {
        vec![]
    };
    let player = session.player();
    let exit = session.grid().exit();
    println!(
        "{}",
        session.grid().draw(&[
            ('🟦', visited.as_slice()),
            ('🟨', path.as_slice()),
            ('❎', slice::from_ref(&exit)),
            ('🏃', slice::from_ref(&player)),
        ])
    );

    if args.moves.is_some() {
        println!(
            "{} of {} moves accepted, player at {}.",
            accepted,
            moves.len(),
            player
        );
        if session.status() == Status::Won {
            println!("The exit was reached in {} moves.", session.moves());
        }
    }
    if args.solve && !path.is_empty() {
        println!("The shortest path to the exit is {} steps.", path.len() - 1);
    }
    Ok(())
}
