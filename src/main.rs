//! CLI for maze solving

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    slice,
    time::Duration,
};

use anyhow::{bail, Context};
use clap::Parser;
use labyrinthe::{all_paths_until, deadline, shortest_path, Grid, Point};

/// The shortest way (and every other way) out of a maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Start column
    #[arg(short = 'x', long, default_value_t = 1)]
    start_x: usize,

    /// Start row
    #[arg(short = 'y', long, default_value_t = 1)]
    start_y: usize,

    /// Also enumerate every simple path to the exit
    #[arg(short, long)]
    all: bool,

    /// Give up enumerating all paths after this many milliseconds
    #[arg(short, long, default_value_t = 2000)]
    timeout: u64,

    /// Draw the shortest path on the maze
    #[arg(short, long)]
    show: bool,

    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let emojis = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Could not read {}", args.file.display()))?
    };
    let grid = Grid::parse_emojis(emojis.trim())?;
    let start = Point::new(args.start_x, args.start_y);
    if !grid.is_open(start) {
        bail!("Start {} is not an open cell", start);
    }

    let path = shortest_path(&grid, start, grid.exit());
    if path.is_empty() {
        println!("There is no way from {} to the exit.", start);
        return Ok(());
    }
    println!("The shortest path is {} steps.", path.len() - 1);
    if args.show {
        println!(
            "{}",
            grid.draw(&[('🟨', path.as_slice()), ('🏃', slice::from_ref(&start))])
        );
    }

    if args.all {
        let result = all_paths_until(
            &grid,
            start,
            grid.exit(),
            deadline(Duration::from_millis(args.timeout)),
        );
        let longest = result.paths.iter().map(Vec::len).max().unwrap_or(1);
        if result.complete {
            println!(
                "There are {} paths, the longest is {} steps.",
                result.paths.len(),
                longest - 1
            );
        } else {
            println!(
                "Found {} paths before giving up after {} ms.",
                result.paths.len(),
                args.timeout
            );
        }
    }
    Ok(())
}
