// N-Queens solver driver

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use rqueens_core::{Board, BoardSnapshot, count_solutions, fill_with_n_queens};

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve and count N-Queens placements on a square board")]
struct Args {
    /// Board dimension. When omitted, the dimension is read from stdin.
    size: Option<usize>,

    /// Emit the result as a single JSON object instead of text
    #[arg(long)]
    json: bool,
}

/// One solver run, serialized for --json output
#[derive(Debug, Serialize)]
struct Report {
    size: usize,
    solved: bool,
    board: Option<BoardSnapshot>,
    combinations: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default()).init();
    let args = Args::parse();

    let dim = match args.size {
        Some(dim) => dim,
        None => read_dimension()?,
    };

    let mut board = Board::new(dim)?;
    info!("solving a {dim}x{dim} board");
    let solved = fill_with_n_queens(&mut board);
    let snapshot = solved.then(|| BoardSnapshot::from_board(&board));
    let rendered = board.to_string();

    board.clear();
    let combinations = count_solutions(&mut board);

    if args.json {
        let report = Report { size: dim, solved, board: snapshot, combinations };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        if solved {
            println!("Below is the first found solution to place {dim} queens on a {dim}x{dim} board:");
        } else {
            println!("There is no way to place {dim} queens on a {dim}x{dim} board:");
        }
        print!("{rendered}");
        println!();
        println!("There are {combinations} possible solutions on a {dim}x{dim} board.");
    }
    Ok(())
}

/// Prompt for and read one board dimension from stdin.
fn read_dimension() -> Result<usize> {
    print!("Enter the dimension of the board you'd like to solve: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read the dimension from stdin")?;
    parse_dimension(&line)
}

fn parse_dimension(input: &str) -> Result<usize> {
    input
        .trim()
        .parse::<usize>()
        .with_context(|| format!("invalid board dimension: {:?}", input.trim()))
}
