//! Example demonstrating Sudoku board generation.
//!
//! Generates a puzzle and prints the seed, problem, and solution. Pass a
//! fixed seed to reproduce a board exactly.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Carve all the way down to a strictly minimal puzzle:
//!
//! ```sh
//! cargo run --example generate_board -- --strict-minimal
//! ```
//!
//! Reproduce a board from its seed:
//!
//! ```sh
//! cargo run --example generate_board -- \
//!     --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```

use std::process;

use clap::Parser;
use quadrille_core::Board;
use quadrille_generator::{BoardGenerator, BoardSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Keep removing individual clues past the symmetric passes until the
    /// puzzle is strictly minimal.
    #[arg(long)]
    strict_minimal: bool,

    /// Fixed 64-hex-character seed for a reproducible board.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.as_deref().map(|text| {
        text.parse::<BoardSeed>().unwrap_or_else(|err| {
            eprintln!("Invalid seed: {err}");
            process::exit(2);
        })
    });

    let generator = BoardGenerator::new();
    let board = match seed {
        Some(seed) => generator.generate_with_seed(args.strict_minimal, seed),
        None => generator.generate(args.strict_minimal),
    };

    println!("Seed:");
    println!("  {}", board.seed);
    println!();
    println!("Problem ({} clues):", board.problem.clue_count());
    print_board(&board.problem);
    println!();
    println!("Solution:");
    print_board(&board.solution);
}

fn print_board(board: &Board) {
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}
