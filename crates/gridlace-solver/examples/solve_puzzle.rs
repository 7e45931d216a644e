//! Example demonstrating the solver engine on a grid literal.
//!
//! This example shows how to:
//! - Parse a grid literal (81 cells, `1`-`9` for digits, `.`/`_`/`0` for
//!   empty, whitespace ignored)
//! - Validate the board before searching
//! - Solve the whole board, or fill a single cell with `--hint`
//!
//! # Usage
//!
//! Solve a board:
//!
//! ```sh
//! cargo run --example solve_puzzle -- \
//!     "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
//! ```
//!
//! Ask for one cell instead of the full solution:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --hint \
//!     "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
//! ```

use std::process;

use clap::Parser;
use gridlace_core::{Grid, Position};
use gridlace_solver::{hint, solve, validate};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid literal: 81 cells in row-major order.
    grid: String,

    /// Fill a single cell instead of the whole board.
    #[arg(long)]
    hint: bool,
}

fn main() {
    let args = Args::parse();

    let mut grid: Grid = match args.grid.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if let Err(err) = validate(&grid) {
        eprintln!("{err}");
        process::exit(1);
    }

    if args.hint {
        match hint(&mut grid) {
            Ok(Some(placement)) => {
                println!(
                    "Placed {} at column {}, row {}:",
                    placement.digit,
                    placement.position.x(),
                    placement.position.y()
                );
                print_grid(&grid);
            }
            Ok(None) => println!("Board is already complete."),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    } else {
        match solve(&mut grid) {
            Ok(()) => {
                println!("Solution:");
                print_grid(&grid);
            }
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    }
}

fn print_grid(grid: &Grid) {
    for y in 0..9 {
        let mut line = String::new();
        for x in 0..9 {
            match grid[Position::new(x, y)] {
                Some(digit) => line.push_str(&digit.to_string()),
                None => line.push('_'),
            }
            if x == 2 || x == 5 {
                line.push(' ');
            }
        }
        println!("  {line}");
        if y == 2 || y == 5 {
            println!();
        }
    }
}
