//! Heap sort demo
//!
//! Sorts a list of integers through a [`PriorityQueue`] and prints the result.
//!
//! ## Running
//!
//! ```bash
//! # Sort the built-in list, largest first
//! cargo run --example sort
//!
//! # Sort your own numbers, smallest first, with trace output
//! RUST_LOG=trace cargo run --example sort -- --ascending 8 -2 5 0
//! ```

use clap::Parser;
use prioqueue::{Natural, PriorityQueue, Reversed};

const DEFAULT_INPUT: [i64; 12] = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 9];

#[derive(Parser)]
#[command(version, about = "Sort integers with a binary heap")]
struct Cli {
    /// Numbers to sort; a fixed sample list is used when none are given
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<i64>,

    /// Print smallest first instead of largest first
    #[arg(long)]
    ascending: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let input = if cli.numbers.is_empty() {
        DEFAULT_INPUT.to_vec()
    } else {
        cli.numbers
    };

    let sorted = if cli.ascending {
        PriorityQueue::new(input, Reversed(Natural)).into_sorted_vec()
    } else {
        PriorityQueue::new(input, Natural).into_sorted_vec()
    };

    println!("{:?}", sorted);
}
