//! Example printing a shuffled starting layout.
//!
//! Each cell of the printed grid shows the id of the tile that starts there.
//! Tile `i` belongs on the row-major cell `i`, so a solved board reads
//! `0, 1, 2, ...` left to right, top to bottom.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example shuffle_layout
//! ```
//!
//! Reproduce a layout from its seed:
//!
//! ```sh
//! cargo run --example shuffle_layout -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Derive the seed from a phrase and change the grid size:
//!
//! ```sh
//! cargo run --example shuffle_layout -- --phrase sunflowers --grid 3
//! ```

use std::process;

use clap::Parser;
use jigsaw_core::GridSize;
use jigsaw_generator::{GeneratedLayout, LayoutGenerator, ShuffleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of cells along each side of the grid.
    #[arg(long, value_name = "SIDE", default_value_t = 4)]
    grid: u8,

    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<ShuffleSeed>,

    /// Text hashed into a seed.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(grid_size) = GridSize::new(args.grid) else {
        eprintln!("--grid must be between 1 and {}.", GridSize::MAX);
        process::exit(1);
    };

    let seed = match (args.seed, args.phrase.as_deref()) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => ShuffleSeed::from_phrase(phrase),
        (None, None) => ShuffleSeed::random(),
    };

    let layout = LayoutGenerator::new(grid_size).generate_with_seed(seed);
    print_layout(&layout);
}

fn print_layout(layout: &GeneratedLayout) {
    let side = usize::from(layout.grid_size.get());
    let mut cells = vec![0; layout.grid_size.cell_count()];
    for (tile, pos) in layout.placements.iter().enumerate() {
        cells[pos.index(layout.grid_size)] = tile;
    }

    println!("Seed: {}", layout.seed);
    println!("Grid: {}", layout.grid_size);
    println!();
    for row in cells.chunks(side) {
        let line = row
            .iter()
            .map(|tile| format!("{tile:>3}"))
            .collect::<String>();
        println!("{line}");
    }
}
