//! pascal - print Pascal's triangle and diamond shapes

mod cli;
mod error;
mod render;

use clap::Parser;
use cli::{Args, Shape};
use error::CliError;
use pascal_core::BinomialGenerator;
use std::io;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.shape {
        None => render::print_demo(&mut out),
        Some(shape) => {
            let generator = BinomialGenerator::new(args.strategy.into());
            let (rows, half_width) = dimensions(shape, &args);
            match shape {
                Shape::Triangle => render::print_triangle(&generator, rows, half_width, &mut out),
                Shape::Diamond => render::print_diamond(&generator, rows, half_width, &mut out),
            }
        }
    }
}

/// Per-shape defaults, overridable from the command line
fn dimensions(shape: Shape, args: &Args) -> (u32, usize) {
    let (rows, half_width) = match shape {
        Shape::Triangle => (render::TRIANGLE_ROWS, render::TRIANGLE_HALF_WIDTH),
        Shape::Diamond => (render::DIAMOND_ROWS, render::DIAMOND_HALF_WIDTH),
    };
    (
        args.rows.unwrap_or(rows),
        args.half_width.unwrap_or(half_width),
    )
}
