use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use spmat::matrix::{DEFAULT_MAX_COLS, DEFAULT_MAX_ROWS};
use spmat::prelude::*;

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Operation {
    Add,
    Subtract,
    Multiply,
}

#[derive(Parser, Debug)]
#[command(about = "Sparse integer matrix arithmetic over coordinate-triple text files")]
struct Args {
    /// The operation to perform
    #[arg(value_enum)]
    operation: Operation,
    /// Path of the left-hand matrix file
    lhs: PathBuf,
    /// Path of the right-hand matrix file
    rhs: PathBuf,
    /// Maximum number of rows to display
    #[arg(long, default_value_t = DEFAULT_MAX_ROWS)]
    max_rows: usize,
    /// Maximum number of columns to display
    #[arg(long, default_value_t = DEFAULT_MAX_COLS)]
    max_cols: usize,
}

fn run(args: &Args) -> Result<()> {
    let lhs = SparseMatrix::from_path(&args.lhs)?;
    let rhs = SparseMatrix::from_path(&args.rhs)?;

    let result = match args.operation {
        Operation::Add => lhs.add(&rhs)?,
        Operation::Subtract => lhs.subtract(&rhs)?,
        Operation::Multiply => lhs.multiply(&rhs)?,
    };

    print!("{}", result.readable_with_limits(args.max_rows, args.max_cols));
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
