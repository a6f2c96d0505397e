use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use csv_combiner::combine::{combine_directory, verify_directory};

#[derive(Debug, Parser)]
#[command(name = "combine-csv")]
#[command(about = "Concatenate same-schema CSV files into one combined file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Combine every CSV file in a directory into <directory>/combined.csv.
    Combine(CombineArgs),
    /// Check that every CSV file in a directory shares one schema, without writing.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
struct CombineArgs {
    /// Directory to scan for .csv files.
    directory: PathBuf,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Directory to scan for .csv files.
    directory: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Combine(args) => run_combine(args),
        Command::Check(args) => run_check(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_combine(args: CombineArgs) -> Result<(), String> {
    let outcome = combine_directory(&args.directory).map_err(|err| err.to_string())?;

    println!(
        "Combined {} file(s) ({} body byte(s)) into '{}'.",
        outcome.files_merged,
        outcome.body_bytes,
        outcome.output_path.display(),
    );
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let outcome = verify_directory(&args.directory).map_err(|err| err.to_string())?;

    println!(
        "Checked {} file(s); all match schema '{}'.",
        outcome.files_checked, outcome.schema,
    );
    Ok(())
}
