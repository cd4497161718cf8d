//! Etude CLI - practice-challenge generation from the command line.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod commands;

/// Etude - Musical practice-challenge generator
#[derive(Parser)]
#[command(name = "etude")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a practice challenge (chord progression + ensemble)
    Generate {
        /// Generation mode (simple, advanced, markov, functional)
        #[arg(short, long, default_value = "simple")]
        mode: String,

        /// Seed for reproducible output (random when omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Target key (C, G, D, A, E, F)
        #[arg(short, long)]
        key: Option<String>,

        /// Genre for pattern weighting and ensemble selection
        #[arg(short, long)]
        genre: Option<String>,

        /// Progression length in chords
        #[arg(short, long)]
        length: Option<usize>,

        /// Disable chord extensions (advanced mode)
        #[arg(long)]
        no_extensions: bool,

        /// Opening chord for the Markov walk (markov mode)
        #[arg(long)]
        start_chord: Option<String>,

        /// Cadence (authentic, plagal, deceptive; functional mode)
        #[arg(long)]
        cadence: Option<String>,

        /// Ensemble mood (bright, dark, energetic, calm, mysterious)
        #[arg(long)]
        mood: Option<String>,

        /// Upper bound on ensemble size
        #[arg(long)]
        ensemble_size: Option<usize>,

        /// Number of challenges to generate by incrementing the seed
        #[arg(long, default_value = "1")]
        count: u32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the built-in catalogs (modes, keys, genres, moods, patterns)
    Catalog {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            mode,
            seed,
            key,
            genre,
            length,
            no_extensions,
            start_chord,
            cadence,
            mood,
            ensemble_size,
            count,
            json,
        } => commands::generate::run(commands::generate::GenerateArgs {
            mode,
            seed,
            key,
            genre,
            length,
            no_extensions,
            start_chord,
            cadence,
            mood,
            ensemble_size,
            count,
            json,
        }),
        Commands::Catalog { json } => commands::catalog::run(json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
