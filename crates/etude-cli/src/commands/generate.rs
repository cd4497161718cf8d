//! Generate command implementation
//!
//! Generates one or more practice challenges and prints them in colored
//! human-readable form or as JSON.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde_json::json;
use std::process::ExitCode;

use etude_gen::{generate_challenge, Challenge, ChallengeConfig, Mode};
use etude_theory::harmony::Cadence;
use etude_theory::key::Key;

/// Parsed arguments for the generate command.
pub struct GenerateArgs {
    pub mode: String,
    pub seed: Option<u32>,
    pub key: Option<String>,
    pub genre: Option<String>,
    pub length: Option<usize>,
    pub no_extensions: bool,
    pub start_chord: Option<String>,
    pub cadence: Option<String>,
    pub mood: Option<String>,
    pub ensemble_size: Option<usize>,
    pub count: u32,
    pub json: bool,
}

/// Run the generate command.
pub fn run(args: GenerateArgs) -> Result<ExitCode> {
    let mode = parse_mode(&args.mode)?;
    let key = args
        .key
        .as_deref()
        .map(str::parse::<Key>)
        .transpose()
        .context("invalid --key")?;
    let cadence = args
        .cadence
        .as_deref()
        .map(str::parse::<Cadence>)
        .transpose()
        .context("invalid --cadence")?;

    if args.count == 0 {
        bail!("--count must be at least 1");
    }

    let config = ChallengeConfig {
        key,
        genre: args.genre,
        length: args.length,
        include_extensions: Some(!args.no_extensions),
        start_chord: args.start_chord,
        cadence,
        mood: args.mood,
        ensemble_size: args.ensemble_size,
    };

    let base_seed = args.seed.unwrap_or_else(rand::random);

    let mut outputs = Vec::with_capacity(args.count as usize);
    for offset in 0..args.count {
        let seed = base_seed.wrapping_add(offset);
        let challenge = generate_challenge(mode, &config, seed)
            .with_context(|| format!("generation failed for seed {seed}"))?;
        outputs.push((seed, challenge));
    }

    if args.json {
        print_json(&outputs)?;
    } else {
        for (seed, challenge) in &outputs {
            print_human(*seed, challenge);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Resolve a mode tag, rejecting anything unrecognized.
fn parse_mode(tag: &str) -> Result<Mode> {
    match tag {
        "simple" | "advanced" | "markov" | "functional" => Ok(Mode::from_tag(tag)),
        other => bail!("unknown mode: {other} (expected simple, advanced, markov, or functional)"),
    }
}

/// Print challenges as a JSON array (single object for one challenge).
fn print_json(outputs: &[(u32, Challenge)]) -> Result<()> {
    let values: Vec<serde_json::Value> = outputs
        .iter()
        .map(|(seed, challenge)| json!({ "seed": seed, "challenge": challenge }))
        .collect();

    let payload = if values.len() == 1 {
        serde_json::to_string_pretty(&values[0])?
    } else {
        serde_json::to_string_pretty(&values)?
    };
    println!("{payload}");
    Ok(())
}

/// Print one challenge with colored output.
fn print_human(seed: u32, challenge: &Challenge) {
    println!(
        "{} {} {}",
        "Challenge".cyan().bold(),
        format!("[{}]", challenge.metadata.mode.tag()).dimmed(),
        format!("(seed {seed})").dimmed()
    );
    println!("  {} {}", "Chords:".green().bold(), challenge.chord);
    println!(
        "  {} {}",
        "Instruments:".green().bold(),
        challenge.instruments
    );

    if let Some(info) = &challenge.metadata.chord_info {
        println!("  {} {}", "Key:".dimmed(), info.key);
        if let Some(tempo) = &info.tempo {
            println!(
                "  {} {} BPM ({})",
                "Tempo:".dimmed(),
                tempo.bpm,
                tempo.band
            );
        }
        if let Some(structure) = &info.structure {
            println!(
                "  {} {}",
                "Structure:".dimmed(),
                structure.sections.join(" / ")
            );
        }
        if let Some(cadence) = info.cadence {
            println!("  {} {}", "Cadence:".dimmed(), cadence);
        }
        if let Some(probability) = info.probability {
            println!("  {} {probability:.4}", "Probability:".dimmed());
        }
        println!("  {} {}", "About:".dimmed(), info.description);
    }
    if let Some(info) = &challenge.metadata.ensemble_info {
        println!("  {} {}", "Ensemble:".dimmed(), info.description);
    }
    println!();
}
