//! Catalog command implementation
//!
//! Lists the built-in keys, genres, moods, tempo bands, and progression
//! patterns so users can see what the generate flags accept.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::process::ExitCode;

use etude_theory::genre::GENRE_PROFILES;
use etude_theory::instruments::{ENSEMBLE_RULES, MOODS};
use etude_theory::key::Key;
use etude_theory::pattern::PROGRESSION_PATTERNS;
use etude_theory::tempo::TEMPO_BANDS;

/// Run the catalog command.
pub fn run(json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json()
    } else {
        run_human()
    }
}

fn run_json() -> Result<ExitCode> {
    let payload = json!({
        "modes": ["simple", "advanced", "markov", "functional"],
        "keys": Key::ALL.iter().map(|key| key.name()).collect::<Vec<_>>(),
        "genres": GENRE_PROFILES.iter().map(|profile| profile.name).collect::<Vec<_>>(),
        "ensemble_genres": ENSEMBLE_RULES.iter().map(|rule| rule.genre).collect::<Vec<_>>(),
        "moods": MOODS,
        "tempo_bands": TEMPO_BANDS.iter().map(|band| {
            json!({ "tag": band.tag, "min_bpm": band.min_bpm, "max_bpm": band.max_bpm })
        }).collect::<Vec<_>>(),
        "patterns": PROGRESSION_PATTERNS.iter().map(|pattern| {
            json!({
                "name": pattern.name,
                "description": pattern.description,
                "complexity": pattern.complexity.name(),
                "mood": pattern.mood,
            })
        }).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(ExitCode::SUCCESS)
}

fn run_human() -> Result<ExitCode> {
    println!("{}", "Modes".cyan().bold());
    println!("  simple, advanced, markov, functional");

    println!("{}", "Keys".cyan().bold());
    let keys: Vec<&str> = Key::ALL.iter().map(|key| key.name()).collect();
    println!("  {}", keys.join(", "));

    println!("{}", "Genres (pattern weighting)".cyan().bold());
    for profile in &GENRE_PROFILES {
        println!("  {} ({} patterns)", profile.name, profile.patterns.len());
    }

    println!("{}", "Genres (ensemble rules)".cyan().bold());
    for rule in &ENSEMBLE_RULES {
        println!(
            "  {} (roles: {}, max {})",
            rule.genre,
            rule.required_roles.join(", "),
            rule.max_instruments
        );
    }

    println!("{}", "Moods".cyan().bold());
    println!("  {}", MOODS.join(", "));

    println!("{}", "Tempo bands".cyan().bold());
    for band in &TEMPO_BANDS {
        println!("  {} ({}-{} BPM)", band.tag, band.min_bpm, band.max_bpm);
    }

    println!("{}", "Progression patterns".cyan().bold());
    for pattern in &PROGRESSION_PATTERNS {
        println!(
            "  {} - {} [{}]",
            pattern.name.bold(),
            pattern.description,
            pattern.complexity.name()
        );
    }

    Ok(ExitCode::SUCCESS)
}
