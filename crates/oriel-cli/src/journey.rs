//! # Journey Subcommand
//!
//! Prints one journey's steps, or a single step in full.

use anyhow::{bail, Result};
use clap::Args;

use oriel_content::{ContentTable, Journey};

/// Arguments for the `oriel journey` subcommand.
#[derive(Args, Debug)]
pub struct JourneyArgs {
    /// Journey key (outpatient, clinician, surgical, student).
    pub key: String,

    /// Show only this step (zero-based), with all touchpoint detail.
    #[arg(long)]
    pub step: Option<usize>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Print a journey.
pub fn run_journey(args: &JourneyArgs) -> Result<u8> {
    let table = ContentTable::builtin();
    let Some(journey) = table.journey(&args.key) else {
        let known: Vec<&str> = table.journeys.iter().map(|j| j.key.as_str()).collect();
        bail!("unknown journey '{}' (known: {})", args.key, known.join(", "));
    };

    match args.step {
        Some(index) => {
            let Some(step) = journey.step(index) else {
                bail!(
                    "step {} out of range for '{}' ({} steps)",
                    index,
                    journey.key,
                    journey.steps.len()
                );
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(step)?);
            } else {
                println!("{} — {} ({}, {})", step.id, step.title, step.location, step.time);
                println!("  {}", step.physical);
                for item in &step.digital {
                    println!("  digital:    {item}");
                }
                for item in &step.background {
                    println!("  background: {item}");
                }
            }
        }
        None => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(journey)?);
            } else {
                print_outline(journey);
            }
        }
    }
    Ok(0)
}

fn print_outline(journey: &Journey) {
    println!("{} — {}", journey.title, journey.persona);
    println!("{}", journey.description);
    for (index, step) in journey.steps.iter().enumerate() {
        println!(
            "  {}. {} @ {} ({})",
            index + 1,
            step.title,
            step.location,
            step.time
        );
    }
}
