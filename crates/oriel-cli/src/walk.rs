//! # Walk Subcommand
//!
//! Drives the navigation model through a scripted sequence of step intents,
//! waiting out each real debounce window and printing every screen-reader
//! announcement as it settles. With no script, walks the journey start to
//! finish.

use std::time::Instant;

use anyhow::{bail, Result};
use clap::Args;

use oriel_content::ContentTable;
use oriel_nav::{Navigator, INTRO_DURATION, JOURNEY_START_DEBOUNCE, STEP_DEBOUNCE};

/// Arguments for the `oriel walk` subcommand.
#[derive(Args, Debug)]
pub struct WalkArgs {
    /// Journey key (outpatient, clinician, surgical, student).
    pub key: String,

    /// Comma-separated intents: "next", "prev", or "jump:N".
    /// Defaults to advancing through every step.
    #[arg(long)]
    pub script: Option<String>,
}

/// One scripted step intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOp {
    Next,
    Prev,
    Jump(usize),
}

/// Parse a comma-separated script.
pub fn parse_script(script: &str) -> Result<Vec<WalkOp>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token {
            "next" => Ok(WalkOp::Next),
            "prev" => Ok(WalkOp::Prev),
            _ => match token.strip_prefix("jump:") {
                Some(index) => match index.parse() {
                    Ok(index) => Ok(WalkOp::Jump(index)),
                    Err(_) => bail!("bad jump index in '{token}'"),
                },
                None => bail!("unknown walk intent '{token}' (expected next, prev, or jump:N)"),
            },
        })
        .collect()
}

/// Replay a journey.
pub fn run_walk(args: &WalkArgs) -> Result<u8> {
    let table = ContentTable::builtin();
    let Some(journey) = table.journey(&args.key) else {
        bail!("unknown journey '{}'", args.key);
    };
    let script = match &args.script {
        Some(script) => parse_script(script)?,
        None => vec![WalkOp::Next; journey.steps.len() - 1],
    };

    let mut nav = Navigator::new(table);
    let start = Instant::now();

    std::thread::sleep(INTRO_DURATION);
    nav.tick(start.elapsed());
    flush(&mut nav);

    nav.start_journey(&args.key);
    flush(&mut nav);
    std::thread::sleep(JOURNEY_START_DEBOUNCE);
    nav.tick(start.elapsed());
    flush(&mut nav);

    for op in script {
        match op {
            WalkOp::Next => nav.advance_step(),
            WalkOp::Prev => nav.retreat_step(),
            WalkOp::Jump(index) => nav.jump_to_step(index),
        }
        std::thread::sleep(STEP_DEBOUNCE);
        nav.tick(start.elapsed());
        flush(&mut nav);
    }

    if let Some((position, total)) = nav.step_position() {
        tracing::debug!("walk finished at step {position} of {total}");
    }
    Ok(0)
}

fn flush(nav: &mut Navigator) {
    for line in nav.drain_announcements() {
        println!("{line}");
    }
}
