//! Interactive draft console.
//!
//! Loads the static inputs, runs the draft turn by turn with the operator
//! confirming or overriding each internal suggestion, and writes a JSON
//! summary at the end.

mod console;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use draft_core::{load_draft, write_json, DraftConfig, DraftPaths, Unit};

use console::ConsoleDirector;

#[derive(Parser)]
#[command(name = "draft_cli")]
#[command(about = "Run a live draft from prepared input files", long_about = None)]
struct Cli {
    /// Candidates CSV file
    #[arg(long)]
    candidates: PathBuf,

    /// Directory of per-unit roster files (<unit>.txt)
    #[arg(long)]
    rosters: PathBuf,

    /// Directory of per-track priority files (<track>.txt)
    #[arg(long)]
    priorities: PathBuf,

    /// Overall turn order file, one unit name per line
    #[arg(long)]
    turn_order: PathBuf,

    /// Internal turn order file, one track name per line
    #[arg(long)]
    internal_order: PathBuf,

    /// The unit this console drafts for
    #[arg(long, default_value = "airborne")]
    own_unit: Unit,

    /// Last turn index at which restricted-handling candidates may be picked
    #[arg(long, default_value_t = draft_core::DEFAULT_RESTRICTED_CUTOFF)]
    restricted_cutoff: usize,

    /// Where to write the JSON result summary
    #[arg(long, default_value = "draft_summary.json")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let paths = DraftPaths {
        candidates: cli.candidates,
        roster_dir: cli.rosters,
        priority_dir: cli.priorities,
        turn_order: cli.turn_order,
        internal_order: cli.internal_order,
    };
    let config = DraftConfig {
        own_unit: cli.own_unit,
        restricted_cutoff: cli.restricted_cutoff,
    };

    println!("Loading draft inputs...");
    let mut draft = load_draft(&paths, config).context("failed to load draft inputs")?;
    draft.start().context("draft input validation failed")?;
    println!(
        "Draft ready: {} turns, {} internal picks, {} candidates.",
        draft.turn_order().len(),
        draft.remaining_internal().len(),
        draft.registry().len(),
    );

    let mut director = ConsoleDirector::new();
    draft.run(&mut director).context("draft run failed")?;

    println!("Draft over after {} picks.", draft.pick_log().len());
    write_json(&draft, &cli.out).context("failed to write draft summary")?;
    println!("Summary written to {}.", cli.out.display());

    Ok(())
}
