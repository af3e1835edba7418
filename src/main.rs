use clap::Parser;
use colored::*;
use log::LevelFilter;
use satb::{load_template, render, repl, ProgressionSolver, SolverConfig, Stepper};
use std::path::PathBuf;
use std::{env, process};

/// Find minimum-movement voice leadings for a chord progression.
///
/// The template file holds the starting pitches on its first line and one
/// chord symbol per line after that.
///
/// Logging is controlled with RUST_LOG; see docs for the env_logger crate.
/// If RUST_LOG is not set, the log level defaults to Warn.
#[derive(Parser)]
#[command(version, about, long_about = None, verbatim_doc_comment)]
struct Cli {
    /// Template file
    file: PathBuf,
    /// Number of voices (4 to 6); defaults to the number of starting pitches
    #[arg(long)]
    voices: Option<usize>,
    /// Let the bass take any chord tone instead of the inversion's bass note
    #[arg(long)]
    no_inversions: bool,
    /// Drop partial solutions costing more than the cheapest plus this much
    #[arg(long, default_value_t = SolverConfig::default().cost_slack)]
    slack: u32,
    /// Choose each voicing by hand
    #[arg(short, long, conflicts_with = "json")]
    interactive: bool,
    /// Print solutions as JSON
    #[arg(long)]
    json: bool,
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut log_builder = env_logger::builder();
    if env::var("RUST_LOG").is_err() {
        log_builder.filter_level(LevelFilter::Warn);
    }
    log_builder.init();

    let template = load_template(&cli.file)?;
    let config = SolverConfig::new(cli.voices.unwrap_or(template.voice_count()))
        .with_inversions(!cli.no_inversions)
        .with_cost_slack(cli.slack);
    let solver = ProgressionSolver::new(config)?;
    log::info!(
        "{} chords, {} voices",
        template.chords.len(),
        config.voice_count
    );

    if cli.interactive {
        let stepper = Stepper::new(solver, template.chords, &template.initial)?;
        return repl::start(stepper);
    }

    let solutions = solver.solve(&template.chords, &template.initial)?;
    if cli.json {
        println!(
            "{}",
            render::render_json(&template.symbols(), &config, &solutions)?
        );
    } else {
        print!("{}", render::render_solutions(&solutions));
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "error:".bright_red().bold(), e);
        process::exit(2);
    }
}
