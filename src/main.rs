mod analyze;
mod assemble;
mod classify;
mod cli;
mod clock;
mod config;
mod error;
mod logging;
mod report;
mod types;

use crate::analyze::Engine;
use crate::classify::FocusClassifier;
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::error::DevMeterError;
use crate::types::config::DevMeterConfig;
use crate::types::profile::{ProfileRecord, ProfileSnapshot};
use crate::types::report::AnalysisReport;
use crate::types::scoring::CATEGORY_NAMES;
use clap::Parser;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_PASS_LINE: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

const PASS_LINE: u8 = 50;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DevMeterError> {
    if !path.exists() {
        return Err(DevMeterError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn clock_for(now: Option<&str>) -> Result<Arc<dyn Clock>, DevMeterError> {
    match now {
        Some(raw) => Ok(Arc::new(FixedClock(clock::parse_reference_time(raw)?))),
        None => Ok(Arc::new(SystemClock)),
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn verdict(percentage: u8, fail_below: bool) -> i32 {
    if fail_below && percentage < PASS_LINE {
        exit_code::BELOW_PASS_LINE
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32, DevMeterError> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let root = cli.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let loaded = config::load_config(&root)?;
    if loaded.is_none() {
        info!(root = %root.display(), "no devmeter.toml found; using built-in defaults");
    }
    let cfg: DevMeterConfig = loaded.unwrap_or_default();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let profile: ProfileRecord = read_json(&cmd.file)?;
            let engine = Engine::from_config(&cfg, clock_for(cmd.now.as_deref())?)?;
            let result = engine.score(&profile);
            println!(
                "{}",
                report::render_score(&result, output_format(&cmd.format))?
            );
            Ok(verdict(result.percentage, cmd.fail_below))
        }
        cli::Commands::Analyze(cmd) => {
            let snapshot: ProfileSnapshot = read_json(&cmd.file)?;
            let clock = clock_for(cmd.now.as_deref())?;
            let classifier = FocusClassifier::from_config(cfg.focus.as_ref());
            let options = assemble::AssembleOptions::from_config(&cfg);
            let profile = assemble::assemble(&snapshot, &classifier, clock.now(), &options);

            let engine = Engine::from_config(&cfg, clock)?;
            let result = engine.score(&profile);
            let percentage = result.percentage;
            let analysis = AnalysisReport::new(profile, result);
            println!(
                "{}",
                report::render_analysis(&analysis, output_format(&cmd.format))?
            );
            Ok(verdict(percentage, cmd.fail_below))
        }
        cli::Commands::Focus(cmd) => {
            let snapshot: ProfileSnapshot = read_json(&cmd.file)?;
            let classifier = FocusClassifier::from_config(cfg.focus.as_ref());
            let repositories =
                &snapshot.repositories[..snapshot.repositories.len().min(cfg.max_repositories())];
            debug!(
                categories = classifier.categories().len(),
                max_areas = classifier.max_areas(),
                "classifying snapshot repositories"
            );
            let areas = classifier.classify(repositories);
            if areas.is_empty() {
                println!("focus: none");
            } else {
                for area in areas {
                    println!("{area}");
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Weights => {
            let engine = Engine::from_config(&cfg, Arc::new(SystemClock))?;
            for (name, weight) in CATEGORY_NAMES.iter().zip(engine.weights().values()) {
                println!("{name}: {weight:.2}");
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
