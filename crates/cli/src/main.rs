//! calltree command-line interface
//!
//! ## Commands
//!
//! - `analyze <ROOT>` - Render the project's call trees (Mermaid or PlantUML)
//! - `functions <ROOT>` - Dump extracted function records as JSON
//!
//! Exit code 2 means no functions were found for the language.

mod cli;

use anyhow::{Context, Result};
use calltree_analyzer::{Analyzer, AnalyzerConfig, AnalyzerError};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat, ScanArgs};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

const NO_FUNCTIONS_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(AnalyzerError::NoFunctions { .. }) = err.downcast_ref::<AnalyzerError>() {
                eprintln!("{err}");
                return ExitCode::from(NO_FUNCTIONS_EXIT);
            }
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr; stdout carries the diagram
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            root,
            scan,
            grammar,
            max_depth,
            format,
            output,
        } => {
            let mut config = load_config(&scan)?;
            if let Some(grammar) = grammar {
                config.grammar = grammar;
            }
            if let Some(max_depth) = max_depth {
                config.max_depth = max_depth;
            }

            let result = Analyzer::new(config).analyze_path(&root)?;
            log::info!(
                "{} functions, {} entry points, {} recursive groups",
                result.summary.total_functions,
                result.summary.entry_point_count,
                result.summary.recursive_groups.len()
            );

            let rendered = match format {
                OutputFormat::Text => result.diagram,
                OutputFormat::Json => serde_json::to_string_pretty(&result)?,
            };
            emit(&rendered, output.as_deref())
        }
        Commands::Functions { root, scan, output } => {
            let analyzer = Analyzer::new(load_config(&scan)?);
            let sources = analyzer.scan(&root)?;
            let functions = analyzer.extract_all(&sources);
            log::info!(
                "Extracted {} functions from {} files",
                functions.len(),
                sources.len()
            );
            emit(&serde_json::to_string_pretty(&functions)?, output.as_deref())
        }
    }
}

/// Config file (if any) with command-line overrides applied
fn load_config(scan: &ScanArgs) -> Result<AnalyzerConfig> {
    let mut config = match &scan.config {
        Some(path) => AnalyzerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    if let Some(language) = &scan.language {
        config.language = language.clone();
    }
    if let Some(folder) = &scan.code_folder {
        config.code_folder = Some(folder.clone());
    }
    if scan.prefer_structured {
        config.extraction.prefer_structured = true;
    }

    Ok(config)
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{text}\n"))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}
