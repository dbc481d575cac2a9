use anyhow::{Context, Result};
use clap::Parser;
use laddercut::cli::{Cli, Command, OutputFormat};
use laddercut::hull::{AxisBounds, EngineConfig, OuterHullEngine};
use laddercut::results::CutResult;
use laddercut::{report, significance};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Engine configuration from file, or the unit square cut with '>' on both axes
fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_toml(path)
            .with_context(|| format!("Failed to load engine config: {}", path.display())),
        None => Ok(EngineConfig::greater_than(
            AxisBounds::new(0.0, 1.0, 0.0, 1.0),
            "x",
            "y",
        )),
    }
}

fn run_rank(
    config: Option<&PathBuf>,
    cuts: &[String],
    top: usize,
    format: OutputFormat,
) -> Result<()> {
    let mut engine = OuterHullEngine::new(load_config(config)?)?;

    for expr in cuts {
        let row = CutResult::from_expr(expr)?;
        engine
            .add_result(&row)
            .with_context(|| format!("Rejected ladder cut '{}'", expr))?;
    }

    match format {
        OutputFormat::Text => print!("{}", report::to_text(&engine, top)),
        OutputFormat::Json => println!("{}", report::to_json(&engine, top)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    match args.command {
        Command::Significance { signal, background } => {
            if !signal.is_finite() || !background.is_finite() {
                anyhow::bail!(
                    "Invalid yields: signal={} background={} (must be finite)",
                    signal,
                    background
                );
            }
            if signal < 0.0 {
                anyhow::bail!("Invalid value for --signal: {} (must be >= 0)", signal);
            }
            println!("{:.6}", significance(signal, background));
        }
        Command::Rank {
            config,
            cuts,
            top,
            format,
        } => run_rank(config.as_ref(), &cuts, top, format)?,
    }

    Ok(())
}
