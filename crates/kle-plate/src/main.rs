//! kle-plate binary entry point.
//!
//! Reads a keyboard-layout JSON file and writes a switch-plate SVG drawing:
//!
//! ```text
//! kle-plate <input.json> <output.svg> [config.toml]
//! ```
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()       -- TOML config, defaults when absent
//!  └─ run()
//!       ├─ parse_document -- kle-core document model
//!       ├─ build_plate    -- application layer, geometry only
//!       └─ render_svg     -- infrastructure, text out
//! ```
//!
//! A failure to read or parse the input aborts the run with a diagnostic and
//! writes no output, but is deliberately not fatal to the process — the tool
//! is run from build scripts that treat a missing layout as "nothing to do".

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kle_core::document::parse::parse_document;
use kle_plate::application::generate_plate::{build_plate, PlateSpec};
use kle_plate::infrastructure::storage::config::load_config;
use kle_plate::infrastructure::svg::render_svg;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: kle-plate <input.json> <output.svg> [config.toml]");
        return ExitCode::from(2);
    }

    let config = match load_config(args.get(3).map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise structured logging.  The configured level is overridden
    // by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    match run(Path::new(&args[1]), Path::new(&args[2]), &PlateSpec::from(&config.plate)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Diagnose with the full cause chain; no partial output exists.
            error!("plate generation failed: {e:#}");
            ExitCode::SUCCESS
        }
    }
}

/// Runs one plate generation: read, resolve, render, write.
fn run(input: &Path, output: &Path, spec: &PlateSpec) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("reading layout {}", input.display()))?;
    let document = parse_document(&json)
        .with_context(|| format!("parsing layout {}", input.display()))?;

    let drawing = build_plate(&document, spec)?;
    let source_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let svg = render_svg(&drawing, &source_name);

    std::fs::write(output, svg)
        .with_context(|| format!("writing plate SVG {}", output.display()))?;

    info!(
        "plate SVG written to {} ({} switch cutouts)",
        output.display(),
        drawing.holes.len()
    );
    Ok(())
}
