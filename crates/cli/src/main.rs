use anyhow::{ensure, Result};
use clap::{Args, Parser, Subcommand};
use polyclose::api::{build_polygon, correct_angles, CorrectionResult, ViewCfg, Zoom};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod output;
mod provenance;

use output::{CorrectionReport, PolygonReport};
use provenance::{RunRecord, ViewParams};

#[derive(Parser)]
#[command(name = "polyclose")]
#[command(about = "Close measured polygon angles and rebuild the outline")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Distribute the closure error over the measured angles
    Correct {
        #[command(flatten)]
        angles: AngleArgs,
        /// Write the report as JSON; each written file gets a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
        /// Export the raw/corrected table as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Correct, then rebuild the polygon and fit it to a square viewport
    Polygon {
        #[command(flatten)]
        angles: AngleArgs,
        /// Viewport side length
        #[arg(long, default_value_t = 350.0)]
        size: f64,
        /// Zoom factor, clamped to [0.5, 2.0]
        #[arg(long, default_value_t = 1.0)]
        zoom: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct AngleArgs {
    /// Interior angle as D:M:S or "D M S"; repeat once per vertex, in order
    #[arg(long = "angle", value_name = "DMS")]
    angles: Vec<String>,
    /// CSV file with one angle per row
    #[arg(long, conflicts_with = "angles")]
    input: Option<PathBuf>,
    /// Column holding the angles in --input
    #[arg(long, default_value = "angle")]
    column: String,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Correct { angles, out, csv } => correct(angles, out, csv),
        Action::Polygon {
            angles,
            size,
            zoom,
            out,
        } => polygon(angles, size, zoom, out),
        Action::Report => report(),
    }
}

fn correct(args: AngleArgs, out: Option<PathBuf>, csv: Option<PathBuf>) -> Result<()> {
    let raw = input::load_angles(&args.angles, args.input.as_deref(), &args.column)?;
    let result = correct_angles(&raw, raw.len())?;
    tracing::info!(
        sides = result.sides(),
        error_seconds = result.error_seconds,
        residual_seconds = result.residual_seconds(),
        "correct"
    );
    let report = CorrectionReport::new(&raw, &result);
    output::print_tables(&report);
    warn_on_residual(&result);

    let mut run = RunRecord::new("correct", &raw, &result);
    if let Some(path) = &csv {
        output::write_table_csv(path, &report)?;
        run.push_output(path);
        tracing::info!(csv = %path.display(), "table_written");
    }
    if let Some(path) = &out {
        output::write_json(path, &report)?;
        run.push_output(path);
        tracing::info!(out = %path.display(), "report_written");
    }
    log_sidecars(&run)
}

fn polygon(args: AngleArgs, size: f64, zoom: f64, out: Option<PathBuf>) -> Result<()> {
    ensure!(
        size.is_finite() && size > 0.0,
        "--size must be a positive number, got {size}"
    );
    let raw = input::load_angles(&args.angles, args.input.as_deref(), &args.column)?;
    let result = correct_angles(&raw, raw.len())?;
    warn_on_residual(&result);
    let geom = build_polygon(&result.corrected)?;
    let view = ViewCfg {
        size,
        zoom: Zoom::new(zoom),
        ..ViewCfg::default()
    };
    let report = PolygonReport::new(&raw, &result, &geom, view);
    tracing::info!(
        sides = geom.sides(),
        misclosure = geom.misclosure(),
        scale = ?report.viewport.as_ref().map(|v| v.scale),
        "polygon"
    );

    match out {
        Some(path) => {
            output::write_json(&path, &report)?;
            tracing::info!(out = %path.display(), "polygon_written");
            let mut run = RunRecord::new("polygon", &raw, &result).with_view(ViewParams {
                size,
                zoom: view.zoom.level(),
            });
            run.push_output(&path);
            log_sidecars(&run)?;
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn log_sidecars(run: &RunRecord) -> Result<()> {
    for prov in run.write_sidecars()? {
        tracing::info!(provenance = %prov.display(), "provenance_written");
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": polyclose::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn warn_on_residual(result: &CorrectionResult) {
    if !result.is_exact() {
        tracing::warn!(
            residual_seconds = result.residual_seconds(),
            "corrected sum is off by rounding"
        );
    }
}
