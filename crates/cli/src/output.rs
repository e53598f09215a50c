//! Report shapes for stdout, JSON and CSV.

use anyhow::{Context, Result};
use polars::prelude::*;
use polyclose::dms::expected_sum_degrees;
use polyclose::prelude::{
    fit_to_viewport, Angle, CorrectionResult, PolygonGeometry, Vec2, ViewCfg,
};
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct AngleRow {
    pub index: usize,
    pub degrees: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub dms: String,
}

impl AngleRow {
    fn rows(angles: &[Angle]) -> Vec<AngleRow> {
        angles
            .iter()
            .enumerate()
            .map(|(i, a)| AngleRow {
                index: i + 1,
                degrees: a.degrees(),
                minutes: a.minutes(),
                seconds: a.seconds(),
                dms: a.to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct CorrectionReport {
    pub sides: usize,
    pub error_seconds: i128,
    pub expected_sum_degrees: i64,
    pub corrected_sum: String,
    pub residual_seconds: i128,
    pub exact: bool,
    pub raw: Vec<AngleRow>,
    pub corrected: Vec<AngleRow>,
}

impl CorrectionReport {
    pub fn new(raw: &[Angle], result: &CorrectionResult) -> Self {
        Self {
            sides: result.sides(),
            error_seconds: result.error_seconds,
            expected_sum_degrees: expected_sum_degrees(result.sides()),
            corrected_sum: result.corrected_sum().to_string(),
            residual_seconds: result.residual_seconds(),
            exact: result.is_exact(),
            raw: AngleRow::rows(raw),
            corrected: AngleRow::rows(&result.corrected),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ViewportReport {
    pub size: f64,
    pub zoom: f64,
    pub scale: f64,
    pub vertices: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
pub struct PolygonReport {
    pub correction: CorrectionReport,
    pub decimal_angles: Vec<f64>,
    /// Closed ring in the unscaled plane.
    pub vertices: Vec<[f64; 2]>,
    pub bounds: [[f64; 2]; 2],
    pub misclosure: f64,
    pub viewport: Option<ViewportReport>,
}

fn xy(points: &[Vec2<f64>]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

impl PolygonReport {
    pub fn new(raw: &[Angle], result: &CorrectionResult, geom: &PolygonGeometry, view: ViewCfg) -> Self {
        let b = geom.bounds();
        let viewport = view.scale_for(geom).zip(fit_to_viewport(geom, view)).map(|(scale, pts)| {
            ViewportReport {
                size: view.size,
                zoom: view.zoom.level(),
                scale,
                vertices: xy(&pts),
            }
        });
        Self {
            correction: CorrectionReport::new(raw, result),
            decimal_angles: geom.decimal_angles.clone(),
            vertices: xy(&geom.vertices),
            bounds: [[b.min.x, b.min.y], [b.max.x, b.max.y]],
            misclosure: geom.misclosure(),
            viewport,
        }
    }
}

pub fn print_tables(report: &CorrectionReport) {
    print_table("Raw Angles", &report.raw);
    println!("Error: {} seconds", report.error_seconds);
    print_table("Corrected Angles", &report.corrected);
    println!("Sum of Corrected Angles: {}", report.corrected_sum);
    if report.exact {
        println!("Sum is exactly {} degrees", report.expected_sum_degrees);
    } else {
        println!(
            "Sum is off by {}\" from {} degrees after rounding",
            report.residual_seconds, report.expected_sum_degrees
        );
    }
}

fn print_table(title: &str, rows: &[AngleRow]) {
    println!("{title}:");
    println!("{:<10}{:>9}{:>9}{:>9}", "Angle", "Degrees", "Minutes", "Seconds");
    for r in rows {
        let name = format!("Angle {}", r.index);
        println!("{name:<10}{:>9}{:>9}{:>9}", r.degrees, r.minutes, r.seconds);
    }
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// One row per angle: raw and corrected components side by side.
pub fn write_table_csv(path: &Path, report: &CorrectionReport) -> Result<()> {
    let mut df = polars::df!(
        "angle" => report.raw.iter().map(|r| r.index as u32).collect::<Vec<_>>(),
        "raw_degrees" => column(&report.raw, |r| r.degrees),
        "raw_minutes" => column(&report.raw, |r| r.minutes),
        "raw_seconds" => column(&report.raw, |r| r.seconds),
        "corrected_degrees" => column(&report.corrected, |r| r.degrees),
        "corrected_minutes" => column(&report.corrected, |r| r.minutes),
        "corrected_seconds" => column(&report.corrected, |r| r.seconds)
    )?;
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

fn column(rows: &[AngleRow], f: fn(&AngleRow) -> i64) -> Vec<i64> {
    rows.iter().map(f).collect()
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}
