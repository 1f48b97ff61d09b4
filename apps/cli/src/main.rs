// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shadow-Lite batch driver.
//!
//! Loads each configured solid, runs the hidden-line pass, and reports the
//! total area of the facets that end up fully invisible from above.
//!
//! # Usage
//!
//! ```text
//! run-shadow                      # models from SHADOW_MODELS in SHADOW_DATA_DIR
//! run-shadow a.geom b.geom        # explicit files
//! SHADOW_REPORT=json run-shadow   # machine-readable output
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use shadow_lite_geometry::{DrawOptions, Polyedr};

mod config;
mod report;
mod svg;

use config::{Config, ReportFormat};
use report::{BatchReport, SolidReport};
use svg::SvgRenderer;

/// One solid to process.
#[derive(Debug, Clone)]
struct Job {
    name: String,
    path: PathBuf,
}

/// Positional paths replace the configured model list.
fn jobs(config: &Config, args: impl IntoIterator<Item = String>) -> Vec<Job> {
    let explicit: Vec<Job> = args
        .into_iter()
        .map(|arg| {
            let path = PathBuf::from(arg);
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Job { name, path }
        })
        .collect();

    if !explicit.is_empty() {
        return explicit;
    }

    config
        .models
        .iter()
        .map(|name| Job {
            name: name.clone(),
            path: config.model_path(name),
        })
        .collect()
}

fn process(config: &Config, job: &Job) -> anyhow::Result<SolidReport> {
    let start = Instant::now();
    let solid = Polyedr::load(&job.path)
        .with_context(|| format!("failed to load {}", job.path.display()))?;
    let elapsed = start.elapsed();

    if let Some(dir) = &config.svg_dir {
        let mut svg = SvgRenderer::new(config.canvas_size);
        solid.draw(
            &mut svg,
            DrawOptions {
                show_hidden: config.draw_hidden,
            },
        );
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let out = dir.join(format!("{}.svg", job.name));
        std::fs::write(&out, svg.document())
            .with_context(|| format!("failed to write {}", out.display()))?;
        tracing::debug!(path = %out.display(), "drawing written");
    }

    Ok(SolidReport::new(&job.name, &solid, elapsed))
}

/// Returns false when stdin is closed.
fn wait_for_return() -> io::Result<bool> {
    print!("Press Return to continue...");
    io::stdout().flush()?;
    let mut line = String::new();
    Ok(io::stdin().lock().read_line(&mut line)? > 0)
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so that a JSON report on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,shadow_lite_geometry=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    let jobs = jobs(&config, std::env::args().skip(1));

    tracing::info!(
        solids = jobs.len(),
        data_dir = %config.data_dir.display(),
        report = ?config.report,
        svg = config.svg_dir.is_some(),
        "Starting Shadow-Lite batch"
    );

    let batch_start = Instant::now();
    let mut batch = BatchReport::default();

    for (i, job) in jobs.iter().enumerate() {
        match process(&config, job) {
            Ok(report) => {
                tracing::info!(
                    name = %report.name,
                    area = report.invisible_area,
                    elapsed_ms = report.elapsed_secs * 1000.0,
                    "solid processed"
                );
                if config.report == ReportFormat::Text {
                    println!("{report}");
                }
                batch.solids.push(report);
            }
            Err(err) => {
                tracing::error!(name = %job.name, error = ?err, "skipping solid");
                batch.failed.push(job.name.clone());
            }
        }

        if config.pause && i + 1 < jobs.len() && !wait_for_return()? {
            tracing::info!("stdin closed, stopping");
            break;
        }
    }

    batch.elapsed_secs = batch_start.elapsed().as_secs_f64();

    if config.report == ReportFormat::Json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    }

    tracing::info!(
        processed = batch.solids.len(),
        failed = batch.failed.len(),
        elapsed_secs = batch.elapsed_secs,
        "Batch complete"
    );

    Ok(())
}
