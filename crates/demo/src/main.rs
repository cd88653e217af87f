// File: crates/demo/src/main.rs
// Summary: Demo fetches the three social-media CSVs concurrently and writes one SVG per chart.

mod svg;

use anyhow::{Context, Result};
use plot_core::{
    render_box_plot, render_grouped_bar, render_line_chart, AggregatedObservation, ChartConfig,
    DrawCommand, Observation, SeriesPoint,
};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

/// A stalled fetch must not hold a chart open forever.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Accept paths from the CLI or fall back to the bundled sample data.
    let mut args = std::env::args().skip(1);
    let box_path = args.next().unwrap_or_else(|| data_path("socialMedia.csv"));
    let bar_path = args.next().unwrap_or_else(|| data_path("socialMediaAvg.csv"));
    let line_path = args.next().unwrap_or_else(|| data_path("socialMediaTime.csv"));

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;

    // The three charts are independent pipelines: data acquisition may
    // overlap, and a failure in one never blocks the others.
    tokio::join!(
        run("box plot", box_plot(&box_path, &out_dir)),
        run("grouped bar", grouped_bar(&bar_path, &out_dir)),
        run("line chart", line_chart(&line_path, &out_dir)),
    );
    Ok(())
}

async fn run(name: &str, pipeline: impl Future<Output = Result<()>>) {
    if let Err(e) = pipeline.await {
        error!("{name} failed: {e:#}");
    }
}

// ---- chart pipelines --------------------------------------------------------
// Each pipeline is one async fetch followed by a fully synchronous tail
// (parse, render, commit), so a partially-drawn chart is never observable.

async fn box_plot(path: &str, out_dir: &Path) -> Result<()> {
    let text = fetch(path).await?;
    let records = parse_observations(&text)?;
    info!("loaded {} box-plot records from {path}", records.len());
    let cfg =
        ChartConfig::box_plot().with_titles("Social Media Platforms", "Number of Likes");
    let commands = render_box_plot(&records, &cfg)?;
    commit(&out_dir.join("boxplot.svg"), &cfg, &commands)
}

async fn grouped_bar(path: &str, out_dir: &Path) -> Result<()> {
    let text = fetch(path).await?;
    let records = parse_aggregated(&text)?;
    info!("loaded {} bar-chart records from {path}", records.len());
    let cfg = ChartConfig::grouped_bar()
        .with_titles("Social Media Platforms", "Average Number of Likes");
    let commands = render_grouped_bar(&records, &cfg)?;
    commit(&out_dir.join("barplot.svg"), &cfg, &commands)
}

async fn line_chart(path: &str, out_dir: &Path) -> Result<()> {
    let text = fetch(path).await?;
    let points = parse_series(&text)?;
    info!("loaded {} line-chart points from {path}", points.len());
    let cfg = ChartConfig::line_chart().with_titles("Date", "Average Number of Likes");
    let commands = render_line_chart(&points, &cfg)?;
    commit(&out_dir.join("lineplot.svg"), &cfg, &commands)
}

async fn fetch(path: &str) -> Result<String> {
    tokio::time::timeout(FETCH_TIMEOUT, tokio::fs::read_to_string(path))
        .await
        .with_context(|| format!("timed out fetching '{path}'"))?
        .with_context(|| format!("failed to read '{path}'"))
}

fn commit(path: &Path, cfg: &ChartConfig, commands: &[DrawCommand]) -> Result<()> {
    let doc = svg::to_svg(cfg.width, cfg.height, commands);
    std::fs::write(path, doc).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {} ({} draw commands)", path.display(), commands.len());
    Ok(())
}

fn data_path(name: &str) -> String {
    format!("{}/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

// ---- CSV parsing ------------------------------------------------------------

fn parse_observations(text: &str) -> Result<Vec<Observation>> {
    let mut rdr = csv::Reader::from_reader(text.as_bytes());
    let headers = rdr.headers()?.clone();
    let i_cat = column(&headers, "Platform")?;
    let i_val = column(&headers, "Likes")?;
    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        out.push(Observation::new(
            field(&rec, i_cat, row)?,
            number(&rec, i_val, row)?,
        ));
    }
    Ok(out)
}

fn parse_aggregated(text: &str) -> Result<Vec<AggregatedObservation>> {
    let mut rdr = csv::Reader::from_reader(text.as_bytes());
    let headers = rdr.headers()?.clone();
    let i_primary = column(&headers, "Platform")?;
    let i_secondary = column(&headers, "PostType")?;
    let i_val = column(&headers, "AvgLikes")?;
    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        out.push(AggregatedObservation::new(
            field(&rec, i_primary, row)?,
            field(&rec, i_secondary, row)?,
            number(&rec, i_val, row)?,
        ));
    }
    Ok(out)
}

/// Row order is chronological order; no sorting happens here or downstream.
fn parse_series(text: &str) -> Result<Vec<SeriesPoint>> {
    let mut rdr = csv::Reader::from_reader(text.as_bytes());
    let headers = rdr.headers()?.clone();
    let i_key = column(&headers, "Date")?;
    let i_val = column(&headers, "AvgLikes")?;
    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        out.push(SeriesPoint::new(
            field(&rec, i_key, row)?,
            number(&rec, i_val, row)?,
        ));
    }
    Ok(out)
}

fn column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .with_context(|| format!("missing '{name}' column in header"))
}

fn field<'a>(rec: &'a csv::StringRecord, idx: usize, row: usize) -> Result<&'a str> {
    rec.get(idx)
        .map(str::trim)
        .with_context(|| format!("row {}: missing field {idx}", row + 1))
}

/// Non-numeric value fields are a data-quality violation: reported with row
/// context, never silently defaulted.
fn number(rec: &csv::StringRecord, idx: usize, row: usize) -> Result<f64> {
    let raw = field(rec, idx, row)?;
    raw.parse::<f64>()
        .with_context(|| format!("row {}: '{raw}' is not a number", row + 1))
}
