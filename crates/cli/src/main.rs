use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use winding::Orientation;

mod geojson;
mod provenance;

use geojson::{for_each_ring, label, ring_points, RingReport};
use provenance::{provenance_block, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "winding")]
#[command(about = "Turning-angle orientation of polygon rings", version)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print one JSON line per polygon ring with its rotation count
    Count {
        #[arg(long)]
        input: PathBuf,
    },
    /// Reverse rings so exterior rings wind the requested way and holes the other
    Orient {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Exterior::Ccw)]
        exterior: Exterior,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Required orientation of exterior rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Exterior {
    /// Counterclockwise exteriors, clockwise holes (RFC 7946)
    Ccw,
    /// Clockwise exteriors, counterclockwise holes
    Cw,
}

impl Exterior {
    fn orientation(self) -> Orientation {
        match self {
            Exterior::Ccw => Orientation::CounterClockwise,
            Exterior::Cw => Orientation::Clockwise,
        }
    }
}

/// Ring tallies of one `orient` run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct OrientStats {
    rings: usize,
    reversed: usize,
    skipped: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Count { input } => count(&input),
        Action::Orient {
            input,
            out,
            exterior,
        } => orient(&input, &out, exterior).map(|_| ()),
        Action::Report => report(),
    }
}

fn read_document(path: &Path) -> Result<Value> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn count_rows(doc: &mut Value) -> Result<Vec<RingReport>> {
    let mut rows = Vec::new();
    for_each_ring(doc, |at, positions| {
        let points = ring_points(positions)
            .with_context(|| format!("feature {} polygon {}", at.feature, at.polygon))?;
        rows.push(RingReport::new(at, points.len(), winding::winding(&points)));
        Ok(())
    })?;
    Ok(rows)
}

fn count(input: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), "count");
    let mut doc = read_document(input)?;
    let rows = count_rows(&mut doc)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for row in &rows {
        serde_json::to_writer(&mut out, row)?;
        writeln!(out)?;
    }
    tracing::info!(rings = rows.len(), "count done");
    Ok(())
}

fn orient_document(doc: &mut Value, exterior: Exterior) -> Result<OrientStats> {
    let mut stats = OrientStats::default();
    for_each_ring(doc, |at, positions| {
        stats.rings += 1;
        let target = if at.is_exterior() {
            exterior.orientation()
        } else {
            exterior.orientation().reversed()
        };
        let points = ring_points(positions)
            .with_context(|| format!("feature {} polygon {}", at.feature, at.polygon))?;
        match winding::orientation(&points) {
            Ok(current) if current == target => {}
            Ok(current) => {
                tracing::debug!(?at, from = label(current), to = label(target), "reversing ring");
                positions.reverse();
                stats.reversed += 1;
            }
            Err(err) => {
                tracing::warn!(?at, %err, "leaving ring as is");
                stats.skipped += 1;
            }
        }
        Ok(())
    })?;
    Ok(stats)
}

fn orient(input: &Path, out: &Path, exterior: Exterior) -> Result<OrientStats> {
    tracing::info!(input = %input.display(), out = %out.display(), ?exterior, "orient");
    let mut doc = read_document(input)?;
    let stats = orient_document(&mut doc, exterior)?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out, serde_json::to_vec(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(json!({
        "input": input.to_string_lossy(),
        "exterior": label(exterior.orientation()),
    }))
    .with_stats(json!({
        "rings": stats.rings,
        "reversed": stats.reversed,
        "skipped": stats.skipped,
    }));
    write_sidecar(out, payload)?;
    tracing::info!(
        rings = stats.rings,
        reversed = stats.reversed,
        skipped = stats.skipped,
        "orient done"
    );
    Ok(stats)
}

fn report() -> Result<()> {
    let obj = provenance_block(json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
