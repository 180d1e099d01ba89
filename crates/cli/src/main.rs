use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planar::{centroid_area_with, CentroidCfg, Dim, Geometry, Recenter};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::Shape;
use provenance::Provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planar centroid and area of geometry files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute (centroid, area) of one geometry file
    Centroid {
        #[arg(long)]
        input: PathBuf,
        /// Input format; inferred from the file extension if omitted
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// How CSV vertex rows are interpreted
        #[arg(long = "as", value_enum, default_value_t = Shape::Ring)]
        shape: Shape,
        #[arg(long, value_enum, default_value_t = RecenterArg::FirstVertex)]
        recenter: RecenterArg,
        /// Write the result here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RecenterArg {
    FirstVertex,
    BoundCenter,
    Off,
}

impl From<RecenterArg> for Recenter {
    fn from(r: RecenterArg) -> Self {
        match r {
            RecenterArg::FirstVertex => Recenter::FirstVertex,
            RecenterArg::BoundCenter => Recenter::BoundCenter,
            RecenterArg::Off => Recenter::Off,
        }
    }
}

/// Result document printed or written by `centroid`.
#[derive(Debug, Serialize)]
struct CentroidReport {
    kind: &'static str,
    vertices: usize,
    dimension: Option<u8>,
    centroid: [f64; 2],
    area: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Centroid {
            input,
            format,
            shape,
            recenter,
            out,
        } => centroid(&input, format, shape, recenter, out.as_deref()),
        Action::Report => report(),
    }
}

fn detect_format(input: &Path) -> Result<Format> {
    match input.extension().and_then(|e| e.to_str()) {
        Some("json") | Some("geojson") => Ok(Format::Json),
        Some("csv") => Ok(Format::Csv),
        _ => bail!(
            "cannot infer format of {}; pass --format",
            input.display()
        ),
    }
}

fn load(input: &Path, format: Option<Format>, shape: Shape) -> Result<Geometry> {
    let format = match format {
        Some(f) => f,
        None => detect_format(input)?,
    };
    match format {
        Format::Json => input::read_json(input),
        Format::Csv => input::read_csv(input, shape),
    }
}

fn summarize(g: &Geometry, cfg: CentroidCfg) -> CentroidReport {
    let (c, area) = centroid_area_with(g, cfg);
    CentroidReport {
        kind: g.kind(),
        vertices: g.vertex_count(),
        dimension: g.dimension().map(|d| match d {
            Dim::Zero => 0,
            Dim::One => 1,
            Dim::Two => 2,
        }),
        centroid: [c.x, c.y],
        area,
    }
}

fn centroid(
    input: &Path,
    format: Option<Format>,
    shape: Shape,
    recenter: RecenterArg,
    out: Option<&Path>,
) -> Result<()> {
    let g = load(input, format, shape)?;
    let cfg = CentroidCfg::with_recenter(recenter.into());
    tracing::info!(
        input = %input.display(),
        kind = g.kind(),
        vertices = g.vertex_count(),
        recenter = ?cfg.recenter,
        "centroid"
    );
    let report = summarize(&g, cfg);
    tracing::info!(
        cx = report.centroid[0],
        cy = report.centroid[1],
        area = report.area,
        "result"
    );

    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)?;
    let prov = Provenance::new(serde_json::json!({
        "recenter": format!("{:?}", cfg.recenter),
        "shape": format!("{shape:?}"),
    }))
    .with_input(input);
    let prov_path = provenance::write_sidecar(out, prov)?;
    tracing::debug!(out = %out.display(), provenance = %prov_path.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let prov = Provenance::new(serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}
