use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sectorsweep::api::{
    draw_point_cloud, Circle, CloudReplay, GroupSweep, Point, PointCloudCfg, Sector, SweepCfg,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod io;
mod provenance;

use io::{GroupRecord, PointRecord};

#[derive(Parser)]
#[command(name = "sectorsweep-cli")]
#[command(about = "Run sector sweeps over point files and sample test clouds")]
struct Cmd {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy, Debug)]
struct CircleArgs {
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    cx: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    cy: f64,
    #[arg(long)]
    radius: f64,
}

impl CircleArgs {
    fn circle(&self) -> Result<Circle> {
        Ok(Circle::new(Point::new(self.cx, self.cy), self.radius)?)
    }
}

#[derive(Args, Clone, Debug)]
struct SweepArgs {
    /// Points as .csv (x, y[, id]) or .json ([{x, y, id?}])
    #[arg(long)]
    input: PathBuf,
    #[command(flatten)]
    circle: CircleArgs,
    /// Sector width in degrees, in (0, 360)
    #[arg(long)]
    arc_deg: f64,
    /// Initial start arm in degrees
    #[arg(long, default_value_t = 180.0, allow_negative_numbers = true)]
    start_deg: f64,
    /// Re-place each emitted sector between its neighbors
    #[arg(long)]
    align: bool,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Clone, Debug)]
struct SampleArgs {
    #[arg(long)]
    count: usize,
    #[command(flatten)]
    circle: CircleArgs,
    /// Sampling disk radius relative to --radius
    #[arg(long, default_value_t = 1.0)]
    spread: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Subcommand)]
enum Action {
    /// Sweep a sector once around its circle and write every group as JSON
    Sweep(SweepArgs),
    /// Write a seeded point cloud usable as sweep input
    Sample(SampleArgs),
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let default_level = if cmd.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cmd.action {
        Action::Sweep(args) => sweep(&args).map(|_| ()),
        Action::Sample(args) => sample(&args),
        Action::Report => report(),
    }
}

fn sweep(args: &SweepArgs) -> Result<Vec<GroupRecord>> {
    tracing::info!(input = %args.input.display(), arc_deg = args.arc_deg, align = args.align, "sweep");
    let circle = args.circle.circle()?;
    let sector = Sector::with_arms(circle, args.arc_deg.to_radians(), args.start_deg.to_radians())
        .context("invalid sector")?;
    let points = io::read_points(&args.input)?;
    let total = points.len();
    let cfg = SweepCfg {
        align: args.align,
        ..SweepCfg::default()
    };

    let tagged = points
        .into_iter()
        .enumerate()
        .map(|(i, rec)| rec.tagged(i));
    let records = GroupSweep::with_cfg(&sector, tagged, cfg)
        .map(|g| g.map(|g| GroupRecord::from(&g)))
        .collect::<Result<Vec<_>, _>>()
        .context("sweep failed")?;
    tracing::info!(points = total, groups = records.len(), "sweep done");

    io::write_json(&args.out, &records)?;
    write_provenance(
        &args.out,
        "sweep",
        json!({
            "input": args.input.to_string_lossy(),
            "center": [args.circle.cx, args.circle.cy],
            "radius": args.circle.radius,
            "arc_deg": args.arc_deg,
            "start_deg": args.start_deg,
            "align": args.align,
            "points": total,
            "groups": records.len(),
        }),
    )?;
    Ok(records)
}

fn sample(args: &SampleArgs) -> Result<()> {
    tracing::info!(count = args.count, seed = args.seed, index = args.index, "sample");
    let circle = args.circle.circle()?;
    let cfg = PointCloudCfg {
        count: args.count,
        spread: args.spread,
        bearing_step: None,
    };
    let records: Vec<PointRecord> =
        draw_point_cloud(&circle, cfg, CloudReplay::new(args.seed, args.index))
            .into_iter()
            .enumerate()
            .map(|(i, p)| PointRecord {
                id: Some(i),
                x: p.x(),
                y: p.y(),
            })
            .collect();
    io::write_json(&args.out, &records)?;
    write_provenance(
        &args.out,
        "sample",
        json!({
            "count": args.count,
            "center": [args.circle.cx, args.circle.cy],
            "radius": args.circle.radius,
            "spread": args.spread,
            "seed": args.seed,
            "index": args.index,
        }),
    )
}

fn report() -> Result<()> {
    let doc = provenance::document(&provenance::Payload::new("report", json!({})));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[track_caller]
fn write_provenance(out: &Path, command: &'static str, params: serde_json::Value) -> Result<()> {
    let path = provenance::write_sidecar(out, provenance::Payload::new(command, params))?;
    tracing::info!(out = %out.display(), provenance = %path.display(), "wrote");
    Ok(())
}
