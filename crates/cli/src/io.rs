//! Point input and sweep output records.
//!
//! Inputs are either CSV (columns `x`, `y`, optional `id`; read through
//! polars) or a JSON array of `{ "x", "y", "id"? }` objects. Either every row
//! carries an `id` or none does; in the latter case rows are numbered by
//! position. Mixed files are rejected since positional numbers could collide
//! with explicit ids.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use sectorsweep::api::{Group, Point, PointId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One input/sample point as stored on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    pub x: f64,
    pub y: f64,
}

impl PointRecord {
    pub fn tagged(self, position: usize) -> (PointId, Point) {
        (
            PointId(self.id.unwrap_or(position)),
            Point::new(self.x, self.y),
        )
    }
}

/// One emitted group; angles in radians.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupRecord {
    pub start_arm: f64,
    pub end_arm: f64,
    pub arc: f64,
    pub ids: Vec<usize>,
    pub points: Vec<[f64; 2]>,
}

impl From<&Group> for GroupRecord {
    fn from(g: &Group) -> Self {
        let s = g.sector();
        Self {
            start_arm: s.start_arm(),
            end_arm: s.end_arm_reduced(),
            arc: s.arc(),
            ids: g.ids().map(|id| id.0).collect(),
            points: g.points().map(|p| [p.x(), p.y()]).collect(),
        }
    }
}

/// Read points from `.csv` or `.json`, picked by extension.
pub fn read_points(path: &Path) -> Result<Vec<PointRecord>> {
    let records = read_records(path)?;
    let with_id = records.iter().filter(|r| r.id.is_some()).count();
    if with_id != 0 && with_id != records.len() {
        bail!(
            "{}: {with_id} of {} rows carry an id; give every row an id or none",
            path.display(),
            records.len()
        );
    }
    Ok(records)
}

fn read_records(path: &Path) -> Result<Vec<PointRecord>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("json") => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing points from {}", path.display()))
        }
        _ => bail!(
            "unsupported input {}: expected .csv or .json",
            path.display()
        ),
    }
}

fn read_csv(path: &Path) -> Result<Vec<PointRecord>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading csv {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let column = |name: &str| -> Result<Vec<Option<f64>>> {
        let s = df
            .column(name)
            .with_context(|| format!("{}: missing column `{name}`", path.display()))?
            .cast(&DataType::Float64)?;
        Ok(s.f64()?.into_iter().collect())
    };
    let xs = column("x")?;
    let ys = column("y")?;
    let ids: Option<Vec<Option<u64>>> = match df.column("id") {
        Ok(s) => Some(s.cast(&DataType::UInt64)?.u64()?.into_iter().collect()),
        Err(_) => None,
    };

    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(row, (x, y))| {
            let (Some(x), Some(y)) = (x, y) else {
                bail!("{}: row {row} has an empty coordinate", path.display());
            };
            let id = ids
                .as_ref()
                .and_then(|v| v.get(row).copied().flatten())
                .map(|id| id as usize);
            Ok(PointRecord { id, x, y })
        })
        .collect()
}

/// Serialize `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
