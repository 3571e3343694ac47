//! CSV output backend and tower-table loader.
//!
//! Creates three files in the configured output directory:
//! - `towers.csv`
//! - `routes.csv`
//! - `route_metrics.csv`

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use tracing::info;

use tp_core::TowerId;
use tp_spatial::ExpansionTier;
use tp_synth::{SynthError, TowerTable};

use crate::row::{METRICS_COLUMNS, ROUTE_COLUMNS, TOWER_COLUMNS};
use crate::writer::OutputWriter;
use crate::{OutputResult, RouteMetricsRow, RouteStopRow, TowerRow};

/// Writes a planning run to three CSV files.
pub struct CsvWriter {
    towers:   Writer<File>,
    routes:   Writer<File>,
    metrics:  Writer<File>,
    finished: bool,
}

/// Open `path` and write `header`.  Rows are serialized without automatic
/// headers so an empty table still gets its header line.
fn open(path: &Path, header: &[&str]) -> OutputResult<Writer<File>> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;
    w.write_record(header)?;
    Ok(w)
}

impl CsvWriter {
    /// Create (or truncate) the three CSV files in `dir` and write the header
    /// rows.  `dir` must exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            towers:   open(&dir.join("towers.csv"), &TOWER_COLUMNS)?,
            routes:   open(&dir.join("routes.csv"), &ROUTE_COLUMNS)?,
            metrics:  open(&dir.join("route_metrics.csv"), &METRICS_COLUMNS)?,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_towers(&mut self, rows: &[TowerRow]) -> OutputResult<()> {
        for row in rows {
            self.towers.serialize(row)?;
        }
        Ok(())
    }

    fn write_route(&mut self, stops: &[RouteStopRow], metrics: &RouteMetricsRow) -> OutputResult<()> {
        for stop in stops {
            self.routes.serialize(stop)?;
        }
        self.metrics.serialize(metrics)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.towers.flush()?;
        self.routes.flush()?;
        self.metrics.flush()?;
        Ok(())
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// A tower table read back from `towers.csv`, with its derived columns.
pub struct LoadedTowers {
    pub table:   TowerTable,
    pub density: Vec<Option<u32>>,
    pub tiers:   Vec<Option<ExpansionTier>>,
}

/// Load a tower table written by [`CsvWriter`] (or any file with the same
/// columns).  Tower ids are assigned in row order.
pub fn read_towers_csv(path: &Path) -> OutputResult<LoadedTowers> {
    let loaded = read_towers_reader(File::open(path)?)?;
    info!(path = %path.display(), towers = loaded.table.len(), "loaded tower table");
    Ok(loaded)
}

/// Like [`read_towers_csv`] but from any reader.
pub fn read_towers_reader<R: Read>(reader: R) -> OutputResult<LoadedTowers> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut towers = Vec::new();
    let mut density = Vec::new();
    let mut tiers = Vec::new();

    for (i, result) in rdr.deserialize::<TowerRow>().enumerate() {
        let row = result?;
        let id = TowerId::try_from(i).map_err(|_| SynthError::TableFull(TowerId::LIMIT.0))?;
        towers.push(row.to_tower(id)?);
        density.push(row.density);
        tiers.push(row.tier()?);
    }

    Ok(LoadedTowers { table: TowerTable::new(towers)?, density, tiers })
}
