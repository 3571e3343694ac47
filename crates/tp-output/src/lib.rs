//! `tp-output` — tabular export of planning runs.
//!
//! | Writer        | Files created                                         |
//! |---------------|-------------------------------------------------------|
//! | [`CsvWriter`] | `towers.csv`, `routes.csv`, `route_metrics.csv`       |
//!
//! Writers implement [`OutputWriter`] and are driven by [`export_run`].
//! [`read_towers_csv`] loads `towers.csv` back into a `TowerTable` with its
//! density and tier columns; coordinates survive the round trip to six
//! decimals and missing coordinates stay missing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tp_output::{CsvWriter, export_run};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! export_run(&mut writer, &table, &density, &tiers, &plan)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;


pub use csv::{CsvWriter, LoadedTowers, read_towers_csv, read_towers_reader};
pub use error::{OutputError, OutputResult};
pub use export::{export_run, route_rows, tower_rows};
pub use row::{RouteMetricsRow, RouteStopRow, TowerRow};
pub use writer::OutputWriter;
