//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, RouteMetricsRow, RouteStopRow, TowerRow};

/// Sink for one planning run's tables.
///
/// [`export_run`](crate::export_run) drives a writer: towers first, then one
/// `write_route` call per zone in plan order, then `finish`.
pub trait OutputWriter {
    /// Write a batch of tower rows.
    fn write_towers(&mut self, rows: &[TowerRow]) -> OutputResult<()>;

    /// Write one zone's stops and metrics.  `stops` is empty for a zone with
    /// an empty route; the metrics row is still written.
    fn write_route(&mut self, stops: &[RouteStopRow], metrics: &RouteMetricsRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
