//! Assemble output rows from a planning run and drive a writer.

use tracing::info;

use tp_route::RoutePlan;
use tp_spatial::ExpansionTier;
use tp_synth::TowerTable;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, RouteMetricsRow, RouteStopRow, TowerRow};

/// Enriched tower rows: one per tower, in table order, including towers
/// without coordinates.  Those towers have no density, and their tier cell
/// is left empty too.
pub fn tower_rows(
    table:   &TowerTable,
    density: &[Option<u32>],
    tiers:   &[ExpansionTier],
) -> OutputResult<Vec<TowerRow>> {
    if density.len() != table.len() {
        return Err(OutputError::LengthMismatch { column: "density", expected: table.len(), got: density.len() });
    }
    if tiers.len() != table.len() {
        return Err(OutputError::LengthMismatch { column: "tier", expected: table.len(), got: tiers.len() });
    }
    Ok(table
        .iter()
        .zip(density.iter().zip(tiers))
        .map(|(t, (&d, &tier))| TowerRow::from_tower(t, d, d.map(|_| tier)))
        .collect())
}

/// Stop rows for every route in `plan`, resolving tower ids to codes.
pub fn route_rows(plan: &RoutePlan, table: &TowerTable) -> OutputResult<Vec<(Vec<RouteStopRow>, RouteMetricsRow)>> {
    plan.iter()
        .map(|route| {
            let stops = route
                .stops
                .iter()
                .enumerate()
                .map(|(i, &id)| {
                    let tower = table.get(id).ok_or_else(|| OutputError::UnknownTower {
                        zone: route.zone.clone(),
                        id,
                    })?;
                    Ok(RouteStopRow {
                        zone:     route.zone.clone(),
                        sequence: i + 1,
                        tower_id: tower.code().to_owned(),
                    })
                })
                .collect::<OutputResult<Vec<_>>>()?;
            Ok((stops, RouteMetricsRow::from(route)))
        })
        .collect()
}

/// Write the enriched tower table and all routes to `writer`, then finish it.
pub fn export_run<W: OutputWriter>(
    writer:  &mut W,
    table:   &TowerTable,
    density: &[Option<u32>],
    tiers:   &[ExpansionTier],
    plan:    &RoutePlan,
) -> OutputResult<()> {
    let towers = tower_rows(table, density, tiers)?;
    let routes = route_rows(plan, table)?;

    writer.write_towers(&towers)?;
    for (stops, metrics) in &routes {
        writer.write_route(stops, metrics)?;
    }
    writer.finish()?;

    info!(towers = towers.len(), zones = routes.len(), "exported planning run");
    Ok(())
}
