//! R-tree index over tower positions.
//!
//! Radius queries go through a degree-space bounding box sized so that every
//! tower within `radius_km` under the run's projection is a candidate.
//! Callers apply the exact distance test to the candidates.
//!
//! A box that crosses ±180° is split into one box per side of the
//! antimeridian.  A box that reaches a pole spans every longitude.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use tp_core::{GeoPoint, KM_PER_DEGREE, Projection, TowerId};
use tp_synth::TowerTable;

/// Relative padding on the query box so boundary points survive rounding.
const ENVELOPE_PAD: f64 = 1e-9;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// `[lat, lon]` point with the associated `TowerId`.
#[derive(Clone, Debug)]
struct TowerEntry {
    point: [f64; 2],
    id:    TowerId,
}

impl RTreeObject for TowerEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for TowerEntry {
    /// Squared Euclidean distance in lat/lon space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── TowerIndex ────────────────────────────────────────────────────────────────

/// Bulk-loaded R-tree of positioned towers.  Towers without coordinates are
/// not indexed.
pub struct TowerIndex {
    tree: RTree<TowerEntry>,
}

impl TowerIndex {
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (TowerId, GeoPoint)>,
    {
        let entries: Vec<TowerEntry> = points
            .into_iter()
            .map(|(id, p)| TowerEntry { point: [p.lat, p.lon], id })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn from_table(table: &TowerTable) -> Self {
        Self::from_points(table.positioned())
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Towers whose position lies in the search box around `center` for
    /// `radius_km`.  A superset of the towers within `radius_km`; the order
    /// is unspecified.
    pub fn candidates_within(
        &self,
        center:     GeoPoint,
        radius_km:  f64,
        projection: Projection,
    ) -> impl Iterator<Item = (TowerId, GeoPoint)> + '_ {
        let (half_lat, half_lon) = search_half_widths(center, radius_km, projection);
        let (lat_lo, lat_hi) = (center.lat - half_lat, center.lat + half_lat);
        let (lon_lo, lon_hi) = (center.lon - half_lon, center.lon + half_lon);

        let mut spans = Vec::with_capacity(2);
        if half_lon >= 180.0 {
            spans.push((-180.0, 180.0));
        } else {
            spans.push((lon_lo.max(-180.0), lon_hi.min(180.0)));
            if lon_lo < -180.0 {
                spans.push((lon_lo + 360.0, 180.0));
            }
            if lon_hi > 180.0 {
                spans.push((-180.0, lon_hi - 360.0));
            }
        }

        spans.into_iter().flat_map(move |(lo, hi)| {
            let envelope = AABB::from_corners([lat_lo, lo], [lat_hi, hi]);
            self.tree
                .locate_in_envelope(&envelope)
                .map(|e| (e.id, GeoPoint::new(e.point[0], e.point[1])))
        })
    }

    /// The tower closest to `pos` in degree space.  `None` for an empty index.
    pub fn nearest(&self, pos: GeoPoint) -> Option<TowerId> {
        self.tree.nearest_neighbor(&[pos.lat, pos.lon]).map(|e| e.id)
    }
}

/// Half-widths in degrees of the query box.  The longitude half-width uses
/// the largest `|lat|` the box can reach, which is where a degree of
/// longitude is shortest.  It is capped at 180, meaning every longitude;
/// that is the case whenever the box touches a pole.
fn search_half_widths(center: GeoPoint, radius_km: f64, projection: Projection) -> (f64, f64) {
    let half_lat = radius_km / KM_PER_DEGREE * (1.0 + ENVELOPE_PAD);
    let edge_lat = center.lat.abs() + half_lat;
    let half_lon = if edge_lat >= 90.0 {
        180.0
    } else {
        (radius_km / projection.km_per_degree_lon(edge_lat) * (1.0 + ENVELOPE_PAD)).min(180.0)
    };
    (half_lat, half_lon)
}
