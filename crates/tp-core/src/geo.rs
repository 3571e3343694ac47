//! Geographic coordinate type and the flat-Earth projection used everywhere
//! in the engine.
//!
//! # Projection policy
//!
//! The engine never computes great-circle distances.  All conversions between
//! degrees and kilometres go through one [`Projection`] value, shared by tower
//! synthesis and by the distance model, so positions and distances always
//! agree:
//!
//! | Policy            | km per ° latitude | km per ° longitude                |
//! |-------------------|-------------------|-----------------------------------|
//! | `Equirectangular` | 111               | 111 × cos(reference latitude)     |
//! | `Flat`            | 111               | 111                               |
//!
//! Synthesis takes the zone centre as the reference latitude; pairwise
//! distances take the midpoint latitude of the pair, which keeps
//! `distance(a, b) == distance(b, a)` exact.
//!
//! Longitudes wrap at the antimeridian: offsets are folded back into
//! [-180, 180] and differences take the short way round, so a zone
//! straddling ±180° behaves like any other.

use std::fmt;

use crate::{TpError, TpResult};

/// Kilometres per degree of latitude (and of longitude at the equator).
pub const KM_PER_DEGREE: f64 = 111.0;

/// Decimal digits kept on every synthesized coordinate.
const COORD_SCALE: f64 = 1_000_000.0;

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A latitude/longitude pair in degrees, double precision.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Construct without validation.  Use [`GeoPoint::try_new`] for
    /// coordinates coming from outside the engine.
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a point, rejecting non-finite values and values outside
    /// [-90, 90] × [-180, 180].
    pub fn try_new(lat: f64, lon: f64) -> TpResult<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(TpError::InvalidCoordinate { lat, lon, reason: "not a finite number" });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(TpError::InvalidCoordinate { lat, lon, reason: "latitude outside [-90, 90]" });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(TpError::InvalidCoordinate { lat, lon, reason: "longitude outside [-180, 180]" });
        }
        Ok(Self { lat, lon })
    }

    /// Round both components to 6 decimal digits (~0.1 m).
    #[inline]
    pub fn rounded(self) -> Self {
        Self {
            lat: (self.lat * COORD_SCALE).round() / COORD_SCALE,
            lon: (self.lon * COORD_SCALE).round() / COORD_SCALE,
        }
    }

    /// Squared Euclidean distance in degree space.  Only meaningful for
    /// ranking nearby points, e.g. picking the tower closest to a centroid.
    #[inline]
    pub fn degree_distance_2(self, other: GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }

    /// Approximate bounding-box check in degrees.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_lat_deg: f64, half_lon_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_lat_deg
            && (self.lon - center.lon).abs() <= half_lon_deg
    }

    /// Arithmetic mean of a set of points.  `None` for an empty input.
    pub fn centroid<I>(points: I) -> Option<GeoPoint>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let (mut lat, mut lon, mut n) = (0.0, 0.0, 0usize);
        for p in points {
            lat += p.lat;
            lon += p.lon;
            n += 1;
        }
        (n > 0).then(|| GeoPoint::new(lat / n as f64, lon / n as f64))
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Fold `lon` into [-180, 180].  Values already in range are returned
/// unchanged.
#[inline]
pub fn wrap_lon(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// `a - b` in degrees of longitude, taking the shorter way round.  Inputs
/// must lie in [-180, 180]; the result lies in [-180, 180] and
/// `lon_delta(b, a) == -lon_delta(a, b)` exactly.
#[inline]
pub fn lon_delta(a: f64, b: f64) -> f64 {
    let d = a - b;
    if d > 180.0 {
        d - 360.0
    } else if d < -180.0 {
        d + 360.0
    } else {
        d
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Degree ↔ kilometre conversion policy.  See the module docs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Projection {
    /// Longitude degrees shrink with the cosine of the reference latitude.
    #[default]
    Equirectangular,
    /// 111 km per degree on both axes, at every latitude.
    Flat,
}

impl Projection {
    /// Kilometres spanned by one degree of longitude at `ref_lat`.
    #[inline]
    pub fn km_per_degree_lon(self, ref_lat: f64) -> f64 {
        match self {
            Projection::Equirectangular => KM_PER_DEGREE * ref_lat.to_radians().cos(),
            Projection::Flat => KM_PER_DEGREE,
        }
    }

    /// Move `center` by `north_km` / `east_km`, using the centre latitude as
    /// the reference for the longitude scale.  The longitude wraps at ±180°.
    ///
    /// The caller keeps `|center.lat| + north_km / 111` below 90; zones
    /// enforce this on construction.
    pub fn offset(self, center: GeoPoint, north_km: f64, east_km: f64) -> GeoPoint {
        GeoPoint::new(
            center.lat + north_km / KM_PER_DEGREE,
            wrap_lon(center.lon + east_km / self.km_per_degree_lon(center.lat)),
        )
    }

    /// Planar distance in kilometres between two points.
    ///
    /// Symmetric by construction: the longitude scale uses the pair's
    /// midpoint latitude.
    #[inline]
    pub fn distance_km(self, a: GeoPoint, b: GeoPoint) -> f64 {
        let north = (a.lat - b.lat) * KM_PER_DEGREE;
        let east = lon_delta(a.lon, b.lon) * self.km_per_degree_lon(0.5 * (a.lat + b.lat));
        north.hypot(east)
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Equirectangular => f.write_str("equirectangular"),
            Projection::Flat => f.write_str("flat"),
        }
    }
}
