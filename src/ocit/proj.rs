use proj4rs::proj::Proj;
use proj4rs::transform::transform;

use crate::error::Error;

use super::structs::ProjectedCoordinate;

const ETRS89_UTM33: &str =
    "+proj=utm +zone=33 +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs";
const WGS84: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// A geographic coordinate pair in EPSG:4326, `x` holding the longitude
/// and `y` the latitude, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub x: f64,
    pub y: f64,
}

/// Reprojects feed coordinates from EPSG:25833 (ETRS89 / UTM zone 33N)
/// into EPSG:4326.
pub struct CoordinateTransformer {
    from: Proj,
    to: Proj,
}

impl CoordinateTransformer {
    pub fn new() -> Result<CoordinateTransformer, Error> {
        Ok(CoordinateTransformer {
            from: Proj::from_proj_string(ETRS89_UTM33)?,
            to: Proj::from_proj_string(WGS84)?,
        })
    }

    /// Reprojects a single projected pair. proj4rs hands geographic
    /// coordinates back in radians.
    pub fn to_wgs84(&self, co: &ProjectedCoordinate) -> Result<GeoCoordinate, Error> {
        let mut point = (co.x, co.y, 0.0);
        transform(&self.from, &self.to, &mut point)?;
        Ok(GeoCoordinate {
            x: point.0.to_degrees(),
            y: point.1.to_degrees(),
        })
    }
}
