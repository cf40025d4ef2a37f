use serde::{Deserialize, Serialize};

use crate::ocit::proj::GeoCoordinate;

/// A GeoJSON position, longitude first.
pub type Position = [f64; 2];

/// The geometry shapes the export produces. A record with a single
/// coordinate ring becomes a Point or LineString; one with several rings
/// becomes a GeometryCollection of independently classified members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    // A ring can arrive empty; that degenerates to a point with an empty
    // coordinate array, hence Vec rather than [f64; 2].
    Point { coordinates: Vec<f64> },
    LineString { coordinates: Vec<Position> },
    GeometryCollection { geometries: Vec<Geometry> },
}

/// Map icon for a message subtype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Baustelle,
    Sperrung,
    Warnung,
}

impl Icon {
    pub fn for_subtype(subtype: &str) -> Icon {
        match subtype {
            "Baustelle" | "Bauarbeiten" => Icon::Baustelle,
            "Sperrung" => Icon::Sperrung,
            _ => Icon::Warnung,
        }
    }
}

/// Derives the output geometry for an entry's locations. A lone ring is
/// classified directly; several rings are wrapped in a collection ordered
/// by ascending coordinate count (stable, so equal-length rings keep their
/// input order). No locations, no geometry.
pub fn classify(locations: &[Vec<GeoCoordinate>]) -> Option<Geometry> {
    match locations.len() {
        0 => None,
        1 => Some(classify_ring(&locations[0])),
        _ => {
            let mut rings: Vec<&Vec<GeoCoordinate>> = locations.iter().collect();
            rings.sort_by_key(|ring| ring.len());
            Some(Geometry::GeometryCollection {
                geometries: rings.into_iter().map(|ring| classify_ring(ring)).collect(),
            })
        }
    }
}

fn classify_ring(ring: &[GeoCoordinate]) -> Geometry {
    if ring.len() > 1 {
        Geometry::LineString {
            coordinates: ring.iter().map(|co| [co.x, co.y]).collect(),
        }
    } else {
        Geometry::Point {
            coordinates: ring.iter().flat_map(|co| [co.x, co.y]).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn co(x: f64, y: f64) -> GeoCoordinate {
        GeoCoordinate { x, y }
    }

    #[test]
    fn no_locations_means_no_geometry() {
        assert_eq!(classify(&[]), None);
    }

    #[test]
    fn single_coordinate_becomes_a_point() {
        let geometry = classify(&[vec![co(13.4, 52.5)]]).expect("geometry");
        assert_eq!(
            geometry,
            Geometry::Point {
                coordinates: vec![13.4, 52.5]
            }
        );
    }

    #[test]
    fn single_ring_with_two_coordinates_becomes_a_line() {
        let geometry = classify(&[vec![co(13.4, 52.5), co(13.5, 52.6)]]).expect("geometry");
        assert_eq!(
            geometry,
            Geometry::LineString {
                coordinates: vec![[13.4, 52.5], [13.5, 52.6]]
            }
        );
    }

    #[test]
    fn several_rings_are_collected_in_ascending_length_order() {
        let long = vec![co(1.0, 1.0), co(2.0, 2.0), co(3.0, 3.0)];
        let short = vec![co(9.0, 9.0)];
        let geometry = classify(&[long, short]).expect("geometry");
        match geometry {
            Geometry::GeometryCollection { geometries } => {
                assert_eq!(geometries.len(), 2);
                assert!(matches!(geometries[0], Geometry::Point { .. }));
                assert!(matches!(geometries[1], Geometry::LineString { .. }));
            }
            other => panic!("expected a collection, got {:?}", other),
        }
    }

    #[test]
    fn equal_length_rings_keep_their_input_order() {
        let first = vec![co(1.0, 1.0), co(2.0, 2.0)];
        let second = vec![co(3.0, 3.0), co(4.0, 4.0)];
        let geometry = classify(&[first, second]).expect("geometry");
        match geometry {
            Geometry::GeometryCollection { geometries } => {
                assert_eq!(
                    geometries[0],
                    Geometry::LineString {
                        coordinates: vec![[1.0, 1.0], [2.0, 2.0]]
                    }
                );
            }
            other => panic!("expected a collection, got {:?}", other),
        }
    }

    #[test]
    fn icons_follow_the_subtype() {
        assert_eq!(Icon::for_subtype("Baustelle"), Icon::Baustelle);
        assert_eq!(Icon::for_subtype("Bauarbeiten"), Icon::Baustelle);
        assert_eq!(Icon::for_subtype("Sperrung"), Icon::Sperrung);
        assert_eq!(Icon::for_subtype("Unknown"), Icon::Warnung);
    }
}
