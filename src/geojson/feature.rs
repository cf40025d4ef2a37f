use serde::{Deserialize, Serialize};

use crate::ocit::entry::Entry;

use super::description;
use super::geometry::{self, Geometry, Icon};

/// Name tag of the produced collection, kept stable for map consumers.
const COLLECTION_NAME: &str = "baustellen";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FeatureType {
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FeatureCollectionType {
    FeatureCollection,
}

/// Display window of a feature. `to` stays in the document as null when
/// the record is open-ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidityRange {
    pub from: String,
    pub to: Option<String>,
}

/// Properties attached to every feature. Street, section and content only
/// appear when the source description carries their markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub id: String,
    pub subtype: String,
    pub severity: String,
    pub validity: ValidityRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    pub icon: Icon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: FeatureCollectionType,
    pub name: String,
    pub features: Vec<Feature>,
}

impl Feature {
    /// Builds the output feature for one valid entry.
    pub fn from_entry(entry: &Entry) -> Feature {
        let parts = description::decompose(&entry.description);
        Feature {
            feature_type: FeatureType::Feature,
            properties: Properties {
                id: entry.id.clone(),
                subtype: entry.subtype.clone(),
                severity: entry.severity.clone(),
                validity: ValidityRange {
                    from: entry.valid_from.clone(),
                    to: entry.valid_to.clone(),
                },
                direction: entry.direction.clone(),
                icon: Icon::for_subtype(&entry.subtype),
                street: parts.street,
                section: parts.section,
                content: parts.content,
            },
            geometry: geometry::classify(&entry.locations),
        }
    }
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> FeatureCollection {
        FeatureCollection {
            collection_type: FeatureCollectionType::FeatureCollection,
            name: COLLECTION_NAME.to_string(),
            features,
        }
    }

    /// Renders the collection as pretty-printed JSON. Key order follows the
    /// struct declarations; non-ASCII characters stay literal.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json output is always valid UTF-8
        Ok(String::from_utf8(buf).expect("serialized JSON is UTF-8"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::Europe::Berlin;

    use crate::ocit::proj::GeoCoordinate;

    use super::*;

    fn entry() -> Entry {
        Entry {
            id: "4711".to_string(),
            subtype: "Sperrung".to_string(),
            severity: "high".to_string(),
            description: "$StraßeD$ Müllerstraße $AbschnittD$ 10-12 $InhaltD$ Vollsperrung"
                .to_string(),
            valid_from: "15.07.2026 08:00".to_string(),
            valid_to: None,
            sort_key: Berlin
                .with_ymd_and_hms(2026, 7, 15, 8, 0, 0)
                .single()
                .expect("sort key"),
            direction: Some("Beidseitig".to_string()),
            locations: vec![vec![GeoCoordinate { x: 13.4, y: 52.5 }]],
        }
    }

    #[test]
    fn feature_carries_decomposed_description_and_icon() {
        let feature = Feature::from_entry(&entry());
        assert_eq!(feature.properties.icon, Icon::Sperrung);
        assert_eq!(feature.properties.street.as_deref(), Some("Müllerstraße"));
        assert_eq!(feature.properties.section.as_deref(), Some("10-12"));
        assert_eq!(feature.properties.content.as_deref(), Some("Vollsperrung"));
        assert_eq!(
            feature.geometry,
            Some(Geometry::Point {
                coordinates: vec![13.4, 52.5]
            })
        );
    }

    #[test]
    fn serialized_document_keeps_declaration_order_and_umlauts() {
        let collection = FeatureCollection::new(vec![Feature::from_entry(&entry())]);
        let document = collection.to_pretty_json().expect("serializes");

        assert!(document.contains("Müllerstraße"), "umlauts must stay literal");
        assert!(document.contains("\"name\": \"baustellen\""));
        let type_pos = document.find("\"type\"").expect("type key");
        let name_pos = document.find("\"name\"").expect("name key");
        let features_pos = document.find("\"features\"").expect("features key");
        assert!(type_pos < name_pos && name_pos < features_pos);
        // Open-ended records keep an explicit null end.
        assert!(document.contains("\"to\": null"));
    }

    #[test]
    fn document_round_trips_through_a_standard_parser() {
        let collection = FeatureCollection::new(vec![Feature::from_entry(&entry())]);
        let document = collection.to_pretty_json().expect("serializes");
        let parsed: FeatureCollection = serde_json::from_str(&document).expect("parses back");
        assert_eq!(parsed, collection);
    }

    #[test]
    fn absent_optional_properties_are_omitted_entirely() {
        let mut plain = entry();
        plain.description = "$InhaltD$ Full closure".to_string();
        plain.direction = None;
        plain.locations = vec![];
        let collection = FeatureCollection::new(vec![Feature::from_entry(&plain)]);
        let document = collection.to_pretty_json().expect("serializes");
        assert!(!document.contains("\"street\""));
        assert!(!document.contains("\"section\""));
        assert!(!document.contains("\"direction\""));
        assert!(!document.contains("\"geometry\""));
        assert!(document.contains("\"content\": \"Full closure\""));
    }
}
