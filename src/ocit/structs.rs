use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Response envelope returned by the feed for one object type query.
/// A non-zero error code means the query failed server-side.
#[derive(Debug, Serialize, Deserialize)]
pub struct InquireResponse {
    #[serde(rename = "errorCode")]
    pub error_code: i64,
    #[serde(rename = "dataList")]
    pub data_list: Option<DataList>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DataList {
    #[serde(default)]
    pub ds: Vec<Dataset>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Dataset {
    pub data: TrafficMessage,
}

/// One traffic message as delivered by the feed.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrafficMessage {
    #[serde(default)]
    pub description: Vec<String>,
    pub admin: Admin,
    #[serde(default)]
    pub validity: Vec<ValidityEntry>,
    #[serde(default)]
    pub location: Vec<Location>,
}

/// Administrative header of a message.
#[derive(Debug, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    pub subtype: String,
    pub severity: String,
}

/// A time range attached to a message. Only entries whose kind is
/// "validity" govern whether the message is currently applicable.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidityEntry {
    pub kind: String,
    pub from: DateTime<FixedOffset>,
    #[serde(default)]
    pub until: Option<DateTime<FixedOffset>>,
}

/// A place a message applies to, described as a road direction plus one or
/// more coordinate rings.
#[derive(Debug, Serialize, Deserialize)]
pub struct Location {
    pub roaddescription: RoadDescription,
    #[serde(default)]
    pub co_description: Vec<CoordinateDescription>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoadDescription {
    pub direction: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CoordinateDescription {
    #[serde(default)]
    pub co: Vec<ProjectedCoordinate>,
}

/// A coordinate pair in the feed's projected reference system (EPSG:25833).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectedCoordinate {
    pub x: f64,
    pub y: f64,
}
