use chrono::{DateTime, Utc};
use chrono_tz::Europe::Berlin;
use chrono_tz::Tz;

use crate::error::Error;

use super::proj::{CoordinateTransformer, GeoCoordinate};
use super::structs::{InquireResponse, TrafficMessage, ValidityEntry};

/// Display format for validity bounds on the map, localized to the feed's
/// region (Europe/Berlin).
const TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

const KIND_VALIDITY: &str = "validity";

/// One feed record reduced to the fields the map export needs, with
/// coordinates already reprojected into EPSG:4326.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: String,
    pub subtype: String,
    pub severity: String,
    pub description: String,
    pub valid_from: String,
    pub valid_to: Option<String>,
    pub sort_key: DateTime<Tz>,
    pub direction: Option<String>,
    pub locations: Vec<Vec<GeoCoordinate>>,
}

/// The time window governing a record. When several validity entries carry
/// the "validity" kind, the last one in list order wins.
struct ValidityWindow {
    from: DateTime<Tz>,
    until: Option<DateTime<Tz>>,
}

impl ValidityWindow {
    /// A window without an end never expires.
    fn is_current(&self, now: DateTime<Tz>) -> bool {
        match self.until {
            None => true,
            Some(until) => until >= now,
        }
    }
}

fn governing_window(validity: &[ValidityEntry]) -> Option<ValidityWindow> {
    validity
        .iter()
        .filter(|v| v.kind == KIND_VALIDITY)
        .last()
        .map(|v| ValidityWindow {
            from: v.from.with_timezone(&Berlin),
            until: v.until.map(|until| until.with_timezone(&Berlin)),
        })
}

/// Checks a feed response for errors and reduces its records to the
/// currently valid entries. Records whose window has already ended are
/// dropped silently, as are records without any governing window; both are
/// routine, not faults.
pub fn extract_entries(
    response: &InquireResponse,
    object_type: &str,
    now: DateTime<Utc>,
    transformer: &CoordinateTransformer,
) -> Result<Vec<Entry>, Error> {
    if response.error_code != 0 {
        return Err(Error::FeedError {
            object_type: object_type.to_string(),
            code: response.error_code,
        });
    }
    let data_list = response
        .data_list
        .as_ref()
        .ok_or_else(|| Error::MissingDataList {
            object_type: object_type.to_string(),
        })?;
    log::info!("{}: {} datasets received", object_type, data_list.ds.len());

    let now = now.with_timezone(&Berlin);
    let mut entries = Vec::new();
    for ds in &data_list.ds {
        if let Some(entry) = entry_from_message(&ds.data, now, transformer)? {
            entries.push(entry);
        }
    }
    log::info!("{}: {} currently valid entries", object_type, entries.len());
    Ok(entries)
}

fn entry_from_message(
    message: &TrafficMessage,
    now: DateTime<Tz>,
    transformer: &CoordinateTransformer,
) -> Result<Option<Entry>, Error> {
    let window = match governing_window(&message.validity) {
        Some(window) => window,
        None => return Ok(None),
    };
    if !window.is_current(now) {
        return Ok(None);
    }

    // Only the first location of a message is exported.
    let mut direction = None;
    let mut locations = Vec::new();
    if let Some(location) = message.location.first() {
        direction = Some(map_direction(&location.roaddescription.direction));
        for co_description in &location.co_description {
            let mut ring = Vec::with_capacity(co_description.co.len());
            for co in &co_description.co {
                ring.push(transformer.to_wgs84(co)?);
            }
            locations.push(ring);
        }
    }

    Ok(Some(Entry {
        id: message.admin.id.clone(),
        subtype: message.admin.subtype.clone(),
        severity: message.admin.severity.clone(),
        description: message.description.first().cloned().unwrap_or_default(),
        valid_from: window.from.format(TIME_FORMAT).to_string(),
        valid_to: window.until.map(|until| until.format(TIME_FORMAT).to_string()),
        sort_key: window.from,
        direction,
        locations,
    }))
}

/// Translates the feed's direction values into the German labels used on
/// the map; unknown values pass through unchanged.
fn map_direction(direction: &str) -> String {
    match direction {
        "oneSided" => "Einseitig".to_string(),
        "doubleSided" => "Beidseitig".to_string(),
        other => other.to_string(),
    }
}
