use chrono::{DateTime, Utc};

use crate::error::Error;
use crate::geojson::feature::{Feature, FeatureCollection};
use crate::ocit::client::FeedClient;
use crate::ocit::entry::{self, Entry};
use crate::ocit::proj::CoordinateTransformer;

/// Runs one export: queries every requested object type, filters and sorts
/// the records and assembles the feature collection. Fails as a whole when
/// any single query fails; no partial document is ever produced.
pub fn run<C: FeedClient>(
    client: &C,
    object_types: &[String],
    now: DateTime<Utc>,
) -> Result<FeatureCollection, Error> {
    let transformer = CoordinateTransformer::new()?;

    let mut entries: Vec<Entry> = Vec::new();
    for object_type in object_types {
        log::info!("Loading {}", object_type);
        let response = client.inquire_all(object_type)?;
        entries.extend(entry::extract_entries(
            &response,
            object_type,
            now,
            &transformer,
        )?);
    }

    // Most recent validity start first; ties keep query order.
    entries.sort_by(|a, b| b.sort_key.cmp(&a.sort_key));

    let features = entries.iter().map(Feature::from_entry).collect();
    Ok(FeatureCollection::new(features))
}
