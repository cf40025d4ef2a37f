use thiserror::Error;

/// An error that can occur when retrieving feed data or producing the
/// GeoJSON document. Any of these aborts the current run as a whole.
#[derive(Error, Debug)]
pub enum Error {
    /// The feed answered the query with a non-zero error code
    #[error("feed responded with error code {code} for {object_type}")]
    FeedError { object_type: String, code: i64 },
    /// The feed answer carried no data list
    #[error("unexpected feed response for {object_type}: no data list found")]
    MissingDataList { object_type: String },
    /// A coordinate pair could not be reprojected
    #[error("coordinate reprojection failed: {0}")]
    Projection(#[from] proj4rs::errors::Error),
    /// Generic Input/Output error while reading or writing a file
    #[error("impossible to read or write file")]
    IO(#[from] std::io::Error),
    /// A response document could not be parsed, or the output could not be
    /// serialized
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
