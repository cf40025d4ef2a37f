use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::error::Error;

use super::structs::InquireResponse;

/// Object type labels queried on every run.
pub const OBJECT_TYPE_ROADWORKS: &str = "TrafficMessage_RoadWorks";
pub const OBJECT_TYPE_INCIDENTS: &str = "TrafficMessage_Incidents";

/// Capability for fetching all feed records of one object type. Transport
/// and authentication live behind this trait; the pipeline only ever sees
/// complete response envelopes.
pub trait FeedClient {
    fn inquire_all(&self, object_type: &str) -> Result<InquireResponse, Error>;
}

/// Feed client reading pre-fetched response documents from a directory,
/// one `<object type>.json` file per query.
pub struct FileFeedClient {
    dir: PathBuf,
}

impl FileFeedClient {
    pub fn new(dir: impl Into<PathBuf>) -> FileFeedClient {
        FileFeedClient { dir: dir.into() }
    }
}

impl FeedClient for FileFeedClient {
    fn inquire_all(&self, object_type: &str) -> Result<InquireResponse, Error> {
        let path = self.dir.join(format!("{}.json", object_type));
        log::debug!("Reading feed response from {}", path.display());
        let file = File::open(path)?;
        let response = serde_json::from_reader(BufReader::new(file))?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_response_file_for_object_type() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("TrafficMessage_RoadWorks.json"),
            r#"{"errorCode": 0, "dataList": {"ds": []}}"#,
        )
        .expect("write fixture");

        let client = FileFeedClient::new(dir.path());
        let response = client
            .inquire_all(OBJECT_TYPE_ROADWORKS)
            .expect("response parses");
        assert_eq!(response.error_code, 0);
        assert!(response.data_list.is_some());
    }

    #[test]
    fn missing_response_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let client = FileFeedClient::new(dir.path());
        let err = client.inquire_all(OBJECT_TYPE_INCIDENTS).unwrap_err();
        assert!(matches!(err, Error::IO(_)));
    }
}
