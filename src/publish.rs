use std::fs;
use std::path::PathBuf;

use crate::error::Error;

/// Destination for a finished document. Invoked once per successful run
/// with the complete serialized collection, never incrementally.
pub trait Publisher {
    fn publish(&self, document: &str) -> Result<(), Error>;
}

/// Publishes the document by replacing a file on the local filesystem. The
/// document is written to a temporary sibling first and renamed over the
/// target, so readers never observe a torn file.
pub struct FilePublisher {
    path: PathBuf,
}

impl FilePublisher {
    pub fn new(path: impl Into<PathBuf>) -> FilePublisher {
        FilePublisher { path: path.into() }
    }
}

impl Publisher for FilePublisher {
    fn publish(&self, document: &str) -> Result<(), Error> {
        let mut tmp = self.path.clone();
        tmp.set_extension("json.tmp");
        fs::write(&tmp, document)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("Wrote {}", self.path.display());
        Ok(())
    }
}
