use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::record::model::RecordSet;

/// Directory used when no explicit save path is given.
pub const SAMPLE_DATA_DIR: &str = "/sample-data";

impl RecordSet {
    /// `/sample-data/<type>.json`
    pub fn default_save_path(&self) -> PathBuf {
        Path::new(SAMPLE_DATA_DIR).join(format!("{}.json", self.record_type))
    }

    /// Write the JSON that would be submitted to HostDB to disk.
    ///
    /// Uses [`default_save_path`](Self::default_save_path) when `path` is
    /// `None`. An explicit path must end in `.json`. Missing parent
    /// directories are created.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            None => self.default_save_path(),
            Some(p) if p.extension().is_some_and(|e| e == "json") => p.to_path_buf(),
            Some(p) => return Err(Error::InvalidSavePath(p.to_path_buf())),
        };

        let bytes = serde_json::to_vec(self)?;

        tracing::info!(
            count = self.records.len(),
            path = %path.display(),
            "saving records"
        );

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&path, bytes)?;

        tracing::info!(
            count = self.records.len(),
            path = %path.display(),
            "saved records"
        );

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::model::Record;

    fn sample() -> RecordSet {
        RecordSet {
            record_type: "test".to_string(),
            timestamp: "2003-04-05 06:07:08".to_string(),
            committer: "Test Monkey".to_string(),
            records: vec![Record::default()],
            ..RecordSet::default()
        }
    }

    #[test]
    fn default_path_is_under_sample_data() {
        assert_eq!(
            sample().default_save_path(),
            PathBuf::from("/sample-data/test.json")
        );
    }

    #[test]
    fn non_json_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = sample()
            .save(Some(&dir.path().join("test.txt")))
            .expect_err("extension should be validated");
        assert!(matches!(err, Error::InvalidSavePath(_)));
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/deeper/test.json");
        let written = sample().save(Some(&target)).unwrap();
        assert_eq!(written, target);
        assert!(target.exists());
    }
}
