use crate::error::{HotscanError, Result};
use crate::model::FileRecord;
use std::path::{Path, PathBuf};

/// Flat JSON cache of collected records, one `<key>.json` file per
/// distinct root argument.
///
/// The key is a digest of the argument as typed, so the cache never
/// notices repository changes: the same argument reuses the same file
/// until it is deleted. Accepted staleness tradeoff.
pub struct Cache {
    dir: PathBuf,
}

impl Cache {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// MD5 of the raw argument string. Deliberately not normalized:
    /// `/repo` and `/repo/` are distinct keys.
    pub fn digest(text: &str) -> String {
        format!("{:x}", md5::compute(text.as_bytes()))
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Load a previously saved record list, or `None` when no cache file
    /// exists for `key`. A file that exists but does not parse is an
    /// explicit error rather than a silent re-collection.
    pub fn load(&self, key: &str) -> Result<Option<Vec<FileRecord>>> {
        let path = self.path_for(key);
        if !path.is_file() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        let records = serde_json::from_str(&data).map_err(|e| {
            HotscanError::Cache(format!("corrupt cache file {}: {e}", path.display()))
        })?;
        Ok(Some(records))
    }

    pub fn save(&self, key: &str, records: &[FileRecord]) -> Result<()> {
        let data = serde_json::to_string(records)?;
        std::fs::write(self.path_for(key), data)?;
        Ok(())
    }
}
