use serde::{Deserialize, Serialize};

/// Per-file commit statistics derived from the git log.
///
/// The serialized field names (`nof_commit`, `lst_mod`) are the on-disk
/// cache format and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub file: String,
    #[serde(rename = "nof_commit")]
    pub commit_count: u32,
    #[serde(rename = "lst_mod")]
    pub last_modified: String,
}

impl FileRecord {
    pub fn new(file: String, commit_count: u32, last_modified: String) -> Self {
        Self {
            file,
            commit_count,
            last_modified,
        }
    }

    /// Record for a file with no queryable history: untracked, or the log
    /// command failed. Collection keeps going instead of crashing on an
    /// empty result.
    pub fn untracked(file: String) -> Self {
        Self {
            file,
            commit_count: 0,
            last_modified: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_cache_field_names() {
        let record = FileRecord::new("src/hotspot/share/gc/a.cpp".to_string(), 7, "2021-04-14".to_string());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"file":"src/hotspot/share/gc/a.cpp","nof_commit":7,"lst_mod":"2021-04-14"}"#
        );
    }

    #[test]
    fn deserializes_cache_field_names() {
        let record: FileRecord =
            serde_json::from_str(r#"{"file":"a.cpp","nof_commit":3,"lst_mod":"2020-12-01"}"#).unwrap();
        assert_eq!(record.file, "a.cpp");
        assert_eq!(record.commit_count, 3);
        assert_eq!(record.last_modified, "2020-12-01");
    }

    #[test]
    fn untracked_record_is_zeroed() {
        let record = FileRecord::untracked("nowhere.cpp".to_string());
        assert_eq!(record.commit_count, 0);
        assert_eq!(record.last_modified, "");
    }
}
