//! Folder listing rows returned by the directory and search endpoints.

use serde::{Deserialize, Serialize};

/// Kind of a storage entry, as reported by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    File,
    Directory,
}

/// One row of a folder listing (`GET /api/directory?path=`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageEntry {
    /// Parent path of the entry, relative to the storage root.
    pub path: String,
    /// Entry name; directory names carry a trailing `/`.
    pub name: String,
    /// Size in bytes; absent for directories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(rename = "type")]
    pub kind: EntryType,
}

impl StorageEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryType::Directory
    }

    /// Stable identifier used by selection, move, and delete operations.
    pub fn id(&self) -> String {
        format!("{}{}", self.path, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listing() {
        let json = r#"[
            {"path":"docs/2024/","name":"a.txt","size":42,"type":"FILE"},
            {"path":"docs/2024/","name":"reports/","type":"DIRECTORY"}
        ]"#;
        let entries: Vec<StorageEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a.txt");
        assert_eq!(entries[0].size, Some(42));
        assert!(!entries[0].is_dir());
        assert!(entries[1].is_dir());
        assert_eq!(entries[1].size, None);
    }

    #[test]
    fn test_entry_id() {
        let entry = StorageEntry {
            path: "docs/".to_string(),
            name: "a.txt".to_string(),
            size: Some(1),
            kind: EntryType::File,
        };
        assert_eq!(entry.id(), "docs/a.txt");
    }
}
