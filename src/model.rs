use serde::{Deserialize, Serialize};

/// One node of the remote filesystem as reported by the listing service.
///
/// `path` is always kept in normalized form (see `crate::path::resolve`);
/// the loader re-normalizes whatever the server sends.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub modified: String,
    #[serde(rename = "isDirectory")]
    pub is_directory: bool,
}

impl DirectoryEntry {
    /// Synthetic "navigate to parent" row prepended to non-root listings.
    pub fn parent_of(current_path: &str) -> Self {
        Self {
            name: "..".to_string(),
            path: crate::path::parent_of(current_path),
            size: 0,
            modified: String::new(),
            is_directory: true,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerSettings {
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8070".to_string(),
        }
    }
}
