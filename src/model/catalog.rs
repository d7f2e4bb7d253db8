use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks and submodules reported by the listing endpoint.
    #[serde(other)]
    Other,
}

/// One file or directory node in a remote template repository.
///
/// Deserializes from a structured listing item, where the kind is reported
/// under `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub download_url: Option<String>,
    #[serde(rename = "size", skip_serializing_if = "Option::is_none", default)]
    pub size_bytes: Option<u64>,
}

impl CatalogEntry {
    pub fn dir(name: impl Into<String>, path: impl Into<String>) -> Self {
        CatalogEntry {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::Dir,
            download_url: None,
            size_bytes: None,
        }
    }

    pub fn file(
        name: impl Into<String>,
        path: impl Into<String>,
        download_url: Option<String>,
    ) -> Self {
        CatalogEntry {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::File,
            download_url,
            size_bytes: None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn decode_listing() {
        let body = r#"[
            {
                "name": "voting-app",
                "path": "voting-app",
                "sha": "abc",
                "size": 0,
                "type": "dir",
                "download_url": null
            },
            {
                "name": "README.md",
                "path": "README.md",
                "size": 1204,
                "type": "file",
                "download_url": "https://raw.githubusercontent.com/org/repo/master/README.md"
            },
            {
                "name": "shared",
                "path": "shared",
                "type": "submodule"
            }
        ]"#;
        let entries: Vec<CatalogEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(
            entries,
            vec![
                CatalogEntry {
                    name: "voting-app".to_string(),
                    path: "voting-app".to_string(),
                    kind: EntryKind::Dir,
                    download_url: None,
                    size_bytes: Some(0),
                },
                CatalogEntry {
                    name: "README.md".to_string(),
                    path: "README.md".to_string(),
                    kind: EntryKind::File,
                    download_url: Some(
                        "https://raw.githubusercontent.com/org/repo/master/README.md".to_string()
                    ),
                    size_bytes: Some(1204),
                },
                CatalogEntry {
                    name: "shared".to_string(),
                    path: "shared".to_string(),
                    kind: EntryKind::Other,
                    download_url: None,
                    size_bytes: None,
                },
            ]
        );
    }
}
