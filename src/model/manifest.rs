use std::{collections::HashSet, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{repository::DEFAULT_BRANCH, ParseError};

const BUNDLED_SNAPSHOT: &str = include_str!("../../resources/bundled-templates.json");

/// Offline snapshot of known repository contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BundledManifest {
    pub repositories: Vec<BundledRepository>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundledRepository {
    pub owner: String,
    pub name: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default)]
    pub templates: Vec<BundledTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundledTemplate {
    pub name: String,
    #[serde(default)]
    pub files: Vec<String>,
}

impl BundledManifest {
    /// The snapshot shipped with the crate.
    pub fn bundled() -> Result<BundledManifest, ParseError> {
        Self::from_json_str(BUNDLED_SNAPSHOT)
    }

    pub fn from_file(path: &Path) -> Result<BundledManifest, ParseError> {
        debug!("Loading bundled manifest from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|error| ParseError::IO {
            path: path.display().to_string(),
            error,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(data: &str) -> Result<BundledManifest, ParseError> {
        let manifest: BundledManifest = serde_json::from_str(data)?;

        let mut seen = HashSet::new();
        for repository in &manifest.repositories {
            if !seen.insert((&repository.owner, &repository.name, &repository.branch)) {
                return Err(ParseError::DuplicateBundledRepository(format!(
                    "{}/{}@{}",
                    repository.owner, repository.name, repository.branch
                )));
            }
        }

        Ok(manifest)
    }

    /// Exact match on `(owner, name, branch)`.
    pub fn find_repository(
        &self,
        owner: &str,
        name: &str,
        branch: &str,
    ) -> Option<&BundledRepository> {
        self.repositories
            .iter()
            .find(|r| r.owner == owner && r.name == name && r.branch == branch)
    }
}

impl BundledRepository {
    pub fn find_template(&self, name: &str) -> Option<&BundledTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    const MANIFEST: &str = r#"[
        {
            "owner": "Azure-Samples",
            "name": "service-fabric-cluster-templates",
            "branch": "master",
            "templates": [
                { "name": "voting-app", "files": ["azuredeploy.json", "README.md"] }
            ]
        },
        {
            "owner": "org",
            "name": "repo",
            "templates": []
        }
    ]"#;

    #[test]
    fn load_manifest() {
        let manifest = BundledManifest::from_json_str(MANIFEST).unwrap();
        assert_eq!(manifest.repositories.len(), 2);
        assert_eq!(manifest.repositories[1].branch, "master");

        let repository = manifest
            .find_repository("Azure-Samples", "service-fabric-cluster-templates", "master")
            .unwrap();
        assert_eq!(
            repository.find_template("voting-app"),
            Some(&BundledTemplate {
                name: "voting-app".to_string(),
                files: vec!["azuredeploy.json".to_string(), "README.md".to_string()],
            })
        );
    }

    #[test]
    fn lookup_is_exact() {
        let manifest = BundledManifest::from_json_str(MANIFEST).unwrap();
        assert!(manifest
            .find_repository("azure-samples", "service-fabric-cluster-templates", "master")
            .is_none());
        assert!(manifest
            .find_repository("Azure-Samples", "service-fabric-cluster-templates", "main")
            .is_none());
    }

    #[test]
    fn reject_duplicate_repositories() {
        let data = r#"[
            { "owner": "org", "name": "repo", "branch": "main", "templates": [] },
            { "owner": "org", "name": "repo", "branch": "main", "templates": [] }
        ]"#;
        assert!(matches!(
            BundledManifest::from_json_str(data),
            Err(ParseError::DuplicateBundledRepository(_))
        ));
    }

    #[test]
    fn load_bundled_snapshot() {
        let manifest = BundledManifest::bundled().unwrap();
        assert!(manifest
            .find_repository("Azure-Samples", "service-fabric-cluster-templates", "master")
            .is_some());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, MANIFEST).unwrap();
        let manifest = BundledManifest::from_file(&path).unwrap();
        assert_eq!(manifest, BundledManifest::from_json_str(MANIFEST).unwrap());
    }
}
