use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::model::{repository::TemplateRepository, ParseError};

/// Ordered list of configured template repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "repository", default)]
    pub repositories: Vec<TemplateRepository>,
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Settings, ParseError> {
        debug!("Loading settings from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|error| ParseError::IO {
            path: path.display().to_string(),
            error,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Entries repeating an earlier `(url, branch)` pair are dropped.
    pub fn from_toml_str(data: &str) -> Result<Settings, ParseError> {
        let raw: Settings = toml::from_str(data)?;

        let mut repositories: Vec<TemplateRepository> = Vec::with_capacity(raw.repositories.len());
        for repository in raw.repositories {
            let duplicate = repositories
                .iter()
                .any(|r| r.url == repository.url && r.branch == repository.branch);
            if duplicate {
                warn!(
                    "Ignoring duplicate repository {} ({}@{})",
                    repository.display_name, repository.url, repository.branch
                );
            } else {
                repositories.push(repository);
            }
        }

        Ok(Settings { repositories })
    }

    pub fn find(&self, display_name: &str) -> Option<&TemplateRepository> {
        self.repositories
            .iter()
            .find(|r| r.display_name == display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn load_repositories_in_order() {
        let str = r#"
            [[repository]]
            display_name = "Cluster templates"
            url = "https://github.com/Azure-Samples/service-fabric-cluster-templates"
            description = "Service Fabric cluster templates"

            [[repository]]
            display_name = "Quickstart"
            url = "https://github.com/Azure-Samples/service-fabric-dotnet-quickstart.git"
            branch = "main"
        "#;
        let settings = Settings::from_toml_str(str).unwrap();
        assert_eq!(
            settings.repositories,
            vec![
                TemplateRepository {
                    display_name: "Cluster templates".to_string(),
                    url: "https://github.com/Azure-Samples/service-fabric-cluster-templates"
                        .to_string(),
                    branch: "master".to_string(),
                    description: Some("Service Fabric cluster templates".to_string()),
                },
                TemplateRepository::new(
                    "Quickstart",
                    "https://github.com/Azure-Samples/service-fabric-dotnet-quickstart.git"
                )
                .with_branch("main"),
            ]
        );
        assert_eq!(
            settings.find("Quickstart").map(|r| r.branch.as_str()),
            Some("main")
        );
    }

    #[test]
    fn drop_duplicate_entries() {
        let str = r#"
            [[repository]]
            display_name = "first"
            url = "https://github.com/org/repo"

            [[repository]]
            display_name = "second"
            url = "https://github.com/org/repo"

            [[repository]]
            display_name = "other branch"
            url = "https://github.com/org/repo"
            branch = "dev"
        "#;
        let settings = Settings::from_toml_str(str).unwrap();
        let names: Vec<&str> = settings
            .repositories
            .iter()
            .map(|r| r.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "other branch"]);
    }

    #[test]
    fn load_empty() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Settings::from_file(&dir.path().join("templatefetch.toml")),
            Err(ParseError::IO { .. })
        ));
    }
}
