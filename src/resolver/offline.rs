use log::debug;

use crate::{
    fetch::Endpoints,
    model::{catalog::CatalogEntry, manifest::BundledManifest, repository::RepositoryIdentity},
};

/// Answers listing requests from the bundled manifest when the remote source
/// cannot be reached. Entries are synthesized: folders carry no size and no
/// download URL, files point at the raw content host.
pub struct OfflineResolver {
    manifest: BundledManifest,
    endpoints: Endpoints,
}

impl OfflineResolver {
    pub fn new(manifest: BundledManifest, endpoints: Endpoints) -> Self {
        OfflineResolver {
            manifest,
            endpoints,
        }
    }

    pub fn list_templates(&self, identity: &RepositoryIdentity, branch: &str) -> Vec<CatalogEntry> {
        match self
            .manifest
            .find_repository(&identity.owner, &identity.name, branch)
        {
            Some(repository) => repository
                .templates
                .iter()
                .map(|template| CatalogEntry::dir(&template.name, &template.name))
                .collect(),
            None => {
                debug!("No bundled entry for {}@{}", identity, branch);
                Vec::new()
            }
        }
    }

    pub fn list_template_files(
        &self,
        identity: &RepositoryIdentity,
        branch: &str,
        template_path: &str,
    ) -> Vec<CatalogEntry> {
        let template = self
            .manifest
            .find_repository(&identity.owner, &identity.name, branch)
            .and_then(|repository| repository.find_template(template_path));

        match template {
            Some(template) => template
                .files
                .iter()
                .map(|file| {
                    let path = format!("{template_path}/{file}");
                    let download_url = self.endpoints.raw_url(identity, branch, &path);
                    CatalogEntry::file(file, path, Some(download_url))
                })
                .collect(),
            None => {
                debug!(
                    "No bundled template {} for {}@{}",
                    template_path, identity, branch
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::model::catalog::EntryKind;

    fn resolver() -> OfflineResolver {
        let manifest = BundledManifest::from_json_str(
            r#"[{
                "owner": "Azure-Samples",
                "name": "service-fabric-cluster-templates",
                "branch": "master",
                "templates": [
                    { "name": "voting-app", "files": ["azuredeploy.json", "README.md"] },
                    { "name": "empty", "files": [] }
                ]
            }]"#,
        )
        .unwrap();
        OfflineResolver::new(manifest, Endpoints::default())
    }

    fn identity() -> RepositoryIdentity {
        RepositoryIdentity::new("Azure-Samples", "service-fabric-cluster-templates")
    }

    #[test]
    fn folders_from_manifest() {
        assert_eq!(
            resolver().list_templates(&identity(), "master"),
            vec![
                CatalogEntry::dir("voting-app", "voting-app"),
                CatalogEntry::dir("empty", "empty"),
            ]
        );
    }

    #[test]
    fn files_from_manifest() {
        let files = resolver().list_template_files(&identity(), "master", "voting-app");
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.kind == EntryKind::File));
        assert_eq!(files[0].path, "voting-app/azuredeploy.json");
        assert_eq!(files[1].path, "voting-app/README.md");
        assert_eq!(
            files[1].download_url.as_deref(),
            Some("https://raw.githubusercontent.com/Azure-Samples/service-fabric-cluster-templates/master/voting-app/README.md")
        );
    }

    #[test]
    fn unknown_repository_or_template_is_empty() {
        let resolver = resolver();
        let other = RepositoryIdentity::new("org", "repo");
        assert!(resolver.list_templates(&other, "master").is_empty());
        assert!(resolver.list_templates(&identity(), "main").is_empty());
        assert!(resolver
            .list_template_files(&other, "master", "voting-app")
            .is_empty());
        assert!(resolver
            .list_template_files(&identity(), "master", "missing")
            .is_empty());
        assert!(resolver
            .list_template_files(&identity(), "master", "empty")
            .is_empty());
    }
}
