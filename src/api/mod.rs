use std::time::Duration;

use log::{debug, warn};
use thiserror::Error;

use crate::{
    cache::{CacheKey, TtlCache},
    classify,
    fetch::{Endpoints, FetchError, HttpRemoteSource, RemoteSource},
    model::{
        catalog::CatalogEntry, manifest::BundledManifest, repository::TemplateRepository,
        ParseError,
    },
    resolver::OfflineResolver,
};

mod builder;

pub use builder::TemplateCatalogBuilder;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Lists templates and their files from configured repositories.
///
/// Listings come from the remote source and fall back to the bundled
/// manifest when it fails; either result is cached. File contents come from
/// the remote source only.
pub struct TemplateCatalog<S = HttpRemoteSource> {
    remote: S,
    offline: OfflineResolver,
    endpoints: Endpoints,
    listings: TtlCache<Vec<CatalogEntry>>,
    contents: TtlCache<String>,
}

impl TemplateCatalog {
    pub fn builder() -> TemplateCatalogBuilder {
        TemplateCatalogBuilder::default()
    }

    pub fn language_id(file_name: &str) -> &'static str {
        classify::language_id(file_name)
    }
}

impl<S: RemoteSource> TemplateCatalog<S> {
    pub fn new(remote: S, manifest: BundledManifest, endpoints: Endpoints, ttl: Duration) -> Self {
        TemplateCatalog {
            remote,
            offline: OfflineResolver::new(manifest, endpoints.clone()),
            endpoints,
            listings: TtlCache::new(ttl),
            contents: TtlCache::new(ttl),
        }
    }

    /// Top-level folders of the repository, one per template.
    pub async fn list_templates(
        &self,
        repository: &TemplateRepository,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        let identity = repository.identity()?;
        let branch = repository.branch.as_str();
        let key = CacheKey::Templates {
            identity: &identity,
            branch,
        }
        .to_string();

        if let Some(entries) = self.listings.get(&key) {
            return Ok(entries);
        }

        let entries = match self.remote.list_directory(&identity, branch, "").await {
            Ok(entries) => entries.into_iter().filter(|e| e.is_dir()).collect(),
            Err(error) => {
                warn!(
                    "Could not list templates of {}@{}, using the bundled snapshot: {}",
                    identity, branch, error
                );
                self.offline.list_templates(&identity, branch)
            }
        };

        debug!("Caching {} templates under {}", entries.len(), key);
        self.listings.set(key, entries.clone());
        Ok(entries)
    }

    /// Everything inside one template folder, files and sub-folders alike.
    pub async fn list_template_files(
        &self,
        repository: &TemplateRepository,
        template_path: &str,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        let identity = repository.identity()?;
        let branch = repository.branch.as_str();
        let key = CacheKey::Files {
            identity: &identity,
            branch,
            path: template_path,
        }
        .to_string();

        if let Some(entries) = self.listings.get(&key) {
            return Ok(entries);
        }

        let entries = match self
            .remote
            .list_directory(&identity, branch, template_path)
            .await
        {
            Ok(entries) => entries,
            Err(error) => {
                warn!(
                    "Could not list {} in {}@{}, using the bundled snapshot: {}",
                    template_path, identity, branch, error
                );
                self.offline
                    .list_template_files(&identity, branch, template_path)
            }
        };

        debug!("Caching {} entries under {}", entries.len(), key);
        self.listings.set(key, entries.clone());
        Ok(entries)
    }

    /// Raw text of a file.
    ///
    /// There is no offline fallback here: the bundled manifest only knows
    /// file names, so remote failures reach the caller unchanged.
    pub async fn get_file_content(
        &self,
        repository: &TemplateRepository,
        file_path: &str,
    ) -> Result<String, CatalogError> {
        let identity = repository.identity()?;
        let branch = repository.branch.as_str();
        let key = CacheKey::Content {
            identity: &identity,
            branch,
            path: file_path,
        }
        .to_string();

        if let Some(content) = self.contents.get(&key) {
            return Ok(content);
        }

        let content = self.remote.fetch_raw(&identity, branch, file_path).await?;
        self.contents.set(key, content.clone());
        Ok(content)
    }

    /// Shareable raw content URL of a file. No network access.
    pub fn get_raw_url(
        &self,
        repository: &TemplateRepository,
        file_path: &str,
    ) -> Result<String, CatalogError> {
        let identity = repository.identity()?;
        Ok(self
            .endpoints
            .raw_url(&identity, &repository.branch, file_path))
    }

    pub fn clear_cache(&self) {
        debug!("Clearing template catalog cache");
        self.listings.clear();
        self.contents.clear();
    }

    pub fn remote(&self) -> &S {
        &self.remote
    }
}
