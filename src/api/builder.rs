use std::{path::PathBuf, time::Duration};

use crate::{
    api::{CatalogError, TemplateCatalog},
    cache::DEFAULT_TTL,
    config::TemplatefetchConfig,
    fetch::{
        Endpoints, HttpRemoteSource, RemoteSource, DEFAULT_API_BASE, DEFAULT_RAW_BASE,
        DEFAULT_TIMEOUT,
    },
    model::manifest::BundledManifest,
};

#[derive(Default)]
pub struct TemplateCatalogBuilder {
    api_base: Option<String>,
    raw_base: Option<String>,
    timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
    manifest: Option<BundledManifest>,
    manifest_path: Option<PathBuf>,
}

impl TemplateCatalogBuilder {
    /// Applies every value set in the environment configuration.
    pub fn config(mut self, config: TemplatefetchConfig) -> Self {
        let TemplatefetchConfig {
            api_base,
            raw_base,
            timeout,
            cache_ttl,
            manifest_path,
        } = config;
        self.api_base = api_base.or(self.api_base);
        self.raw_base = raw_base.or(self.raw_base);
        self.timeout = timeout.or(self.timeout);
        self.cache_ttl = cache_ttl.or(self.cache_ttl);
        self.manifest_path = manifest_path.or(self.manifest_path);
        self
    }

    /// Base URL of the structured listing API.
    ///
    /// Defaults to `https://api.github.com`.
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = Some(url.into());
        self
    }

    /// Base URL of the raw content host.
    ///
    /// Defaults to `https://raw.githubusercontent.com`.
    pub fn raw_base(mut self, url: impl Into<String>) -> Self {
        self.raw_base = Some(url.into());
        self
    }

    /// Per-request timeout.
    ///
    /// Defaults to 15 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// How long listings and contents stay cached.
    ///
    /// Defaults to 5 minutes.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Offline snapshot used when listings cannot be fetched.
    /// Takes precedence over [`Self::bundled_manifest_file`].
    ///
    /// Defaults to the snapshot shipped with the crate.
    pub fn bundled_manifest(mut self, manifest: BundledManifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn bundled_manifest_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    pub fn try_build(self) -> Result<TemplateCatalog, CatalogError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let endpoints = self.endpoints();
        let remote = HttpRemoteSource::new(endpoints, timeout)?;
        self.build_with_remote(remote)
    }

    /// Builds a catalog on top of a custom remote source.
    pub fn build_with_remote<S: RemoteSource>(
        self,
        remote: S,
    ) -> Result<TemplateCatalog<S>, CatalogError> {
        let endpoints = self.endpoints();
        let Self {
            cache_ttl,
            manifest,
            manifest_path,
            ..
        } = self;

        let manifest = match (manifest, manifest_path) {
            (Some(manifest), _) => manifest,
            (None, Some(path)) => BundledManifest::from_file(&path)?,
            (None, None) => BundledManifest::bundled()?,
        };

        Ok(TemplateCatalog::new(
            remote,
            manifest,
            endpoints,
            cache_ttl.unwrap_or(DEFAULT_TTL),
        ))
    }

    fn endpoints(&self) -> Endpoints {
        Endpoints::new(
            self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE),
            self.raw_base.as_deref().unwrap_or(DEFAULT_RAW_BASE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::model::repository::TemplateRepository;

    #[tokio::test]
    async fn build_with_defaults() {
        let catalog = TemplateCatalog::builder().try_build().unwrap();
        let repository = TemplateRepository::new(
            "Cluster templates",
            "https://github.com/Azure-Samples/service-fabric-cluster-templates",
        );
        assert_eq!(
            catalog.get_raw_url(&repository, "README.md").unwrap(),
            "https://raw.githubusercontent.com/Azure-Samples/service-fabric-cluster-templates/master/README.md"
        );
    }

    #[test]
    fn config_overrides_builder_values() {
        let config = TemplatefetchConfig {
            api_base: None,
            raw_base: Some("https://raw.example.com".to_string()),
            timeout: Some(Duration::from_secs(3)),
            cache_ttl: None,
            manifest_path: None,
        };
        let builder = TemplateCatalog::builder()
            .api_base("https://api.example.com")
            .raw_base("https://ignored.example.com")
            .config(config);
        assert_eq!(
            builder.endpoints(),
            Endpoints::new("https://api.example.com", "https://raw.example.com")
        );
        assert_eq!(builder.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn missing_manifest_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = TemplateCatalog::builder()
            .bundled_manifest_file(dir.path().join("missing.json"))
            .try_build();
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
