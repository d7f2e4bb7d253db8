use std::{collections::HashMap, path::PathBuf, time::Duration};

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub struct TemplatefetchConfig {
    pub api_base: Option<String>,
    pub raw_base: Option<String>,
    pub timeout: Option<Duration>,
    pub cache_ttl: Option<Duration>,
    pub manifest_path: Option<PathBuf>,
}

impl TemplatefetchConfig {
    pub fn load() -> anyhow::Result<Self> {
        let raw_config = RawConfig::load(None)?;

        Ok(Self {
            api_base: raw_config.remote.api,
            raw_base: raw_config.remote.raw,
            timeout: raw_config.remote.timeout.map(Duration::from_secs),
            cache_ttl: raw_config.cache.ttl.map(Duration::from_secs),
            manifest_path: raw_config.manifest.path,
        })
    }
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct RawConfig {
    #[serde(default)]
    remote: RemoteConfig,
    #[serde(default)]
    cache: CacheConfig,
    #[serde(default)]
    manifest: ManifestConfig,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct RemoteConfig {
    api: Option<String>,
    raw: Option<String>,
    /// Seconds.
    timeout: Option<u64>,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct CacheConfig {
    /// Seconds.
    ttl: Option<u64>,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct ManifestConfig {
    path: Option<PathBuf>,
}

impl RawConfig {
    fn load(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                Environment::with_prefix("TEMPLATEFETCH")
                    .separator("_")
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}
