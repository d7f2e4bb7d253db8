use std::{future::Future, time::Duration};

use log::{debug, trace};
use reqwest::{header::ACCEPT, Client, ClientBuilder, Response};
use thiserror::Error;

use crate::model::{catalog::CatalogEntry, repository::RepositoryIdentity};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const LISTING_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("templatefetch/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP {status}: {url}")]
    RemoteHttp { status: u16, url: String },
    #[error("Network error while requesting {url}: {source}")]
    RemoteNetwork {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Unexpected listing body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Base URLs of the structured listing API and the raw content host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
    raw_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::new(DEFAULT_API_BASE, DEFAULT_RAW_BASE)
    }
}

impl Endpoints {
    pub fn new(api_base: impl Into<String>, raw_base: impl Into<String>) -> Self {
        Endpoints {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            raw_base: raw_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// `{api}/repos/{owner}/{name}/contents[/{path}]?ref={branch}`
    pub fn listing_url(&self, identity: &RepositoryIdentity, branch: &str, path: &str) -> String {
        let path = path.trim_matches('/');
        let suffix = if path.is_empty() {
            String::new()
        } else {
            format!("/{path}")
        };
        format!(
            "{}/repos/{}/{}/contents{}?ref={}",
            self.api_base, identity.owner, identity.name, suffix, branch
        )
    }

    /// `{raw}/{owner}/{name}/{branch}/{file_path}`
    pub fn raw_url(&self, identity: &RepositoryIdentity, branch: &str, file_path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_base,
            identity.owner,
            identity.name,
            branch,
            file_path.trim_start_matches('/')
        )
    }
}

/// Where live catalog data comes from.
pub trait RemoteSource {
    /// Lists one directory of the repository; an empty `path` is the root.
    fn list_directory(
        &self,
        identity: &RepositoryIdentity,
        branch: &str,
        path: &str,
    ) -> impl Future<Output = Result<Vec<CatalogEntry>, FetchError>> + Send;

    /// Returns the file body verbatim.
    fn fetch_raw(
        &self,
        identity: &RepositoryIdentity,
        branch: &str,
        file_path: &str,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

pub struct HttpRemoteSource {
    client: Client,
    endpoints: Endpoints,
}

/// Client settings shared by every request: the identifying `User-Agent`
/// and the per-request timeout.
pub fn client_builder(timeout: Duration) -> ClientBuilder {
    Client::builder().timeout(timeout).user_agent(USER_AGENT)
}

impl HttpRemoteSource {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<HttpRemoteSource, FetchError> {
        let client = client_builder(timeout).build().map_err(FetchError::Client)?;
        Ok(Self::with_client(client, endpoints))
    }

    pub fn with_client(client: Client, endpoints: Endpoints) -> HttpRemoteSource {
        HttpRemoteSource { client, endpoints }
    }

    async fn get(&self, url: &str, accept: Option<&str>) -> Result<Response, FetchError> {
        trace!("GET {}", url);
        let mut request = self.client.get(url);
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }

        let response = request
            .send()
            .await
            .map_err(|source| FetchError::RemoteNetwork {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RemoteHttp {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    async fn body(url: &str, response: Response) -> Result<String, FetchError> {
        response
            .text()
            .await
            .map_err(|source| FetchError::RemoteNetwork {
                url: url.to_string(),
                source,
            })
    }
}

impl RemoteSource for HttpRemoteSource {
    async fn list_directory(
        &self,
        identity: &RepositoryIdentity,
        branch: &str,
        path: &str,
    ) -> Result<Vec<CatalogEntry>, FetchError> {
        let url = self.endpoints.listing_url(identity, branch, path);
        let response = self.get(&url, Some(LISTING_MEDIA_TYPE)).await?;
        let body = Self::body(&url, response).await?;

        let entries: Vec<CatalogEntry> =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                url: url.clone(),
                source,
            })?;
        debug!("Listed {} entries from {}", entries.len(), url);

        Ok(entries)
    }

    async fn fetch_raw(
        &self,
        identity: &RepositoryIdentity,
        branch: &str,
        file_path: &str,
    ) -> Result<String, FetchError> {
        let url = self.endpoints.raw_url(identity, branch, file_path);
        let response = self.get(&url, None).await?;
        Self::body(&url, response).await
    }
}
