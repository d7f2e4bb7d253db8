use std::fmt::{Display, Formatter};

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::model::ParseError;

pub const DEFAULT_BRANCH: &str = "master";

/// The `(owner, name)` pair a repository URL points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct RepositoryIdentity {
    pub owner: String,
    pub name: String,
}

impl RepositoryIdentity {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepositoryIdentity {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses `<scheme>://<host>/<owner>/<name>[.git]`. The scheme is optional,
    /// a trailing slash is tolerated and no network access is attempted.
    pub fn from_url(url: &str) -> Result<RepositoryIdentity, ParseError> {
        let re = Regex::new(
            r"^(?:[A-Za-z][A-Za-z0-9+.-]*://)?(?P<host>[^/\s]+)/(?P<owner>[^/\s]+)/(?P<name>[^/\s]+)/?$",
        )
        .map_err(|_| ParseError::InvalidRepositoryUrl(url.to_string()))?;

        let captures = re
            .captures(url.trim())
            .ok_or_else(|| ParseError::InvalidRepositoryUrl(url.to_string()))?;

        let owner = captures
            .name("owner")
            .map(|s| s.as_str())
            .ok_or_else(|| ParseError::InvalidRepositoryUrl(url.to_string()))?;
        let name = captures
            .name("name")
            .map(|s| s.as_str())
            .map(|s| s.strip_suffix(".git").unwrap_or(s))
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ParseError::InvalidRepositoryUrl(url.to_string()))?;

        Ok(RepositoryIdentity::new(owner, name))
    }
}

impl Display for RepositoryIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A configured template repository, owned by the settings store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRepository {
    pub display_name: String,
    pub url: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl TemplateRepository {
    pub fn new(display_name: impl Into<String>, url: impl Into<String>) -> Self {
        TemplateRepository {
            display_name: display_name.into(),
            url: url.into(),
            branch: default_branch(),
            description: None,
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn identity(&self) -> Result<RepositoryIdentity, ParseError> {
        RepositoryIdentity::from_url(&self.url)
    }
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}
