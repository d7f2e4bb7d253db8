use std::fmt::{Display, Formatter};

use crate::model::repository::RepositoryIdentity;

/// Keys of the three cache families. The family prefix keeps them disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey<'a> {
    Templates {
        identity: &'a RepositoryIdentity,
        branch: &'a str,
    },
    Files {
        identity: &'a RepositoryIdentity,
        branch: &'a str,
        path: &'a str,
    },
    Content {
        identity: &'a RepositoryIdentity,
        branch: &'a str,
        path: &'a str,
    },
}

impl Display for CacheKey<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::Templates { identity, branch } => {
                write!(f, "templates:{identity}:{branch}")
            }
            CacheKey::Files {
                identity,
                branch,
                path,
            } => write!(f, "files:{identity}:{branch}:{path}"),
            CacheKey::Content {
                identity,
                branch,
                path,
            } => write!(f, "content:{identity}:{branch}:{path}"),
        }
    }
}
