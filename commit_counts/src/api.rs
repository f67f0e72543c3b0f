use async_trait::async_trait;
use derive_more::Constructor;
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0} must be a non-empty name other than `.` or `..`")]
    InvalidArgument(&'static str),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    /// The request never got an answer: connection refused or reset, body cut short.
    #[error("Request for {endpoint} failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Answers of the remote service that cannot be used. The only kind `CommitAggregator` recovers from.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Failed to fetch {endpoint}. Status code: {status}")]
    Status { endpoint: Endpoint, status: u16 },
    #[error("Unexpected response format for {endpoint}")]
    UnexpectedFormat { endpoint: Endpoint },
    #[error("Malformed response body for {endpoint}: {source}")]
    Malformed {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Read-only resources of the repository hosting API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    UserRepos { user: String },
    RepoCommits { user: String, repo: String },
}

impl Endpoint {
    pub fn user_repos(user: impl Into<String>) -> Self {
        Endpoint::UserRepos { user: user.into() }
    }

    pub fn repo_commits(user: impl Into<String>, repo: impl Into<String>) -> Self {
        Endpoint::RepoCommits {
            user: user.into(),
            repo: repo.into(),
        }
    }

    /// Unescaped path segments, relative to the API root.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::UserRepos { user } => vec!["users", user.as_str(), "repos"],
            Endpoint::RepoCommits { user, repo } => vec!["repos", user.as_str(), repo.as_str(), "commits"],
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments().join("/"))
    }
}

/// Raw answer of the upstream: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct Payload {
    pub status: u16,
    pub body: String,
}

/// Repository data source. Performs a single GET and reports whatever came back;
/// status and body checks are left to the caller.
#[async_trait]
pub trait Source: Send + Sync {
    async fn get(&self, endpoint: &Endpoint) -> Result<Payload>;
}

#[test]
fn endpoint_display_test() {
    assert_eq!(Endpoint::user_repos("John567").to_string(), "users/John567/repos");
    assert_eq!(
        Endpoint::repo_commits("John567", "Triangle567").to_string(),
        "repos/John567/Triangle567/commits"
    );
}

#[test]
fn status_error_message_test() {
    let err = Error::from(UpstreamError::Status {
        endpoint: Endpoint::user_repos("unknown_user"),
        status: 404,
    });
    assert_eq!(err.to_string(), "Failed to fetch users/unknown_user/repos. Status code: 404");
}
