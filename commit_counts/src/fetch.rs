use crate::api::{Endpoint, Error, Result, Source, UpstreamError};
use log::debug;
use serde_json::Value;

/// Returns names of repositories owned by `user`, in the order the upstream listed them.
///
/// Only the first page of the listing is read. Entries without a usable `name` are skipped.
pub async fn list_repositories<S>(source: &S, user: &str) -> Result<Vec<String>>
where
    S: Source + ?Sized,
{
    let user = require_segment(user, "user")?;
    let repos = fetch_array(source, Endpoint::user_repos(user)).await?;
    let names: Vec<String> = repos.into_iter().filter_map(repo_name).collect();
    debug!("Found {} repositories of {}", names.len(), user);
    Ok(names)
}

/// Returns the number of commits of `user/repo` visible on the first page of the commits listing.
///
/// Repositories with more commits than fit on one page are undercounted.
pub async fn count_commits<S>(source: &S, user: &str, repo: &str) -> Result<u32>
where
    S: Source + ?Sized,
{
    let user = require_segment(user, "user")?;
    let repo = require_segment(repo, "repo")?;
    let commits = fetch_array(source, Endpoint::repo_commits(user, repo)).await?;
    debug!("Found {} commits in {}/{}", commits.len(), user, repo);
    u32::try_from(commits.len()).map_err(|err| Error::Other(err.into()))
}

/// Rejects names that cannot be a single URL path segment. `.` and `..` would be resolved away
/// and silently address another resource.
fn require_segment<'a>(value: &'a str, name: &'static str) -> Result<&'a str> {
    if !is_segment(value) {
        return Err(Error::InvalidArgument(name));
    }
    Ok(value)
}

fn is_segment(value: &str) -> bool {
    !matches!(value, "" | "." | "..")
}

async fn fetch_array<S>(source: &S, endpoint: Endpoint) -> Result<Vec<Value>>
where
    S: Source + ?Sized,
{
    let payload = source.get(&endpoint).await?;
    if payload.status != 200 {
        return Err(UpstreamError::Status {
            endpoint,
            status: payload.status,
        }
        .into());
    }
    match serde_json::from_str::<Value>(&payload.body) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(_) => Err(UpstreamError::UnexpectedFormat { endpoint }.into()),
        Err(err) => Err(UpstreamError::Malformed { endpoint, source: err }.into()),
    }
}

fn repo_name(repo: Value) -> Option<String> {
    match repo {
        Value::Object(mut fields) => match fields.remove("name") {
            Some(Value::String(name)) if is_segment(&name) => Some(name),
            _ => None,
        },
        _ => None,
    }
}
