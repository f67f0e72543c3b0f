use crate::api::{Error, Result, Source};
use crate::fetch::{count_commits, list_repositories};
use crate::report::RepoCommits;
use futures::{stream, StreamExt, TryStreamExt};
use log::{debug, warn};

pub struct CommitAggregator<SOURCE>
where
    SOURCE: Source,
{
    source: SOURCE,
}

impl<SOURCE> CommitAggregator<SOURCE>
where
    SOURCE: Source,
{
    pub fn new(source: SOURCE) -> Self {
        CommitAggregator { source }
    }

    /// Lists repositories of `user` and counts commits of each one, one request at a time.
    ///
    /// A listing failure fails the whole aggregation. An unusable answer (error status, unexpected
    /// or malformed body) while counting commits of a single repository is reported as 0 commits
    /// for that repository. Requests that get no answer at all abort the aggregation.
    pub async fn aggregate(&self, user: &str) -> Result<Vec<RepoCommits>> {
        let repos = list_repositories(&self.source, user).await?;
        let source = &self.source;
        let counts: Vec<RepoCommits> = stream::iter(repos)
            .then(move |repo| async move {
                let commits = commits_or_zero(count_commits(source, user, &repo).await, user, &repo)?;
                Ok::<_, Error>(RepoCommits::new(repo, commits))
            })
            .try_collect()
            .await?;
        debug!("Aggregated commit counts of {} repositories of {}", counts.len(), user);
        Ok(counts)
    }
}

fn commits_or_zero(commits: Result<u32>, user: &str, repo: &str) -> Result<u32> {
    match commits {
        Err(Error::Upstream(err)) => {
            warn!("Failed to count commits of {}/{}, reporting 0: {}", user, repo, err);
            Ok(0)
        }
        result => result,
    }
}
