pub mod args;

pub use args::Args;

use commit_counts::api::Result;
use commit_counts::{CommitAggregator, RepoCommits};
use github_client::GithubClientBuilder;
use log::info;

/// Lists repositories of `args.user` with commit counts, in the order GitHub listed them.
pub async fn repo_commit_counts(args: &Args) -> Result<Vec<RepoCommits>> {
    let mut client = GithubClientBuilder::default().with_github_url(&args.api_url);
    if let Some(token) = &args.api_token {
        client = client.try_with_token(token)?;
    }
    let client = client.build()?;

    info!("Counting commits of repositories of {} at {}", args.user, args.api_url);
    let aggregator = CommitAggregator::new(client);
    aggregator.aggregate(&args.user).await
}
