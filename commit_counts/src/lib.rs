//! Repository commit counts
//!
//! # Overview
//!
//! Library lists the repositories of a user of a repository hosting service (GitHub API compatible)
//! and counts commits of every listed repository.
//! Given a user name, it fetches the first page of `users/{user}/repos`,
//! then, for each repository and in listing order, the first page of `repos/{user}/{repo}/commits`.
//! The commit count is the number of commits on that page, so repositories with a longer history are undercounted.
//!
//! A repository whose commits cannot be fetched is reported with 0 commits instead of failing the whole result.
//! A failure to list the repositories fails the whole result.
//!
//! The remote service is reached through the [`api::Source`] trait.

pub mod api;
mod fetch;
pub mod report;

#[cfg(feature = "aggregator")]
mod aggregator;

#[cfg(test)]
mod testing;

#[cfg(feature = "aggregator")]
pub use aggregator::CommitAggregator;
pub use fetch::{count_commits, list_repositories};
pub use report::{render, OutputFormat, RepoCommits};
