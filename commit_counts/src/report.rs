use crate::api::{Error, Result};
use derive_more::Constructor;
use serde::Serialize;
use std::fmt::{Display, Write};
use strum_macros::{Display as StrumDisplay, EnumString};

/// Commit count of a single repository.
///
/// `commits` is 0 both for empty repositories and for repositories whose commits could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Constructor)]
pub struct RepoCommits {
    pub repo: String,
    pub commits: u32,
}

impl Display for RepoCommits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Repo: {} Number of commits: {}", self.repo, self.commits)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Renders commit counts, one line per repository for `Text`.
pub fn render(counts: &[RepoCommits], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for count in counts {
                writeln!(out, "{}", count).map_err(|err| Error::Other(err.into()))?;
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(counts).map_err(|err| Error::Other(err.into()))?;
            out.push('\n');
            Ok(out)
        }
    }
}
