use clap::Parser;
use commit_counts::OutputFormat;
use secrecy::SecretString;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Owner of the listed repositories
    #[clap(short, long, env = "REPO_COMMITS_USER")]
    pub user: String,

    /// API OAuth access token. Requests are unauthenticated without it
    #[clap(short, long, env = "GITHUB_TOKEN")]
    pub api_token: Option<SecretString>,

    /// Repository API URL
    #[clap(long, env = "REPO_COMMITS_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Output format: text or json
    #[clap(short, long, env = "REPO_COMMITS_FORMAT", default_value = "text")]
    pub format: OutputFormat,
}

#[test]
fn parse_defaults_test() {
    let args = Args::try_parse_from(["repo_commits", "--user", "John567"]).unwrap();
    assert_eq!(args.user, "John567");
    assert_eq!(args.api_url, "https://api.github.com");
    assert_eq!(args.format, OutputFormat::Text);
}

#[test]
fn parse_format_test() {
    let args = Args::try_parse_from(["repo_commits", "-u", "John567", "-f", "json"]).unwrap();
    assert_eq!(args.format, OutputFormat::Json);
    assert!(Args::try_parse_from(["repo_commits", "-u", "John567", "-f", "yaml"]).is_err());
}
