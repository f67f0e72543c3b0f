use clap::Parser;
use commit_counts::api::Error;
use repo_commits_app::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let counts = repo_commits_app::repo_commit_counts(&args).await?;

    print!("{}", commit_counts::render(&counts, args.format)?);

    Ok(())
}
