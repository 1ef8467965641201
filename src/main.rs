use clap::Parser;
use token_server::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli::serve::run(cli.serve).await
}
