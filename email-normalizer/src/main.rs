mod config;
mod directory;
mod domain;
mod normalizer;

use clap::Parser;
use cognito::UserPoolClient;

use crate::normalizer::EmailNormalizer;

#[derive(Parser)]
#[command(
    name = "email-normalizer",
    about = "Lowercase verified user pool emails"
)]
struct Opts {
    /// Override the configured user pool id
    #[arg(long)]
    user_pool_id: Option<String>,
    /// Override the configured AWS region
    #[arg(long)]
    region: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    dotenvy::from_filename(".env.local").ok();

    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .expect("failed to initialize global tracing subscriber");

    let opts = Opts::parse();

    let mut settings = config::read_config()
        .map_err(|e| anyhow::anyhow!("Error reading configuration: {}", e))?;
    if let Some(user_pool_id) = opts.user_pool_id {
        settings.user_pool_id = user_pool_id;
    }
    if let Some(region) = opts.region {
        settings.region = region;
    }

    let client = UserPoolClient::new(&settings.user_pool_id, &settings.region).await;
    let normalizer = EmailNormalizer::new(client);
    normalizer.run().await?;

    Ok(())
}
