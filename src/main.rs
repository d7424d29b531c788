use dotenvy::dotenv;
use food_waste_dashboard::{
    bot::{self, BotData},
    config::{database, load_app_config},
    core::ConnectionSource,
    errors::{Error, Result},
};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also come from the environment
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = load_app_config()
        .inspect_err(|e| error!("Critical error loading application configuration: {e}"))?;

    // 4. Every database call opens its own connection from this URL
    let source = ConnectionSource::from_url(database::get_database_url());

    // 5. Optionally create missing tables
    if app_config.database.bootstrap_schema {
        let lease = source.acquire().await?;
        let created = database::create_tables(&lease).await;
        lease.release().await;
        created
            .inspect(|_| info!("Database schema bootstrapped."))
            .inspect_err(|e| error!("Failed to bootstrap schema: {e}"))?;
    }

    // 6. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {e}"))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(source, app_config.display)).await
}
