//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the dashboard, including all
//! slash commands, autocomplete handlers, and bot context management.

/// Discord command implementations (dashboard, claim, contact, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{
    config::DisplayConfig,
    core::connection::ConnectionSource,
    dashboard::{
        load_page,
        render::{MESSAGE_LIMIT, chunk_messages, error_message, render_page},
        view::Section,
    },
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Where every command gets its database connection from
    pub source: ConnectionSource,
    /// Table and chart sizing
    pub display: DisplayConfig,
}

impl BotData {
    /// Creates a new `BotData` instance.
    #[must_use]
    pub const fn new(source: ConnectionSource, display: DisplayConfig) -> Self {
        Self { source, display }
    }
}

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

/// Loads `section`, renders it and sends it as one or more messages.
pub async fn send_section(ctx: Context<'_>, section: Section) -> Result<()> {
    ctx.defer().await?;
    let data = ctx.data();
    let page = load_page(&data.source, &section).await;
    let blocks = render_page(&page, &data.display);
    send_blocks(ctx, &blocks).await
}

/// Sends text blocks, splitting them across messages as needed.
pub async fn send_blocks(ctx: Context<'_>, blocks: &[String]) -> Result<()> {
    for message in chunk_messages(blocks, MESSAGE_LIMIT) {
        ctx.say(message).await?;
    }
    Ok(())
}

async fn on_error(framework_error: poise::FrameworkError<'_, BotData, Error>) {
    match framework_error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {error:?}", ctx.command().name);
            if let Err(e) = ctx.say(format!("❌ {}", error_message(error.kind()))).await {
                error!("Failed to send error message: {e}");
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Builds the poise framework and runs the client until it stops.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::home(),
                commands::listings(),
                commands::details(),
                commands::charts(),
                commands::contact(),
                commands::claim(),
                commands::ping(),
                commands::help(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {e:?}"))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {e:?}"))?;
    Ok(())
}
