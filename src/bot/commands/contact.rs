//! Contact Discord commands - provider and receiver directories.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, send_section},
        dashboard::view::{ContactTab, Section},
        errors::{Error, Result},
    };

    /// Parent command for the contact directories.
    #[poise::command(
        slash_command,
        subcommands("contact_providers", "contact_receivers")
    )]
    pub async fn contact(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say(
            "Contact directories. Available subcommands:\n\
            `/contact providers` - Provider contact details\n\
            `/contact receivers` - Receiver list",
        )
        .await?;
        Ok(())
    }

    /// Lists every provider with address and contact.
    #[poise::command(slash_command, rename = "providers")]
    pub async fn contact_providers(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        send_section(ctx, Section::Contact(ContactTab::Providers)).await
    }

    /// Lists every receiver with type and contact.
    #[poise::command(slash_command, rename = "receivers")]
    pub async fn contact_receivers(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        send_section(ctx, Section::Contact(ContactTab::Receivers)).await
    }
}

// Re-export all commands
pub use inner::*;
