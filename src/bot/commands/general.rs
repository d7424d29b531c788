//! General Discord commands - ping and help.
//! These commands don't touch the database.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**Local Food Wastage Management System**\n\
        Connects food providers with receivers to cut down on wasted food.\n\n\
        **Dashboard**\n\
        • `/home` - Totals: food quantity, successful claims, providers, receivers.\n\
        • `/listings [provider_type] [food_type] [location] [food_name]` - Filterable food listings.\n\
        • `/details` - Every listing and claim report as a table.\n\
        • `/charts` - Charts built from the reports.\n\n\
        **Claims**\n\
        • `/claim create <food_id> <receiver_id> <status>` - Records a new claim.\n\
        • `/claim read` - Shows every claim.\n\
        • `/claim update <claim_id> [food_id] [receiver_id] [status]` - Changes a claim; omitted fields keep their value.\n\
        • `/claim delete <claim_id>` - Removes a claim.\n\n\
        **Contact**\n\
        • `/contact providers` - Provider names, addresses and contact details.\n\
        • `/contact receivers` - Receiver names, types and contact details.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
