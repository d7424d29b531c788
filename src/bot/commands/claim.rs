//! Claim Discord commands - `/claim create|read|update|delete`.
//!
//! Ids arrive as strings so they can be autocompleted from live data; they are
//! parsed here before reaching the claim operations. Database failures are
//! answered with the message for their error kind and logged, never shown raw.

use crate::errors::{Error, Result};

/// Parses an id typed or picked by the user.
///
/// # Errors
/// Returns [`Error::InvalidInput`] if `raw` is not an integer.
pub fn parse_id(field: &str, raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| Error::InvalidInput {
        message: format!("`{raw}` is not a valid {field}"),
    })
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::parse_id;
    use crate::{
        bot::{BotData, handlers::autocomplete, send_blocks, send_section},
        core::claim,
        dashboard::{
            page::claims_table,
            render::{error_message, render_table},
            view::{ClaimAction, Section, WasteTab},
        },
        errors::{Error, Result},
    };
    use tracing::warn;

    const fn claims_tab(action: ClaimAction) -> Section {
        Section::FoodWasteManagement(WasteTab::ManageClaims(action))
    }

    async fn reply_failure(ctx: poise::Context<'_, BotData, Error>, action: &str, error: &Error) -> Result<()> {
        warn!("Claim {action} failed: {error}");
        let message = match error {
            Error::InvalidInput { message } => format!("❌ {message}."),
            Error::ClaimNotFound { claim_id } => format!("❌ No claim with ID {claim_id}."),
            other => format!("❌ {}", error_message(other.kind())),
        };
        ctx.say(message).await?;
        Ok(())
    }

    /// Parent command for managing claims.
    #[poise::command(
        slash_command,
        subcommands("claim_create", "claim_read", "claim_update", "claim_delete")
    )]
    pub async fn claim(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Claim management command. Available subcommands:\n\
            `/claim create` - Record a new claim\n\
            `/claim read` - Show every claim\n\
            `/claim update` - Change a claim\n\
            `/claim delete` - Remove a claim";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Records a new claim stamped with the current time.
    ///
    /// Leaving out any value shows the ids and statuses that can be chosen.
    #[poise::command(slash_command, rename = "create")]
    pub async fn claim_create(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Listing being claimed"]
        #[autocomplete = "autocomplete::autocomplete_food_id"]
        food_id: Option<String>,
        #[description = "Receiver making the claim"]
        #[autocomplete = "autocomplete::autocomplete_receiver_id"]
        receiver_id: Option<String>,
        #[description = "Claim status"]
        #[autocomplete = "autocomplete::autocomplete_status"]
        status: Option<String>,
    ) -> Result<()> {
        let (Some(food_id), Some(receiver_id), Some(status)) = (food_id, receiver_id, status) else {
            // Incomplete form: show what can be chosen
            return send_section(ctx, claims_tab(ClaimAction::Create)).await;
        };
        let parsed = parse_id("food id", &food_id)
            .and_then(|food| Ok((food, parse_id("receiver id", &receiver_id)?)));
        let (food_id, receiver_id) = match parsed {
            Ok(ids) => ids,
            Err(e) => return reply_failure(ctx, "create", &e).await,
        };

        match claim::create_claim(&ctx.data().source, food_id, receiver_id, status.trim()).await {
            Ok(()) => {
                ctx.say(format!(
                    "✅ Claim added: food {food_id} for receiver {receiver_id} ({}).",
                    status.trim()
                ))
                .await?;
                Ok(())
            }
            Err(e) => reply_failure(ctx, "create", &e).await,
        }
    }

    /// Shows every claim.
    #[poise::command(slash_command, rename = "read")]
    pub async fn claim_read(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        send_section(ctx, claims_tab(ClaimAction::Read)).await
    }

    /// Changes a claim; omitted fields keep their current value.
    ///
    /// With no new values given, shows the claim and the values it could take.
    #[poise::command(slash_command, rename = "update")]
    pub async fn claim_update(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Claim to change"]
        #[autocomplete = "autocomplete::autocomplete_claim_id"]
        claim_id: String,
        #[description = "New listing"]
        #[autocomplete = "autocomplete::autocomplete_food_id"]
        food_id: Option<String>,
        #[description = "New receiver"]
        #[autocomplete = "autocomplete::autocomplete_receiver_id"]
        receiver_id: Option<String>,
        #[description = "New status"]
        #[autocomplete = "autocomplete::autocomplete_status"]
        status: Option<String>,
    ) -> Result<()> {
        let source = &ctx.data().source;
        let claim_id = match parse_id("claim id", &claim_id) {
            Ok(id) => id,
            Err(e) => return reply_failure(ctx, "update", &e).await,
        };

        if food_id.is_none() && receiver_id.is_none() && status.is_none() {
            // Nothing to change: show the claim with the values it could take
            return send_section(ctx, claims_tab(ClaimAction::Update { claim_id })).await;
        }

        let current = match claim::find_claim(source, claim_id).await {
            Ok(Some(current)) => current,
            Ok(None) => return reply_failure(ctx, "update", &Error::ClaimNotFound { claim_id }).await,
            Err(e) => return reply_failure(ctx, "update", &e).await,
        };

        let food_id = match food_id.as_deref().map(|raw| parse_id("food id", raw)).transpose() {
            Ok(id) => id.unwrap_or(current.food_id),
            Err(e) => return reply_failure(ctx, "update", &e).await,
        };
        let receiver_id = match receiver_id.as_deref().map(|raw| parse_id("receiver id", raw)).transpose() {
            Ok(id) => id.unwrap_or(current.receiver_id),
            Err(e) => return reply_failure(ctx, "update", &e).await,
        };
        let status = status
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(current.status);

        match claim::update_claim(source, claim_id, food_id, receiver_id, &status).await {
            Ok(updated) => {
                let table = render_table(&claims_table(&[updated]), 1);
                send_blocks(ctx, &[format!("✅ Claim {claim_id} updated."), table]).await
            }
            Err(e) => reply_failure(ctx, "update", &e).await,
        }
    }

    /// Removes a claim, showing the row being deleted.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn claim_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Claim to remove"]
        #[autocomplete = "autocomplete::autocomplete_claim_id"]
        claim_id: String,
    ) -> Result<()> {
        let source = &ctx.data().source;
        let claim_id = match parse_id("claim id", &claim_id) {
            Ok(id) => id,
            Err(e) => return reply_failure(ctx, "delete", &e).await,
        };

        match claim::find_claim(source, claim_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return reply_failure(ctx, "delete", &Error::ClaimNotFound { claim_id }).await,
            Err(e) => return reply_failure(ctx, "delete", &e).await,
        }

        send_section(ctx, claims_tab(ClaimAction::Delete { claim_id })).await?;
        match claim::delete_claim(source, claim_id).await {
            Ok(_) => {
                ctx.say(format!("🗑️ Claim {claim_id} deleted.")).await?;
                Ok(())
            }
            Err(e) => reply_failure(ctx, "delete", &e).await,
        }
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_padded_integers() {
        assert!(matches!(parse_id("claim id", " 42 "), Ok(42)));
    }

    #[test]
    fn test_parse_id_rejects_text() {
        let Err(Error::InvalidInput { message }) = parse_id("food id", "bread") else {
            panic!("expected invalid input");
        };
        assert_eq!(message, "`bread` is not a valid food id");
    }
}
