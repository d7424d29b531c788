//! Autocomplete handlers for Discord slash command parameters.
//!
//! Every handler queries the database when Discord asks for suggestions, so
//! the offered ids and values match the data at selection time. A failed query
//! yields no suggestions rather than an error.

use crate::{
    bot::BotData,
    core::{
        claim,
        listing::{self, FilterField, ListingFilter},
    },
    errors::Error,
};
use tracing::warn;

/// Discord shows at most this many suggestions.
const MAX_SUGGESTIONS: usize = 25;

fn matching<I>(values: I, partial: &str) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let partial_lower = partial.trim().to_lowercase();
    values
        .into_iter()
        .filter(|v| v.to_lowercase().contains(&partial_lower))
        .take(MAX_SUGGESTIONS)
        .collect()
}

fn ids_or_empty(result: crate::errors::Result<Vec<i64>>, what: &str, partial: &str) -> Vec<String> {
    match result {
        Ok(ids) => matching(ids.iter().map(ToString::to_string), partial),
        Err(e) => {
            warn!("Could not load {what} suggestions: {e}");
            Vec::new()
        }
    }
}

/// Suggests listing ids.
pub async fn autocomplete_food_id(ctx: poise::Context<'_, BotData, Error>, partial: &str) -> Vec<String> {
    ids_or_empty(claim::food_id_options(&ctx.data().source).await, "food id", partial)
}

/// Suggests receiver ids.
pub async fn autocomplete_receiver_id(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    ids_or_empty(claim::receiver_id_options(&ctx.data().source).await, "receiver id", partial)
}

/// Suggests ids of existing claims.
pub async fn autocomplete_claim_id(ctx: poise::Context<'_, BotData, Error>, partial: &str) -> Vec<String> {
    let ids = claim::get_all_claims(&ctx.data().source)
        .await
        .map(|claims| claims.into_iter().map(|c| c.claim_id).collect());
    ids_or_empty(ids, "claim id", partial)
}

/// Suggests claim statuses, falling back to the defaults on an empty table.
pub async fn autocomplete_status(ctx: poise::Context<'_, BotData, Error>, partial: &str) -> Vec<String> {
    match claim::status_options(&ctx.data().source).await {
        Ok(statuses) => matching(statuses, partial),
        Err(e) => {
            warn!("Could not load status suggestions: {e}");
            Vec::new()
        }
    }
}

async fn listing_values(ctx: poise::Context<'_, BotData, Error>, field: FilterField, partial: &str) -> Vec<String> {
    match listing::all_listings(&ctx.data().source).await {
        Ok(listings) => matching(
            listing::filter_options(&listings, &ListingFilter::default(), field),
            partial,
        ),
        Err(e) => {
            warn!("Could not load {} suggestions: {e}", field.label());
            Vec::new()
        }
    }
}

/// Suggests provider types present in the listings.
pub async fn autocomplete_provider_type(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    listing_values(ctx, FilterField::ProviderType, partial).await
}

/// Suggests food types present in the listings.
pub async fn autocomplete_food_type(ctx: poise::Context<'_, BotData, Error>, partial: &str) -> Vec<String> {
    listing_values(ctx, FilterField::FoodType, partial).await
}

/// Suggests listing locations.
pub async fn autocomplete_location(ctx: poise::Context<'_, BotData, Error>, partial: &str) -> Vec<String> {
    listing_values(ctx, FilterField::Location, partial).await
}

/// Suggests food names.
pub async fn autocomplete_food_name(ctx: poise::Context<'_, BotData, Error>, partial: &str) -> Vec<String> {
    listing_values(ctx, FilterField::FoodName, partial).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let values = vec!["Springfield".to_string(), "Shelbyville".to_string()];
        assert_eq!(matching(values.clone(), "FIELD"), vec!["Springfield"]);
        assert_eq!(matching(values, ""), vec!["Springfield", "Shelbyville"]);
    }

    #[test]
    fn test_matching_caps_suggestions() {
        let values = (0..40).map(|i| i.to_string());
        assert_eq!(matching(values, "").len(), MAX_SUGGESTIONS);
    }
}
