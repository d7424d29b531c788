//! Dashboard Discord commands - `home`, `listings`, `details` and `charts`.
//!
//! Each command maps onto one dashboard section, loads it and replies with the
//! rendered page.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete, send_section},
        core::listing::ListingFilter,
        dashboard::view::{Section, WasteTab},
        errors::{Error, Result},
    };

    fn non_blank(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.trim().is_empty())
    }

    /// Shows the summary cards.
    #[poise::command(slash_command, prefix_command)]
    pub async fn home(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        send_section(ctx, Section::Home).await
    }

    /// Shows the food listings, optionally filtered.
    ///
    /// Filters combine; a listing must match every one given (case-insensitive).
    #[poise::command(slash_command)]
    pub async fn listings(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Provider type, e.g. Restaurant"]
        #[autocomplete = "autocomplete::autocomplete_provider_type"]
        provider_type: Option<String>,
        #[description = "Food type, e.g. Vegetarian"]
        #[autocomplete = "autocomplete::autocomplete_food_type"]
        food_type: Option<String>,
        #[description = "Pickup location"]
        #[autocomplete = "autocomplete::autocomplete_location"]
        location: Option<String>,
        #[description = "Food item name"]
        #[autocomplete = "autocomplete::autocomplete_food_name"]
        food_name: Option<String>,
    ) -> Result<()> {
        let filter = ListingFilter {
            provider_type: non_blank(provider_type),
            food_type: non_blank(food_type),
            location: non_blank(location),
            food_name: non_blank(food_name),
        };
        send_section(ctx, Section::FoodWasteManagement(WasteTab::FoodListings(filter))).await
    }

    /// Shows every listing and claim report as a table.
    #[poise::command(slash_command, prefix_command)]
    pub async fn details(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        send_section(ctx, Section::FoodWasteManagement(WasteTab::ListingDetails)).await
    }

    /// Shows charts built from the reports.
    #[poise::command(slash_command, prefix_command)]
    pub async fn charts(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        send_section(ctx, Section::FoodWasteManagement(WasteTab::DataVisualisations)).await
    }
}

// Re-export all commands
pub use inner::*;
