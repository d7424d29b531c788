//! Database configuration module.
//!
//! Resolves the connection URL and provides a schema bootstrap used to
//! provision scratch databases. The production schema is owned externally and
//! is never created or migrated by the dashboard; `create_tables` only runs
//! when `bootstrap_schema` is switched on or from tests. Table statements are
//! generated from the entity definitions with `Schema::create_table_from_entity`
//! so the scratch schema always matches the Rust models, foreign keys included.

use crate::entities::{Claim, FoodListing, Provider, Receiver};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};
use tracing::info;

/// Default location of the local `SQLite` database.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/food_waste.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, falling
/// back to [`DEFAULT_DATABASE_URL`].
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Creates the four dashboard tables if they do not exist yet.
///
/// Parents are created before children so foreign keys resolve.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut provider_table = schema.create_table_from_entity(Provider);
    let mut receiver_table = schema.create_table_from_entity(Receiver);
    let mut listing_table = schema.create_table_from_entity(FoodListing);
    let mut claim_table = schema.create_table_from_entity(Claim);

    for table in [
        &mut provider_table,
        &mut receiver_table,
        &mut listing_table,
        &mut claim_table,
    ] {
        table.if_not_exists();
        db.execute(builder.build(&*table)).await?;
    }

    info!("Dashboard tables ensured.");
    Ok(())
}
