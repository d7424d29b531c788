//! Shared test utilities for the dashboard.
//!
//! This module provides helpers for setting up an in-memory database behind a
//! [`ConnectionSource`] and inserting fixture rows with sensible defaults.

use crate::{
    core::{claim, connection::ConnectionSource},
    entities::{claim as claim_entity, food_listing, provider, receiver},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, Set};
use tracing_subscriber::EnvFilter;

/// Routes tracing output to the test harness at TRACE unless `RUST_LOG` says otherwise.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")))
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<ConnectionSource> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(ConnectionSource::shared(db))
}

/// Inserts a provider.
pub async fn insert_provider(
    source: &ConnectionSource,
    provider_id: i64,
    name: &str,
    provider_type: &str,
    city: &str,
) -> Result<provider::Model> {
    let lease = source.acquire().await?;
    let model = provider::ActiveModel {
        provider_id: Set(provider_id),
        name: Set(name.to_string()),
        provider_type: Set(provider_type.to_string()),
        city: Set(city.to_string()),
        address: Set(format!("{provider_id} Main Street")),
        contact: Set(format!("+1-555-01{provider_id:02}")),
    }
    .insert(&*lease)
    .await?;
    Ok(model)
}

/// Inserts a receiver.
pub async fn insert_receiver(
    source: &ConnectionSource,
    receiver_id: i64,
    name: &str,
    receiver_type: &str,
    city: &str,
) -> Result<receiver::Model> {
    let lease = source.acquire().await?;
    let model = receiver::ActiveModel {
        receiver_id: Set(receiver_id),
        name: Set(name.to_string()),
        receiver_type: Set(receiver_type.to_string()),
        city: Set(city.to_string()),
        contact: Set(format!("receiver{receiver_id}@example.org")),
    }
    .insert(&*lease)
    .await?;
    Ok(model)
}

/// Every column of a listing fixture.
pub struct ListingFixture<'a> {
    pub food_id: i64,
    pub food_name: &'a str,
    pub quantity: i64,
    pub provider_id: i64,
    pub provider_type: &'a str,
    pub location: &'a str,
    pub food_type: &'a str,
    pub meal_type: &'a str,
}

/// Inserts a listing with every column given.
pub async fn insert_listing_full(
    source: &ConnectionSource,
    fixture: &ListingFixture<'_>,
) -> Result<food_listing::Model> {
    let lease = source.acquire().await?;
    let model = food_listing::ActiveModel {
        food_id: Set(fixture.food_id),
        food_name: Set(fixture.food_name.to_string()),
        quantity: Set(fixture.quantity),
        provider_id: Set(fixture.provider_id),
        provider_type: Set(fixture.provider_type.to_string()),
        location: Set(fixture.location.to_string()),
        food_type: Set(fixture.food_type.to_string()),
        meal_type: Set(fixture.meal_type.to_string()),
    }
    .insert(&*lease)
    .await?;
    Ok(model)
}

/// Inserts a listing with defaults.
///
/// # Defaults
/// * `provider_type`: "Restaurant"
/// * `food_type`: "Vegetarian"
/// * `meal_type`: "Dinner"
pub async fn insert_listing(
    source: &ConnectionSource,
    food_id: i64,
    food_name: &str,
    quantity: i64,
    provider_id: i64,
    location: &str,
) -> Result<food_listing::Model> {
    insert_listing_full(
        source,
        &ListingFixture {
            food_id,
            food_name,
            quantity,
            provider_id,
            provider_type: "Restaurant",
            location,
            food_type: "Vegetarian",
            meal_type: "Dinner",
        },
    )
    .await
}

/// Sets up a small but complete data set used by report and page tests.
///
/// Providers: Green Grocer and Tasty Bites (Springfield), Corner Cafe
/// (Shelbyville), Capital Catering (Capital City).
/// Receivers: Food Bank and Sam Smith (Springfield), Hope Shelter (Shelbyville).
///
/// | food | name    | qty | provider | location     | food type      | meal      |
/// |------|---------|-----|----------|--------------|----------------|-----------|
/// | 1    | Bread   | 5   | 1        | Springfield  | Vegetarian     | Breakfast |
/// | 2    | Rice    | 10  | 2        | Springfield  | Vegan          | Dinner    |
/// | 3    | Soup    | 0   | 2        | Springfield  | Vegetarian     | Lunch     |
/// | 4    | Bread   | 20  | 1        | Shelbyville  | Vegetarian     | Dinner    |
/// | 5    | Chicken | 8   | 3        | Shelbyville  | Non-Vegetarian | Dinner    |
/// | 6    | Salad   | 8   | 4        | Capital City | Vegan          | Lunch     |
///
/// Claims: 1→Food Bank Completed, 2→Food Bank Completed, 4→Hope Shelter
/// Completed, 5→Hope Shelter Pending, 3→Sam Smith Cancelled.
pub async fn seeded_db() -> Result<ConnectionSource> {
    let source = setup_test_db().await?;

    insert_provider(&source, 1, "Green Grocer", "Grocery Store", "Springfield").await?;
    insert_provider(&source, 2, "Tasty Bites", "Restaurant", "Springfield").await?;
    insert_provider(&source, 3, "Corner Cafe", "Restaurant", "Shelbyville").await?;
    insert_provider(&source, 4, "Capital Catering", "Catering Service", "Capital City").await?;

    insert_receiver(&source, 1, "Food Bank", "NGO", "Springfield").await?;
    insert_receiver(&source, 2, "Hope Shelter", "Shelter", "Shelbyville").await?;
    insert_receiver(&source, 3, "Sam Smith", "Individual", "Springfield").await?;

    let listings = [
        (1, "Bread", 5, 1, "Grocery Store", "Springfield", "Vegetarian", "Breakfast"),
        (2, "Rice", 10, 2, "Restaurant", "Springfield", "Vegan", "Dinner"),
        (3, "Soup", 0, 2, "Restaurant", "Springfield", "Vegetarian", "Lunch"),
        (4, "Bread", 20, 1, "Grocery Store", "Shelbyville", "Vegetarian", "Dinner"),
        (5, "Chicken", 8, 3, "Restaurant", "Shelbyville", "Non-Vegetarian", "Dinner"),
        (6, "Salad", 8, 4, "Catering Service", "Capital City", "Vegan", "Lunch"),
    ];
    for (food_id, food_name, quantity, provider_id, provider_type, location, food_type, meal_type) in
        listings
    {
        insert_listing_full(
            &source,
            &ListingFixture {
                food_id,
                food_name,
                quantity,
                provider_id,
                provider_type,
                location,
                food_type,
                meal_type,
            },
        )
        .await?;
    }

    claim::create_claim(&source, 1, 1, "Completed").await?;
    claim::create_claim(&source, 2, 1, "Completed").await?;
    claim::create_claim(&source, 4, 2, "Completed").await?;
    claim::create_claim(&source, 5, 2, "Pending").await?;
    claim::create_claim(&source, 3, 3, "Cancelled").await?;

    Ok(source)
}

/// Reads one claim straight from the table, bypassing the CRUD layer.
pub async fn get_claim_for_test(
    source: &ConnectionSource,
    claim_id: i64,
) -> Result<Option<claim_entity::Model>> {
    use sea_orm::EntityTrait;
    let lease = source.acquire().await?;
    Ok(claim_entity::Entity::find_by_id(claim_id).one(&*lease).await?)
}
