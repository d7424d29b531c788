//! Food listing entity - One unit of surplus food made available by a provider.
//!
//! The provider type is denormalised onto each listing, which is what the
//! "listings by provider type" reports group on.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Food listing database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_listings")]
pub struct Model {
    /// Unique identifier for the listing
    #[sea_orm(primary_key, auto_increment = false)]
    pub food_id: i64,
    /// Name of the food item (e.g., "Bread", "Rice")
    pub food_name: String,
    /// Number of units available
    pub quantity: i64,
    /// ID of the provider offering this listing
    pub provider_id: i64,
    /// Provider type copied from the provider at listing time
    pub provider_type: String,
    /// City where the food can be picked up
    pub location: String,
    /// Dietary category (e.g., "Vegetarian", "Vegan", "Non-Vegetarian")
    pub food_type: String,
    /// Meal tag (e.g., "Breakfast", "Lunch", "Dinner", "Snacks")
    pub meal_type: String,
}

/// Defines relationships between FoodListing and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each listing belongs to one provider
    #[sea_orm(
        belongs_to = "super::provider::Entity",
        from = "Column::ProviderId",
        to = "super::provider::Column::ProviderId"
    )]
    Provider,
    /// One listing may be claimed many times
    #[sea_orm(has_many = "super::claim::Entity")]
    Claims,
}

impl Related<super::provider::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Provider.def()
    }
}

impl Related<super::claim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Claims.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
