//! Provider entity - An organisation donating surplus food.
//!
//! Read-only from the dashboard's point of view.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Provider database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "providers")]
pub struct Model {
    /// Unique identifier for the provider
    #[sea_orm(primary_key, auto_increment = false)]
    pub provider_id: i64,
    /// Display name (e.g., "Gonzales-Cochran")
    pub name: String,
    /// Kind of provider (e.g., "Restaurant", "Grocery Store")
    #[sea_orm(column_name = "type")]
    pub provider_type: String,
    /// City the provider operates in
    pub city: String,
    /// Street address
    pub address: String,
    /// Phone or email
    pub contact: String,
}

/// Defines relationships between Provider and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One provider has many food listings
    #[sea_orm(has_many = "super::food_listing::Entity")]
    FoodListings,
}

impl Related<super::food_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodListings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
