//! Claim entity - A receiver's request against a specific food listing.
//!
//! The only table this crate mutates. `timestamp` is written by the database
//! clock on insert and by the application clock on every update.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Claim database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "claims")]
pub struct Model {
    /// Unique identifier for the claim
    #[sea_orm(primary_key)]
    pub claim_id: i64,
    /// Listing being claimed
    pub food_id: i64,
    /// Receiver making the claim
    pub receiver_id: i64,
    /// Lifecycle status: `"Pending"`, `"Completed"`, `"Cancelled"`, ...
    pub status: String,
    /// When the claim was created or last modified (UTC)
    pub timestamp: DateTime,
}

/// Defines relationships between Claim and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each claim targets one listing
    #[sea_orm(
        belongs_to = "super::food_listing::Entity",
        from = "Column::FoodId",
        to = "super::food_listing::Column::FoodId"
    )]
    FoodListing,
    /// Each claim is made by one receiver
    #[sea_orm(
        belongs_to = "super::receiver::Entity",
        from = "Column::ReceiverId",
        to = "super::receiver::Column::ReceiverId"
    )]
    Receiver,
}

impl Related<super::food_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodListing.def()
    }
}

impl Related<super::receiver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Receiver.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
