//! Receiver entity - An organisation or individual claiming donated food.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Receiver database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "receivers")]
pub struct Model {
    /// Unique identifier for the receiver
    #[sea_orm(primary_key, auto_increment = false)]
    pub receiver_id: i64,
    /// Display name
    pub name: String,
    /// Kind of receiver (e.g., "Shelter", "NGO", "Individual")
    #[sea_orm(column_name = "type")]
    pub receiver_type: String,
    /// City the receiver is located in
    pub city: String,
    /// Phone or email
    pub contact: String,
}

/// Defines relationships between Receiver and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One receiver has many claims
    #[sea_orm(has_many = "super::claim::Entity")]
    Claims,
}

impl Related<super::claim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Claims.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
