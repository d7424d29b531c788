//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities mirror the externally owned schema: providers, receivers,
//! food listings and claims. Only claims are ever written by this crate.

pub mod claim;
pub mod food_listing;
pub mod provider;
pub mod receiver;

// Re-export specific types to avoid conflicts
pub use claim::{Column as ClaimColumn, Entity as Claim, Model as ClaimModel};
pub use food_listing::{
    Column as FoodListingColumn, Entity as FoodListing, Model as FoodListingModel,
};
pub use provider::{Column as ProviderColumn, Entity as Provider, Model as ProviderModel};
pub use receiver::{Column as ReceiverColumn, Entity as Receiver, Model as ReceiverModel};
