//! Food listings and their client-side filters.
//!
//! The listings table is always fetched whole; filtering happens afterwards in
//! memory. Filter choices are computed from the listings that survive every
//! *other* active filter, so the options narrow as the user picks values.

use crate::{
    core::connection::ConnectionSource,
    entities::{FoodListing, food_listing},
    errors::Result,
};
use sea_orm::EntityTrait;
use std::collections::BTreeSet;

/// A listing column the user can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Provider type, e.g. "Restaurant"
    ProviderType,
    /// Food type, e.g. "Vegan"
    FoodType,
    /// Pickup location
    Location,
    /// Food item name
    FoodName,
}

impl FilterField {
    /// All filterable fields, in display order.
    pub const ALL: [Self; 4] = [Self::ProviderType, Self::FoodType, Self::Location, Self::FoodName];

    /// Label shown in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProviderType => "Provider Type",
            Self::FoodType => "Food Type",
            Self::Location => "Location",
            Self::FoodName => "Food Name",
        }
    }

    fn value(self, listing: &food_listing::Model) -> &str {
        match self {
            Self::ProviderType => &listing.provider_type,
            Self::FoodType => &listing.food_type,
            Self::Location => &listing.location,
            Self::FoodName => &listing.food_name,
        }
    }
}

/// Active listing filters; `None` leaves a field unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    /// Required provider type
    pub provider_type: Option<String>,
    /// Required food type
    pub food_type: Option<String>,
    /// Required location
    pub location: Option<String>,
    /// Required food name
    pub food_name: Option<String>,
}

impl ListingFilter {
    /// The value required for `field`, if any.
    #[must_use]
    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::ProviderType => self.provider_type.as_deref(),
            FilterField::FoodType => self.food_type.as_deref(),
            FilterField::Location => self.location.as_deref(),
            FilterField::FoodName => self.food_name.as_deref(),
        }
    }

    /// Whether no field is constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    fn matches_except(&self, listing: &food_listing::Model, skip: Option<FilterField>) -> bool {
        FilterField::ALL
            .iter()
            .filter(|field| Some(**field) != skip)
            .all(|field| {
                self.get(*field)
                    .is_none_or(|wanted| field.value(listing).eq_ignore_ascii_case(wanted.trim()))
            })
    }

    /// Whether `listing` satisfies every active filter (case-insensitive).
    #[must_use]
    pub fn matches(&self, listing: &food_listing::Model) -> bool {
        self.matches_except(listing, None)
    }

    /// Keeps the listings that satisfy every active filter, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, listings: &'a [food_listing::Model]) -> Vec<&'a food_listing::Model> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}

/// Distinct, sorted values of `field` among listings that pass every other filter.
#[must_use]
pub fn filter_options(
    listings: &[food_listing::Model],
    filter: &ListingFilter,
    field: FilterField,
) -> Vec<String> {
    listings
        .iter()
        .filter(|l| filter.matches_except(l, Some(field)))
        .map(|l| field.value(l).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Fetches the whole `food_listings` table.
pub async fn all_listings(source: &ConnectionSource) -> Result<Vec<food_listing::Model>> {
    let lease = source.acquire().await?;
    let result = FoodListing::find().all(&*lease).await;
    lease.release().await;
    result.map_err(Into::into)
}
