//! Explicit view state.
//!
//! Which section, tab and claim action the user is looking at is carried in a
//! [`Section`] value and handed to the page loader, instead of living in
//! ambient globals.

use crate::core::listing::ListingFilter;

/// Top-level navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Summary cards
    Home,
    /// Listings, claim management, detail reports and charts
    FoodWasteManagement(WasteTab),
    /// Read-only directories
    Contact(ContactTab),
}

/// Tabs of the food waste management section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WasteTab {
    /// Filterable table of every listing
    FoodListings(ListingFilter),
    /// Claim create/read/update/delete
    ManageClaims(ClaimAction),
    /// Every detail report as a table
    ListingDetails,
    /// Charts built from the detail reports
    DataVisualisations,
}

/// What the claim management tab is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimAction {
    /// Form with every valid food id, receiver id and status
    Create,
    /// The whole claims table
    Read,
    /// Current values of one claim plus the form choices
    Update {
        /// Claim being edited
        claim_id: i64,
    },
    /// Current values of the claim about to be removed
    Delete {
        /// Claim being removed
        claim_id: i64,
    },
}

/// Tabs of the contact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTab {
    /// Provider contact details
    Providers,
    /// Receiver list
    Receivers,
}

impl Section {
    /// Navigation label of the section.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::FoodWasteManagement(_) => "Food Waste Management",
            Self::Contact(_) => "Contact",
        }
    }

    /// Heading of the tab inside the section, if the section has tabs.
    #[must_use]
    pub const fn tab_label(&self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::FoodWasteManagement(tab) => Some(match tab {
                WasteTab::FoodListings(_) => "Food Listings",
                WasteTab::ManageClaims(action) => match action {
                    ClaimAction::Create => "Add New Claim",
                    ClaimAction::Read => "Food Claims List",
                    ClaimAction::Update { .. } => "Update Claims",
                    ClaimAction::Delete { .. } => "Delete Claim",
                },
                WasteTab::ListingDetails => "Listing Details",
                WasteTab::DataVisualisations => "Data Visualisations",
            }),
            Self::Contact(ContactTab::Providers) => Some("Providers Contact"),
            Self::Contact(ContactTab::Receivers) => Some("Receivers List"),
        }
    }

    /// Full breadcrumb, e.g. `"Contact › Receivers List"`.
    #[must_use]
    pub fn heading(&self) -> String {
        self.tab_label().map_or_else(
            || self.label().to_string(),
            |tab| format!("{} › {tab}", self.label()),
        )
    }
}
