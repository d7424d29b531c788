//! Page loading.
//!
//! [`load_page`] issues the queries one section needs and collects them into
//! [`Widget`]s. A failed query only fails its own widget; the rest of the page
//! still loads. Nothing is cached between calls.

use crate::{
    core::{
        ConnectionSource, Report, Table,
        claim::{self, ClaimChoices},
        listing::{self, FilterField, ListingFilter},
        report::{self, Cell},
    },
    dashboard::view::{ClaimAction, ContactTab, Section, WasteTab},
    entities::{claim as claim_entity, food_listing},
    errors::{Error, Result},
};
use tracing::{error, instrument};

/// What a widget displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// A single headline number
    Card(i64),
    /// A table
    Table(Table),
    /// Horizontal bar chart of labelled values
    BarChart(Vec<(String, f64)>),
    /// Share-of-total chart of labelled values
    PieChart(Vec<(String, f64)>),
    /// Choices offered by a claim form
    Choices(ClaimChoices),
}

/// One titled block of a page.
#[derive(Debug)]
pub struct Widget {
    /// Heading shown above the content
    pub title: String,
    /// The content, or why it could not be loaded
    pub content: Result<Content>,
}

impl Widget {
    fn new(title: impl Into<String>, content: Result<Content>) -> Self {
        let title = title.into();
        if let Err(e) = &content {
            error!("Widget '{title}' failed to load: {e}");
        }
        Self { title, content }
    }
}

/// A loaded section.
#[derive(Debug)]
pub struct Page {
    /// The view this page was loaded for
    pub section: Section,
    /// Widgets in display order
    pub widgets: Vec<Widget>,
}

/// Reports shown as tables on the listing details tab, in display order.
pub const DETAIL_REPORTS: [Report; 14] = [
    Report::ProvidersByCity,
    Report::ReceiversByCity,
    Report::ListingsByProviderType,
    Report::QuantityByProviderType,
    Report::TopClaimingReceivers,
    Report::TotalQuantity,
    Report::TopLocations,
    Report::FoodTypes,
    Report::ClaimsPerFoodItem,
    Report::TopProviderByCompletedClaims,
    Report::ClaimStatusPercentage,
    Report::AvgQuantityPerReceiver,
    Report::ClaimsByMealType,
    Report::QuantityByProvider,
];

/// Kind of chart a report is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// [`Content::BarChart`]
    Bar,
    /// [`Content::PieChart`]
    Pie,
}

/// Charts on the visualisation tab: report, chart kind, label column, value column.
pub const CHARTS: [(Report, ChartKind, &str, &str); 6] = [
    (Report::FoodTypes, ChartKind::Pie, "FoodType", "ListingCount"),
    (Report::ClaimsPerFoodItem, ChartKind::Bar, "FoodName", "Claims"),
    (Report::TopLocations, ChartKind::Bar, "Location", "ListingCount"),
    (Report::ClaimStatusPercentage, ChartKind::Pie, "Status", "Percentage"),
    (Report::ClaimsByMealType, ChartKind::Pie, "MealType", "ClaimCount"),
    (Report::ListingsByProviderType, ChartKind::Bar, "ProviderType", "FoodProvidedCount"),
];

/// Converts listings into a table with the dashboard's column names.
#[must_use]
pub fn listings_table(listings: &[&food_listing::Model]) -> Table {
    Table {
        columns: [
            "Food_ID",
            "Food_Name",
            "Quantity",
            "Provider_ID",
            "Provider_Type",
            "Location",
            "Food_Type",
            "Meal_Type",
        ]
        .map(String::from)
        .to_vec(),
        rows: listings
            .iter()
            .map(|l| {
                vec![
                    Cell::Integer(l.food_id),
                    Cell::Text(l.food_name.clone()),
                    Cell::Integer(l.quantity),
                    Cell::Integer(l.provider_id),
                    Cell::Text(l.provider_type.clone()),
                    Cell::Text(l.location.clone()),
                    Cell::Text(l.food_type.clone()),
                    Cell::Text(l.meal_type.clone()),
                ]
            })
            .collect(),
    }
}

/// Converts claims into a table with the dashboard's column names.
#[must_use]
pub fn claims_table(claims: &[claim_entity::Model]) -> Table {
    Table {
        columns: ["Claim_ID", "Food_ID", "Receiver_ID", "Status", "Timestamp"]
            .map(String::from)
            .to_vec(),
        rows: claims
            .iter()
            .map(|c| {
                vec![
                    Cell::Integer(c.claim_id),
                    Cell::Integer(c.food_id),
                    Cell::Integer(c.receiver_id),
                    Cell::Text(c.status.clone()),
                    Cell::Text(c.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()),
                ]
            })
            .collect(),
    }
}

async fn card(source: &ConnectionSource, title: &str, report: Report) -> Widget {
    Widget::new(title, report::scalar(source, report).await.map(Content::Card))
}

async fn report_table(source: &ConnectionSource, report: Report) -> Widget {
    Widget::new(
        report.title(),
        report::run_report(source, report).await.map(Content::Table),
    )
}

async fn chart(
    source: &ConnectionSource,
    report: Report,
    kind: ChartKind,
    label: &str,
    value: &str,
) -> Widget {
    let content = report::run_report(source, report).await.map(|table| {
        let series = table.series(label, value);
        match kind {
            ChartKind::Bar => Content::BarChart(series),
            ChartKind::Pie => Content::PieChart(series),
        }
    });
    Widget::new(report.title(), content)
}

async fn current_claim(source: &ConnectionSource, claim_id: i64) -> Result<Content> {
    let claim = claim::find_claim(source, claim_id)
        .await?
        .ok_or(Error::ClaimNotFound { claim_id })?;
    Ok(Content::Table(claims_table(&[claim])))
}

async fn claim_widgets(source: &ConnectionSource, action: ClaimAction) -> Vec<Widget> {
    match action {
        ClaimAction::Create => vec![Widget::new(
            "Choose values for the new claim",
            claim::claim_choices(source).await.map(Content::Choices),
        )],
        ClaimAction::Read => vec![Widget::new(
            "Claims",
            claim::get_all_claims(source)
                .await
                .map(|claims| Content::Table(claims_table(&claims))),
        )],
        ClaimAction::Update { claim_id } => vec![
            Widget::new("Selected claim", current_claim(source, claim_id).await),
            Widget::new(
                "Choose new values",
                claim::claim_choices(source).await.map(Content::Choices),
            ),
        ],
        ClaimAction::Delete { claim_id } => vec![Widget::new(
            "Claim to be deleted",
            current_claim(source, claim_id).await,
        )],
    }
}

/// One row per filter field with the values still selectable under `filter`.
#[must_use]
pub fn filter_options_table(listings: &[food_listing::Model], filter: &ListingFilter) -> Table {
    Table {
        columns: vec!["Filter".to_string(), "Options".to_string()],
        rows: FilterField::ALL
            .iter()
            .map(|field| {
                vec![
                    Cell::Text(field.label().to_string()),
                    Cell::Text(listing::filter_options(listings, filter, *field).join(", ")),
                ]
            })
            .collect(),
    }
}

async fn listings_widgets(source: &ConnectionSource, filter: &ListingFilter) -> Vec<Widget> {
    match listing::all_listings(source).await {
        Ok(listings) => vec![
            Widget::new(
                "Food Listings",
                Ok(Content::Table(listings_table(&filter.apply(&listings)))),
            ),
            Widget::new(
                "Filter Options",
                Ok(Content::Table(filter_options_table(&listings, filter))),
            ),
        ],
        Err(e) => vec![Widget::new("Food Listings", Err(e))],
    }
}

/// Loads every widget of `section`.
#[instrument(skip(source))]
pub async fn load_page(source: &ConnectionSource, section: &Section) -> Page {
    let mut widgets = Vec::new();
    match section {
        Section::Home => {
            widgets.push(card(source, "Total Food Quantity", Report::TotalQuantity).await);
            widgets.push(card(source, "No. of Successful Claims", Report::CompletedClaimCount).await);
            widgets.push(card(source, "Total No. of Providers", Report::ProviderCount).await);
            widgets.push(card(source, "Total No. of Receivers", Report::ReceiverCount).await);
        }
        Section::FoodWasteManagement(WasteTab::FoodListings(filter)) => {
            widgets.extend(listings_widgets(source, filter).await);
        }
        Section::FoodWasteManagement(WasteTab::ManageClaims(action)) => {
            widgets.extend(claim_widgets(source, *action).await);
        }
        Section::FoodWasteManagement(WasteTab::ListingDetails) => {
            for report in DETAIL_REPORTS {
                widgets.push(report_table(source, report).await);
            }
        }
        Section::FoodWasteManagement(WasteTab::DataVisualisations) => {
            for (report, kind, label, value) in CHARTS {
                widgets.push(chart(source, report, kind, label, value).await);
            }
        }
        Section::Contact(ContactTab::Providers) => {
            widgets.push(report_table(source, Report::ProviderDirectory).await);
        }
        Section::Contact(ContactTab::Receivers) => {
            widgets.push(report_table(source, Report::ReceiverDirectory).await);
        }
    }

    Page {
        section: section.clone(),
        widgets,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::ErrorKind;
    use crate::test_utils::*;
    use sea_orm::ConnectionTrait;

    #[tokio::test]
    async fn test_home_page_cards() -> Result<()> {
        let source = seeded_db().await?;
        let page = load_page(&source, &Section::Home).await;
        let values: Vec<Content> = page.widgets.into_iter().map(|w| w.content.unwrap()).collect();
        assert_eq!(
            values,
            vec![
                Content::Card(51),
                Content::Card(3),
                Content::Card(4),
                Content::Card(3)
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_listing_details_has_every_report() -> Result<()> {
        let source = seeded_db().await?;
        let page = load_page(&source, &Section::FoodWasteManagement(WasteTab::ListingDetails)).await;
        assert_eq!(page.widgets.len(), DETAIL_REPORTS.len());
        assert!(page.widgets.iter().all(|w| w.content.is_ok()));
        Ok(())
    }

    #[tokio::test]
    async fn test_visualisations_build_series() -> Result<()> {
        let source = seeded_db().await?;
        let page =
            load_page(&source, &Section::FoodWasteManagement(WasteTab::DataVisualisations)).await;
        assert_eq!(page.widgets.len(), CHARTS.len());
        let Ok(Content::PieChart(meal_types)) = &page.widgets[4].content else {
            panic!("meal type widget should be a pie chart");
        };
        assert_eq!(meal_types[0], ("Dinner".to_string(), 3.0));
        Ok(())
    }

    #[tokio::test]
    async fn test_filtered_listings_page() -> Result<()> {
        let source = seeded_db().await?;
        let filter = ListingFilter {
            food_name: Some("Bread".to_string()),
            ..Default::default()
        };
        let page =
            load_page(&source, &Section::FoodWasteManagement(WasteTab::FoodListings(filter))).await;
        let Ok(Content::Table(table)) = &page.widgets[0].content else {
            panic!("listings widget should be a table");
        };
        assert_eq!(table.len(), 2);

        let Ok(Content::Table(options)) = &page.widgets[1].content else {
            panic!("filter options widget should be a table");
        };
        let locations = options.rows.iter().find(|row| row[0] == Cell::Text("Location".to_string()));
        assert_eq!(
            locations.map(|row| row[1].to_string()),
            Some("Shelbyville, Springfield".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_update_form_prefills_current_claim() -> Result<()> {
        let source = seeded_db().await?;
        let section =
            Section::FoodWasteManagement(WasteTab::ManageClaims(ClaimAction::Update { claim_id: 4 }));
        let page = load_page(&source, &section).await;
        assert_eq!(page.widgets.len(), 2);
        let Ok(Content::Table(current)) = &page.widgets[0].content else {
            panic!("current claim should be a table");
        };
        assert_eq!(current.rows[0][0], Cell::Integer(4));
        assert_eq!(current.rows[0][3], Cell::Text("Pending".to_string()));
        assert!(matches!(page.widgets[1].content, Ok(Content::Choices(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_of_missing_claim_fails_only_that_widget() -> Result<()> {
        let source = seeded_db().await?;
        let section =
            Section::FoodWasteManagement(WasteTab::ManageClaims(ClaimAction::Delete { claim_id: 77 }));
        let page = load_page(&source, &section).await;
        assert!(matches!(
            page.widgets[0].content,
            Err(Error::ClaimNotFound { claim_id: 77 })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_failing_widget_does_not_block_others() -> Result<()> {
        let source = seeded_db().await?;
        {
            let lease = source.acquire().await?;
            lease.execute_unprepared("DROP TABLE claims").await?;
        }

        let page = load_page(&source, &Section::Home).await;
        assert_eq!(page.widgets.len(), 4);
        assert!(matches!(page.widgets[0].content, Ok(Content::Card(51))));
        let err = page.widgets[1].content.as_ref().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connectivity);
        assert!(matches!(page.widgets[2].content, Ok(Content::Card(4))));
        assert!(matches!(page.widgets[3].content, Ok(Content::Card(3))));
        Ok(())
    }
}
