//! Report catalog and tabular results.
//!
//! Each [`Report`] is one fixed, parameterless SQL statement. Running it yields
//! a [`Table`]: the column names in query order and one row of [`Cell`]s per
//! result row. Reports that rank by a count break ties on the grouping key so
//! their output is deterministic.
//!
//! Two entries reproduce the dashboard's historical behaviour rather than what
//! their titles suggest: [`Report::TopClaimingReceivers`] runs the same query
//! as [`Report::ReceiversByCity`], and [`Report::ClaimsPerFoodItem`] counts
//! listings rather than claims. [`Report::ClaimStatusPercentage`] divides by a
//! constant 1000, not by the number of claims.

use crate::{
    core::connection::ConnectionSource,
    errors::{Error, Result},
};
use sea_orm::QueryResult;
use std::fmt;
use tracing::{debug, instrument};

/// Denominator of the claim status percentage.
pub const STATUS_PERCENTAGE_DENOMINATOR: i64 = 1000;

/// How many locations [`Report::TopLocations`] keeps.
pub const TOP_LOCATIONS_LIMIT: usize = 10;

/// Native type of a result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// 64-bit integer (counts, sums of integer columns, identifiers)
    Integer,
    /// Floating point (averages, percentages)
    Real,
    /// Text
    Text,
}

/// One value in a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// SQL NULL
    Null,
    /// Integer value
    Integer(i64),
    /// Floating point value
    Real(f64),
    /// Text value
    Text(String),
}

impl Cell {
    /// Returns the value as an integer, if it is one.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns any numeric value as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // counts and quantities are far below 2^52
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v:.2}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// A rectangular result set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Column names, in query order
    pub columns: Vec<String>,
    /// Rows; each has exactly `columns.len()` cells
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Position of the named column.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of the named column, top to bottom.
    pub fn column(&self, name: &str) -> Vec<&Cell> {
        self.column_index(name)
            .map(|idx| self.rows.iter().filter_map(|row| row.get(idx)).collect())
            .unwrap_or_default()
    }

    /// Pairs a label column with a numeric column, for charts.
    ///
    /// Rows whose value is not numeric are skipped.
    #[must_use]
    pub fn series(&self, label: &str, value: &str) -> Vec<(String, f64)> {
        let (Some(l), Some(v)) = (self.column_index(label), self.column_index(value)) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|row| Some((row.get(l)?.to_string(), row.get(v)?.as_f64()?)))
            .collect()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the result has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The fixed report catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Report {
    /// Sum of quantity across all listings
    TotalQuantity,
    /// Claims with status `Completed`
    CompletedClaimCount,
    /// Number of providers
    ProviderCount,
    /// Number of receivers
    ReceiverCount,
    /// Providers per city
    ProvidersByCity,
    /// Receivers per city
    ReceiversByCity,
    /// Listings per provider type
    ListingsByProviderType,
    /// Total listed quantity per provider type
    QuantityByProviderType,
    /// Shown as "receivers who claimed the most food"; same query as [`Self::ReceiversByCity`]
    TopClaimingReceivers,
    /// Locations with the most listings
    TopLocations,
    /// Listings per food type
    FoodTypes,
    /// Shown as "claims per food item"; counts listings per food name
    ClaimsPerFoodItem,
    /// Provider with the most completed claims
    TopProviderByCompletedClaims,
    /// Share of each claim status, out of a fixed 1000
    ClaimStatusPercentage,
    /// Average claimed listing quantity per receiver
    AvgQuantityPerReceiver,
    /// Claims per meal type
    ClaimsByMealType,
    /// Total listed quantity per provider
    QuantityByProvider,
    /// Provider contact directory
    ProviderDirectory,
    /// Receiver directory
    ReceiverDirectory,
}

use ColumnKind::{Integer, Real, Text};

const RECEIVERS_BY_CITY_SQL: &str = "SELECT city AS City, COUNT(name) AS ReceiverCount \
     FROM receivers GROUP BY city ORDER BY ReceiverCount DESC, City ASC";

impl Report {
    /// Every report, in catalog order.
    pub const ALL: [Self; 19] = [
        Self::TotalQuantity,
        Self::CompletedClaimCount,
        Self::ProviderCount,
        Self::ReceiverCount,
        Self::ProvidersByCity,
        Self::ReceiversByCity,
        Self::ListingsByProviderType,
        Self::QuantityByProviderType,
        Self::TopClaimingReceivers,
        Self::TopLocations,
        Self::FoodTypes,
        Self::ClaimsPerFoodItem,
        Self::TopProviderByCompletedClaims,
        Self::ClaimStatusPercentage,
        Self::AvgQuantityPerReceiver,
        Self::ClaimsByMealType,
        Self::QuantityByProvider,
        Self::ProviderDirectory,
        Self::ReceiverDirectory,
    ];

    /// Heading shown above the report.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TotalQuantity => "Total quantity of food available from all providers",
            Self::CompletedClaimCount => "No. of successful claims",
            Self::ProviderCount => "Total no. of providers",
            Self::ReceiverCount => "Total no. of receivers",
            Self::ProvidersByCity => "Food providers count in each city",
            Self::ReceiversByCity => "Food receivers count in each city",
            Self::ListingsByProviderType => "Food provider type that contributes the most food",
            Self::QuantityByProviderType => "Total quantity listed by provider type",
            Self::TopClaimingReceivers => "Receivers who have claimed the most food",
            Self::TopLocations => "Cities with highest number of food listings",
            Self::FoodTypes => "Most commonly available food types",
            Self::ClaimsPerFoodItem => "Food claims for each food item",
            Self::TopProviderByCompletedClaims => {
                "Provider with highest number of successful food claims"
            }
            Self::ClaimStatusPercentage => "Percentage of food claim status",
            Self::AvgQuantityPerReceiver => "Average quantity of food claimed per receiver",
            Self::ClaimsByMealType => "Meal type that was claimed the most",
            Self::QuantityByProvider => "Total quantity of food donated by each provider",
            Self::ProviderDirectory => "Contact information of food providers",
            Self::ReceiverDirectory => "List of receivers",
        }
    }

    /// The statement this report runs.
    #[must_use]
    pub const fn sql(self) -> &'static str {
        match self {
            Self::TotalQuantity => {
                "SELECT COALESCE(SUM(quantity), 0) AS TotalQuantity FROM food_listings"
            }
            Self::CompletedClaimCount => {
                "SELECT COUNT(claim_id) AS ClaimCount FROM claims WHERE status = 'Completed'"
            }
            Self::ProviderCount => "SELECT COUNT(provider_id) AS ProviderCount FROM providers",
            Self::ReceiverCount => "SELECT COUNT(receiver_id) AS ReceiverCount FROM receivers",
            Self::ProvidersByCity => {
                "SELECT city AS City, COUNT(name) AS ProviderCount \
                 FROM providers GROUP BY city ORDER BY ProviderCount DESC, City ASC"
            }
            Self::ReceiversByCity | Self::TopClaimingReceivers => RECEIVERS_BY_CITY_SQL,
            Self::ListingsByProviderType => {
                "SELECT provider_type AS ProviderType, COUNT(provider_type) AS FoodProvidedCount \
                 FROM food_listings GROUP BY provider_type \
                 ORDER BY FoodProvidedCount DESC, ProviderType ASC"
            }
            Self::QuantityByProviderType => {
                "SELECT provider_type AS ProviderType, COALESCE(SUM(quantity), 0) AS TotalQuantity \
                 FROM food_listings GROUP BY provider_type \
                 ORDER BY TotalQuantity DESC, ProviderType ASC"
            }
            Self::TopLocations => {
                "SELECT location AS Location, COUNT(location) AS ListingCount \
                 FROM food_listings GROUP BY location \
                 ORDER BY ListingCount DESC, Location ASC LIMIT 10"
            }
            Self::FoodTypes => {
                "SELECT food_type AS FoodType, COUNT(food_type) AS ListingCount \
                 FROM food_listings GROUP BY food_type \
                 ORDER BY ListingCount DESC, FoodType ASC"
            }
            Self::ClaimsPerFoodItem => {
                "SELECT food_name AS FoodName, COUNT(food_name) AS Claims \
                 FROM food_listings GROUP BY food_name \
                 ORDER BY Claims DESC, FoodName ASC"
            }
            Self::TopProviderByCompletedClaims => {
                "SELECT p.name AS ProviderName, COUNT(f.provider_id) AS FoodClaimCount, \
                 c.status AS Status \
                 FROM claims c \
                 JOIN food_listings f ON c.food_id = f.food_id \
                 JOIN providers p ON p.provider_id = f.provider_id \
                 GROUP BY p.name, c.status \
                 HAVING c.status = 'Completed' \
                 ORDER BY FoodClaimCount DESC, ProviderName ASC LIMIT 1"
            }
            Self::ClaimStatusPercentage => {
                "SELECT status AS Status, ROUND(COUNT(status) / 1000.0 * 100, 2) AS Percentage \
                 FROM claims GROUP BY status ORDER BY Status ASC"
            }
            Self::AvgQuantityPerReceiver => {
                "SELECT r.name AS ReceiverName, AVG(f.quantity) AS AvgQuantity \
                 FROM claims c \
                 JOIN food_listings f ON c.food_id = f.food_id \
                 JOIN receivers r ON r.receiver_id = c.receiver_id \
                 GROUP BY r.name ORDER BY ReceiverName ASC"
            }
            Self::ClaimsByMealType => {
                "SELECT f.meal_type AS MealType, COUNT(c.claim_id) AS ClaimCount \
                 FROM food_listings f JOIN claims c ON f.food_id = c.food_id \
                 GROUP BY f.meal_type ORDER BY ClaimCount DESC, MealType ASC"
            }
            Self::QuantityByProvider => {
                "SELECT p.name AS ProviderName, SUM(f.quantity) AS TotalQuantity \
                 FROM providers p JOIN food_listings f ON p.provider_id = f.provider_id \
                 GROUP BY p.name ORDER BY ProviderName ASC"
            }
            Self::ProviderDirectory => {
                "SELECT city AS City, name AS ProviderName, address AS Address, \
                 contact AS Contact, type AS Type FROM providers"
            }
            Self::ReceiverDirectory => {
                "SELECT name AS Name, type AS Type, city AS City, contact AS Contact FROM receivers"
            }
        }
    }

    /// Result columns with their native types, in query order.
    #[must_use]
    pub const fn columns(self) -> &'static [(&'static str, ColumnKind)] {
        match self {
            Self::TotalQuantity => &[("TotalQuantity", Integer)],
            Self::CompletedClaimCount => &[("ClaimCount", Integer)],
            Self::ProviderCount => &[("ProviderCount", Integer)],
            Self::ReceiverCount => &[("ReceiverCount", Integer)],
            Self::ProvidersByCity => &[("City", Text), ("ProviderCount", Integer)],
            Self::ReceiversByCity | Self::TopClaimingReceivers => {
                &[("City", Text), ("ReceiverCount", Integer)]
            }
            Self::ListingsByProviderType => {
                &[("ProviderType", Text), ("FoodProvidedCount", Integer)]
            }
            Self::QuantityByProviderType => &[("ProviderType", Text), ("TotalQuantity", Integer)],
            Self::TopLocations => &[("Location", Text), ("ListingCount", Integer)],
            Self::FoodTypes => &[("FoodType", Text), ("ListingCount", Integer)],
            Self::ClaimsPerFoodItem => &[("FoodName", Text), ("Claims", Integer)],
            Self::TopProviderByCompletedClaims => &[
                ("ProviderName", Text),
                ("FoodClaimCount", Integer),
                ("Status", Text),
            ],
            Self::ClaimStatusPercentage => &[("Status", Text), ("Percentage", Real)],
            Self::AvgQuantityPerReceiver => &[("ReceiverName", Text), ("AvgQuantity", Real)],
            Self::ClaimsByMealType => &[("MealType", Text), ("ClaimCount", Integer)],
            Self::QuantityByProvider => &[("ProviderName", Text), ("TotalQuantity", Integer)],
            Self::ProviderDirectory => &[
                ("City", Text),
                ("ProviderName", Text),
                ("Address", Text),
                ("Contact", Text),
                ("Type", Text),
            ],
            Self::ReceiverDirectory => &[
                ("Name", Text),
                ("Type", Text),
                ("City", Text),
                ("Contact", Text),
            ],
        }
    }

    /// The count column this report is sorted on, descending, if any.
    #[must_use]
    pub const fn ranked_by(self) -> Option<&'static str> {
        match self {
            Self::ProvidersByCity => Some("ProviderCount"),
            Self::ReceiversByCity | Self::TopClaimingReceivers => Some("ReceiverCount"),
            Self::ListingsByProviderType => Some("FoodProvidedCount"),
            Self::QuantityByProviderType => Some("TotalQuantity"),
            Self::TopLocations | Self::FoodTypes => Some("ListingCount"),
            Self::ClaimsPerFoodItem => Some("Claims"),
            Self::TopProviderByCompletedClaims => Some("FoodClaimCount"),
            Self::ClaimsByMealType => Some("ClaimCount"),
            _ => None,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Percentage shown for a claim status: `count / 1000 * 100`, two decimals, half up.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn status_percentage(count: i64) -> f64 {
    let raw = count as f64 / STATUS_PERCENTAGE_DENOMINATOR as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

fn decode_cell(row: &QueryResult, name: &str, kind: ColumnKind) -> Result<Cell> {
    let cell = match kind {
        ColumnKind::Integer => row
            .try_get::<Option<i64>>("", name)?
            .map_or(Cell::Null, Cell::Integer),
        ColumnKind::Real => row
            .try_get::<Option<f64>>("", name)?
            .map_or(Cell::Null, Cell::Real),
        ColumnKind::Text => row
            .try_get::<Option<String>>("", name)?
            .map_or(Cell::Null, Cell::Text),
    };
    Ok(cell)
}

/// Runs one catalog report on a freshly acquired connection.
///
/// # Errors
/// Returns a connectivity error if the database cannot be reached or the
/// statement fails, and an unknown-kind error if a value cannot be decoded.
#[instrument(skip(source))]
pub async fn run_report(source: &ConnectionSource, report: Report) -> Result<Table> {
    let rows = source.query_all(report.sql()).await?;
    let layout = report.columns();

    let mut table = Table {
        columns: layout.iter().map(|(name, _)| (*name).to_string()).collect(),
        rows: Vec::with_capacity(rows.len()),
    };
    for row in &rows {
        let cells = layout
            .iter()
            .map(|(name, kind)| decode_cell(row, name, *kind))
            .collect::<Result<Vec<_>>>()?;
        table.rows.push(cells);
    }

    debug!("Report '{}' returned {} rows", report.title(), table.len());
    Ok(table)
}

/// Runs a single-value report and returns its integer, `0` when NULL or empty.
///
/// # Errors
/// Same as [`run_report`]; additionally fails if the report is not a scalar.
pub async fn scalar(source: &ConnectionSource, report: Report) -> Result<i64> {
    if report.columns().len() != 1 {
        return Err(Error::InvalidInput {
            message: format!("'{}' is not a single-value report", report.title()),
        });
    }
    let table = run_report(source, report).await?;
    Ok(table
        .rows
        .first()
        .and_then(|row| row.first())
        .and_then(Cell::as_i64)
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    fn assert_non_increasing(table: &Table, column: &str) {
        let values: Vec<f64> = table.column(column).iter().filter_map(|c| c.as_f64()).collect();
        assert_eq!(values.len(), table.len(), "every row should carry a count");
        assert!(
            values.windows(2).all(|w| w[0] >= w[1]),
            "{column} should be non-increasing, got {values:?}"
        );
    }

    #[tokio::test]
    async fn test_total_quantity_sums_listings() -> Result<()> {
        let source = setup_test_db().await?;
        insert_provider(&source, 1, "Green Grocer", "Grocery Store", "Springfield").await?;
        insert_listing(&source, 1, "Bread", 5, 1, "Springfield").await?;
        insert_listing(&source, 2, "Rice", 10, 1, "Springfield").await?;
        insert_listing(&source, 3, "Soup", 0, 1, "Springfield").await?;

        assert_eq!(scalar(&source, Report::TotalQuantity).await?, 15);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_tables_yield_zero_scalars() -> Result<()> {
        let source = setup_test_db().await?;
        assert_eq!(scalar(&source, Report::CompletedClaimCount).await?, 0);
        assert_eq!(scalar(&source, Report::TotalQuantity).await?, 0);
        assert_eq!(scalar(&source, Report::ProviderCount).await?, 0);
        assert_eq!(scalar(&source, Report::ReceiverCount).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_scalar_rejects_multi_column_report() -> Result<()> {
        let source = setup_test_db().await?;
        let result = scalar(&source, Report::ProvidersByCity).await;
        assert!(matches!(result, Err(Error::InvalidInput { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_home_counts() -> Result<()> {
        let source = seeded_db().await?;
        assert_eq!(scalar(&source, Report::ProviderCount).await?, 4);
        assert_eq!(scalar(&source, Report::ReceiverCount).await?, 3);
        assert_eq!(scalar(&source, Report::CompletedClaimCount).await?, 3);
        assert_eq!(scalar(&source, Report::TotalQuantity).await?, 5 + 10 + 0 + 20 + 8 + 8);
        Ok(())
    }

    #[tokio::test]
    async fn test_ranked_reports_are_non_increasing() -> Result<()> {
        let source = seeded_db().await?;
        for report in Report::ALL {
            if let Some(column) = report.ranked_by() {
                let table = run_report(&source, report).await?;
                assert_non_increasing(&table, column);
            }
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_every_report_runs_and_keeps_column_names() -> Result<()> {
        let source = seeded_db().await?;
        for report in Report::ALL {
            let table = run_report(&source, report).await?;
            let expected: Vec<&str> = report.columns().iter().map(|(n, _)| *n).collect();
            assert_eq!(table.columns, expected, "columns of {report:?}");
            assert!(table.rows.iter().all(|r| r.len() == expected.len()));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_ties_break_on_grouping_key() -> Result<()> {
        let source = seeded_db().await?;
        let table = run_report(&source, Report::ProvidersByCity).await?;
        // Springfield has two providers, Shelbyville and Capital City one each
        assert_eq!(
            table.column("City"),
            vec![
                &Cell::Text("Springfield".to_string()),
                &Cell::Text("Capital City".to_string()),
                &Cell::Text("Shelbyville".to_string()),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_top_claiming_receivers_duplicates_receivers_by_city() -> Result<()> {
        let source = seeded_db().await?;
        let by_city = run_report(&source, Report::ReceiversByCity).await?;
        let top = run_report(&source, Report::TopClaimingReceivers).await?;
        assert_eq!(by_city, top);
        Ok(())
    }

    #[tokio::test]
    async fn test_claims_per_food_item_counts_listings() -> Result<()> {
        let source = seeded_db().await?;
        let table = run_report(&source, Report::ClaimsPerFoodItem).await?;
        assert_eq!(table.rows[0], vec![Cell::Text("Bread".to_string()), Cell::Integer(2)]);
        // Salad was never claimed but its listing is still counted
        assert!(
            table
                .rows
                .contains(&vec![Cell::Text("Salad".to_string()), Cell::Integer(1)])
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_status_percentage_uses_constant_denominator() -> Result<()> {
        let source = seeded_db().await?;
        let table = run_report(&source, Report::ClaimStatusPercentage).await?;
        let series = table.series("Status", "Percentage");

        // 3 completed, 1 pending, 1 cancelled
        assert_eq!(
            series,
            vec![
                ("Cancelled".to_string(), status_percentage(1)),
                ("Completed".to_string(), status_percentage(3)),
                ("Pending".to_string(), status_percentage(1)),
            ]
        );
        assert_eq!(status_percentage(3), 0.3);
        Ok(())
    }

    #[test]
    fn test_status_percentage_formula() {
        assert_eq!(status_percentage(0), 0.0);
        assert_eq!(status_percentage(1), 0.1);
        assert_eq!(status_percentage(250), 25.0);
        assert_eq!(status_percentage(1000), 100.0);
        assert_eq!(status_percentage(1234), 123.4);
    }

    #[tokio::test]
    async fn test_top_provider_by_completed_claims() -> Result<()> {
        let source = seeded_db().await?;
        let table = run_report(&source, Report::TopProviderByCompletedClaims).await?;
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.rows[0],
            vec![
                Cell::Text("Green Grocer".to_string()),
                Cell::Integer(2),
                Cell::Text("Completed".to_string()),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_average_quantity_per_receiver() -> Result<()> {
        let source = seeded_db().await?;
        let table = run_report(&source, Report::AvgQuantityPerReceiver).await?;
        let series = table.series("ReceiverName", "AvgQuantity");
        // Food Bank claimed listings of 5 and 10; Hope Shelter 20 and 8; Sam 0
        assert_eq!(
            series,
            vec![
                ("Food Bank".to_string(), 7.5),
                ("Hope Shelter".to_string(), 14.0),
                ("Sam Smith".to_string(), 0.0),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_claims_by_meal_type_counts_claims() -> Result<()> {
        let source = seeded_db().await?;
        let table = run_report(&source, Report::ClaimsByMealType).await?;
        assert_eq!(table.rows[0], vec![Cell::Text("Dinner".to_string()), Cell::Integer(3)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_top_locations_limited_to_ten() -> Result<()> {
        let source = setup_test_db().await?;
        insert_provider(&source, 1, "Green Grocer", "Grocery Store", "Springfield").await?;
        for i in 0..12_i64 {
            insert_listing(&source, i + 1, "Bread", 1, 1, &format!("City {i:02}")).await?;
        }
        let table = run_report(&source, Report::TopLocations).await?;
        assert_eq!(table.len(), TOP_LOCATIONS_LIMIT);
        assert_eq!(table.rows[0][0], Cell::Text("City 00".to_string()));
        Ok(())
    }

    #[test]
    fn test_table_series_skips_non_numeric() {
        let table = Table {
            columns: vec!["Label".to_string(), "Value".to_string()],
            rows: vec![
                vec![Cell::Text("a".to_string()), Cell::Integer(2)],
                vec![Cell::Text("b".to_string()), Cell::Null],
            ],
        };
        assert_eq!(table.series("Label", "Value"), vec![("a".to_string(), 2.0)]);
        assert!(table.series("Label", "Missing").is_empty());
    }
}
