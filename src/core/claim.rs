//! Claim business logic - create, read, update and delete claim records.
//!
//! Claims are the only rows the dashboard writes. Each operation acquires its
//! own connection from the [`ConnectionSource`] and runs a single statement
//! (update also reads the row first so a missing claim is reported as such).
//! Referential integrity is left entirely to the database: a claim pointing at
//! an unknown listing or receiver comes back as
//! [`Error::IntegrityViolation`](crate::errors::Error::IntegrityViolation).

use crate::{
    core::connection::ConnectionSource,
    entities::{Claim, ClaimColumn, FoodListing, FoodListingColumn, Receiver, ReceiverColumn, claim},
    errors::{Error, Result},
};
use sea_orm::{
    QueryOrder, QuerySelect, Set,
    prelude::*,
    sea_query::{Expr, Query},
};
use tracing::{info, instrument};

/// Statuses offered when the claims table is still empty.
pub const DEFAULT_STATUSES: [&str; 3] = ["Pending", "Completed", "Cancelled"];

/// Values a claim form may choose from, fetched right before the form is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimChoices {
    /// Every listing id
    pub food_ids: Vec<i64>,
    /// Every receiver id
    pub receiver_ids: Vec<i64>,
    /// Every status currently used by a claim
    pub statuses: Vec<String>,
}

/// Inserts a claim stamped with the database's current time.
///
/// # Errors
/// Returns an integrity error if `food_id` or `receiver_id` does not exist,
/// or a connectivity error if the statement cannot run.
#[instrument(skip(source))]
pub async fn create_claim(
    source: &ConnectionSource,
    food_id: i64,
    receiver_id: i64,
    status: &str,
) -> Result<()> {
    let mut insert = Query::insert();
    insert
        .into_table(Claim)
        .columns([
            ClaimColumn::FoodId,
            ClaimColumn::ReceiverId,
            ClaimColumn::Status,
            ClaimColumn::Timestamp,
        ])
        .values([
            food_id.into(),
            receiver_id.into(),
            status.into(),
            Expr::current_timestamp().into(),
        ])
        .map_err(|e| Error::Database(format!("Failed to build claim insert: {e}")))?;

    let lease = source.acquire().await?;
    let stmt = lease.get_database_backend().build(&insert);
    let result = lease.execute(stmt).await;
    lease.release().await;
    result?;

    info!("Added claim for food_id {food_id} by receiver_id {receiver_id} ({status})");
    Ok(())
}

/// Returns the whole claims table in storage order.
pub async fn get_all_claims(source: &ConnectionSource) -> Result<Vec<claim::Model>> {
    let lease = source.acquire().await?;
    let result = Claim::find().all(&*lease).await;
    lease.release().await;
    result.map_err(Into::into)
}

/// Looks up a single claim, e.g. to pre-fill the update form.
pub async fn find_claim(source: &ConnectionSource, claim_id: i64) -> Result<Option<claim::Model>> {
    let lease = source.acquire().await?;
    let result = Claim::find_by_id(claim_id).one(&*lease).await;
    lease.release().await;
    result.map_err(Into::into)
}

async fn overwrite_claim(
    db: &DatabaseConnection,
    claim_id: i64,
    food_id: i64,
    receiver_id: i64,
    status: String,
) -> Result<claim::Model> {
    let mut claim: claim::ActiveModel = Claim::find_by_id(claim_id)
        .one(db)
        .await?
        .ok_or(Error::ClaimNotFound { claim_id })?
        .into();

    claim.food_id = Set(food_id);
    claim.receiver_id = Set(receiver_id);
    claim.status = Set(status);
    claim.timestamp = Set(chrono::Utc::now().naive_utc());

    claim.update(db).await.map_err(Into::into)
}

/// Overwrites a claim's listing, receiver and status, and restamps it with the
/// current time.
///
/// # Errors
/// Returns an error if:
/// - No claim has `claim_id`
/// - The new `food_id` or `receiver_id` violates a foreign key
/// - The database update operation fails
#[instrument(skip(source))]
pub async fn update_claim(
    source: &ConnectionSource,
    claim_id: i64,
    food_id: i64,
    receiver_id: i64,
    status: &str,
) -> Result<claim::Model> {
    let lease = source.acquire().await?;
    let result = overwrite_claim(&lease, claim_id, food_id, receiver_id, status.to_string()).await;
    lease.release().await;

    let updated = result?;
    info!("Updated claim {claim_id}");
    Ok(updated)
}

/// Deletes a claim and returns the number of rows removed (0 or 1).
#[instrument(skip(source))]
pub async fn delete_claim(source: &ConnectionSource, claim_id: i64) -> Result<u64> {
    let lease = source.acquire().await?;
    let result = Claim::delete_by_id(claim_id).exec(&*lease).await;
    lease.release().await;

    let rows_affected = result?.rows_affected;
    info!("Attempted to delete claim {claim_id}, rows affected: {rows_affected}");
    Ok(rows_affected)
}

/// Distinct listing ids, ascending.
pub async fn food_id_options(source: &ConnectionSource) -> Result<Vec<i64>> {
    let lease = source.acquire().await?;
    let result = FoodListing::find()
        .select_only()
        .column(FoodListingColumn::FoodId)
        .distinct()
        .order_by_asc(FoodListingColumn::FoodId)
        .into_tuple::<i64>()
        .all(&*lease)
        .await;
    lease.release().await;
    result.map_err(Into::into)
}

/// Distinct receiver ids, ascending.
pub async fn receiver_id_options(source: &ConnectionSource) -> Result<Vec<i64>> {
    let lease = source.acquire().await?;
    let result = Receiver::find()
        .select_only()
        .column(ReceiverColumn::ReceiverId)
        .distinct()
        .order_by_asc(ReceiverColumn::ReceiverId)
        .into_tuple::<i64>()
        .all(&*lease)
        .await;
    lease.release().await;
    result.map_err(Into::into)
}

/// Distinct statuses already present on claims, falling back to
/// [`DEFAULT_STATUSES`] when there are none.
pub async fn status_options(source: &ConnectionSource) -> Result<Vec<String>> {
    let lease = source.acquire().await?;
    let result = Claim::find()
        .select_only()
        .column(ClaimColumn::Status)
        .distinct()
        .order_by_asc(ClaimColumn::Status)
        .into_tuple::<String>()
        .all(&*lease)
        .await;
    lease.release().await;

    let statuses = result?;
    if statuses.is_empty() {
        return Ok(DEFAULT_STATUSES.iter().map(ToString::to_string).collect());
    }
    Ok(statuses)
}

/// Fetches every choice a claim form needs.
pub async fn claim_choices(source: &ConnectionSource) -> Result<ClaimChoices> {
    Ok(ClaimChoices {
        food_ids: food_id_options(source).await?,
        receiver_ids: receiver_id_options(source).await?,
        statuses: status_options(source).await?,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::ErrorKind;
    use crate::test_utils::*;
    use chrono::SubsecRound;

    #[tokio::test]
    async fn test_create_claim_adds_one_row() -> Result<()> {
        let source = seeded_db().await?;
        let before = get_all_claims(&source).await?;
        let called_at = chrono::Utc::now().naive_utc().trunc_subsecs(0);

        create_claim(&source, 6, 3, "Pending").await?;

        let after = get_all_claims(&source).await?;
        assert_eq!(after.len(), before.len() + 1);
        let new_claim = after
            .iter()
            .find(|c| !before.iter().any(|b| b.claim_id == c.claim_id))
            .unwrap();
        assert_eq!(new_claim.food_id, 6);
        assert_eq!(new_claim.receiver_id, 3);
        assert_eq!(new_claim.status, "Pending");
        assert!(new_claim.timestamp >= called_at);
        Ok(())
    }

    #[tokio::test]
    async fn test_read_returns_every_claim() -> Result<()> {
        let source = seeded_db().await?;
        let claims = get_all_claims(&source).await?;
        assert_eq!(claims.len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_claim_overwrites_and_restamps() -> Result<()> {
        let source = seeded_db().await?;
        let original = find_claim(&source, 4).await?.unwrap();

        let updated = update_claim(&source, 4, 6, 1, "Completed").await?;
        assert_eq!(updated.claim_id, 4);

        let stored = get_all_claims(&source)
            .await?
            .into_iter()
            .find(|c| c.claim_id == 4)
            .unwrap();
        assert_eq!(stored.food_id, 6);
        assert_eq!(stored.receiver_id, 1);
        assert_eq!(stored.status, "Completed");
        assert!(stored.timestamp > original.timestamp);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_claim() -> Result<()> {
        let source = seeded_db().await?;
        let result = update_claim(&source, 999, 1, 1, "Pending").await;
        assert!(matches!(result, Err(Error::ClaimNotFound { claim_id: 999 })));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_claim() -> Result<()> {
        let source = seeded_db().await?;
        assert_eq!(delete_claim(&source, 2).await?, 1);

        let claims = get_all_claims(&source).await?;
        assert!(claims.iter().all(|c| c.claim_id != 2));
        assert!(get_claim_for_test(&source, 2).await?.is_none());

        // Deleting again touches nothing
        assert_eq!(delete_claim(&source, 2).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_with_unknown_food_is_integrity_violation() -> Result<()> {
        let source = seeded_db().await?;
        let err = create_claim(&source, 404, 1, "Pending").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IntegrityViolation);
        assert_eq!(get_all_claims(&source).await?.len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_with_unknown_receiver_is_integrity_violation() -> Result<()> {
        let source = seeded_db().await?;
        let err = update_claim(&source, 1, 1, 404, "Pending").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IntegrityViolation);

        let unchanged = find_claim(&source, 1).await?.unwrap();
        assert_eq!(unchanged.receiver_id, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_choices_reflect_current_data() -> Result<()> {
        let source = seeded_db().await?;
        let choices = claim_choices(&source).await?;
        assert_eq!(choices.food_ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(choices.receiver_ids, vec![1, 2, 3]);
        assert_eq!(choices.statuses, vec!["Cancelled", "Completed", "Pending"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_status_options_fall_back_when_no_claims() -> Result<()> {
        let source = setup_test_db().await?;
        assert_eq!(status_options(&source).await?, DEFAULT_STATUSES.to_vec());
        assert!(food_id_options(&source).await?.is_empty());
        Ok(())
    }
}
