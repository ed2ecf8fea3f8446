//! # Medicine API Module
//!
//! Catalog of medicines the clinic prescribes and sells. Prices are exact
//! decimals; free-text fields are sanitized before they are stored.

use crate::{models, repo, utils};
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{invalid, not_found};

/// Lists medicines ordered by name.
///
/// # Arguments
/// * `pagination` - Normalized page/limit
/// * `repo` - Repository instance for database operations
///
/// # Returns
/// * `anyhow::Result<Page<Medicine>>` - Page of medicines plus totals
pub async fn list_medicines(
    pagination: &models::pagination::Pagination,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::envelope::Page<models::medicine::Medicine>> {
    repo.list_medicines(pagination).await
}

/// Gets one medicine, failing with `RepoError::NotFound` when it is missing.
pub async fn get_medicine(
    medicine_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::medicine::Medicine> {
    repo.get_medicine(medicine_id)
        .await?
        .ok_or_else(|| not_found("medicine"))
}

/// Creates a medicine from the payload.
///
/// A missing price is stored as zero.
///
/// # Errors
/// Returns an error if:
/// - The name is blank or the price is negative
/// - The database insert fails
pub async fn create_medicine(
    payload: models::medicine::MedicinePayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::medicine::Medicine> {
    let _span = logfire::span!("create_medicine").entered();

    if !payload.fields_are_valid() {
        return Err(invalid("medicine name is required and price must be positive"));
    }

    let now = Utc::now();
    let medicine = models::medicine::Medicine {
        id: Uuid::new_v4().to_string(),
        name: ammonia::clean(payload.name.trim()),
        concentration: utils::clean_text(payload.concentration),
        unit: utils::clean_text(payload.unit),
        description: utils::clean_text(payload.description),
        manufacturer: utils::clean_text(payload.manufacturer),
        price: payload.price.unwrap_or(Decimal::ZERO),
        created_at: now,
        updated_at: now,
    };

    repo.insert_medicine(&medicine).await?;

    Ok(medicine)
}

/// Replaces the editable fields of a medicine. A missing price keeps the
/// stored one.
pub async fn update_medicine(
    medicine_id: &str,
    payload: models::medicine::MedicinePayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::medicine::Medicine> {
    if !payload.fields_are_valid() {
        return Err(invalid("medicine name is required and price must be positive"));
    }

    let current = get_medicine(medicine_id, repo).await?;
    let medicine = models::medicine::Medicine {
        name: ammonia::clean(payload.name.trim()),
        concentration: utils::clean_text(payload.concentration),
        unit: utils::clean_text(payload.unit),
        description: utils::clean_text(payload.description),
        manufacturer: utils::clean_text(payload.manufacturer),
        price: payload.price.unwrap_or(current.price),
        updated_at: Utc::now(),
        ..current
    };

    if !repo.update_medicine(&medicine).await? {
        return Err(not_found("medicine"));
    }

    Ok(medicine)
}

pub async fn delete_medicine(medicine_id: &str, repo: &repo::ImplAppRepo) -> anyhow::Result<()> {
    if !repo.delete_medicine(medicine_id).await? {
        return Err(not_found("medicine"));
    }
    Ok(())
}
