use crate::{models, repo, utils};

use super::{invalid, not_found};

pub async fn get_prescription_details(
    prescription_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<models::prescription::PrescriptionDetail>> {
    repo.get_prescription_details(prescription_id).await
}

pub async fn get_prescription_detail(
    prescription_id: &str,
    package_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::prescription::PrescriptionDetail> {
    repo.get_prescription_detail(prescription_id, package_id)
        .await?
        .ok_or_else(|| not_found("prescription detail"))
}

/// Adds a package to a prescription. Both sides must exist and the pair must
/// not be prescribed yet.
pub async fn create_prescription_detail(
    payload: models::prescription::PrescriptionDetailPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::prescription::PrescriptionDetail> {
    let _span = logfire::span!("create_prescription_detail").entered();

    if !payload.fields_are_valid() {
        return Err(invalid(
            "prescription, package, positive quantity and dosage are required",
        ));
    }

    if repo
        .get_prescription(&payload.prescription_id)
        .await?
        .is_none()
    {
        return Err(not_found("prescription"));
    }

    let package = repo
        .get_medication_package(&payload.medication_package_id)
        .await?
        .ok_or_else(|| not_found("medication package"))?;

    if repo
        .get_prescription_detail(&payload.prescription_id, &payload.medication_package_id)
        .await?
        .is_some()
    {
        return Err(invalid("package already prescribed in this prescription"));
    }

    let detail = models::prescription::PrescriptionDetail {
        prescription_id: payload.prescription_id,
        medication_package_id: payload.medication_package_id,
        quantity: payload.quantity,
        dosage: ammonia::clean(payload.dosage.trim()),
        instructions: utils::clean_text(payload.instructions),
        medication_package: Some(package),
    };

    repo.insert_prescription_detail(&detail).await?;

    Ok(detail)
}

pub async fn update_prescription_detail(
    prescription_id: &str,
    package_id: &str,
    payload: models::prescription::PrescriptionDetailUpdate,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::prescription::PrescriptionDetail> {
    if payload.quantity.is_some_and(|q| q <= 0) {
        return Err(invalid("quantity must be positive"));
    }

    let current = get_prescription_detail(prescription_id, package_id, repo).await?;
    let detail = models::prescription::PrescriptionDetail {
        quantity: payload.quantity.unwrap_or(current.quantity),
        dosage: payload
            .dosage
            .map(|d| ammonia::clean(d.trim()))
            .unwrap_or(current.dosage.clone()),
        instructions: utils::clean_text(payload.instructions).or(current.instructions.clone()),
        ..current
    };

    if !repo.update_prescription_detail(&detail).await? {
        return Err(not_found("prescription detail"));
    }

    Ok(detail)
}

pub async fn delete_prescription_detail(
    prescription_id: &str,
    package_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<()> {
    if !repo
        .delete_prescription_detail(prescription_id, package_id)
        .await?
    {
        return Err(not_found("prescription detail"));
    }
    Ok(())
}
