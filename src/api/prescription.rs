//! # Prescription API Module
//!
//! Prescriptions hang off a medical record and carry their prescribed
//! packages as `details`.

use crate::{models, repo, utils};
use chrono::Utc;
use uuid::Uuid;

use super::{invalid, not_found};

pub async fn list_prescriptions(
    pagination: &models::pagination::Pagination,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::envelope::Page<models::prescription::Prescription>> {
    repo.list_prescriptions(pagination).await
}

pub async fn get_prescription(
    prescription_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::prescription::Prescription> {
    repo.get_prescription(prescription_id)
        .await?
        .ok_or_else(|| not_found("prescription"))
}

pub async fn get_prescriptions_by_medical_record(
    medical_record_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<models::prescription::Prescription>> {
    repo.get_prescriptions_by_medical_record(medical_record_id)
        .await
}

/// Creates a prescription for an existing medical record.
///
/// `prescribed_at` defaults to now when omitted.
///
/// # Errors
/// Returns an error if:
/// - The medical record id is blank (`InputError`)
/// - The medical record does not exist (`RepoError::NotFound`)
/// - The database insert fails
pub async fn create_prescription(
    payload: models::prescription::PrescriptionPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::prescription::Prescription> {
    let _span = logfire::span!("create_prescription").entered();

    if payload.medical_record_id.trim().is_empty() {
        return Err(invalid("medical record is required"));
    }

    if repo
        .get_medical_record(&payload.medical_record_id)
        .await?
        .is_none()
    {
        return Err(not_found("medical record"));
    }

    let now = Utc::now();
    let prescription = models::prescription::Prescription {
        id: Uuid::new_v4().to_string(),
        medical_record_id: payload.medical_record_id,
        notes: utils::clean_text(payload.notes),
        prescribed_at: payload.prescribed_at.unwrap_or(now),
        created_at: now,
        updated_at: now,
        details: vec![],
    };

    repo.insert_prescription(&prescription).await?;

    Ok(prescription)
}

pub async fn update_prescription(
    prescription_id: &str,
    payload: models::prescription::PrescriptionPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::prescription::Prescription> {
    let current = get_prescription(prescription_id, repo).await?;

    let medical_record_id = if payload.medical_record_id.trim().is_empty() {
        current.medical_record_id.clone()
    } else {
        payload.medical_record_id
    };

    if medical_record_id != current.medical_record_id
        && repo.get_medical_record(&medical_record_id).await?.is_none()
    {
        return Err(not_found("medical record"));
    }

    let prescription = models::prescription::Prescription {
        medical_record_id,
        notes: utils::clean_text(payload.notes),
        prescribed_at: payload.prescribed_at.unwrap_or(current.prescribed_at),
        updated_at: Utc::now(),
        ..current
    };

    if !repo.update_prescription(&prescription).await? {
        return Err(not_found("prescription"));
    }

    Ok(prescription)
}

pub async fn delete_prescription(
    prescription_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<()> {
    if !repo.delete_prescription(prescription_id).await? {
        return Err(not_found("prescription"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;

    #[ntex::test]
    async fn test_create_prescription_defaults_prescribed_at() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_medical_record().times(1).returning(|id| {
            Ok(Some(models::prescription::MedicalRecord {
                id: id.to_string(),
                ..Default::default()
            }))
        });
        mock_repo
            .expect_insert_prescription()
            .times(1)
            .returning(|_| Ok(()));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let prescription = create_prescription(
            models::prescription::PrescriptionPayload {
                medical_record_id: "rec-1".into(),
                notes: Some("after meals".into()),
                prescribed_at: None,
            },
            &mock_repo,
        )
        .await
        .unwrap();

        assert_eq!(prescription.prescribed_at, prescription.created_at);
        assert!(prescription.details.is_empty());
    }

    #[ntex::test]
    async fn test_create_prescription_requires_record() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let result = create_prescription(
            models::prescription::PrescriptionPayload::default(),
            &mock_repo,
        )
        .await;

        assert!(result.is_err_and(|e| e.downcast_ref::<super::super::InputError>().is_some()));
    }

    #[ntex::test]
    async fn test_update_prescription_keeps_record_when_blank() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_prescription().times(1).returning(|id| {
            Ok(Some(models::prescription::Prescription {
                id: id.to_string(),
                medical_record_id: "rec-1".into(),
                ..Default::default()
            }))
        });
        mock_repo.expect_get_medical_record().never();
        mock_repo
            .expect_update_prescription()
            .withf(|p| p.medical_record_id == "rec-1" && p.notes.as_deref() == Some("twice daily"))
            .times(1)
            .returning(|_| Ok(true));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let result = update_prescription(
            "rx-1",
            models::prescription::PrescriptionPayload {
                notes: Some("twice daily".into()),
                ..Default::default()
            },
            &mock_repo,
        )
        .await;

        assert!(result.is_ok());
    }
}
