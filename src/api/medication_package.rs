use crate::{models, repo, utils};
use chrono::Utc;
use uuid::Uuid;

use super::{invalid, not_found};

pub async fn list_medication_packages(
    pagination: &models::pagination::Pagination,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::envelope::Page<models::medication_package::MedicationPackage>> {
    repo.list_medication_packages(pagination).await
}

pub async fn get_medication_package(
    package_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::medication_package::MedicationPackage> {
    repo.get_medication_package(package_id)
        .await?
        .ok_or_else(|| not_found("medication package"))
}

/// Packages of one medicine, soonest expiry first
pub async fn get_medication_packages_by_medicine(
    medicine_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<models::medication_package::MedicationPackage>> {
    if repo.get_medicine(medicine_id).await?.is_none() {
        return Err(not_found("medicine"));
    }

    repo.get_medication_packages_by_medicine(medicine_id).await
}

/// Creates a package for an existing medicine and returns it with the
/// medicine nested.
pub async fn create_medication_package(
    payload: models::medication_package::MedicationPackagePayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::medication_package::MedicationPackage> {
    let _span = logfire::span!("create_medication_package").entered();

    if !payload.fields_are_valid() {
        return Err(invalid(
            "medicine, package name, quantity and unit price are required",
        ));
    }

    let medicine = repo
        .get_medicine(&payload.medicine_id)
        .await?
        .ok_or_else(|| not_found("medicine"))?;

    let now = Utc::now();
    let package = models::medication_package::MedicationPackage {
        id: Uuid::new_v4().to_string(),
        medicine_id: payload.medicine_id,
        package_name: ammonia::clean(payload.package_name.trim()),
        quantity: payload.quantity,
        unit_price: payload.unit_price,
        batch_number: utils::clean_text(payload.batch_number),
        expiry_date: payload.expiry_date,
        created_at: now,
        updated_at: now,
        medicine: Some(medicine),
    };

    repo.insert_medication_package(&package).await?;

    Ok(package)
}

pub async fn update_medication_package(
    package_id: &str,
    payload: models::medication_package::MedicationPackagePayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::medication_package::MedicationPackage> {
    if !payload.fields_are_valid() {
        return Err(invalid(
            "medicine, package name, quantity and unit price are required",
        ));
    }

    let current = get_medication_package(package_id, repo).await?;
    let medicine = if current.medicine_id == payload.medicine_id {
        current.medicine.clone()
    } else {
        Some(
            repo.get_medicine(&payload.medicine_id)
                .await?
                .ok_or_else(|| not_found("medicine"))?,
        )
    };

    let package = models::medication_package::MedicationPackage {
        medicine_id: payload.medicine_id,
        package_name: ammonia::clean(payload.package_name.trim()),
        quantity: payload.quantity,
        unit_price: payload.unit_price,
        batch_number: utils::clean_text(payload.batch_number),
        expiry_date: payload.expiry_date,
        updated_at: Utc::now(),
        medicine,
        ..current
    };

    if !repo.update_medication_package(&package).await? {
        return Err(not_found("medication package"));
    }

    Ok(package)
}

pub async fn delete_medication_package(
    package_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<()> {
    if !repo.delete_medication_package(package_id).await? {
        return Err(not_found("medication package"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::{MockAppRepo, RepoError};
    use rust_decimal_macros::dec;

    #[ntex::test]
    async fn test_create_package_for_missing_medicine() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_medicine()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_insert_medication_package().never();
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let payload = models::medication_package::MedicationPackagePayload {
            medicine_id: "missing".into(),
            package_name: "Box of 10".into(),
            quantity: 10,
            unit_price: dec!(2.5),
            ..Default::default()
        };
        let err = create_medication_package(payload, &mock_repo)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RepoError>(),
            Some(RepoError::NotFound(_))
        ));
    }

    #[ntex::test]
    async fn test_create_package_nests_medicine() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_medicine().times(1).returning(|id| {
            Ok(Some(models::medicine::Medicine {
                id: id.to_string(),
                name: "Amoxicillin".into(),
                ..Default::default()
            }))
        });
        mock_repo
            .expect_insert_medication_package()
            .times(1)
            .returning(|_| Ok(()));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let payload = models::medication_package::MedicationPackagePayload {
            medicine_id: "med-1".into(),
            package_name: "Box of 10".into(),
            quantity: 10,
            unit_price: dec!(2.5),
            ..Default::default()
        };
        let package = create_medication_package(payload, &mock_repo)
            .await
            .unwrap();

        assert_eq!(package.medicine.map(|m| m.name), Some("Amoxicillin".into()));
    }

    #[ntex::test]
    async fn test_packages_by_unknown_medicine() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_medicine()
            .times(1)
            .returning(|_| Ok(None));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        assert!(
            get_medication_packages_by_medicine("missing", &mock_repo)
                .await
                .is_err()
        );
    }
}
