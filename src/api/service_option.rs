use crate::{models, repo};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{invalid, not_found};

fn validate(payload: &models::booking::ServiceOptionPayload) -> anyhow::Result<()> {
    if payload.name.trim().is_empty()
        || payload.price < Decimal::ZERO
        || payload.duration_minutes <= 0
    {
        return Err(invalid(
            "service name, price and positive duration are required",
        ));
    }
    Ok(())
}

pub async fn list_service_options(
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<models::booking::ServiceOption>> {
    repo.list_service_options().await
}

pub async fn get_service_option(
    service_option_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::booking::ServiceOption> {
    repo.get_service_option(service_option_id)
        .await?
        .ok_or_else(|| not_found("service option"))
}

pub async fn create_service_option(
    payload: models::booking::ServiceOptionPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::booking::ServiceOption> {
    validate(&payload)?;

    let service_option = models::booking::ServiceOption {
        id: Uuid::new_v4().to_string(),
        name: ammonia::clean(payload.name.trim()),
        price: payload.price,
        duration_minutes: payload.duration_minutes,
    };

    repo.insert_service_option(&service_option).await?;

    Ok(service_option)
}

pub async fn update_service_option(
    service_option_id: &str,
    payload: models::booking::ServiceOptionPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::booking::ServiceOption> {
    validate(&payload)?;

    let service_option = models::booking::ServiceOption {
        id: service_option_id.to_string(),
        name: ammonia::clean(payload.name.trim()),
        price: payload.price,
        duration_minutes: payload.duration_minutes,
    };

    if !repo.update_service_option(&service_option).await? {
        return Err(not_found("service option"));
    }

    Ok(service_option)
}

pub async fn delete_service_option(
    service_option_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<()> {
    if !repo.delete_service_option(service_option_id).await? {
        return Err(not_found("service option"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::{MockAppRepo, RepoError};
    use rust_decimal_macros::dec;

    #[ntex::test]
    async fn test_update_missing_service_option() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_update_service_option()
            .times(1)
            .returning(|_| Ok(false));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let payload = models::booking::ServiceOptionPayload {
            name: "Grooming".into(),
            price: dec!(20),
            duration_minutes: 45,
        };
        let err = update_service_option("missing", payload, &mock_repo)
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<RepoError>().is_some());
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let payload = models::booking::ServiceOptionPayload {
            name: "Grooming".into(),
            price: dec!(20),
            duration_minutes: 0,
        };
        assert!(validate(&payload).is_err());
    }
}
