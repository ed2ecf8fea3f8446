//! # Pet API Module
//!
//! Pets are owned by a user; bookings and reservations are always made for
//! a pet, which is how ownership of those rows is decided.

use crate::{models, repo, utils};
use chrono::Utc;
use uuid::Uuid;

use super::{invalid, not_found};

/// Builds the pet row for an insert or an update.
///
/// On update the owner and creation date of the stored pet are kept.
fn build_pet(
    pet_id: String,
    owner_id: String,
    payload: models::pet::PetPayload,
    created_at: chrono::DateTime<Utc>,
) -> anyhow::Result<models::pet::Pet> {
    if payload.name.trim().is_empty() || payload.species.trim().is_empty() {
        return Err(invalid("pet name and species are required"));
    }

    Ok(models::pet::Pet {
        id: pet_id,
        owner_id,
        name: ammonia::clean(payload.name.trim()),
        species: ammonia::clean(payload.species.trim()),
        breed: utils::clean_text(payload.breed),
        birth_date: payload.birth_date,
        created_at,
        updated_at: Utc::now(),
    })
}

/// Retrieves all pets belonging to the user, newest first.
///
/// # Arguments
/// * `user` - The caller
/// * `repo` - Repository instance for database operations
pub async fn get_my_pets(
    user: &models::user_app::AuthUser,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<models::pet::Pet>> {
    repo.get_pets_by_owner(&user.id).await
}

pub async fn list_pets(
    pagination: &models::pagination::Pagination,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::envelope::Page<models::pet::Pet>> {
    repo.list_pets(pagination).await
}

pub async fn get_pet(pet_id: &str, repo: &repo::ImplAppRepo) -> anyhow::Result<models::pet::Pet> {
    repo.get_pet(pet_id).await?.ok_or_else(|| not_found("pet"))
}

/// Registers a new pet owned by `owner_id`.
///
/// # Errors
/// Returns an error if:
/// - Name or species is blank
/// - The owner does not exist (foreign key) or the insert fails
pub async fn add_new_pet_to_user(
    owner_id: &str,
    payload: models::pet::PetPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::pet::Pet> {
    let _span = logfire::span!("add_new_pet_to_user").entered();

    let pet = build_pet(
        Uuid::new_v4().to_string(),
        owner_id.to_string(),
        payload,
        Utc::now(),
    )?;
    repo.insert_pet(&pet).await?;

    Ok(pet)
}

pub async fn update_pet(
    pet_id: &str,
    payload: models::pet::PetPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::pet::Pet> {
    let current = get_pet(pet_id, repo).await?;

    let pet = build_pet(current.id, current.owner_id, payload, current.created_at)?;
    if !repo.update_pet(&pet).await? {
        return Err(not_found("pet"));
    }

    Ok(pet)
}

/// Deletes the pet; its bookings and reservations go with it
pub async fn delete_pet(pet_id: &str, repo: &repo::ImplAppRepo) -> anyhow::Result<()> {
    if !repo.delete_pet(pet_id).await? {
        return Err(not_found("pet"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;

    #[ntex::test]
    async fn test_add_new_pet_to_user() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_insert_pet()
            .withf(|pet| pet.owner_id == "owner-1" && pet.name == "Milo")
            .times(1)
            .returning(|_| Ok(()));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let payload = models::pet::PetPayload {
            name: " Milo ".into(),
            species: "cat".into(),
            ..Default::default()
        };
        let pet = add_new_pet_to_user("owner-1", payload, &mock_repo)
            .await
            .unwrap();

        assert!(Uuid::parse_str(&pet.id).is_ok());
    }

    #[ntex::test]
    async fn test_update_pet_keeps_owner() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_pet().times(1).returning(|id| {
            Ok(Some(models::pet::Pet {
                id: id.to_string(),
                owner_id: "owner-1".into(),
                name: "Milo".into(),
                species: "cat".into(),
                ..Default::default()
            }))
        });
        mock_repo
            .expect_update_pet()
            .withf(|pet| pet.owner_id == "owner-1" && pet.breed.as_deref() == Some("siamese"))
            .times(1)
            .returning(|_| Ok(true));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let payload = models::pet::PetPayload {
            name: "Milo".into(),
            species: "cat".into(),
            breed: Some("siamese".into()),
            birth_date: None,
        };

        assert!(update_pet("pet-1", payload, &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_add_pet_requires_species() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let payload = models::pet::PetPayload {
            name: "Milo".into(),
            ..Default::default()
        };

        assert!(
            add_new_pet_to_user("owner-1", payload, &mock_repo)
                .await
                .is_err()
        );
    }
}
