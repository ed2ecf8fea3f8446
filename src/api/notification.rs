//! # Notification API Module
//!
//! Notifications are written once and fanned out to their recipients; each
//! recipient keeps its own read state.

use crate::{metric, models, repo};
use chrono::Utc;
use uuid::Uuid;

use super::{invalid, not_found};

pub async fn list_notifications(
    pagination: &models::pagination::Pagination,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::envelope::Page<models::notification::Notification>> {
    repo.list_notifications(pagination).await
}

pub async fn get_notification(
    notification_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::notification::Notification> {
    repo.get_notification(notification_id)
        .await?
        .ok_or_else(|| not_found("notification"))
}

/// Notifications addressed to the user, newest first, with read state
pub async fn get_my_notifications(
    user: &models::user_app::AuthUser,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<models::notification::UserNotification>> {
    repo.get_user_notifications(&user.id).await
}

pub async fn get_unread_count(
    user: &models::user_app::AuthUser,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::notification::UnreadCount> {
    Ok(models::notification::UnreadCount {
        count: repo.count_unread_notifications(&user.id).await?,
    })
}

/// Marks one of the user's notifications as read. Marking it again keeps the
/// first `read_at`.
pub async fn mark_as_read(
    user: &models::user_app::AuthUser,
    notification_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<()> {
    if !repo
        .mark_notification_read(&user.id, notification_id)
        .await?
    {
        return Err(not_found("notification"));
    }
    metric::incr_notification_statds("mark_read");

    Ok(())
}

/// Returns how many notifications switched to read
pub async fn mark_all_as_read(
    user: &models::user_app::AuthUser,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<u64> {
    let updated = repo.mark_all_notifications_read(&user.id).await?;
    metric::incr_notification_statds("mark_all_read");

    Ok(updated)
}

/// Creates a notification and links it to every recipient in one
/// transaction.
///
/// # Errors
/// Returns an error if:
/// - Title, message or recipients are missing (`InputError`)
/// - The insert fails, e.g. an unknown recipient id
pub async fn create_notification(
    payload: models::notification::NotificationPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::notification::Notification> {
    let _span = logfire::span!("create_notification").entered();

    if !payload.fields_are_valid() {
        return Err(invalid("title, message and at least one recipient are required"));
    }

    let mut user_ids = payload.user_ids;
    user_ids.sort();
    user_ids.dedup();

    let notification = models::notification::Notification {
        id: Uuid::new_v4().to_string(),
        title: ammonia::clean(payload.title.trim()),
        message: ammonia::clean(payload.message.trim()),
        notification_type: payload.notification_type,
        created_at: Utc::now(),
    };

    let recipients = user_ids.len();
    repo.insert_notification(&notification, user_ids).await?;
    metric::incr_notification_statds("created");
    tracing::info!(
        "notification {} sent to {} recipient(s)",
        notification.id,
        recipients
    );

    Ok(notification)
}

pub async fn update_notification(
    notification_id: &str,
    payload: models::notification::NotificationPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::notification::Notification> {
    if payload.title.trim().is_empty() || payload.message.trim().is_empty() {
        return Err(invalid("title and message are required"));
    }

    let current = get_notification(notification_id, repo).await?;
    let notification = models::notification::Notification {
        title: ammonia::clean(payload.title.trim()),
        message: ammonia::clean(payload.message.trim()),
        notification_type: payload.notification_type,
        ..current
    };

    if !repo.update_notification(&notification).await? {
        return Err(not_found("notification"));
    }

    Ok(notification)
}

pub async fn delete_notification(
    notification_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<()> {
    if !repo.delete_notification(notification_id).await? {
        return Err(not_found("notification"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;

    fn create_test_user() -> models::user_app::AuthUser {
        models::user_app::AuthUser {
            id: "user-1".into(),
            email: "user@example.com".into(),
            role: models::user_app::AccountRole::Customer,
        }
    }

    #[ntex::test]
    async fn test_create_notification_dedups_recipients() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_insert_notification()
            .withf(|n, user_ids| n.title == "Reminder" && user_ids.len() == 2)
            .times(1)
            .returning(|_, _| Ok(()));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let payload = models::notification::NotificationPayload {
            title: "Reminder".into(),
            message: "Vaccine due".into(),
            notification_type: models::notification::NotificationType::Reminder,
            user_ids: vec!["u-2".into(), "u-1".into(), "u-2".into()],
        };

        assert!(create_notification(payload, &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_create_notification_requires_recipients() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let payload = models::notification::NotificationPayload {
            title: "Reminder".into(),
            message: "Vaccine due".into(),
            ..Default::default()
        };

        assert!(create_notification(payload, &mock_repo).await.is_err());
    }

    #[ntex::test]
    async fn test_unread_count_for_user() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_count_unread_notifications()
            .withf(|user_id| user_id == "user-1")
            .times(1)
            .returning(|_| Ok(3));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let unread = get_unread_count(&create_test_user(), &mock_repo)
            .await
            .unwrap();

        assert_eq!(unread.count, 3);
    }

    #[ntex::test]
    async fn test_mark_as_read_unknown_notification() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_mark_notification_read()
            .times(1)
            .returning(|_, _| Ok(false));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        assert!(
            mark_as_read(&create_test_user(), "missing", &mock_repo)
                .await
                .is_err()
        );
    }
}
