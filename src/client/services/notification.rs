use super::fail;
use crate::{client::error::ServiceError, client::http::HttpClient, models};

use models::notification::{Notification, NotificationPayload, UnreadCount, UserNotification};

const PATH: &str = "/notifications";

pub async fn get_my_notifications(
    http: &HttpClient,
) -> Result<Vec<UserNotification>, ServiceError> {
    http.get(&format!("{PATH}/my"))
        .await
        .map_err(fail("Failed to fetch notifications"))
}

pub async fn get_unread_count(http: &HttpClient) -> Result<i64, ServiceError> {
    http.get::<UnreadCount>(&format!("{PATH}/unread-count"))
        .await
        .map(|unread| unread.count)
        .map_err(fail("Failed to fetch unread count"))
}

pub async fn mark_as_read(http: &HttpClient, notification_id: &str) -> Result<(), ServiceError> {
    http.patch::<serde_json::Value>(&format!("{PATH}/mark-read/{notification_id}"))
        .await
        .map(|_| ())
        .map_err(fail("Failed to mark notification as read"))
}

/// Returns how many notifications changed state
pub async fn mark_all_as_read(http: &HttpClient) -> Result<u64, ServiceError> {
    http.patch::<serde_json::Value>(&format!("{PATH}/mark-all-read"))
        .await
        .map(|data| data["updated"].as_u64().unwrap_or_default())
        .map_err(fail("Failed to mark all notifications as read"))
}

/// Staff only
pub async fn create_notification(
    http: &HttpClient,
    payload: &NotificationPayload,
) -> Result<Notification, ServiceError> {
    http.post(PATH, payload)
        .await
        .map_err(fail("Failed to create notification"))
}

pub async fn delete_notification(
    http: &HttpClient,
    notification_id: &str,
) -> Result<(), ServiceError> {
    http.delete(&format!("{PATH}/{notification_id}"))
        .await
        .map_err(fail("Failed to delete notification"))
}
