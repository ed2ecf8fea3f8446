use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Default, Deserialize, Serialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    #[default]
    #[display("SYSTEM")]
    System,
    #[display("BOOKING")]
    Booking,
    #[display("REMINDER")]
    Reminder,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: DateTime<Utc>,
}

/// A notification as seen by one recipient, with its read state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserNotification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub notification_type: NotificationType,
    pub user_ids: Vec<String>,
}

impl NotificationPayload {
    pub fn fields_are_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.message.trim().is_empty() && !self.user_ids.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct UnreadCount {
    pub count: i64,
}
