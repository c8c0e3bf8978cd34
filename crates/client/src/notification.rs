//! User-facing notifications produced by form submissions.

use serde::Serialize;

/// Severity of a notification, named after the style it is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Danger,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Danger => "danger",
        }
    }
}

/// A message to show the user after an action completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn danger(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: NotificationLevel::Danger,
        }
    }

    /// The notification shown after a contact was created.
    pub fn contact_created() -> Self {
        Self::success("Success!", "Contact created")
    }

    pub fn is_success(&self) -> bool {
        self.level == NotificationLevel::Success
    }
}
