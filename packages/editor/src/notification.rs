//! Transient user-facing messages.

use serde::Serialize;

pub const COPY_SUCCESS: &str = "Template copied to clipboard!";
pub const COPY_FAILURE: &str = "Failed to copy template. Please try again.";

/// How long a notification stays on screen
pub const VISIBLE_MS: u32 = 3000;

/// Slide in/out duration
pub const TRANSITION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub visible_ms: u32,
    pub transition_ms: u32,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            visible_ms: VISIBLE_MS,
            transition_ms: TRANSITION_MS,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
