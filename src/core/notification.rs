//! Toast notification types and the sinks the signup workflow writes to

use serde::{Deserialize, Serialize};

/// Visual tone of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A single toast: a title plus a one-line description
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
            auto_dismiss_ms: Some(4000),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            description: description.into(),
            auto_dismiss_ms: Some(4000),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
            // Failures stay until dismissed
            auto_dismiss_ms: None,
        }
    }
}

/// Fire-and-forget destination for user-visible notifications
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Diagnostic destination for unexpected failures. Never user-visible.
pub trait ErrorLog {
    fn log_error(&self, context: &str, error: &dyn std::error::Error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_auto_dismisses() {
        let n = Notification::success("Success", "done");
        assert_eq!(n.kind, NotificationKind::Success);
        assert!(n.auto_dismiss_ms.is_some());
    }

    #[test]
    fn test_error_is_sticky() {
        let n = Notification::error("Something went wrong", "Please try again later.");
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.auto_dismiss_ms, None);
        assert_eq!(n.description, "Please try again later.");
    }

    #[test]
    fn test_info_fields() {
        let n = Notification::info("Already signed up!", "This email is already on our list.");
        assert_eq!(n.kind, NotificationKind::Info);
        assert_eq!(n.title, "Already signed up!");
    }
}
