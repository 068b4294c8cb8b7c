//! Waitlist signup domain types
//!
//! Shared by the browser client and the server API: the request payload, the
//! messaging platform a visitor picks, the closed set of errors the remote
//! insert can produce, and the outcome the signup form reports.

use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::core::notification::Notification;

/// PostgreSQL `unique_violation` SQLSTATE, also used as the API error code
pub const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Platform label used when the visitor never touched the selector
pub const DEFAULT_PLATFORM: &str = "Slack";

/// One signup as sent over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    /// Blank or missing means the default platform
    #[serde(default)]
    pub platform: String,
}

impl SignupRequest {
    pub fn new(email: impl Into<String>, platform: impl AsRef<str>) -> Self {
        Self {
            email: email.into(),
            platform: normalize_platform(platform.as_ref()),
        }
    }
}

/// Trims the platform label, falling back to [`DEFAULT_PLATFORM`] when blank
pub fn normalize_platform(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        DEFAULT_PLATFORM.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Messaging platforms offered by the selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Slack,
    Discord,
    Teams,
    Telegram,
    /// Free-text name typed by the visitor
    Other(String),
}

impl Platform {
    /// Selector options as `(id, display name)` pairs, in display order
    pub const OPTIONS: [(&'static str, &'static str); 5] = [
        ("slack", "Slack"),
        ("discord", "Discord"),
        ("teams", "Teams"),
        ("telegram", "Telegram"),
        ("other", "Other"),
    ];

    /// Look up a selector option by id. `other` starts with an empty name.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "slack" => Some(Platform::Slack),
            "discord" => Some(Platform::Discord),
            "teams" => Some(Platform::Teams),
            "telegram" => Some(Platform::Telegram),
            "other" => Some(Platform::Other(String::new())),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Platform::Slack => "slack",
            Platform::Discord => "discord",
            Platform::Teams => "teams",
            Platform::Telegram => "telegram",
            Platform::Other(_) => "other",
        }
    }

    /// Name shown in the selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Slack => "Slack",
            Platform::Discord => "Discord",
            Platform::Teams => "Teams",
            Platform::Telegram => "Telegram",
            Platform::Other(_) => "Other",
        }
    }

    /// Label stored with the signup
    pub fn label(&self) -> String {
        match self {
            Platform::Other(name) if !name.trim().is_empty() => name.trim().to_string(),
            other => other.display_name().to_string(),
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Platform::Other(_))
    }
}

/// Error body returned by the waitlist API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub code: String,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Failure of the remote insert operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Email already exists")]
    UniqueViolation,

    #[error("{message} (code {code})")]
    Remote { code: String, message: String },

    #[error("{0}")]
    Unknown(String),
}

impl SignupError {
    /// Classify a loosely typed `{code, message}` error
    pub fn from_code(code: Option<&str>, message: impl Into<String>) -> Self {
        match code {
            Some(UNIQUE_VIOLATION_CODE) => SignupError::UniqueViolation,
            Some(code) => SignupError::Remote {
                code: code.to_string(),
                message: message.into(),
            },
            None => SignupError::Unknown(message.into()),
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            SignupError::UniqueViolation => Some(UNIQUE_VIOLATION_CODE),
            SignupError::Remote { code, .. } => Some(code),
            SignupError::Unknown(_) => None,
        }
    }
}

impl From<ApiErrorBody> for SignupError {
    fn from(body: ApiErrorBody) -> Self {
        SignupError::from_code(Some(&body.code), body.error)
    }
}

/// The remote datastore as seen by the signup form
pub trait SignupStore {
    fn insert_signup(
        &self,
        request: &SignupRequest,
    ) -> impl Future<Output = Result<(), SignupError>>;
}

/// Result of one completed submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    Success,
    DuplicateEmail,
    TransientFailure(String),
}

impl SignupOutcome {
    pub fn from_result(result: &Result<(), SignupError>) -> Self {
        match result {
            Ok(()) => SignupOutcome::Success,
            Err(SignupError::UniqueViolation) => SignupOutcome::DuplicateEmail,
            Err(err) => SignupOutcome::TransientFailure(err.to_string()),
        }
    }

    /// Toast to show for this outcome
    pub fn notification(&self) -> Notification {
        match self {
            SignupOutcome::Success => Notification::success(
                "Success",
                "Thanks for signing up! We'll keep you updated.",
            ),
            SignupOutcome::DuplicateEmail => {
                Notification::info("Already signed up!", "This email is already on our list.")
            }
            SignupOutcome::TransientFailure(_) => {
                Notification::error("Something went wrong", "Please try again later.")
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SignupOutcome::Success)
    }
}
