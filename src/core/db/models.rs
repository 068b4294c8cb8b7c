//! Database models for the waitlist
//!
//! This module defines the database entity structs that map to PostgreSQL tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Name of the unique constraint on `signups.email`
pub const SIGNUPS_EMAIL_CONSTRAINT: &str = "signups_email_key";

/// A stored waitlist signup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Signup {
    pub id: Uuid,
    pub email: String,
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

impl Signup {
    /// Build a row that has not touched the database yet
    pub fn new(email: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            platform: platform.into(),
            created_at: Utc::now(),
        }
    }
}

/// Signup as returned by the API (no internal id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub email: String,
    pub platform: String,
}

impl From<Signup> for SignupResponse {
    fn from(signup: Signup) -> Self {
        Self {
            email: signup.email,
            platform: signup.platform,
        }
    }
}
