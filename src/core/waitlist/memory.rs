//! In-memory signup store
//!
//! Used when no database is configured. Uniqueness is enforced atomically by
//! the map's entry API, mirroring the database's unique constraint.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

use crate::core::db::models::Signup;
use crate::core::signup::{SignupError, SignupRequest, SignupStore};

/// Process-local signup table keyed by email
#[derive(Clone, Default)]
pub struct MemorySignupStore {
    signups: Arc<DashMap<String, Signup>>,
}

impl MemorySignupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a signup, failing if the email is already present
    pub fn create(&self, email: &str, platform: &str) -> Result<Signup, SignupError> {
        match self.signups.entry(email.to_string()) {
            Entry::Occupied(_) => Err(SignupError::UniqueViolation),
            Entry::Vacant(slot) => {
                let signup = Signup::new(email, platform);
                slot.insert(signup.clone());
                Ok(signup)
            }
        }
    }

    pub fn find_by_email(&self, email: &str) -> Option<Signup> {
        self.signups.get(email).map(|entry| entry.value().clone())
    }

    pub fn count(&self) -> usize {
        self.signups.len()
    }
}

impl SignupStore for MemorySignupStore {
    async fn insert_signup(&self, request: &SignupRequest) -> Result<(), SignupError> {
        self.create(&request.email, &request.platform).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_find() {
        let store = MemorySignupStore::new();
        let signup = store.create("a@b.com", "Slack").unwrap();

        assert_eq!(signup.platform, "Slack");
        assert_eq!(store.find_by_email("a@b.com").unwrap().id, signup.id);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_duplicate_is_unique_violation() {
        let store = MemorySignupStore::new();
        store.create("a@b.com", "Slack").unwrap();

        assert_eq!(
            store.create("a@b.com", "Discord"),
            Err(SignupError::UniqueViolation)
        );
        // First write wins
        assert_eq!(store.find_by_email("a@b.com").unwrap().platform, "Slack");
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_emails_compared_exactly() {
        let store = MemorySignupStore::new();
        store.create("a@b.com", "Slack").unwrap();
        assert!(store.create("A@b.com", "Slack").is_ok());
    }

    #[test]
    fn test_clones_share_storage() {
        let store = MemorySignupStore::new();
        let other = store.clone();
        store.create("a@b.com", "Slack").unwrap();
        assert!(other.find_by_email("a@b.com").is_some());
    }

    #[tokio::test]
    async fn test_store_trait_reports_duplicates() {
        let store = MemorySignupStore::new();
        let request = SignupRequest::new("a@b.com", "Teams");

        assert_eq!(store.insert_signup(&request).await, Ok(()));
        assert_eq!(
            store.insert_signup(&request).await,
            Err(SignupError::UniqueViolation)
        );
    }

    #[test]
    fn test_concurrent_inserts_admit_one() {
        let store = MemorySignupStore::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || store.create("race@b.com", "Slack").is_ok())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
        assert_eq!(store.count(), 1);
    }
}
