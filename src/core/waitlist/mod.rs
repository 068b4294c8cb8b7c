//! Waitlist server side
//!
//! - `api` - REST endpoints consumed by the signup form
//! - `storage` - PostgreSQL or in-memory backend chosen at startup
//! - `memory` - the in-memory backend

pub mod api;
pub mod memory;
pub mod storage;

pub use api::{WaitlistApiError, WaitlistApiState, waitlist_api_router};
pub use memory::MemorySignupStore;
pub use storage::WaitlistStorage;
