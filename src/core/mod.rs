//! Core domain models and business logic for the waitlist signup

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod db;
mod notification;
mod signup;
#[cfg(test)]
mod tests;
pub mod validation;
#[cfg(feature = "ssr")]
pub mod waitlist;
mod workflow;

pub use notification::*;
pub use signup::*;
pub use validation::{INVALID_EMAIL_MESSAGE, ValidationError, is_valid_email, validate_email};
pub use workflow::*;
