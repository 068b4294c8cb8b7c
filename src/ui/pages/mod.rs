//! Application pages module
//!
//! - Landing page (home) with the waitlist forms
//! - Article pages
//! - 404 page

mod article;
mod landing;
mod not_found;

pub use article::ArticlePage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
