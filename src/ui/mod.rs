pub mod articles;
pub mod chat;
pub mod icon;
pub mod markdown;
pub mod notifications;
pub mod pages;
pub mod platform;
pub mod signup_form;

pub use icon::{Icon, icons};
pub use notifications::{NotificationManager, NotificationsContainer, provide_notification_manager};
pub use platform::{PlatformContext, PlatformSelector, provide_platform_context};
pub use signup_form::SignupForm;
