//! Service Module
//!
//! Business logic layer for the server.
//! Services orchestrate between repositories and contain domain logic.

pub mod analytics;
pub mod article;
pub mod auth;
pub mod product;
pub mod settings;

// Re-export for convenience
pub use analytics as analytics_service;
pub use article as article_service;
pub use auth as auth_service;
pub use product as product_service;
pub use settings as settings_service;
