//! Core domain types
//!
//! This module contains the core domain structures used across Nectar services.
//! These types represent the fundamental business entities and are shared between
//! the server (for persistence) and the generator/CLI (through the API).

pub mod analytics;
pub mod article;
pub mod product;
pub mod settings;
pub mod user;
