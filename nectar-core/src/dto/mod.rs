//! Data Transfer Objects for the HTTP API
//!
//! This module contains request/response types exchanged between the
//! server and its clients (generator, CLI). DTOs are lightweight
//! representations of domain entities optimized for network transfer.

pub mod analytics;
pub mod article;
pub mod auth;
pub mod product;
pub mod settings;
