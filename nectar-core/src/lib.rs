//! Nectar Core
//!
//! Core types and abstractions for the Nectar affiliate content platform.
//!
//! This crate contains:
//! - Domain types: Core business entities (Product, Article, etc.)
//! - DTOs: Data transfer objects for the HTTP API
//! - Text helpers: slug generation and affiliate link construction

pub mod domain;
pub mod dto;
pub mod text;
