//! Persistence layer for the client directory backend.
//!
//! This crate contains:
//! - Database connection management
//! - The repository error taxonomy
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;
