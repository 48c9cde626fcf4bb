//! Shared utilities for the client directory backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Common validation logic

pub mod validation;
