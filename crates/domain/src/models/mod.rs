//! Domain models for the client directory.

pub mod client;
pub mod phone;

pub use client::{Client, ClientSearchFilter, ClientSearchResult, ClientUpdate, ClientWithPhones, NewClient};
pub use phone::{NewPhone, Phone};
