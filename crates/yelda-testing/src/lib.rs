//! Test utilities for Yelda services.
//!
//! For `#[cfg(test)]` blocks and integration tests only.

pub mod auth;
