//! HTTP and persistence plumbing shared by Yelda services.

pub mod config;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod tracing;
