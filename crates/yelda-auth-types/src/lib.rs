//! Auth types shared across Yelda services.
//!
//! Provides the `Principal` extractor for gateway-injected identity headers.

pub mod principal;
