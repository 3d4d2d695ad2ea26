//! Service Module
//!
//! Business logic for one build-queue request.
//! Both services are stateless functions over the `BuildServer` and
//! `BuildSession` capability traits.

pub mod build;
pub mod connection;

// Re-export for convenience
pub use build as build_service;
pub use connection as connection_service;
