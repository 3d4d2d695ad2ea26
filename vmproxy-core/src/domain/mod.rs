//! Core domain types
//!
//! These types describe one build-queue request as the function sees it:
//! the parameters taken from the query string, the pipeline they select and
//! the result handed back to the caller. None of them outlive a request.

pub mod build;
pub mod pipeline;
