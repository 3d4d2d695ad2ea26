//! Data Transfer Objects for the Azure DevOps Build REST API
//!
//! Wire shapes exchanged with the CI server. Field names follow the REST
//! API's camelCase convention; only the fields the function reads or sends
//! are modeled, everything else in a response is ignored.

pub mod build;
pub mod connection;
pub mod definition;
