//! VMProxy Core
//!
//! Core types for the VMProxy build-queue function.
//!
//! This crate contains:
//! - Domain types: what the function accepts and returns (BuildParameters,
//!   PipelineSelection, QueuedBuildResult)
//! - DTOs: the wire shapes of the Azure DevOps Build REST API

pub mod domain;
pub mod dto;
