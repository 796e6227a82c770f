//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate entity operations and repository calls into use-case APIs.
//! - Keep CLI/transport layers decoupled from storage details.

pub mod catalog_service;
