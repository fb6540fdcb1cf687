//! Shared utilities for the CMS template backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Alias and file-name sanitization
//! - Deterministic key derivation
//! - Path and extension verification
//! - Common validation logic

pub mod alias;
pub mod keys;
pub mod paths;
pub mod validation;
