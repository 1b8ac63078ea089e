//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! domain logic: configuration, logging, and database bootstrap.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Opens the database and prepares its schema
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
