//! SQLite persistence adapters.
//!
//! Provides the database context (connection and schema lifecycle) and the
//! school repository using Diesel ORM.

pub mod context;
pub mod database;
pub mod repository;

pub use context::SchoolContext;
pub use repository::SchoolRepository;
