//! Application services (use cases).
//!
//! These services drive the repository to implement the application's use
//! cases.

pub mod demo;
