//! Adapters: the command line on the inbound side, SQLite on the outbound side.

pub mod inbound;
pub mod outbound;
