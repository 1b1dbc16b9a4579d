//! Domain types shared across services and command handlers.

pub mod models;
