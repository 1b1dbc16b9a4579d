//! Service layer containing page behavior and side-effect helpers.
//!
//! ## Service map
//! - `cart.rs` — cart accumulation + acknowledgment + audit snapshot.
//! - `reviews.rs` — review submission flow against the page document.
//! - `notify.rs` — pending-notice queue with explicit acknowledgment.
//! - `catalog.rs` — catalog browsing and product lookup.
//! - `session.rs` — event grammar and per-event dispatch.
//! - `settings.rs` — optional settings.toml loading.
//! - `storage.rs` — config paths + audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod cart;
pub mod catalog;
pub mod notify;
pub mod output;
pub mod reviews;
pub mod session;
pub mod settings;
pub mod storage;
