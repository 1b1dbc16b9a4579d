//! Command handlers. Thin by convention: parse nothing here, print via
//! `services::output`, delegate the behavior to services.

pub mod runtime;
