//! Route modules for the HTTP server
//!
//! - ledger: Transaction form, summary, session reset
//! - settings: Settings page
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: HTMX form endpoints
//! - page.rs: HTMX page rendering

pub mod ledger;
pub mod settings;
