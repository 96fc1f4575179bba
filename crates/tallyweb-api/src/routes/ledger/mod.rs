//! Ledger routes - Transaction form, running totals, per-item log
//!
//! Features:
//! - Record a signed amount against an item (0-99)
//! - Summary of touched items with grand total
//! - Reset the current browser session
//!
//! Structure:
//! - api.rs: HTMX form endpoints
//! - page.rs: Full page rendering and shared fragments

pub mod api;
pub mod page;

pub use api::{htmx_ledger_reset, htmx_ledger_summary, htmx_transaction_store};
pub use page::page_ledger;
