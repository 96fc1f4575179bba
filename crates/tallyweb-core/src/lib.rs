//! Core ledger processing and business logic
//!
//! - [`types`]: item numbers and user notices
//! - [`ledger`]: the 100-slot item ledger (totals or log variant)
//! - [`recorder`]: form validation and recording
//! - [`summary`]: read-only summary for display
//! - [`session`]: per-browser ledgers

pub mod error;
pub mod ledger;
pub mod recorder;
pub mod session;
pub mod summary;
pub mod types;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use ledger::{Ledger, Recorded};
pub use recorder::{record_submission, rejection_notice, TransactionForm};
pub use session::{Session, SessionStore};
pub use summary::{format_expression, LedgerSummary, SummaryRow};
pub use types::{ItemNumber, Notice, NoticeLevel};

// ==================== Tests ====================
