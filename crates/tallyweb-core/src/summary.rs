//! Ledger summary for display

use serde::{Deserialize, Serialize};
use tallyweb_config::{CurrencyConfig, LedgerMode};
use tallyweb_utils::{format_amount, format_currency};

use crate::ledger::Ledger;
use crate::types::ItemNumber;

/// One touched item in the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub item: ItemNumber,
    pub total: f64,
    /// "50 + 50 - 25" style history (log variant only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    /// Number of recorded amounts (log variant only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<usize>,
}

impl SummaryRow {
    /// Total formatted as a whole currency amount
    pub fn display_total(&self, currency: &CurrencyConfig) -> String {
        format_currency(self.total, &currency.symbol, &currency.thousands_separator)
    }
}

/// Read-only view of a ledger: touched items sorted by number plus the grand total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub mode: LedgerMode,
    pub rows: Vec<SummaryRow>,
    pub grand_total: f64,
}

impl LedgerSummary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn display_grand_total(&self, currency: &CurrencyConfig) -> String {
        format_currency(self.grand_total, &currency.symbol, &currency.thousands_separator)
    }
}

impl Ledger {
    /// Summarize the ledger, skipping items nothing has been recorded against
    pub fn summary(&self) -> LedgerSummary {
        let rows = ItemNumber::all()
            .filter(|item| self.is_touched(*item))
            .map(|item| {
                let entries = self.item_entries(item);
                SummaryRow {
                    item,
                    total: self.item_total(item),
                    expression: entries.map(format_expression),
                    entries: entries.map(|e| e.len()),
                }
            })
            .collect();

        LedgerSummary {
            mode: self.mode(),
            rows,
            grand_total: self.grand_total(),
        }
    }
}

/// Render amounts as a signed-term expression, e.g. `50 + 50 - 25`.
///
/// The first term keeps its own sign; later terms are joined with ` + ` or ` - `.
pub fn format_expression(amounts: &[f64]) -> String {
    let mut expression = String::new();
    for (i, amount) in amounts.iter().enumerate() {
        if i == 0 {
            expression.push_str(&format_amount(*amount));
        } else if *amount < 0.0 {
            expression.push_str(" - ");
            expression.push_str(&format_amount(amount.abs()));
        } else {
            expression.push_str(" + ");
            expression.push_str(&format_amount(*amount));
        }
    }
    expression
}
