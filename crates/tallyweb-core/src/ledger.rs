//! Per-session item ledger
//!
//! Both variants pre-populate all 100 item slots when created. Slots are
//! only ever changed by [`Ledger::record`].

use std::collections::BTreeMap;
use tallyweb_config::LedgerMode;

use crate::error::{CoreError, CoreResult};
use crate::types::ItemNumber;

/// Item ledger in one of the two supported variants
#[derive(Debug, Clone, PartialEq)]
pub enum Ledger {
    /// Running total per item
    Totals(BTreeMap<ItemNumber, f64>),
    /// Ordered list of amounts per item
    Log(BTreeMap<ItemNumber, Vec<f64>>),
}

/// A transaction that made it into the ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recorded {
    pub item: ItemNumber,
    pub amount: f64,
    /// Item total after the transaction
    pub total: f64,
}

impl Ledger {
    /// Create an empty ledger with every item slot present
    pub fn new(mode: LedgerMode) -> Self {
        match mode {
            LedgerMode::Totals => Ledger::Totals(ItemNumber::all().map(|i| (i, 0.0)).collect()),
            LedgerMode::Log => Ledger::Log(ItemNumber::all().map(|i| (i, Vec::new())).collect()),
        }
    }

    pub fn mode(&self) -> LedgerMode {
        match self {
            Ledger::Totals(_) => LedgerMode::Totals,
            Ledger::Log(_) => LedgerMode::Log,
        }
    }

    /// Add a signed amount to an item.
    ///
    /// Zero and non-finite amounts are rejected and leave the ledger untouched,
    /// as is any amount that would push the item total or the grand total
    /// past what an `f64` can hold.
    pub fn record(&mut self, item: ItemNumber, amount: f64) -> CoreResult<Recorded> {
        if !amount.is_finite() {
            return Err(CoreError::InvalidNumber {
                input: amount.to_string(),
            });
        }
        if amount == 0.0 {
            return Err(CoreError::ZeroAmount);
        }

        let total = self.item_total(item) + amount;
        let grand_total: f64 = ItemNumber::all()
            .map(|i| if i == item { total } else { self.item_total(i) })
            .sum();
        if !total.is_finite() || !grand_total.is_finite() {
            return Err(CoreError::InvalidNumber {
                input: amount.to_string(),
            });
        }

        match self {
            Ledger::Totals(totals) => *totals.entry(item).or_insert(0.0) += amount,
            Ledger::Log(logs) => logs.entry(item).or_default().push(amount),
        }

        Ok(Recorded {
            item,
            amount,
            total: self.item_total(item),
        })
    }

    /// Current total for an item
    pub fn item_total(&self, item: ItemNumber) -> f64 {
        match self {
            Ledger::Totals(totals) => totals.get(&item).copied().unwrap_or(0.0),
            Ledger::Log(logs) => logs.get(&item).map(|l| l.iter().sum()).unwrap_or(0.0),
        }
    }

    /// Amounts recorded for an item, oldest first (log variant only)
    pub fn item_entries(&self, item: ItemNumber) -> Option<&[f64]> {
        match self {
            Ledger::Totals(_) => None,
            Ledger::Log(logs) => logs.get(&item).map(|l| l.as_slice()),
        }
    }

    /// Whether anything visible has been recorded against an item
    pub fn is_touched(&self, item: ItemNumber) -> bool {
        match self {
            Ledger::Totals(totals) => totals.get(&item).map_or(false, |t| *t != 0.0),
            Ledger::Log(logs) => logs.get(&item).map_or(false, |l| !l.is_empty()),
        }
    }

    /// Sum of all item totals
    pub fn grand_total(&self) -> f64 {
        ItemNumber::all().map(|i| self.item_total(i)).sum()
    }

    /// Number of item slots held (always 100)
    pub fn slot_count(&self) -> usize {
        match self {
            Ledger::Totals(totals) => totals.len(),
            Ledger::Log(logs) => logs.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(n: i64) -> ItemNumber {
        ItemNumber::new(n).unwrap()
    }

    #[test]
    fn test_new_ledger_prepopulated() {
        for mode in [LedgerMode::Totals, LedgerMode::Log] {
            let ledger = Ledger::new(mode);
            assert_eq!(ledger.mode(), mode);
            assert_eq!(ledger.slot_count(), ItemNumber::COUNT);
            assert_eq!(ledger.grand_total(), 0.0);
            assert!(ItemNumber::all().all(|i| !ledger.is_touched(i)));
        }
    }

    #[test]
    fn test_totals_accumulate() {
        let mut ledger = Ledger::new(LedgerMode::Totals);
        ledger.record(item(5), 50.0).unwrap();
        let recorded = ledger.record(item(5), -25.0).unwrap();
        assert_eq!(recorded.total, 25.0);
        assert_eq!(ledger.item_total(item(5)), 25.0);
        assert!(ledger.item_entries(item(5)).is_none());
    }

    #[test]
    fn test_log_appends_in_order() {
        let mut ledger = Ledger::new(LedgerMode::Log);
        ledger.record(item(5), 50.0).unwrap();
        ledger.record(item(5), 50.0).unwrap();
        ledger.record(item(5), -25.0).unwrap();
        assert_eq!(ledger.item_entries(item(5)), Some(&[50.0, 50.0, -25.0][..]));
        assert_eq!(ledger.item_total(item(5)), 75.0);
    }

    #[test]
    fn test_zero_amount_is_noop() {
        for mode in [LedgerMode::Totals, LedgerMode::Log] {
            let mut ledger = Ledger::new(mode);
            let before = ledger.clone();
            assert_eq!(ledger.record(item(3), 0.0), Err(CoreError::ZeroAmount));
            assert_eq!(ledger.record(item(3), -0.0), Err(CoreError::ZeroAmount));
            assert_eq!(ledger, before);
        }
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let mut ledger = Ledger::new(LedgerMode::Totals);
        assert!(matches!(ledger.record(item(1), f64::NAN), Err(CoreError::InvalidNumber { .. })));
        assert!(matches!(ledger.record(item(1), f64::INFINITY), Err(CoreError::InvalidNumber { .. })));
        assert_eq!(ledger.grand_total(), 0.0);
    }

    #[test]
    fn test_overflowing_total_rejected() {
        for mode in [LedgerMode::Totals, LedgerMode::Log] {
            let mut ledger = Ledger::new(mode);
            ledger.record(item(1), 1e308).unwrap();
            let before = ledger.clone();
            assert!(matches!(ledger.record(item(1), 1e308), Err(CoreError::InvalidNumber { .. })));
            assert_eq!(ledger, before);

            ledger.record(item(2), -1e308).unwrap();
            assert!(matches!(ledger.record(item(2), -1e308), Err(CoreError::InvalidNumber { .. })));
            assert_eq!(ledger.item_total(item(1)), 1e308);
            assert_eq!(ledger.item_total(item(2)), -1e308);
            assert!(ledger.grand_total().is_finite());
        }
    }

    #[test]
    fn test_overflowing_grand_total_rejected() {
        let mut ledger = Ledger::new(LedgerMode::Totals);
        ledger.record(item(1), 1.5e308).unwrap();
        ledger.record(item(3), -1.5e308).unwrap();
        // item 1 + item 2 overflows before item 3 brings the sum back down
        assert!(matches!(ledger.record(item(2), 1.5e308), Err(CoreError::InvalidNumber { .. })));
        assert_eq!(ledger.item_total(item(2)), 0.0);
        assert_eq!(ledger.grand_total(), 0.0);
    }

    #[test]
    fn test_total_equals_sum_of_recorded_amounts() {
        let amounts = [10.0, -3.0, 7.5, 100.0, -0.5];
        for mode in [LedgerMode::Totals, LedgerMode::Log] {
            let mut ledger = Ledger::new(mode);
            for n in [0, 42, 99] {
                for a in amounts {
                    ledger.record(item(n), a).unwrap();
                }
                assert_eq!(ledger.item_total(item(n)), amounts.iter().sum::<f64>());
            }
        }
    }

    #[test]
    fn test_grand_total_is_sum_of_items() {
        let mut ledger = Ledger::new(LedgerMode::Log);
        ledger.record(item(1), 10.0).unwrap();
        ledger.record(item(2), 20.0).unwrap();
        ledger.record(item(2), -5.0).unwrap();
        ledger.record(item(99), 1.0).unwrap();
        let per_item: f64 = ItemNumber::all().map(|i| ledger.item_total(i)).sum();
        assert_eq!(ledger.grand_total(), per_item);
        assert_eq!(ledger.grand_total(), 26.0);
    }

    #[test]
    fn test_cancelled_item_touched_only_in_log() {
        let mut totals = Ledger::new(LedgerMode::Totals);
        totals.record(item(8), 40.0).unwrap();
        totals.record(item(8), -40.0).unwrap();
        assert!(!totals.is_touched(item(8)));

        let mut log = Ledger::new(LedgerMode::Log);
        log.record(item(8), 40.0).unwrap();
        log.record(item(8), -40.0).unwrap();
        assert!(log.is_touched(item(8)));
        assert_eq!(log.item_total(item(8)), 0.0);
    }
}
