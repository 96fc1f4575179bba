//! Transaction recorder - turns a form submission into a ledger change
//! and a one-line notice for the user.

use crate::error::{CoreError, CoreResult};
use crate::ledger::Ledger;
use crate::types::{ItemNumber, Notice, NoticeLevel};

/// Raw form fields as submitted by the browser
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionForm {
    pub item_number: String,
    pub amount: String,
}

impl TransactionForm {
    pub fn new(item_number: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            item_number: item_number.into(),
            amount: amount.into(),
        }
    }

    /// Validate the fields.
    ///
    /// The amount is checked before the item number, so a zero amount is
    /// reported as such even when the item is also invalid.
    pub fn parse(&self) -> CoreResult<(ItemNumber, f64)> {
        let amount = parse_amount(&self.amount)?;
        if amount == 0.0 {
            return Err(CoreError::ZeroAmount);
        }
        let item = self.item_number.parse::<ItemNumber>()?;
        Ok((item, amount))
    }
}

fn parse_amount(input: &str) -> CoreResult<f64> {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CoreError::InvalidNumber {
            input: input.to_string(),
        }),
    }
}

/// Record a submission and describe the outcome.
///
/// Never fails: rejected submissions leave the ledger unchanged and come back
/// as a warning or error notice.
pub fn record_submission(ledger: &mut Ledger, form: &TransactionForm) -> Notice {
    let result = form
        .parse()
        .and_then(|(item, amount)| ledger.record(item, amount));

    match result {
        Ok(recorded) => {
            log::debug!(
                target: "tallyweb::ledger",
                "Recorded item={} amount={} total={}",
                recorded.item,
                recorded.amount,
                recorded.total
            );
            if recorded.amount >= 0.0 {
                Notice::new(
                    NoticeLevel::Success,
                    format!("紀錄更新成功: 商品 {}, 金額變動 +{:.0}", recorded.item, recorded.amount),
                )
            } else {
                Notice::new(
                    NoticeLevel::Info,
                    format!("紀錄修正成功: 商品 {}, 金額變動 {:.0} (已扣除)", recorded.item, recorded.amount),
                )
            }
        }
        Err(err) => {
            log::warn!(target: "tallyweb::ledger", "Rejected submission {}", err.to_details());
            rejection_notice(&err)
        }
    }
}

/// Notice shown for a rejected submission
pub fn rejection_notice(err: &CoreError) -> Notice {
    let message = match err {
        CoreError::ZeroAmount => "請輸入非零金額。".to_string(),
        CoreError::ItemOutOfRange { item } => format!("商品編號 {} 超出範圍 (0-99)。", item),
        CoreError::InvalidNumber { .. } => "金額輸入錯誤，請輸入有效的數字。".to_string(),
        CoreError::InvalidItem { .. } => "商品編號輸入錯誤，請輸入 0 到 99 的整數。".to_string(),
    };
    Notice::new(NoticeLevel::from(err.severity()), message)
}
