//! Basic types for the core ledger module

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ErrorSeverity};

/// Item slot number, always within 0-99
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ItemNumber(u8);

impl ItemNumber {
    /// Lowest item number
    pub const MIN: ItemNumber = ItemNumber(0);
    /// Highest item number
    pub const MAX: ItemNumber = ItemNumber(99);
    /// Number of item slots
    pub const COUNT: usize = 100;

    /// Create an item number, rejecting anything outside 0-99
    pub fn new(value: i64) -> CoreResult<Self> {
        if (Self::MIN.0 as i64..=Self::MAX.0 as i64).contains(&value) {
            Ok(ItemNumber(value as u8))
        } else {
            Err(CoreError::ItemOutOfRange { item: value })
        }
    }

    /// Iterate over every item number in ascending order
    pub fn all() -> impl Iterator<Item = ItemNumber> {
        (Self::MIN.0..=Self::MAX.0).map(ItemNumber)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for ItemNumber {
    type Error = CoreError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        ItemNumber::new(value)
    }
}

impl From<ItemNumber> for i64 {
    fn from(item: ItemNumber) -> Self {
        item.0 as i64
    }
}

impl std::str::FromStr for ItemNumber {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = match trimmed.parse::<i64>() {
            Ok(v) => v,
            // Spinners may post "5.0"
            Err(_) => match trimmed.parse::<f64>() {
                Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => f as i64,
                _ => {
                    return Err(CoreError::InvalidItem {
                        input: s.to_string(),
                    })
                }
            },
        };
        ItemNumber::new(value)
    }
}

impl std::fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a notice is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Amount added
    Success,
    /// Amount deducted
    Info,
    /// Submission ignored
    Warning,
    /// Submission rejected
    Error,
}

impl From<ErrorSeverity> for NoticeLevel {
    fn from(severity: ErrorSeverity) -> Self {
        match severity {
            ErrorSeverity::Warning => NoticeLevel::Warning,
            ErrorSeverity::Error => NoticeLevel::Error,
        }
    }
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeLevel::Success => write!(f, "success"),
            NoticeLevel::Info => write!(f, "info"),
            NoticeLevel::Warning => write!(f, "warning"),
            NoticeLevel::Error => write!(f, "error"),
        }
    }
}

/// User-visible outcome of a form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_number_bounds() {
        assert_eq!(ItemNumber::new(0).unwrap(), ItemNumber::MIN);
        assert_eq!(ItemNumber::new(99).unwrap(), ItemNumber::MAX);
        assert_eq!(ItemNumber::new(100), Err(CoreError::ItemOutOfRange { item: 100 }));
        assert_eq!(ItemNumber::new(-1), Err(CoreError::ItemOutOfRange { item: -1 }));
    }

    #[test]
    fn test_item_number_all() {
        let all: Vec<ItemNumber> = ItemNumber::all().collect();
        assert_eq!(all.len(), ItemNumber::COUNT);
        assert_eq!(all[0], ItemNumber::MIN);
        assert_eq!(all[99], ItemNumber::MAX);
    }

    #[test]
    fn test_item_number_from_str() {
        assert_eq!(" 5 ".parse::<ItemNumber>().unwrap().value(), 5);
        assert_eq!("7.0".parse::<ItemNumber>().unwrap().value(), 7);
        assert_eq!("120".parse::<ItemNumber>(), Err(CoreError::ItemOutOfRange { item: 120 }));
        assert!(matches!("5.5".parse::<ItemNumber>(), Err(CoreError::InvalidItem { .. })));
        assert!(matches!("abc".parse::<ItemNumber>(), Err(CoreError::InvalidItem { .. })));
        assert!(matches!("1e20".parse::<ItemNumber>(), Err(CoreError::InvalidItem { .. })));
        assert!(matches!("".parse::<ItemNumber>(), Err(CoreError::InvalidItem { .. })));
    }

    #[test]
    fn test_item_number_serde() {
        let item: ItemNumber = serde_json::from_str("42").unwrap();
        assert_eq!(item.value(), 42);
        assert_eq!(serde_json::to_string(&item).unwrap(), "42");
        assert!(serde_json::from_str::<ItemNumber>("100").is_err());
    }

    #[test]
    fn test_notice_level_from_severity() {
        assert_eq!(NoticeLevel::from(ErrorSeverity::Warning), NoticeLevel::Warning);
        assert_eq!(NoticeLevel::from(ErrorSeverity::Error), NoticeLevel::Error);
        assert_eq!(NoticeLevel::Success.to_string(), "success");
    }
}
