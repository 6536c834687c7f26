//! Common types and data structures

use crate::constants::{EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use serde::{Deserialize, Serialize};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    // Aliases accept older files that use Chinese type labels
    #[serde(rename = "income", alias = "收入")]
    Income,
    #[serde(rename = "expense", alias = "支出")]
    Expense,
}

impl RecordType {
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            RecordType::Income => INCOME_CATEGORIES,
            RecordType::Expense => EXPENSE_CATEGORIES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordType::Income => "Income",
            RecordType::Expense => "Expense",
        }
    }

    /// Sign shown in front of amounts in the list
    pub fn sign(self) -> char {
        match self {
            RecordType::Income => '+',
            RecordType::Expense => '-',
        }
    }
}

/// A single income/expense entry as stored in the records file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: RecordType,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub note: String,
}

impl Record {
    /// `YYYY-MM-DD` part of the timestamp
    pub fn day(&self) -> &str {
        self.date.get(..10).unwrap_or(&self.date)
    }

    /// `YYYY-MM` part of the timestamp
    pub fn month(&self) -> &str {
        self.date.get(..7).unwrap_or(&self.date)
    }

    pub fn is_income(&self) -> bool {
        self.kind == RecordType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == RecordType::Expense
    }
}

/// Chart tab in the middle panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMode {
    #[default]
    Breakdown,
    DailyTrend,
    Compare,
}

impl ChartMode {
    pub const ALL: [ChartMode; 3] = [ChartMode::Breakdown, ChartMode::DailyTrend, ChartMode::Compare];

    pub fn label(self) -> &'static str {
        match self {
            ChartMode::Breakdown => "Breakdown",
            ChartMode::DailyTrend => "Daily Trend",
            ChartMode::Compare => "In vs Out",
        }
    }
}

/// Current month spending measured against the monthly budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    Unset,
    Ok { spent: f64, budget: f64 },
    Near { spent: f64, budget: f64 },
    Over { spent: f64, budget: f64 },
}

impl BudgetStatus {
    /// Spent fraction of the budget, `None` when no budget is set
    pub fn ratio(&self) -> Option<f64> {
        match *self {
            BudgetStatus::Unset => None,
            BudgetStatus::Ok { spent, budget }
            | BudgetStatus::Near { spent, budget }
            | BudgetStatus::Over { spent, budget } => Some(spent / budget),
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, BudgetStatus::Near { .. } | BudgetStatus::Over { .. })
    }
}

/// Aggregate view over the records, optionally narrowed by a search filter
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub income: f64,
    pub expense: f64,
    /// Expense total per category, in order of first appearance
    pub by_category: Vec<(String, f64)>,
    /// Ledger positions of the matching records
    pub indices: Vec<usize>,
}

impl Stats {
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_type_accepts_legacy_labels() {
        let json = r#"{"date":"2024-05-03 12:30","type":"支出","amount":3.5,"category":"Food"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, RecordType::Expense);
        assert_eq!(record.note, "");

        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains(r#""type":"expense""#));
    }

    #[test]
    fn test_record_day_and_month() {
        let record = Record {
            date: "2024-05-03 12:30".to_string(),
            kind: RecordType::Income,
            amount: 10.0,
            category: "Reward".to_string(),
            note: String::new(),
        };
        assert_eq!(record.day(), "2024-05-03");
        assert_eq!(record.month(), "2024-05");
    }

    #[test]
    fn test_budget_status_ratio() {
        assert_eq!(BudgetStatus::Unset.ratio(), None);
        let near = BudgetStatus::Near { spent: 90.0, budget: 100.0 };
        assert_eq!(near.ratio(), Some(0.9));
        assert!(near.is_warning());
        assert!(!BudgetStatus::Ok { spent: 1.0, budget: 100.0 }.is_warning());
    }
}
