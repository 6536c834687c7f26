//! Aggregations feeding the summary cards and charts

use crate::types::{Record, Stats};
use std::collections::BTreeMap;

/// One slice of the expense breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Share of total expense in percent
    pub percent: f64,
}

/// Income and expense totals for one day
#[derive(Debug, Clone, PartialEq)]
pub struct DayTotals {
    pub day: String,
    pub income: f64,
    pub expense: f64,
}

/// Totals over the records that match `filter` (case-insensitive substring of
/// category or note). An empty filter matches everything.
pub fn summarize<'a, I>(records: I, filter: &str) -> Stats
where
    I: IntoIterator<Item = (usize, &'a Record)>,
{
    let needle = filter.trim().to_lowercase();
    let mut stats = Stats::default();

    for (idx, r) in records {
        if !needle.is_empty() && !matches_query(r, &needle) {
            continue;
        }
        if r.is_income() {
            stats.income += r.amount;
        } else {
            stats.expense += r.amount;
            match stats.by_category.iter_mut().find(|(c, _)| *c == r.category) {
                Some((_, total)) => *total += r.amount,
                None => stats.by_category.push((r.category.clone(), r.amount)),
            }
        }
        stats.indices.push(idx);
    }
    stats
}

/// `needle` must already be lowercase
pub fn matches_query(record: &Record, needle: &str) -> bool {
    record.category.to_lowercase().contains(needle) || record.note.to_lowercase().contains(needle)
}

pub fn category_breakdown(by_category: &[(String, f64)]) -> Vec<CategoryShare> {
    let total: f64 = by_category.iter().map(|(_, v)| v).sum();
    by_category
        .iter()
        .map(|(category, amount)| CategoryShare {
            category: category.clone(),
            amount: *amount,
            percent: if total > 0.0 { amount / total * 100.0 } else { 0.0 },
        })
        .collect()
}

/// Expense per day for the last `days` days that have any expense, oldest first
pub fn daily_expense(records: &[Record], days: usize) -> Vec<(String, f64)> {
    let mut daily: BTreeMap<&str, f64> = BTreeMap::new();
    for r in records.iter().filter(|r| r.is_expense()) {
        *daily.entry(r.day()).or_insert(0.0) += r.amount;
    }
    let skip = daily.len().saturating_sub(days);
    daily
        .into_iter()
        .skip(skip)
        .map(|(d, v)| (d.to_string(), v))
        .collect()
}

/// Income vs expense for the last `days` days that have any record, oldest first
pub fn daily_compare(records: &[Record], days: usize) -> Vec<DayTotals> {
    let mut daily: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for r in records {
        let entry = daily.entry(r.day()).or_insert((0.0, 0.0));
        if r.is_income() {
            entry.0 += r.amount;
        } else {
            entry.1 += r.amount;
        }
    }
    let skip = daily.len().saturating_sub(days);
    daily
        .into_iter()
        .skip(skip)
        .map(|(day, (income, expense))| DayTotals {
            day: day.to_string(),
            income,
            expense,
        })
        .collect()
}

/// Total expense for a `YYYY-MM` month
pub fn month_expense(records: &[Record], month: &str) -> f64 {
    records
        .iter()
        .filter(|r| r.is_expense() && r.month() == month)
        .map(|r| r.amount)
        .sum()
}

/// `2024-05-03` -> `05-03`
pub fn short_day(day: &str) -> &str {
    day.get(5..).unwrap_or(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordType;

    fn rec(date: &str, kind: RecordType, amount: f64, category: &str, note: &str) -> Record {
        Record {
            date: date.to_string(),
            kind,
            amount,
            category: category.to_string(),
            note: note.to_string(),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            rec("2024-05-01 08:00", RecordType::Income, 50.0, "Allowance", "weekly"),
            rec("2024-05-01 12:00", RecordType::Expense, 8.0, "Food", "lunch"),
            rec("2024-05-02 16:00", RecordType::Expense, 3.0, "Snacks", "chips"),
            rec("2024-05-02 18:00", RecordType::Expense, 12.0, "Food", "Dinner with Tom"),
            rec("2024-06-01 09:00", RecordType::Expense, 5.0, "Transport", ""),
        ]
    }

    #[test]
    fn test_summarize_all() {
        let records = sample();
        let stats = summarize(records.iter().enumerate(), "");
        assert_eq!(stats.income, 50.0);
        assert_eq!(stats.expense, 28.0);
        assert_eq!(stats.balance(), 22.0);
        assert_eq!(stats.indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(
            stats.by_category,
            vec![
                ("Food".to_string(), 20.0),
                ("Snacks".to_string(), 3.0),
                ("Transport".to_string(), 5.0),
            ]
        );
    }

    #[test]
    fn test_summarize_filter_is_case_insensitive_and_keeps_indices() {
        let records = sample();
        let stats = summarize(records.iter().enumerate(), "  DINNER ");
        assert_eq!(stats.indices, vec![3]);
        assert_eq!(stats.expense, 12.0);

        let stats = summarize(records.iter().enumerate(), "food");
        assert_eq!(stats.indices, vec![1, 3]);
        assert_eq!(stats.income, 0.0);
    }

    #[test]
    fn test_category_breakdown_percent() {
        let shares = category_breakdown(&[("Food".into(), 30.0), ("Snacks".into(), 10.0)]);
        assert_eq!(shares[0].percent, 75.0);
        assert_eq!(shares[1].percent, 25.0);
        assert!(category_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_daily_expense_keeps_last_days_in_order() {
        let mut records = Vec::new();
        for d in 1..=9 {
            records.push(rec(&format!("2024-05-0{} 10:00", d), RecordType::Expense, d as f64, "Food", ""));
        }
        records.push(rec("2024-05-09 11:00", RecordType::Expense, 1.0, "Food", ""));
        records.push(rec("2024-05-10 11:00", RecordType::Income, 99.0, "Reward", ""));

        let daily = daily_expense(&records, 7);
        assert_eq!(daily.len(), 7);
        assert_eq!(daily[0].0, "2024-05-03");
        assert_eq!(daily[6], ("2024-05-09".to_string(), 10.0));
    }

    #[test]
    fn test_daily_compare_includes_income_only_days() {
        let records = vec![
            rec("2024-05-01 08:00", RecordType::Income, 50.0, "Allowance", ""),
            rec("2024-05-02 08:00", RecordType::Expense, 4.0, "Food", ""),
            rec("2024-05-02 09:00", RecordType::Income, 1.0, "Interest", ""),
        ];
        let days = daily_compare(&records, 7);
        assert_eq!(
            days,
            vec![
                DayTotals { day: "2024-05-01".into(), income: 50.0, expense: 0.0 },
                DayTotals { day: "2024-05-02".into(), income: 1.0, expense: 4.0 },
            ]
        );
    }

    #[test]
    fn test_month_expense() {
        let records = sample();
        assert_eq!(month_expense(&records, "2024-05"), 23.0);
        assert_eq!(month_expense(&records, "2024-06"), 5.0);
        assert_eq!(month_expense(&records, "2023-01"), 0.0);
    }

    #[test]
    fn test_short_day() {
        assert_eq!(short_day("2024-05-03"), "05-03");
        assert_eq!(short_day("bad"), "bad");
    }
}
