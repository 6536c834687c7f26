//! Search filtering for the transaction list

use super::App;

impl App {
    /// Narrow the list to records whose category or note contains the search
    /// text. Totals and charts are unaffected.
    pub fn apply_filters(&mut self) {
        let stats = self.ledger.stats(&self.search_query);
        self.filtered_indices = newest_first(&stats.indices);

        if let Some(sel) = self.selected {
            if !self.filtered_indices.contains(&sel) {
                self.selected = None;
            }
        }
    }
}

/// Ledger indices in display order (most recently added first)
pub(crate) fn newest_first(indices: &[usize]) -> Vec<usize> {
    indices.iter().rev().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::summarize;
    use crate::types::{Record, RecordType};

    fn rec(category: &str, note: &str) -> Record {
        Record {
            date: "2024-05-01 10:00".into(),
            kind: RecordType::Expense,
            amount: 1.0,
            category: category.into(),
            note: note.into(),
        }
    }

    #[test]
    fn test_newest_first_over_search_results() {
        let records = vec![
            rec("Food", "lunch"),
            rec("Snacks", ""),
            rec("Food", "breakfast"),
            rec("Transport", "bus to the food market"),
        ];
        let stats = summarize(records.iter().enumerate(), "FOOD");
        assert_eq!(newest_first(&stats.indices), vec![3, 2, 0]);

        let stats = summarize(records.iter().enumerate(), "");
        assert_eq!(newest_first(&stats.indices), vec![3, 2, 1, 0]);

        let stats = summarize(records.iter().enumerate(), "nothing matches");
        assert!(newest_first(&stats.indices).is_empty());
    }
}
