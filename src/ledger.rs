//! Ledger module for PocketTrack
//! Keeps all records in memory and rewrites the JSON file after every change

use crate::constants::{BUDGET_WARN_RATIO, RECORD_DATE_FORMAT};
use crate::stats;
use crate::types::{BudgetStatus, Record, RecordType, Stats};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("please enter a valid positive amount")]
    InvalidAmount,
    #[error("unknown {kind} category: {category}")]
    UnknownCategory { kind: &'static str, category: String },
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// On-disk document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerData {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}

pub struct Ledger {
    path: PathBuf,
    data: LedgerData,
}

impl Ledger {
    /// Open the records file. A missing file starts an empty ledger; an
    /// unreadable one is copied aside to `<file>.bak` first.
    pub fn open(path: &Path) -> Self {
        let mut data = match std::fs::read_to_string(path) {
            Ok(s) => match serde_json::from_str::<LedgerData>(&s) {
                Ok(data) => {
                    debug!(path = %path.display(), records = data.records.len(), "Ledger loaded");
                    data
                }
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Failed to parse records, starting empty");
                    Self::backup_corrupt(path);
                    LedgerData::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No records file found, starting empty");
                LedgerData::default()
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to read records, starting empty");
                Self::backup_corrupt(path);
                LedgerData::default()
            }
        };
        if data.budget.is_some() && usable_budget(data.budget).is_none() {
            warn!(budget = ?data.budget, "Ignoring non-positive budget in records file");
        }
        data.budget = usable_budget(data.budget);
        Self {
            path: path.to_path_buf(),
            data,
        }
    }

    fn backup_corrupt(path: &Path) {
        let mut backup = path.as_os_str().to_owned();
        backup.push(".bak");
        match std::fs::copy(path, &backup) {
            Ok(_) => info!(backup = ?backup, "Backed up unreadable records file"),
            Err(e) => warn!(error = %e, "Failed to back up unreadable records file"),
        }
    }

    /// Rewrite the whole file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| LedgerError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, json).map_err(|source| LedgerError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), records = self.data.records.len(), "Ledger saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Record] {
        &self.data.records
    }

    pub fn budget(&self) -> Option<f64> {
        self.data.budget
    }

    /// Append a record stamped with the current local time
    pub fn add_record(
        &mut self,
        kind: RecordType,
        amount: f64,
        category: &str,
        note: &str,
    ) -> Result<&Record> {
        let date = chrono::Local::now().format(RECORD_DATE_FORMAT).to_string();
        self.add_record_at(date, kind, amount, category, note)
    }

    pub fn add_record_at(
        &mut self,
        date: String,
        kind: RecordType,
        amount: f64,
        category: &str,
        note: &str,
    ) -> Result<&Record> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount);
        }
        if !kind.categories().contains(&category) {
            return Err(LedgerError::UnknownCategory {
                kind: kind.label(),
                category: category.to_string(),
            });
        }

        self.data.records.push(Record {
            date,
            kind,
            amount,
            category: category.to_string(),
            note: note.to_string(),
        });
        if let Err(e) = self.save() {
            self.data.records.pop();
            return Err(e);
        }
        info!(kind = kind.label(), amount, category, "Record added");
        Ok(&self.data.records[self.data.records.len() - 1])
    }

    /// Remove the record at `index`. Out-of-range indices are ignored.
    pub fn delete_record(&mut self, index: usize) -> Result<Option<Record>> {
        if index >= self.data.records.len() {
            debug!(index, "Delete ignored, index out of range");
            return Ok(None);
        }
        let removed = self.data.records.remove(index);
        if let Err(e) = self.save() {
            self.data.records.insert(index, removed);
            return Err(e);
        }
        info!(index, category = %removed.category, "Record deleted");
        Ok(Some(removed))
    }

    /// Totals over records matching `filter` (category or note, case-insensitive)
    pub fn stats(&self, filter: &str) -> Stats {
        stats::summarize(self.data.records.iter().enumerate(), filter)
    }

    pub fn balance(&self) -> f64 {
        self.stats("").balance()
    }

    /// Set or clear the monthly budget. Non-positive values clear it.
    pub fn set_budget(&mut self, budget: Option<f64>) -> Result<()> {
        let budget = usable_budget(budget);
        let previous = std::mem::replace(&mut self.data.budget, budget);
        if let Err(e) = self.save() {
            self.data.budget = previous;
            return Err(e);
        }
        info!(budget = ?budget, "Monthly budget updated");
        Ok(())
    }

    /// Spending in `month` (`YYYY-MM`) against the monthly budget
    pub fn budget_status(&self, month: &str) -> BudgetStatus {
        let Some(budget) = usable_budget(self.data.budget) else {
            return BudgetStatus::Unset;
        };
        let spent = stats::month_expense(&self.data.records, month);
        if spent > budget {
            BudgetStatus::Over { spent, budget }
        } else if spent >= budget * BUDGET_WARN_RATIO {
            BudgetStatus::Near { spent, budget }
        } else {
            BudgetStatus::Ok { spent, budget }
        }
    }

    pub fn current_month_status(&self) -> BudgetStatus {
        let month = chrono::Local::now().format(crate::constants::MONTH_FORMAT).to_string();
        self.budget_status(&month)
    }
}

/// Zero, negative and non-finite budgets mean "no budget"
fn usable_budget(budget: Option<f64>) -> Option<f64> {
    budget.filter(|b| b.is_finite() && *b > 0.0)
}

/// Parse user-entered amount text; must be a finite number greater than zero
pub fn parse_amount(text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(LedgerError::InvalidAmount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_path(name: &str) -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "pocket-track-ledger-{}-{}-{}",
            std::process::id(),
            name,
            n
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir.join("money_data.json")
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let path = scratch_path("missing");
        let ledger = Ledger::open(&path);
        assert!(ledger.records().is_empty());
        assert_eq!(ledger.budget(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_add_persists_and_reloads() {
        let path = scratch_path("reload");
        let mut ledger = Ledger::open(&path);
        ledger
            .add_record_at("2024-05-01 08:00".into(), RecordType::Income, 20.0, "Allowance", "")
            .unwrap();
        ledger
            .add_record(RecordType::Expense, 4.5, "Snacks", "  candy ")
            .unwrap();

        let reloaded = Ledger::open(&path);
        assert_eq!(reloaded.records().len(), 2);
        assert_eq!(reloaded.records()[1].note, "  candy ");
        assert_eq!(reloaded.records()[1].kind, RecordType::Expense);
        assert_eq!(reloaded.balance(), 15.5);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let path = scratch_path("reject");
        let mut ledger = Ledger::open(&path);
        assert!(matches!(
            ledger.add_record(RecordType::Expense, 0.0, "Food", ""),
            Err(LedgerError::InvalidAmount)
        ));
        assert!(matches!(
            ledger.add_record(RecordType::Expense, -3.0, "Food", ""),
            Err(LedgerError::InvalidAmount)
        ));
        assert!(matches!(
            ledger.add_record(RecordType::Expense, f64::NAN, "Food", ""),
            Err(LedgerError::InvalidAmount)
        ));
        assert!(matches!(
            ledger.add_record(RecordType::Income, 1.0, "Food", ""),
            Err(LedgerError::UnknownCategory { .. })
        ));
        assert!(ledger.records().is_empty());
    }

    #[test]
    fn test_delete_by_index() {
        let path = scratch_path("delete");
        let mut ledger = Ledger::open(&path);
        for (amount, cat) in [(1.0, "Food"), (2.0, "Snacks"), (3.0, "Other")] {
            ledger.add_record(RecordType::Expense, amount, cat, "").unwrap();
        }

        let removed = ledger.delete_record(1).unwrap().unwrap();
        assert_eq!(removed.category, "Snacks");
        assert!(ledger.delete_record(5).unwrap().is_none());

        let reloaded = Ledger::open(&path);
        let cats: Vec<&str> = reloaded.records().iter().map(|r| r.category.as_str()).collect();
        assert_eq!(cats, vec!["Food", "Other"]);
    }

    #[test]
    fn test_corrupt_file_is_backed_up() {
        let path = scratch_path("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let ledger = Ledger::open(&path);
        assert!(ledger.records().is_empty());
        let backup = path.with_file_name("money_data.json.bak");
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "{ not json");
    }

    #[test]
    fn test_loads_legacy_document() {
        let path = scratch_path("legacy");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"{"records":[{"date":"2024-05-01 08:00","type":"收入","amount":10,"category":"零花钱","note":""}]}"#,
        )
        .unwrap();

        let ledger = Ledger::open(&path);
        assert_eq!(ledger.records().len(), 1);
        assert!(ledger.records()[0].is_income());
        assert_eq!(ledger.stats("").income, 10.0);
    }

    #[test]
    fn test_budget_status_thresholds() {
        let path = scratch_path("budget");
        let mut ledger = Ledger::open(&path);
        assert_eq!(ledger.budget_status("2024-05"), BudgetStatus::Unset);

        ledger.set_budget(Some(100.0)).unwrap();
        ledger
            .add_record_at("2024-05-02 10:00".into(), RecordType::Expense, 50.0, "Food", "")
            .unwrap();
        assert!(matches!(ledger.budget_status("2024-05"), BudgetStatus::Ok { .. }));

        ledger
            .add_record_at("2024-05-03 10:00".into(), RecordType::Expense, 30.0, "Food", "")
            .unwrap();
        assert!(matches!(ledger.budget_status("2024-05"), BudgetStatus::Near { .. }));

        ledger
            .add_record_at("2024-05-04 10:00".into(), RecordType::Expense, 30.0, "Food", "")
            .unwrap();
        assert_eq!(
            ledger.budget_status("2024-05"),
            BudgetStatus::Over { spent: 110.0, budget: 100.0 }
        );
        // other months are unaffected
        assert!(matches!(ledger.budget_status("2024-06"), BudgetStatus::Ok { .. }));

        assert_eq!(Ledger::open(&path).budget(), Some(100.0));
        ledger.set_budget(Some(0.0)).unwrap();
        assert_eq!(Ledger::open(&path).budget(), None);
    }

    #[test]
    fn test_budget_status_at_exact_budget_is_near() {
        let path = scratch_path("exact");
        let mut ledger = Ledger::open(&path);
        ledger.set_budget(Some(100.0)).unwrap();
        ledger
            .add_record_at("2024-05-02 10:00".into(), RecordType::Expense, 100.0, "Food", "")
            .unwrap();
        assert_eq!(
            ledger.budget_status("2024-05"),
            BudgetStatus::Near { spent: 100.0, budget: 100.0 }
        );
    }

    #[test]
    fn test_non_positive_budget_in_file_is_unset() {
        for raw in ["0", "-5"] {
            let path = scratch_path("zero-budget");
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(
                &path,
                format!(
                    r#"{{"records":[{{"date":"2024-05-01 08:00","type":"expense","amount":3,"category":"Food","note":""}}],"budget":{}}}"#,
                    raw
                ),
            )
            .unwrap();

            let ledger = Ledger::open(&path);
            assert_eq!(ledger.budget(), None);
            assert_eq!(ledger.budget_status("2024-05"), BudgetStatus::Unset);
            assert_eq!(ledger.records().len(), 1);
        }
    }

    #[test]
    fn test_failed_save_leaves_ledger_unchanged() {
        let path = scratch_path("rollback");
        let mut ledger = Ledger::open(&path);
        ledger.add_record(RecordType::Expense, 2.0, "Food", "lunch").unwrap();
        ledger.set_budget(Some(50.0)).unwrap();

        // a regular file where the parent directory should be
        let blocker = path.with_file_name("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        ledger.path = blocker.join("money_data.json");

        assert!(matches!(
            ledger.add_record(RecordType::Income, 5.0, "Reward", ""),
            Err(LedgerError::Io { .. })
        ));
        assert!(matches!(ledger.delete_record(0), Err(LedgerError::Io { .. })));
        assert!(matches!(ledger.set_budget(Some(80.0)), Err(LedgerError::Io { .. })));

        assert_eq!(ledger.records().len(), 1);
        assert_eq!(ledger.records()[0].note, "lunch");
        assert_eq!(ledger.budget(), Some(50.0));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.50 ").unwrap(), 12.5);
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-1").is_err());
        assert!(parse_amount("inf").is_err());
    }
}
