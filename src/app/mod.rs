//! App module - contains the main application state and logic

mod context_menu;
mod filters;
mod modals;
mod views;

use crate::export;
use crate::ledger::{self, Ledger};
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) ledger: Ledger,
    // Totals over every record; cards and charts ignore the search box
    pub(crate) stats: Stats,
    pub(crate) budget_status: BudgetStatus,
    // Ledger indices shown in the list, newest first
    pub(crate) filtered_indices: Vec<usize>,
    pub(crate) search_query: String,
    pub(crate) selected: Option<usize>,
    // Entry form
    pub(crate) entry_type: RecordType,
    pub(crate) amount_input: String,
    pub(crate) category: String,
    pub(crate) note_input: String,
    pub(crate) focus_amount: bool,
    // Charts
    pub(crate) chart_mode: ChartMode,
    // Modals
    pub(crate) pending_delete: Option<usize>,
    pub(crate) error_message: Option<String>,
    pub(crate) show_budget_modal: bool,
    pub(crate) budget_input: String,
    // Toast notification
    pub(crate) toast_message: Option<(String, ToastKind)>,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Settings
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    pub(crate) data_file_setting: Option<String>,
    pub(crate) export_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, ledger: Ledger, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Light);

        // Phosphor icons as a Proportional fallback
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let entry_type = settings.entry_type;
        let mut app = Self {
            ledger,
            stats: Stats::default(),
            budget_status: BudgetStatus::Unset,
            filtered_indices: Vec::new(),
            search_query: String::new(),
            selected: None,
            entry_type,
            amount_input: String::new(),
            category: entry_type.categories()[0].to_string(),
            note_input: String::new(),
            focus_amount: true,
            chart_mode: settings.chart_mode,
            pending_delete: None,
            error_message: None,
            show_budget_modal: false,
            budget_input: String::new(),
            toast_message: None,
            toast_start: None,
            central_panel_rect: None,
            logo_texture: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            export_dir: settings.export_dir_or_default(),
            data_file_setting: settings.data_file,
            data_dir,
        };
        app.refresh();
        app
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            chart_mode: self.chart_mode,
            entry_type: self.entry_type,
            data_file: self.data_file_setting.clone(),
            export_dir: Some(self.export_dir.to_string_lossy().to_string()),
        };
        settings.save(&self.data_dir);
    }

    /// Recompute totals, budget state and the visible list after any change
    pub fn refresh(&mut self) {
        self.stats = self.ledger.stats("");
        self.budget_status = self.ledger.current_month_status();
        self.apply_filters();
    }

    pub fn switch_entry_type(&mut self, kind: RecordType) {
        self.entry_type = kind;
        self.category = kind.categories()[0].to_string();
    }

    /// Validate the entry form and append a record
    pub fn submit_entry(&mut self) {
        let amount = match ledger::parse_amount(&self.amount_input) {
            Ok(v) => v,
            Err(e) => {
                warn!(input = %self.amount_input, "Rejected amount");
                self.error_message = Some(capitalize(&e.to_string()));
                return;
            }
        };

        let was_warning = self.budget_status.is_warning();
        match self
            .ledger
            .add_record(self.entry_type, amount, &self.category, &self.note_input)
            .map(|_| ())
        {
            Ok(_) => {
                self.amount_input.clear();
                self.note_input.clear();
                self.focus_amount = true;
                self.refresh();
                if self.entry_type == RecordType::Expense {
                    self.warn_on_budget(was_warning);
                }
            }
            Err(e) => {
                error!(error = %e, "Failed to add record");
                self.error_message = Some(format!("Could not save the record: {}", e));
            }
        }
    }

    fn warn_on_budget(&mut self, was_warning: bool) {
        let msg = match self.budget_status {
            BudgetStatus::Over { spent, budget } => format!(
                "{}  Monthly budget exceeded: {} of {}",
                egui_phosphor::regular::WARNING,
                crate::utils::format_money(spent),
                crate::utils::format_money(budget)
            ),
            BudgetStatus::Near { spent, budget } if !was_warning => format!(
                "{}  {:.0}% of this month's budget used",
                egui_phosphor::regular::WARNING,
                spent / budget * 100.0
            ),
            _ => return,
        };
        self.show_toast(msg, ToastKind::Warning);
    }

    /// Delete the record at ledger `index` (after confirmation)
    pub fn delete_record(&mut self, index: usize) {
        match self.ledger.delete_record(index) {
            Ok(Some(_)) => {
                self.selected = None;
                self.refresh();
            }
            Ok(None) => {}
            Err(e) => {
                error!(error = %e, index, "Failed to delete record");
                self.error_message = Some(format!("Could not delete the record: {}", e));
            }
        }
    }

    pub fn apply_budget_input(&mut self) -> bool {
        let text = self.budget_input.trim();
        let budget = if text.is_empty() {
            None
        } else {
            match ledger::parse_amount(text) {
                Ok(v) => Some(v),
                Err(_) => return false,
            }
        };
        match self.ledger.set_budget(budget) {
            Ok(()) => {
                self.refresh();
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to save budget");
                self.error_message = Some(format!("Could not save the budget: {}", e));
                true
            }
        }
    }

    /// Ask for a destination and write all records as CSV
    pub fn export_csv(&mut self) {
        std::fs::create_dir_all(&self.export_dir).ok();
        let file_name = format!("pocket-track-{}.csv", chrono::Local::now().format("%Y%m%d"));
        let Some(path) = rfd::FileDialog::new()
            .set_directory(&self.export_dir)
            .set_file_name(file_name.as_str())
            .add_filter("CSV Files", &["csv"])
            .save_file()
        else {
            return;
        };

        match export::export_csv(self.ledger.records(), &path) {
            Ok(rows) => {
                if let Some(dir) = path.parent() {
                    self.export_dir = dir.to_path_buf();
                    self.save_settings();
                }
                self.show_toast(
                    format!("{}  Exported {} records", egui_phosphor::regular::CHECK_CIRCLE, rows),
                    ToastKind::Info,
                );
            }
            Err(e) => {
                error!(error = %e, "Export failed");
                self.error_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    pub fn open_data_folder(&self) {
        let folder = self
            .ledger
            .path()
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.data_dir.clone());
        info!(path = %folder.display(), "Opening data folder");
        if let Err(e) = open::that(&folder) {
            warn!(error = %e, "Failed to open data folder");
        }
    }

    pub fn show_toast(&mut self, msg: String, kind: ToastKind) {
        self.toast_message = Some((msg, kind));
        self.toast_start = Some(std::time::Instant::now());
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("please enter a valid positive amount"), "Please enter a valid positive amount");
        assert_eq!(capitalize(""), "");
    }
}
