//! Context menu for rows in the transaction list

use super::App;
use crate::theme;
use eframe::egui;

pub(crate) struct RecordAction {
    pub delete: bool,
}

impl App {
    pub(crate) fn record_context_menu(&mut self, ui: &mut egui::Ui, record_idx: usize) -> RecordAction {
        let mut action = RecordAction { delete: false };
        ui.spacing_mut().item_spacing.y = 2.0;

        let note = self
            .ledger
            .records()
            .get(record_idx)
            .map(|r| r.note.clone())
            .unwrap_or_default();

        let labels = [
            format!("{}  Delete record", egui_phosphor::regular::TRASH),
            format!("{}  Copy note", egui_phosphor::regular::COPY),
            format!("{}  Deselect", egui_phosphor::regular::X_SQUARE),
        ];
        let label_refs: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();
        theme::set_menu_width(ui, &label_refs);

        if theme::menu_item(ui, egui_phosphor::regular::TRASH, "Delete record", theme::EXPENSE) {
            self.selected = Some(record_idx);
            action.delete = true;
            ui.close_menu();
        }
        if !note.is_empty()
            && theme::menu_item(ui, egui_phosphor::regular::COPY, "Copy note", theme::TEXT_PRIMARY)
        {
            ui.ctx().copy_text(note);
            ui.close_menu();
        }
        ui.separator();
        if theme::menu_item(ui, egui_phosphor::regular::X_SQUARE, "Deselect", theme::TEXT_PRIMARY) {
            self.selected = None;
            ui.close_menu();
        }

        action
    }
}
