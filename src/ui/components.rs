//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use crate::types::BudgetStatus;
use crate::utils::format_money;
use eframe::egui;

/// Summary card: coloured strip, caption and large value
pub fn summary_card(ui: &mut egui::Ui, title: &str, value: f64, color: egui::Color32) {
    theme::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        let (strip, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 4.0), egui::Sense::hover());
        ui.painter().rect_filled(strip, 2.0, color);
        ui.add_space(theme::SPACING_SM);
        ui.add(
            egui::Label::new(egui::RichText::new(title).size(theme::FONT_LABEL).color(theme::TEXT_LIGHT))
                .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(format_money(value))
                    .size(theme::FONT_CARD_VALUE)
                    .strong()
                    .color(color),
            )
            .selectable(false),
        );
    });
}

/// Small caption above a sidebar input
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(egui::RichText::new(text).size(theme::FONT_LABEL).color(theme::TEXT_LIGHT))
            .selectable(false),
    );
}

/// Chart tab button. Returns true if clicked.
pub fn tab_button(ui: &mut egui::Ui, label: &str, active: bool) -> bool {
    let font = egui::FontId::proportional(theme::FONT_LABEL);
    let text_w = ui.fonts(|f| f.layout_no_wrap(label.to_string(), font.clone(), theme::TEXT_LIGHT).rect.width());
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(text_w.max(70.0) + 20.0, 30.0), egui::Sense::click());

    let (fill, text_color) = if active {
        (theme::ACCENT, theme::TEXT_ON_DARK)
    } else if response.hovered() {
        (theme::BG_ROW_ALT, theme::TEXT_PRIMARY)
    } else {
        (egui::Color32::TRANSPARENT, theme::TEXT_LIGHT)
    };
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, fill);
    ui.painter()
        .text(rect.center(), egui::Align2::CENTER_CENTER, label, font, text_color);
    response.clicked()
}

/// Budget progress bar for the sidebar card
pub fn budget_bar(ui: &mut egui::Ui, status: &BudgetStatus) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 6.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 3.0, theme::BG_SIDEBAR_INPUT);

    let Some(ratio) = status.ratio() else {
        return;
    };
    let color = match status {
        BudgetStatus::Over { .. } => theme::STATUS_ERROR,
        BudgetStatus::Near { .. } => theme::STATUS_WARNING,
        _ => theme::STATUS_SUCCESS,
    };
    let filled = egui::Rect::from_min_size(
        rect.min,
        egui::vec2(rect.width() * ratio.clamp(0.0, 1.0) as f32, rect.height()),
    );
    ui.painter().rect_filled(filled, 3.0, color);
}

/// One-line description of the budget state
pub fn budget_caption(status: &BudgetStatus) -> String {
    match *status {
        BudgetStatus::Unset => "No monthly budget set".to_string(),
        BudgetStatus::Ok { spent, budget } | BudgetStatus::Near { spent, budget } => {
            format!("{} of {} spent", format_money(spent), format_money(budget))
        }
        BudgetStatus::Over { spent, budget } => {
            format!("Over by {}", format_money(spent - budget))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_caption() {
        assert_eq!(budget_caption(&BudgetStatus::Unset), "No monthly budget set");
        assert_eq!(
            budget_caption(&BudgetStatus::Near { spent: 85.0, budget: 100.0 }),
            "¥85.00 of ¥100.00 spent"
        );
        assert_eq!(
            budget_caption(&BudgetStatus::Over { spent: 120.5, budget: 100.0 }),
            "Over by ¥20.50"
        );
    }
}
