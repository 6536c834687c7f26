//! Modal dialogs (delete confirmation, errors, budget) and the toast

use super::{App, ToastKind};
use crate::theme;
use crate::utils::format_money;
use eframe::egui;

const MODAL_WIDTH: f32 = 340.0;

fn modal(id: &str) -> egui::Modal {
    let area = egui::Modal::default_area(egui::Id::new(id)).default_width(MODAL_WIDTH + theme::SPACING_XL * 2.0);
    egui::Modal::new(egui::Id::new(id))
        .area(area)
        .backdrop_color(egui::Color32::from_black_alpha(90))
        .frame(theme::modal_frame())
}

fn modal_title(ui: &mut egui::Ui, icon: &str, title: &str, color: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(icon).size(32.0).color(color));
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(title)
                .size(theme::FONT_HEADING)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
    });
}

impl App {
    pub(crate) fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_delete_modal(ctx);
        self.render_budget_modal(ctx);
        self.render_error_modal(ctx);
    }

    fn render_delete_modal(&mut self, ctx: &egui::Context) {
        let Some(idx) = self.pending_delete else {
            return;
        };
        let Some(record) = self.ledger.records().get(idx).cloned() else {
            self.pending_delete = None;
            return;
        };

        let mut confirmed = false;
        let mut cancelled = false;
        let response = modal("delete_modal").show(ctx, |ui| {
            ui.set_min_width(MODAL_WIDTH);
            ui.set_max_width(MODAL_WIDTH);
            modal_title(ui, egui_phosphor::regular::TRASH, "Delete this record?", theme::EXPENSE);
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{}  {}  {}{}",
                        record.date,
                        record.category,
                        record.kind.sign(),
                        format_money(record.amount)
                    ))
                    .color(theme::record_color(record.kind)),
                );
                if !record.note.is_empty() {
                    ui.label(egui::RichText::new(&record.note).color(theme::TEXT_LIGHT));
                }
            });
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(theme::button_danger(format!("{}  Delete", egui_phosphor::regular::TRASH)))
                        .clicked()
                    {
                        confirmed = true;
                    }
                    ui.add_space(8.0);
                    if ui.add(theme::button("Cancel")).clicked() {
                        cancelled = true;
                    }
                });
            });
        });

        if confirmed {
            self.pending_delete = None;
            self.delete_record(idx);
        } else if cancelled || response.should_close() {
            self.pending_delete = None;
        }
    }

    fn render_error_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_message.clone() else {
            return;
        };
        let mut close = false;
        let response = modal("error_modal").show(ctx, |ui| {
            ui.set_min_width(MODAL_WIDTH);
            ui.set_max_width(MODAL_WIDTH);
            modal_title(ui, egui_phosphor::regular::WARNING_CIRCLE, "Error", theme::STATUS_ERROR);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.add(egui::Label::new(egui::RichText::new(&message).color(theme::TEXT_PRIMARY)).wrap());
                ui.add_space(14.0);
                if ui.add(theme::button_accent("OK")).clicked() {
                    close = true;
                }
            });
        });
        if close || response.should_close() {
            self.error_message = None;
            self.focus_amount = true;
        }
    }

    fn render_budget_modal(&mut self, ctx: &egui::Context) {
        if !self.show_budget_modal {
            return;
        }
        let mut save = false;
        let mut cancel = false;
        let mut invalid = false;
        let response = modal("budget_modal").show(ctx, |ui| {
            ui.set_min_width(MODAL_WIDTH);
            ui.set_max_width(MODAL_WIDTH);
            modal_title(ui, egui_phosphor::regular::WALLET, "Monthly budget", theme::ACCENT);
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Leave empty to turn the budget warning off.")
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_LIGHT),
            );
            ui.add_space(4.0);
            let te = ui.add(
                egui::TextEdit::singleline(&mut self.budget_input)
                    .hint_text("e.g. 500")
                    .desired_width(f32::INFINITY),
            );
            if te.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                save = true;
            }
            ui.add_space(14.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(theme::button_accent("Save")).clicked() {
                        save = true;
                    }
                    ui.add_space(8.0);
                    if ui.add(theme::button("Cancel")).clicked() {
                        cancel = true;
                    }
                });
            });
        });

        if save {
            if self.apply_budget_input() {
                self.show_budget_modal = false;
            } else {
                invalid = true;
            }
        } else if cancel || response.should_close() {
            self.show_budget_modal = false;
        }
        if invalid {
            self.error_message = Some("Please enter a valid positive budget".to_string());
        }
    }

    /// Toast in the bottom-right of the central panel, 3s visible then fade,
    /// timer paused on hover
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some((msg, kind)), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect) else {
            return;
        };
        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 24.0;
        let accent = match kind {
            ToastKind::Info => theme::ACCENT,
            ToastKind::Warning => theme::EXPENSE,
        };

        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
                let alpha = if elapsed > visible_duration {
                    ((total_duration - elapsed) / fade_duration).clamp(0.0, 1.0)
                } else {
                    1.0
                };

                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0x1a, 0x1a, 0x2e, (235.0 * alpha) as u8))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), (160.0 * alpha) as u8),
                    ))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&msg)
                                .color(egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8)),
                        );
                    });
            });

        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
