//! View rendering (sidebar, summary cards, charts, transaction list)

use super::App;
use crate::constants::{APP_NAME, TREND_DAYS};
use crate::stats;
use crate::theme;
use crate::types::{ChartMode, RecordType};
use crate::ui::charts::{self, BarSeries};
use crate::ui::components;
use crate::utils;
use eframe::egui;

impl App {
    // ========================================================================
    // SIDEBAR
    // ========================================================================

    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("entry_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(theme::sidebar_frame())
            .show(ctx, |ui| {
                let panel_rect = ui.max_rect();
                self.render_logo(ui, ctx);

                egui::Frame::new()
                    .inner_margin(egui::Margin::symmetric(theme::SPACING_LG as i8, 0))
                    .show(ui, |ui| {
                        ui.add_space(12.0);
                        let mut kind = self.entry_type;
                        if theme::type_toggle(ui, &mut kind) {
                            self.switch_entry_type(kind);
                        }
                        ui.add_space(12.0);
                        self.render_entry_form(ui);
                        ui.add_space(18.0);
                        self.render_budget_card(ui);
                    });

                // Bottom tool buttons pinned to the panel bottom
                let bottom_h = theme::BUTTON_HEIGHT * 2.0 + 8.0;
                let bottom_rect = egui::Rect::from_min_max(
                    egui::pos2(panel_rect.left() + theme::SPACING_LG, panel_rect.bottom() - bottom_h - theme::SPACING_LG),
                    egui::pos2(panel_rect.right() - theme::SPACING_LG, panel_rect.bottom() - theme::SPACING_LG),
                );
                ui.allocate_new_ui(egui::UiBuilder::new().max_rect(bottom_rect), |ui| {
                    ui.spacing_mut().item_spacing.y = 8.0;
                    let export_label = format!("{}  Export CSV", egui_phosphor::regular::EXPORT);
                    if theme::filled_button(
                        ui,
                        &export_label,
                        theme::BUTTON_HEIGHT,
                        theme::BTN_TOOL,
                        theme::lighten(theme::BTN_TOOL, 0.12),
                        theme::TEXT_ON_DARK,
                    )
                    .clicked()
                    {
                        self.export_csv();
                    }
                    let folder_label = format!("{}  Open data folder", egui_phosphor::regular::FOLDER_OPEN);
                    if theme::filled_button(
                        ui,
                        &folder_label,
                        theme::BUTTON_HEIGHT,
                        theme::BG_SIDEBAR_INPUT,
                        theme::lighten(theme::BG_SIDEBAR_INPUT, 0.1),
                        theme::TEXT_LIGHT,
                    )
                    .on_hover_text(self.ledger.path().display().to_string())
                    .clicked()
                    {
                        self.open_data_folder();
                    }
                });
            });
    }

    fn render_logo(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::Frame::new()
            .fill(theme::BG_SIDEBAR_ACCENT)
            .inner_margin(egui::Margin::symmetric(0, 14))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    if self.logo_texture.is_none() {
                        if let Some((pixels, w, h)) = utils::rasterize_logo(96) {
                            self.logo_texture = Some(ctx.load_texture(
                                "logo",
                                egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                                egui::TextureOptions::LINEAR,
                            ));
                        }
                    }
                    if let Some(texture) = &self.logo_texture {
                        let aspect = texture.size()[1] as f32 / texture.size()[0] as f32;
                        let logo_w = 40.0;
                        ui.image(egui::load::SizedTexture::new(texture.id(), egui::vec2(logo_w, logo_w * aspect)));
                        ui.add_space(4.0);
                    }
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(APP_NAME)
                                .size(theme::FONT_LOGO)
                                .strong()
                                .color(theme::ACCENT_LIGHT),
                        )
                        .selectable(false),
                    );
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Smart allowance tracking")
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_LIGHT),
                        )
                        .selectable(false),
                    );
                });
            });
    }

    fn render_entry_form(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;

        components::field_label(ui, "Amount");
        ui.add_space(2.0);
        theme::sidebar_input_frame().show(ui, |ui| {
            let id = ui.make_persistent_id("amount_input");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.amount_input)
                    .id(id)
                    .hint_text("Enter amount...")
                    .font(egui::FontId::proportional(14.0))
                    .text_color(theme::TEXT_ON_DARK)
                    .frame(false)
                    .desired_width(f32::INFINITY),
            );
            if self.focus_amount && self.pending_delete.is_none() && self.error_message.is_none() {
                self.focus_amount = false;
                response.request_focus();
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
        });
        ui.add_space(12.0);

        components::field_label(ui, "Category");
        ui.add_space(2.0);
        let width = ui.available_width();
        egui::ComboBox::from_id_salt("category_combo")
            .selected_text(&self.category)
            .width(width)
            .show_ui(ui, |ui| {
                for cat in self.entry_type.categories() {
                    ui.selectable_value(&mut self.category, cat.to_string(), *cat);
                }
            });
        ui.add_space(12.0);

        components::field_label(ui, "Note (optional)");
        ui.add_space(2.0);
        theme::sidebar_input_frame().show(ui, |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.note_input)
                    .hint_text("Optional note...")
                    .text_color(theme::TEXT_ON_DARK)
                    .frame(false)
                    .desired_width(f32::INFINITY),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
        });
        ui.add_space(18.0);

        let kind = self.entry_type;
        let label = match kind {
            RecordType::Expense => format!("{}  Add expense", egui_phosphor::regular::MINUS_CIRCLE),
            RecordType::Income => format!("{}  Add income", egui_phosphor::regular::PLUS_CIRCLE),
        };
        if theme::filled_button(
            ui,
            &label,
            theme::BUTTON_HEIGHT_LARGE,
            theme::record_color(kind),
            theme::record_hover_color(kind),
            theme::TEXT_ON_DARK,
        )
        .clicked()
        {
            submit = true;
        }

        if submit {
            self.submit_entry();
        }
    }

    fn render_budget_card(&mut self, ui: &mut egui::Ui) {
        egui::Frame::new()
            .fill(theme::BG_SIDEBAR_ACCENT)
            .corner_radius(theme::RADIUS_LARGE)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    components::field_label(ui, "This month's budget");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let edit = ui.add(
                            egui::Label::new(
                                egui::RichText::new(egui_phosphor::regular::PENCIL_SIMPLE)
                                    .size(14.0)
                                    .color(theme::TEXT_LIGHT),
                            )
                            .selectable(false)
                            .sense(egui::Sense::click()),
                        );
                        if edit.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        if edit.on_hover_text("Set monthly budget").clicked() {
                            self.budget_input = self
                                .ledger
                                .budget()
                                .map(|b| format!("{:.2}", b))
                                .unwrap_or_default();
                            self.show_budget_modal = true;
                        }
                    });
                });
                ui.add_space(6.0);
                components::budget_bar(ui, &self.budget_status);
                ui.add_space(4.0);
                let caption_color = if self.budget_status.is_warning() {
                    theme::STATUS_WARNING
                } else {
                    theme::TEXT_LIGHT
                };
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(components::budget_caption(&self.budget_status))
                            .size(theme::FONT_LABEL)
                            .color(caption_color),
                    )
                    .selectable(false),
                );
            });
    }

    // ========================================================================
    // MAIN CONTENT
    // ========================================================================

    pub(crate) fn render_main(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(28, 22)),
            )
            .show(ctx, |ui| {
                self.central_panel_rect = Some(ui.max_rect());

                // Summary cards always cover every record
                ui.columns(3, |cols| {
                    components::summary_card(&mut cols[0], "Balance", self.stats.balance(), theme::ACCENT);
                    components::summary_card(&mut cols[1], "Total income", self.stats.income, theme::INCOME);
                    components::summary_card(&mut cols[2], "Total expense", self.stats.expense, theme::EXPENSE);
                });
                ui.add_space(10.0);

                let remaining = ui.available_height();
                let chart_h = (remaining * 0.58).max(220.0);
                let chart_rect = egui::Rect::from_min_size(ui.cursor().min, egui::vec2(ui.available_width(), chart_h));
                ui.allocate_new_ui(egui::UiBuilder::new().max_rect(chart_rect), |ui| {
                    self.render_chart_panel(ui);
                });
                ui.add_space(10.0);
                self.render_list_panel(ui);
            });
    }

    fn render_chart_panel(&mut self, ui: &mut egui::Ui) {
        theme::card_frame().show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;
                for mode in ChartMode::ALL {
                    if components::tab_button(ui, mode.label(), self.chart_mode == mode) && self.chart_mode != mode {
                        self.chart_mode = mode;
                        self.save_settings();
                    }
                }
            });
            ui.add_space(6.0);

            let records = self.ledger.records();
            match self.chart_mode {
                ChartMode::Breakdown => {
                    let shares = stats::category_breakdown(&self.stats.by_category);
                    charts::donut_chart(ui, &shares);
                }
                ChartMode::DailyTrend => {
                    let daily = stats::daily_expense(records, TREND_DAYS);
                    if daily.is_empty() {
                        charts::empty_chart(ui, "No expense records yet");
                    } else {
                        let labels: Vec<String> = daily.iter().map(|(d, _)| stats::short_day(d).to_string()).collect();
                        let series = [BarSeries {
                            name: "Expense",
                            color: theme::ACCENT,
                            values: daily.iter().map(|(_, v)| *v).collect(),
                        }];
                        charts::bar_chart(ui, &labels, &series, "Expense (¥)");
                    }
                }
                ChartMode::Compare => {
                    let days = stats::daily_compare(records, TREND_DAYS);
                    if days.is_empty() {
                        charts::empty_chart(ui, "No records yet");
                    } else {
                        let labels: Vec<String> = days.iter().map(|d| stats::short_day(&d.day).to_string()).collect();
                        let series = [
                            BarSeries {
                                name: "Income",
                                color: theme::INCOME,
                                values: days.iter().map(|d| d.income).collect(),
                            },
                            BarSeries {
                                name: "Expense",
                                color: theme::EXPENSE,
                                values: days.iter().map(|d| d.expense).collect(),
                            },
                        ];
                        charts::bar_chart(ui, &labels, &series, "Amount (¥)");
                    }
                }
            }
        });
    }

    fn render_list_panel(&mut self, ui: &mut egui::Ui) {
        theme::card_frame().show(ui, |ui| {
            ui.set_min_size(ui.available_size());

            // Header: title, search, delete
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Transactions")
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.add_space(15.0);
                egui::Frame::new()
                    .fill(theme::BG_ROW_ALT)
                    .corner_radius(theme::RADIUS_DEFAULT)
                    .inner_margin(egui::Margin::symmetric(8, 5))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = 4.0;
                            ui.label(
                                egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                                    .color(theme::TEXT_LIGHT),
                            );
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut self.search_query)
                                    .hint_text("Search category / note...")
                                    .frame(false)
                                    .desired_width(200.0),
                            );
                            if response.changed() {
                                self.apply_filters();
                            }
                            if !self.search_query.is_empty()
                                && ui
                                    .add(
                                        egui::Label::new(
                                            egui::RichText::new(egui_phosphor::regular::X).color(theme::TEXT_LIGHT),
                                        )
                                        .sense(egui::Sense::click()),
                                    )
                                    .clicked()
                            {
                                self.search_query.clear();
                                self.apply_filters();
                            }
                        });
                    });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let enabled = self.selected.is_some();
                    let button = egui::Button::new(
                        egui::RichText::new(format!("{}  Delete selected", egui_phosphor::regular::TRASH))
                            .color(theme::EXPENSE),
                    )
                    .fill(theme::BG_ROW_ALT)
                    .corner_radius(theme::RADIUS_DEFAULT);
                    if ui.add_enabled(enabled, button).clicked() {
                        self.pending_delete = self.selected;
                    }
                    ui.label(
                        egui::RichText::new(format!("{} shown", self.filtered_indices.len()))
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_LIGHT),
                    );
                });
            });
            ui.add_space(6.0);

            if self.filtered_indices.is_empty() {
                let message = if self.search_query.trim().is_empty() {
                    "No records yet. Add one from the sidebar."
                } else {
                    "No records match the search."
                };
                charts::empty_chart(ui, message);
                return;
            }
            self.render_table(ui);
        });
    }

    fn render_table(&mut self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        let ctx = ui.ctx().clone();
        let available_width = ui.available_width();
        let mut delete_requested: Option<usize> = None;

        let table = TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .sense(egui::Sense::click())
            .min_scrolled_height(0.0)
            .column(Column::exact(140.0))
            .column(Column::exact(110.0))
            .column(Column::exact((available_width - 140.0 - 110.0 - 110.0).max(80.0)).clip(true))
            .column(Column::remainder());

        table
            .header(theme::HEADER_HEIGHT, |mut header| {
                for title in ["Time", "Category", "Note", "Amount"] {
                    header.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(title)
                                    .size(theme::FONT_LABEL)
                                    .strong()
                                    .color(theme::TEXT_LIGHT),
                            )
                            .selectable(false),
                        );
                    });
                }
            })
            .body(|mut body| {
                body.ui_mut().visuals_mut().selection.bg_fill = theme::ACCENT_LIGHT;
                let indices = self.filtered_indices.clone();

                body.rows(theme::ROW_HEIGHT, indices.len(), |mut row| {
                    let record_idx = indices[row.index()];
                    let Some(record) = self.ledger.records().get(record_idx).cloned() else {
                        return;
                    };
                    let is_selected = self.selected == Some(record_idx);
                    row.set_selected(is_selected);

                    let text_color = if is_selected { theme::TEXT_ON_DARK } else { theme::TEXT_PRIMARY };
                    let amount_color = if is_selected {
                        theme::TEXT_ON_DARK
                    } else {
                        theme::record_color(record.kind)
                    };

                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(egui::RichText::new(&record.date).size(12.0).color(text_color))
                                .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(egui::RichText::new(&record.category).size(12.0).color(text_color))
                                .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(egui::RichText::new(&record.note).size(12.0).color(text_color))
                                .truncate()
                                .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(format!("{}{}", record.kind.sign(), utils::format_money(record.amount)))
                                        .size(13.0)
                                        .strong()
                                        .color(amount_color),
                                )
                                .selectable(false),
                            );
                        });
                    });

                    let response = row.response();
                    if response.hovered() {
                        ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    if response.clicked_by(egui::PointerButton::Primary) {
                        self.selected = if is_selected { None } else { Some(record_idx) };
                    }
                    if response.clicked_by(egui::PointerButton::Secondary) {
                        self.selected = Some(record_idx);
                    }
                    response.context_menu(|ui| {
                        if self.record_context_menu(ui, record_idx).delete {
                            delete_requested = Some(record_idx);
                        }
                    });
                });
            });

        if let Some(idx) = delete_requested {
            self.pending_delete = Some(idx);
        }
    }
}
