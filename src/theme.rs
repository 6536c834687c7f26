//! Centralized theme constants for PocketTrack
//! All colors, sizes, and styling should reference these constants

use crate::types::RecordType;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0xee, 0xf2, 0xf7); // main content
pub const BG_CARD: Color32 = Color32::WHITE;
pub const BG_ROW_ALT: Color32 = Color32::from_rgb(0xf8, 0xf9, 0xfa);
pub const BG_SIDEBAR: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x2e);
pub const BG_SIDEBAR_ACCENT: Color32 = Color32::from_rgb(0x16, 0x21, 0x3e); // logo strip
pub const BG_SIDEBAR_INPUT: Color32 = Color32::from_rgb(0x2a, 0x2a, 0x4a);
pub const BG_TAB_INACTIVE: Color32 = Color32::from_rgb(0x2a, 0x2a, 0x4a);

// =============================================================================
// COLORS - Accent (Indigo)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x43, 0x61, 0xee);
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(0x7b, 0x8f, 0xf7);

// =============================================================================
// COLORS - Income / Expense
// =============================================================================
pub const INCOME: Color32 = Color32::from_rgb(0x06, 0xd6, 0xa0);
pub const INCOME_HOVER: Color32 = Color32::from_rgb(0x05, 0xb8, 0x8a);
pub const EXPENSE: Color32 = Color32::from_rgb(0xef, 0x47, 0x6f);
pub const EXPENSE_HOVER: Color32 = Color32::from_rgb(0xd6, 0x3d, 0x63);

pub fn record_color(kind: RecordType) -> Color32 {
    match kind {
        RecordType::Income => INCOME,
        RecordType::Expense => EXPENSE,
    }
}

pub fn record_hover_color(kind: RecordType) -> Color32 {
    match kind {
        RecordType::Income => INCOME_HOVER,
        RecordType::Expense => EXPENSE_HOVER,
    }
}

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x2e);
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0x8d, 0x99, 0xae);
pub const TEXT_ON_DARK: Color32 = Color32::WHITE;

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER: Color32 = Color32::from_rgb(0xde, 0xe2, 0xe6);

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = INCOME;
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xff, 0xd1, 0x66);
pub const STATUS_ERROR: Color32 = EXPENSE;

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_TOOL: Color32 = Color32::from_rgb(0x34, 0x49, 0x5e);
pub const BTN_DEFAULT: Color32 = BG_ROW_ALT;

// =============================================================================
// COLORS - Charts
// =============================================================================
pub const CHART_COLORS: [Color32; 7] = [
    Color32::from_rgb(0x43, 0x61, 0xee),
    Color32::from_rgb(0xef, 0x47, 0x6f),
    Color32::from_rgb(0xff, 0xd1, 0x66),
    Color32::from_rgb(0x06, 0xd6, 0xa0),
    Color32::from_rgb(0x9b, 0x59, 0xb6),
    Color32::from_rgb(0xe6, 0x7e, 0x22),
    Color32::from_rgb(0x1a, 0xbc, 0x9c),
];

pub fn chart_color(idx: usize) -> Color32 {
    CHART_COLORS[idx % CHART_COLORS.len()]
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_LOGO: f32 = 20.0;
pub const FONT_CARD_VALUE: f32 = 22.0;
pub const FONT_HEADING: f32 = 15.0;
pub const FONT_BODY: f32 = 13.0;
pub const FONT_LABEL: f32 = 11.0;
pub const FONT_SMALL: f32 = 10.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 220.0;
pub const ROW_HEIGHT: f32 = 32.0;
pub const HEADER_HEIGHT: f32 = 30.0;
pub const BUTTON_HEIGHT: f32 = 34.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 42.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 10.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_LG: f32 = 14.0;
pub const SPACING_XL: f32 = 22.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: BG_BASE,
        window_fill: BG_CARD,
        extreme_bg_color: BG_ROW_ALT,
        faint_bg_color: BG_ROW_ALT,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT_LIGHT,
            stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_ON_DARK),
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_CARD,
                weak_bg_fill: BG_ROW_ALT,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_ROW_ALT,
                weak_bg_fill: BG_ROW_ALT,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BORDER,
                weak_bg_fill: BORDER,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT_LIGHT),
                fg_stroke: egui::Stroke::new(1.5, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BORDER,
                weak_bg_fill: BORDER,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_CARD,
                weak_bg_fill: BG_ROW_ALT,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(40),
        },
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER),
        window_corner_radius: egui::CornerRadius::same(10),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.menu_margin = egui::Margin::symmetric(6, 4);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// White rounded panel used for cards, chart and list panels
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_SIDEBAR)
        .inner_margin(egui::Margin::same(0))
}

/// Dark input well on the sidebar
pub fn sidebar_input_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_SIDEBAR_INPUT)
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(10, 9))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default light button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent button for primary actions
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_ON_DARK))
        .fill(ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Danger button for destructive actions like Delete
pub fn button_danger(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_ON_DARK))
        .fill(EXPENSE)
        .corner_radius(RADIUS_DEFAULT)
}

/// Context menu item with icon. Returns true if clicked.
pub fn menu_item(ui: &mut egui::Ui, icon: &str, label: &str, color: Color32) -> bool {
    let text = format!("{}  {}", icon, label);
    let w = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(w, 24.0), egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        ui.painter().rect_filled(rect, RADIUS_DEFAULT, BG_ROW_ALT);
    }
    let text_pos = rect.left_center() + egui::vec2(8.0, 0.0);
    ui.painter().text(
        text_pos,
        egui::Align2::LEFT_CENTER,
        text,
        egui::FontId::proportional(13.0),
        color,
    );
    response.clicked()
}

/// Sets context menu width to 1.5x the widest label.
pub fn set_menu_width(ui: &mut egui::Ui, labels: &[&str]) {
    let max_text = labels
        .iter()
        .map(|l| {
            ui.fonts(|f| {
                f.layout_no_wrap(l.to_string(), egui::FontId::proportional(13.0), TEXT_PRIMARY)
                    .rect
                    .width()
            })
        })
        .fold(0.0_f32, f32::max);
    let w = (max_text + 16.0) * 1.5;
    ui.set_min_width(w);
    ui.set_max_width(w);
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    hover_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (hover_fill, rect.shrink(1.5))
    } else if response.hovered() {
        (hover_fill, rect)
    } else {
        (base_fill, rect)
    }
}

/// Full-width custom-painted button. Returns the response.
pub fn filled_button(
    ui: &mut egui::Ui,
    label: &str,
    height: f32,
    base_fill: Color32,
    hover_fill: Color32,
    text_color: Color32,
) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let (fill, draw_rect) = button_visual(&response, base_fill, hover_fill, rect);
    ui.painter().rect_filled(draw_rect, RADIUS_DEFAULT + 2.0, fill);
    ui.painter().text(
        draw_rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(FONT_BODY),
        text_color,
    );
    response
}

pub fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

// =============================================================================
// HELPER - Segmented toggle (pill-style)
// =============================================================================

/// Expense/Income switch at the top of the sidebar. Returns true if the
/// selection changed.
pub fn type_toggle(ui: &mut egui::Ui, current: &mut RecordType) -> bool {
    let mut changed = false;
    let height = 36.0;
    let rounding = 8.0;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::click());
    let painter = ui.painter();

    // Container
    painter.rect_filled(rect, rounding, BG_TAB_INACTIVE);

    let half = rect.width() / 2.0;
    let left_rect = egui::Rect::from_min_max(rect.min, egui::pos2(rect.min.x + half, rect.max.y));
    let right_rect = egui::Rect::from_min_max(egui::pos2(rect.min.x + half, rect.min.y), rect.max);

    for (kind, seg) in [(RecordType::Expense, left_rect), (RecordType::Income, right_rect)] {
        let active = *current == kind;
        if active {
            painter.rect_filled(seg.shrink(3.0), rounding - 2.0, record_color(kind));
        }
        painter.text(
            seg.center(),
            egui::Align2::CENTER_CENTER,
            kind.label(),
            egui::FontId::proportional(12.0),
            if active { TEXT_ON_DARK } else { TEXT_LIGHT },
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let clicked = if pos.x < rect.min.x + half {
                RecordType::Expense
            } else {
                RecordType::Income
            };
            if clicked != *current {
                *current = clicked;
                changed = true;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_moves_toward_white() {
        assert_eq!(lighten(Color32::from_rgb(0, 0, 0), 0.5), Color32::from_rgb(127, 127, 127));
        assert_eq!(lighten(Color32::WHITE, 0.3), Color32::WHITE);
    }

    #[test]
    fn test_chart_color_wraps() {
        assert_eq!(chart_color(0), chart_color(CHART_COLORS.len()));
    }
}
