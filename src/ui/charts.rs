//! Chart painters for the middle panel
//!
//! Everything is drawn straight onto the egui painter: a donut for the
//! expense breakdown and (grouped) bar charts for the daily views.

use crate::stats::CategoryShare;
use crate::theme;
use crate::utils::format_money_short;
use eframe::egui;
use std::f32::consts::TAU;

/// Angle the first wedge starts at, counter-clockwise from 3 o'clock
const START_ANGLE_DEG: f32 = 140.0;
/// Inner radius as a fraction of the outer radius
const DONUT_HOLE: f32 = 0.58;
/// Arc resolution in radians per segment
const ARC_STEP: f32 = 0.04;
const GRID_LINES: usize = 4;

/// One series of a bar chart
pub struct BarSeries<'a> {
    pub name: &'a str,
    pub color: egui::Color32,
    pub values: Vec<f64>,
}

/// Rounds `max` up to a readable axis ceiling. Returns (ceiling, step).
pub fn nice_axis(max: f64, ticks: usize) -> (f64, f64) {
    if max <= 0.0 || !max.is_finite() {
        return (ticks as f64, 1.0);
    }
    let raw_step = max / ticks as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * magnitude;
    ((max / step).ceil() * step, step)
}

/// Placeholder shown when a chart has nothing to draw
pub fn empty_chart(ui: &mut egui::Ui, message: &str) {
    let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        message,
        egui::FontId::proportional(13.0),
        theme::TEXT_LIGHT,
    );
}

fn polar(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    // screen y grows downward, so negate to keep counter-clockwise order
    center + egui::vec2(angle.cos() * radius, -angle.sin() * radius)
}

/// Expense breakdown as a donut with the total in the hole and a legend
/// listing `Category ¥amount (pct%)` on the right.
pub fn donut_chart(ui: &mut egui::Ui, shares: &[CategoryShare]) {
    if shares.is_empty() {
        empty_chart(ui, "No expense data yet");
        return;
    }

    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let chart_w = (rect.width() * 0.55).max(120.0);
    let chart_rect = egui::Rect::from_min_size(rect.min, egui::vec2(chart_w, rect.height()));
    let center = chart_rect.center();
    let outer = (chart_rect.width().min(chart_rect.height()) / 2.0 - 10.0).max(20.0);
    let inner = outer * DONUT_HOLE;
    let total: f64 = shares.iter().map(|s| s.amount).sum();

    let hover_pos = response.hover_pos();
    let mut hovered: Option<usize> = None;

    let mut angle = START_ANGLE_DEG.to_radians();
    let mut boundaries = Vec::with_capacity(shares.len());
    for (idx, share) in shares.iter().enumerate() {
        let span = (share.percent / 100.0) as f32 * TAU;
        if span <= 0.0 {
            continue;
        }

        if let Some(pos) = hover_pos {
            let d = pos - center;
            let dist = d.length();
            if dist >= inner && dist <= outer {
                let a = (-d.y).atan2(d.x);
                let rel = (a - angle).rem_euclid(TAU);
                if rel < span {
                    hovered = Some(idx);
                }
            }
        }

        let color = theme::chart_color(idx);
        let (r_out, color) = if hovered == Some(idx) {
            (outer + 4.0, theme::lighten(color, 0.15))
        } else {
            (outer, color)
        };

        let steps = ((span / ARC_STEP).ceil() as usize).max(1);
        for s in 0..steps {
            let a0 = angle + span * s as f32 / steps as f32;
            let a1 = angle + span * (s + 1) as f32 / steps as f32;
            painter.add(egui::Shape::convex_polygon(
                vec![
                    polar(center, r_out, a0),
                    polar(center, r_out, a1),
                    polar(center, inner, a1),
                    polar(center, inner, a0),
                ],
                color,
                egui::Stroke::NONE,
            ));
        }
        boundaries.push(angle);
        angle += span;
    }

    // White gaps between wedges
    if boundaries.len() > 1 {
        for a in boundaries {
            painter.line_segment(
                [polar(center, inner - 1.0, a), polar(center, outer + 5.0, a)],
                egui::Stroke::new(2.5, theme::BG_CARD),
            );
        }
    }

    painter.text(
        center - egui::vec2(0.0, 6.0),
        egui::Align2::CENTER_CENTER,
        format_money_short(total),
        egui::FontId::proportional(16.0),
        theme::TEXT_PRIMARY,
    );
    painter.text(
        center + egui::vec2(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        "Total spent",
        egui::FontId::proportional(theme::FONT_SMALL),
        theme::TEXT_LIGHT,
    );

    // Legend
    let legend_x = chart_rect.max.x + 8.0;
    let row_h = 22.0;
    let legend_h = row_h * shares.len() as f32;
    let mut y = rect.center().y - legend_h / 2.0 + row_h / 2.0;
    for (idx, share) in shares.iter().enumerate() {
        let swatch = egui::Rect::from_center_size(egui::pos2(legend_x + 6.0, y), egui::vec2(10.0, 10.0));
        painter.rect_filled(swatch, 2.0, theme::chart_color(idx));
        let text_color = if hovered == Some(idx) {
            theme::TEXT_PRIMARY
        } else {
            theme::TEXT_LIGHT
        };
        painter.text(
            egui::pos2(legend_x + 18.0, y),
            egui::Align2::LEFT_CENTER,
            format!(
                "{}  {} ({:.1}%)",
                share.category,
                format_money_short(share.amount),
                share.percent
            ),
            egui::FontId::proportional(12.0),
            text_color,
        );
        y += row_h;
    }
}

/// Bar chart with one bar per series in each group. Single-series charts get
/// value labels above each bar; multi-series charts get a legend instead.
pub fn bar_chart(ui: &mut egui::Ui, labels: &[String], series: &[BarSeries<'_>], y_label: &str) {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let (ceiling, step) = nice_axis(max, GRID_LINES);

    let plot = egui::Rect::from_min_max(
        rect.min + egui::vec2(52.0, if series.len() > 1 { 26.0 } else { 18.0 }),
        rect.max - egui::vec2(10.0, 24.0),
    );
    let y_of = |v: f64| plot.bottom() - (v / ceiling) as f32 * plot.height();
    let axis_font = egui::FontId::proportional(theme::FONT_SMALL);

    // Grid and y ticks
    let mut tick = 0.0;
    while tick <= ceiling + step * 0.5 {
        let y = y_of(tick);
        let stroke = if tick == 0.0 {
            egui::Stroke::new(1.0, theme::BORDER)
        } else {
            egui::Stroke::new(1.0, theme::BORDER.gamma_multiply(0.6))
        };
        painter.line_segment([egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)], stroke);
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{:.0}", tick),
            axis_font.clone(),
            theme::TEXT_LIGHT,
        );
        tick += step;
    }

    painter.text(
        egui::pos2(rect.left() + 2.0, rect.top() + 2.0),
        egui::Align2::LEFT_TOP,
        y_label,
        axis_font.clone(),
        theme::TEXT_LIGHT,
    );

    let n = labels.len().max(1);
    let group_w = plot.width() / n as f32;
    let bar_w = if series.len() > 1 {
        group_w * 0.32
    } else {
        group_w * 0.55
    };
    let hover = response.hover_pos();

    for (gi, label) in labels.iter().enumerate() {
        let group_center = plot.left() + group_w * (gi as f32 + 0.5);
        let total_w = bar_w * series.len() as f32;
        for (si, s) in series.iter().enumerate() {
            let value = s.values.get(gi).copied().unwrap_or(0.0);
            let x0 = group_center - total_w / 2.0 + bar_w * si as f32;
            let bar = egui::Rect::from_min_max(
                egui::pos2(x0, y_of(value)),
                egui::pos2(x0 + bar_w, plot.bottom()),
            );
            let hovered = hover.is_some_and(|p| bar.contains(p));
            let fill = if hovered { theme::lighten(s.color, 0.2) } else { s.color };
            painter.rect_filled(bar, egui::CornerRadius { nw: 3, ne: 3, sw: 0, se: 0 }, fill);

            if series.len() == 1 || hovered {
                painter.text(
                    egui::pos2(bar.center().x, bar.top() - 3.0),
                    egui::Align2::CENTER_BOTTOM,
                    format_money_short(value),
                    axis_font.clone(),
                    theme::TEXT_PRIMARY,
                );
            }
        }
        painter.text(
            egui::pos2(group_center, plot.bottom() + 6.0),
            egui::Align2::CENTER_TOP,
            label,
            axis_font.clone(),
            theme::TEXT_LIGHT,
        );
    }

    if series.len() > 1 {
        let mut x = plot.right();
        for s in series.iter().rev() {
            let galley = painter.layout_no_wrap(s.name.to_string(), axis_font.clone(), theme::TEXT_LIGHT);
            x -= galley.size().x;
            painter.galley(egui::pos2(x, rect.top() + 4.0), galley, theme::TEXT_LIGHT);
            x -= 14.0;
            painter.rect_filled(
                egui::Rect::from_min_size(egui::pos2(x, rect.top() + 6.0), egui::vec2(10.0, 10.0)),
                2.0,
                s.color,
            );
            x -= 12.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_axis() {
        assert_eq!(nice_axis(37.0, 4), (40.0, 10.0));
        assert_eq!(nice_axis(8.0, 4), (8.0, 2.0));
        assert_eq!(nice_axis(0.0, 4), (4.0, 1.0));
        let (ceiling, step) = nice_axis(1234.0, 4);
        assert_eq!(step, 500.0);
        assert_eq!(ceiling, 1500.0);
    }

    #[test]
    fn test_polar_is_counter_clockwise_on_screen() {
        let c = egui::pos2(0.0, 0.0);
        let top = polar(c, 10.0, std::f32::consts::FRAC_PI_2);
        assert!(top.y < 0.0);
        assert!(top.x.abs() < 1e-4);
    }
}
