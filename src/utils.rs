//! Utility functions

use crate::constants::{APP_NAME, CURRENCY};
use std::path::PathBuf;

// Wallet with coin, used for the sidebar logo
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 48"><rect x="2" y="8" width="52" height="38" rx="7" fill="#4361EE"/><rect x="2" y="2" width="44" height="12" rx="5" fill="#7B8FF7"/><rect x="36" y="20" width="26" height="16" rx="5" fill="#3451DE"/><circle cx="45" cy="28" r="4" fill="#FFD166"/></svg>"##;

// Square viewBox for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><g transform="translate(0,8)"><rect x="2" y="8" width="52" height="38" rx="7" fill="#4361EE"/><rect x="2" y="2" width="44" height="12" rx="5" fill="#7B8FF7"/><rect x="36" y="20" width="26" height="16" rx="5" fill="#3451DE"/><circle cx="45" cy="28" r="4" fill="#FFD166"/></g></svg>"##;

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).ok()?;
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), width, height))
}

/// Rasterize the icon SVG to a square image (for window/taskbar icons).
pub fn rasterize_logo_square(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (settings, records, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// `1234.5` -> `¥1234.50`, negatives keep the sign in front of the currency
pub fn format_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", CURRENCY, -amount)
    } else {
        format!("{}{:.2}", CURRENCY, amount)
    }
}

/// Whole-unit variant used on chart labels
pub fn format_money_short(amount: f64) -> String {
    format!("{}{:.0}", CURRENCY, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "¥0.00");
        assert_eq!(format_money(1234.5), "¥1234.50");
        assert_eq!(format_money(-3.456), "-¥3.46");
        assert_eq!(format_money_short(99.6), "¥100");
    }

    #[test]
    fn test_rasterize_logo_dimensions() {
        let (pixels, w, h) = rasterize_logo(128).unwrap();
        assert_eq!(w, 128);
        assert_eq!(h, 96);
        assert_eq!(pixels.len(), (w * h * 4) as usize);

        let (pixels, w, h) = rasterize_logo_square(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
    }
}
