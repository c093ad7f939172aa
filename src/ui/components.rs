//! Reusable UI components
//!
//! Icons, the pill buttons and the small keyframe-style animations shared by
//! both screens.

use crate::theme;
use eframe::egui;
use std::f32::consts::PI;

/// Font family holding the filled Phosphor glyphs
pub const FILL_FAMILY: &str = "phosphor-fill";

/// Glyphs are never rasterized above this size; bigger buttons scale the box
const MAX_GLYPH_SIZE: f32 = 512.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Heart,
    HeartBreak,
    Sparkle,
}

impl Icon {
    pub fn glyph(self, filled: bool) -> &'static str {
        use egui_phosphor::{fill, regular};
        match (self, filled) {
            (Icon::Heart, false) => regular::HEART,
            (Icon::Heart, true) => fill::HEART,
            (Icon::HeartBreak, false) => regular::HEART_BREAK,
            (Icon::HeartBreak, true) => fill::HEART_BREAK,
            (Icon::Sparkle, false) => regular::SPARKLE,
            (Icon::Sparkle, true) => fill::SPARKLE,
        }
    }
}

fn icon_font(size: f32, filled: bool) -> egui::FontId {
    if filled {
        egui::FontId::new(size, egui::FontFamily::Name(FILL_FAMILY.into()))
    } else {
        egui::FontId::proportional(size)
    }
}

/// Paint an icon centred on `center`. With `fill` set, the filled glyph is
/// painted underneath the outline in that color.
pub fn paint_icon(
    painter: &egui::Painter,
    center: egui::Pos2,
    icon: Icon,
    size: f32,
    color: egui::Color32,
    fill: Option<egui::Color32>,
) {
    if let Some(fill) = fill {
        painter.text(center, egui::Align2::CENTER_CENTER, icon.glyph(true), icon_font(size, true), fill);
    }
    painter.text(center, egui::Align2::CENTER_CENTER, icon.glyph(false), icon_font(size, false), color);
}

/// Filled icon rotated by `angle` radians, used for background decoration
pub fn paint_icon_rotated(
    painter: &egui::Painter,
    center: egui::Pos2,
    icon: Icon,
    size: f32,
    color: egui::Color32,
    angle: f32,
) {
    let galley = painter.layout_no_wrap(icon.glyph(true).to_owned(), icon_font(size, true), color);
    // TextShape rotates around its top-left corner
    let half = galley.size() / 2.0;
    let (sin, cos) = angle.sin_cos();
    let rotated_half = egui::vec2(half.x * cos - half.y * sin, half.x * sin + half.y * cos);
    painter.add(egui::epaint::TextShape::new(center - rotated_half, galley, color).with_angle(angle));
}

/// Allocate a square and paint an icon in it, optionally lifted by `offset_y`
pub fn icon(
    ui: &mut egui::Ui,
    icon: Icon,
    size: f32,
    color: egui::Color32,
    fill: Option<egui::Color32>,
    offset_y: f32,
) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        paint_icon(ui.painter(), rect.center() + egui::vec2(0.0, offset_y), icon, size, color, fill);
    }
}

/// Outer size of a pill button
pub fn pill_size(ui: &egui::Ui, label: &str, font_size: f32, padding: egui::Vec2) -> egui::Vec2 {
    let render_size = font_size.min(MAX_GLYPH_SIZE);
    let galley = ui.painter().layout_no_wrap(
        label.to_owned(),
        egui::FontId::proportional(render_size),
        theme::TEXT_ON_BUTTON,
    );
    galley.size() * (font_size / render_size) + padding * 2.0
}

/// Rounded button sized by its font and padding. Stays clickable at any size
/// or opacity.
pub fn pill_button(
    ui: &mut egui::Ui,
    label: &str,
    font_size: f32,
    padding: egui::Vec2,
    fill: egui::Color32,
    opacity: f32,
) -> egui::Response {
    let size = pill_size(ui, label, font_size, padding);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, fill, rect);
        let radius = (draw_rect.height() / 2.0).min(255.0) as u8;
        let painter = ui.painter();
        painter.rect_filled(draw_rect, radius, fill.gamma_multiply(opacity));

        let text_size = (font_size * draw_rect.height() / rect.height()).min(MAX_GLYPH_SIZE);
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(text_size),
            theme::TEXT_ON_BUTTON.gamma_multiply(opacity),
        );
    }

    response
}

/// Opacity for a 2 s fade between 1.0 and 0.5, shifted by `delay` seconds
pub fn pulse_alpha(time: f64, delay: f64) -> f32 {
    let phase = ((time - delay) / 2.0).rem_euclid(1.0) as f32;
    0.75 + 0.25 * (phase * 2.0 * PI).cos()
}

/// Vertical lift for a 1 s bounce, as a fraction of `height` (always <= 0)
pub fn bounce_offset(time: f64, height: f32) -> f32 {
    let phase = time.rem_euclid(1.0) as f32;
    -0.25 * height * (phase * PI).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_range() {
        assert!((pulse_alpha(0.0, 0.0) - 1.0).abs() < 1e-6);
        assert!((pulse_alpha(1.0, 0.0) - 0.5).abs() < 1e-6);
        for i in 0..100 {
            let a = pulse_alpha(i as f64 * 0.037, 0.15);
            assert!((0.5..=1.0).contains(&a));
        }
    }

    #[test]
    fn test_pulse_delay_shifts_phase() {
        assert!((pulse_alpha(0.075, 0.075) - pulse_alpha(0.0, 0.0)).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_lifts_only() {
        assert_eq!(bounce_offset(0.0, 80.0), 0.0);
        assert!((bounce_offset(0.5, 80.0) + 20.0).abs() < 1e-4);
        for i in 0..50 {
            assert!(bounce_offset(i as f64 * 0.1, 96.0) <= 0.0);
        }
    }

    #[test]
    fn test_icon_variants() {
        assert_eq!(Icon::Heart.glyph(false), egui_phosphor::regular::HEART);
        assert_eq!(Icon::HeartBreak.glyph(false), egui_phosphor::regular::HEART_BREAK);
        assert_ne!(Icon::Heart.glyph(false), Icon::HeartBreak.glyph(false));
    }
}
