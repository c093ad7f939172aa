//! Centralized theme constants for Forgive Me
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0xfd, 0xf2, 0xf8); // pink-50
pub const BG_CARD: Color32 = Color32::WHITE;

// =============================================================================
// COLORS - Pinks
// =============================================================================
pub const PINK_100: Color32 = Color32::from_rgb(0xfc, 0xe7, 0xf3);
pub const PINK_200: Color32 = Color32::from_rgb(0xfb, 0xcf, 0xe8);
pub const PINK_300: Color32 = Color32::from_rgb(0xf9, 0xa8, 0xd4);
pub const PINK_400: Color32 = Color32::from_rgb(0xf4, 0x72, 0xb6);
pub const PINK_500: Color32 = Color32::from_rgb(0xec, 0x48, 0x99);
pub const PINK_600: Color32 = Color32::from_rgb(0xdb, 0x27, 0x77);
pub const ROSE_400: Color32 = Color32::from_rgb(0xfb, 0x71, 0x85);
pub const RED_500: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37); // gray-800
pub const TEXT_ON_BUTTON: Color32 = Color32::WHITE;

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_YES: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e); // green-500
pub const BTN_NO: Color32 = PINK_500;

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 36.0;
pub const FONT_PLEA: f32 = 20.0;
pub const FONT_ASIDE: f32 = 14.0;
pub const FONT_ACCEPTED_HEADING: f32 = 48.0;
pub const FONT_ACCEPTED_BODY: f32 = 24.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CARD_MAX_WIDTH: f32 = 448.0;
pub const ILLUSTRATION_MAX_WIDTH: f32 = 250.0;
pub const EMBLEM_SIZE: f32 = 96.0;
pub const SPARKLE_SIZE: f32 = 80.0;
pub const SMALL_HEART_SIZE: f32 = 48.0;
pub const BUTTON_GAP: f32 = 24.0;
pub const BUTTON_ROW_MIN_HEIGHT: f32 = 150.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 24.0;
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// CORNER RADIUS / STROKE
// =============================================================================
pub const RADIUS_IMAGE: u8 = 16;
pub const RADIUS_CARD: u8 = 24;
pub const STROKE_CARD: f32 = 4.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: BG_BASE,
        window_fill: BG_CARD,
        extreme_bg_color: BG_BASE,
        override_text_color: Some(TEXT_PRIMARY),
        selection: egui::style::Selection {
            bg_fill: PINK_200,
            stroke: egui::Stroke::NONE,
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_SM, SPACING_SM);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = true;
    });
}

// =============================================================================
// HELPER - Card frame
// =============================================================================
pub fn card_frame(border: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(STROKE_CARD, border))
        .corner_radius(RADIUS_CARD)
        .inner_margin(egui::Margin::same(40))
        .shadow(egui::epaint::Shadow {
            offset: [0, 10],
            blur: 30,
            spread: 0,
            color: Color32::from_black_alpha(30),
        })
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Darkens on hover, shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (darken(base_fill, 0.12), rect.shrink2(rect.size() * 0.025))
    } else if response.hovered() {
        (darken(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn darken(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 * (1.0 - amount)) as u8;
    let g = (c.g() as f32 * (1.0 - amount)) as u8;
    let b = (c.b() as f32 * (1.0 - amount)) as u8;
    Color32::from_rgb(r, g, b)
}
