//! Embedded artwork and texture loading

use crate::utils::rasterize_svg;
use eframe::egui;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),
    #[error("cannot allocate {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },
}

/// Pleading face shown once the first "No" lands
pub const ILLUSTRATION_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 250 250"><rect width="250" height="250" fill="#fff1f2"/><g fill="#fbcfe8" opacity="0.7"><circle cx="30" cy="40" r="14"/><circle cx="220" cy="60" r="10"/><circle cx="205" cy="215" r="16"/><circle cx="40" cy="200" r="9"/></g><circle cx="125" cy="130" r="88" fill="#fcd34d" stroke="#f59e0b" stroke-width="4"/><ellipse cx="72" cy="150" rx="16" ry="10" fill="#f9a8d4" opacity="0.8"/><ellipse cx="178" cy="150" rx="16" ry="10" fill="#f9a8d4" opacity="0.8"/><path d="M70 92 Q88 78 104 90" fill="none" stroke="#78350f" stroke-width="5" stroke-linecap="round"/><path d="M146 90 Q162 78 180 92" fill="none" stroke="#78350f" stroke-width="5" stroke-linecap="round"/><circle cx="92" cy="122" r="24" fill="#ffffff"/><circle cx="158" cy="122" r="24" fill="#ffffff"/><circle cx="94" cy="126" r="19" fill="#3f2a14"/><circle cx="156" cy="126" r="19" fill="#3f2a14"/><circle cx="101" cy="117" r="7" fill="#ffffff"/><circle cx="163" cy="117" r="7" fill="#ffffff"/><circle cx="88" cy="133" r="3" fill="#ffffff"/><circle cx="150" cy="133" r="3" fill="#ffffff"/><path d="M108 182 Q125 170 142 182" fill="none" stroke="#78350f" stroke-width="5" stroke-linecap="round"/><path d="M178 146 Q186 164 178 174 Q170 164 178 146 Z" fill="#60a5fa"/></svg>"##;

/// Square heart for the window/taskbar icon
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><path d="M128 228 C48 172 16 124 16 84 C16 46 44 22 78 22 C102 22 118 36 128 54 C138 36 154 22 178 22 C212 22 240 46 240 84 C240 124 208 172 128 228 Z" fill="#ec4899"/><path d="M74 54 C56 54 44 68 44 84" fill="none" stroke="#fce7f3" stroke-width="12" stroke-linecap="round"/></svg>"##;

const ILLUSTRATION_RASTER_WIDTH: u32 = 500;

pub fn window_icon(size: u32) -> Result<egui::IconData, AssetError> {
    let (rgba, width, height) = rasterize_svg(ICON_SVG, size)?;
    Ok(egui::IconData { rgba, width, height })
}

/// Load the illustration once, at start-up
pub fn load_illustration(ctx: &egui::Context) -> Result<egui::TextureHandle, AssetError> {
    svg_texture(ctx, "illustration", ILLUSTRATION_SVG, ILLUSTRATION_RASTER_WIDTH)
}

fn svg_texture(
    ctx: &egui::Context,
    name: &str,
    svg: &str,
    width: u32,
) -> Result<egui::TextureHandle, AssetError> {
    let (pixels, w, h) = rasterize_svg(svg, width)?;
    let image = egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels);
    Ok(ctx.load_texture(name, image, egui::TextureOptions::LINEAR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_svgs_parse() {
        let (_, w, h) = rasterize_svg(ILLUSTRATION_SVG, 100).unwrap();
        assert_eq!((w, h), (100, 100));

        let icon = window_icon(64).unwrap();
        assert_eq!((icon.width, icon.height), (64, 64));
        assert_eq!(icon.rgba.len(), 64 * 64 * 4);
    }

    #[test]
    fn test_builtin_illustration_texture() {
        let ctx = egui::Context::default();
        let texture = load_illustration(&ctx).unwrap();
        assert_eq!(texture.size(), [500, 500]);
    }

    #[test]
    fn test_broken_svg_texture_is_an_error() {
        let ctx = egui::Context::default();
        // TextureHandle has no Debug, so no unwrap_err here
        let Err(err) = svg_texture(&ctx, "broken", "<svg", 32) else {
            panic!("expected an error");
        };
        assert!(matches!(err, AssetError::Svg(_)));
    }
}
