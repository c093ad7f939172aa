//! Utility functions

use crate::assets::AssetError;
use crate::constants::APP_NAME;
use std::path::PathBuf;

/// Rasterize an SVG at the given width, preserving aspect ratio.
/// Returns straight-alpha RGBA pixels with their dimensions.
pub fn rasterize_svg(svg: &str, width: u32) -> Result<(Vec<u8>, u32, u32), AssetError> {
    let tree = resvg::usvg::Tree::from_str(svg, &resvg::usvg::Options::default())?;
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or(AssetError::Pixmap { width, height })?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok((premul_to_straight(&pixmap), width, height))
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

/// Get the per-user data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 5"><rect width="10" height="5" fill="#ff0000"/></svg>"##;

    #[test]
    fn test_rasterize_keeps_aspect_ratio() {
        let (pixels, w, h) = rasterize_svg(SQUARE, 40).unwrap();
        assert_eq!((w, h), (40, 20));
        assert_eq!(pixels.len(), 40 * 20 * 4);
        assert_eq!(&pixels[..4], &[0xff, 0, 0, 0xff]);
    }

    #[test]
    fn test_rasterize_rejects_garbage() {
        assert!(rasterize_svg("not an svg", 16).is_err());
    }

    #[test]
    fn test_data_dir_is_app_scoped() {
        assert!(get_data_dir().ends_with(APP_NAME));
    }
}
