//! App module - contains the main application state and logic

mod views;

use crate::assets;
use crate::confetti::{BurstConfig, Confetti, ParticleEffect};
use crate::settings::Settings;
use crate::state::PleaState;
use crate::theme;
use crate::ui::components::FILL_FAMILY;
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) plea: PleaState,
    pub(crate) confetti: Confetti,
    pub(crate) illustration: Option<egui::TextureHandle>,
    // Last measured card height, used to centre it vertically
    pub(crate) card_height: f32,
    // Settings
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// "No": one more rejection. Returns false once the plea was accepted.
pub(crate) fn reject_plea(plea: &mut PleaState) -> bool {
    if plea.is_accepted() {
        return false;
    }
    *plea = plea.reject();
    debug!(
        count = plea.rejection_count(),
        message = plea.pleading_message().unwrap_or_default(),
        "Plea rejected"
    );
    true
}

/// "Yes": moves to the accepted screen and fires the celebration burst.
/// Only the first call has any effect.
pub(crate) fn accept_plea(plea: &mut PleaState, effect: &mut impl ParticleEffect) -> bool {
    if plea.is_accepted() {
        return false;
    }
    *plea = plea.accept();
    effect.trigger(&BurstConfig::celebration());
    info!(rejections = plea.rejection_count(), "Plea accepted");
    true
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, data_dir: PathBuf) -> Self {
        // Add Phosphor icons: regular as a Proportional fallback, fill as its own family
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        fonts.font_data.insert(
            FILL_FAMILY.to_owned(),
            std::sync::Arc::new(egui_phosphor::Variant::Fill.font_data()),
        );
        fonts
            .families
            .insert(egui::FontFamily::Name(FILL_FAMILY.into()), vec![FILL_FAMILY.to_owned()]);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let illustration = match assets::load_illustration(&cc.egui_ctx) {
            Ok(texture) => {
                debug!(size = ?texture.size(), "Illustration loaded");
                Some(texture)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load illustration");
                None
            }
        };

        Self {
            plea: PleaState::new(),
            confetti: Confetti::default(),
            illustration,
            card_height: 0.0,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    pub fn on_reject(&mut self) {
        reject_plea(&mut self.plea);
    }

    pub fn on_accept(&mut self) {
        if accept_plea(&mut self.plea, &mut self.confetti) {
            debug!(particles = self.confetti.particle_count(), "Confetti burst started");
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}
