//! Screen rendering (plea card, celebration card, confetti overlay)

use super::App;
use crate::constants::*;
use crate::state::{Emblem, InteractiveView};
use crate::theme;
use crate::ui::components::{self, bounce_offset, pill_button, pill_size, pulse_alpha, Icon};
use eframe::egui;

const CARD_MARGIN: f32 = 40.0;

/// (normalized position, size, angle in degrees, color, opacity)
const BACKGROUND_HEARTS: [((f32, f32), f32, f32, egui::Color32, f32); 3] = [
    ((0.0, 0.0), 64.0, 12.0, theme::PINK_200, 0.5),
    ((1.0, 1.0), 64.0, -12.0, theme::PINK_200, 0.5),
    ((0.0, 0.5), 48.0, 45.0, theme::PINK_100, 0.3),
];

impl App {
    /// Plea card with the growing/shrinking buttons
    pub(crate) fn render_interactive(&mut self, ui: &mut egui::Ui, view: &InteractiveView) {
        let time = ui.input(|i| i.time);
        paint_background_hearts(ui.painter(), ui.max_rect());

        let mut rejected = false;
        let mut accepted = false;

        let viewport_height = ui.available_height();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let top = ((viewport_height - self.card_height) / 2.0).max(theme::SPACING_MD);
                ui.add_space(top);

                ui.vertical_centered(|ui| {
                    let card_width = (ui.available_width() - theme::SPACING_XL).min(theme::CARD_MAX_WIDTH);
                    let card = theme::card_frame(theme::PINK_100).show(ui, |ui| {
                        ui.set_width(card_width - 2.0 * (CARD_MARGIN + theme::STROKE_CARD));
                        ui.vertical_centered(|ui| {
                            ui.spacing_mut().item_spacing.y = theme::SPACING_LG;

                            match view.emblem {
                                Emblem::Whole => components::icon(
                                    ui,
                                    Icon::Heart,
                                    theme::EMBLEM_SIZE,
                                    theme::PINK_500.gamma_multiply(pulse_alpha(time, 0.0)),
                                    Some(theme::PINK_100),
                                    0.0,
                                ),
                                Emblem::Broken => components::icon(
                                    ui,
                                    Icon::HeartBreak,
                                    theme::EMBLEM_SIZE,
                                    theme::PINK_400,
                                    None,
                                    bounce_offset(time, theme::EMBLEM_SIZE),
                                ),
                            };

                            ui.label(egui::RichText::new(TITLE).size(theme::FONT_TITLE).strong());

                            if view.show_illustration {
                                if let Some(texture) = &self.illustration {
                                    ui.add(
                                        egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                                            .max_width(theme::ILLUSTRATION_MAX_WIDTH)
                                            .corner_radius(theme::RADIUS_IMAGE),
                                    );
                                }
                            }

                            if let Some(message) = view.pleading_message {
                                ui.label(
                                    egui::RichText::new(message)
                                        .size(theme::FONT_PLEA)
                                        .italics()
                                        .color(theme::PINK_500),
                                );
                            }

                            (accepted, rejected) = render_buttons(ui, view);

                            if view.show_worried_aside {
                                ui.label(
                                    egui::RichText::new(WORRIED_ASIDE)
                                        .size(theme::FONT_ASIDE)
                                        .italics()
                                        .color(theme::PINK_300),
                                );
                            }
                        });
                    });
                    self.card_height = card.response.rect.height();
                });
            });

        if rejected {
            self.on_reject();
        }
        if accepted {
            self.on_accept();
        }
    }

    /// Static celebration card, faded in by `fade`
    pub(crate) fn render_accepted(&mut self, ui: &mut egui::Ui, fade: f32) {
        let time = ui.input(|i| i.time);
        ui.set_opacity(fade);

        let top = ((ui.available_height() - self.card_height) / 2.0).max(theme::SPACING_MD);
        ui.add_space(top);

        ui.vertical_centered(|ui| {
            let card = theme::card_frame(theme::PINK_200).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.spacing_mut().item_spacing.y = theme::SPACING_LG;

                    components::icon(
                        ui,
                        Icon::Sparkle,
                        theme::SPARKLE_SIZE,
                        theme::PINK_500,
                        None,
                        bounce_offset(time, theme::SPARKLE_SIZE),
                    );
                    ui.label(
                        egui::RichText::new(ACCEPTED_HEADING)
                            .size(theme::FONT_ACCEPTED_HEADING)
                            .strong()
                            .color(theme::PINK_600),
                    );
                    ui.label(
                        egui::RichText::new(ACCEPTED_BODY)
                            .size(theme::FONT_ACCEPTED_BODY)
                            .color(theme::PINK_400),
                    );

                    let hearts = [
                        (theme::RED_500, 0.0),
                        (theme::PINK_500, 0.075),
                        (theme::ROSE_400, 0.15),
                    ];
                    let row_width = hearts.len() as f32 * theme::SMALL_HEART_SIZE
                        + (hearts.len() - 1) as f32 * theme::SPACING_MD;
                    ui.allocate_ui_with_layout(
                        egui::vec2(row_width, theme::SMALL_HEART_SIZE),
                        egui::Layout::left_to_right(egui::Align::Center),
                        |ui| {
                            ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
                            for (color, delay) in hearts {
                                let color = color.gamma_multiply(pulse_alpha(time, delay));
                                components::icon(ui, Icon::Heart, theme::SMALL_HEART_SIZE, color, Some(color), 0.0);
                            }
                        },
                    );
                });
            });
            self.card_height = card.response.rect.height();
        });
    }

    /// Step and paint the burst above everything else
    pub(crate) fn render_confetti(&mut self, ctx: &egui::Context) {
        if !self.confetti.is_active() {
            return;
        }
        self.confetti.step(ctx.input(|i| i.stable_dt));
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("confetti"),
        ));
        self.confetti.paint(&painter, ctx.screen_rect());
    }
}

/// Yes/No row: side by side when both fit, stacked otherwise.
/// Returns (accepted, rejected).
fn render_buttons(ui: &mut egui::Ui, view: &InteractiveView) -> (bool, bool) {
    let yes_font = view.accept_font_size as f32;
    let yes_padding = egui::vec2(YES_PADDING_X, YES_PADDING_Y);
    let no = view.reject_style;
    let no_padding = egui::vec2(no.padding_x, no.padding_y);

    let yes_size = pill_size(ui, YES_LABEL, yes_font, yes_padding);
    let no_size = pill_size(ui, NO_LABEL, no.font_size, no_padding);
    let row_width = yes_size.x + theme::BUTTON_GAP + no_size.x;
    let available = ui.available_width();

    let yes = |ui: &mut egui::Ui| {
        pill_button(ui, YES_LABEL, yes_font, yes_padding, theme::BTN_YES, 1.0).clicked()
    };
    let no_button = |ui: &mut egui::Ui| {
        pill_button(ui, NO_LABEL, no.font_size, no_padding, theme::BTN_NO, no.opacity).clicked()
    };

    if row_width <= available {
        let height = yes_size.y.max(no_size.y).max(theme::BUTTON_ROW_MIN_HEIGHT);
        ui.allocate_ui_with_layout(
            egui::vec2(available, height),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.add_space((available - row_width) / 2.0);
                let accepted = yes(ui);
                ui.add_space(theme::BUTTON_GAP);
                let rejected = no_button(ui);
                (accepted, rejected)
            },
        )
        .inner
    } else {
        ui.vertical_centered(|ui| {
            ui.spacing_mut().item_spacing.y = theme::BUTTON_GAP;
            let accepted = yes(ui);
            let rejected = no_button(ui);
            (accepted, rejected)
        })
        .inner
    }
}

/// Translucent tilted hearts behind the card. Painted only, never hit-tested.
fn paint_background_hearts(painter: &egui::Painter, rect: egui::Rect) {
    let inset = rect.shrink(theme::SPACING_XL * 2.0);
    for ((nx, ny), size, degrees, color, opacity) in BACKGROUND_HEARTS {
        let center = inset.min + egui::vec2(nx * inset.width(), ny * inset.height());
        components::paint_icon_rotated(
            painter,
            center,
            Icon::Heart,
            size,
            color.gamma_multiply(opacity),
            degrees.to_radians(),
        );
    }
}
