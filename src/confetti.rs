//! Celebration confetti
//!
//! The burst is fire-and-forget: callers hand a `BurstConfig` to a
//! `ParticleEffect` and never look at it again. `Confetti` is the painted
//! implementation. It simulates at a fixed 60 Hz tick and each particle fades
//! out and is dropped after `TICKS_TO_LIVE` ticks.

use crate::constants::*;
use egui::{Color32, Pos2, Rect, Vec2};
use std::f32::consts::PI;

const TICK: f32 = 1.0 / 60.0;
const TICKS_TO_LIVE: u32 = 200;
const START_VELOCITY: f32 = 45.0;
const VELOCITY_DECAY: f32 = 0.9;
const GRAVITY: f32 = 3.0;
const LAUNCH_ANGLE_DEGREES: f32 = 90.0;
const PARTICLE_SIZE: f32 = 9.0;
/// Cap on simulated time per frame so a stalled window doesn't fast-forward
const MAX_FRAME_TIME: f32 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub struct BurstConfig {
    pub particle_count: usize,
    pub spread_degrees: f32,
    /// Normalized to the paint rect, (0, 0) is top-left
    pub origin: (f32, f32),
    pub colors: Vec<Color32>,
}

impl BurstConfig {
    /// The burst fired when the plea is accepted
    pub fn celebration() -> Self {
        Self {
            particle_count: BURST_PARTICLES,
            spread_degrees: BURST_SPREAD_DEGREES,
            origin: BURST_ORIGIN,
            colors: BURST_COLORS
                .iter()
                .map(|[r, g, b]| Color32::from_rgb(*r, *g, *b))
                .collect(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait ParticleEffect {
    fn trigger(&mut self, config: &BurstConfig);
}

#[derive(Debug, Clone)]
struct Particle {
    origin: (f32, f32),
    // Offset from origin in points
    pos: Vec2,
    angle: f32,
    velocity: f32,
    wobble: f32,
    wobble_speed: f32,
    tilt: f32,
    color: Color32,
    tick: u32,
}

impl Particle {
    fn update(&mut self) {
        self.pos.x += self.angle.cos() * self.velocity;
        self.pos.y += self.angle.sin() * self.velocity + GRAVITY;
        self.velocity *= VELOCITY_DECAY;
        self.wobble += self.wobble_speed;
        self.tilt += 0.1;
        self.tick += 1;
    }

    fn alive(&self) -> bool {
        self.tick < TICKS_TO_LIVE
    }

    fn alpha(&self) -> f32 {
        1.0 - self.tick as f32 / TICKS_TO_LIVE as f32
    }

    fn shape(&self, rect: Rect) -> egui::Shape {
        let center = rect.min
            + egui::vec2(self.origin.0 * rect.width(), self.origin.1 * rect.height())
            + self.pos;
        // Narrowing with the wobble reads as the paper flipping over
        let half_w = PARTICLE_SIZE * (0.15 + 0.35 * self.wobble.cos().abs());
        let half_h = PARTICLE_SIZE * 0.3;
        let (sin, cos) = self.tilt.sin_cos();
        let corner = |dx: f32, dy: f32| -> Pos2 {
            center + egui::vec2(dx * cos - dy * sin, dx * sin + dy * cos)
        };
        egui::Shape::convex_polygon(
            vec![
                corner(-half_w, -half_h),
                corner(half_w, -half_h),
                corner(half_w, half_h),
                corner(-half_w, half_h),
            ],
            self.color.gamma_multiply(self.alpha()),
            egui::Stroke::NONE,
        )
    }
}

pub struct Confetti {
    particles: Vec<Particle>,
    accumulator: f32,
    rng: fastrand::Rng,
}

impl Default for Confetti {
    fn default() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }
}

impl Confetti {
    pub fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            particles: Vec::new(),
            accumulator: 0.0,
            rng,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Advance by wall-clock `dt` seconds in whole ticks
    pub fn step(&mut self, dt: f32) {
        if !self.is_active() {
            self.accumulator = 0.0;
            return;
        }
        self.accumulator = (self.accumulator + dt).min(MAX_FRAME_TIME);
        while self.accumulator >= TICK {
            self.accumulator -= TICK;
            self.tick();
        }
    }

    fn tick(&mut self) {
        for p in &mut self.particles {
            p.update();
        }
        self.particles.retain(Particle::alive);
    }

    pub fn paint(&self, painter: &egui::Painter, rect: Rect) {
        painter.extend(self.particles.iter().map(|p| p.shape(rect)));
    }
}

impl ParticleEffect for Confetti {
    fn trigger(&mut self, config: &BurstConfig) {
        if config.colors.is_empty() {
            return;
        }
        let launch = LAUNCH_ANGLE_DEGREES.to_radians();
        let spread = config.spread_degrees.to_radians();
        let rng = &mut self.rng;

        self.particles.reserve(config.particle_count);
        for i in 0..config.particle_count {
            self.particles.push(Particle {
                origin: config.origin,
                pos: Vec2::ZERO,
                // Screen y grows downward, so "up" is a negative angle
                angle: -launch + (0.5 * spread - rng.f32() * spread),
                velocity: START_VELOCITY * 0.5 + rng.f32() * START_VELOCITY,
                wobble: rng.f32() * 10.0,
                wobble_speed: (rng.f32() * 0.1 + 0.05).min(0.11),
                tilt: (rng.f32() * 0.5 + 0.25) * PI,
                color: config.colors[i % config.colors.len()],
                tick: 0,
            });
        }
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Confetti {
        Confetti::with_rng(fastrand::Rng::with_seed(7))
    }

    #[test]
    fn test_celebration_config() {
        let config = BurstConfig::celebration();
        assert_eq!(config.particle_count, 150);
        assert_eq!(config.spread_degrees, 70.0);
        assert_eq!(config.origin, (0.5, 0.6));
        assert_eq!(
            config.colors,
            vec![
                Color32::from_rgb(0xff, 0xaf, 0xbd),
                Color32::from_rgb(0xff, 0xc3, 0xa0),
                Color32::from_rgb(0xff, 0x6b, 0x6b),
            ]
        );
    }

    #[test]
    fn test_trigger_spawns_palette_particles() {
        let mut confetti = seeded();
        assert!(!confetti.is_active());

        let config = BurstConfig::celebration();
        confetti.trigger(&config);

        assert_eq!(confetti.particle_count(), 150);
        assert!(confetti.particles.iter().all(|p| config.colors.contains(&p.color)));
        assert!(confetti.particles.iter().all(|p| p.pos == Vec2::ZERO));
    }

    #[test]
    fn test_particles_launch_upward_within_spread() {
        let mut confetti = seeded();
        confetti.trigger(&BurstConfig::celebration());

        let half_spread = 35.0_f32.to_radians() + 1e-4;
        for p in &confetti.particles {
            let from_vertical = (p.angle + PI / 2.0).abs();
            assert!(from_vertical <= half_spread);
        }

        confetti.step(TICK);
        assert!(confetti.particles.iter().all(|p| p.pos.y < 0.0));
    }

    #[test]
    fn test_burst_self_terminates() {
        let mut confetti = seeded();
        confetti.trigger(&BurstConfig::celebration());

        // 200 ticks at 60 Hz is a bit over three seconds
        for _ in 0..(TICKS_TO_LIVE - 1) {
            confetti.tick();
        }
        assert!(confetti.is_active());
        assert!(confetti.particles.iter().all(|p| p.alpha() > 0.0));

        confetti.tick();
        assert!(!confetti.is_active());
    }

    #[test]
    fn test_step_caps_large_frames() {
        let mut confetti = seeded();
        confetti.trigger(&BurstConfig::celebration());

        confetti.step(60.0);
        let tick = confetti.particles[0].tick;
        assert!(tick <= (MAX_FRAME_TIME / TICK).ceil() as u32);
        assert!(confetti.is_active());
    }

    #[test]
    fn test_empty_palette_is_ignored() {
        let mut confetti = seeded();
        confetti.trigger(&BurstConfig {
            colors: Vec::new(),
            ..BurstConfig::celebration()
        });
        assert!(!confetti.is_active());
    }
}
