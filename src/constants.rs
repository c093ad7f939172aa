//! Application constants and configuration

pub const APP_NAME: &str = "Forgive Me";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// YES BUTTON - grows linearly with every "No"
// =============================================================================
// f64 so every extra rejection still changes the size at huge counts
pub const YES_BASE_FONT: f64 = 16.0;
pub const YES_FONT_PER_REJECTION: f64 = 40.0;
pub const YES_PADDING_X: f32 = 32.0;
pub const YES_PADDING_Y: f32 = 8.0;

// =============================================================================
// NO BUTTON - exponential decay, each axis floored on its own
// =============================================================================
pub const NO_DECAY: f32 = 0.85;
pub const NO_BASE_FONT: f32 = 16.0;
pub const NO_MIN_FONT: f32 = 2.0;
pub const NO_BASE_PADDING_Y: f32 = 8.0;
pub const NO_MIN_PADDING_Y: f32 = 1.0;
pub const NO_BASE_PADDING_X: f32 = 24.0;
pub const NO_MIN_PADDING_X: f32 = 2.0;
pub const NO_OPACITY_STEP: f32 = 0.03;
pub const NO_MIN_OPACITY: f32 = 0.1;

// =============================================================================
// THRESHOLDS (strictly greater than)
// =============================================================================
pub const WORRIED_AFTER: u32 = 5;
pub const HEARTBREAK_AFTER: u32 = 8;

// =============================================================================
// COPY
// =============================================================================
pub const TITLE: &str = "Forgive me? 🥺";
pub const WORRIED_ASIDE: &str = "\"I'm really starting to get worried... 😢\"";
pub const YES_LABEL: &str = "Yes";
pub const NO_LABEL: &str = "No";
pub const ACCEPTED_HEADING: &str = "Yay! Thank you! 💖";
pub const ACCEPTED_BODY: &str = "I knew you'd forgive me! I love you so much! ✨";

/// Cycled by rejection count, first entry after the first "No"
pub const PLEADING_MESSAGES: [&str; 16] = [
    "Are you sure? 🥺",
    "Pllleeeeaaassseee? 🥺",
    "I'll give you Chateraise ice cream! 🍦",
    "I'll give you a long massage! 💆‍♂️",
    "I'll be extra good, I promise! ✨",
    "Please don't break my heart... 💔",
    "You're being mean! 😭",
    "I'm gonna cry... 😿",
    "PLEASE PLEASE PLEASE! 🙏",
    "I love you! ❤️",
    "You're the best, please forgive me! ✨",
    "I'll be your bestest friend ever! 🧸",
    "Don't do this to me... 🥺",
    "Look at my puppy eyes! 🐶",
    "I'll listen to everything you say! 👂",
    "I'll be your biggest fan! 📣",
];

// =============================================================================
// CELEBRATION BURST
// =============================================================================
pub const BURST_PARTICLES: usize = 150;
pub const BURST_SPREAD_DEGREES: f32 = 70.0;
pub const BURST_ORIGIN: (f32, f32) = (0.5, 0.6);
pub const BURST_COLORS: [[u8; 3]; 3] = [[0xff, 0xaf, 0xbd], [0xff, 0xc3, 0xa0], [0xff, 0x6b, 0x6b]];
