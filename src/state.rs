//! Interaction state and everything derived from it
//!
//! `PleaState` is the whole model of the screen: a rejection counter and an
//! accepted flag. Transitions consume and return the state, and every visual
//! parameter is a pure function of it so the views never keep their own copy.

use crate::constants::*;

/// Which of the two mutually exclusive screens is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Interactive,
    Accepted,
}

/// Emblem above the title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emblem {
    Whole,
    Broken,
}

/// Geometry and transparency of the shrinking "No" button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RejectStyle {
    pub font_size: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub opacity: f32,
}

/// Everything the interactive screen shows for a given state
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveView {
    pub emblem: Emblem,
    pub show_illustration: bool,
    pub pleading_message: Option<&'static str>,
    pub show_worried_aside: bool,
    pub accept_font_size: f64,
    pub reject_style: RejectStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PleaState {
    rejection_count: u32,
    accepted: bool,
}

impl PleaState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejection_count(&self) -> u32 {
        self.rejection_count
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn screen(&self) -> Screen {
        if self.accepted {
            Screen::Accepted
        } else {
            Screen::Interactive
        }
    }

    /// One more "No". Ignored once accepted.
    #[must_use]
    pub fn reject(self) -> Self {
        if self.accepted {
            return self;
        }
        Self {
            rejection_count: self.rejection_count.saturating_add(1),
            ..self
        }
    }

    /// "Yes". Terminal: there is no way back to the interactive screen.
    #[must_use]
    pub fn accept(self) -> Self {
        Self {
            accepted: true,
            ..self
        }
    }

    /// Exact for every `u32` count; narrowed to `f32` only when painting
    pub fn accept_font_size(&self) -> f64 {
        YES_BASE_FONT + YES_FONT_PER_REJECTION * f64::from(self.rejection_count)
    }

    pub fn reject_style(&self) -> RejectStyle {
        let decay = NO_DECAY.powf(self.rejection_count as f32);
        RejectStyle {
            font_size: (NO_BASE_FONT * decay).max(NO_MIN_FONT),
            padding_x: (NO_BASE_PADDING_X * decay).max(NO_MIN_PADDING_X),
            padding_y: (NO_BASE_PADDING_Y * decay).max(NO_MIN_PADDING_Y),
            opacity: (1.0 - NO_OPACITY_STEP * self.rejection_count as f32).max(NO_MIN_OPACITY),
        }
    }

    pub fn pleading_message(&self) -> Option<&'static str> {
        let n = self.rejection_count.checked_sub(1)? as usize;
        Some(PLEADING_MESSAGES[n % PLEADING_MESSAGES.len()])
    }

    pub fn shows_illustration(&self) -> bool {
        self.rejection_count > 0
    }

    pub fn shows_worried_aside(&self) -> bool {
        self.rejection_count > WORRIED_AFTER
    }

    pub fn emblem(&self) -> Emblem {
        if self.rejection_count > HEARTBREAK_AFTER {
            Emblem::Broken
        } else {
            Emblem::Whole
        }
    }

    /// `None` once accepted
    pub fn interactive_view(&self) -> Option<InteractiveView> {
        if self.accepted {
            return None;
        }
        Some(InteractiveView {
            emblem: self.emblem(),
            show_illustration: self.shows_illustration(),
            pleading_message: self.pleading_message(),
            show_worried_aside: self.shows_worried_aside(),
            accept_font_size: self.accept_font_size(),
            reject_style: self.reject_style(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after_rejections(n: u32) -> PleaState {
        (0..n).fold(PleaState::new(), |s, _| s.reject())
    }

    #[test]
    fn test_rejections_only_count_up() {
        for n in [0, 1, 7, 16, 100] {
            let state = after_rejections(n);
            assert_eq!(state.rejection_count(), n);
            assert!(!state.is_accepted());
            assert_eq!(state.screen(), Screen::Interactive);
            assert!(state.interactive_view().is_some());
        }
    }

    #[test]
    fn test_accept_font_grows_linearly() {
        assert_eq!(after_rejections(0).accept_font_size(), 16.0);
        assert_eq!(after_rejections(10).accept_font_size(), 16.0 + 10.0 * 40.0);

        let mut prev = 0.0;
        for n in 0..50 {
            let size = after_rejections(n).accept_font_size();
            assert!(size > prev);
            prev = size;
        }
    }

    #[test]
    fn test_accept_font_grows_at_huge_counts() {
        for count in [1 << 24, 1 << 29, u32::MAX - 1] {
            let state = PleaState {
                rejection_count: count,
                accepted: false,
            };
            let grown = state.reject().accept_font_size();
            assert!(grown > state.accept_font_size());
            assert_eq!(grown - state.accept_font_size(), YES_FONT_PER_REJECTION);
        }
    }

    #[test]
    fn test_reject_style_starts_at_base() {
        let style = after_rejections(0).reject_style();
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.padding_x, 24.0);
        assert_eq!(style.padding_y, 8.0);
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn test_reject_style_decays_to_floors() {
        let mut prev = after_rejections(0).reject_style();
        for n in 1..200 {
            let style = after_rejections(n).reject_style();
            assert!(style.font_size <= prev.font_size);
            assert!(style.padding_x <= prev.padding_x);
            assert!(style.padding_y <= prev.padding_y);
            assert!(style.opacity <= prev.opacity);

            assert!(style.font_size >= NO_MIN_FONT);
            assert!(style.padding_x >= NO_MIN_PADDING_X);
            assert!(style.padding_y >= NO_MIN_PADDING_Y);
            assert!(style.opacity >= NO_MIN_OPACITY);
            prev = style;
        }

        assert_eq!(prev.font_size, NO_MIN_FONT);
        assert_eq!(prev.padding_x, NO_MIN_PADDING_X);
        assert_eq!(prev.padding_y, NO_MIN_PADDING_Y);
        assert_eq!(prev.opacity, NO_MIN_OPACITY);
    }

    #[test]
    fn test_reject_style_strictly_shrinks_before_floor() {
        let a = after_rejections(1).reject_style();
        let b = after_rejections(2).reject_style();
        assert!(b.font_size < a.font_size);
        assert!(b.padding_x < a.padding_x);
        assert!(b.padding_y < a.padding_y);
        assert!(b.opacity < a.opacity);
    }

    #[test]
    fn test_padding_axes_floor_independently() {
        // 8 * 0.85^13 ~ 0.97 is floored while 24 * 0.85^13 ~ 2.9 is not yet
        let style = after_rejections(13).reject_style();
        assert_eq!(style.padding_y, NO_MIN_PADDING_Y);
        assert!(style.padding_x > NO_MIN_PADDING_X);
    }

    #[test]
    fn test_no_message_before_first_rejection() {
        let state = after_rejections(0);
        assert_eq!(state.pleading_message(), None);
        assert!(!state.shows_illustration());
        assert!(!state.shows_worried_aside());
    }

    #[test]
    fn test_pleading_message_cycles() {
        for k in 1..=40u32 {
            let expected = PLEADING_MESSAGES[((k - 1) % 16) as usize];
            assert_eq!(after_rejections(k).pleading_message(), Some(expected));
        }
        assert_eq!(after_rejections(1).pleading_message(), Some("Are you sure? 🥺"));
        assert_eq!(
            after_rejections(17).pleading_message(),
            after_rejections(1).pleading_message()
        );
        assert_eq!(
            after_rejections(16).pleading_message(),
            Some("I'll be your biggest fan! 📣")
        );
    }

    #[test]
    fn test_worried_aside_threshold() {
        assert!(!after_rejections(5).shows_worried_aside());
        assert!(after_rejections(6).shows_worried_aside());
    }

    #[test]
    fn test_heartbreak_threshold() {
        assert_eq!(after_rejections(8).emblem(), Emblem::Whole);
        assert_eq!(after_rejections(9).emblem(), Emblem::Broken);
    }

    #[test]
    fn test_interactive_view_at_first_rejection() {
        let view = after_rejections(1).interactive_view().unwrap();
        assert_eq!(view.emblem, Emblem::Whole);
        assert!(view.show_illustration);
        assert_eq!(view.pleading_message, Some(PLEADING_MESSAGES[0]));
        assert!(!view.show_worried_aside);
        assert_eq!(view.accept_font_size, 56.0);
    }

    #[test]
    fn test_accept_is_terminal() {
        for n in [0, 3, 9, 42] {
            let state = after_rejections(n).accept();
            assert!(state.is_accepted());
            assert_eq!(state.screen(), Screen::Accepted);
            assert_eq!(state.interactive_view(), None);

            let poked = state.reject().reject().accept();
            assert_eq!(poked, state);
            assert_eq!(poked.rejection_count(), n);
        }
    }

    #[test]
    fn test_counter_saturates() {
        let state = PleaState {
            rejection_count: u32::MAX,
            accepted: false,
        };
        assert_eq!(state.reject().rejection_count(), u32::MAX);
        assert_eq!(state.reject_style().opacity, NO_MIN_OPACITY);
    }
}
