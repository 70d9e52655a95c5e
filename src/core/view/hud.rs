//=========================================================================
// HUD
//=========================================================================
//
// Stock view that fades its alpha in and out. Never consumes back press.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{View, ViewCommands, ViewKey};
use crate::core::sequence::{Alpha, FadeSequence, Sequence};

/// Fade duration used when none is configured.
pub const DEFAULT_FADE: Duration = Duration::from_millis(300);

//=== Hud =================================================================

#[derive(Debug, Clone)]
pub struct Hud {
    alpha: Alpha,
    fade_in: Duration,
    fade_out: Duration,
}

impl Hud {
    pub fn new() -> Self {
        Self::with_fades(DEFAULT_FADE, DEFAULT_FADE)
    }

    pub fn with_fades(fade_in: Duration, fade_out: Duration) -> Self {
        Self {
            alpha: Alpha::new(1.0),
            fade_in,
            fade_out,
        }
    }

    /// Handle to the HUD's opacity, for the renderer.
    pub fn alpha(&self) -> Alpha {
        self.alpha.clone()
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ViewKey> View<K> for Hud {
    fn show_sequence(&mut self) -> Box<dyn Sequence> {
        Box::new(FadeSequence::new(self.alpha.clone(), 1.0, self.fade_in))
    }

    fn hide_sequence(&mut self) -> Box<dyn Sequence> {
        Box::new(FadeSequence::new(self.alpha.clone(), 0.0, self.fade_out))
    }

    fn consume_back_pressed(&mut self, _commands: &mut ViewCommands<K>) -> bool {
        false
    }

    fn on_awake(&mut self, start_visible: bool) {
        if !start_visible {
            self.alpha.set(0.0);
        }
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    struct Key;

    impl ViewKey for Key {}

    #[test]
    fn show_fades_in_from_hidden() {
        let mut hud = Hud::with_fades(Duration::from_millis(100), Duration::from_millis(100));
        let alpha = hud.alpha();
        View::<Key>::on_awake(&mut hud, false);

        let mut sequence = View::<Key>::show_sequence(&mut hud);
        assert_eq!(alpha.get(), 0.0);

        sequence.tick(Duration::from_millis(100));
        assert!(!sequence.is_alive());
        assert_eq!(alpha.get(), 1.0);
    }

    #[test]
    fn show_on_visible_hud_keeps_full_alpha() {
        let mut hud = Hud::with_fades(Duration::from_millis(100), Duration::from_millis(100));
        let alpha = hud.alpha();

        let mut sequence = View::<Key>::show_sequence(&mut hud);
        assert_eq!(alpha.get(), 1.0);

        sequence.tick(Duration::from_millis(16));
        assert_eq!(alpha.get(), 1.0);
    }

    #[test]
    fn show_resumes_from_partial_alpha() {
        let mut hud = Hud::with_fades(Duration::from_millis(100), Duration::from_millis(100));
        let alpha = hud.alpha();
        alpha.set(0.4);

        let mut sequence = View::<Key>::show_sequence(&mut hud);
        assert!((alpha.get() - 0.4).abs() < 1e-4);

        sequence.tick(Duration::from_millis(50));
        assert!((alpha.get() - 0.7).abs() < 1e-4);
    }

    #[test]
    fn hidden_start_zeroes_alpha() {
        let mut hud = Hud::new();
        View::<Key>::on_awake(&mut hud, false);
        assert_eq!(hud.alpha().get(), 0.0);
    }

    #[test]
    fn never_consumes_back_press() {
        let mut hud = Hud::new();
        let mut commands = ViewCommands::<Key>::new();
        assert!(!hud.consume_back_pressed(&mut commands));
        assert!(commands.is_empty());
    }
}
