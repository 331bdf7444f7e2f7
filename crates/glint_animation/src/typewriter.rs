//! Typewriter text reveal
//!
//! Reveals a string one character per fixed interval. The animator
//! accumulates frame time, so a long frame catches up by revealing
//! several characters at once, and terminates on its own when the full
//! text is shown.

/// Default reveal interval in milliseconds
pub const DEFAULT_INTERVAL_MS: f32 = 50.0;

/// A character-by-character text reveal
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    interval_ms: f32,
    carry_ms: f32,
    shown: usize,
    playing: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval_ms: f32) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            interval_ms: interval_ms.max(f32::EPSILON),
            carry_ms: 0.0,
            shown: 0,
            playing: false,
        }
    }

    pub fn with_default_interval(text: impl Into<String>) -> Self {
        Self::new(text, DEFAULT_INTERVAL_MS)
    }

    pub fn start(&mut self) {
        self.shown = 0;
        self.carry_ms = 0.0;
        self.playing = true;
        if self.char_count == 0 {
            self.playing = false;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.char_count
    }

    /// The currently revealed prefix
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    /// The full text being revealed
    pub fn full_text(&self) -> &str {
        &self.text
    }

    /// Advance by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.carry_ms += dt_ms;
        while self.carry_ms >= self.interval_ms && self.shown < self.char_count {
            self.carry_ms -= self.interval_ms;
            self.shown += 1;
        }
        if self.shown == self.char_count {
            self.playing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_per_interval() {
        let mut tw = Typewriter::new("hello", 50.0);
        tw.start();
        assert_eq!(tw.visible(), "");

        tw.tick(50.0);
        assert_eq!(tw.visible(), "h");

        tw.tick(50.0);
        assert_eq!(tw.visible(), "he");
    }

    #[test]
    fn test_catches_up_on_long_frame() {
        let mut tw = Typewriter::new("hello", 50.0);
        tw.start();

        tw.tick(175.0);
        assert_eq!(tw.visible(), "hel");
    }

    #[test]
    fn test_terminates_when_complete() {
        let mut tw = Typewriter::new("hi", 50.0);
        tw.start();
        tw.tick(1000.0);

        assert_eq!(tw.visible(), "hi");
        assert!(tw.is_done());
        assert!(!tw.is_playing());

        // Further ticks are inert
        tw.tick(1000.0);
        assert_eq!(tw.visible(), "hi");
    }

    #[test]
    fn test_multibyte_boundaries() {
        let mut tw = Typewriter::new("héllo", 50.0);
        tw.start();
        tw.tick(100.0);
        assert_eq!(tw.visible(), "hé");
    }

    #[test]
    fn test_empty_text() {
        let mut tw = Typewriter::new("", 50.0);
        tw.start();
        assert!(tw.is_done());
        assert!(!tw.is_playing());
        assert_eq!(tw.visible(), "");
    }
}
