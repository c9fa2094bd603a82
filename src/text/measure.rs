use super::sentence::Font;

/// Advance of Fira Mono (Bevy's embedded default font) in em units
pub const FIRA_MONO_ADVANCE: f32 = 0.6;

/// Text metrics supplied by the host surface
/// Must be deterministic for a given font and string
pub trait TextMeasure {
    /// Rendered advance width of `text` in surface pixels
    fn measure(&self, font: &Font, text: &str) -> f32;

    fn measure_char(&self, font: &Font, value: char) -> f32 {
        let mut buffer = [0u8; 4];
        self.measure(font, value.encode_utf8(&mut buffer))
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure(&self, font: &Font, text: &str) -> f32 {
        (**self).measure(font, text)
    }
}

/// Fixed-advance metrics: every glyph is `advance * font.size` wide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
}

impl MonospaceMeasure {
    pub fn new(advance: f32) -> Self {
        MonospaceMeasure { advance }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(FIRA_MONO_ADVANCE)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, font: &Font, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance * font.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_widths() {
        let measure = MonospaceMeasure::new(0.5);
        let font = Font::new(10.0, "sans");

        assert_eq!(measure.measure(&font, "ab c"), 20.0);
        assert_eq!(measure.measure(&font, ""), 0.0);
        assert_eq!(measure.measure_char(&font, 'x'), 5.0);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let measure = MonospaceMeasure::new(1.0);
        let font = Font::new(1.0, "sans");

        assert_eq!(measure.measure(&font, "é✓"), 2.0);
    }
}
