use super::geometry::Boundary;
use bevy::math::Vec2;
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_COLOR: &str = "black";

/// How a glyph is painted on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum DrawMode {
    #[default]
    #[serde(rename = "fillText", alias = "fill")]
    Fill,
    #[serde(rename = "strokeText", alias = "stroke")]
    Stroke,
}

/// Font description used both for measuring and drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Font size in pixels, doubles as the line height
    pub size: f32,
    pub family: String,
}

impl Font {
    pub fn new(size: f32, family: impl Into<String>) -> Self {
        Font {
            size,
            family: family.into(),
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size, self.family)
    }
}

/// A styled piece of text anchored on the surface
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub text: String,
    /// Anchor of the first line's baseline, top-left origin
    pub coordinates: Vec2,
    pub font: Font,
    pub color: String,
    pub draw_mode: DrawMode,
}

impl Sentence {
    pub fn new(text: impl Into<String>, coordinates: Vec2, font: Font) -> Self {
        Sentence {
            text: text.into(),
            coordinates,
            font,
            color: DEFAULT_COLOR.to_string(),
            draw_mode: DrawMode::Fill,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_draw_mode(mut self, draw_mode: DrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }

    /// Height consumed by one wrapped line of this sentence
    pub fn line_height(&self) -> f32 {
        self.font.size
    }
}

/// A single animated glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Character {
    pub value: char,
    pub coordinates: Vec2,
    /// Resting position, fixed at layout time
    pub base_coordinates: Vec2,
    pub velocity: Vec2,
    /// Measured advance width, fixed at layout time
    pub width: f32,
}

impl Character {
    /// Create a character resting at its base position
    pub fn at_rest(value: char, base_coordinates: Vec2, width: f32) -> Self {
        Character {
            value,
            coordinates: base_coordinates,
            base_coordinates,
            velocity: Vec2::ZERO,
            width,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.velocity.x != 0.0 || self.velocity.y != 0.0
    }

    pub fn is_at_base(&self) -> bool {
        self.coordinates.x == self.base_coordinates.x
            && self.coordinates.y == self.base_coordinates.y
    }
}

/// One laid-out word: the sentence's style, the word's glyphs and the
/// boundary of the wrapped sentence it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguredSentence {
    pub text: String,
    pub font: Font,
    pub color: String,
    pub draw_mode: DrawMode,
    pub characters: Vec<Character>,
    pub boundary: Boundary,
}

impl ConfiguredSentence {
    /// Same word with a fresh set of characters
    pub fn with_characters(&self, characters: Vec<Character>) -> Self {
        ConfiguredSentence {
            characters,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_string() {
        let font = Font::new(10.0, "sans");
        assert_eq!(font.to_string(), "10px sans");

        let font = Font::new(12.5, "Fira Mono");
        assert_eq!(font.to_string(), "12.5px Fira Mono");
    }

    #[test]
    fn test_sentence_defaults() {
        let sentence = Sentence::new("hi", Vec2::new(0.0, 20.0), Font::new(10.0, "sans"));

        assert_eq!(sentence.color, "black");
        assert_eq!(sentence.draw_mode, DrawMode::Fill);
        assert_eq!(sentence.line_height(), 10.0);
    }

    #[test]
    fn test_character_classification() {
        let mut character = Character::at_rest('a', Vec2::new(3.0, 4.0), 5.0);

        assert!(character.is_at_base());
        assert!(!character.is_moving());

        character.velocity = Vec2::new(0.0, -1.0);
        assert!(character.is_moving());

        character.coordinates.x += 0.5;
        assert!(!character.is_at_base());
    }
}
