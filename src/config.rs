use crate::text::{
    CanvasSize, DEFAULT_CHARACTER_SPEED, DEFAULT_COLOR, DEFAULT_STEP_NUMBER_FOR_RETURN, DrawMode,
    Font, MotionParams, Sentence,
};
use bevy::math::Vec2;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_JSON: &str = include_str!("../assets/canvas_words.json");

pub const DEFAULT_BACKGROUND: &str = "white";

/// Error types for loading a canvas configuration
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    InvalidFontSize(String),
    InvalidColor(String),
    InvalidCanvasSize { width: f32, height: f32 },
    InvalidTunable { name: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Cannot read {}: {}", path.display(), source)
            }
            ConfigError::Parse(err) => write!(f, "Invalid configuration JSON: {}", err),
            ConfigError::InvalidFontSize(size) => {
                write!(f, "Font size {:?} is not a pixel size", size)
            }
            ConfigError::InvalidColor(color) => write!(f, "Unknown color {:?}", color),
            ConfigError::InvalidCanvasSize { width, height } => {
                write!(f, "Canvas size {}x{} is not usable", width, height)
            }
            ConfigError::InvalidTunable { name, value } => {
                write!(f, "{} must be positive, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Font sizes arrive either as CSS pixel strings ("10px") or bare numbers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FontSizeJson {
    Pixels(f32),
    Css(String),
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct PointJson {
    x: f32,
    y: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SentenceJson {
    text: String,
    coordinates: PointJson,
    font_family: String,
    font_size: FontSizeJson,
    color: Option<String>,
    draw_mode: Option<DrawMode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CanvasJson {
    canvas_width: f32,
    canvas_height: f32,
    background_color: Option<String>,
    #[serde(default)]
    sentences: Vec<SentenceJson>,
    step_number_for_return: Option<f32>,
    character_speed: Option<f32>,
}

/// Validated configuration of a words canvas
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub canvas: CanvasSize,
    pub background_color: String,
    pub sentences: Vec<Sentence>,
    pub motion: MotionParams,
}

impl CanvasConfig {
    /// The configuration bundled with the binary
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_CONFIG_JSON)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse camelCase JSON, filling in defaults and validating sizes and tunables
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: CanvasJson = serde_json::from_str(json)?;

        let canvas = CanvasSize::new(raw.canvas_width, raw.canvas_height);
        if !is_non_negative(canvas.width) || !is_non_negative(canvas.height) {
            return Err(ConfigError::InvalidCanvasSize {
                width: canvas.width,
                height: canvas.height,
            });
        }

        let background_color = raw
            .background_color
            .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string());

        let motion = MotionParams {
            step_number_for_return: positive_tunable(
                "stepNumberForReturn",
                raw.step_number_for_return
                    .unwrap_or(DEFAULT_STEP_NUMBER_FOR_RETURN),
            )?,
            character_speed: positive_tunable(
                "characterSpeed",
                raw.character_speed.unwrap_or(DEFAULT_CHARACTER_SPEED),
            )?,
        };

        let sentences = raw
            .sentences
            .into_iter()
            .map(sentence_from_json)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CanvasConfig {
            canvas,
            background_color,
            sentences,
            motion,
        })
    }
}

fn sentence_from_json(raw: SentenceJson) -> Result<Sentence, ConfigError> {
    let size = match raw.font_size {
        FontSizeJson::Pixels(size) if is_non_negative(size) => size,
        FontSizeJson::Pixels(size) => return Err(ConfigError::InvalidFontSize(size.to_string())),
        FontSizeJson::Css(size) => parse_font_size(&size)?,
    };

    // Colors stay as written; the host resolves them and falls back on unknown names
    let color = raw.color.unwrap_or_else(|| DEFAULT_COLOR.to_string());

    Ok(Sentence::new(
        raw.text,
        Vec2::new(raw.coordinates.x, raw.coordinates.y),
        Font::new(size, raw.font_family),
    )
    .with_color(color)
    .with_draw_mode(raw.draw_mode.unwrap_or_default()))
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn positive_tunable(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidTunable { name, value })
    }
}

/// Parse "10px" or "10" into a pixel size
pub fn parse_font_size(size: &str) -> Result<f32, ConfigError> {
    let trimmed = size.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();

    match number.parse::<f32>() {
        Ok(value) if is_non_negative(value) => Ok(value),
        _ => Err(ConfigError::InvalidFontSize(size.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "canvasWidth": 100,
        "canvasHeight": 80,
        "sentences": [
            { "text": "ab c", "coordinates": { "x": 0, "y": 20 }, "fontFamily": "sans", "fontSize": "10px" }
        ]
    }"#;

    #[test]
    fn test_defaults_are_filled_in() {
        let config = CanvasConfig::from_json(SCENARIO).unwrap();

        assert_eq!(config.canvas, CanvasSize::new(100.0, 80.0));
        assert_eq!(config.background_color, "white");
        assert_eq!(config.motion, MotionParams::default());
        assert_eq!(config.motion.step_number_for_return, 20.0);
        assert_eq!(config.motion.character_speed, 3.0);

        let sentence = &config.sentences[0];
        assert_eq!(sentence.text, "ab c");
        assert_eq!(sentence.coordinates, Vec2::new(0.0, 20.0));
        assert_eq!(sentence.font, Font::new(10.0, "sans"));
        assert_eq!(sentence.color, "black");
        assert_eq!(sentence.draw_mode, DrawMode::Fill);
    }

    #[test]
    fn test_full_configuration() {
        let json = r##"{
            "canvasWidth": 640,
            "canvasHeight": 480,
            "backgroundColor": "#101820",
            "stepNumberForReturn": 35,
            "characterSpeed": 1.5,
            "sentences": [
                {
                    "text": "hello",
                    "coordinates": { "x": 12.5, "y": 40 },
                    "fontFamily": "serif",
                    "fontSize": 24,
                    "color": "orange",
                    "drawMode": "strokeText"
                }
            ]
        }"##;

        let config = CanvasConfig::from_json(json).unwrap();
        assert_eq!(config.motion.step_number_for_return, 35.0);
        assert_eq!(config.motion.character_speed, 1.5);
        assert_eq!(config.background_color, "#101820");

        let sentence = &config.sentences[0];
        assert_eq!(sentence.font, Font::new(24.0, "serif"));
        assert_eq!(sentence.color, "orange");
        assert_eq!(sentence.draw_mode, DrawMode::Stroke);
    }

    #[test]
    fn test_font_size_parsing() {
        assert_eq!(parse_font_size("10px").unwrap(), 10.0);
        assert_eq!(parse_font_size(" 12.5px ").unwrap(), 12.5);
        assert_eq!(parse_font_size("16").unwrap(), 16.0);
        assert!(matches!(
            parse_font_size("large"),
            Err(ConfigError::InvalidFontSize(_))
        ));
        assert!(parse_font_size("-4px").is_err());
    }

    #[test]
    fn test_any_css_color_is_accepted() {
        let json = r#"{
            "canvasWidth": 100,
            "canvasHeight": 80,
            "backgroundColor": "rgb(16, 24, 32)",
            "sentences": [
                { "text": "ab", "coordinates": { "x": 0, "y": 20 }, "fontFamily": "sans", "fontSize": "10px", "color": "navy" }
            ]
        }"#;

        let config = CanvasConfig::from_json(json).unwrap();
        assert_eq!(config.background_color, "rgb(16, 24, 32)");
        assert_eq!(config.sentences[0].color, "navy");
    }

    #[test]
    fn test_unknown_color_does_not_reject_config() {
        let json = r#"{
            "canvasWidth": 100,
            "canvasHeight": 80,
            "backgroundColor": "nope",
            "sentences": [
                { "text": "ab", "coordinates": { "x": 0, "y": 20 }, "fontFamily": "sans", "fontSize": "10px", "color": "hsl(120 50% 50%)" }
            ]
        }"#;

        let config = CanvasConfig::from_json(json).unwrap();
        assert_eq!(config.sentences.len(), 1);
        assert_eq!(config.sentences[0].color, "hsl(120 50% 50%)");
    }

    #[test]
    fn test_rejects_bad_tunables() {
        let json = r#"{ "canvasWidth": 10, "canvasHeight": 10, "stepNumberForReturn": 0 }"#;

        assert!(matches!(
            CanvasConfig::from_json(json),
            Err(ConfigError::InvalidTunable {
                name: "stepNumberForReturn",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_negative_canvas() {
        let json = r#"{ "canvasWidth": -1, "canvasHeight": 10 }"#;

        assert!(matches!(
            CanvasConfig::from_json(json),
            Err(ConfigError::InvalidCanvasSize { .. })
        ));
    }

    #[test]
    fn test_zero_width_canvas_is_allowed() {
        let json = r#"{ "canvasWidth": 0, "canvasHeight": 10, "sentences": [] }"#;

        let config = CanvasConfig::from_json(json).unwrap();
        assert!(config.sentences.is_empty());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = CanvasConfig::from_json("{ not json").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid configuration JSON"));
    }

    #[test]
    fn test_missing_file() {
        let err = CanvasConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_bundled_configuration_loads() {
        let config = CanvasConfig::load_default().unwrap();

        assert!(!config.sentences.is_empty());
        assert!(config.canvas.width > 0.0);
        assert!(crate::color::parse_color(&config.background_color).is_ok());
        for sentence in &config.sentences {
            assert_eq!(sentence.draw_mode, DrawMode::Fill);
            assert!(crate::color::parse_color(&sentence.color).is_ok());
        }
    }
}
