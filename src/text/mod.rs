mod frame;
mod geometry;
mod layout;
mod measure;
mod motion;
mod pointer;
mod sentence;
mod surface;

pub use frame::WordsFrame;
pub use geometry::{Boundary, CanvasSize};
pub use layout::configure_sentences;
pub use measure::{FIRA_MONO_ADVANCE, MonospaceMeasure, TextMeasure};
pub use motion::{
    DEFAULT_CHARACTER_SPEED, DEFAULT_STEP_NUMBER_FOR_RETURN, MotionParams, MotionState,
    SNAP_DISTANCE, random_velocity, step_character, update_coordinates, update_velocity,
};
pub use pointer::PointerCell;
pub use sentence::{Character, ConfiguredSentence, DEFAULT_COLOR, DrawMode, Font, Sentence};
pub use surface::{DrawList, GlyphDraw, GlyphPlacement, GlyphSurface};
