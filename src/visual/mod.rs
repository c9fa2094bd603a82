pub mod glyphs;
pub mod plugin;

pub use glyphs::{CanvasSettings, GlyphFrame, GlyphMeasure, GlyphSlot, WordsState};
pub use plugin::WordsPlugin;
