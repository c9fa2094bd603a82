use crate::camera::{CanvasDimensions, sync_canvas_size};
use crate::color::parse_color;
use crate::config::CanvasConfig;
use crate::visual::glyphs::{
    CanvasSettings, GlyphFrame, GlyphMeasure, WordsState, advance_words, configure_words,
    sync_glyph_entities,
};
use bevy::prelude::*;

/// Scattering words on a 2D canvas
pub struct WordsPlugin {
    pub config: CanvasConfig,
}

impl Plugin for WordsPlugin {
    fn build(&self, app: &mut App) {
        let background = parse_color(&self.config.background_color).unwrap_or_else(|err| {
            warn!("{} - using a white background", err);
            Color::WHITE
        });

        app.insert_resource(ClearColor(background))
            .insert_resource(CanvasSettings(self.config.clone()))
            .insert_resource(CanvasDimensions(self.config.canvas))
            .init_resource::<GlyphMeasure>()
            .init_resource::<WordsState>()
            .init_resource::<GlyphFrame>()
            .add_systems(
                Update,
                (
                    sync_canvas_size,
                    // Relayout only on configuration change
                    configure_words,
                    // Per-frame simulation
                    advance_words,
                    sync_glyph_entities,
                )
                    .chain(),
            );
    }
}
