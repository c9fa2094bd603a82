use bevy::prelude::*;

use crate::{
    camera::CanvasDimensions,
    color::parse_color,
    config::CanvasConfig,
    input::PointerPosition,
    text::{DrawList, DrawMode, MonospaceMeasure, WordsFrame},
};

/// The configuration currently shown; replacing it triggers a relayout
#[derive(Resource, Debug, Clone)]
pub struct CanvasSettings(pub CanvasConfig);

/// Text metrics used for layout
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct GlyphMeasure(pub MonospaceMeasure);

/// Snapshot the next tick starts from
#[derive(Resource, Debug, Default)]
pub struct WordsState {
    pub frame: Option<WordsFrame>,
}

/// Draw calls of the latest tick, in character order
#[derive(Resource, Debug, Default)]
pub struct GlyphFrame(pub DrawList);

/// A spawned glyph entity, bound to its position in the draw list
#[derive(Component, Debug, Clone, Copy)]
pub struct GlyphSlot {
    pub index: usize,
    pub font_size: f32,
}

/// Canvas glyphs are placed by their baseline-left corner, Text2d by its center
pub fn glyph_center(coordinates: Vec2, width: f32, font_size: f32) -> Vec2 {
    coordinates + Vec2::new(width * 0.5, -font_size * 0.5)
}

/// System: Lay sentences out again whenever the settings or the canvas change
pub fn configure_words(
    mut commands: Commands,
    settings: Res<CanvasSettings>,
    dimensions: Res<CanvasDimensions>,
    measure: Res<GlyphMeasure>,
    mut state: ResMut<WordsState>,
    glyphs: Query<Entity, With<GlyphSlot>>,
) {
    if !settings.is_changed() && !dimensions.is_changed() {
        return;
    }

    let config = &settings.0;
    let frame = WordsFrame::configure(&config.sentences, dimensions.0, config.motion, &measure.0);

    for entity in &glyphs {
        commands.entity(entity).despawn();
    }

    let mut index = 0;
    let mut warned_stroke = false;
    for word in frame.words() {
        let color = parse_color(&word.color).unwrap_or_else(|err| {
            warn!("{} - drawing {:?} in black", err, word.text);
            Color::BLACK
        });

        if word.draw_mode == DrawMode::Stroke && !warned_stroke {
            warn!("Text2d has no outline mode, strokeText words are drawn filled");
            warned_stroke = true;
        }

        for character in &word.characters {
            let center = glyph_center(character.coordinates, character.width, word.font.size);
            let world = dimensions.to_world(center);
            commands.spawn((
                Text2d::new(character.value.to_string()),
                TextFont {
                    font_size: word.font.size,
                    ..default()
                },
                TextColor(color),
                Transform::from_xyz(world.x, world.y, 0.0),
                GlyphSlot {
                    index,
                    font_size: word.font.size,
                },
            ));
            index += 1;
        }
    }

    info!(
        "Laid out {} words ({} glyphs) on a {}x{} canvas",
        frame.words().len(),
        frame.character_count(),
        dimensions.0.width,
        dimensions.0.height
    );

    state.frame = Some(frame);
}

/// System: Run one simulation frame (the per-frame loop lives in the schedule)
pub fn advance_words(
    mut state: ResMut<WordsState>,
    pointer: Res<PointerPosition>,
    mut glyph_frame: ResMut<GlyphFrame>,
) {
    let Some(current) = state.frame.take() else {
        return;
    };

    let mut rng = rand::rng();
    state.frame = Some(current.tick(&pointer.0, &mut glyph_frame.0, &mut rng));
}

/// System: Move glyph entities to the positions drawn this frame
pub fn sync_glyph_entities(
    glyph_frame: Res<GlyphFrame>,
    dimensions: Res<CanvasDimensions>,
    mut glyphs: Query<(&GlyphSlot, &mut Transform)>,
) {
    let placements = glyph_frame.0.placements();

    for (slot, mut transform) in &mut glyphs {
        let Some(placement) = placements.get(slot.index) else {
            continue;
        };

        let center = glyph_center(placement.coordinates, placement.width, slot.font_size);
        let world = dimensions.to_world(center);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }
}
