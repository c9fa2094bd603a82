use super::sentence::{DrawMode, Font};
use bevy::math::Vec2;

/// Everything needed to paint one glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphDraw<'a> {
    pub value: char,
    pub coordinates: Vec2,
    pub width: f32,
    pub font: &'a Font,
    pub color: &'a str,
    pub mode: DrawMode,
}

/// Drawing capability supplied by the host
pub trait GlyphSurface {
    /// Erase the previous frame inside the given rectangle
    fn clear_region(&mut self, origin: Vec2, size: Vec2);

    fn draw_glyph(&mut self, glyph: &GlyphDraw<'_>);
}

/// Position part of a drawn glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    pub value: char,
    pub coordinates: Vec2,
    pub width: f32,
}

/// Surface that records one frame's draw calls in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    placements: Vec<GlyphPlacement>,
    clears: usize,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placements(&self) -> &[GlyphPlacement] {
        &self.placements
    }

    /// How many frames were cleared onto this list
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl GlyphSurface for DrawList {
    fn clear_region(&mut self, _origin: Vec2, _size: Vec2) {
        self.placements.clear();
        self.clears += 1;
    }

    fn draw_glyph(&mut self, glyph: &GlyphDraw<'_>) {
        self.placements.push(GlyphPlacement {
            value: glyph.value,
            coordinates: glyph.coordinates,
            width: glyph.width,
        });
    }
}
