use super::geometry::CanvasSize;
use super::layout::configure_sentences;
use super::measure::TextMeasure;
use super::motion::{MotionParams, step_character};
use super::pointer::PointerCell;
use super::sentence::{Character, ConfiguredSentence, Sentence};
use super::surface::{GlyphDraw, GlyphSurface};
use bevy::math::Vec2;
use rand::Rng;

/// Immutable snapshot of every laid-out word for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct WordsFrame {
    words: Vec<ConfiguredSentence>,
    canvas: CanvasSize,
    params: MotionParams,
}

impl WordsFrame {
    pub fn new(words: Vec<ConfiguredSentence>, canvas: CanvasSize, params: MotionParams) -> Self {
        WordsFrame {
            words,
            canvas,
            params,
        }
    }

    /// Lay the sentences out for this canvas; the result seeds the first frame
    pub fn configure<M: TextMeasure + ?Sized>(
        sentences: &[Sentence],
        canvas: CanvasSize,
        params: MotionParams,
        measure: &M,
    ) -> Self {
        let words = configure_sentences(sentences, canvas.width, measure);
        Self::new(words, canvas, params)
    }

    pub fn words(&self) -> &[ConfiguredSentence] {
        &self.words
    }

    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.words.iter().flat_map(|word| word.characters.iter())
    }

    pub fn character_count(&self) -> usize {
        self.words.iter().map(|word| word.characters.len()).sum()
    }

    /// Clear the canvas and paint every character where it currently is
    pub fn draw<S: GlyphSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear_region(Vec2::ZERO, Vec2::new(self.canvas.width, self.canvas.height));

        for word in &self.words {
            for character in &word.characters {
                surface.draw_glyph(&GlyphDraw {
                    value: character.value,
                    coordinates: character.coordinates,
                    width: character.width,
                    font: &word.font,
                    color: &word.color,
                    mode: word.draw_mode,
                });
            }
        }
    }

    /// The following frame, with the pointer held at `pointer` throughout
    pub fn next<R: Rng + ?Sized>(&self, pointer: Vec2, rng: &mut R) -> Self {
        let words = self
            .words
            .iter()
            .map(|word| {
                let pointer_inside = word.boundary.contains(pointer);
                let characters = word
                    .characters
                    .iter()
                    .map(|character| {
                        step_character(character, pointer_inside, self.canvas, self.params, rng)
                    })
                    .collect();
                word.with_characters(characters)
            })
            .collect();

        Self::new(words, self.canvas, self.params)
    }

    /// One tick of the frame loop: snapshot the pointer, draw, step
    pub fn tick<S, R>(&self, pointer: &PointerCell, surface: &mut S, rng: &mut R) -> Self
    where
        S: GlyphSurface + ?Sized,
        R: Rng + ?Sized,
    {
        let pointer = pointer.snapshot();
        self.draw(surface);
        self.next(pointer, rng)
    }

    /// Whether every character is resting on its base
    pub fn is_settled(&self) -> bool {
        self.characters()
            .all(|character| character.is_at_base() && !character.is_moving())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::measure::MonospaceMeasure;
    use crate::text::sentence::Font;
    use crate::text::surface::DrawList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn scenario() -> WordsFrame {
        let sentences = [Sentence::new(
            "ab c",
            Vec2::new(0.0, 20.0),
            Font::new(10.0, "sans"),
        )];
        WordsFrame::configure(
            &sentences,
            CanvasSize::new(100.0, 100.0),
            MotionParams::default(),
            &MonospaceMeasure::new(0.5),
        )
    }

    #[test]
    fn test_configure_seeds_resting_frame() {
        let frame = scenario();

        assert_eq!(frame.words().len(), 2);
        assert_eq!(frame.character_count(), 4);
        assert!(frame.is_settled());
    }

    #[test]
    fn test_pointer_outside_leaves_frame_unchanged() {
        let frame = scenario();
        let mut rng = StdRng::seed_from_u64(1);

        let next = frame.next(Vec2::new(90.0, 90.0), &mut rng);
        assert_eq!(next, frame);
    }

    #[test]
    fn test_draw_paints_every_character_in_order() {
        let frame = scenario();
        let mut list = DrawList::new();

        frame.draw(&mut list);

        let drawn: String = list.placements().iter().map(|p| p.value).collect();
        assert_eq!(drawn, "ab c");
        assert_eq!(list.clear_count(), 1);
        assert_eq!(list.placements()[3].coordinates, Vec2::new(15.0, 20.0));
    }

    #[test]
    fn test_hover_scatters_then_leaving_settles() {
        let mut frame = scenario();
        let pointer = PointerCell::new(Vec2::new(10.0, 15.0));
        let mut list = DrawList::new();
        let mut rng = StdRng::seed_from_u64(3);

        frame = frame.tick(&pointer, &mut list, &mut rng);
        assert!(frame.characters().all(|c| c.is_moving()));

        for _ in 0..5 {
            frame = frame.tick(&pointer, &mut list, &mut rng);
        }
        assert!(!frame.is_settled());

        pointer.store(Vec2::new(-50.0, -50.0));
        for _ in 0..200 {
            frame = frame.tick(&pointer, &mut list, &mut rng);
        }
        assert!(frame.is_settled());
        assert_eq!(frame, scenario());
    }

    #[test]
    fn test_draw_uses_positions_before_the_step() {
        let frame = scenario();
        let pointer = PointerCell::new(Vec2::new(10.0, 15.0));
        let mut list = DrawList::new();
        let mut rng = StdRng::seed_from_u64(3);

        let next = frame.tick(&pointer, &mut list, &mut rng);
        let after = next.tick(&pointer, &mut list, &mut rng);

        let expected: Vec<Vec2> = next.characters().map(|c| c.coordinates).collect();
        let drawn: Vec<Vec2> = list.placements().iter().map(|p| p.coordinates).collect();
        assert_eq!(drawn, expected);
        assert_ne!(after, next);
    }
}
