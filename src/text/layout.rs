use super::geometry::Boundary;
use super::measure::TextMeasure;
use super::sentence::{Character, ConfiguredSentence, Sentence};
use bevy::math::Vec2;

/// Running boundary of one sentence while its words are being placed
/// The value is only handed out by `finish`, once every word is known
#[derive(Debug, Clone, Copy)]
struct BoundaryAccumulator {
    bounds: Boundary,
}

impl BoundaryAccumulator {
    fn new(anchor: Vec2, margin_top: f32, line_height: f32) -> Self {
        let y1 = anchor.y + margin_top;
        BoundaryAccumulator {
            bounds: Boundary::new(anchor.x, y1, anchor.x, y1 - line_height),
        }
    }

    /// Another wrapped line pushes the lower edge down
    fn wrap(&mut self, line_height: f32) {
        self.bounds.y1 += line_height;
    }

    fn extend_to(&mut self, right: f32) {
        self.bounds.x2 = self.bounds.x2.max(right);
    }

    fn left(&self) -> f32 {
        self.bounds.x1
    }

    fn finish(self) -> Boundary {
        self.bounds
    }
}

/// A placed word whose boundary is not known yet
struct PlacedWord {
    text: String,
    characters: Vec<Character>,
}

/// Split sentences into words and glyphs, position them so they fit in
/// `canvas_width`, and tag every word with the boundary of its sentence.
///
/// Sentences stack vertically: each one starts below every wrap consumed by
/// the sentences before it. Output keeps input order, one entry per word.
///
/// Words are split on runs of whitespace, so leading or trailing whitespace
/// yields no empty word and the last word never carries a space glyph.
pub fn configure_sentences<M: TextMeasure + ?Sized>(
    sentences: &[Sentence],
    canvas_width: f32,
    measure: &M,
) -> Vec<ConfiguredSentence> {
    let mut configured = Vec::new();
    let mut margin_top = 0.0;

    for sentence in sentences {
        let (words, boundary) = place_sentence(sentence, canvas_width, measure, &mut margin_top);

        configured.extend(words.into_iter().map(|word| ConfiguredSentence {
            text: word.text,
            font: sentence.font.clone(),
            color: sentence.color.clone(),
            draw_mode: sentence.draw_mode,
            characters: word.characters,
            boundary,
        }));
    }

    log::debug!(
        "configured {} sentences into {} words (canvas width {})",
        sentences.len(),
        configured.len(),
        canvas_width
    );

    configured
}

fn place_sentence<M: TextMeasure + ?Sized>(
    sentence: &Sentence,
    canvas_width: f32,
    measure: &M,
    margin_top: &mut f32,
) -> (Vec<PlacedWord>, Boundary) {
    let font = &sentence.font;
    let anchor = sentence.coordinates;
    let line_height = sentence.line_height();
    let space_width = measure.measure_char(font, ' ');

    let words: Vec<&str> = sentence.text.split_whitespace().collect();
    let mut boundary = BoundaryAccumulator::new(anchor, *margin_top, line_height);
    let mut placed = Vec::with_capacity(words.len());
    let mut margin_left = 0.0;

    for (word_index, word) in words.iter().enumerate() {
        let word_width = measure.measure(font, word);

        if anchor.x + margin_left + word_width > canvas_width {
            *margin_top += line_height;
            margin_left = 0.0;
            boundary.wrap(line_height);
        }

        let y = anchor.y + *margin_top;
        let mut characters = Vec::with_capacity(word.len() + 1);
        let mut word_advance = 0.0;
        let mut last_position = None;

        for value in word.chars() {
            let width = measure.measure_char(font, value);
            let position = Vec2::new(anchor.x + margin_left + word_advance, y);

            characters.push(Character::at_rest(value, position, width));
            word_advance += width;
            last_position = Some(position);
        }

        // The separating space shares the last glyph's position
        let is_last_word = word_index == words.len() - 1;
        if !is_last_word {
            if let Some(position) = last_position {
                characters.push(Character::at_rest(' ', position, space_width));
                word_advance += space_width;
            }
        }

        boundary.extend_to(boundary.left() + margin_left + word_width);

        placed.push(PlacedWord {
            text: (*word).to_string(),
            characters,
        });

        margin_left += word_advance;
    }

    (placed, boundary.finish())
}
