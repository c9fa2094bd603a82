use super::geometry::CanvasSize;
use super::sentence::Character;
use bevy::math::Vec2;
use rand::Rng;

pub const DEFAULT_STEP_NUMBER_FOR_RETURN: f32 = 20.0;
pub const DEFAULT_CHARACTER_SPEED: f32 = 3.0;

/// Distance (per axis) under which a returning character snaps onto its base
pub const SNAP_DISTANCE: f32 = 5.0;

/// Travel directions are compared rounded to 5 decimals
const DIRECTION_PRECISION: f32 = 1e5;

/// Per-run tuning of the scatter/return motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    /// Roughly how many frames a return takes, regardless of distance
    pub step_number_for_return: f32,
    /// Upper bound (exclusive) of a scatter impulse per axis
    pub character_speed: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        MotionParams {
            step_number_for_return: DEFAULT_STEP_NUMBER_FOR_RETURN,
            character_speed: DEFAULT_CHARACTER_SPEED,
        }
    }
}

/// What a character looked like at the start of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionState {
    pub pointer_inside: bool,
    pub is_moving: bool,
    pub is_at_base: bool,
}

impl MotionState {
    pub fn of(character: &Character, pointer_inside: bool) -> Self {
        MotionState {
            pointer_inside,
            is_moving: character.is_moving(),
            is_at_base: character.is_at_base(),
        }
    }
}

/// -1 or 1 with equal probability
pub fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { -1.0 } else { 1.0 }
}

/// Scatter impulse: each axis in `(-speed, speed)`
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> Vec2 {
    let x = rng.random::<f32>() * speed * random_sign(rng);
    let y = rng.random::<f32>() * speed * random_sign(rng);
    Vec2::new(x, y)
}

fn direction_key(vector: Vec2) -> f32 {
    (vector.y.atan2(vector.x) * DIRECTION_PRECISION).round()
}

/// Proportional step back toward base, or `None` if the character is already
/// heading there (or standing still)
pub fn velocity_for_return(
    base_coordinates: Vec2,
    coordinates: Vec2,
    velocity: Vec2,
    is_moving: bool,
    step_number_for_return: f32,
) -> Option<Vec2> {
    let diff = base_coordinates - coordinates;
    let is_returning = direction_key(diff) == direction_key(velocity);

    if !is_returning && is_moving {
        Some(diff / step_number_for_return)
    } else {
        None
    }
}

/// Turn the velocity back toward the canvas on any axis that left it.
/// Magnitudes come from `previous`, the velocity the frame started with.
pub fn stay_in_canvas(
    coordinates: Vec2,
    previous: Vec2,
    glyph_width: f32,
    canvas: CanvasSize,
    mut velocity: Vec2,
) -> Vec2 {
    if coordinates.x + glyph_width > canvas.width {
        velocity.x = -previous.x.abs();
    } else if coordinates.x < 0.0 {
        velocity.x = previous.x.abs();
    }

    if coordinates.y > canvas.height {
        velocity.y = -previous.y.abs();
    } else if coordinates.y - glyph_width < 0.0 {
        velocity.y = previous.y.abs();
    }

    velocity
}

/// Next-frame velocity. `coordinates` is the freshly updated position;
/// rules run in order, later ones overriding earlier ones.
pub fn update_velocity<R: Rng + ?Sized>(
    coordinates: Vec2,
    character: &Character,
    state: MotionState,
    canvas: CanvasSize,
    params: MotionParams,
    rng: &mut R,
) -> Vec2 {
    let mut velocity = character.velocity;

    if !state.pointer_inside {
        if let Some(step) = velocity_for_return(
            character.base_coordinates,
            coordinates,
            character.velocity,
            state.is_moving,
            params.step_number_for_return,
        ) {
            velocity = step;
        }

        if state.is_at_base {
            velocity = Vec2::ZERO;
        }
    } else if !state.is_moving {
        velocity = random_velocity(rng, params.character_speed);
    }

    stay_in_canvas(
        coordinates,
        character.velocity,
        character.width,
        canvas,
        velocity,
    )
}

/// Next-frame position: snap home when close and unhovered, otherwise integrate
pub fn update_coordinates(character: &Character, pointer_inside: bool) -> Vec2 {
    if !pointer_inside {
        let offset = character.coordinates - character.base_coordinates;
        if offset.x.abs() < SNAP_DISTANCE && offset.y.abs() < SNAP_DISTANCE {
            return character.base_coordinates;
        }
    }

    character.coordinates + character.velocity
}

/// Advance one character by a single frame
pub fn step_character<R: Rng + ?Sized>(
    character: &Character,
    pointer_inside: bool,
    canvas: CanvasSize,
    params: MotionParams,
    rng: &mut R,
) -> Character {
    let state = MotionState::of(character, pointer_inside);
    let coordinates = update_coordinates(character, pointer_inside);
    let velocity = update_velocity(coordinates, character, state, canvas, params, rng);

    Character {
        coordinates,
        velocity,
        ..*character
    }
}
