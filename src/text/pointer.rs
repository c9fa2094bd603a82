use bevy::math::Vec2;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Latest pointer position relative to the surface.
///
/// Written by the input side, read once per frame by the simulation. Both
/// axes live in one atomic word, so a snapshot never mixes two updates.
#[derive(Debug, Clone, Default)]
pub struct PointerCell {
    packed: Arc<AtomicU64>,
}

impl PointerCell {
    pub fn new(position: Vec2) -> Self {
        PointerCell {
            packed: Arc::new(AtomicU64::new(pack(position))),
        }
    }

    pub fn store(&self, position: Vec2) {
        self.packed.store(pack(position), Ordering::Release);
    }

    pub fn snapshot(&self) -> Vec2 {
        unpack(self.packed.load(Ordering::Acquire))
    }
}

fn pack(position: Vec2) -> u64 {
    ((position.x.to_bits() as u64) << 32) | position.y.to_bits() as u64
}

fn unpack(packed: u64) -> Vec2 {
    Vec2::new(
        f32::from_bits((packed >> 32) as u32),
        f32::from_bits(packed as u32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin() {
        assert_eq!(PointerCell::default().snapshot(), Vec2::ZERO);
    }

    #[test]
    fn test_store_and_snapshot() {
        let cell = PointerCell::new(Vec2::new(1.0, 2.0));
        cell.store(Vec2::new(-12.5, 300.25));

        assert_eq!(cell.snapshot(), Vec2::new(-12.5, 300.25));
    }

    #[test]
    fn test_clones_share_the_position() {
        let writer = PointerCell::default();
        let reader = writer.clone();

        writer.store(Vec2::new(42.0, 7.0));
        assert_eq!(reader.snapshot(), Vec2::new(42.0, 7.0));
    }
}
