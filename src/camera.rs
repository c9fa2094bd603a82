use bevy::prelude::*;

use crate::text::CanvasSize;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Current size of the drawing surface, follows the primary window
#[derive(Resource, Debug, Clone, Copy)]
pub struct CanvasDimensions(pub CanvasSize);

impl CanvasDimensions {
    /// Map a canvas point (top-left origin, y down) to 2D world space
    /// (centered origin, y up)
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x - self.0.width * 0.5,
            self.0.height * 0.5 - point.y,
        )
    }
}

/// One world unit per logical pixel, origin at the window center
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Update canvas dimensions when the window is resized
pub fn sync_canvas_size(mut dimensions: ResMut<CanvasDimensions>, windows: Query<&Window>) {
    if let Ok(window) = windows.single() {
        let width = window.width();
        let height = window.height();

        // Only touch the resource on a real change, it triggers a relayout
        if (width - dimensions.0.width).abs() > 0.5 || (height - dimensions.0.height).abs() > 0.5
        {
            dimensions.0 = CanvasSize::new(width, height);
            info!("Canvas resized to {}x{}", width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_world_flips_and_centers() {
        let dimensions = CanvasDimensions(CanvasSize::new(200.0, 100.0));

        assert_eq!(dimensions.to_world(Vec2::ZERO), Vec2::new(-100.0, 50.0));
        assert_eq!(dimensions.to_world(Vec2::new(100.0, 50.0)), Vec2::ZERO);
        assert_eq!(dimensions.to_world(Vec2::new(200.0, 100.0)), Vec2::new(100.0, -50.0));
    }
}
