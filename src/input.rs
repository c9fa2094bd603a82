use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

use crate::text::PointerCell;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerPosition>()
            .add_systems(PreUpdate, track_pointer);
    }
}

/// Latest pointer position in canvas coordinates (logical pixels, top-left origin)
#[derive(Resource, Default, Debug, Clone)]
pub struct PointerPosition(pub PointerCell);

fn track_pointer(
    mut ev_cursor: MessageReader<CursorMoved>,
    mut touch_events: MessageReader<TouchInput>,
    pointer: Res<PointerPosition>,
) {
    // last event wins; window coordinates already share the canvas origin
    let mut latest = None;

    for e in ev_cursor.read() {
        latest = Some(e.position);
    }

    for ev in touch_events.read() {
        if matches!(ev.phase, TouchPhase::Started | TouchPhase::Moved) {
            latest = Some(ev.position);
        }
    }

    if let Some(position) = latest {
        pointer.0.store(position);
    }
}
