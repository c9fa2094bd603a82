use bevy::prelude::*;

use bevy::window::WindowResolution;
use canvas_words::camera::CameraPlugin;
use canvas_words::config::CanvasConfig;
use canvas_words::input::InputPlugin;
use canvas_words::visual::WordsPlugin;

fn main() {
    // Optional path to a JSON configuration, the bundled one otherwise
    let requested = std::env::args().nth(1).map(CanvasConfig::from_path);
    let config = match &requested {
        Some(Ok(config)) => config.clone(),
        _ => CanvasConfig::load_default().expect("Failed to parse bundled canvas_words.json"),
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Canvas Words".into(),
            resolution: WindowResolution::new(
                config.canvas.width.round() as u32,
                config.canvas.height.round() as u32,
            ),
            resizable: true,
            ..default()
        }),
        ..default()
    }));

    if let Some(Err(err)) = &requested {
        error!("{} - falling back to the bundled configuration", err);
    }

    app.add_plugins(CameraPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(WordsPlugin { config });

    app.run();
}
