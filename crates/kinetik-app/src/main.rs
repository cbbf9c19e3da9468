//! Headless demo: animate a few shapes against a recording surface.
//!
//! Takes an optional path to a JSON [`SceneConfig`] as its only
//! argument. A real frontend would replace the recording surface with
//! its own `DrawSurface` and feed clicks/resizes from the window.

use kinetik_core::{AnimationDriver, PathKind, Scene, SceneConfig, SceneEvent, ShapeKind};
use kinetik_render::{RecordingSurface, render_scene};
use kurbo::Point;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn load_config() -> SceneConfig {
    let Some(path) = std::env::args().nth(1) else {
        return SceneConfig::default();
    };
    match SceneConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("could not load {path}: {err}; using defaults");
            SceneConfig::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting Kinetik");

    let config = load_config();
    let mut scene = Scene::with_defaults(config.defaults());

    // Seed one shape per motion kind, the way clicks on empty space would.
    scene.handle_event(SceneEvent::Clicked {
        position: Point::new(40.0, 40.0),
    });
    scene.set_current_path_kind(PathKind::Falling);
    scene.handle_event(SceneEvent::Clicked {
        position: Point::new(200.0, 60.0),
    });
    scene.set_current_shape_kind(ShapeKind::LabeledBox);
    scene.set_current_path_kind(PathKind::Wobble);
    scene.handle_event(SceneEvent::Clicked {
        position: Point::new(320.0, 120.0),
    });

    let scene = Arc::new(Mutex::new(scene));

    let mut surface = RecordingSurface::new();
    let mut driver = AnimationDriver::new(Arc::clone(&scene), move |scene| {
        surface.clear();
        match render_scene(scene, &mut surface) {
            Ok(()) => log::debug!("frame: {} draw calls", surface.len()),
            Err(err) => log::error!("frame dropped: {err}"),
        }
    })
    .with_delay(config.delay());

    driver.start();
    std::thread::sleep(Duration::from_secs(1));
    driver.stop();

    if let Ok(scene) = scene.lock() {
        for shape in scene.shapes() {
            log::info!("final {shape}");
        }
    }
}
