//! Animation driver: the periodic tick/render loop.

use crate::scene::Scene;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

/// Callback invoked with the scene after every tick pass, while the
/// scene lock is still held, so a frame always observes a fully moved
/// scene.
pub type FrameFn = Box<dyn FnMut(&Scene) + Send>;

/// Drives `Scene::tick_all` plus a frame callback at a fixed delay on a
/// background thread.
///
/// The shared scene mutex is the exclusion the engine relies on: a tick
/// pass and any user-facing scene mutation (clicks, bulk edits, clear)
/// never interleave. `start` is idempotent; `stop` joins the worker, so
/// no tick fires after it returns.
pub struct AnimationDriver {
    scene: Arc<Mutex<Scene>>,
    frame: Arc<Mutex<FrameFn>>,
    delay: Duration,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl AnimationDriver {
    /// Default tick delay.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(30);

    /// Create a stopped driver over a shared scene.
    pub fn new(scene: Arc<Mutex<Scene>>, frame: impl FnMut(&Scene) + Send + 'static) -> Self {
        Self {
            scene,
            frame: Arc::new(Mutex::new(Box::new(frame))),
            delay: Self::DEFAULT_DELAY,
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    /// Set the tick delay before starting.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Begin ticking. A no-op while already running.
    pub fn start(&mut self) {
        if self.worker.is_some() {
            return;
        }
        log::info!("animation started, delay {:?}", self.delay);
        self.running.store(true, Ordering::Release);

        let scene = Arc::clone(&self.scene);
        let frame = Arc::clone(&self.frame);
        let running = Arc::clone(&self.running);
        let delay = self.delay;

        self.worker = Some(std::thread::spawn(move || {
            while running.load(Ordering::Acquire) {
                if let (Ok(mut scene), Ok(mut frame)) = (scene.lock(), frame.lock()) {
                    scene.tick_all();
                    (*frame)(&scene);
                }
                std::thread::sleep(delay);
            }
        }));
    }

    /// Stop ticking. The in-flight tick (if any) completes before this
    /// returns; afterwards no further tick fires.
    pub fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        self.running.store(false, Ordering::Release);
        if worker.join().is_err() {
            log::warn!("animation worker panicked");
        }
        log::info!("animation stopped");
    }

    /// Change the tick delay.
    ///
    /// While running this restarts the loop (the new interval does not
    /// apply without a restart); while stopped it just stores the value.
    pub fn set_delay(&mut self, delay: Duration) {
        if self.is_running() {
            self.stop();
            self.delay = delay;
            self.start();
        } else {
            self.delay = delay;
        }
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{BoundaryPath, MotionPath};
    use crate::shapes::{MovingShape, ShapeKind};
    use kurbo::{Point, Size};
    use std::sync::atomic::AtomicUsize;

    fn scene_with_shape() -> Arc<Mutex<Scene>> {
        let mut scene = Scene::new();
        // Bounds far away so the downward leg never clamps mid-test.
        scene.add_shape(
            MovingShape::new(ShapeKind::Rectangle, Point::ZERO, 50.0, 20.0)
                .with_bounds(Size::new(1e9, 1e9))
                .with_motion(MotionPath::Boundary(BoundaryPath::with_deltas(3.0, 4.0))),
        );
        Arc::new(Mutex::new(scene))
    }

    fn wait_for_frames(frames: &AtomicUsize, at_least: usize) {
        for _ in 0..500 {
            if frames.load(Ordering::SeqCst) >= at_least {
                return;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        panic!(
            "driver produced only {} frames",
            frames.load(Ordering::SeqCst)
        );
    }

    #[test]
    fn test_ticks_and_renders_frames() {
        let scene = scene_with_shape();
        let frames = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&frames);

        let mut driver = AnimationDriver::new(Arc::clone(&scene), move |scene| {
            assert_eq!(scene.len(), 1);
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .with_delay(Duration::from_millis(1));

        driver.start();
        wait_for_frames(&frames, 3);
        driver.stop();

        let ticks = frames.load(Ordering::SeqCst);
        let scene = scene.lock().expect("scene lock");
        let shape = scene.shapes().next().expect("shape exists");
        // One move per frame: y advanced by 4 per tick.
        assert_eq!(shape.position.y, ticks as f64 * 4.0);
    }

    #[test]
    fn test_no_frames_after_stop() {
        let scene = scene_with_shape();
        let frames = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&frames);

        let mut driver = AnimationDriver::new(scene, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .with_delay(Duration::from_millis(1));

        driver.start();
        wait_for_frames(&frames, 2);
        driver.stop();

        let after_stop = frames.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(frames.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn test_start_is_idempotent() {
        let scene = scene_with_shape();
        let frames = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&frames);

        let mut driver = AnimationDriver::new(Arc::clone(&scene), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .with_delay(Duration::from_millis(1));

        driver.start();
        driver.start();
        assert!(driver.is_running());
        wait_for_frames(&frames, 3);
        driver.stop();
        assert!(!driver.is_running());

        // A second loop would move the shape more than once per frame.
        let ticks = frames.load(Ordering::SeqCst);
        let scene = scene.lock().expect("scene lock");
        let shape = scene.shapes().next().expect("shape exists");
        assert_eq!(shape.position.y, ticks as f64 * 4.0);
    }

    #[test]
    fn test_stop_when_stopped_is_a_no_op() {
        let scene = scene_with_shape();
        let mut driver = AnimationDriver::new(scene, |_| {});
        driver.stop();
        assert!(!driver.is_running());
    }

    #[test]
    fn test_set_delay_restarts_when_running() {
        let scene = scene_with_shape();
        let frames = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&frames);

        let mut driver = AnimationDriver::new(scene, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .with_delay(Duration::from_millis(1));

        driver.start();
        wait_for_frames(&frames, 1);
        driver.set_delay(Duration::from_millis(2));
        assert!(driver.is_running());
        assert_eq!(driver.delay(), Duration::from_millis(2));

        let before = frames.load(Ordering::SeqCst);
        wait_for_frames(&frames, before + 2);
        driver.stop();
    }

    #[test]
    fn test_set_delay_while_stopped_just_stores() {
        let scene = scene_with_shape();
        let mut driver = AnimationDriver::new(scene, |_| {});
        driver.set_delay(Duration::from_millis(100));
        assert!(!driver.is_running());
        assert_eq!(driver.delay(), Duration::from_millis(100));
    }
}
