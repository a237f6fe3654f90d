//! Snowfall session: particle field, drawing surface, frame loop and resize handling.
//!
//! Exactly one frame loop runs at a time. Hiding the page aborts it; showing the
//! page spawns a new one, whose first frame is drawn immediately.

use crate::constants::*;
use crate::debounce::Debouncer;
use crate::particles::ParticleField;
use crate::surface::Surface;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

pub fn frame_period() -> Duration {
    Duration::from_micros(1_000_000 / TARGET_FPS)
}

struct Scene<S, R: Rng> {
    field: ParticleField<R>,
    surface: S,
}

pub struct Snowfall<S, R = StdRng>
where
    S: Surface,
    R: Rng + Send + 'static,
{
    scene: Arc<Mutex<Scene<S, R>>>,
    frame_task: Mutex<Option<JoinHandle<()>>>,
    frames: Arc<AtomicU64>,
    resize: Debouncer,
}

impl<S, R> Snowfall<S, R>
where
    S: Surface,
    R: Rng + Send + 'static,
{
    /// Sizes `surface` to the field's bounds. Nothing is drawn until [`Snowfall::start`].
    pub fn new(mut surface: S, field: ParticleField<R>, resize_debounce: Duration) -> Self {
        surface.set_size(field.width() as u32, field.height() as u32);
        Self {
            scene: Arc::new(Mutex::new(Scene { field, surface })),
            frame_task: Mutex::new(None),
            frames: Arc::new(AtomicU64::new(0)),
            resize: Debouncer::new(resize_debounce),
        }
    }

    pub fn start(&self) -> bool {
        let mut task = self.frame_task.lock();
        if task.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return false;
        }

        let scene = Arc::clone(&self.scene);
        let frames = Arc::clone(&self.frames);
        *task = Some(tokio::spawn(async move {
            let mut ticker = time::interval(frame_period());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                {
                    let mut scene = scene.lock();
                    let Scene { field, surface } = &mut *scene;
                    field.render_frame(surface);
                }
                frames.fetch_add(1, Ordering::Relaxed);
            }
        }));
        debug!("Snowfall frame loop started");
        true
    }

    pub fn stop(&self) -> bool {
        match self.frame_task.lock().take() {
            Some(handle) => {
                handle.abort();
                debug!("Snowfall frame loop stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame_task
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn set_visibility(&self, visibility: Visibility) {
        trace!("Page visibility changed: {:?}", visibility);
        match visibility {
            Visibility::Hidden => {
                self.stop();
            }
            Visibility::Visible => {
                self.start();
            }
        }
    }

    /// Debounced: only the last size of a burst is applied, after the quiet period.
    pub fn on_resize(&self, width: u32, height: u32) {
        let scene = Arc::clone(&self.scene);
        self.resize.call(move || {
            let mut scene = scene.lock();
            scene.surface.set_size(width, height);
            scene.field.resize(width, height);
            scene.field.reinitialize();
            debug!(
                "Snowfall resized to {}x{} with {} particles",
                width,
                height,
                scene.field.len()
            );
        });
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    pub fn with_field<T>(&self, f: impl FnOnce(&ParticleField<R>) -> T) -> T {
        f(&self.scene.lock().field)
    }

    pub fn with_surface<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        f(&self.scene.lock().surface)
    }
}

impl<S, R> Drop for Snowfall<S, R>
where
    S: Surface,
    R: Rng + Send + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}
