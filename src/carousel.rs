//! Screenshot carousel
//!
//! A two-phase presenter: an accepted [`Carousel::go_to`] slides the current
//! image out, preloads the target off-screen, slides it in and settles back to
//! [`Phase::Idle`]. An auto-play task advances forward on a fixed interval and
//! is rescheduled from scratch on every manual navigation.
//!
//! All timing goes through `tokio::time`, so the whole sequence can be driven
//! by a paused test clock.

use crate::config::SiteConfig;
use crate::loader::ImageLoader;
use crate::screenshots::ScreenshotSet;
use anyhow::anyhow;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn out_class(self) -> &'static str {
        match self {
            Direction::Left => "slide-out-left",
            Direction::Right => "slide-out-right",
        }
    }

    pub fn in_class(self) -> &'static str {
        match self {
            Direction::Left => "slide-in-left",
            Direction::Right => "slide-in-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

pub trait CarouselView: Send + Sync + 'static {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_image(&self, src: &str, alt: &str);
    /// Force a synchronous layout so the next class change is animated.
    fn reflow(&self);
    fn set_label(&self, label: &str);
    fn set_dot_active(&self, index: usize, active: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    /// Each half of a transition: out before the load, settle after it.
    pub step: Duration,
    pub autoplay: Duration,
    pub load_timeout: Duration,
}

impl From<&SiteConfig> for CarouselTiming {
    fn from(config: &SiteConfig) -> Self {
        Self {
            step: config.transition_step,
            autoplay: config.autoplay_interval,
            load_timeout: config.load_timeout,
        }
    }
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

struct State {
    current: usize,
    phase: Phase,
}

#[derive(Default)]
struct AutoPlay {
    enabled: bool,
    handle: Option<JoinHandle<()>>,
}

struct Target {
    index: usize,
    src: String,
    alt: String,
    label: String,
}

struct Shared<V, L> {
    shots: ScreenshotSet,
    view: V,
    loader: L,
    timing: CarouselTiming,
    state: Mutex<State>,
    autoplay: Mutex<AutoPlay>,
}

pub struct Carousel<V, L>
where
    V: CarouselView,
    L: ImageLoader,
{
    shared: Arc<Shared<V, L>>,
}

impl<V, L> Carousel<V, L>
where
    V: CarouselView,
    L: ImageLoader,
{
    /// Shows the first screenshot's label and dot. Auto-play stays off until [`Carousel::start`].
    pub fn new(shots: ScreenshotSet, view: V, loader: L, timing: CarouselTiming) -> Self {
        if let Some(first) = shots.get(0) {
            view.set_label(&first.label);
        }
        let shared = Arc::new(Shared {
            shots,
            view,
            loader,
            timing,
            state: Mutex::new(State {
                current: 0,
                phase: Phase::Idle,
            }),
            autoplay: Mutex::new(AutoPlay::default()),
        });
        shared.update_dots(0);
        Self { shared }
    }

    pub fn current(&self) -> usize {
        self.shared.state.lock().current
    }

    pub fn phase(&self) -> Phase {
        self.shared.state.lock().phase
    }

    pub fn len(&self) -> usize {
        self.shared.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.shots.is_empty()
    }

    pub fn view(&self) -> &V {
        &self.shared.view
    }

    pub fn start(&self) {
        self.shared.autoplay.lock().enabled = true;
        Shared::restart_autoplay(&self.shared);
    }

    pub fn stop(&self) {
        let mut autoplay = self.shared.autoplay.lock();
        autoplay.enabled = false;
        if let Some(handle) = autoplay.handle.take() {
            handle.abort();
        }
    }

    /// Returns whether a transition was started. Must run inside a tokio runtime.
    pub fn go_to(&self, index: usize, direction: Option<Direction>) -> bool {
        let accepted = Shared::begin(&self.shared, index, direction);
        if accepted {
            Shared::restart_autoplay(&self.shared);
        }
        accepted
    }

    pub fn next(&self) -> bool {
        let target = self.shared.shots.next_index(self.current());
        self.go_to(target, Some(Direction::Left))
    }

    pub fn previous(&self) -> bool {
        let target = self.shared.shots.previous_index(self.current());
        self.go_to(target, Some(Direction::Right))
    }
}

impl<V, L> Drop for Carousel<V, L>
where
    V: CarouselView,
    L: ImageLoader,
{
    fn drop(&mut self) {
        self.stop();
    }
}

impl<V, L> Shared<V, L>
where
    V: CarouselView,
    L: ImageLoader,
{
    fn begin(shared: &Arc<Self>, index: usize, direction: Option<Direction>) -> bool {
        let (direction, target) = {
            let mut state = shared.state.lock();
            if index == state.current || state.phase == Phase::Transitioning {
                trace!("Ignoring carousel move to {}", index);
                return false;
            }
            let Some(shot) = shared.shots.get(index) else {
                debug!("Carousel index {} out of range", index);
                return false;
            };
            let direction = direction.unwrap_or(if index > state.current {
                Direction::Left
            } else {
                Direction::Right
            });
            state.phase = Phase::Transitioning;

            let target = Target {
                index,
                src: shared.shots.url(index).unwrap_or_default(),
                alt: shared.shots.alt(index).unwrap_or_default(),
                label: shot.label.clone(),
            };
            (direction, target)
        };

        shared.view.add_class(direction.out_class());

        let task = Arc::clone(shared);
        tokio::spawn(async move { task.transition(target, direction).await });
        true
    }

    async fn transition(&self, target: Target, direction: Direction) {
        time::sleep(self.timing.step).await;

        let load = self.loader.load(&target.src);
        let loaded = match time::timeout(self.timing.load_timeout, load).await {
            Ok(result) => result,
            Err(_) => Err(anyhow!("timed out after {:?}", self.timing.load_timeout)),
        };

        match loaded {
            Ok(()) => {
                self.view.remove_class(direction.out_class());
                self.view.add_class(direction.in_class());
                self.view.set_image(&target.src, &target.alt);
                self.view.reflow();
                self.view.remove_class(direction.in_class());

                self.state.lock().current = target.index;
                self.view.set_label(&target.label);
                self.update_dots(target.index);
                debug!("Carousel showing {}", target.src);
            }
            Err(e) => {
                // The previous image slides back in and stays current.
                debug!("Could not load screenshot {}: {:#}", target.src, e);
                self.view.remove_class(direction.out_class());
            }
        }

        time::sleep(self.timing.step).await;
        self.state.lock().phase = Phase::Idle;
    }

    fn update_dots(&self, current: usize) {
        for index in 0..self.shots.len() {
            self.view.set_dot_active(index, index == current);
        }
    }

    fn restart_autoplay(shared: &Arc<Self>) {
        let mut autoplay = shared.autoplay.lock();
        if let Some(handle) = autoplay.handle.take() {
            handle.abort();
        }
        if !autoplay.enabled {
            return;
        }

        let weak = Arc::downgrade(shared);
        let interval = shared.timing.autoplay;
        autoplay.handle = Some(tokio::spawn(Self::autoplay_loop(weak, interval)));
    }

    async fn autoplay_loop(weak: Weak<Self>, interval: Duration) {
        loop {
            time::sleep(interval).await;
            let Some(shared) = weak.upgrade() else {
                break;
            };
            let target = shared.shots.next_index(shared.state.lock().current);
            trace!("Auto-play advancing to {}", target);
            Self::begin(&shared, target, Some(Direction::Left));
        }
    }
}
