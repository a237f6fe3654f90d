//! Staggered scroll reveal for `[data-animate]` elements

use crate::constants::*;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// The parent an element is staggered within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u32);

pub trait RevealView: Send + Sync + 'static {
    fn reveal(&self, element: ElementId);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub element: ElementId,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f32,
    pub root_margin_bottom_px: i32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin_bottom_px: REVEAL_ROOT_MARGIN_BOTTOM_PX,
        }
    }
}

impl ObserverOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.root_margin_bottom_px)
    }
}

pub struct ScrollReveal<V: RevealView> {
    view: Arc<V>,
    stagger: Duration,
    observed: Mutex<HashMap<ElementId, Duration>>,
    group_sizes: Mutex<HashMap<GroupId, u32>>,
    timers: Mutex<Vec<JoinHandle<()>>>,
}

impl<V: RevealView> ScrollReveal<V> {
    pub fn new(view: V) -> Self {
        Self::with_stagger(view, Duration::from_millis(REVEAL_STAGGER_MS))
    }

    pub fn with_stagger(view: V, stagger: Duration) -> Self {
        Self {
            view: Arc::new(view),
            stagger,
            observed: Mutex::new(HashMap::new()),
            group_sizes: Mutex::new(HashMap::new()),
            timers: Mutex::new(Vec::new()),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Register elements in document order; an element's delay is its position in its group.
    pub fn observe(&self, element: ElementId, group: GroupId) {
        let index = {
            let mut sizes = self.group_sizes.lock();
            let size = sizes.entry(group).or_insert(0);
            *size += 1;
            *size - 1
        };
        self.observed.lock().insert(element, self.stagger * index);
    }

    pub fn is_observed(&self, element: ElementId) -> bool {
        self.observed.lock().contains_key(&element)
    }

    /// Schedule every newly visible element and stop observing it. Returns how many were scheduled.
    pub fn on_intersection(&self, entries: &[Intersection]) -> usize {
        let mut scheduled = 0;
        let mut timers = self.timers.lock();
        timers.retain(|handle| !handle.is_finished());

        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            let Some(delay) = self.observed.lock().remove(&entry.element) else {
                continue;
            };
            trace!("Revealing {:?} in {:?}", entry.element, delay);
            let view = Arc::clone(&self.view);
            let element = entry.element;
            timers.push(tokio::spawn(async move {
                time::sleep(delay).await;
                view.reveal(element);
            }));
            scheduled += 1;
        }
        scheduled
    }

    /// Fallback for hosts without an intersection observer: show everything now.
    pub fn reveal_all(&self) {
        let observed: Vec<ElementId> = self.observed.lock().drain().map(|(id, _)| id).collect();
        for element in observed {
            self.view.reveal(element);
        }
    }
}

impl<V: RevealView> Drop for ScrollReveal<V> {
    fn drop(&mut self) {
        for handle in self.timers.lock().drain(..) {
            handle.abort();
        }
    }
}
