#![allow(dead_code)]

use anyhow::{anyhow, Result};
use parking_lot::Mutex;
use snowify_site::{CarouselView, ImageLoader, TabView};
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use tokio::time;

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

pub const BASE: &str = "https://shots.test/screens";

/// Resolves after `delay`; fails for any URL containing one of `failing`.
#[derive(Default)]
pub struct FakeLoader {
    delay: Duration,
    failing: Vec<String>,
    requests: Mutex<Vec<String>>,
}

impl FakeLoader {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn failing(mut self, fragment: &str) -> Self {
        self.failing.push(fragment.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

impl ImageLoader for FakeLoader {
    fn load(&self, url: &str) -> impl Future<Output = Result<()>> + Send {
        self.requests.lock().push(url.to_string());
        let fail = self.failing.iter().any(|fragment| url.contains(fragment));
        let delay = self.delay;
        let url = url.to_string();
        async move {
            time::sleep(delay).await;
            if fail {
                Err(anyhow!("404 Not Found: {url}"))
            } else {
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    AddClass(String),
    RemoveClass(String),
    SetImage(String),
    Reflow,
    Label(String),
}

#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
    classes: Mutex<HashSet<String>>,
    dots: Mutex<Vec<bool>>,
    image: Mutex<Option<(String, String)>>,
    label: Mutex<String>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.lock().contains(class)
    }

    pub fn has_slide_class(&self) -> bool {
        self.classes.lock().iter().any(|c| c.starts_with("slide-"))
    }

    pub fn active_dots(&self) -> Vec<usize> {
        self.dots
            .lock()
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn dot_count(&self) -> usize {
        self.dots.lock().len()
    }

    pub fn image(&self) -> Option<(String, String)> {
        self.image.lock().clone()
    }

    pub fn label(&self) -> String {
        self.label.lock().clone()
    }
}

impl CarouselView for RecordingView {
    fn add_class(&self, class: &str) {
        self.classes.lock().insert(class.to_string());
        self.events.lock().push(ViewEvent::AddClass(class.to_string()));
    }

    fn remove_class(&self, class: &str) {
        self.classes.lock().remove(class);
        self.events.lock().push(ViewEvent::RemoveClass(class.to_string()));
    }

    fn set_image(&self, src: &str, alt: &str) {
        *self.image.lock() = Some((src.to_string(), alt.to_string()));
        self.events.lock().push(ViewEvent::SetImage(src.to_string()));
    }

    fn reflow(&self) {
        self.events.lock().push(ViewEvent::Reflow);
    }

    fn set_label(&self, label: &str) {
        *self.label.lock() = label.to_string();
        self.events.lock().push(ViewEvent::Label(label.to_string()));
    }

    fn set_dot_active(&self, index: usize, active: bool) {
        let mut dots = self.dots.lock();
        if dots.len() <= index {
            dots.resize(index + 1, false);
        }
        dots[index] = active;
    }
}

#[derive(Default)]
pub struct TabRecorder {
    active: Mutex<Option<usize>>,
    loading: Mutex<Vec<bool>>,
    image: Mutex<Option<String>>,
}

impl TabRecorder {
    pub fn active(&self) -> Option<usize> {
        *self.active.lock()
    }

    pub fn loading_history(&self) -> Vec<bool> {
        self.loading.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.lock().last().copied().unwrap_or(false)
    }

    pub fn image(&self) -> Option<String> {
        self.image.lock().clone()
    }
}

impl TabView for TabRecorder {
    fn set_active_tab(&self, index: usize) {
        *self.active.lock() = Some(index);
    }

    fn set_loading(&self, loading: bool) {
        self.loading.lock().push(loading);
    }

    fn set_image(&self, src: &str, _alt: &str) {
        *self.image.lock() = Some(src.to_string());
    }
}
