use crate::loader::ImageLoader;
use crate::screenshots::ScreenshotSet;
use anyhow::{anyhow, Result};
use parking_lot::Mutex;
use tracing::debug;

pub trait TabView: Send + Sync + 'static {
    fn set_active_tab(&self, index: usize);
    fn set_loading(&self, loading: bool);
    fn set_image(&self, src: &str, alt: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOutcome {
    Shown,
    /// The image failed to load; the previous one is still displayed.
    KeptPrevious,
    /// A newer activation started while this one was loading.
    Superseded,
}

struct Selection {
    active: usize,
    generation: u64,
}

pub struct TabSwitcher<V: TabView, L: ImageLoader> {
    shots: ScreenshotSet,
    view: V,
    loader: L,
    selection: Mutex<Selection>,
}

impl<V: TabView, L: ImageLoader> TabSwitcher<V, L> {
    pub fn new(shots: ScreenshotSet, view: V, loader: L) -> Self {
        view.set_active_tab(0);
        Self {
            shots,
            view,
            loader,
            selection: Mutex::new(Selection {
                active: 0,
                generation: 0,
            }),
        }
    }

    pub fn active(&self) -> usize {
        self.selection.lock().active
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Only the most recent activation may touch the image or the loading state.
    pub async fn activate(&self, index: usize) -> Result<TabOutcome> {
        let (Some(src), Some(alt)) = (self.shots.url(index), self.shots.alt(index)) else {
            return Err(anyhow!(
                "Tab {} out of range (have {})",
                index,
                self.shots.len()
            ));
        };

        let generation = {
            let mut selection = self.selection.lock();
            selection.active = index;
            selection.generation += 1;
            selection.generation
        };

        self.view.set_active_tab(index);
        self.view.set_loading(true);

        let loaded = self.loader.load(&src).await;

        if self.selection.lock().generation != generation {
            return Ok(TabOutcome::Superseded);
        }

        let outcome = match loaded {
            Ok(()) => {
                self.view.set_image(&src, &alt);
                TabOutcome::Shown
            }
            Err(e) => {
                debug!("Could not load screenshot {}: {:#}", src, e);
                TabOutcome::KeptPrevious
            }
        };
        self.view.set_loading(false);
        Ok(outcome)
    }
}
