//! Snowify landing page behavior: screenshot presenter, snowfall, release-aware
//! download links and scroll reveal.
//!
//! The page itself (elements, classes, canvas) is reached only through the view
//! and surface traits, so every component runs natively under tokio.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod loader;
pub mod particles;
pub mod platform;
pub mod release;
pub mod reveal;
pub mod screenshots;
pub mod snowfall;
pub mod surface;
pub mod tabs;

pub use carousel::{Carousel, CarouselTiming, CarouselView, Direction, Phase};
pub use config::SiteConfig;
pub use loader::{HttpImageLoader, ImageLoader};
pub use particles::{Particle, ParticleField};
pub use platform::{DownloadCards, Platform};
pub use release::{refresh_download_targets, DownloadTargets, Release, ReleaseClient};
pub use reveal::ScrollReveal;
pub use screenshots::ScreenshotSet;
pub use snowfall::{Snowfall, Visibility};
pub use surface::{DrawBuffer, Surface};
pub use tabs::{TabOutcome, TabSwitcher, TabView};
