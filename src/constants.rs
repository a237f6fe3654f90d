//! Site constants
//!
//! Defaults for everything [`crate::config::SiteConfig`] can override from the
//! environment, plus the fixed tuning values of the effects.

// Release source
pub const DEFAULT_REPO: &str = "nyakuoff/Snowify";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const HTTP_USER_AGENT: &str = concat!("snowify-site/", env!("CARGO_PKG_VERSION"));

// Presenter timing (milliseconds)
pub const AUTOPLAY_INTERVAL_MS: u64 = 5000;
pub const TRANSITION_STEP_MS: u64 = 300;
pub const LOAD_TIMEOUT_MS: u64 = 8000;

// Snowfall
pub const RESIZE_DEBOUNCE_MS: u64 = 200;
pub const TARGET_FPS: u64 = 60;
pub const PARTICLE_SPACING: u32 = 15;
pub const MAX_PARTICLES: usize = 80;
pub const SNOW_COLOR: [u8; 3] = [210, 200, 240];

// Particle attribute ranges, [min, max)
pub const RADIUS_RANGE: (f32, f32) = (0.5, 2.5);
pub const SPEED_RANGE: (f32, f32) = (0.15, 0.65);
pub const DRIFT_RANGE: (f32, f32) = (-0.2, 0.2);
pub const OPACITY_RANGE: (f32, f32) = (0.1, 0.6);

// Scroll reveal
pub const REVEAL_STAGGER_MS: u64 = 80;
pub const REVEAL_THRESHOLD: f32 = 0.1;
pub const REVEAL_ROOT_MARGIN_BOTTOM_PX: i32 = -40;
