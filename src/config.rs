use crate::constants::*;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Duration;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub repo: String,
    pub api_base: String,
    pub screenshots_base: String,
    pub autoplay_interval: Duration,
    pub transition_step: Duration,
    pub load_timeout: Duration,
    pub resize_debounce: Duration,
    pub user_agent: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            screenshots_base: screenshots_base_for(DEFAULT_REPO),
            autoplay_interval: Duration::from_millis(AUTOPLAY_INTERVAL_MS),
            transition_step: Duration::from_millis(TRANSITION_STEP_MS),
            load_timeout: Duration::from_millis(LOAD_TIMEOUT_MS),
            resize_debounce: Duration::from_millis(RESIZE_DEBOUNCE_MS),
            user_agent: None,
        }
    }
}

pub fn screenshots_base_for(repo: &str) -> String {
    format!("https://raw.githubusercontent.com/{repo}/main/assets/screenshots")
}

impl SiteConfig {
    /// Build the config from `SNOWIFY_*` variables, falling back to the defaults.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(repo) = lookup("SNOWIFY_REPO") {
            config.screenshots_base = screenshots_base_for(&repo);
            config.repo = repo;
        }
        if let Some(api_base) = lookup("SNOWIFY_API_BASE") {
            config.api_base = api_base.trim_end_matches('/').to_string();
        }
        if let Some(base) = lookup("SNOWIFY_SCREENSHOTS_BASE") {
            config.screenshots_base = base.trim_end_matches('/').to_string();
        }

        let millis = |key: &str, default: Duration| -> Result<Duration> {
            let Some(value) = lookup(key) else {
                return Ok(default);
            };
            let millis = value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{key} must be a whole number of milliseconds, got {value:?}"))?;
            if millis == 0 {
                return Err(anyhow!("{key} must be > 0"));
            }
            Ok(Duration::from_millis(millis))
        };

        config.autoplay_interval = millis("SNOWIFY_AUTOPLAY_MS", config.autoplay_interval)?;
        config.transition_step = millis("SNOWIFY_TRANSITION_MS", config.transition_step)?;
        config.load_timeout = millis("SNOWIFY_LOAD_TIMEOUT_MS", config.load_timeout)?;
        config.resize_debounce = millis("SNOWIFY_RESIZE_DEBOUNCE_MS", config.resize_debounce)?;
        config.user_agent = lookup("SNOWIFY_USER_AGENT");

        debug!("Loaded site config: {:?}", config);
        Ok(config)
    }

    pub fn releases_url(&self) -> String {
        format!("{}/repos/{}/releases", self.api_base, self.repo)
    }

    pub fn releases_page(&self) -> String {
        format!("https://github.com/{}/releases", self.repo)
    }
}
