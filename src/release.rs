//! Latest-release lookup for the download section
//!
//! The page ships with fallback links to the releases page. When the release
//! listing can be fetched, the links are pointed at the matching assets of the
//! newest release and the badge shows its version. Any failure leaves the
//! fallbacks untouched.

use crate::config::SiteConfig;
use crate::constants::HTTP_USER_AGENT;
use crate::platform::Platform;
use anyhow::{Context, Result};
use serde::de::{IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prerelease: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assets: Vec<Asset>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A release listing read for its head only. Older entries are skipped unparsed.
struct Newest(Option<Release>);

impl<'de> Deserialize<'de> for Newest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NewestVisitor;

        impl<'de> Visitor<'de> for NewestVisitor {
            type Value = Newest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of releases")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Newest, A::Error> {
                let first = seq.next_element::<Release>()?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Newest(first))
            }
        }

        deserializer.deserialize_seq(NewestVisitor)
    }
}

impl Release {
    pub fn asset_for(&self, platform: Platform) -> Option<&Asset> {
        self.assets
            .iter()
            .find(|asset| asset.name.ends_with(platform.asset_suffix()))
    }

    /// `Stable · v2.3.1` / `Beta · v2.4.0-rc1`; `None` without a tag.
    pub fn badge(&self) -> Option<String> {
        let tag = self.tag_name.as_deref()?;
        let version = tag.strip_prefix('v').unwrap_or(tag);
        let channel = if self.prerelease { "Beta" } else { "Stable" };
        Some(format!("{channel} · v{version}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTargets {
    pub windows: String,
    pub linux: String,
    pub badge: Option<String>,
}

impl DownloadTargets {
    pub fn fallback(releases_page: &str) -> Self {
        Self {
            windows: releases_page.to_string(),
            linux: releases_page.to_string(),
            badge: None,
        }
    }

    pub fn get(&self, platform: Platform) -> &str {
        match platform {
            Platform::Windows => &self.windows,
            Platform::Linux => &self.linux,
        }
    }

    fn slot(&mut self, platform: Platform) -> &mut String {
        match platform {
            Platform::Windows => &mut self.windows,
            Platform::Linux => &mut self.linux,
        }
    }

    pub fn apply(&mut self, release: &Release) {
        for platform in Platform::ALL {
            if let Some(asset) = release.asset_for(platform) {
                *self.slot(platform) = asset.browser_download_url.clone();
            }
        }
        if let Some(badge) = release.badge() {
            self.badge = Some(badge);
        }
    }
}

pub struct ReleaseClient {
    http: reqwest::Client,
    url: String,
}

impl ReleaseClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn from_config(http: reqwest::Client, config: &SiteConfig) -> Self {
        Self::new(http, config.releases_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn latest(&self) -> Result<Option<Release>> {
        let Newest(latest) = self
            .http
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, HTTP_USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .with_context(|| format!("requesting {}", self.url))?
            .error_for_status()?
            .json()
            .await
            .context("decoding release listing")?;

        Ok(latest)
    }
}

/// Point `targets` at the newest release. Never fails: errors are logged and the
/// existing targets are kept. Returns whether anything was applied.
pub async fn refresh_download_targets(client: &ReleaseClient, targets: &mut DownloadTargets) -> bool {
    match client.latest().await {
        Ok(Some(release)) => {
            info!(
                "Using release {}",
                release.tag_name.as_deref().unwrap_or("<untagged>")
            );
            targets.apply(&release);
            true
        }
        Ok(None) => {
            debug!("Release listing at {} is empty", client.url());
            false
        }
        Err(e) => {
            debug!("Could not fetch latest release: {:#}", e);
            false
        }
    }
}
