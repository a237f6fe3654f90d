use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Windows, Platform::Linux];

    pub fn asset_suffix(self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::Linux => ".AppImage",
        }
    }

    /// Value of the card's `data-platform` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// Guess the OS family from a user agent. `None` when it is neither Windows nor Linux.
pub fn detect(user_agent: &str) -> Option<Platform> {
    let ua = user_agent.to_lowercase();
    if ua.contains("win") {
        Some(Platform::Windows)
    } else if ua.contains("linux") {
        Some(Platform::Linux)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadCards {
    detected: Option<Platform>,
    show_all: bool,
}

impl DownloadCards {
    pub fn for_user_agent(user_agent: &str) -> Self {
        Self {
            detected: detect(user_agent),
            show_all: false,
        }
    }

    pub fn detected(&self) -> Option<Platform> {
        self.detected
    }

    /// Cards are narrowed to the detected platform until the viewer asks for all of them.
    pub fn is_narrowed(&self) -> bool {
        self.detected.is_some() && !self.show_all
    }

    pub fn is_highlighted(&self, platform: Platform) -> bool {
        self.detected == Some(platform)
    }

    pub fn toggle_visible(&self) -> bool {
        self.is_narrowed()
    }

    pub fn shows_all(&self) -> bool {
        self.show_all
    }

    pub fn show_all(&mut self) {
        if self.detected.is_some() {
            self.show_all = true;
        }
    }
}
