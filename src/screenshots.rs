use anyhow::{anyhow, Result};

/// One named screenshot: `name` addresses the file, `label` is shown to the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screenshot {
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotSet {
    base: String,
    shots: Vec<Screenshot>,
}

const SNOWIFY_SCREENS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("artist", "Artist"),
    ("lyrics", "Lyrics"),
    ("playlist", "Playlist"),
    ("login", "Login"),
    ("discord-rpc", "Discord RPC"),
];

impl ScreenshotSet {
    pub fn new(base: &str, pairs: &[(&str, &str)]) -> Result<Self> {
        if pairs.is_empty() {
            return Err(anyhow!("A screenshot set needs at least one screenshot"));
        }
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            shots: pairs
                .iter()
                .map(|(name, label)| Screenshot {
                    name: name.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        })
    }

    pub fn snowify(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            shots: SNOWIFY_SCREENS
                .iter()
                .map(|(name, label)| Screenshot {
                    name: name.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Screenshot> {
        self.shots.get(index)
    }

    pub fn url(&self, index: usize) -> Option<String> {
        self.get(index)
            .map(|shot| format!("{}/{}.png", self.base, shot.name))
    }

    pub fn alt(&self, index: usize) -> Option<String> {
        self.get(index)
            .map(|shot| format!("Snowify {} Screen", shot.label))
    }

    pub fn next_index(&self, index: usize) -> usize {
        if index + 1 < self.len() {
            index + 1
        } else {
            0
        }
    }

    pub fn previous_index(&self, index: usize) -> usize {
        if index > 0 {
            index - 1
        } else {
            self.len() - 1
        }
    }
}
