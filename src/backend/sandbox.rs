use anyhow::Context;
use std::path::PathBuf;

use super::Backend;
use crate::tables::{
    KEY_CONTENT_REGION, KEY_KEYBOARD_LAYOUT, KEY_PRODUCT, KEY_SW_RELEASE_VER, KEY_WLAN_CHANNEL,
};

const VALUES: &[(&str, &str)] = &[
    (KEY_WLAN_CHANNEL, "etsi/eu"),
    (KEY_KEYBOARD_LAYOUT, "English, Dutch"),
    (KEY_CONTENT_REGION, "Britain"),
    (KEY_PRODUCT, "SB"),
    (KEY_SW_RELEASE_VER, "SB_FREMANTLE_1.2009.33-2_PR_MR0"),
];

/// Fixed answers for the Scratchbox development environment.
pub struct SandboxBackend {
    marker: PathBuf,
}

impl SandboxBackend {
    pub fn new(marker: PathBuf) -> Self {
        Self { marker }
    }
}

impl Backend for SandboxBackend {
    fn name(&self) -> &str {
        "sandbox"
    }

    fn init(&self) -> anyhow::Result<()> {
        std::fs::metadata(&self.marker)
            .with_context(|| format!("stat sandbox marker {}", self.marker.display()))?;
        Ok(())
    }

    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(VALUES
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, value)| value.to_string()))
    }
}
