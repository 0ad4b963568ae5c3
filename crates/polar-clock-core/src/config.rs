//! Bootstrap configuration.
//!
//! Supplied by the host page as a JSON object; every field is optional.
//!
//! ```json
//! { "mountId": "polar-clock", "layout": "flat", "probeColorGamut": true }
//! ```

use crate::error::BootstrapError;
use crate::flags::FlagsLayout;
use log::LevelFilter;
use serde::Deserialize;
use std::str::FromStr;

/// Id of the element the clock mounts into.
pub const DEFAULT_MOUNT_ID: &str = "polar-clock";

// ─── Revisions ────────────────────────────────────────────────────────────

/// Flag shapes the clock application has accepted over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    /// Nested `dimensions`, no color probe.
    V1,
    /// Nested `dimensions` plus `supportsP3Color`.
    V2,
    /// Flat `width`/`height`, no color probe.
    V3,
}

impl TryFrom<u8> for Revision {
    type Error = BootstrapError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Revision::V1),
            2 => Ok(Revision::V2),
            3 => Ok(Revision::V3),
            other => Err(BootstrapError::InvalidConfig(format!(
                "unknown flags revision {other} (expected 1, 2 or 3)"
            ))),
        }
    }
}

// ─── Config ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BootConfig {
    /// Element id looked up with `getElementById`. Default: **`polar-clock`**.
    pub mount_id: String,

    /// Shape of the serialized flags. Default: **nested**.
    pub layout: FlagsLayout,

    /// Probe `display-p3` support and pass `supportsP3Color`. Default: **false**.
    pub probe_color_gamut: bool,

    /// Fail startup when the host has no style-support query instead of
    /// reporting `supportsP3Color: false`. Default: **false**.
    pub strict_color_probe: bool,

    /// `log` level for the console logger. Default: **info**.
    pub log_level: String,

    /// Shorthand for one of the known flag shapes; overrides `layout` and
    /// `probeColorGamut` when set.
    pub revision: Option<u8>,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            layout: FlagsLayout::Nested,
            probe_color_gamut: false,
            strict_color_probe: false,
            log_level: "info".to_string(),
            revision: None,
        }
    }
}

impl BootConfig {
    pub fn for_revision(revision: Revision) -> Self {
        let (layout, probe_color_gamut) = match revision {
            Revision::V1 => (FlagsLayout::Nested, false),
            Revision::V2 => (FlagsLayout::Nested, true),
            Revision::V3 => (FlagsLayout::Flat, false),
        };
        Self {
            layout,
            probe_color_gamut,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON options object. `null` yields the defaults.
    ///
    /// # Errors
    /// `InvalidConfig` for malformed JSON, unknown fields, an empty mount id,
    /// an unknown revision, or an unparseable log level.
    pub fn from_json(text: &str) -> Result<Self, BootstrapError> {
        let parsed: Option<BootConfig> = serde_json::from_str(text)
            .map_err(|e| BootstrapError::InvalidConfig(format!("bad options: {e}")))?;
        let mut config = parsed.unwrap_or_default();

        if let Some(n) = config.revision {
            let preset = Self::for_revision(Revision::try_from(n)?);
            config.layout = preset.layout;
            config.probe_color_gamut = preset.probe_color_gamut;
        }
        if config.mount_id.trim().is_empty() {
            return Err(BootstrapError::InvalidConfig(
                "mountId must not be empty".to_string(),
            ));
        }
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, BootstrapError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| {
            BootstrapError::InvalidConfig(format!("unknown log level '{}'", self.log_level))
        })
    }
}
