//! `InitConfig`: the flags record handed to the clock application.
//!
//! The record is built once and never mutated. Its wire shape depends on the
//! configured [`FlagsLayout`]:
//!
//! ```text
//! nested: { "currentTime": 1700000000000, "dimensions": { "width": 1920, "height": 1080 } }
//! flat:   { "currentTime": 1700000000000, "width": 1920, "height": 1080 }
//! ```
//!
//! `supportsP3Color` is appended only when the color-gamut probe ran.

use crate::host::Viewport;
use serde::{Deserialize, Serialize, Serializer};

/// Where the viewport dimensions live in the serialized flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagsLayout {
    /// `dimensions: { width, height }`
    #[default]
    Nested,
    /// `width` and `height` at top level.
    Flat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitConfig {
    current_time: u64,
    viewport: Viewport,
    supports_p3_color: Option<bool>,
    layout: FlagsLayout,
}

impl InitConfig {
    pub fn new(current_time: u64, viewport: Viewport, layout: FlagsLayout) -> Self {
        Self {
            current_time,
            viewport,
            supports_p3_color: None,
            layout,
        }
    }

    /// Attach the result of the color-gamut probe.
    pub fn with_p3_color(mut self, supported: bool) -> Self {
        self.supports_p3_color = Some(supported);
        self
    }

    pub fn current_time(&self) -> u64 {
        self.current_time
    }

    pub fn width(&self) -> u32 {
        self.viewport.width
    }

    pub fn height(&self) -> u32 {
        self.viewport.height
    }

    pub fn supports_p3_color(&self) -> Option<bool> {
        self.supports_p3_color
    }

    pub fn layout(&self) -> FlagsLayout {
        self.layout
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ─── Wire shapes ─────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Dimensions {
    width: u32,
    height: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NestedFlags {
    current_time: u64,
    dimensions: Dimensions,
    #[serde(skip_serializing_if = "Option::is_none")]
    supports_p3_color: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FlatFlags {
    current_time: u64,
    width: u32,
    height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    supports_p3_color: Option<bool>,
}

impl Serialize for InitConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.layout {
            FlagsLayout::Nested => NestedFlags {
                current_time: self.current_time,
                dimensions: Dimensions {
                    width: self.viewport.width,
                    height: self.viewport.height,
                },
                supports_p3_color: self.supports_p3_color,
            }
            .serialize(serializer),
            FlagsLayout::Flat => FlatFlags {
                current_time: self.current_time,
                width: self.viewport.width,
                height: self.viewport.height,
                supports_p3_color: self.supports_p3_color,
            }
            .serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn hd() -> Viewport {
        Viewport::new(1920, 1080).unwrap()
    }

    #[test]
    fn nested_layout_wraps_dimensions() {
        let flags = InitConfig::new(1_700_000_000_000, hd(), FlagsLayout::Nested);
        assert_eq!(
            serde_json::to_value(&flags).unwrap(),
            json!({
                "currentTime": 1_700_000_000_000u64,
                "dimensions": { "width": 1920, "height": 1080 }
            })
        );
    }

    #[test]
    fn flat_layout_hoists_dimensions() {
        let flags = InitConfig::new(1_700_000_000_000, hd(), FlagsLayout::Flat);
        assert_eq!(
            serde_json::to_value(&flags).unwrap(),
            json!({
                "currentTime": 1_700_000_000_000u64,
                "width": 1920,
                "height": 1080
            })
        );
    }

    #[test]
    fn p3_flag_appears_only_when_probed() {
        let plain = InitConfig::new(5, hd(), FlagsLayout::Nested);
        assert!(!plain.to_json().unwrap().contains("supportsP3Color"));

        let probed = plain.with_p3_color(false);
        let value = serde_json::to_value(&probed).unwrap();
        assert_eq!(value["supportsP3Color"], json!(false));
    }

    #[test]
    fn layout_names_are_lowercase() {
        let layout: FlagsLayout = serde_json::from_str(r#""flat""#).unwrap();
        assert_eq!(layout, FlagsLayout::Flat);
        assert!(serde_json::from_str::<FlagsLayout>(r#""Flat""#).is_err());
    }
}
