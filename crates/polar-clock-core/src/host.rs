//! Host environment queries consumed at startup.
//!
//! The browser is one implementation (see `polar-clock-wasm`); tests use an
//! in-memory fake. Everything the bootstrap reads from the outside world goes
//! through [`Host`].

use crate::error::BootstrapError;

/// The viewport dimensions in whole pixels. Both sides are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, BootstrapError> {
        if width == 0 || height == 0 {
            return Err(BootstrapError::InvalidViewport {
                width: width.to_string(),
                height: height.to_string(),
            });
        }
        Ok(Self { width, height })
    }

    /// Build from raw host readings such as `window.innerWidth`.
    ///
    /// Fractional pixels are truncated. Non-finite readings and anything
    /// that truncates below 1 are rejected.
    pub fn from_host_reading(width: f64, height: f64) -> Result<Self, BootstrapError> {
        let invalid = || BootstrapError::InvalidViewport {
            width: width.to_string(),
            height: height.to_string(),
        };
        let to_px = |v: f64| -> Option<u32> {
            if !v.is_finite() || v < 1.0 || v > f64::from(u32::MAX) {
                return None;
            }
            Some(v.trunc() as u32)
        };
        match (to_px(width), to_px(height)) {
            (Some(w), Some(h)) => Ok(Self {
                width: w,
                height: h,
            }),
            _ => Err(invalid()),
        }
    }
}

/// Outcome of a style-support probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Supported,
    Unsupported,
    /// The host has no style-support query, or the query itself failed.
    Unavailable,
}

impl Capability {
    pub fn from_query(answer: Option<bool>) -> Self {
        match answer {
            Some(true) => Capability::Supported,
            Some(false) => Capability::Unsupported,
            None => Capability::Unavailable,
        }
    }

    pub fn is_supported(self) -> bool {
        self == Capability::Supported
    }
}

/// Read-only view of the environment the clock starts in.
pub trait Host {
    /// Handle to a mountable element.
    type Node;

    fn viewport(&self) -> Result<Viewport, BootstrapError>;

    /// Wall-clock time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;

    /// Evaluate a style feature-test such as `color: color(display-p3 1 1 1)`.
    fn supports_css(&self, condition: &str) -> Capability;

    fn mount_point(&self, id: &str) -> Option<Self::Node>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_reading_truncates_fractional_pixels() {
        let vp = Viewport::from_host_reading(1280.75, 719.5).unwrap();
        assert_eq!(vp, Viewport::new(1280, 719).unwrap());
    }

    #[test]
    fn host_reading_rejects_zero_and_nan() {
        assert!(Viewport::from_host_reading(0.0, 600.0).is_err());
        assert!(Viewport::from_host_reading(800.0, f64::NAN).is_err());
        assert!(Viewport::from_host_reading(0.4, 600.0).is_err());
        assert!(Viewport::from_host_reading(f64::INFINITY, 600.0).is_err());
    }

    #[test]
    fn zero_sized_viewport_is_rejected() {
        let err = Viewport::new(0, 1080).unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn capability_from_query() {
        assert_eq!(Capability::from_query(Some(true)), Capability::Supported);
        assert_eq!(Capability::from_query(Some(false)), Capability::Unsupported);
        assert_eq!(Capability::from_query(None), Capability::Unavailable);
        assert!(!Capability::Unavailable.is_supported());
    }
}
