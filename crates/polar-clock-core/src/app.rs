//! Boundary to the external clock application.

use crate::error::BootstrapError;
use crate::flags::InitConfig;
use crate::host::Capability;

/// The rendering application's initialization entry point.
///
/// `N` is the host's element handle. The returned instance is opaque to the
/// bootstrap and only travels inside an [`AppHandle`].
pub trait Application<N> {
    type Instance;

    fn init(&self, node: N, flags: &InitConfig) -> Result<Self::Instance, BootstrapError>;
}

/// Owned handle to the running application.
///
/// Created once by [`crate::bootstrap`] and handed back to whoever started
/// the clock; nothing keeps a global copy.
#[derive(Debug)]
pub struct AppHandle<I> {
    instance: I,
    mount_id: String,
    color_gamut: Option<Capability>,
}

impl<I> AppHandle<I> {
    pub(crate) fn new(instance: I, mount_id: String, color_gamut: Option<Capability>) -> Self {
        Self {
            instance,
            mount_id,
            color_gamut,
        }
    }

    pub fn instance(&self) -> &I {
        &self.instance
    }

    pub fn into_instance(self) -> I {
        self.instance
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Probe result, or `None` when the probe was disabled.
    pub fn color_gamut(&self) -> Option<Capability> {
        self.color_gamut
    }
}
