//! The startup sequence: read the environment, build the flags, mount.
//!
//! Runs synchronously and exactly once. Environment reads happen in a fixed
//! order (viewport, clock, color probe, mount lookup) and the external
//! application is only invoked after every read succeeded.

use crate::app::{AppHandle, Application};
use crate::config::BootConfig;
use crate::error::BootstrapError;
use crate::flags::InitConfig;
use crate::host::{Capability, Host};

/// Feature-test string for wide-gamut color support.
pub const P3_COLOR_QUERY: &str = "color: color(display-p3 1 1 1)";

/// Signals read from the host, before mounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub flags: InitConfig,
    pub color_gamut: Option<Capability>,
}

/// Read viewport, clock and (optionally) color support, and build the flags.
///
/// Does not touch the mount point.
pub fn capture<H: Host>(host: &H, config: &BootConfig) -> Result<Captured, BootstrapError> {
    let viewport = host.viewport()?;
    log::debug!("viewport {}x{}", viewport.width, viewport.height);

    let now = host.now_millis();
    log::debug!("current time {now}");

    let mut flags = InitConfig::new(now, viewport, config.layout);
    let color_gamut = if config.probe_color_gamut {
        let capability = host.supports_css(P3_COLOR_QUERY);
        log::debug!("display-p3 probe: {capability:?}");
        if capability == Capability::Unavailable {
            if config.strict_color_probe {
                return Err(BootstrapError::ColorQueryUnavailable);
            }
            log::warn!("style-support query unavailable, reporting no P3 support");
        }
        flags = flags.with_p3_color(capability.is_supported());
        Some(capability)
    } else {
        None
    };

    Ok(Captured { flags, color_gamut })
}

/// Run the full startup sequence and hand the flags to `app`.
///
/// # Errors
/// Any failed environment read, a missing mount point (checked before `app`
/// is invoked), or a failing `app.init`.
pub fn bootstrap<H, A>(
    host: &H,
    app: &A,
    config: &BootConfig,
) -> Result<AppHandle<A::Instance>, BootstrapError>
where
    H: Host,
    A: Application<H::Node>,
{
    let Captured { flags, color_gamut } = capture(host, config)?;

    let node = host
        .mount_point(&config.mount_id)
        .ok_or_else(|| BootstrapError::MountNotFound {
            id: config.mount_id.clone(),
        })?;

    log::info!(
        "mounting clock into #{} ({}x{}, {:?} flags)",
        config.mount_id,
        flags.width(),
        flags.height(),
        flags.layout()
    );
    let instance = app.init(node, &flags)?;

    Ok(AppHandle::new(
        instance,
        config.mount_id.clone(),
        color_gamut,
    ))
}
