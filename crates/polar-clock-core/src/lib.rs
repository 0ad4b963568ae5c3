pub mod app;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod flags;
pub mod guard;
pub mod host;

pub use app::{AppHandle, Application};
pub use bootstrap::{Captured, P3_COLOR_QUERY, bootstrap, capture};
pub use config::{BootConfig, DEFAULT_MOUNT_ID, Revision};
pub use error::BootstrapError;
pub use flags::{FlagsLayout, InitConfig};
pub use guard::StartGuard;
pub use host::{Capability, Host, Viewport};
