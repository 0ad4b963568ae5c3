//! WASM bridge for the polar clock: reads the browser environment and mounts
//! the external clock application.
//!
//! Compiled via `wasm-pack build --target web` and loaded from `web/index.js`:
//!
//! ```js
//! import init, { start } from "./pkg/polar_clock_wasm.js";
//! await init();
//! const app = start(Elm.Main, { revision: 2 });
//! ```

mod app;
mod host;
mod logger;

pub use app::JsApplication;
pub use host::WebHost;

use polar_clock_core::{BootConfig, BootstrapError, StartGuard, bootstrap, capture};
use wasm_bindgen::prelude::*;

static START: StartGuard = StartGuard::new();

/// Mount `app` into the page. Returns whatever `app.init` returned.
///
/// `options` is a plain object (see `BootConfig`) or `undefined`. Runs at
/// most once per page load; later calls fail with `AlreadyStarted` and do
/// not touch the environment.
#[wasm_bindgen]
pub fn start(app: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let config = read_options(&options).map_err(to_js_error)?;
    let level = config.level_filter().map_err(to_js_error)?;
    START.try_acquire().map_err(to_js_error)?;

    logger::install_panic_hook();
    logger::init(level);

    let run = || -> Result<JsValue, BootstrapError> {
        let host = WebHost::from_global()?;
        let app = JsApplication::from_js(app)?;
        let handle = bootstrap(&host, &app, &config)?;
        Ok(handle.into_instance())
    };
    run().map_err(|err| {
        log::error!("{err}");
        to_js_error(err)
    })
}

/// The flags `start` would pass, as JSON, without mounting anything.
#[wasm_bindgen]
pub fn flags_preview(options: JsValue) -> Result<String, JsValue> {
    let preview = || -> Result<String, BootstrapError> {
        let config = read_options(&options)?;
        let host = WebHost::from_global()?;
        Ok(capture(&host, &config)?.flags.to_json()?)
    };
    preview().map_err(to_js_error)
}

// ─── Private helpers ─────────────────────────────────────────────────────

fn read_options(options: &JsValue) -> Result<BootConfig, BootstrapError> {
    if options.is_undefined() || options.is_null() {
        return Ok(BootConfig::default());
    }
    let text: String = js_sys::JSON::stringify(options)
        .map_err(|e| BootstrapError::InvalidConfig(describe_js(&e)))?
        .into();
    BootConfig::from_json(&text)
}

/// `Error` carrying the message plus a `code` property (`E001`...).
fn to_js_error(err: BootstrapError) -> JsValue {
    let js_err = js_sys::Error::new(&err.to_string());
    js_err.set_name("BootstrapError");
    let _ = js_sys::Reflect::set(
        &js_err,
        &JsValue::from_str("code"),
        &JsValue::from_str(err.code()),
    );
    js_err.into()
}

pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
