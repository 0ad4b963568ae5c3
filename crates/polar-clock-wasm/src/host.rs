//! Browser implementation of [`Host`]: `window`, `document`, `Date`, `CSS`.

use js_sys::{Function, Reflect};
use polar_clock_core::{BootstrapError, Capability, Host, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// Bind to the global `window` and its `document`.
    pub fn from_global() -> Result<Self, BootstrapError> {
        let window = web_sys::window().ok_or_else(|| {
            BootstrapError::ViewportUnavailable("no global `window` object".to_string())
        })?;
        let document = window.document().ok_or_else(|| {
            BootstrapError::ViewportUnavailable("window has no `document`".to_string())
        })?;
        Ok(Self { window, document })
    }
}

impl Host for WebHost {
    type Node = Element;

    fn viewport(&self) -> Result<Viewport, BootstrapError> {
        let width = self.window.inner_width().map_err(viewport_error)?;
        let height = self.window.inner_height().map_err(viewport_error)?;
        match (width.as_f64(), height.as_f64()) {
            (Some(w), Some(h)) => Viewport::from_host_reading(w, h),
            _ => Err(BootstrapError::InvalidViewport {
                width: format!("{width:?}"),
                height: format!("{height:?}"),
            }),
        }
    }

    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn supports_css(&self, condition: &str) -> Capability {
        Capability::from_query(css_supports(condition))
    }

    fn mount_point(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

/// Call `CSS.supports(condition)` if the browser exposes it.
///
/// Older engines ship no `CSS` namespace at all, so both lookups go through
/// `Reflect` instead of a static binding that would throw.
fn css_supports(condition: &str) -> Option<bool> {
    let css = Reflect::get(&js_sys::global(), &JsValue::from_str("CSS")).ok()?;
    if css.is_undefined() || css.is_null() {
        return None;
    }
    let supports = Reflect::get(&css, &JsValue::from_str("supports"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    supports
        .call1(&css, &JsValue::from_str(condition))
        .ok()?
        .as_bool()
}

fn viewport_error(err: JsValue) -> BootstrapError {
    BootstrapError::ViewportUnavailable(crate::describe_js(&err))
}
