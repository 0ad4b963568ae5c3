//! The external clock application as seen from Rust.
//!
//! Any JS object with an `init({ node, flags })` method works; in practice
//! it is the compiled `Elm.Main` module.

use js_sys::{Function, Object, Reflect};
use polar_clock_core::{Application, BootstrapError, InitConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

pub struct JsApplication {
    target: JsValue,
    init: Function,
}

impl JsApplication {
    pub fn from_js(target: JsValue) -> Result<Self, BootstrapError> {
        if !target.is_object() {
            return Err(BootstrapError::AppInit(
                "application must be an object exposing `init`".to_string(),
            ));
        }
        let init = Reflect::get(&target, &JsValue::from_str("init"))
            .map_err(|e| BootstrapError::AppInit(crate::describe_js(&e)))?
            .dyn_into::<Function>()
            .map_err(|_| {
                BootstrapError::AppInit("application `init` is not a function".to_string())
            })?;
        Ok(Self { target, init })
    }
}

impl Application<Element> for JsApplication {
    type Instance = JsValue;

    fn init(&self, node: Element, flags: &InitConfig) -> Result<JsValue, BootstrapError> {
        let flags = js_sys::JSON::parse(&flags.to_json()?)
            .map_err(|e| BootstrapError::Serialization(crate::describe_js(&e)))?;

        let args = Object::new();
        set(&args, "node", &node.into())?;
        set(&args, "flags", &flags)?;

        self.init
            .call1(&self.target, &args)
            .map_err(|e| BootstrapError::AppInit(crate::describe_js(&e)))
    }
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), BootstrapError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| BootstrapError::Serialization(crate::describe_js(&e)))
}
