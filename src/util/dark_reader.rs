//! Bindings to the DarkReader inversion engine.
//!
//! DarkReader is loaded from a separate script tag, so the global may not
//! exist yet (or ever). [`is_loaded`] is the availability probe the engine
//! gate polls; the extern calls are declared `catch` so a missing or
//! misbehaving engine surfaces as an `Err`, never as an uncaught throw.

use crate::state::resolver::{EngineSettings, InversionEngine};

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "csr")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = DarkReader, js_name = enable)]
    fn dark_reader_enable(options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = DarkReader, js_name = disable)]
    fn dark_reader_disable() -> Result<(), JsValue>;
}

/// Whether the `DarkReader` global exists yet.
pub fn is_loaded() -> bool {
    #[cfg(feature = "csr")]
    {
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("DarkReader"))
            .map_or(false, |v| !v.is_undefined())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// [`InversionEngine`] over the DarkReader global.
#[derive(Clone, Copy, Debug, Default)]
pub struct DarkReaderEngine;

impl InversionEngine for DarkReaderEngine {
    fn enable(&mut self, settings: &EngineSettings) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let options = js_sys::Object::new();
            set_field(&options, "brightness", settings.brightness)?;
            set_field(&options, "contrast", settings.contrast)?;
            set_field(&options, "sepia", settings.sepia)?;
            dark_reader_enable(&options).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = settings;
            Ok(())
        }
    }

    fn disable(&mut self) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            dark_reader_disable().map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}

#[cfg(feature = "csr")]
fn set_field(target: &js_sys::Object, key: &str, value: u32) -> Result<(), String> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), &JsValue::from_f64(f64::from(value)))
        .map(|_| ())
        .map_err(js_error)
}

#[cfg(feature = "csr")]
fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
