//! WebAssembly entry point.
//!
//! Exposes one call for a browser worker: a [`SearchRequest`] object in,
//! the ordered combinations out as plain JS objects (`{berry: count}`).

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::request::SearchRequest;

/// Runs one search. Errors come back as string messages.
#[wasm_bindgen(js_name = findCombinations)]
pub fn find_combinations(request: JsValue) -> Result<JsValue, JsValue> {
    let request: SearchRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let combinations = request
        .execute()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    combinations
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
