//! WebAssembly bindings.
//!
//! Accepts the same request document as [`crate::api::optimize_json`], as a
//! JavaScript object, and returns the response object.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::{self, OptimizeRequest};

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

/// Orders the request's stops and returns `{ ordered, distance_km, google_maps_url }`.
///
/// Stops come back as plain objects, passthrough attributes included, so
/// `ordered[0].name` works as it does on the JSON response.
///
/// # Errors
///
/// Throws a JavaScript `Error` for malformed requests and validation failures.
#[wasm_bindgen(js_name = optimize)]
pub fn optimize_route(request: JsValue) -> Result<JsValue, JsValue> {
    let request: OptimizeRequest = serde_wasm_bindgen::from_value(request).map_err(js_error)?;
    let response = api::optimize(&request).map_err(js_error)?;
    response
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(js_error)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn get(target: &JsValue, key: &str) -> JsValue {
        js_sys::Reflect::get(target, &JsValue::from_str(key)).expect("readable property")
    }

    #[wasm_bindgen_test]
    fn test_stops_are_plain_objects() {
        let request = js_sys::JSON::parse(
            r#"{"houses":[
                {"name":"A","address":"","lat":0.0,"lon":0.0,"is_airbnb":true},
                {"name":"B","address":"","lat":1.0,"lon":0.0}
            ],"start_name":"A","end_name":"B"}"#,
        )
        .expect("valid json");

        let response = optimize_route(request).expect("valid input");
        let ordered = js_sys::Array::from(&get(&response, "ordered"));
        let first = ordered.get(0);

        assert!(!first.is_instance_of::<js_sys::Map>());
        assert_eq!(get(&first, "name").as_string().as_deref(), Some("A"));
        assert_eq!(get(&first, "is_airbnb").as_bool(), Some(true));
        assert_eq!(get(&response, "distance_km").as_f64(), Some(111.195));
    }

    #[wasm_bindgen_test]
    fn test_unknown_stop_throws() {
        let request = js_sys::JSON::parse(r#"{"stops":[],"start_name":"A","end_name":"A"}"#)
            .expect("valid json");
        assert!(optimize_route(request).is_err());
    }
}
