//! C ABI bindings.
//!
//! Requests and responses cross the boundary as NUL-terminated UTF-8 JSON.
//! Every string returned by this module must be released with
//! [`open_route_free_string`].

use std::ffi::{CStr, CString};

use libc::c_char;
use serde_json::json;

use crate::api::optimize_json;

fn into_raw(s: String) -> *mut c_char {
    // Interior NULs cannot occur in serde_json output.
    CString::new(s).map_or(std::ptr::null_mut(), CString::into_raw)
}

fn error_json(message: impl std::fmt::Display) -> String {
    json!({ "error": message.to_string() }).to_string()
}

/// Plans a route for a JSON request.
///
/// Returns the JSON response, or `{"error": "..."}` on failure. Returns null
/// only if `request` is null.
///
/// # Safety
///
/// `request` must be null or point to a valid NUL-terminated string that
/// stays alive for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn open_route_optimize_json(request: *const c_char) -> *mut c_char {
    if request.is_null() {
        return std::ptr::null_mut();
    }
    // SAFETY: non-null and NUL-terminated per the caller contract.
    let body = match unsafe { CStr::from_ptr(request) }.to_str() {
        Ok(body) => body,
        Err(e) => return into_raw(error_json(e)),
    };
    let out = optimize_json(body).unwrap_or_else(error_json);
    into_raw(out)
}

/// Releases a string returned by [`open_route_optimize_json`].
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by this library that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn open_route_free_string(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: allocated by `CString::into_raw` in this module.
        drop(unsafe { CString::from_raw(s) });
    }
}
