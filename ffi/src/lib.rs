//! C-ABI wrapper around `endpoint-core`.
//!
//! # Overview
//! Lets non-Rust bootstrap code resolve the API base URL with exactly the
//! same rules as the Rust side.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A null, empty, or non-UTF-8 override is treated as absent.
//! - The C caller owns every returned pointer and must release it with
//!   `endpoint_free`.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use endpoint_core::{BuildMode, EndpointConfig};

use types::*;

/// Resolve the base URL from an optional override and the production flag.
///
/// Returns null only if an internal panic occurs or the override contains
/// no valid C string. Free the result with `endpoint_free`.
#[unsafe(no_mangle)]
pub extern "C" fn endpoint_resolve(
    override_value: *const c_char,
    is_production: bool,
) -> *mut FfiResolvedEndpoint {
    catch_unwind(|| {
        let override_str = if override_value.is_null() {
            None
        } else {
            unsafe { CStr::from_ptr(override_value) }.to_str().ok()
        };
        let resolved =
            endpoint_core::resolve(override_str, BuildMode::from_is_production(is_production));
        FfiResolvedEndpoint::from_core(resolved)
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Resolve the base URL from `API_BASE` and `APP_MODE` in the process
/// environment.
///
/// Returns null if `APP_MODE` holds an unknown mode.
#[unsafe(no_mangle)]
pub extern "C" fn endpoint_resolve_from_env() -> *mut FfiResolvedEndpoint {
    catch_unwind(|| match EndpointConfig::from_env() {
        Ok(cfg) => FfiResolvedEndpoint::from_core(cfg.resolve()),
        Err(e) => {
            tracing::warn!("endpoint_resolve_from_env: {e}");
            std::ptr::null_mut()
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free an endpoint returned by `endpoint_resolve*`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn endpoint_free(endpoint: *mut FfiResolvedEndpoint) {
    if endpoint.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let endpoint = unsafe { Box::from_raw(endpoint) };
        if !endpoint.value.is_null() {
            drop(unsafe { CString::from_raw(endpoint.value) });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(endpoint: *mut FfiResolvedEndpoint) -> String {
        let e = unsafe { &*endpoint };
        unsafe { CStr::from_ptr(e.value) }.to_str().unwrap().to_string()
    }

    #[test]
    fn resolve_with_override() {
        let url = CString::new("https://api.example.com").unwrap();
        let endpoint = endpoint_resolve(url.as_ptr(), true);
        assert!(!endpoint.is_null());

        let e = unsafe { &*endpoint };
        assert_eq!(e.source, FfiEndpointSource::ExplicitOverride);
        assert_eq!(value(endpoint), "https://api.example.com");

        endpoint_free(endpoint);
    }

    #[test]
    fn resolve_null_override_production() {
        let endpoint = endpoint_resolve(std::ptr::null(), true);
        let e = unsafe { &*endpoint };
        assert_eq!(e.source, FfiEndpointSource::ProductionDefault);
        assert_eq!(value(endpoint), "/api");

        endpoint_free(endpoint);
    }

    #[test]
    fn resolve_null_override_development() {
        let endpoint = endpoint_resolve(std::ptr::null(), false);
        let e = unsafe { &*endpoint };
        assert_eq!(e.source, FfiEndpointSource::DevelopmentDefault);
        assert_eq!(value(endpoint), "http://localhost:8000/api");

        endpoint_free(endpoint);
    }

    #[test]
    fn resolve_empty_override_is_absent() {
        let empty = CString::new("").unwrap();
        let endpoint = endpoint_resolve(empty.as_ptr(), true);
        let e = unsafe { &*endpoint };
        assert_eq!(e.source, FfiEndpointSource::ProductionDefault);
        assert_eq!(value(endpoint), "/api");

        endpoint_free(endpoint);
    }

    #[test]
    fn resolve_non_utf8_override_is_absent() {
        let bytes = CString::new(vec![0xff, 0xfe]).unwrap();
        let endpoint = endpoint_resolve(bytes.as_ptr(), false);
        let e = unsafe { &*endpoint };
        assert_eq!(e.source, FfiEndpointSource::DevelopmentDefault);

        endpoint_free(endpoint);
    }

    // The only test in this crate that touches the process environment.
    #[test]
    fn resolve_from_env_reads_variables() {
        std::env::set_var("API_BASE", "https://env.example.com/api");
        std::env::set_var("APP_MODE", "development");
        let endpoint = endpoint_resolve_from_env();
        assert!(!endpoint.is_null());
        let e = unsafe { &*endpoint };
        assert_eq!(e.source, FfiEndpointSource::ExplicitOverride);
        assert_eq!(value(endpoint), "https://env.example.com/api");
        endpoint_free(endpoint);

        std::env::set_var("APP_MODE", "staging");
        assert!(endpoint_resolve_from_env().is_null());

        std::env::remove_var("API_BASE");
        std::env::set_var("APP_MODE", "production");
        let endpoint = endpoint_resolve_from_env();
        assert_eq!(value(endpoint), "/api");
        endpoint_free(endpoint);
        std::env::remove_var("APP_MODE");
    }

    #[test]
    fn source_discriminants_are_stable() {
        assert_eq!(FfiEndpointSource::ExplicitOverride as i32, 0);
        assert_eq!(FfiEndpointSource::ProductionDefault as i32, 1);
        assert_eq!(FfiEndpointSource::DevelopmentDefault as i32, 2);
    }

    #[test]
    fn free_null_is_safe() {
        endpoint_free(std::ptr::null_mut());
    }
}
