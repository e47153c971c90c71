//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with a C-compatible layout: the URL is a
//! heap-allocated `*mut c_char` and the source is an enum with explicit
//! discriminants. Conversions live here to keep `lib.rs` focused on the
//! `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use endpoint_core::{EndpointSource, ResolvedEndpoint};

/// Which rule selected the base URL.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiEndpointSource {
    ExplicitOverride = 0,
    ProductionDefault = 1,
    DevelopmentDefault = 2,
}

impl From<EndpointSource> for FfiEndpointSource {
    fn from(s: EndpointSource) -> Self {
        match s {
            EndpointSource::ExplicitOverride => FfiEndpointSource::ExplicitOverride,
            EndpointSource::ProductionDefault => FfiEndpointSource::ProductionDefault,
            EndpointSource::DevelopmentDefault => FfiEndpointSource::DevelopmentDefault,
        }
    }
}

/// A resolved base URL exposed to C.
///
/// Returned by `endpoint_resolve*`. The caller owns it and must release it
/// with `endpoint_free`.
#[repr(C)]
pub struct FfiResolvedEndpoint {
    pub source: FfiEndpointSource,
    pub value: *mut c_char,
}

impl FfiResolvedEndpoint {
    /// Move a core `ResolvedEndpoint` onto the heap.
    ///
    /// Returns null if the URL contains an interior NUL, which only an
    /// override can introduce.
    pub(crate) fn from_core(endpoint: ResolvedEndpoint) -> *mut Self {
        let source: FfiEndpointSource = endpoint.source().into();
        let value = match CString::new(endpoint.into_string()) {
            Ok(v) => v.into_raw(),
            Err(_) => return std::ptr::null_mut(),
        };
        Box::into_raw(Box::new(FfiResolvedEndpoint { source, value }))
    }
}
