//! Safe wrapper around the libpostal C address parser.
//!
//! Only the parser half of the libpostal API is bound: setup and
//! `libpostal_parse_address`. Models stay loaded for the life of the process.
//!
//! # Memory Safety
//!
//! * `CString` inputs are kept alive for the duration of every C call.
//! * Parser responses are copied into owned Rust strings and then released
//!   with `libpostal_address_parser_response_destroy` on every path.
//! * Null pointers from C are checked before they are dereferenced.
//!
//! # Threading Constraints
//!
//! `libpostal_setup*` must run exactly once per process before any parse.
//! [`initialize`] guards this with a `OnceLock`, caching the outcome so a
//! failed setup is reported to every later caller. Once set up, parsing is
//! safe to call from multiple threads.

#![allow(missing_docs)] // Generated bindings don't have docs

use crate::backend::LabeledComponent;
use crate::error::{Error, Result};
use std::ffi::{CStr, CString};
use std::path::Path;
use std::sync::OnceLock;

#[allow(non_upper_case_globals)]
#[allow(non_camel_case_types)]
#[allow(non_snake_case)]
#[allow(dead_code)]
mod bindings {
    include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
}

use bindings::*;

static INIT: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Set up libpostal's core and parser models from `data_dir`.
///
/// Idempotent; the first caller's directory wins.
///
/// # Errors
///
/// Returns `Error::InitializationFailed` when the directory path is not a
/// valid C string or libpostal cannot load its models from it.
pub(crate) fn initialize(data_dir: &Path) -> Result<()> {
    let outcome = INIT.get_or_init(|| {
        let c_data_dir = CString::new(data_dir.to_string_lossy().as_ref())
            .map_err(|_| "Invalid data directory path".to_string())?;

        // SAFETY: the pointer stays valid for both calls; libpostal copies the path.
        let ok = unsafe {
            libpostal_setup_datadir(c_data_dir.as_ptr() as *mut libc::c_char)
                && libpostal_setup_parser_datadir(c_data_dir.as_ptr() as *mut libc::c_char)
        };

        if ok {
            tracing::info!(data_dir = %data_dir.display(), "libpostal initialized");
            Ok(())
        } else {
            Err(format!(
                "libpostal setup failed for data directory {}",
                data_dir.display()
            ))
        }
    });

    outcome.clone().map_err(Error::initialization_failed)
}

/// Parse an address into labeled components.
///
/// # Errors
///
/// Returns `Error::Ffi` if an input contains a NUL byte or libpostal returns
/// no response. libpostal must have been set up with [`initialize`].
pub(crate) fn parse_address(
    address: &str,
    country: Option<&str>,
) -> Result<Vec<LabeledComponent>> {
    if !matches!(INIT.get(), Some(Ok(()))) {
        return Err(Error::initialization_failed("libpostal is not initialized"));
    }

    let c_address =
        CString::new(address).map_err(|_| Error::ffi_error("Invalid address string"))?;
    let c_country = country
        .map(CString::new)
        .transpose()
        .map_err(|_| Error::ffi_error("Invalid country string"))?;

    // SAFETY: c_address and c_country outlive the call; the response is
    // read only before it is destroyed.
    unsafe {
        let mut options = libpostal_get_address_parser_default_options();
        if let Some(ref c_country) = c_country {
            options.country = c_country.as_ptr() as *mut libc::c_char;
        }

        let response_ptr =
            libpostal_parse_address(c_address.as_ptr() as *mut libc::c_char, options);
        if response_ptr.is_null() {
            return Err(Error::ffi_error("libpostal_parse_address returned null"));
        }

        let response = &*response_ptr;
        let mut components = Vec::with_capacity(response.num_components);
        for i in 0..response.num_components {
            let component_ptr = *response.components.add(i);
            let label_ptr = *response.labels.add(i);
            if component_ptr.is_null() || label_ptr.is_null() {
                continue;
            }

            components.push(LabeledComponent::new(
                CStr::from_ptr(label_ptr).to_string_lossy(),
                CStr::from_ptr(component_ptr).to_string_lossy(),
            ));
        }

        libpostal_address_parser_response_destroy(response_ptr);
        Ok(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // One test owns the process-wide setup: the first outcome is cached and
    // there is no way to reset it.
    #[test]
    fn test_setup_outcome_is_cached_for_the_process() {
        assert_matches!(
            initialize(Path::new("bad\0dir")),
            Err(Error::InitializationFailed { .. })
        );
        assert_matches!(
            initialize(Path::new("/usr/share/libpostal")),
            Err(Error::InitializationFailed { .. })
        );
        assert_matches!(
            parse_address("123 Main St", Some("us")),
            Err(Error::InitializationFailed { .. })
        );
    }
}
