//! Backend using libpostal's statistical address parser.

use super::{AddressParsingBackend, ParseOutcome, components_to_address, ensure_extracted};
use crate::error::Result;
use crate::ffi;
use crate::types::RequestContext;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Backend that runs libpostal and maps its labels onto an address.
#[derive(Debug, Clone)]
pub struct LibpostalBackend {
    data_dir: PathBuf,
    country_hint: Option<String>,
}

impl LibpostalBackend {
    /// Set up libpostal from `data_dir` and create the backend.
    ///
    /// # Errors
    ///
    /// Returns `Error::InitializationFailed` if libpostal cannot load its
    /// models.
    pub fn new(data_dir: impl AsRef<Path>, country_hint: Option<String>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        ffi::initialize(&data_dir)?;
        Ok(Self {
            data_dir,
            country_hint,
        })
    }

    /// The data directory libpostal was set up from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl AddressParsingBackend for LibpostalBackend {
    fn name(&self) -> &'static str {
        "libpostal"
    }

    fn parse_address(&self, _ctx: &RequestContext, raw: &str) -> Result<ParseOutcome> {
        let components = ffi::parse_address(raw, self.country_hint.as_deref())?;
        debug!(components = components.len(), "libpostal parsed address");

        let addr = ensure_extracted(components_to_address(raw, components))?;
        Ok(ParseOutcome::single(addr))
    }
}
