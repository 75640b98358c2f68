//! Pluggable "raw text to components" parsing backends.
//!
//! The validator only depends on [`AddressParsingBackend`]; everything
//! downstream of it (validation, confidence, formatting) is shared by every
//! backend. Two implementations ship with the crate:
//!
//! * [`RegexBackend`] - pattern and heuristic based, always available
//! * `LibpostalBackend` - the libpostal CRF parser, behind the `libpostal`
//!   feature

mod components;
#[cfg(feature = "libpostal")]
mod libpostal;
mod pattern;

pub use components::{LabeledComponent, components_to_address};
#[cfg(feature = "libpostal")]
pub use libpostal::LibpostalBackend;
pub use pattern::RegexBackend;

use crate::address::Address;
use crate::error::{Error, Result};
use crate::types::RequestContext;
use std::fmt;

/// Addresses produced by a backend for one raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// The preferred interpretation
    pub primary: Address,
    /// Every interpretation, primary included, when the input was
    /// ambiguous; empty otherwise
    pub candidates: Vec<Address>,
}

impl ParseOutcome {
    /// An outcome with a single interpretation.
    pub fn single(primary: Address) -> Self {
        Self {
            primary,
            candidates: Vec::new(),
        }
    }

    /// An outcome with several interpretations.
    pub fn with_candidates(primary: Address, candidates: Vec<Address>) -> Self {
        Self {
            primary,
            candidates,
        }
    }
}

/// A strategy that turns raw address text into an [`Address`].
///
/// Implementations must be shareable across threads; a single validator
/// serves concurrent requests.
pub trait AddressParsingBackend: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Parse `raw` (already trimmed, never empty).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parsing`] when none of street, city or state could be
    /// extracted.
    fn parse_address(&self, ctx: &RequestContext, raw: &str) -> Result<ParseOutcome>;
}

/// Reject an address from which no street, city or state was extracted.
pub(crate) fn ensure_extracted(addr: Address) -> Result<Address> {
    if addr.core_field_count() == 0 {
        return Err(
            Error::parsing("address", "Could not extract required address components")
                .with_suggestion("Ensure address contains street address, city, and state"),
        );
    }
    Ok(addr)
}
