//! Regex and heuristic parsing backend.

use super::{AddressParsingBackend, ParseOutcome, ensure_extracted};
use crate::address::Address;
use crate::classifier::classify;
use crate::corrections::track_corrections;
use crate::error::Result;
use crate::normalizer::normalize_whitespace;
use crate::postal_code::extract_postal_code;
use crate::segmenter::{assign_segments, segment};
use crate::state::resolve_state;
use crate::types::RequestContext;
use tracing::debug;

/// Backend built from a ZIP regex, a backward state scan and a street-suffix
/// split. Needs no data files and always produces a single interpretation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexBackend;

impl RegexBackend {
    /// Create a new regex backend.
    pub fn new() -> Self {
        Self
    }

    /// Run extraction without the "anything found?" gate.
    pub fn extract(&self, raw: &str) -> Address {
        let cleaned = normalize_whitespace(raw);

        let (postal_code, remainder) = extract_postal_code(&cleaned);
        let remainder = normalize_whitespace(&remainder);
        let remainder = remainder.trim_matches([',', ' ']);

        let mut segments = segment(remainder);
        let state = resolve_state(&mut segments).unwrap_or_default();
        let (street_address, city) = assign_segments(&segments);

        debug!(
            postal_code = %postal_code,
            state,
            segments = segments.len(),
            "extracted address components"
        );

        Address {
            street_address,
            city,
            state: state.to_string(),
            postal_code,
            address_type: classify(raw),
            corrections_applied: track_corrections(raw),
            ..Default::default()
        }
    }
}

impl AddressParsingBackend for RegexBackend {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn parse_address(&self, _ctx: &RequestContext, raw: &str) -> Result<ParseOutcome> {
        let addr = ensure_extracted(self.extract(raw))?;
        Ok(ParseOutcome::single(addr))
    }
}
