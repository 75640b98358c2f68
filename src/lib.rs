//! # us-address-rs
//!
//! US postal address normalization and validation.
//!
//! Free-form address strings are split into street, city, state and postal
//! code, classified (street, PO box, APO/FPO, rural route), graded for
//! confidence and rendered in a canonical display form.
//!
//! ## Features
//!
//! - **Pluggable parsing**: a regex backend out of the box, libpostal behind
//!   the `libpostal` feature, or any [`AddressParsingBackend`] of your own
//! - **Validation gate**: USPS state codes, ZIP / ZIP+4 and minimum fields
//! - **Correction tracking**: notes on whitespace and capitalization fixes
//! - **Stateless**: one validator can serve concurrent requests
//!
//! ## Quick Start
//!
//! ```rust
//! use us_address_rs::AddressValidator;
//!
//! let validator = AddressValidator::new();
//! let resp = validator.validate("123 main st, new york, ny 10001")?;
//!
//! assert_eq!(resp.address.city, "New York");
//! assert_eq!(resp.address.state, "NY");
//! assert_eq!(
//!     resp.address.formatted_address.as_deref(),
//!     Some("123 Main St, New York, NY 10001")
//! );
//! # Ok::<(), us_address_rs::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod address;
pub mod backend;
pub mod classifier;
pub mod corrections;
pub mod data;
pub mod error;
#[cfg(feature = "libpostal")]
mod ffi;
pub mod normalizer;
pub mod postal_code;
pub mod response;
pub mod segmenter;
pub mod state;
pub mod types;

// Re-export main API
pub use address::{Address, AddressRuleViolation};
pub use backend::{AddressParsingBackend, ParseOutcome, RegexBackend};
pub use error::{Error, FieldError, Result};
pub use response::ValidateResponse;
pub use types::*;

use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{debug, debug_span, warn};

/// Main entry point: parses, validates, grades and formats addresses.
///
/// # Examples
///
/// ```rust
/// use us_address_rs::{AddressValidator, Error, RequestContext};
///
/// let validator = AddressValidator::new();
/// let ctx = RequestContext::new().with_request_id("req-42");
///
/// let resp = validator.parse_and_validate(&ctx, "PO Box 123, Springfield, IL 62701")?;
/// assert_eq!(resp.address.address_type.as_str(), "po_box");
///
/// let err = validator.parse_and_validate(&ctx, "   ").unwrap_err();
/// assert!(matches!(err, Error::Validation(_)));
/// # Ok::<(), us_address_rs::Error>(())
/// ```
#[derive(Debug)]
pub struct AddressValidator {
    backend: Box<dyn AddressParsingBackend>,
    config: ValidatorConfig,
}

impl AddressValidator {
    /// Create a validator backed by the [`RegexBackend`].
    pub fn new() -> Self {
        Self {
            backend: Box::new(RegexBackend::new()),
            config: ValidatorConfig::default(),
        }
    }

    /// Create a validator from configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InitializationFailed` if the libpostal backend is
    /// selected but unavailable (feature disabled or setup failed).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use us_address_rs::{AddressValidator, BackendKind, ValidatorConfig};
    ///
    /// let config = ValidatorConfig::builder().backend(BackendKind::Regex).build();
    /// let validator = AddressValidator::with_config(config)?;
    /// assert_eq!(validator.backend_name(), "regex");
    /// # Ok::<(), us_address_rs::Error>(())
    /// ```
    pub fn with_config(config: ValidatorConfig) -> Result<Self> {
        let backend: Box<dyn AddressParsingBackend> = match config.backend {
            BackendKind::Regex => Box::new(RegexBackend::new()),
            #[cfg(feature = "libpostal")]
            BackendKind::Libpostal => Box::new(backend::LibpostalBackend::new(
                &config.data_dir,
                config.country_hint.clone(),
            )?),
            #[cfg(not(feature = "libpostal"))]
            BackendKind::Libpostal => {
                return Err(Error::initialization_failed(
                    "libpostal backend requested but the `libpostal` feature is disabled",
                ));
            }
        };

        Ok(Self { backend, config })
    }

    /// Create a validator around a custom backend.
    pub fn with_backend(backend: impl AddressParsingBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            config: ValidatorConfig::default(),
        }
    }

    /// Name of the active backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Get the configuration used by this instance.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Parse, validate and normalize one raw address.
    ///
    /// # Errors
    ///
    /// * `Error::Validation` (field "address") when the input is empty after
    ///   trimming
    /// * `Error::Parsing` (field "address") when nothing usable could be
    ///   extracted, or the extracted address fails validation
    /// * any error raised by the backend itself
    pub fn parse_and_validate(
        &self,
        ctx: &RequestContext,
        raw: &str,
    ) -> Result<ValidateResponse> {
        let _span = debug_span!(
            "parse_and_validate",
            request_id = ctx.request_id().unwrap_or("-"),
            remaining_ms = ctx
                .deadline()
                .map(|d| saturating_millis(d.saturating_duration_since(Instant::now()))),
            backend = self.backend.name(),
        )
        .entered();

        let raw = raw.trim();
        if raw.is_empty() {
            return Err(
                Error::validation("address", "address field is required and cannot be empty")
                    .with_suggestion("Provide a valid US address"),
            );
        }

        let outcome = self.backend.parse_address(ctx, raw).inspect_err(|e| {
            warn!(error = %e, "backend could not parse address");
        })?;
        let ParseOutcome {
            primary: mut address,
            mut candidates,
        } = outcome;

        if let Err(violation) = address.validate() {
            warn!(%violation, "parsed address failed validation");
            return Err(Error::Parsing(
                FieldError::new("address", violation.to_string()).with_suggestion(
                    "Ensure address contains at least street address, city, and state",
                ),
            ));
        }

        address.assign_confidence();
        address.format_address();
        for candidate in &mut candidates {
            candidate.format_address();
        }

        debug!(
            address_type = %address.address_type,
            candidates = candidates.len(),
            "address validated"
        );

        Ok(ValidateResponse::new(address, candidates))
    }

    /// [`parse_and_validate`](Self::parse_and_validate) with an empty
    /// request context.
    pub fn validate(&self, raw: &str) -> Result<ValidateResponse> {
        self.parse_and_validate(&RequestContext::default(), raw)
    }

    /// Validate multiple addresses in order, one result per input.
    pub fn validate_batch(&self, addresses: &[&str]) -> Vec<Result<ValidateResponse>> {
        addresses.iter().map(|addr| self.validate(addr)).collect()
    }

    /// Validate multiple addresses in parallel using multiple threads.
    ///
    /// Results keep the input order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use us_address_rs::AddressValidator;
    ///
    /// let validator = AddressValidator::new();
    /// let results = validator.validate_batch_parallel(&[
    ///     "123 Main St, New York, NY",
    ///     "",
    ///     "456 Oak Ave, Los Angeles, CA",
    /// ]);
    /// assert!(results[0].is_ok());
    /// assert!(results[1].is_err());
    /// ```
    #[cfg(feature = "parallel")]
    pub fn validate_batch_parallel(&self, addresses: &[&str]) -> Vec<Result<ValidateResponse>> {
        use rayon::prelude::*;

        addresses
            .par_iter()
            .map(|addr| self.validate(addr))
            .collect()
    }
}

impl Default for AddressValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Which parsing backend a validator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// [`RegexBackend`]
    #[default]
    Regex,
    /// libpostal (requires the `libpostal` feature)
    Libpostal,
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regex" => Ok(BackendKind::Regex),
            "libpostal" | "gopostal" => Ok(BackendKind::Libpostal),
            other => Err(Error::initialization_failed(format!(
                "unknown address backend: {other}"
            ))),
        }
    }
}

/// Configuration for [`AddressValidator`].
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Parsing backend
    pub backend: BackendKind,

    /// libpostal data directory (libpostal backend only)
    pub data_dir: PathBuf,

    /// Country hint passed to libpostal (libpostal backend only)
    pub country_hint: Option<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            data_dir: data::default_data_dir(),
            country_hint: Some("us".to_string()),
        }
    }
}

impl ValidatorConfig {
    /// Create a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use us_address_rs::{BackendKind, ValidatorConfig};
    ///
    /// let config = ValidatorConfig::builder()
    ///     .backend(BackendKind::Libpostal)
    ///     .data_dir("/opt/libpostal")
    ///     .build();
    /// assert_eq!(config.backend, BackendKind::Libpostal);
    /// ```
    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::new()
    }

    /// Load configuration from the environment.
    ///
    /// * `US_ADDRESS_BACKEND` - `regex` (default) or `libpostal`
    /// * `LIBPOSTAL_DATA_DIR` - libpostal data directory
    /// * `US_ADDRESS_COUNTRY_HINT` - country hint, default `us`
    ///
    /// # Errors
    ///
    /// Returns `Error::InitializationFailed` for an unknown backend name.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Self::builder();

        if let Some(backend) = lookup("US_ADDRESS_BACKEND").filter(|v| !v.is_empty()) {
            builder = builder.backend(backend.parse()?);
        }
        builder = builder.data_dir(data::resolve_data_dir(lookup("LIBPOSTAL_DATA_DIR")));
        if let Some(hint) = lookup("US_ADDRESS_COUNTRY_HINT") {
            builder = builder.country_hint((!hint.is_empty()).then_some(hint));
        }

        Ok(builder.build())
    }
}

/// Builder for ValidatorConfig.
#[derive(Debug, Clone)]
pub struct ValidatorConfigBuilder {
    config: ValidatorConfig,
}

impl ValidatorConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: ValidatorConfig::default(),
        }
    }

    /// Set the parsing backend.
    pub fn backend(mut self, backend: BackendKind) -> Self {
        self.config.backend = backend;
        self
    }

    /// Set a custom libpostal data directory.
    pub fn data_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.data_dir = dir.into();
        self
    }

    /// Set the libpostal country hint; `None` disables it.
    pub fn country_hint(mut self, hint: Option<String>) -> Self {
        self.config.country_hint = hint;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ValidatorConfig {
        self.config
    }
}

impl Default for ValidatorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_backend_kind_from_str() {
        assert_eq!("regex".parse::<BackendKind>().unwrap(), BackendKind::Regex);
        assert_eq!(" LibPostal ".parse::<BackendKind>().unwrap(), BackendKind::Libpostal);
        assert!(matches!(
            "smarty".parse::<BackendKind>(),
            Err(Error::InitializationFailed { .. })
        ));
    }

    #[test]
    fn test_config_default() {
        let config = ValidatorConfig::default();
        assert_eq!(config.backend, BackendKind::Regex);
        assert_eq!(config.country_hint.as_deref(), Some("us"));
    }

    #[test]
    fn test_config_from_lookup() {
        let env: HashMap<&str, &str> = [
            ("US_ADDRESS_BACKEND", "libpostal"),
            ("LIBPOSTAL_DATA_DIR", "/srv/libpostal"),
            ("US_ADDRESS_COUNTRY_HINT", ""),
        ]
        .into_iter()
        .collect();

        let config =
            ValidatorConfig::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.backend, BackendKind::Libpostal);
        assert_eq!(config.data_dir, PathBuf::from("/srv/libpostal"));
        assert_eq!(config.country_hint, None);
    }

    #[test]
    fn test_config_from_lookup_ignores_empty_data_dir() {
        let config = ValidatorConfig::from_lookup(|key| {
            (key == "LIBPOSTAL_DATA_DIR").then(String::new)
        })
        .unwrap();

        assert!(!config.data_dir.as_os_str().is_empty());
        assert_eq!(config.data_dir, data::resolve_data_dir(None));
    }

    #[test]
    fn test_saturating_millis() {
        assert_eq!(saturating_millis(Duration::from_millis(1500)), 1500);
        assert_eq!(saturating_millis(Duration::ZERO), 0);
        assert_eq!(saturating_millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_config_from_lookup_rejects_unknown_backend() {
        let result = ValidatorConfig::from_lookup(|key| {
            (key == "US_ADDRESS_BACKEND").then(|| "nope".to_string())
        });
        assert!(result.is_err());
    }

    #[cfg(not(feature = "libpostal"))]
    #[test]
    fn test_libpostal_without_feature_fails() {
        let config = ValidatorConfig::builder()
            .backend(BackendKind::Libpostal)
            .build();
        assert!(matches!(
            AddressValidator::with_config(config),
            Err(Error::InitializationFailed { .. })
        ));
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AddressValidator>();
    }
}
