//! Static lookup tables for US addresses.
//!
//! Every table here is initialized once and never mutated, so concurrent
//! readers need no synchronization.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::LazyLock;

/// The 51 recognized USPS codes (50 states plus DC).
pub const USPS_STATE_CODES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Lower-cased full state names and their codes.
pub const STATE_NAMES: [(&str, &str); 51] = [
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("district of columbia", "DC"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
];

/// Street suffix words and abbreviations, lower-cased.
pub const STREET_SUFFIXES: [&str; 27] = [
    "st", "street", "ave", "avenue", "blvd", "boulevard", "dr", "drive", "ln", "lane", "rd",
    "road", "ct", "court", "pl", "place", "way", "cir", "circle", "pkwy", "parkway", "ter",
    "terrace", "trl", "trail", "hwy", "highway",
];

static STATE_CODE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| USPS_STATE_CODES.iter().copied().collect());

static STATE_NAME_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| STATE_NAMES.iter().copied().collect());

static STREET_SUFFIX_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STREET_SUFFIXES.iter().copied().collect());

/// Look up an upper-case USPS code, returning the static table entry.
pub fn state_code(upper: &str) -> Option<&'static str> {
    STATE_CODE_SET.get(upper).copied()
}

/// Look up a lower-cased full state name.
pub fn state_code_for_name(lower: &str) -> Option<&'static str> {
    STATE_NAME_MAP.get(lower).copied()
}

/// Whether a lower-cased word is a street suffix.
pub fn is_street_suffix(lower: &str) -> bool {
    STREET_SUFFIX_SET.contains(lower)
}

/// Get the default data directory for libpostal.
///
/// `LIBPOSTAL_DATA_DIR` wins when set and non-blank; otherwise the platform
/// data directory is used.
pub fn default_data_dir() -> PathBuf {
    resolve_data_dir(std::env::var("LIBPOSTAL_DATA_DIR").ok())
}

/// Resolve the data directory from an optional configured value.
pub(crate) fn resolve_data_dir(configured: Option<String>) -> PathBuf {
    if let Some(dir) = configured.filter(|dir| !dir.trim().is_empty()) {
        return PathBuf::from(dir);
    }

    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("libpostal")
    } else {
        PathBuf::from("libpostal")
    }
}
