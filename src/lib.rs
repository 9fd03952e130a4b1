//! # mimedesc - MIME type descriptions
//!
//! Human-friendly descriptions for MIME types, drawn from a table embedded at
//! build time (freedesktop.org shared-mime-info).
//!
//! ## Overview
//!
//! There is no I/O and no mutable state: the table is materialised once and
//! only ever read, so every function here is safe to call from any thread.
//!
//! ## Core Concepts
//!
//! - **Dataset**: the immutable `type/subtype` → description table. The
//!   built-in one is used by the crate-level functions; custom tables can be
//!   injected with [`Dataset::from_entries`] or [`Dataset::from_json_str`].
//! - **Normalization**: [`extract_mime_type`] turns a raw `Content-Type`
//!   header into a canonical key (first `;` segment, trimmed, lowercased).
//! - **Lookup**: [`lookup`] is exact and case-sensitive. The header-based
//!   helpers normalize before looking up.
//!
//! ## Example
//!
//! ```
//! use mimedesc::{get_from_header, get_from_header_with_fallback, lookup};
//!
//! assert_eq!(lookup("application/pdf").unwrap(), "PDF document");
//! assert!(lookup("unknown/unknown").is_err());
//!
//! assert_eq!(get_from_header("Text/Plain; charset=utf-8").unwrap(), "plain text document");
//! assert_eq!(
//!     get_from_header_with_fallback("application/x-custom; param=value", None),
//!     "application/x-custom"
//! );
//! ```

mod data;
pub mod dataset;
pub mod describer;
pub mod error;
pub mod normalize;

pub use dataset::Dataset;
pub use describer::{MimeDescriptions, DEFAULT_DESCRIPTION};
pub use error::{MimeError, MimeErrorKind, MimeResult};
pub use normalize::{extract_mime_type, generic_icon_name, icon_name};

/// Exact lookup in the built-in table. See [`MimeDescriptions::lookup`].
pub fn lookup(mime_type: &str) -> MimeResult<&'static str> {
    MimeDescriptions::builtin().lookup(mime_type)
}

/// See [`MimeDescriptions::get_from_header`].
pub fn get_from_header(header: &str) -> MimeResult<&'static str> {
    MimeDescriptions::builtin().get_from_header(header)
}

/// See [`MimeDescriptions::get_from_header_with_fallback`].
pub fn get_from_header_with_fallback(header: &str, default: Option<&str>) -> String {
    MimeDescriptions::builtin().get_from_header_with_fallback(header, default)
}

/// See [`MimeDescriptions::get_with_default`].
pub fn get_with_default(mime_type: &str, default: &str) -> String {
    MimeDescriptions::builtin().get_with_default(mime_type, default)
}

/// Exact lookup, [`DEFAULT_DESCRIPTION`] on a miss.
pub fn get_or_unknown(mime_type: &str) -> String {
    MimeDescriptions::builtin().get_or_unknown(mime_type)
}

/// Exact lookup of a MIME type known to be in the built-in table.
///
/// # Panics
///
/// Panics if `mime_type` is not in the table. See [`MimeDescriptions::get_or_fail`].
pub fn get_or_fail(mime_type: &str) -> &'static str {
    MimeDescriptions::builtin().get_or_fail(mime_type)
}
