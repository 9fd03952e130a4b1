//! Content-Type header normalization.
//!
//! Turns a raw header value such as `"Text/HTML; charset=UTF-8"` into the
//! canonical key used by the dataset (`"text/html"`). Normalization never
//! validates the result: anything that is not a known MIME type simply
//! misses on lookup.

/// Reduces a raw header value to its canonical lookup key.
///
/// Everything from the first `;` on is dropped, surrounding whitespace is
/// trimmed and the remainder is lowercased. Total: degenerate input yields
/// an empty string.
///
/// ```
/// use mimedesc::extract_mime_type;
///
/// assert_eq!(extract_mime_type("  TEXT/PLAIN ; charset=utf-8 "), "text/plain");
/// assert_eq!(extract_mime_type(";charset=utf-8"), "");
/// assert_eq!(extract_mime_type("not-a-mime-type"), "not-a-mime-type");
/// ```
pub fn extract_mime_type(raw: &str) -> String {
    // split always yields at least one segment, even for ""
    let first = raw.split(';').next().unwrap_or_default();
    first.trim().to_lowercase()
}

/// Icon name for a MIME type, per the freedesktop.org Icon Naming Specification.
///
/// `"text/plain"` becomes `"text-plain"`. The input is normalized first.
pub fn icon_name(mime_type: &str) -> String {
    extract_mime_type(mime_type).replace('/', "-")
}

/// Generic fallback icon for the MIME type's top-level media type.
///
/// `"image/png"` becomes `"image-x-generic"`. Input without a top-level type
/// falls back to `"application-x-generic"`.
pub fn generic_icon_name(mime_type: &str) -> String {
    let cleaned = extract_mime_type(mime_type);
    match cleaned.split_once('/') {
        Some((top, _)) if !top.is_empty() => format!("{}-x-generic", top),
        _ => "application-x-generic".to_string(),
    }
}
