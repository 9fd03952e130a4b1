//! Lookup engine.
//!
//! [`MimeDescriptions`] pairs a [`Dataset`] with the lookup policies callers
//! actually want. Exact lookup ([`MimeDescriptions::lookup`]) is strict and
//! case-sensitive; every tolerance for case, whitespace and parameters lives
//! in [`extract_mime_type`] and is applied only by the header-based methods.

use crate::dataset::Dataset;
use crate::error::{MimeError, MimeResult};
use crate::normalize::extract_mime_type;

/// Description returned by [`MimeDescriptions::get_or_unknown`] on a miss.
pub const DEFAULT_DESCRIPTION: &str = "Unknown file type";

/// Lookup policies over a borrowed [`Dataset`]. Cheap to copy.
#[derive(Debug, Clone, Copy)]
pub struct MimeDescriptions<'a> {
    dataset: &'a Dataset,
}

impl MimeDescriptions<'static> {
    /// Engine over the built-in table.
    pub fn builtin() -> Self {
        Self::new(Dataset::builtin())
    }
}

impl Default for MimeDescriptions<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> MimeDescriptions<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Exact lookup. The input is used as-is, so `"TEXT/PLAIN"` or
    /// `"text/plain; charset=utf-8"` miss.
    pub fn lookup(&self, mime_type: &str) -> MimeResult<&'a str> {
        self.dataset
            .get(mime_type)
            .ok_or_else(|| MimeError::not_found(mime_type))
    }

    /// Looks up a raw header value after normalizing it.
    pub fn get_from_header(&self, header: &str) -> MimeResult<&'a str> {
        self.lookup(&extract_mime_type(header))
    }

    /// Looks up a raw header value, falling back to `default` or, when no
    /// default is given, to the normalized MIME type itself.
    ///
    /// An explicit `Some("")` is honoured and returns an empty string.
    pub fn get_from_header_with_fallback(&self, header: &str, default: Option<&str>) -> String {
        let cleaned = extract_mime_type(header);
        match self.dataset.get(&cleaned) {
            Some(description) => description.to_string(),
            None => match default {
                Some(default) => default.to_string(),
                None => cleaned,
            },
        }
    }

    /// Exact lookup returning `default` on a miss. No normalization.
    pub fn get_with_default(&self, mime_type: &str, default: &str) -> String {
        self.dataset.get(mime_type).unwrap_or(default).to_string()
    }

    /// [`get_with_default`](Self::get_with_default) with [`DEFAULT_DESCRIPTION`].
    pub fn get_or_unknown(&self, mime_type: &str) -> String {
        self.get_with_default(mime_type, DEFAULT_DESCRIPTION)
    }

    /// Exact lookup for MIME types the caller knows are present.
    ///
    /// # Panics
    ///
    /// Panics with `MIME type not found: "<mime_type>"` when the type is not
    /// in the dataset. Use [`lookup`](Self::lookup) for untrusted input.
    pub fn get_or_fail(&self, mime_type: &str) -> &'a str {
        match self.try_get_or_fail(mime_type) {
            Ok(description) => description,
            Err(err) => panic!("{}", err.message()),
        }
    }

    /// Like [`get_or_fail`](Self::get_or_fail) but returns a `KeyMissing`
    /// error instead of panicking.
    pub fn try_get_or_fail(&self, mime_type: &str) -> MimeResult<&'a str> {
        self.dataset
            .get(mime_type)
            .ok_or_else(|| MimeError::key_missing(mime_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MimeErrorKind;
    use proptest::prelude::*;

    fn small() -> Dataset {
        Dataset::from_entries([
            ("text/plain", "plain text document"),
            ("application/pdf", "PDF document"),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_hit_and_miss() {
        let dataset = small();
        let engine = MimeDescriptions::new(&dataset);
        assert_eq!(engine.lookup("application/pdf").unwrap(), "PDF document");

        for miss in ["", "application", "APPLICATION/PDF", "application/pdf; q=1", "unknown/unknown"] {
            let err = engine.lookup(miss).unwrap_err();
            assert_eq!(err.kind(), MimeErrorKind::NotFound, "input {:?}", miss);
        }
    }

    #[test]
    fn header_lookup_normalizes() {
        let dataset = small();
        let engine = MimeDescriptions::new(&dataset);
        assert_eq!(engine.get_from_header("  TEXT/PLAIN ; charset=utf-8 ").unwrap(), "plain text document");
        let err = engine.get_from_header(";charset=utf-8").unwrap_err();
        assert_eq!(err.kind(), MimeErrorKind::NotFound);
        assert_eq!(err.message(), "MIME type not found: \"\"");
    }

    #[test]
    fn fallback_prefers_description_then_default_then_cleaned() {
        let dataset = small();
        let engine = MimeDescriptions::new(&dataset);
        assert_eq!(engine.get_from_header_with_fallback("Application/PDF", None), "PDF document");
        assert_eq!(engine.get_from_header_with_fallback("Application/PDF", Some("x")), "PDF document");
        assert_eq!(engine.get_from_header_with_fallback("application/x-custom; a=b", Some("Custom")), "Custom");
        assert_eq!(engine.get_from_header_with_fallback("Application/X-Custom; a=b", None), "application/x-custom");
        assert_eq!(engine.get_from_header_with_fallback("application/x-custom", Some("")), "");
        assert_eq!(engine.get_from_header_with_fallback("", None), "");
    }

    #[test]
    fn defaults_do_not_normalize() {
        let dataset = small();
        let engine = MimeDescriptions::new(&dataset);
        assert_eq!(engine.get_with_default("text/plain", "nope"), "plain text document");
        assert_eq!(engine.get_with_default("TEXT/PLAIN", "nope"), "nope");
        assert_eq!(engine.get_or_unknown("text/plain; charset=utf-8"), DEFAULT_DESCRIPTION);
        assert_eq!(engine.get_or_unknown("text/plain"), "plain text document");
    }

    #[test]
    fn get_or_fail_hit() {
        let dataset = small();
        assert_eq!(MimeDescriptions::new(&dataset).get_or_fail("text/plain"), "plain text document");
    }

    #[test]
    #[should_panic(expected = "MIME type not found: \"Text/Plain\"")]
    fn get_or_fail_miss_panics_with_verbatim_input() {
        let dataset = small();
        MimeDescriptions::new(&dataset).get_or_fail("Text/Plain");
    }

    #[test]
    fn try_get_or_fail_reports_key_missing() {
        let dataset = small();
        let err = MimeDescriptions::new(&dataset).try_get_or_fail("unknown/unknown").unwrap_err();
        assert_eq!(err.kind(), MimeErrorKind::KeyMissing);
        assert!(err.to_string().contains("unknown/unknown"));
    }

    proptest! {
        #[test]
        fn prop_fallback_is_description_default_or_cleaned(raw in "[ -~]*", default in proptest::option::of("[a-z ]{0,8}")) {
            let engine = MimeDescriptions::builtin();
            let got = engine.get_from_header_with_fallback(&raw, default.as_deref());
            let cleaned = extract_mime_type(&raw);
            let expected = match engine.lookup(&cleaned) {
                Ok(description) => description.to_string(),
                Err(_) => default.unwrap_or(cleaned),
            };
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn prop_case_invariant_lookup(index in 0usize..64) {
            let engine = MimeDescriptions::builtin();
            let keys: Vec<&str> = engine.dataset().mime_types().collect();
            let key = keys[index % keys.len()];
            prop_assert_eq!(
                engine.get_from_header(key).ok(),
                engine.get_from_header(&key.to_uppercase()).ok()
            );
        }
    }
}
