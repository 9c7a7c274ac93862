//! Identifier normalization shared by every name comparison.
//!
//! Database and table names are compared after folding through
//! [`normalize_name`]. Index keys and lookup keys are both built with
//! [`NormalizedName::new`], so the two sides of a comparison can never be
//! folded differently.

use std::borrow::Borrow;
use std::fmt;

use unicode_normalization::UnicodeNormalization;

/// Fold an identifier into its canonical comparison form.
///
/// Applies the full Unicode lowercase mapping followed by NFC composition,
/// so `"Bank"`, `"BANK"` and `"bank"` all compare equal, as do `"ÉTÉ"`,
/// `"été"` and the decomposed `"e\u{301}te\u{301}"`.
///
/// # Examples
///
/// ```
/// use catalog_targets::names::normalize_name;
///
/// assert_eq!(normalize_name("Accounts"), "accounts");
/// assert_eq!(normalize_name("ÉTÉ"), "été");
/// ```
pub fn normalize_name(ident: &str) -> String {
    if ident.is_ascii() {
        return ident.to_ascii_lowercase();
    }
    ident.to_lowercase().nfc().collect()
}

/// An identifier that has been passed through [`normalize_name`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    pub fn new(ident: &str) -> Self {
        Self(normalize_name(ident))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NormalizedName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
