// crates/golfdb-core/src/text.rs

//! String helpers shared by the index and the search functions.
//!
//! Matching is plain Unicode lowercasing (what the club directory has always
//! done). Ordering of suggestions uses [`CollationKey`], an approximation of
//! locale-aware collation built on `deunicode` transliteration.

/// Lowercase form used for dedup keys and case-insensitive matching.
#[inline]
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Convert a string into a folded key suitable for collation.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use golfdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Ynys Môn"), "ynys mon");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Case-insensitive substring test. An empty `needle_lower` always matches,
/// a missing haystack never does.
#[inline]
pub fn contains_lower(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack.is_some_and(|h| lower(h).contains(needle_lower))
}

/// Sort key approximating locale-aware (ICU root) string order.
///
/// Levels, compared in order:
/// 1. base letters (accents and case removed),
/// 2. accents (unaccented before accented),
/// 3. case (lowercase before uppercase),
/// 4. raw code points, so distinct strings never compare equal.
///
/// # Examples
///
/// ```rust
/// use golfdb_core::text::CollationKey;
///
/// assert!(CollationKey::new("aberdeen") < CollationKey::new("Bath"));
/// assert!(CollationKey::new("Énfield") < CollationKey::new("Epsom"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: Vec<bool>,
    identical: String,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        CollationKey {
            primary: fold_key(s),
            secondary: lower(s),
            tertiary: s.chars().map(char::is_uppercase).collect(),
            identical: s.to_owned(),
        }
    }
}
