//! # Full-name helpers
//!
//! The remote record stores one `name` string; the form edits first and last
//! name separately. Both directions are lossy:
//!
//! - [`split_name`] splits on every single space and keeps only the first two
//!   pieces. `"Mary Ann Smith"` becomes `("Mary", "Ann")`; `"Cher"` becomes
//!   `("Cher", "")`; `"A  B"` (two spaces) becomes `("A", "")`.
//! - [`join_name`] always inserts exactly one space, so empty halves produce a
//!   leading, trailing or lone space.
//!
//! `join_name(split_name(n))` returns `n` only when `n` contains exactly one space.

/// Split a full name into `(first, last)`.
pub fn split_name(full: &str) -> (String, String) {
    let mut parts = full.split(' ');
    let first = parts.next().unwrap_or_default().to_string();
    let last = parts.next().unwrap_or_default().to_string();
    (first, last)
}

/// Join first and last name with a single space.
pub fn join_name(first: &str, last: &str) -> String {
    format!("{first} {last}")
}
