use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use latina_protocol::{FormKey, Gender};

use crate::error::FormingError;
use crate::root::strip_ending;

/// A declension pattern: an ending table plus its irregular rules.
///
/// Overrides of [`decline`](Declension::decline) run their exception checks
/// first and fall back to [`regular_decline`]; a pattern that overrides
/// `decline` must override [`determine_root`](Declension::determine_root)
/// with the matching inverse.
pub trait Declension: Sync {
    type Key: FormKey;

    /// Stable external name, used for persistence and lookup.
    fn name(&self) -> &'static str;

    /// Suggested default gender, if the pattern has one.
    fn primary_gender(&self) -> Option<Gender> {
        None
    }

    /// Declining with a gender outside this set still succeeds, on a
    /// best-effort basis.
    fn allows_gender(&self, gender: Gender) -> bool;

    /// Standard ending for `key`; `None` means no standard ending.
    fn ending(&self, key: Self::Key, gender: Gender) -> Option<&'static str>;

    fn decline(&self, key: Self::Key, gender: Gender, root: &str) -> Result<String, FormingError> {
        regular_decline(self, key, gender, root)
    }

    fn determine_root(&self, key: Self::Key, gender: Gender, form: &str) -> Result<String, FormingError> {
        regular_root(self, key, gender, form)
    }

    /// Other slots this pattern spells identically to `key`.
    ///
    /// Must be symmetric: if `b` is seeded for `a`, `a` is seeded for `b`.
    fn seed_equal_forms(&self, _key: Self::Key, _gender: Gender) -> Vec<Self::Key> {
        Vec::new()
    }

    /// Whether the vocative equals the nominative in `key`'s slot row
    /// (count, gender, degree). The case of `key` is ignored.
    fn vocative_equals_nominative(&self, _key: Self::Key, _gender: Gender) -> bool {
        false
    }
}

/// Root + table ending, or `NoEnding` when the slot is empty.
pub fn regular_decline<D: Declension + ?Sized>(
    pattern: &D,
    key: D::Key,
    gender: Gender,
    root: &str,
) -> Result<String, FormingError> {
    match pattern.ending(key, gender) {
        Some(ending) => Ok(format!("{}{}", root, ending)),
        None => Err(FormingError::no_ending(pattern.name(), key)),
    }
}

/// Inverse of [`regular_decline`].
pub fn regular_root<D: Declension + ?Sized>(
    pattern: &D,
    key: D::Key,
    gender: Gender,
    form: &str,
) -> Result<String, FormingError> {
    let ending = pattern
        .ending(key, gender)
        .ok_or_else(|| FormingError::no_ending(pattern.name(), key))?;
    strip_ending(pattern.name(), key, form, ending)
}
