use alloc::string::{String, ToString};
use core::fmt::Display;

use crate::error::FormingError;
use crate::orthography::{normalize, strip_trailing_letters};

/// Removes `ending` from `form`, comparing without diacritics but keeping
/// the diacritics of the remaining root.
///
/// `"ancillārum"` and `"ancillarum"` both give `"ancill"` for `"ārum"`.
pub fn strip_ending(
    pattern: &'static str,
    category: impl Display,
    form: &str,
    ending: &str,
) -> Result<String, FormingError> {
    let normalized_ending = normalize(ending);
    if !normalize(form).ends_with(normalized_ending.as_str()) {
        return Err(FormingError::EndingMismatch {
            pattern,
            category: category.to_string(),
            form: form.to_string(),
            ending: ending.to_string(),
        });
    }

    match strip_trailing_letters(form, normalized_ending.chars().count()) {
        Some(root) if !root.is_empty() => Ok(root.to_string()),
        _ => Err(FormingError::EmptyRoot {
            pattern,
            category: category.to_string(),
            form: form.to_string(),
        }),
    }
}
