//! Comparative and superlative, shared by every positive pattern.

use alloc::format;
use alloc::string::{String, ToString};

use latina_protocol::{AdjectiveForm, Count, Gender};

use crate::error::FormingError;
use crate::noun::{FIRST_ENDINGS, SECOND_UM_ENDINGS, SECOND_US_ENDINGS};
use crate::orthography::{ends_with_normalized, strip_trailing_letters};
use crate::root::strip_ending;
use crate::table::{row, GenderedEndings, NounEndings};

static COMPARATIVE_COMMON: NounEndings = NounEndings {
    singular: row!["ior", "iōris", "iōrī", "iōrem", "iōre", "ior"],
    plural: row!["iōrēs", "iōrum", "iōribus", "iōrēs", "iōribus", "iōrēs"],
};

static COMPARATIVE_NEUTER: NounEndings = NounEndings {
    singular: row!["ius", "iōris", "iōrī", "ius", "iōre", "ius"],
    plural: row!["iōra", "iōrum", "iōribus", "iōra", "iōribus", "iōra"],
};

/// fortior, fortius: appended to the root.
pub static COMPARATIVE: GenderedEndings = GenderedEndings {
    masculine: &COMPARATIVE_COMMON,
    feminine: &COMPARATIVE_COMMON,
    neuter: &COMPARATIVE_NEUTER,
};

/// fortissimus, -a, -um: appended to the superlative stem.
pub static SUPERLATIVE: GenderedEndings = GenderedEndings {
    masculine: &SECOND_US_ENDINGS,
    feminine: &FIRST_ENDINGS,
    neuter: &SECOND_UM_ENDINGS,
};

const ISSIM: &str = "issim";
const RIM: &str = "rim";
const LIM: &str = "lim";

/// Superlative infix for a base: ācer → ācerrim-, facil → facillim-,
/// fort → fortissim-.
pub fn superlative_infix(base: &str) -> &'static str {
    if base.ends_with("er") {
        return RIM;
    }
    if base.ends_with('l') {
        return LIM;
    }
    if ends_with_normalized(base, "er") {
        RIM
    } else if ends_with_normalized(base, "l") {
        LIM
    } else {
        ISSIM
    }
}

pub fn superlative_stem(base: &str) -> String {
    format!("{}{}", base, superlative_infix(base))
}

/// Inverse of [`superlative_stem`] after the case ending: recovers the base.
pub fn superlative_base(pattern: &'static str, key: AdjectiveForm, form: &str) -> Result<String, FormingError> {
    let ending = SUPERLATIVE
        .form(key)
        .ok_or_else(|| FormingError::no_ending(pattern, key))?;
    let stem = strip_ending(pattern, key, form, ending)?;

    for (infix, base_tail) in [(ISSIM, None), (RIM, Some("er")), (LIM, Some("l"))] {
        if !ends_with_normalized(&stem, infix) {
            continue;
        }
        if let Some(base) = strip_trailing_letters(&stem, infix.len()) {
            if !base.is_empty() && base_tail.map_or(true, |tail| ends_with_normalized(base, tail)) {
                return Ok(base.to_string());
            }
        }
    }

    Err(FormingError::EndingMismatch {
        pattern,
        category: key.to_string(),
        form: form.to_string(),
        ending: format!("{}{}", ISSIM, ending),
    })
}

/// Masculine M ≡ F rows of the comparative.
pub fn comparative_partner(key: AdjectiveForm) -> Option<AdjectiveForm> {
    match key.gender {
        Gender::Masculine => Some(key.with_gender(Gender::Feminine)),
        Gender::Feminine => Some(key.with_gender(Gender::Masculine)),
        Gender::Neuter => None,
    }
}

/// Superlative vocative differs only in the masculine singular (-issime).
pub fn superlative_vocative_equals_nominative(key: AdjectiveForm) -> bool {
    !(key.gender == Gender::Masculine && key.count == Count::Singular)
}
