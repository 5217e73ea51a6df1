use alloc::vec::Vec;

use latina_protocol::{Gender, NounForm};

use crate::declension::Declension;
use crate::table::{row, NounEndings};

use super::dative_ablative_plural;

static ENDINGS: NounEndings = NounEndings {
    singular: row!["us", "ūs", "uī", "um", "ū", "us"],
    plural: row!["ūs", "uum", "ibus", "ūs", "ibus", "ūs"],
};

/// frūctus, frūctūs (m.); manus (f.).
pub struct FourthDeclension;

impl Declension for FourthDeclension {
    type Key = NounForm;

    fn name(&self) -> &'static str {
        "fourth-declension-us"
    }

    fn primary_gender(&self) -> Option<Gender> {
        Some(Gender::Masculine)
    }

    fn allows_gender(&self, gender: Gender) -> bool {
        matches!(gender, Gender::Masculine | Gender::Feminine)
    }

    fn ending(&self, key: NounForm, _gender: Gender) -> Option<&'static str> {
        ENDINGS.form(key)
    }

    fn seed_equal_forms(&self, key: NounForm, _gender: Gender) -> Vec<NounForm> {
        dative_ablative_plural(key)
    }

    fn vocative_equals_nominative(&self, _key: NounForm, _gender: Gender) -> bool {
        true
    }
}
