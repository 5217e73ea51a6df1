use alloc::vec::Vec;

use latina_protocol::{Gender, NounForm};

use crate::declension::Declension;
use crate::table::{row, NounEndings};

use super::dative_ablative_plural;

pub(crate) static ENDINGS: NounEndings = NounEndings {
    singular: row!["a", "ae", "ae", "am", "ā", "a"],
    plural: row!["ae", "ārum", "īs", "ās", "īs", "ae"],
};

/// ancilla, ancillae (f.); also a few masculines such as nauta.
pub struct FirstDeclension;

impl Declension for FirstDeclension {
    type Key = NounForm;

    fn name(&self) -> &'static str {
        "first-declension-a"
    }

    fn primary_gender(&self) -> Option<Gender> {
        Some(Gender::Feminine)
    }

    fn allows_gender(&self, gender: Gender) -> bool {
        matches!(gender, Gender::Feminine | Gender::Masculine)
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
