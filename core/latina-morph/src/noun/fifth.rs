use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use latina_protocol::{Case, Count, Gender, NounForm};

use crate::declension::{regular_decline, regular_root, Declension};
use crate::error::FormingError;
use crate::orthography::ends_with_normalized;
use crate::root::strip_ending;
use crate::table::{row, NounEndings};

use super::dative_ablative_plural;

static ENDINGS: NounEndings = NounEndings {
    singular: row!["ēs", "eī", "eī", "em", "ē", "ēs"],
    plural: row!["ēs", "ērum", "ēbus", "ēs", "ēbus", "ēs"],
};

/// After a vowel the e of the genitive/dative singular stays long: diēī, but reī.
const LONG_E: &str = "ēī";

/// rēs, reī (f.); diēs, diēī (m.).
pub struct FifthDeclension;

impl FifthDeclension {
    fn takes_long_e(key: NounForm) -> bool {
        key.count == Count::Singular && matches!(key.case, Case::Genitive | Case::Dative)
    }
}

impl Declension for FifthDeclension {
    type Key = NounForm;

    fn name(&self) -> &'static str {
        "fifth-declension-e"
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

    fn decline(&self, key: NounForm, gender: Gender, root: &str) -> Result<String, FormingError> {
        if Self::takes_long_e(key) && ends_with_normalized(root, "i") {
            return Ok(format!("{}{}", root, LONG_E));
        }
        regular_decline(self, key, gender, root)
    }

    fn determine_root(&self, key: NounForm, gender: Gender, form: &str) -> Result<String, FormingError> {
        if Self::takes_long_e(key) && ends_with_normalized(form, "iei") {
            return strip_ending(self.name(), key, form, LONG_E);
        }
        regular_root(self, key, gender, form)
    }

    fn seed_equal_forms(&self, key: NounForm, _gender: Gender) -> Vec<NounForm> {
        dative_ablative_plural(key)
    }

    fn vocative_equals_nominative(&self, _key: NounForm, _gender: Gender) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEN_SG: NounForm = NounForm::new(Case::Genitive, Count::Singular);

    #[test]
    fn test_long_e_after_i() {
        assert_eq!(FifthDeclension.decline(GEN_SG, Gender::Masculine, "di").unwrap(), "diēī");
        assert_eq!(
            FifthDeclension.decline(NounForm::new(Case::Dative, Count::Singular), Gender::Masculine, "di").unwrap(),
            "diēī"
        );
        assert_eq!(FifthDeclension.decline(GEN_SG, Gender::Feminine, "r").unwrap(), "reī");
        assert_eq!(
            FifthDeclension.decline(NounForm::new(Case::Ablative, Count::Singular), Gender::Masculine, "di").unwrap(),
            "diē"
        );
    }

    #[test]
    fn test_long_e_inverse() {
        assert_eq!(FifthDeclension.determine_root(GEN_SG, Gender::Masculine, "diēī").unwrap(), "di");
        assert_eq!(FifthDeclension.determine_root(GEN_SG, Gender::Masculine, "diei").unwrap(), "di");
        assert_eq!(FifthDeclension.determine_root(GEN_SG, Gender::Feminine, "reī").unwrap(), "r");
    }
}
