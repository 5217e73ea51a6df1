use alloc::string::{String, ToString};
use alloc::vec::Vec;

use latina_protocol::{Case, Count, Gender, NounForm};

use crate::declension::{regular_decline, regular_root, Declension};
use crate::error::FormingError;
use crate::orthography::ends_with_normalized;
use crate::table::{row, NounEndings};

use super::dative_ablative_plural;

pub(crate) static US_ENDINGS: NounEndings = NounEndings {
    singular: row!["us", "ī", "ō", "um", "ō", "e"],
    plural: row!["ī", "ōrum", "īs", "ōs", "īs", "ī"],
};

pub(crate) static ER_ENDINGS: NounEndings = NounEndings {
    singular: row!["", "ī", "ō", "um", "ō", ""],
    plural: row!["ī", "ōrum", "īs", "ōs", "īs", "ī"],
};

pub(crate) static UM_ENDINGS: NounEndings = NounEndings {
    singular: row!["um", "ī", "ō", "um", "ō", "um"],
    plural: row!["a", "ōrum", "īs", "a", "īs", "a"],
};

const VOCATIVE_SINGULAR: NounForm = NounForm::new(Case::Vocative, Count::Singular);

/// dominus, dominī (m.).
///
/// Roots in -i take the bare root as vocative singular: fīli, not fīlie.
pub struct SecondDeclensionUs;

impl Declension for SecondDeclensionUs {
    type Key = NounForm;

    fn name(&self) -> &'static str {
        "second-declension-us"
    }

    fn primary_gender(&self) -> Option<Gender> {
        Some(Gender::Masculine)
    }

    fn allows_gender(&self, gender: Gender) -> bool {
        matches!(gender, Gender::Masculine | Gender::Feminine)
    }

    fn ending(&self, key: NounForm, _gender: Gender) -> Option<&'static str> {
        US_ENDINGS.form(key)
    }

    fn decline(&self, key: NounForm, gender: Gender, root: &str) -> Result<String, FormingError> {
        if key == VOCATIVE_SINGULAR && ends_with_normalized(root, "i") {
            return Ok(root.to_string());
        }
        regular_decline(self, key, gender, root)
    }

    fn determine_root(&self, key: NounForm, gender: Gender, form: &str) -> Result<String, FormingError> {
        if key == VOCATIVE_SINGULAR && ends_with_normalized(form, "i") {
            return Ok(form.to_string());
        }
        regular_root(self, key, gender, form)
    }

    fn seed_equal_forms(&self, key: NounForm, _gender: Gender) -> Vec<NounForm> {
        dative_ablative_plural(key)
    }

    fn vocative_equals_nominative(&self, key: NounForm, _gender: Gender) -> bool {
        key.count == Count::Plural
    }
}

/// puer, puerī (m.): the root is the nominative singular.
pub struct SecondDeclensionEr;

impl Declension for SecondDeclensionEr {
    type Key = NounForm;

    fn name(&self) -> &'static str {
        "second-declension-er"
    }

    fn primary_gender(&self) -> Option<Gender> {
        Some(Gender::Masculine)
    }

    fn allows_gender(&self, gender: Gender) -> bool {
        gender == Gender::Masculine
    }

    fn ending(&self, key: NounForm, _gender: Gender) -> Option<&'static str> {
        ER_ENDINGS.form(key)
    }

    fn seed_equal_forms(&self, key: NounForm, _gender: Gender) -> Vec<NounForm> {
        dative_ablative_plural(key)
    }

    fn vocative_equals_nominative(&self, _key: NounForm, _gender: Gender) -> bool {
        true
    }
}

/// templum, templī (n.).
pub struct SecondDeclensionUm;

impl Declension for SecondDeclensionUm {
    type Key = NounForm;

    fn name(&self) -> &'static str {
        "second-declension-um"
    }

    fn primary_gender(&self) -> Option<Gender> {
        Some(Gender::Neuter)
    }

    fn allows_gender(&self, gender: Gender) -> bool {
        gender == Gender::Neuter
    }

    fn ending(&self, key: NounForm, _gender: Gender) -> Option<&'static str> {
        UM_ENDINGS.form(key)
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

    const M: Gender = Gender::Masculine;

    #[test]
    fn test_vocative_of_i_root_is_bare_root() {
        let p = SecondDeclensionUs;
        assert_eq!(p.decline(VOCATIVE_SINGULAR, M, "fili").unwrap(), "fili");
        assert_eq!(p.decline(VOCATIVE_SINGULAR, M, "fīli").unwrap(), "fīli");
        assert_eq!(p.decline(VOCATIVE_SINGULAR, M, "domin").unwrap(), "domine");
        assert_eq!(p.decline(NounForm::new(Case::Nominative, Count::Singular), M, "fili").unwrap(), "filius");
    }

    #[test]
    fn test_vocative_inverse() {
        let p = SecondDeclensionUs;
        assert_eq!(p.determine_root(VOCATIVE_SINGULAR, M, "fili").unwrap(), "fili");
        assert_eq!(p.determine_root(VOCATIVE_SINGULAR, M, "domine").unwrap(), "domin");
        assert!(p.determine_root(VOCATIVE_SINGULAR, M, "dominus").is_err());
    }

    #[test]
    fn test_puer_and_templum() {
        let nom_sg = NounForm::new(Case::Nominative, Count::Singular);
        let gen_pl = NounForm::new(Case::Genitive, Count::Plural);
        assert_eq!(SecondDeclensionEr.decline(nom_sg, M, "puer").unwrap(), "puer");
        assert_eq!(SecondDeclensionEr.decline(gen_pl, M, "puer").unwrap(), "puerōrum");
        assert_eq!(SecondDeclensionEr.determine_root(nom_sg, M, "puer").unwrap(), "puer");
        assert_eq!(
            SecondDeclensionUm.decline(NounForm::new(Case::Accusative, Count::Plural), Gender::Neuter, "templ").unwrap(),
            "templa"
        );
    }
}
