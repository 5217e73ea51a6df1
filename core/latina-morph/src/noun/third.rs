use alloc::vec::Vec;

use latina_protocol::{Gender, NounForm};

use crate::declension::Declension;
use crate::table::{row, NounEndings};

use super::dative_ablative_plural;

// The nominative singular of a consonant stem is not predictable from the
// root (rēx, rēgis); it is left to the user.
static CONSONANT: NounEndings = NounEndings {
    singular: row![-, "is", "ī", "em", "e", -],
    plural: row!["ēs", "um", "ibus", "ēs", "ibus", "ēs"],
};

static CONSONANT_NEUTER: NounEndings = NounEndings {
    singular: row![-, "is", "ī", -, "e", -],
    plural: row!["a", "um", "ibus", "a", "ibus", "a"],
};

static I_STEM: NounEndings = NounEndings {
    singular: row!["is", "is", "ī", "em", "e", "is"],
    plural: row!["ēs", "ium", "ibus", "ēs", "ibus", "ēs"],
};

static I_STEM_NEUTER: NounEndings = NounEndings {
    singular: row!["e", "is", "ī", "e", "ī", "e"],
    plural: row!["ia", "ium", "ibus", "ia", "ibus", "ia"],
};

/// rēx, rēgis (m.); corpus, corporis (n.).
pub struct ThirdDeclension;

impl Declension for ThirdDeclension {
    type Key = NounForm;

    fn name(&self) -> &'static str {
        "third-declension"
    }

    fn allows_gender(&self, _gender: Gender) -> bool {
        true
    }

    fn ending(&self, key: NounForm, gender: Gender) -> Option<&'static str> {
        match gender {
            Gender::Neuter => CONSONANT_NEUTER.form(key),
            Gender::Masculine | Gender::Feminine => CONSONANT.form(key),
        }
    }

    fn seed_equal_forms(&self, key: NounForm, _gender: Gender) -> Vec<NounForm> {
        dative_ablative_plural(key)
    }

    fn vocative_equals_nominative(&self, _key: NounForm, _gender: Gender) -> bool {
        true
    }
}

/// cīvis, cīvis (m./f.); mare, maris (n.).
pub struct ThirdDeclensionIStem;

impl Declension for ThirdDeclensionIStem {
    type Key = NounForm;

    fn name(&self) -> &'static str {
        "third-declension-i-stem"
    }

    fn allows_gender(&self, _gender: Gender) -> bool {
        true
    }

    fn ending(&self, key: NounForm, gender: Gender) -> Option<&'static str> {
        match gender {
            Gender::Neuter => I_STEM_NEUTER.form(key),
            Gender::Masculine | Gender::Feminine => I_STEM.form(key),
        }
    }

    fn seed_equal_forms(&self, key: NounForm, _gender: Gender) -> Vec<NounForm> {
        dative_ablative_plural(key)
    }

    fn vocative_equals_nominative(&self, _key: NounForm, _gender: Gender) -> bool {
        true
    }
}
