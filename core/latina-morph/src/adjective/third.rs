use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use latina_protocol::{AdjectiveForm, Case, Count, Gender};

use crate::table::{row, GenderedEndings, NounEndings, Row};

use super::{masculine_nominative, masculine_root, PositiveDeclension};

const COMMON_PLURAL: Row = row!["ēs", "ium", "ibus", "ēs", "ibus", "ēs"];
const NEUTER_PLURAL: Row = row!["ia", "ium", "ibus", "ia", "ibus", "ia"];

// One ending: the nominative singular (ingēns, fēlīx) is not predictable
// from the root.
static ONE_COMMON: NounEndings = NounEndings {
    singular: row![-, "is", "ī", "em", "ī", -],
    plural: COMMON_PLURAL,
};

static ONE_NEUTER: NounEndings = NounEndings {
    singular: row![-, "is", "ī", -, "ī", -],
    plural: NEUTER_PLURAL,
};

static TWO_COMMON: NounEndings = NounEndings {
    singular: row!["is", "is", "ī", "em", "ī", "is"],
    plural: COMMON_PLURAL,
};

static TWO_NEUTER: NounEndings = NounEndings {
    singular: row!["e", "is", "ī", "e", "ī", "e"],
    plural: NEUTER_PLURAL,
};

// Masculine nominative/vocative singular are built by e re-insertion.
static THREE_MASCULINE: NounEndings = NounEndings {
    singular: row!["", "is", "ī", "em", "ī", ""],
    plural: COMMON_PLURAL,
};

static ONE_ENDING: GenderedEndings = GenderedEndings {
    masculine: &ONE_COMMON,
    feminine: &ONE_COMMON,
    neuter: &ONE_NEUTER,
};

static TWO_ENDINGS: GenderedEndings = GenderedEndings {
    masculine: &TWO_COMMON,
    feminine: &TWO_COMMON,
    neuter: &TWO_NEUTER,
};

static THREE_ENDINGS: GenderedEndings = GenderedEndings {
    masculine: &THREE_MASCULINE,
    feminine: &TWO_COMMON,
    neuter: &TWO_NEUTER,
};

fn is_nominative_singular(key: AdjectiveForm) -> bool {
    key.count == Count::Singular && matches!(key.case, Case::Nominative | Case::Vocative)
}

fn other_common_gender(key: AdjectiveForm) -> Vec<AdjectiveForm> {
    match key.gender {
        Gender::Masculine => vec![key.with_gender(Gender::Feminine)],
        Gender::Feminine => vec![key.with_gender(Gender::Masculine)],
        Gender::Neuter => Vec::new(),
    }
}

/// ingēns, ingentis: one nominative singular for all genders.
pub struct OneEnding;

impl PositiveDeclension for OneEnding {
    fn name(&self) -> &'static str {
        "i-stem-one-ending"
    }

    fn endings(&self) -> &'static GenderedEndings {
        &ONE_ENDING
    }

    fn seed_equal_forms(&self, key: AdjectiveForm) -> Vec<AdjectiveForm> {
        if is_nominative_singular(key) {
            Gender::ALL
                .iter()
                .filter(|g| **g != key.gender)
                .map(|g| key.with_gender(*g))
                .collect()
        } else {
            other_common_gender(key)
        }
    }
}

/// fortis, forte.
pub struct TwoEndings;

impl PositiveDeclension for TwoEndings {
    fn name(&self) -> &'static str {
        "i-stem-two-ending"
    }

    fn endings(&self) -> &'static GenderedEndings {
        &TWO_ENDINGS
    }

    fn seed_equal_forms(&self, key: AdjectiveForm) -> Vec<AdjectiveForm> {
        other_common_gender(key)
    }
}

/// ācer, ācris, ācre.
pub struct ThreeEndings;

impl ThreeEndings {
    fn is_masculine_nominative(key: AdjectiveForm) -> bool {
        key.gender == Gender::Masculine && is_nominative_singular(key)
    }
}

impl PositiveDeclension for ThreeEndings {
    fn name(&self) -> &'static str {
        "i-stem-three-ending"
    }

    fn endings(&self) -> &'static GenderedEndings {
        &THREE_ENDINGS
    }

    fn irregular_form(&self, key: AdjectiveForm, root: &str) -> Option<String> {
        Self::is_masculine_nominative(key).then(|| masculine_nominative(root).into_owned())
    }

    fn irregular_root(&self, key: AdjectiveForm, form: &str) -> Option<String> {
        if Self::is_masculine_nominative(key) {
            masculine_root(form)
        } else {
            None
        }
    }

    fn seed_equal_forms(&self, key: AdjectiveForm) -> Vec<AdjectiveForm> {
        if is_nominative_singular(key) {
            Vec::new()
        } else {
            other_common_gender(key)
        }
    }

    fn superlative_base<'r>(&self, root: &'r str) -> Cow<'r, str> {
        masculine_nominative(root)
    }

    fn root_from_superlative_base(&self, base: &str) -> String {
        masculine_root(base).unwrap_or_else(|| base.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjective::AdjectivePattern;
    use crate::error::FormingError;
    use latina_protocol::ComparisonDegree;

    fn key(degree: ComparisonDegree, case: Case, count: Count, gender: Gender) -> AdjectiveForm {
        AdjectiveForm::new(degree, case, count, gender)
    }

    #[test]
    fn test_acer() {
        let p = AdjectivePattern::ThreeEnding;
        let pos = ComparisonDegree::Positive;
        assert_eq!(p.decline(key(pos, Case::Nominative, Count::Singular, Gender::Masculine), "ācr").unwrap(), "ācer");
        assert_eq!(p.decline(key(pos, Case::Nominative, Count::Singular, Gender::Feminine), "ācr").unwrap(), "ācris");
        assert_eq!(p.decline(key(pos, Case::Nominative, Count::Singular, Gender::Neuter), "ācr").unwrap(), "ācre");
        assert_eq!(p.decline(key(pos, Case::Genitive, Count::Plural, Gender::Neuter), "ācr").unwrap(), "ācrium");
    }

    #[test]
    fn test_three_ending_superlative_inserts_rim() {
        let p = AdjectivePattern::ThreeEnding;
        let sup = ComparisonDegree::Superlative;
        let nom_m = key(sup, Case::Nominative, Count::Singular, Gender::Masculine);
        assert_eq!(p.decline(nom_m, "ācr").unwrap(), "ācerrimus");
        assert_eq!(p.decline(nom_m, "celer").unwrap(), "celerrimus");
        assert_eq!(
            p.decline(key(sup, Case::Genitive, Count::Plural, Gender::Feminine), "ācr").unwrap(),
            "ācerrimārum"
        );
        assert_eq!(p.determine_root(nom_m, "ācerrimus").unwrap(), "ācr");
    }

    #[test]
    fn test_two_ending_comparison() {
        let p = AdjectivePattern::TwoEnding;
        let nom_n = |degree| key(degree, Case::Nominative, Count::Singular, Gender::Neuter);
        assert_eq!(p.decline(nom_n(ComparisonDegree::Positive), "fort").unwrap(), "forte");
        assert_eq!(p.decline(nom_n(ComparisonDegree::Comparative), "fort").unwrap(), "fortius");
        assert_eq!(p.decline(nom_n(ComparisonDegree::Superlative), "fort").unwrap(), "fortissimum");
        assert_eq!(p.decline(nom_n(ComparisonDegree::Superlative), "facil").unwrap(), "facillimum");
        assert_eq!(
            p.decline(key(ComparisonDegree::Comparative, Case::Ablative, Count::Plural, Gender::Masculine), "fort").unwrap(),
            "fortiōribus"
        );
    }

    #[test]
    fn test_one_ending_nominative_left_to_user() {
        let p = AdjectivePattern::OneEnding;
        let pos = ComparisonDegree::Positive;
        assert!(matches!(
            p.decline(key(pos, Case::Nominative, Count::Singular, Gender::Feminine), "ingent"),
            Err(FormingError::NoEnding { .. })
        ));
        assert_eq!(p.decline(key(pos, Case::Genitive, Count::Singular, Gender::Neuter), "ingent").unwrap(), "ingentis");

        let eq = p.equal_forms(key(pos, Case::Nominative, Count::Singular, Gender::Masculine)).unwrap();
        assert!(eq.contains(&key(pos, Case::Nominative, Count::Singular, Gender::Neuter)));
        assert!(eq.contains(&key(pos, Case::Accusative, Count::Singular, Gender::Neuter)));
        assert!(eq.contains(&key(pos, Case::Vocative, Count::Singular, Gender::Feminine)));
    }
}
