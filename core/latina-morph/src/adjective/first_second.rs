use alloc::borrow::Cow;
use alloc::string::String;

use latina_protocol::{AdjectiveForm, Case, Count, Gender};

use crate::noun::{FIRST_ENDINGS, SECOND_ER_ENDINGS, SECOND_UM_ENDINGS, SECOND_US_ENDINGS};
use crate::table::GenderedEndings;

use super::{masculine_nominative, masculine_root, PositiveDeclension};

static US_A_UM: GenderedEndings = GenderedEndings {
    masculine: &SECOND_US_ENDINGS,
    feminine: &FIRST_ENDINGS,
    neuter: &SECOND_UM_ENDINGS,
};

static ER_A_UM: GenderedEndings = GenderedEndings {
    masculine: &SECOND_ER_ENDINGS,
    feminine: &FIRST_ENDINGS,
    neuter: &SECOND_UM_ENDINGS,
};

fn is_masculine_nominative_singular(key: AdjectiveForm) -> bool {
    key.gender == Gender::Masculine
        && key.count == Count::Singular
        && matches!(key.case, Case::Nominative | Case::Vocative)
}

/// bonus, bona, bonum.
pub struct FirstSecondUs;

impl PositiveDeclension for FirstSecondUs {
    fn name(&self) -> &'static str {
        "first-second-us-a-um"
    }

    fn endings(&self) -> &'static GenderedEndings {
        &US_A_UM
    }

    fn vocative_equals_nominative(&self, key: AdjectiveForm) -> bool {
        !(key.gender == Gender::Masculine && key.count == Count::Singular)
    }
}

/// pulcher, pulchra, pulchrum: the root drops the e of the masculine
/// nominative (pulchr-).
pub struct FirstSecondEr;

impl PositiveDeclension for FirstSecondEr {
    fn name(&self) -> &'static str {
        "first-second-er-a-um"
    }

    fn endings(&self) -> &'static GenderedEndings {
        &ER_A_UM
    }

    fn irregular_form(&self, key: AdjectiveForm, root: &str) -> Option<String> {
        is_masculine_nominative_singular(key).then(|| masculine_nominative(root).into_owned())
    }

    fn irregular_root(&self, key: AdjectiveForm, form: &str) -> Option<String> {
        if is_masculine_nominative_singular(key) {
            masculine_root(form)
        } else {
            None
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
    use latina_protocol::ComparisonDegree;

    fn pos(case: Case, count: Count, gender: Gender) -> AdjectiveForm {
        AdjectiveForm::positive(case, count, gender)
    }

    #[test]
    fn test_bonus() {
        let p = AdjectivePattern::FirstSecondUs;
        assert_eq!(p.decline(pos(Case::Nominative, Count::Singular, Gender::Masculine), "bon").unwrap(), "bonus");
        assert_eq!(p.decline(pos(Case::Vocative, Count::Singular, Gender::Masculine), "bon").unwrap(), "bone");
        assert_eq!(p.decline(pos(Case::Ablative, Count::Singular, Gender::Feminine), "bon").unwrap(), "bonā");
        assert_eq!(p.decline(pos(Case::Nominative, Count::Plural, Gender::Neuter), "bon").unwrap(), "bona");
    }

    #[test]
    fn test_pulcher() {
        let p = AdjectivePattern::FirstSecondEr;
        let nom_m = pos(Case::Nominative, Count::Singular, Gender::Masculine);
        assert_eq!(p.decline(nom_m, "pulchr").unwrap(), "pulcher");
        assert_eq!(p.decline(nom_m, "miser").unwrap(), "miser");
        assert_eq!(p.decline(pos(Case::Nominative, Count::Singular, Gender::Feminine), "pulchr").unwrap(), "pulchra");
        assert_eq!(p.determine_root(nom_m, "pulcher").unwrap(), "pulchr");

        let sup = AdjectiveForm::new(ComparisonDegree::Superlative, Case::Nominative, Count::Singular, Gender::Masculine);
        assert_eq!(p.decline(sup, "pulchr").unwrap(), "pulcherrimus");
        assert_eq!(p.determine_root(sup, "pulcherrimus").unwrap(), "pulchr");
    }
}
