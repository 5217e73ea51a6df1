//! Equal-forms closure: slots a pattern guarantees to spell identically.

use alloc::vec::Vec;

use latina_protocol::{Case, FormKey, Gender};

use crate::declension::Declension;

/// Every slot spelled identically to `key` under `pattern`, `key` included.
///
/// Returns `None` when `key` stands alone. The closure is taken one step
/// deep over the pattern seeds and the neuter and vocative rules, which are
/// all symmetric, so the result is symmetric too. Order is unspecified.
pub fn equal_forms<D: Declension + ?Sized>(pattern: &D, key: D::Key, gender: Gender) -> Option<Vec<D::Key>> {
    let mut members = direct_equals(pattern, key, gender);
    let first_step = members.clone();
    for member in first_step {
        for other in direct_equals(pattern, member, gender) {
            push_unique(&mut members, other);
        }
    }

    (members.len() > 1).then_some(members)
}

fn direct_equals<D: Declension + ?Sized>(pattern: &D, key: D::Key, gender: Gender) -> Vec<D::Key> {
    let mut members = Vec::new();
    for seed in pattern.seed_equal_forms(key, gender) {
        push_unique(&mut members, seed);
    }
    push_unique(&mut members, key);

    let case = key.case();

    // Neuter nominative, accusative and vocative always coincide.
    if key.gender_or(gender) == Gender::Neuter && matches!(case, Case::Nominative | Case::Accusative | Case::Vocative) {
        for sibling in [Case::Nominative, Case::Accusative, Case::Vocative] {
            push_unique(&mut members, key.with_case(sibling));
        }
    }

    if matches!(case, Case::Nominative | Case::Vocative)
        && pattern.vocative_equals_nominative(key.with_case(Case::Nominative), gender)
    {
        push_unique(&mut members, key.with_case(Case::Nominative));
        push_unique(&mut members, key.with_case(Case::Vocative));
    }

    members
}

fn push_unique<K: PartialEq>(members: &mut Vec<K>, key: K) {
    if !members.contains(&key) {
        members.push(key);
    }
}
