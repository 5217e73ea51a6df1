#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod adjective;
pub mod declension;
pub mod equal;
pub mod error;
pub mod noun;
pub mod orthography;
pub mod root;
pub mod table;

use alloc::string::String;
use core::fmt;

pub use adjective::{AdjectivePattern, Adjectival, PositiveDeclension};
pub use declension::{regular_decline, regular_root, Declension};
pub use equal::equal_forms;
pub use error::FormingError;
pub use noun::NounPattern;
pub use root::strip_ending;

/// A pattern name that names no pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPattern(pub String);

impl fmt::Display for UnknownPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown declension pattern '{}'", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownPattern {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use latina_protocol::{AdjectiveForm, Case, FormKey, Gender, NounForm};
    use proptest::prelude::*;

    const ROOTS: &[&str] = &["ancill", "domin", "fili", "di", "rēg", "cīv", "frūct", "templ", "fort", "ācr", "ingent"];

    fn admitted(pattern: NounPattern) -> Vec<Gender> {
        Gender::ALL.iter().copied().filter(|g| pattern.allows_gender(*g)).collect()
    }

    /// -er adjectives cannot tell a root in -er from one in consonant + r
    /// once the e is re-inserted; see `test_er_roots_recover_as_consonant_r`.
    fn ambiguous_er_root(pattern: AdjectivePattern, root: &str) -> bool {
        matches!(pattern, AdjectivePattern::FirstSecondEr | AdjectivePattern::ThreeEnding) && root.ends_with("er")
    }

    proptest! {
        #[test]
        fn test_noun_round_trip(root in "[a-z]{1,8}") {
            for pattern in NounPattern::ALL {
                for gender in admitted(pattern) {
                    for key in NounForm::all() {
                        if let Ok(form) = pattern.decline(key, gender, &root) {
                            prop_assert_eq!(pattern.determine_root(key, gender, &form), Ok(root.clone()),
                                "{} {} {:?} via '{}'", pattern, key, gender, form);
                        }
                    }
                }
            }
        }

        #[test]
        fn test_adjective_round_trip(root in "[a-z]{1,8}") {
            for pattern in AdjectivePattern::ALL {
                if ambiguous_er_root(pattern, &root) {
                    continue;
                }
                for key in AdjectiveForm::all() {
                    if let Ok(form) = pattern.decline(key, &root) {
                        prop_assert_eq!(pattern.determine_root(key, &form), Ok(root.clone()),
                            "{} {} via '{}'", pattern, key, form);
                    }
                }
            }
        }

        #[test]
        fn test_root_recovery_ignores_macrons(root in "[a-z]{1,8}") {
            let key = NounForm::new(Case::Genitive, latina_protocol::Count::Plural);
            let form = NounPattern::FirstA.decline(key, Gender::Feminine, &root).unwrap();
            let bare = orthography::normalize(&form);
            prop_assert_eq!(NounPattern::FirstA.determine_root(key, Gender::Feminine, &bare), Ok(root));
        }
    }

    #[test]
    fn test_round_trip_keeps_macrons_of_the_root() {
        for root in ROOTS {
            for pattern in NounPattern::ALL {
                for gender in admitted(pattern) {
                    for key in NounForm::all() {
                        if let Ok(form) = pattern.decline(key, gender, root) {
                            assert_eq!(pattern.determine_root(key, gender, &form).as_deref(), Ok(*root));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_er_roots_recover_as_consonant_r() {
        use latina_protocol::{ComparisonDegree, Count};

        let nominative = AdjectiveForm::positive(Case::Nominative, Count::Singular, Gender::Masculine);
        let genitive = AdjectiveForm::positive(Case::Genitive, Count::Singular, Gender::Masculine);
        let superlative = AdjectiveForm::new(ComparisonDegree::Superlative, Case::Nominative, Count::Singular, Gender::Masculine);

        for (pattern, root, recovered) in [
            (AdjectivePattern::FirstSecondEr, "asper", "aspr"),
            (AdjectivePattern::ThreeEnding, "ācer", "ācr"),
        ] {
            let form = pattern.decline(nominative, root).unwrap();
            assert_eq!(form, root);
            assert_eq!(pattern.determine_root(nominative, &form).as_deref(), Ok(recovered));

            let form = pattern.decline(superlative, root).unwrap();
            assert_eq!(pattern.determine_root(superlative, &form).as_deref(), Ok(recovered));

            let form = pattern.decline(genitive, root).unwrap();
            assert_eq!(pattern.determine_root(genitive, &form).as_deref(), Ok(root));
        }
    }

    #[test]
    fn test_noun_equal_forms_are_symmetric() {
        for pattern in NounPattern::ALL {
            for gender in Gender::ALL.iter().copied() {
                for a in NounForm::all() {
                    for b in pattern.equal_forms(a, gender).unwrap_or_default() {
                        let back = pattern.equal_forms(b, gender).unwrap_or_default();
                        assert!(back.contains(&a), "{} {:?}: {} -> {} not symmetric", pattern, gender, a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_adjective_equal_forms_are_symmetric() {
        for pattern in AdjectivePattern::ALL {
            for a in AdjectiveForm::all() {
                for b in pattern.equal_forms(a).unwrap_or_default() {
                    let back = pattern.equal_forms(b).unwrap_or_default();
                    assert!(back.contains(&a), "{}: {} -> {} not symmetric", pattern, a, b);
                }
            }
        }
    }

    #[test]
    fn test_equal_forms_never_singleton() {
        for pattern in AdjectivePattern::ALL {
            for key in AdjectiveForm::all() {
                if let Some(eq) = pattern.equal_forms(key) {
                    assert!(eq.len() >= 2);
                    assert!(eq.contains(&key));
                }
            }
        }
    }

    #[test]
    fn test_neuter_closure() {
        let siblings = [Case::Nominative, Case::Accusative, Case::Vocative];
        for pattern in AdjectivePattern::ALL {
            for key in AdjectiveForm::all().filter(|k| k.gender == Gender::Neuter && siblings.contains(&k.case)) {
                let eq = pattern.equal_forms(key).unwrap();
                for case in siblings {
                    assert!(eq.contains(&key.with_case(case)), "{}: {} misses {}", pattern, key, case);
                }
            }
        }
        for pattern in NounPattern::ALL {
            for key in NounForm::all().filter(|k| siblings.contains(&k.case)) {
                let eq = pattern.equal_forms(key, Gender::Neuter).unwrap();
                for case in siblings {
                    assert!(eq.contains(&key.with_case(case)));
                }
            }
        }
    }

    #[test]
    fn test_equal_forms_decline_identically() {
        for root in ROOTS {
            for pattern in NounPattern::ALL {
                for gender in admitted(pattern) {
                    for key in NounForm::all() {
                        for other in pattern.equal_forms(key, gender).unwrap_or_default() {
                            assert_eq!(
                                pattern.decline(key, gender, root).ok(),
                                pattern.decline(other, gender, root).ok(),
                                "{} {:?} {} vs {}", pattern, gender, key, other
                            );
                        }
                    }
                }
            }
            for pattern in AdjectivePattern::ALL {
                for key in AdjectiveForm::all() {
                    for other in pattern.equal_forms(key).unwrap_or_default() {
                        assert_eq!(
                            pattern.decline(key, root).ok(),
                            pattern.decline(other, root).ok(),
                            "{} {} vs {}", pattern, key, other
                        );
                    }
                }
            }
        }
    }
}
