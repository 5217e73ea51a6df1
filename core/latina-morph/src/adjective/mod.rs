//! Adjective patterns: a positive-degree strategy per pattern, wrapped with
//! the shared comparative and superlative.

mod comparison;
mod first_second;
mod third;

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use latina_protocol::{AdjectiveForm, ComparisonDegree, Gender};

use crate::declension::{regular_decline, regular_root, Declension};
use crate::equal::equal_forms;
use crate::error::FormingError;
use crate::orthography::{ends_with_normalized, strip_trailing_letters};
use crate::table::GenderedEndings;
use crate::UnknownPattern;

pub use comparison::{superlative_infix, superlative_stem, COMPARATIVE, SUPERLATIVE};
pub use first_second::{FirstSecondEr, FirstSecondUs};
pub use third::{OneEnding, ThreeEndings, TwoEndings};

/// Positive-degree rules of one adjective pattern.
///
/// Keys passed to these hooks always have the positive degree.
pub trait PositiveDeclension: Sync {
    fn name(&self) -> &'static str;

    fn endings(&self) -> &'static GenderedEndings;

    /// A form that takes precedence over the table, if one applies.
    fn irregular_form(&self, _key: AdjectiveForm, _root: &str) -> Option<String> {
        None
    }

    /// Inverse of [`irregular_form`](PositiveDeclension::irregular_form).
    fn irregular_root(&self, _key: AdjectiveForm, _form: &str) -> Option<String> {
        None
    }

    fn seed_equal_forms(&self, _key: AdjectiveForm) -> Vec<AdjectiveForm> {
        Vec::new()
    }

    fn vocative_equals_nominative(&self, _key: AdjectiveForm) -> bool {
        true
    }

    /// What the superlative infix is attached to.
    fn superlative_base<'r>(&self, root: &'r str) -> Cow<'r, str> {
        Cow::Borrowed(root)
    }

    fn root_from_superlative_base(&self, base: &str) -> String {
        base.to_string()
    }
}

/// Masculine nominative singular of an -er stem: pulchr → pulcher.
///
/// Roots already ending in -er (miser, asper) are returned unchanged.
pub fn masculine_nominative(root: &str) -> Cow<'_, str> {
    if root.ends_with("er") || !(root.ends_with('r') || root.ends_with('R')) {
        return Cow::Borrowed(root);
    }
    if ends_with_normalized(root, "er") {
        return Cow::Borrowed(root);
    }
    Cow::Owned(format!("{}er", &root[..root.len() - 1]))
}

/// Inverse of [`masculine_nominative`]: pulcher → pulchr.
///
/// `None` when the form does not end in -er.
pub fn masculine_root(form: &str) -> Option<String> {
    if !ends_with_normalized(form, "er") {
        return None;
    }
    let stem = strip_trailing_letters(form, 2)?;
    Some(format!("{}r", stem))
}

/// Adds the comparative and superlative to a positive-degree strategy.
pub struct Adjectival<P>(pub P);

impl<P: PositiveDeclension> Declension for Adjectival<P> {
    type Key = AdjectiveForm;

    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn allows_gender(&self, _gender: Gender) -> bool {
        true
    }

    fn ending(&self, key: AdjectiveForm, _gender: Gender) -> Option<&'static str> {
        match key.degree {
            ComparisonDegree::Positive => self.0.endings().form(key),
            ComparisonDegree::Comparative => COMPARATIVE.form(key),
            ComparisonDegree::Superlative => SUPERLATIVE.form(key),
        }
    }

    fn decline(&self, key: AdjectiveForm, gender: Gender, root: &str) -> Result<String, FormingError> {
        match key.degree {
            ComparisonDegree::Positive => match self.0.irregular_form(key, root) {
                Some(form) => Ok(form),
                None => regular_decline(self, key, gender, root),
            },
            ComparisonDegree::Comparative => regular_decline(self, key, gender, root),
            ComparisonDegree::Superlative => {
                let base = self.0.superlative_base(root);
                regular_decline(self, key, gender, &superlative_stem(&base))
            }
        }
    }

    fn determine_root(&self, key: AdjectiveForm, gender: Gender, form: &str) -> Result<String, FormingError> {
        match key.degree {
            ComparisonDegree::Positive => match self.0.irregular_root(key, form) {
                Some(root) => Ok(root),
                None => regular_root(self, key, gender, form),
            },
            ComparisonDegree::Comparative => regular_root(self, key, gender, form),
            ComparisonDegree::Superlative => {
                let base = comparison::superlative_base(self.name(), key, form)?;
                Ok(self.0.root_from_superlative_base(&base))
            }
        }
    }

    fn seed_equal_forms(&self, key: AdjectiveForm, _gender: Gender) -> Vec<AdjectiveForm> {
        match key.degree {
            ComparisonDegree::Positive => self.0.seed_equal_forms(key),
            ComparisonDegree::Comparative => comparison::comparative_partner(key).into_iter().collect(),
            ComparisonDegree::Superlative => Vec::new(),
        }
    }

    fn vocative_equals_nominative(&self, key: AdjectiveForm, _gender: Gender) -> bool {
        match key.degree {
            ComparisonDegree::Positive => self.0.vocative_equals_nominative(key),
            ComparisonDegree::Comparative => true,
            ComparisonDegree::Superlative => comparison::superlative_vocative_equals_nominative(key),
        }
    }
}

static FIRST_SECOND_US: Adjectival<FirstSecondUs> = Adjectival(FirstSecondUs);
static FIRST_SECOND_ER: Adjectival<FirstSecondEr> = Adjectival(FirstSecondEr);
static ONE_ENDING: Adjectival<OneEnding> = Adjectival(OneEnding);
static TWO_ENDINGS: Adjectival<TwoEndings> = Adjectival(TwoEndings);
static THREE_ENDINGS: Adjectival<ThreeEndings> = Adjectival(ThreeEndings);

/// Closed set of adjective patterns, addressable by stable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AdjectivePattern {
    FirstSecondUs,
    FirstSecondEr,
    OneEnding,
    TwoEnding,
    ThreeEnding,
}

impl AdjectivePattern {
    pub const ALL: [AdjectivePattern; 5] = [
        AdjectivePattern::FirstSecondUs,
        AdjectivePattern::FirstSecondEr,
        AdjectivePattern::OneEnding,
        AdjectivePattern::TwoEnding,
        AdjectivePattern::ThreeEnding,
    ];

    pub fn declension(self) -> &'static dyn Declension<Key = AdjectiveForm> {
        match self {
            AdjectivePattern::FirstSecondUs => &FIRST_SECOND_US,
            AdjectivePattern::FirstSecondEr => &FIRST_SECOND_ER,
            AdjectivePattern::OneEnding => &ONE_ENDING,
            AdjectivePattern::TwoEnding => &TWO_ENDINGS,
            AdjectivePattern::ThreeEnding => &THREE_ENDINGS,
        }
    }

    pub fn name(self) -> &'static str {
        self.declension().name()
    }

    /// Resolves a stored name. Unknown or blank names mean "no pattern".
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// The gender is taken from the key.
    pub fn decline(self, key: AdjectiveForm, root: &str) -> Result<String, FormingError> {
        self.declension().decline(key, key.gender, root)
    }

    pub fn determine_root(self, key: AdjectiveForm, form: &str) -> Result<String, FormingError> {
        self.declension().determine_root(key, key.gender, form)
    }

    pub fn equal_forms(self, key: AdjectiveForm) -> Option<Vec<AdjectiveForm>> {
        equal_forms(self.declension(), key, key.gender)
    }
}

impl fmt::Display for AdjectivePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdjectivePattern {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownPattern(s.to_string()))
    }
}
