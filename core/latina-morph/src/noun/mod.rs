//! Noun declension patterns and their registry.

mod fifth;
mod first;
mod fourth;
mod second;
mod third;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use latina_protocol::{Case, Count, Gender, NounForm};

use crate::declension::Declension;
use crate::equal::equal_forms;
use crate::error::FormingError;
use crate::UnknownPattern;

pub use fifth::FifthDeclension;
pub use first::FirstDeclension;
pub use fourth::FourthDeclension;
pub use second::{SecondDeclensionEr, SecondDeclensionUm, SecondDeclensionUs};
pub use third::{ThirdDeclension, ThirdDeclensionIStem};

pub(crate) use first::ENDINGS as FIRST_ENDINGS;
pub(crate) use second::{ER_ENDINGS as SECOND_ER_ENDINGS, UM_ENDINGS as SECOND_UM_ENDINGS, US_ENDINGS as SECOND_US_ENDINGS};

/// Dative and ablative plural coincide in every noun declension.
pub(crate) fn dative_ablative_plural(key: NounForm) -> Vec<NounForm> {
    match (key.case, key.count) {
        (Case::Dative, Count::Plural) => vec![NounForm::new(Case::Ablative, Count::Plural)],
        (Case::Ablative, Count::Plural) => vec![NounForm::new(Case::Dative, Count::Plural)],
        _ => Vec::new(),
    }
}

/// Closed set of noun patterns, addressable by stable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NounPattern {
    FirstA,
    SecondUs,
    SecondEr,
    SecondUm,
    Third,
    ThirdIStem,
    FourthUs,
    FifthE,
}

impl NounPattern {
    pub const ALL: [NounPattern; 8] = [
        NounPattern::FirstA,
        NounPattern::SecondUs,
        NounPattern::SecondEr,
        NounPattern::SecondUm,
        NounPattern::Third,
        NounPattern::ThirdIStem,
        NounPattern::FourthUs,
        NounPattern::FifthE,
    ];

    pub fn declension(self) -> &'static dyn Declension<Key = NounForm> {
        match self {
            NounPattern::FirstA => &FirstDeclension,
            NounPattern::SecondUs => &SecondDeclensionUs,
            NounPattern::SecondEr => &SecondDeclensionEr,
            NounPattern::SecondUm => &SecondDeclensionUm,
            NounPattern::Third => &ThirdDeclension,
            NounPattern::ThirdIStem => &ThirdDeclensionIStem,
            NounPattern::FourthUs => &FourthDeclension,
            NounPattern::FifthE => &FifthDeclension,
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

    pub fn primary_gender(self) -> Option<Gender> {
        self.declension().primary_gender()
    }

    pub fn allows_gender(self, gender: Gender) -> bool {
        self.declension().allows_gender(gender)
    }

    pub fn decline(self, key: NounForm, gender: Gender, root: &str) -> Result<String, FormingError> {
        self.declension().decline(key, gender, root)
    }

    pub fn determine_root(self, key: NounForm, gender: Gender, form: &str) -> Result<String, FormingError> {
        self.declension().determine_root(key, gender, form)
    }

    pub fn equal_forms(self, key: NounForm, gender: Gender) -> Option<Vec<NounForm>> {
        equal_forms(self.declension(), key, gender)
    }
}

impl fmt::Display for NounPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NounPattern {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownPattern(s.to_string()))
    }
}
