//! Ending tables: per-slot suffixes, `None` where a pattern has no
//! standard ending.

use latina_protocol::{AdjectiveForm, Case, Count, Gender, NounForm};

/// One ending per case, in `Case` order.
pub type Row = [Option<&'static str>; 6];

macro_rules! ending {
    (-) => {
        None
    };
    ($suffix:literal) => {
        Some($suffix)
    };
}

/// Builds a [`Row`]; `-` marks an absent ending.
macro_rules! row {
    ($($e:tt),+ $(,)?) => {
        [$($crate::table::ending!($e)),+]
    };
}

pub(crate) use ending;
pub(crate) use row;

/// Twelve endings: one row per count.
#[derive(Debug)]
pub struct NounEndings {
    pub singular: Row,
    pub plural: Row,
}

impl NounEndings {
    pub const fn get(&self, case: Case, count: Count) -> Option<&'static str> {
        match count {
            Count::Singular => self.singular[case as usize],
            Count::Plural => self.plural[case as usize],
        }
    }

    pub const fn form(&self, key: NounForm) -> Option<&'static str> {
        self.get(key.case, key.count)
    }
}

/// Endings of one comparison degree: a twelve-slot table per gender.
#[derive(Debug)]
pub struct GenderedEndings {
    pub masculine: &'static NounEndings,
    pub feminine: &'static NounEndings,
    pub neuter: &'static NounEndings,
}

impl GenderedEndings {
    pub const fn for_gender(&self, gender: Gender) -> &'static NounEndings {
        match gender {
            Gender::Masculine => self.masculine,
            Gender::Feminine => self.feminine,
            Gender::Neuter => self.neuter,
        }
    }

    /// Looks up the slot; the key's degree is not consulted.
    pub const fn form(&self, key: AdjectiveForm) -> Option<&'static str> {
        self.for_gender(key.gender).get(key.case, key.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: NounEndings = NounEndings {
        singular: row!["a", "ae", "ae", "am", "ā", -],
        plural: row!["ae", "ārum", "īs", "ās", "īs", "ae"],
    };

    #[test]
    fn test_row_macro_marks_absent_slots() {
        assert_eq!(SAMPLE.get(Case::Vocative, Count::Singular), None);
        assert_eq!(SAMPLE.get(Case::Ablative, Count::Singular), Some("ā"));
        assert_eq!(SAMPLE.form(NounForm::new(Case::Genitive, Count::Plural)), Some("ārum"));
    }
}
