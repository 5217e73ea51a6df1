use alloc::string::{String, ToString};
use core::fmt;
use core::hash::Hash;
use core::str::FromStr;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Error returned when a textual category (`"gen.pl"`, `"sup.abl.sg.f"`) cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCategoryError {
    Unknown { kind: &'static str, text: String },
    Missing { kind: &'static str, text: String },
    Duplicate { kind: &'static str, text: String },
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCategoryError::Unknown { kind, text } => write!(f, "unknown {} '{}'", kind, text),
            ParseCategoryError::Missing { kind, text } => write!(f, "'{}' names no {}", text, kind),
            ParseCategoryError::Duplicate { kind, text } => write!(f, "'{}' names more than one {}", text, kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseCategoryError {}

macro_rules! define_category {
    ($name:ident, $doc:expr, { $($variant:ident = $idx:literal => ($long:literal, $short:literal)),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
        #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        #[archive(check_bytes)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $idx),+
        }

        impl $name {
            /// Every value, in declaration (serialization) order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn index(self) -> usize {
                self as usize
            }

            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $long),+
                }
            }

            pub const fn abbreviation(self) -> &'static str {
                match self {
                    $($name::$variant => $short),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = ParseCategoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(s) || v.abbreviation().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ParseCategoryError::Unknown {
                        kind: stringify!($name),
                        text: s.to_string(),
                    })
            }
        }
    };
}

define_category!(Case, "Grammatical case. The order is part of the table layout.", {
    Nominative = 0 => ("nominative", "nom"),
    Genitive = 1 => ("genitive", "gen"),
    Dative = 2 => ("dative", "dat"),
    Accusative = 3 => ("accusative", "acc"),
    Ablative = 4 => ("ablative", "abl"),
    Vocative = 5 => ("vocative", "voc"),
});

define_category!(Count, "Grammatical number.", {
    Singular = 0 => ("singular", "sg"),
    Plural = 1 => ("plural", "pl"),
});

define_category!(Gender, "Grammatical gender.", {
    Masculine = 0 => ("masculine", "m"),
    Feminine = 1 => ("feminine", "f"),
    Neuter = 2 => ("neuter", "n"),
});

define_category!(ComparisonDegree, "Degree of comparison (adjectives only).", {
    Positive = 0 => ("positive", "pos"),
    Comparative = 1 => ("comparative", "comp"),
    Superlative = 2 => ("superlative", "sup"),
});

/// A category key identifying one inflectional slot.
///
/// Keys have a dense integer encoding (`index`) so per-slot data can live in
/// flat arrays instead of hash maps.
pub trait FormKey: Copy + Eq + Hash + fmt::Debug + fmt::Display + 'static {
    /// Number of distinct keys.
    const CARDINALITY: usize;

    fn index(self) -> usize;

    fn from_index(index: usize) -> Option<Self>;

    fn case(self) -> Case;

    fn count(self) -> Count;

    /// The same slot with only the case replaced.
    fn with_case(self, case: Case) -> Self;

    /// Gender carried by the key itself, or `fallback` for keys without one.
    fn gender_or(self, fallback: Gender) -> Gender;

    /// All keys in index order.
    fn all() -> impl Iterator<Item = Self> {
        (0..Self::CARDINALITY).filter_map(Self::from_index)
    }
}

/// Case × number: the 12 slots of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NounForm {
    pub case: Case,
    pub count: Count,
}

impl NounForm {
    pub const fn new(case: Case, count: Count) -> Self {
        Self { case, count }
    }
}

impl FormKey for NounForm {
    const CARDINALITY: usize = Case::ALL.len() * Count::ALL.len();

    fn index(self) -> usize {
        self.count.index() * Case::ALL.len() + self.case.index()
    }

    fn from_index(index: usize) -> Option<Self> {
        let cases = Case::ALL.len();
        Some(Self::new(Case::from_index(index % cases)?, Count::from_index(index / cases)?))
    }

    fn case(self) -> Case {
        self.case
    }

    fn count(self) -> Count {
        self.count
    }

    fn with_case(self, case: Case) -> Self {
        Self { case, ..self }
    }

    fn gender_or(self, fallback: Gender) -> Gender {
        fallback
    }
}

impl fmt::Display for NounForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.case.abbreviation(), self.count.abbreviation())
    }
}

impl FromStr for NounForm {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = Components::parse(s)?;
        if parts.gender.is_some() || parts.degree.is_some() {
            return Err(ParseCategoryError::Unknown { kind: "noun category", text: s.to_string() });
        }
        Ok(Self::new(parts.require(parts.case, "case", s)?, parts.require(parts.count, "count", s)?))
    }
}

/// Degree × case × number × gender: the 108 slots of an adjective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AdjectiveForm {
    pub degree: ComparisonDegree,
    pub case: Case,
    pub count: Count,
    pub gender: Gender,
}

impl AdjectiveForm {
    /// Slots sharing one degree.
    pub const PER_DEGREE: usize = Case::ALL.len() * Count::ALL.len() * Gender::ALL.len();

    pub const fn new(degree: ComparisonDegree, case: Case, count: Count, gender: Gender) -> Self {
        Self { degree, case, count, gender }
    }

    pub const fn positive(case: Case, count: Count, gender: Gender) -> Self {
        Self::new(ComparisonDegree::Positive, case, count, gender)
    }

    /// Index within the 36 slots of this key's degree.
    pub const fn degree_index(self) -> usize {
        (self.count as usize * Gender::ALL.len() + self.gender as usize) * Case::ALL.len() + self.case as usize
    }

    pub fn with_gender(self, gender: Gender) -> Self {
        Self { gender, ..self }
    }
}

impl FormKey for AdjectiveForm {
    const CARDINALITY: usize = ComparisonDegree::ALL.len() * Self::PER_DEGREE;

    fn index(self) -> usize {
        self.degree.index() * Self::PER_DEGREE + self.degree_index()
    }

    fn from_index(index: usize) -> Option<Self> {
        let cases = Case::ALL.len();
        let genders = Gender::ALL.len();
        let within = index % Self::PER_DEGREE;
        Some(Self::new(
            ComparisonDegree::from_index(index / Self::PER_DEGREE)?,
            Case::from_index(within % cases)?,
            Count::from_index(within / (cases * genders))?,
            Gender::from_index((within / cases) % genders)?,
        ))
    }

    fn case(self) -> Case {
        self.case
    }

    fn count(self) -> Count {
        self.count
    }

    fn with_case(self, case: Case) -> Self {
        Self { case, ..self }
    }

    fn gender_or(self, _fallback: Gender) -> Gender {
        self.gender
    }
}

impl fmt::Display for AdjectiveForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.degree.abbreviation(),
            self.case.abbreviation(),
            self.count.abbreviation(),
            self.gender.abbreviation()
        )
    }
}

impl FromStr for AdjectiveForm {
    type Err = ParseCategoryError;

    /// Components may come in any order; a missing degree means positive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = Components::parse(s)?;
        Ok(Self::new(
            parts.degree.unwrap_or(ComparisonDegree::Positive),
            parts.require(parts.case, "case", s)?,
            parts.require(parts.count, "count", s)?,
            parts.require(parts.gender, "gender", s)?,
        ))
    }
}

#[derive(Default)]
struct Components {
    case: Option<Case>,
    count: Option<Count>,
    gender: Option<Gender>,
    degree: Option<ComparisonDegree>,
}

impl Components {
    fn parse(text: &str) -> Result<Self, ParseCategoryError> {
        let mut parts = Components::default();
        let tokens = text
            .split(|c: char| matches!(c, '.' | ',' | '-' | '_') || c.is_whitespace())
            .filter(|t| !t.is_empty());

        for token in tokens {
            if let Ok(case) = token.parse::<Case>() {
                Self::place(&mut parts.case, case, "case", text)?;
            } else if let Ok(count) = token.parse::<Count>() {
                Self::place(&mut parts.count, count, "count", text)?;
            } else if let Ok(gender) = token.parse::<Gender>() {
                Self::place(&mut parts.gender, gender, "gender", text)?;
            } else if let Ok(degree) = token.parse::<ComparisonDegree>() {
                Self::place(&mut parts.degree, degree, "degree", text)?;
            } else {
                return Err(ParseCategoryError::Unknown { kind: "category component", text: token.to_string() });
            }
        }
        Ok(parts)
    }

    fn place<T>(slot: &mut Option<T>, value: T, kind: &'static str, text: &str) -> Result<(), ParseCategoryError> {
        if slot.is_some() {
            return Err(ParseCategoryError::Duplicate { kind, text: text.to_string() });
        }
        *slot = Some(value);
        Ok(())
    }

    fn require<T>(&self, value: Option<T>, kind: &'static str, text: &str) -> Result<T, ParseCategoryError> {
        value.ok_or_else(|| ParseCategoryError::Missing { kind, text: text.to_string() })
    }
}

bitflags! {
    /// Which comparison degrees an adjective admits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct DegreeFlags: u8 {
        const POSITIVE = 1;
        const COMPARATIVE = 2;
        const SUPERLATIVE = 4;
    }
}

impl DegreeFlags {
    pub const fn of(degree: ComparisonDegree) -> Self {
        match degree {
            ComparisonDegree::Positive => Self::POSITIVE,
            ComparisonDegree::Comparative => Self::COMPARATIVE,
            ComparisonDegree::Superlative => Self::SUPERLATIVE,
        }
    }

    pub fn allows(self, degree: ComparisonDegree) -> bool {
        self.contains(Self::of(degree))
    }
}

impl From<ComparisonDegree> for DegreeFlags {
    fn from(degree: ComparisonDegree) -> Self {
        Self::of(degree)
    }
}

// rkyv support for DegreeFlags
impl Archive for DegreeFlags {
    type Archived = u8;
    type Resolver = ();

    unsafe fn resolve(&self, _pos: usize, _resolver: Self::Resolver, out: *mut Self::Archived) {
        out.write(self.bits());
    }
}

impl<S: rkyv::Fallible + ?Sized> Serialize<S> for DegreeFlags {
    fn serialize(&self, _serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        Ok(())
    }
}

impl<D: rkyv::Fallible + ?Sized> Deserialize<DegreeFlags, D> for u8 {
    fn deserialize(&self, _deserializer: &mut D) -> Result<DegreeFlags, D::Error> {
        Ok(DegreeFlags::from_bits_truncate(*self))
    }
}
