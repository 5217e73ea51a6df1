use alloc::string::String;
use alloc::vec::Vec;

use rkyv::{Archive, Deserialize, Serialize};

use crate::category::{DegreeFlags, Gender};
use crate::ids::EntityId;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Storable state of a noun. Declined forms are not stored; they are
/// recomputed on load.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NounRecord {
    pub id: Option<EntityId>,
    pub root: String,
    pub gender: Gender,
    /// Stable pattern name; empty for "no pattern".
    pub pattern: String,
    /// `(slot index, form)` pairs of the user-defined overrides.
    pub defined: Vec<(u16, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AdjectiveRecord {
    pub id: Option<EntityId>,
    pub root: String,
    pub allowed: DegreeFlags,
    pub pattern: String,
    pub defined: Vec<(u16, String)>,
}

/// A fully resolved table: every present form of one entity.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct InflectionTable {
    pub id: Option<EntityId>,
    pub root: String,
    pub pattern: String,
    pub forms: Vec<(u16, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct CompiledLexicon {
    pub version: u32,
    pub nouns: Vec<InflectionTable>,
    pub adjectives: Vec<InflectionTable>,
}
