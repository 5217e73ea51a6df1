use core::fmt;

use rkyv::{Archive, Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Process-unique identifier of an inflected entity.
///
/// Stored as the raw 128 bits of a [`Uuid`] so it archives as a plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(transparent)] // Same layout as u128
pub struct EntityId(pub u128);

impl EntityId {
    pub const fn new(bits: u128) -> Self {
        Self(bits)
    }

    pub const fn as_uuid(self) -> Uuid {
        Uuid::from_u128(self.0)
    }
}

impl From<Uuid> for EntityId {
    fn from(id: Uuid) -> Self {
        Self(id.as_u128())
    }
}

impl From<EntityId> for Uuid {
    fn from(id: EntityId) -> Uuid {
        id.as_uuid()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_uuid().hyphenated(), f)
    }
}
