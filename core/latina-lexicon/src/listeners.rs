use std::fmt;
use std::hash::{Hash, Hasher};

use latina_protocol::ComparisonDegree;

/// What a mutator changed. Sent once per mutator call, after the entity is
/// consistent again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change<K> {
    RootWord,
    Gender,
    Pattern,
    DefinedForm(K),
    DegreeAllowance(ComparisonDegree),
    Id,
}

pub type Listener<K> = Box<dyn FnMut(&Change<K>) + Send>;

/// Registered observers of an entity.
///
/// Not part of the entity's value: always equal, never hashed, and not
/// carried over by `clone`.
pub struct Listeners<K> {
    callbacks: Vec<Listener<K>>,
}

impl<K> Listeners<K> {
    pub fn push(&mut self, listener: Listener<K>) {
        self.callbacks.push(listener);
    }

    pub fn notify(&mut self, change: &Change<K>) {
        for callback in &mut self.callbacks {
            callback(change);
        }
    }
}

impl<K> Default for Listeners<K> {
    fn default() -> Self {
        Self { callbacks: Vec::new() }
    }
}

impl<K> Clone for Listeners<K> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<K> PartialEq for Listeners<K> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<K> Eq for Listeners<K> {}

impl<K> Hash for Listeners<K> {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<K> fmt::Debug for Listeners<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listeners({})", self.callbacks.len())
    }
}
