use latina_morph::{equal_forms, Declension};
use latina_protocol::{EntityId, FormKey, Gender};
use tracing::{debug, trace};

use crate::error::LexiconError;
use crate::forms::FormMap;
use crate::listeners::{Change, Listener, Listeners};

/// State shared by every inflected entity: the root, both form layers, the
/// identifier and the observers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Inflection<K: FormKey> {
    root: String,
    defined: FormMap<K>,
    declined: FormMap<K>,
    id: Option<EntityId>,
    listeners: Listeners<K>,
}

/// Trimmed, lower-cased root. Empty roots are rejected.
pub(crate) fn canonical_root(root: &str) -> Result<String, LexiconError> {
    let root = root.trim();
    if root.is_empty() {
        return Err(LexiconError::EmptyRoot);
    }
    Ok(root.to_lowercase())
}

/// Lower-cased defined form; blank means "remove the override".
fn canonical_form(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    (!value.is_empty()).then(|| value.to_lowercase())
}

impl<K: FormKey> Inflection<K> {
    pub(crate) fn new(root: &str) -> Result<Self, LexiconError> {
        Ok(Self {
            root: canonical_root(root)?,
            defined: FormMap::new(),
            declined: FormMap::new(),
            id: None,
            listeners: Listeners::default(),
        })
    }

    pub(crate) fn root(&self) -> &str {
        &self.root
    }

    pub(crate) fn set_root(&mut self, root: &str) -> Result<(), LexiconError> {
        self.root = canonical_root(root)?;
        Ok(())
    }

    pub(crate) fn defined(&self) -> &FormMap<K> {
        &self.defined
    }

    pub(crate) fn declined(&self) -> &FormMap<K> {
        &self.declined
    }

    pub(crate) fn set_defined(&mut self, key: K, value: Option<&str>) {
        self.defined.set(key, canonical_form(value));
    }

    /// Defined value if present, else the declined one.
    pub(crate) fn form(&self, key: K) -> Option<&str> {
        self.defined.get(key).or_else(|| self.declined.get(key))
    }

    pub(crate) fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub(crate) fn initialize_id(&mut self, id: EntityId) -> Result<(), LexiconError> {
        if let Some(existing) = self.id {
            return Err(LexiconError::IdAlreadyInitialized(existing));
        }
        debug!(%id, root = %self.root, "identifier initialized");
        self.id = Some(id);
        Ok(())
    }

    pub(crate) fn subscribe(&mut self, listener: Listener<K>) {
        self.listeners.push(listener);
    }

    pub(crate) fn notify(&mut self, change: Change<K>) {
        self.listeners.notify(&change);
    }

    /// Rebuilds the declined layer from scratch.
    ///
    /// Every admitted slot is declined from the root; slots the pattern
    /// cannot form stay empty. Then each defined value (in slot order) fills
    /// the still-empty slots of its equal-forms class. `gender` applies to
    /// keys that carry none of their own.
    pub(crate) fn recompute(
        &mut self,
        pattern: Option<&dyn Declension<Key = K>>,
        gender: Gender,
        admits: impl Fn(K) -> bool,
    ) {
        self.declined.clear();
        let Some(pattern) = pattern else {
            debug!(root = %self.root, "no pattern, declined forms cleared");
            return;
        };

        for key in K::all().filter(|key| admits(*key)) {
            match pattern.decline(key, key.gender_or(gender), &self.root) {
                Ok(form) => self.declined.set(key, Some(form)),
                Err(err) => trace!(%key, %err, "slot left empty"),
            }
        }

        let overrides: Vec<(K, String)> = self
            .defined
            .iter()
            .filter(|(key, _)| admits(*key))
            .map(|(key, value)| (key, value.to_string()))
            .collect();
        for (key, value) in overrides {
            let Some(members) = equal_forms(pattern, key, key.gender_or(gender)) else {
                continue;
            };
            for other in members {
                if other == key
                    || !admits(other)
                    || self.declined.get(other).is_some()
                    || self.defined.get(other).is_some()
                {
                    continue;
                }
                trace!(from = %key, to = %other, "empty slot takes defined equal form");
                self.declined.set(other, Some(value.clone()));
            }
        }

        debug!(
            root = %self.root,
            pattern = pattern.name(),
            declined = self.declined.len(),
            defined = self.defined.len(),
            "declined forms recomputed"
        );
    }
}
