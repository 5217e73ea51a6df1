use std::fmt;
use std::marker::PhantomData;

use latina_protocol::FormKey;

/// One optional form per slot, stored flat by `FormKey::index`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FormMap<K> {
    slots: Vec<Option<String>>,
    _key: PhantomData<K>,
}

impl<K: FormKey> FormMap<K> {
    pub fn new() -> Self {
        Self {
            slots: vec![None; K::CARDINALITY],
            _key: PhantomData,
        }
    }

    pub fn get(&self, key: K) -> Option<&str> {
        self.slots[key.index()].as_deref()
    }

    pub fn set(&mut self, key: K, value: Option<String>) {
        self.slots[key.index()] = value;
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Present forms in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| Some((K::from_index(i)?, slot.as_deref()?)))
    }

    /// Number of present forms.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: FormKey> Default for FormMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: FormKey> fmt::Debug for FormMap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|(k, v)| (k.to_string(), v))).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latina_protocol::{Case, Count, NounForm};

    #[test]
    fn test_form_map_slots() {
        let mut map = FormMap::<NounForm>::new();
        assert!(map.is_empty());

        let gen_pl = NounForm::new(Case::Genitive, Count::Plural);
        let nom_sg = NounForm::new(Case::Nominative, Count::Singular);
        map.set(gen_pl, Some("rosārum".to_string()));
        map.set(nom_sg, Some("rosa".to_string()));

        assert_eq!(map.get(gen_pl), Some("rosārum"));
        assert_eq!(map.len(), 2);
        let keys: Vec<NounForm> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, [nom_sg, gen_pl]);

        map.clear();
        assert_eq!(map.get(gen_pl), None);
    }
}
