pub mod adjective;
pub mod error;
pub mod forms;
pub mod listeners;
pub mod noun;
pub mod record;

mod inflection;

pub use adjective::Adjective;
pub use error::LexiconError;
pub use forms::FormMap;
pub use listeners::{Change, Listener};
pub use noun::Noun;
pub use record::table;

use latina_protocol::{AdjectiveForm, EntityId, FormKey, NounForm};
use uuid::Uuid;

/// Common surface of nouns and adjectives, for code that handles either.
pub trait Inflected {
    type Key: FormKey;

    fn root_word(&self) -> &str;

    fn set_root_word(&mut self, root: &str) -> Result<(), LexiconError>;

    /// Stable name of the current pattern, if any.
    fn pattern_name(&self) -> Option<&'static str>;

    fn form(&self, key: Self::Key) -> Option<&str>;

    fn defined_form(&self, key: Self::Key) -> Option<&str>;

    fn declined_form(&self, key: Self::Key) -> Option<&str>;

    fn set_defined_form(&mut self, key: Self::Key, value: Option<&str>) -> Result<(), LexiconError>;

    fn equal_forms(&self, key: Self::Key) -> Option<Vec<Self::Key>>;

    fn id(&self) -> Option<EntityId>;

    fn initialize_id(&mut self, id: EntityId) -> Result<(), LexiconError>;

    /// Assigns a fresh random identifier.
    fn initialize_random_id(&mut self) -> Result<EntityId, LexiconError> {
        let id = EntityId::from(Uuid::new_v4());
        self.initialize_id(id)?;
        Ok(id)
    }

    /// Present forms in slot order.
    fn forms(&self) -> Vec<(Self::Key, &str)> {
        Self::Key::all()
            .filter_map(|key| Some((key, self.form(key)?)))
            .collect()
    }
}

impl Inflected for Noun {
    type Key = NounForm;

    fn root_word(&self) -> &str {
        Noun::root_word(self)
    }

    fn set_root_word(&mut self, root: &str) -> Result<(), LexiconError> {
        Noun::set_root_word(self, root)
    }

    fn pattern_name(&self) -> Option<&'static str> {
        self.pattern().map(|p| p.name())
    }

    fn form(&self, key: NounForm) -> Option<&str> {
        Noun::form(self, key)
    }

    fn defined_form(&self, key: NounForm) -> Option<&str> {
        Noun::defined_form(self, key)
    }

    fn declined_form(&self, key: NounForm) -> Option<&str> {
        Noun::declined_form(self, key)
    }

    fn set_defined_form(&mut self, key: NounForm, value: Option<&str>) -> Result<(), LexiconError> {
        Noun::set_defined_form(self, key, value);
        Ok(())
    }

    fn equal_forms(&self, key: NounForm) -> Option<Vec<NounForm>> {
        Noun::equal_forms(self, key)
    }

    fn id(&self) -> Option<EntityId> {
        Noun::id(self)
    }

    fn initialize_id(&mut self, id: EntityId) -> Result<(), LexiconError> {
        Noun::initialize_id(self, id)
    }
}

impl Inflected for Adjective {
    type Key = AdjectiveForm;

    fn root_word(&self) -> &str {
        Adjective::root_word(self)
    }

    fn set_root_word(&mut self, root: &str) -> Result<(), LexiconError> {
        Adjective::set_root_word(self, root)
    }

    fn pattern_name(&self) -> Option<&'static str> {
        self.pattern().map(|p| p.name())
    }

    fn form(&self, key: AdjectiveForm) -> Option<&str> {
        Adjective::form(self, key)
    }

    fn defined_form(&self, key: AdjectiveForm) -> Option<&str> {
        Adjective::defined_form(self, key)
    }

    fn declined_form(&self, key: AdjectiveForm) -> Option<&str> {
        Adjective::declined_form(self, key)
    }

    fn set_defined_form(&mut self, key: AdjectiveForm, value: Option<&str>) -> Result<(), LexiconError> {
        Adjective::set_defined_form(self, key, value)
    }

    fn equal_forms(&self, key: AdjectiveForm) -> Option<Vec<AdjectiveForm>> {
        Adjective::equal_forms(self, key)
    }

    fn id(&self) -> Option<EntityId> {
        Adjective::id(self)
    }

    fn initialize_id(&mut self, id: EntityId) -> Result<(), LexiconError> {
        Adjective::initialize_id(self, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latina_morph::NounPattern;
    use latina_protocol::Gender;

    #[test]
    fn test_random_id_is_assigned_once() {
        let mut noun = Noun::new(Some(NounPattern::FirstA), Gender::Feminine, "ros").unwrap();
        let id = noun.initialize_random_id().unwrap();
        assert_eq!(Inflected::id(&noun), Some(id));
        assert_eq!(
            noun.initialize_random_id(),
            Err(LexiconError::IdAlreadyInitialized(id))
        );
    }

    #[test]
    fn test_forms_lists_every_slot_of_a_full_pattern() {
        let noun = Noun::new(Some(NounPattern::SecondUm), Gender::Neuter, "bell").unwrap();
        assert_eq!(noun.forms().len(), 12);
    }
}
