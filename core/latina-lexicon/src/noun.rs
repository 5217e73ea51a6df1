use latina_morph::NounPattern;
use latina_protocol::{EntityId, Gender, NounForm};

use crate::error::LexiconError;
use crate::inflection::Inflection;
use crate::listeners::Change;

/// A noun whose declined table always matches its root, gender and pattern.
///
/// Every mutator validates, commits, recomputes the declined forms and only
/// then notifies listeners, so observers never see a stale table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Noun {
    gender: Gender,
    pattern: Option<NounPattern>,
    inflection: Inflection<NounForm>,
}

impl Noun {
    pub fn new(pattern: Option<NounPattern>, gender: Gender, root: &str) -> Result<Self, LexiconError> {
        let mut noun = Self {
            gender,
            pattern,
            inflection: Inflection::new(root)?,
        };
        noun.recompute();
        Ok(noun)
    }

    pub fn root_word(&self) -> &str {
        self.inflection.root()
    }

    pub fn set_root_word(&mut self, root: &str) -> Result<(), LexiconError> {
        self.inflection.set_root(root)?;
        self.commit(Change::RootWord);
        Ok(())
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Any gender is accepted, even one the pattern does not list.
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
        self.commit(Change::Gender);
    }

    pub fn pattern(&self) -> Option<NounPattern> {
        self.pattern
    }

    pub fn set_pattern(&mut self, pattern: Option<NounPattern>) {
        self.pattern = pattern;
        self.commit(Change::Pattern);
    }

    /// The defined form if any, else the declined one.
    pub fn form(&self, key: NounForm) -> Option<&str> {
        self.inflection.form(key)
    }

    pub fn defined_form(&self, key: NounForm) -> Option<&str> {
        self.inflection.defined().get(key)
    }

    pub fn declined_form(&self, key: NounForm) -> Option<&str> {
        self.inflection.declined().get(key)
    }

    /// Sets or (with `None` or a blank string) removes an override.
    pub fn set_defined_form(&mut self, key: NounForm, value: Option<&str>) {
        self.inflection.set_defined(key, value);
        self.commit(Change::DefinedForm(key));
    }

    /// Slots sharing the form of `key` under the current pattern and gender.
    pub fn equal_forms(&self, key: NounForm) -> Option<Vec<NounForm>> {
        self.pattern?.equal_forms(key, self.gender)
    }

    pub fn id(&self) -> Option<EntityId> {
        self.inflection.id()
    }

    /// Assigns the identifier. Fails if one is already set.
    pub fn initialize_id(&mut self, id: impl Into<EntityId>) -> Result<(), LexiconError> {
        self.inflection.initialize_id(id.into())?;
        self.inflection.notify(Change::Id);
        Ok(())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Change<NounForm>) + Send + 'static) {
        self.inflection.subscribe(Box::new(listener));
    }

    pub(crate) fn recompute(&mut self) {
        let pattern = self.pattern.map(NounPattern::declension);
        self.inflection.recompute(pattern, self.gender, |_| true);
    }

    fn commit(&mut self, change: Change<NounForm>) {
        self.recompute();
        self.inflection.notify(change);
    }

    pub(crate) fn inflection(&self) -> &Inflection<NounForm> {
        &self.inflection
    }

    pub(crate) fn inflection_mut(&mut self) -> &mut Inflection<NounForm> {
        &mut self.inflection
    }
}
