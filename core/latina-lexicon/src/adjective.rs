use latina_morph::AdjectivePattern;
use latina_protocol::{AdjectiveForm, ComparisonDegree, DegreeFlags, EntityId, Gender};

use crate::error::LexiconError;
use crate::inflection::Inflection;
use crate::listeners::Change;

/// Adjective keys carry their own gender; this only satisfies the signature.
const KEYED_GENDER: Gender = Gender::Masculine;

/// An adjective with a full positive/comparative/superlative table.
///
/// Degrees can be disallowed. A disallowed degree is not declined, rejects
/// new overrides and reads as absent; its existing overrides are retained
/// and come back when the degree is allowed again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Adjective {
    allowed: DegreeFlags,
    pattern: Option<AdjectivePattern>,
    inflection: Inflection<AdjectiveForm>,
}

impl Adjective {
    pub fn new(pattern: Option<AdjectivePattern>, root: &str) -> Result<Self, LexiconError> {
        let mut adjective = Self {
            allowed: DegreeFlags::all(),
            pattern,
            inflection: Inflection::new(root)?,
        };
        adjective.recompute();
        Ok(adjective)
    }

    pub fn root_word(&self) -> &str {
        self.inflection.root()
    }

    pub fn set_root_word(&mut self, root: &str) -> Result<(), LexiconError> {
        self.inflection.set_root(root)?;
        self.commit(Change::RootWord);
        Ok(())
    }

    pub fn pattern(&self) -> Option<AdjectivePattern> {
        self.pattern
    }

    pub fn set_pattern(&mut self, pattern: Option<AdjectivePattern>) {
        self.pattern = pattern;
        self.commit(Change::Pattern);
    }

    pub fn allowed_degrees(&self) -> DegreeFlags {
        self.allowed
    }

    pub fn is_degree_allowed(&self, degree: ComparisonDegree) -> bool {
        self.allowed.allows(degree)
    }

    pub fn set_degree_allowed(&mut self, degree: ComparisonDegree, allowed: bool) {
        self.allowed.set(DegreeFlags::of(degree), allowed);
        self.commit(Change::DegreeAllowance(degree));
    }

    pub fn form(&self, key: AdjectiveForm) -> Option<&str> {
        self.admits(key).then(|| self.inflection.form(key)).flatten()
    }

    pub fn defined_form(&self, key: AdjectiveForm) -> Option<&str> {
        self.admits(key).then(|| self.inflection.defined().get(key)).flatten()
    }

    pub fn declined_form(&self, key: AdjectiveForm) -> Option<&str> {
        self.admits(key).then(|| self.inflection.declined().get(key)).flatten()
    }

    pub fn set_defined_form(&mut self, key: AdjectiveForm, value: Option<&str>) -> Result<(), LexiconError> {
        if !self.admits(key) {
            return Err(LexiconError::DegreeNotAllowed(key.degree));
        }
        self.inflection.set_defined(key, value);
        self.commit(Change::DefinedForm(key));
        Ok(())
    }

    pub fn equal_forms(&self, key: AdjectiveForm) -> Option<Vec<AdjectiveForm>> {
        self.pattern?.equal_forms(key)
    }

    pub fn id(&self) -> Option<EntityId> {
        self.inflection.id()
    }

    pub fn initialize_id(&mut self, id: impl Into<EntityId>) -> Result<(), LexiconError> {
        self.inflection.initialize_id(id.into())?;
        self.inflection.notify(Change::Id);
        Ok(())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Change<AdjectiveForm>) + Send + 'static) {
        self.inflection.subscribe(Box::new(listener));
    }

    pub(crate) fn restore_allowed(&mut self, allowed: DegreeFlags) {
        self.allowed = allowed;
    }

    fn admits(&self, key: AdjectiveForm) -> bool {
        self.allowed.allows(key.degree)
    }

    pub(crate) fn recompute(&mut self) {
        let allowed = self.allowed;
        let pattern = self.pattern.map(AdjectivePattern::declension);
        self.inflection
            .recompute(pattern, KEYED_GENDER, |key| allowed.allows(key.degree));
    }

    fn commit(&mut self, change: Change<AdjectiveForm>) {
        self.recompute();
        self.inflection.notify(change);
    }

    pub(crate) fn inflection(&self) -> &Inflection<AdjectiveForm> {
        &self.inflection
    }

    pub(crate) fn inflection_mut(&mut self) -> &mut Inflection<AdjectiveForm> {
        &mut self.inflection
    }
}
