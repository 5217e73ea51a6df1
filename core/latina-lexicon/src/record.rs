//! Conversion between live entities and their storable records.

use latina_morph::{AdjectivePattern, NounPattern};
use latina_protocol::{AdjectiveRecord, FormKey, InflectionTable, NounRecord};
use tracing::warn;

use crate::adjective::Adjective;
use crate::error::LexiconError;
use crate::forms::FormMap;
use crate::inflection::Inflection;
use crate::noun::Noun;
use crate::Inflected;

fn slots<K: FormKey>(map: &FormMap<K>) -> Vec<(u16, String)> {
    map.iter()
        .map(|(key, value)| (key.index() as u16, value.to_string()))
        .collect()
}

/// Loads stored overrides; slots that no longer exist are skipped.
fn restore_defined<K: FormKey>(inflection: &mut Inflection<K>, defined: &[(u16, String)]) {
    for (index, value) in defined {
        match K::from_index(usize::from(*index)) {
            Some(key) => inflection.set_defined(key, Some(value)),
            None => warn!(index, value = %value, "skipping defined form with unknown slot"),
        }
    }
}

fn resolve_pattern<P>(name: &str, from_name: impl Fn(&str) -> Option<P>) -> Option<P> {
    let pattern = from_name(name);
    if pattern.is_none() && !name.trim().is_empty() {
        warn!(pattern = name, "unknown pattern name, loading without a pattern");
    }
    pattern
}

/// Every present form of `entity`, defined values taking precedence.
pub fn table<E: Inflected>(entity: &E) -> InflectionTable {
    InflectionTable {
        id: entity.id(),
        root: entity.root_word().to_string(),
        pattern: entity.pattern_name().unwrap_or_default().to_string(),
        forms: E::Key::all()
            .filter_map(|key| Some((key.index() as u16, entity.form(key)?.to_string())))
            .collect(),
    }
}

impl Noun {
    pub fn to_record(&self) -> NounRecord {
        NounRecord {
            id: self.id(),
            root: self.root_word().to_string(),
            gender: self.gender(),
            pattern: self.pattern().map(NounPattern::name).unwrap_or_default().to_string(),
            defined: slots(self.inflection().defined()),
        }
    }

    pub fn from_record(record: &NounRecord) -> Result<Self, LexiconError> {
        let pattern = resolve_pattern(&record.pattern, NounPattern::from_name);
        let mut noun = Noun::new(pattern, record.gender, &record.root)?;
        restore_defined(noun.inflection_mut(), &record.defined);
        noun.recompute();
        if let Some(id) = record.id {
            noun.inflection_mut().initialize_id(id)?;
        }
        Ok(noun)
    }
}

impl Adjective {
    pub fn to_record(&self) -> AdjectiveRecord {
        AdjectiveRecord {
            id: self.id(),
            root: self.root_word().to_string(),
            allowed: self.allowed_degrees(),
            pattern: self.pattern().map(AdjectivePattern::name).unwrap_or_default().to_string(),
            defined: slots(self.inflection().defined()),
        }
    }

    /// Overrides of disallowed degrees are restored too; they stay hidden
    /// until the degree is allowed.
    pub fn from_record(record: &AdjectiveRecord) -> Result<Self, LexiconError> {
        let pattern = resolve_pattern(&record.pattern, AdjectivePattern::from_name);
        let mut adjective = Adjective::new(pattern, &record.root)?;
        adjective.restore_allowed(record.allowed);
        restore_defined(adjective.inflection_mut(), &record.defined);
        adjective.recompute();
        if let Some(id) = record.id {
            adjective.inflection_mut().initialize_id(id)?;
        }
        Ok(adjective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latina_protocol::{Case, ComparisonDegree, Count, Gender, NounForm};

    #[test]
    fn test_unknown_pattern_loads_without_pattern() {
        let record = NounRecord {
            id: None,
            root: "ros".to_string(),
            gender: Gender::Feminine,
            pattern: "zeroth-declension".to_string(),
            defined: vec![(0, "rosa".to_string()), (999, "nope".to_string())],
        };
        let noun = Noun::from_record(&record).unwrap();
        assert_eq!(noun.pattern(), None);
        assert_eq!(noun.form(NounForm::new(Case::Nominative, Count::Singular)), Some("rosa"));
        assert_eq!(noun.form(NounForm::new(Case::Genitive, Count::Singular)), None);
    }

    #[test]
    fn test_empty_root_record_is_rejected() {
        let record = AdjectiveRecord {
            id: None,
            root: " ".to_string(),
            allowed: latina_protocol::DegreeFlags::all(),
            pattern: String::new(),
            defined: Vec::new(),
        };
        assert_eq!(Adjective::from_record(&record).unwrap_err(), LexiconError::EmptyRoot);
    }

    #[test]
    fn test_table_lists_effective_forms() {
        let mut adjective = Adjective::new(Some(AdjectivePattern::FirstSecondUs), "bon").unwrap();
        adjective.set_degree_allowed(ComparisonDegree::Comparative, false);
        adjective.set_degree_allowed(ComparisonDegree::Superlative, false);

        let table = table(&adjective);
        assert_eq!(table.pattern, "first-second-us-a-um");
        assert_eq!(table.forms.len(), 36);
        assert_eq!(table.forms[0], (0, "bonus".to_string()));
    }
}
