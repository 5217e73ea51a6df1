//! JSON lexicon source: records with readable category keys.

use std::collections::BTreeMap;
use std::str::FromStr;

use anyhow::Context;
use latina_lexicon::{table, Adjective, Inflected, Noun};
use latina_protocol::{
    AdjectiveForm, AdjectiveRecord, CompiledLexicon, ComparisonDegree, DegreeFlags, EntityId, FormKey, Gender,
    NounForm, NounRecord, ParseCategoryError,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LexiconSource {
    pub version: u32,
    #[serde(default)]
    pub nouns: Vec<NounSource>,
    #[serde(default)]
    pub adjectives: Vec<AdjectiveSource>,
}

#[derive(Debug, Deserialize)]
pub struct NounSource {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub root: String,
    pub gender: Gender,
    #[serde(default)]
    pub pattern: String,
    /// Category key ("gen.pl") to form.
    #[serde(default)]
    pub defined: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct AdjectiveSource {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub root: String,
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub disallowed: Vec<ComparisonDegree>,
    /// Category key ("sup.nom.sg.f"; degree defaults to positive) to form.
    #[serde(default)]
    pub defined: BTreeMap<String, String>,
}

fn defined_slots<K>(defined: &BTreeMap<String, String>) -> anyhow::Result<Vec<(u16, String)>>
where
    K: FormKey + FromStr<Err = ParseCategoryError>,
{
    defined
        .iter()
        .map(|(category, form)| {
            let key: K = category
                .parse()
                .with_context(|| format!("invalid category key {category:?}"))?;
            Ok((key.index() as u16, form.clone()))
        })
        .collect()
}

impl NounSource {
    pub fn to_record(&self) -> anyhow::Result<NounRecord> {
        Ok(NounRecord {
            id: self.id.map(EntityId::from),
            root: self.root.clone(),
            gender: self.gender,
            pattern: self.pattern.clone(),
            defined: defined_slots::<NounForm>(&self.defined)?,
        })
    }
}

impl AdjectiveSource {
    pub fn to_record(&self) -> anyhow::Result<AdjectiveRecord> {
        let allowed = self
            .disallowed
            .iter()
            .fold(DegreeFlags::all(), |flags, degree| flags - DegreeFlags::of(*degree));
        Ok(AdjectiveRecord {
            id: self.id.map(EntityId::from),
            root: self.root.clone(),
            allowed,
            pattern: self.pattern.clone(),
            defined: defined_slots::<AdjectiveForm>(&self.defined)?,
        })
    }
}

/// Builds every entity, assigning fresh ids where the source has none, and
/// collects their resolved tables.
pub fn compile(source: &LexiconSource) -> anyhow::Result<CompiledLexicon> {
    let mut nouns = Vec::with_capacity(source.nouns.len());
    for (i, entry) in source.nouns.iter().enumerate() {
        let mut noun = Noun::from_record(&entry.to_record()?).with_context(|| format!("noun #{i} ({:?})", entry.root))?;
        if noun.id().is_none() {
            noun.initialize_random_id()?;
        }
        nouns.push(table(&noun));
    }

    let mut adjectives = Vec::with_capacity(source.adjectives.len());
    for (i, entry) in source.adjectives.iter().enumerate() {
        let mut adjective =
            Adjective::from_record(&entry.to_record()?).with_context(|| format!("adjective #{i} ({:?})", entry.root))?;
        if adjective.id().is_none() {
            adjective.initialize_random_id()?;
        }
        adjectives.push(table(&adjective));
    }

    info!(nouns = nouns.len(), adjectives = adjectives.len(), "lexicon compiled");
    Ok(CompiledLexicon {
        version: source.version,
        nouns,
        adjectives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"{
        "version": 3,
        "nouns": [
            { "root": "ancill", "gender": "feminine", "pattern": "first-declension-a" },
            {
                "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
                "root": "corpor",
                "gender": "neuter",
                "pattern": "third-declension",
                "defined": { "nom.sg": "corpus" }
            }
        ],
        "adjectives": [
            { "root": "ācr", "pattern": "i-stem-three-ending", "disallowed": ["comparative"] }
        ]
    }"#;

    #[test]
    fn test_compile_source() {
        let source: LexiconSource = serde_json::from_str(SOURCE).unwrap();
        let lexicon = compile(&source).unwrap();

        assert_eq!(lexicon.version, 3);
        assert_eq!(lexicon.nouns[0].forms.len(), 12);
        assert!(lexicon.nouns[0].id.is_some());

        let corpus = &lexicon.nouns[1];
        assert_eq!(
            corpus.id.map(|id| id.as_uuid().to_string()).as_deref(),
            Some("67e55044-10b1-426f-9247-bb680e5fe0c8")
        );
        assert!(corpus.forms.contains(&(3, "corpus".to_string())));

        let acer = &lexicon.adjectives[0];
        assert!(acer.forms.iter().all(|(index, _)| usize::from(*index) / AdjectiveForm::PER_DEGREE != 1));
    }

    #[test]
    fn test_bad_category_key_is_reported() {
        let source: LexiconSource = serde_json::from_str(
            r#"{ "version": 1, "nouns": [{ "root": "ros", "gender": "feminine", "defined": { "gen.pl.m": "x" } }] }"#,
        )
        .unwrap();
        let err = compile(&source).unwrap_err();
        assert!(format!("{err:#}").contains("gen.pl.m"));
    }
}
