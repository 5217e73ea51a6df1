#![no_std]

extern crate alloc;

// std only for the tools and tests
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod category;
pub mod ids;
pub mod model;

// Flat re-exports for downstream crates
pub use category::*;
pub use ids::EntityId;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_enum_serialization() {
        let original = Case::Ablative;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize Case");
        let deserialized: Case = from_bytes(&bytes).expect("Failed to deserialize Case");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_record_serialization() {
        let original = AdjectiveRecord {
            id: Some(EntityId::new(0x1234_5678_9abc_def0)),
            root: "fort".to_string(),
            allowed: DegreeFlags::POSITIVE | DegreeFlags::SUPERLATIVE,
            pattern: "i-stem-two-ending".to_string(),
            defined: vec![(3, "fortis".to_string())],
        };

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize record");
        let deserialized: AdjectiveRecord = from_bytes(&bytes).expect("Failed to deserialize record");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<EntityId>(), 16);
        let id = EntityId::new(42);
        assert_eq!(EntityId::from(id.as_uuid()), id);
    }

    #[test]
    fn test_case_order_is_table_order() {
        let names: vec::Vec<&str> = Case::ALL.iter().map(|c| c.abbreviation()).collect();
        assert_eq!(names, ["nom", "gen", "dat", "acc", "abl", "voc"]);
        assert_eq!(Case::Vocative.index(), 5);
    }

    #[test]
    fn test_noun_form_index_is_dense() {
        assert_eq!(NounForm::CARDINALITY, 12);
        for (i, key) in NounForm::all().enumerate() {
            assert_eq!(key.index(), i);
        }
        assert_eq!(NounForm::from_index(12), None);
        assert_eq!(NounForm::from_index(7), Some(NounForm::new(Case::Genitive, Count::Plural)));
    }

    #[test]
    fn test_adjective_form_index_is_dense() {
        assert_eq!(AdjectiveForm::CARDINALITY, 108);
        let mut seen = [false; 108];
        for key in AdjectiveForm::all() {
            assert!(!seen[key.index()]);
            seen[key.index()] = true;
            assert_eq!(AdjectiveForm::from_index(key.index()), Some(key));
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(AdjectiveForm::from_index(108), None);
    }

    #[test]
    fn test_category_text() {
        let key: NounForm = "gen.pl".parse().unwrap();
        assert_eq!(key, NounForm::new(Case::Genitive, Count::Plural));
        assert_eq!(key.to_string(), "gen.pl");

        let key: AdjectiveForm = "Superlative ablative sg f".parse().unwrap();
        assert_eq!(
            key,
            AdjectiveForm::new(ComparisonDegree::Superlative, Case::Ablative, Count::Singular, Gender::Feminine)
        );
        assert_eq!(key.to_string().parse::<AdjectiveForm>(), Ok(key));

        let key: AdjectiveForm = "nom.sg.n".parse().unwrap();
        assert_eq!(key.degree, ComparisonDegree::Positive);

        assert!(matches!("nom.nom.sg".parse::<NounForm>(), Err(ParseCategoryError::Duplicate { .. })));
        assert!(matches!("nom".parse::<NounForm>(), Err(ParseCategoryError::Missing { .. })));
        assert!(matches!("nom.sg.x".parse::<NounForm>(), Err(ParseCategoryError::Unknown { .. })));
        assert!("nom.sg.m".parse::<NounForm>().is_err());
    }

    #[test]
    fn test_degree_flags() {
        let flags = DegreeFlags::POSITIVE | DegreeFlags::COMPARATIVE;
        assert!(flags.allows(ComparisonDegree::Comparative));
        assert!(!flags.allows(ComparisonDegree::Superlative));
        assert_eq!(DegreeFlags::from(ComparisonDegree::Superlative), DegreeFlags::SUPERLATIVE);
    }
}
