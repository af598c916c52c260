use serde::{Deserialize, Serialize};

use crate::resources::{name::GlossaryName, Timestamp};

/// A translation glossary as reported by the service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Glossary {
    pub name: GlossaryName,
    #[serde(flatten)]
    pub languages: GlossaryLanguages,
    pub input_config: GlossaryInputConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_time: Option<Timestamp>,
}

/// Request payload for creating a glossary.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGlossary {
    pub name: GlossaryName,
    #[serde(flatten)]
    pub languages: GlossaryLanguages,
    pub input_config: GlossaryInputConfig,
}

/// Languages a glossary applies to. Directional glossaries carry a language
/// pair; equivalent-term glossaries carry a set of language codes.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum GlossaryLanguages {
    LanguagePair(LanguageCodePair),
    LanguageCodesSet(LanguageCodesSet),
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCodePair {
    pub source_language_code: String,
    pub target_language_code: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCodesSet {
    pub language_codes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryInputConfig {
    pub input_uri: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListGlossariesResponse {
    #[serde(default)]
    pub glossaries: Vec<Glossary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn glossary_deserializes_with_language_codes_set() {
        let glossary: Glossary = serde_json::from_value(json!({
            "name": "projects/p/locations/us-central1/glossaries/test-glossary",
            "languageCodesSet": {"languageCodes": ["en", "es"]},
            "inputConfig": {"inputUri": "gs://bucket/glossary.csv"},
            "entryCount": 42
        }))
        .unwrap();

        assert_eq!(glossary.entry_count, Some(42));
        match &glossary.languages {
            GlossaryLanguages::LanguageCodesSet(set) => {
                assert_eq!(set.language_codes, vec!["en", "es"]);
            }
            other => panic!("expected language codes set, got {other:?}"),
        }
    }

    #[test]
    fn new_glossary_serializes_languages_as_a_single_tagged_key() {
        let request = NewGlossary {
            name: "projects/p/locations/us-central1/glossaries/test-glossary"
                .parse()
                .unwrap(),
            languages: GlossaryLanguages::LanguagePair(LanguageCodePair {
                source_language_code: "en".to_owned(),
                target_language_code: "es".to_owned(),
            }),
            input_config: GlossaryInputConfig {
                input_uri: "gs://bucket/glossary.csv".to_owned(),
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "projects/p/locations/us-central1/glossaries/test-glossary",
                "languagePair": {
                    "sourceLanguageCode": "en",
                    "targetLanguageCode": "es"
                },
                "inputConfig": {"inputUri": "gs://bucket/glossary.csv"}
            })
        );
    }
}
