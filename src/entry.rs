use serde::{Deserialize, Serialize};

/// One lexical entry under a headword, as stored in `data/<word>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    pub syllabification: String,
    pub root_word: Option<String>,
    pub pronunciation: String,
    pub is_standard: bool,
    pub alternate_form: Option<String>,
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sense {
    #[serde(rename_all = "camelCase")]
    Standard {
        category: Option<String>,
        category_label: Option<String>,
        definition: String,
        example: Option<String>,
        source_annotations: Vec<SourceAnnotation>,
    },
    /// Entry with a category but no sense list, pointing at related headwords.
    #[serde(rename_all = "camelCase")]
    PreCategorial {
        category: Option<String>,
        category_label: Option<String>,
        references: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceAnnotation {
    pub source: String,
    pub source_label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_uses_camel_case_and_nulls() {
        let record = EntryRecord {
            syllabification: "ma.kan".into(),
            root_word: None,
            pronunciation: "makan".into(),
            is_standard: true,
            alternate_form: None,
            senses: vec![Sense::Standard {
                category: Some("v".into()),
                category_label: Some("verba".into()),
                definition: "memasukkan makanan ke dalam mulut".into(),
                example: None,
                source_annotations: vec![SourceAnnotation {
                    source: "jw".into(),
                    source_label: None,
                }],
            }],
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rootWord"], serde_json::Value::Null);
        assert_eq!(json["isStandard"], true);
        assert_eq!(json["alternateForm"], serde_json::Value::Null);
        assert_eq!(json["senses"][0]["categoryLabel"], "verba");
        assert_eq!(json["senses"][0]["sourceAnnotations"][0]["sourceLabel"], serde_json::Value::Null);
        assert!(json["senses"][0].get("references").is_none());
    }

    #[test]
    fn pre_categorial_sense_reads_back() {
        let json = r#"{"category":"prakat","categoryLabel":"prakategorial","references":["berjuang","pejuang"]}"#;
        let sense: Sense = serde_json::from_str(json).unwrap();
        assert!(matches!(
            &sense,
            Sense::PreCategorial { category, references, .. }
                if category.as_deref() == Some("prakat") && references.len() == 2
        ));
    }
}
