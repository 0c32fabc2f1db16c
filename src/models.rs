use serde::{Deserialize, Serialize};

/// A programming-language record in the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Language {
    #[serde(default)]
    pub id: String,
    pub language: String,
    pub version: i64,
    #[serde(rename = "jvmBased", alias = "isJvmBased")]
    pub jvm_based: bool,
}

impl Language {
    pub fn new(
        id: impl Into<String>,
        language: impl Into<String>,
        version: i64,
        jvm_based: bool,
    ) -> Self {
        Self {
            id: id.into(),
            language: language.into(),
            version,
            jvm_based,
        }
    }

    /// Create a record with a freshly generated identifier
    pub fn with_generated_id(language: impl Into<String>, version: i64, jvm_based: bool) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), language, version, jvm_based)
    }
}
