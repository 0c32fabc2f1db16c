//! Language record schema knowledge
//!
//! Field names, types and accepted aliases of the stored `Language`
//! document live here. Filter attributes are resolved against this table
//! before a query reaches the store.

use lazy_static::lazy_static;
use regex::Regex;

/// Type of a stored document field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Integer,
    Boolean,
}

/// Definition of one field of the language document
#[derive(Debug, Clone)]
pub struct AttributeDefinition {
    /// Name of the field in the stored document
    pub name: &'static str,
    /// Other names a filter may use for this field
    pub aliases: &'static [&'static str],
    pub attr_type: AttributeType,
    pub description: &'static str,
}

impl AttributeDefinition {
    fn answers_to(&self, attr: &str) -> bool {
        self.name == attr || self.aliases.iter().any(|alias| *alias == attr)
    }
}

#[derive(Debug, Clone)]
pub struct SchemaDefinition {
    pub name: &'static str,
    pub attributes: Vec<AttributeDefinition>,
}

lazy_static! {
    pub static ref LANGUAGE_SCHEMA: SchemaDefinition = SchemaDefinition {
        name: "Language",
        attributes: vec![
            AttributeDefinition {
                name: "id",
                aliases: &[],
                attr_type: AttributeType::String,
                description: "Unique identifier of the record",
            },
            AttributeDefinition {
                name: "language",
                aliases: &[],
                attr_type: AttributeType::String,
                description: "Name of the programming language",
            },
            AttributeDefinition {
                name: "version",
                aliases: &[],
                attr_type: AttributeType::Integer,
                description: "Major version of the language",
            },
            AttributeDefinition {
                name: "jvmBased",
                aliases: &["isJvmBased"],
                attr_type: AttributeType::Boolean,
                description: "Whether the language runs on the JVM",
            },
        ],
    };

    /// Dotted attribute paths the stores accept
    static ref ATTRIBUTE_PATH: Regex =
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
            .expect("attribute path pattern is valid");
}

/// Find the schema field a filter attribute refers to, by name or alias
pub fn find_attribute(attr: &str) -> Option<&'static AttributeDefinition> {
    LANGUAGE_SCHEMA
        .attributes
        .iter()
        .find(|def| def.answers_to(attr))
}

/// Check that an attribute is a plain or dotted field path.
///
/// Unknown fields are fine; this only guards the shape of the name.
pub fn is_valid_attribute_path(attr: &str) -> bool {
    ATTRIBUTE_PATH.is_match(attr)
}
