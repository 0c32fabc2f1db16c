pub mod definitions;
pub mod normalization;

pub use definitions::{find_attribute, is_valid_attribute_path, AttributeType, LANGUAGE_SCHEMA};
pub use normalization::normalize_criterion;
