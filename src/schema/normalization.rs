//! Resolve criteria against the language schema before they reach a store

use super::definitions::{find_attribute, is_valid_attribute_path, AttributeType};
use crate::filter::{Criterion, FilterError, Scalar};

/// Map a criterion onto the stored document.
///
/// Known attributes are renamed to their stored field and text operands are
/// coerced to the field's type when they parse (`"true"` for a boolean
/// field, `"8"` for an integer field). Unknown attributes pass through
/// untouched.
pub fn normalize_criterion(criterion: &Criterion) -> Result<Criterion, FilterError> {
    let attr = criterion.attribute();
    if !is_valid_attribute_path(attr) {
        return Err(FilterError::UnsupportedAttribute(attr.to_string()));
    }

    let (field, attr_type) = match find_attribute(attr) {
        Some(def) => (def.name.to_string(), Some(def.attr_type)),
        None => (attr.to_string(), None),
    };
    let coerce = |value: &Scalar| match attr_type {
        Some(attr_type) => coerce_scalar(value, attr_type),
        None => value.clone(),
    };

    Ok(match criterion {
        Criterion::Equal(_, value) => Criterion::Equal(field, coerce(value)),
        Criterion::GreaterThanOrEqual(_, value) => {
            Criterion::GreaterThanOrEqual(field, coerce(value))
        }
        Criterion::LessThanOrEqual(_, value) => Criterion::LessThanOrEqual(field, coerce(value)),
        Criterion::Between(_, from, to) => {
            // Bounds are coerced together or not at all
            let (coerced_from, coerced_to) = (coerce(from), coerce(to));
            if coerced_from.same_kind(&coerced_to) {
                Criterion::Between(field, coerced_from, coerced_to)
            } else {
                Criterion::Between(field, from.clone(), to.clone())
            }
        }
    })
}

fn coerce_scalar(value: &Scalar, attr_type: AttributeType) -> Scalar {
    match (value, attr_type) {
        (Scalar::Text(text), AttributeType::Integer) => text
            .trim()
            .parse::<i64>()
            .map(Scalar::Integer)
            .unwrap_or_else(|_| value.clone()),
        (Scalar::Text(text), AttributeType::Boolean) => match text.trim() {
            "true" => Scalar::Boolean(true),
            "false" => Scalar::Boolean(false),
            _ => value.clone(),
        },
        _ => value.clone(),
    }
}
