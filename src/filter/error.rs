use std::fmt;

use super::operator::Operator;

/// Reasons a filter expression or a set of filters is rejected.
///
/// Every variant is a client-input problem and maps to a bad request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    EmptyAttribute,
    InvalidOperator(String),
    ValueAndRange,
    MissingValueOrRange,
    RangeRequiresEquals(Operator),
    MismatchedRangeBounds,
    UnorderedRangeBounds,
    UnsupportedValue(String),
    UnsupportedAttribute(String),
    DuplicateAttribute(String),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::EmptyAttribute => write!(f, "attribute must not be empty"),
            FilterError::InvalidOperator(op) => write!(f, "invalid operator: {}", op),
            FilterError::ValueAndRange => write!(f, "both value and range are not allowed"),
            FilterError::MissingValueOrRange => write!(f, "either value or range is required"),
            FilterError::RangeRequiresEquals(op) => {
                write!(f, "invalid operator for range: {}", op)
            }
            FilterError::MismatchedRangeBounds => {
                write!(f, "range bounds must be of the same type")
            }
            FilterError::UnorderedRangeBounds => {
                write!(f, "range bounds must be numbers or strings")
            }
            FilterError::UnsupportedValue(kind) => write!(f, "unsupported value type: {}", kind),
            FilterError::UnsupportedAttribute(attr) => {
                write!(f, "unsupported attribute name: {}", attr)
            }
            FilterError::DuplicateAttribute(attr) => write!(f, "duplicate attribute: {}", attr),
        }
    }
}

impl std::error::Error for FilterError {}
