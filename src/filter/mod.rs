//! Filter model and query construction
//!
//! A [`Filter`] is one validated predicate over a single attribute. The
//! [`QueryBuilder`] folds a set of filters into a conjunctive [`Predicate`]
//! which the store layer turns into its own query language.

pub mod criterion;
pub mod error;
pub mod operator;
pub mod query_builder;
pub mod raw_filter;
pub mod scalar;

pub use criterion::Criterion;
pub use error::FilterError;
pub use operator::Operator;
pub use query_builder::{Predicate, QueryBuilder};
pub use raw_filter::{decode_filter_param, RawFilter, RawRange};
pub use scalar::Scalar;

/// What a filter compares its attribute against
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterTarget {
    Value(Scalar),
    /// Inclusive on both ends
    Range { from: Scalar, to: Scalar },
}

/// One validated filter expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Filter {
    attribute: String,
    operator: Operator,
    target: FilterTarget,
}

impl Filter {
    /// Create a filter, enforcing the attribute and range rules
    pub fn new(
        attribute: impl Into<String>,
        operator: Operator,
        target: FilterTarget,
    ) -> Result<Self, FilterError> {
        let attribute = attribute.into();
        if attribute.trim().is_empty() {
            return Err(FilterError::EmptyAttribute);
        }

        if let FilterTarget::Range { from, to } = &target {
            if operator != Operator::Equals {
                return Err(FilterError::RangeRequiresEquals(operator));
            }
            if !from.same_kind(to) {
                return Err(FilterError::MismatchedRangeBounds);
            }
            if matches!(from, Scalar::Boolean(_)) {
                return Err(FilterError::UnorderedRangeBounds);
            }
        }

        Ok(Self {
            attribute,
            operator,
            target,
        })
    }

    /// Create a filter from loosely typed parts as they arrive off the wire.
    ///
    /// The operator is checked first, then the value/range exclusivity.
    pub fn from_parts(
        attribute: impl Into<String>,
        operator: &str,
        value: Option<Scalar>,
        range: Option<(Scalar, Scalar)>,
    ) -> Result<Self, FilterError> {
        let operator: Operator = operator.parse()?;

        let target = match (value, range) {
            (Some(value), None) => FilterTarget::Value(value),
            (None, Some((from, to))) => FilterTarget::Range { from, to },
            (Some(_), Some(_)) => return Err(FilterError::ValueAndRange),
            (None, None) => return Err(FilterError::MissingValueOrRange),
        };

        Self::new(attribute, operator, target)
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn target(&self) -> &FilterTarget {
        &self.target
    }

    /// Render this filter as a store-agnostic criterion.
    ///
    /// A range always renders as a closed interval; its operator was already
    /// checked to be `eq` at construction.
    pub fn to_criterion(&self) -> Criterion {
        let attr = self.attribute.clone();
        match &self.target {
            FilterTarget::Value(value) => match self.operator {
                Operator::Equals => Criterion::Equal(attr, value.clone()),
                Operator::GreaterOrEqual => Criterion::GreaterThanOrEqual(attr, value.clone()),
                Operator::LessOrEqual => Criterion::LessThanOrEqual(attr, value.clone()),
            },
            FilterTarget::Range { from, to } => Criterion::Between(attr, from.clone(), to.clone()),
        }
    }
}
