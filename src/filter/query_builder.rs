use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use super::criterion::Criterion;
use super::error::FilterError;
use super::Filter;

/// Conjunction of criteria, at most one per attribute.
///
/// Criteria are keyed by attribute, so two predicates built from the same
/// filters in a different order compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    criteria: BTreeMap<String, Criterion>,
}

impl Predicate {
    pub fn criteria(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.values()
    }

    pub fn criterion(&self, attribute: &str) -> Option<&Criterion> {
        self.criteria.get(attribute)
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, criterion) in self.criteria().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}", criterion)?;
        }
        Ok(())
    }
}

/// Folds validated filters into a single [`Predicate`]
pub struct QueryBuilder;

impl QueryBuilder {
    /// Combine `filters` into one conjunctive predicate.
    ///
    /// Fails with [`FilterError::DuplicateAttribute`] on the first attribute
    /// seen twice; no partial predicate is returned.
    pub fn build<'a, I>(filters: I) -> Result<Predicate, FilterError>
    where
        I: IntoIterator<Item = &'a Filter>,
    {
        let mut criteria = BTreeMap::new();

        for filter in filters {
            match criteria.entry(filter.attribute().to_string()) {
                Entry::Occupied(entry) => {
                    return Err(FilterError::DuplicateAttribute(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(filter.to_criterion());
                }
            }
        }

        Ok(Predicate { criteria })
    }
}
