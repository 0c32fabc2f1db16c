use crate::error::AppResult;
use crate::filter::{Criterion, Predicate, Scalar};
use crate::schema::normalize_criterion;

/// A value bound to a placeholder of a generated WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

impl From<&Scalar> for SqlParam {
    fn from(value: &Scalar) -> Self {
        match value {
            Scalar::Text(text) => SqlParam::Text(text.clone()),
            Scalar::Integer(n) => SqlParam::Integer(*n),
            Scalar::Boolean(b) => SqlParam::Boolean(*b),
        }
    }
}

/// Trait for turning a [`Predicate`] into a database-specific WHERE clause
///
/// Each criterion only matches documents whose field holds a value of the
/// operand's JSON type, so `version >= 7` never matches `"version": "8"`
/// and `jvmBased == true` never matches `1`.
pub trait FilterConverter: Send + Sync {
    /// Convert a predicate to a WHERE condition
    ///
    /// Returns a tuple of (where_clause, parameters) where:
    /// - where_clause: The SQL condition with parameter placeholders
    /// - parameters: The values to bind to the placeholders, in order
    ///
    /// An empty predicate yields an always-true condition.
    fn to_where_clause(&self, predicate: &Predicate) -> AppResult<(String, Vec<SqlParam>)> {
        let mut params = Vec::new();
        let mut conditions = Vec::with_capacity(predicate.len());

        for criterion in predicate.criteria() {
            let criterion = normalize_criterion(criterion)?;
            conditions.push(self.criterion_to_sql(&criterion, &mut params)?);
        }

        if conditions.is_empty() {
            return Ok(("1 = 1".to_string(), params));
        }

        Ok((conditions.join(" AND "), params))
    }

    /// Render one normalized criterion, appending its parameters to `params`
    fn criterion_to_sql(
        &self,
        criterion: &Criterion,
        params: &mut Vec<SqlParam>,
    ) -> AppResult<String>;

    /// Get the parameter placeholder for the given index
    ///
    /// For example:
    /// - PostgreSQL: $1, $2, $3...
    /// - SQLite: ?1, ?2, ?3...
    fn get_param_placeholder(&self, index: usize) -> String;

    /// Push a parameter and return its placeholder
    fn push_param(&self, params: &mut Vec<SqlParam>, param: SqlParam) -> String {
        params.push(param);
        self.get_param_placeholder(params.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_to_param() {
        assert_eq!(
            SqlParam::from(&Scalar::Text("Java".into())),
            SqlParam::Text("Java".into())
        );
        assert_eq!(SqlParam::from(&Scalar::Integer(8)), SqlParam::Integer(8));
        assert_eq!(SqlParam::from(&Scalar::Boolean(true)), SqlParam::Boolean(true));
    }
}
