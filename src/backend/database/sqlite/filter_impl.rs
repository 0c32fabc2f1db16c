use super::super::filter::{FilterConverter, SqlParam};
use crate::error::AppResult;
use crate::filter::{Criterion, Scalar};

/// SQLite-specific filter converter
///
/// Attribute paths are bound as `$.a.b` JSON paths and read back with
/// `json_extract`. `json_type` keeps comparisons within one JSON type.
#[derive(Debug, Default)]
pub struct SqliteFilterConverter;

impl SqliteFilterConverter {
    pub fn new() -> Self {
        Self
    }

    fn type_guard(path: &str, value: &Scalar) -> String {
        let types = match value {
            Scalar::Text(_) => "'text'",
            Scalar::Integer(_) => "'integer', 'real'",
            Scalar::Boolean(_) => "'true', 'false'",
        };
        format!("json_type(data, {}) IN ({})", path, types)
    }
}

impl FilterConverter for SqliteFilterConverter {
    fn criterion_to_sql(
        &self,
        criterion: &Criterion,
        params: &mut Vec<SqlParam>,
    ) -> AppResult<String> {
        let path = self.push_param(
            params,
            SqlParam::Text(format!("$.{}", criterion.attribute())),
        );
        let field = format!("json_extract(data, {})", path);

        let (guard_value, comparison) = match criterion {
            Criterion::Equal(_, value) => {
                let p = self.push_param(params, value.into());
                (value, format!("{} = {}", field, p))
            }
            Criterion::GreaterThanOrEqual(_, value) => {
                let p = self.push_param(params, value.into());
                (value, format!("{} >= {}", field, p))
            }
            Criterion::LessThanOrEqual(_, value) => {
                let p = self.push_param(params, value.into());
                (value, format!("{} <= {}", field, p))
            }
            Criterion::Between(_, from, to) => {
                let from_p = self.push_param(params, from.into());
                let to_p = self.push_param(params, to.into());
                (from, format!("{} BETWEEN {} AND {}", field, from_p, to_p))
            }
        };

        Ok(format!(
            "({} AND {})",
            Self::type_guard(&path, guard_value),
            comparison
        ))
    }

    fn get_param_placeholder(&self, index: usize) -> String {
        format!("?{}", index)
    }
}
