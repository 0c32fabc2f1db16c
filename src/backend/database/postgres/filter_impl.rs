use super::super::filter::{FilterConverter, SqlParam};
use crate::error::AppResult;
use crate::filter::{Criterion, Scalar};

/// PostgreSQL-specific filter converter
///
/// Fields are addressed with `data #> string_to_array($n, '.')` so dotted
/// attributes reach nested objects. Operands are lifted into JSONB with
/// `to_jsonb` and compared after a `jsonb_typeof` check.
#[derive(Debug, Default)]
pub struct PostgresFilterConverter;

impl PostgresFilterConverter {
    pub fn new() -> Self {
        Self
    }

    fn json_type(value: &Scalar) -> &'static str {
        match value {
            Scalar::Text(_) => "string",
            Scalar::Integer(_) => "number",
            Scalar::Boolean(_) => "boolean",
        }
    }

    fn to_jsonb(placeholder: &str, value: &Scalar) -> String {
        let cast = match value {
            Scalar::Text(_) => "text",
            Scalar::Integer(_) => "bigint",
            Scalar::Boolean(_) => "boolean",
        };
        format!("to_jsonb({}::{})", placeholder, cast)
    }

    fn operand(&self, value: &Scalar, params: &mut Vec<SqlParam>) -> String {
        let placeholder = self.push_param(params, value.into());
        Self::to_jsonb(&placeholder, value)
    }
}

impl FilterConverter for PostgresFilterConverter {
    fn criterion_to_sql(
        &self,
        criterion: &Criterion,
        params: &mut Vec<SqlParam>,
    ) -> AppResult<String> {
        let path = self.push_param(params, SqlParam::Text(criterion.attribute().to_string()));
        let field = format!("data #> string_to_array({}, '.')", path);

        let (guard_value, comparison) = match criterion {
            Criterion::Equal(_, value) => {
                (value, format!("{} = {}", field, self.operand(value, params)))
            }
            Criterion::GreaterThanOrEqual(_, value) => {
                (value, format!("{} >= {}", field, self.operand(value, params)))
            }
            Criterion::LessThanOrEqual(_, value) => {
                (value, format!("{} <= {}", field, self.operand(value, params)))
            }
            Criterion::Between(_, from, to) => {
                let from_sql = self.operand(from, params);
                let to_sql = self.operand(to, params);
                (from, format!("{} BETWEEN {} AND {}", field, from_sql, to_sql))
            }
        };

        Ok(format!(
            "(jsonb_typeof({}) = '{}' AND {})",
            field,
            Self::json_type(guard_value),
            comparison
        ))
    }

    fn get_param_placeholder(&self, index: usize) -> String {
        format!("${}", index)
    }
}
