use serde::Deserialize;
use serde_json::Value;

use super::error::FilterError;
use super::operator::Operator;
use super::scalar::Scalar;
use super::Filter;

/// Filter expression as decoded from a request, before validation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFilter {
    pub attribute: String,
    pub operator: String,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub range: Option<RawRange>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawRange {
    pub from: Value,
    pub to: Value,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(RawFilter),
    Many(Vec<RawFilter>),
}

/// Decode one `filter` query parameter.
///
/// A parameter holds either a single filter object or an array of them.
pub fn decode_filter_param(param: &str) -> Result<Vec<RawFilter>, serde_json::Error> {
    Ok(match serde_json::from_str::<OneOrMany>(param)? {
        OneOrMany::One(filter) => vec![filter],
        OneOrMany::Many(filters) => filters,
    })
}

impl TryFrom<RawFilter> for Filter {
    type Error = FilterError;

    fn try_from(raw: RawFilter) -> Result<Self, Self::Error> {
        // An unknown operator is reported ahead of problems with the operands
        raw.operator.parse::<Operator>()?;

        let value = raw.value.map(Scalar::try_from).transpose()?;
        let range = match raw.range {
            Some(range) => Some((Scalar::try_from(range.from)?, Scalar::try_from(range.to)?)),
            None => None,
        };

        Filter::from_parts(raw.attribute, &raw.operator, value, range)
    }
}
