use async_graphql::InputValueResult;
use async_graphql::Scalar;
use async_graphql::ScalarType;
use async_graphql::Value;
use serde_json::Map;
use serde_json::Number;

use super::Literal;
use super::ScalarCodec;
use super::ScalarError;

/// A JSON object.
///
/// Values pass through unchanged, except that every number in GraphQL input is
/// read as a float.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonScalar(pub serde_json::Value);

impl ScalarCodec for JsonScalar {
    fn parse_value(value: serde_json::Value) -> Result<Self, ScalarError> {
        Ok(JsonScalar(value))
    }

    fn serialize(&self) -> serde_json::Value {
        self.0.clone()
    }

    fn parse_literal(literal: &Literal) -> Result<Option<Self>, ScalarError> {
        Ok(Some(JsonScalar(literal_to_json(literal))))
    }
}

fn literal_to_json(literal: &Literal) -> serde_json::Value {
    match literal {
        Literal::String(value) => serde_json::Value::String(value.clone()),
        Literal::Boolean(value) => serde_json::Value::Bool(*value),
        Literal::Int(text) | Literal::Float(text) => text
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Literal::Object(fields) => {
            let mut map = Map::new();
            for (name, value) in fields {
                map.insert(name.clone(), literal_to_json(value));
            }
            serde_json::Value::Object(map)
        }
        Literal::List(values) => {
            serde_json::Value::Array(values.iter().map(literal_to_json).collect())
        }
        Literal::Null | Literal::Enum(_) => serde_json::Value::Null,
    }
}

#[Scalar(name = "JSON")]
impl ScalarType for JsonScalar {
    fn parse(value: Value) -> InputValueResult<Self> {
        super::parse_input(value)
    }

    fn to_value(&self) -> Value {
        super::to_output(self)
    }
}
