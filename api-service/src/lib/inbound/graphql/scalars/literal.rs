use async_graphql::Value;

/// Inline literal as written in a GraphQL document, tagged by its syntactic kind.
///
/// Numbers keep their source text so each scalar decides how to read them.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Int(String),
    Float(String),
    String(String),
    Boolean(bool),
    Enum(String),
    List(Vec<Literal>),
    Object(Vec<(String, Literal)>),
}

impl From<&Value> for Literal {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Literal::Null,
            Value::Number(number) if number.is_f64() => Literal::Float(number.to_string()),
            Value::Number(number) => Literal::Int(number.to_string()),
            Value::String(value) => Literal::String(value.clone()),
            Value::Boolean(value) => Literal::Boolean(*value),
            Value::Enum(name) => Literal::Enum(name.to_string()),
            Value::List(values) => Literal::List(values.iter().map(Literal::from).collect()),
            Value::Object(fields) => Literal::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.to_string(), Literal::from(value)))
                    .collect(),
            ),
            // Binary values only ever appear in responses
            Value::Binary(_) => Literal::Null,
        }
    }
}
