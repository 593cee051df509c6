use std::fmt::Display;

use async_graphql::InputValueResult;
use async_graphql::Scalar;
use async_graphql::ScalarType;
use async_graphql::Value;

use super::Literal;
use super::ScalarCodec;
use super::ScalarError;
use crate::domain::object_id::ObjectId;

/// Id string representation, based on 12-byte object ids.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ObjectIdScalar(ObjectId);

impl ScalarCodec for ObjectIdScalar {
    fn parse_value(value: serde_json::Value) -> Result<Self, ScalarError> {
        match value {
            serde_json::Value::String(str_value) => {
                Ok(ObjectIdScalar(ObjectId::parse_str(&str_value)?))
            }
            other => Err(ScalarError::ExpectedType {
                scalar: "ObjID",
                value: other.to_string(),
            }),
        }
    }

    fn serialize(&self) -> serde_json::Value {
        serde_json::Value::String(self.0.to_hex())
    }

    fn parse_literal(literal: &Literal) -> Result<Option<Self>, ScalarError> {
        match literal {
            Literal::String(str_value) => Ok(Some(ObjectIdScalar(ObjectId::parse_str(str_value)?))),
            _ => Ok(None),
        }
    }
}

#[Scalar(name = "ObjID")]
impl ScalarType for ObjectIdScalar {
    fn parse(value: Value) -> InputValueResult<Self> {
        super::parse_input(value)
    }

    fn to_value(&self) -> Value {
        super::to_output(self)
    }
}

impl From<ObjectId> for ObjectIdScalar {
    fn from(id: ObjectId) -> Self {
        Self(id)
    }
}

impl From<ObjectIdScalar> for ObjectId {
    fn from(id: ObjectIdScalar) -> ObjectId {
        id.0
    }
}

impl Display for ObjectIdScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
