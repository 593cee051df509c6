//! Custom GraphQL scalars: `ObjID`, `Date` and `JSON`.
//!
//! Each scalar implements [`ScalarCodec`], the three conversions a scalar needs:
//! reading a variable value, writing a response value and reading an inline
//! literal. The `async_graphql::ScalarType` impls are thin bridges onto it.

mod date;
mod json;
mod literal;
mod object_id;

use async_graphql::InputType;
use async_graphql::InputValueResult;
use async_graphql::ObjectType;
use async_graphql::SchemaBuilder;
use async_graphql::SubscriptionType;
use async_graphql::Value;
pub use date::DateScalar;
pub use date::DateValue;
pub use json::JsonScalar;
pub use literal::Literal;
pub use object_id::ObjectIdScalar;
use thiserror::Error;

use crate::domain::object_id::ObjectIdError;

/// Error for scalar conversions
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScalarError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] ObjectIdError),

    #[error("{scalar} cannot represent value: {value}")]
    ExpectedType { scalar: &'static str, value: String },
}

/// Conversions between wire values and a scalar's internal representation.
pub trait ScalarCodec: Sized {
    /// Convert a value supplied as a query variable.
    fn parse_value(value: serde_json::Value) -> Result<Self, ScalarError>;

    /// Convert the internal representation into a response value.
    fn serialize(&self) -> serde_json::Value;

    /// Convert an inline literal.
    ///
    /// `Ok(None)` means the literal kind is not one this scalar reads; the field
    /// resolves to an empty value rather than an error.
    fn parse_literal(literal: &Literal) -> Result<Option<Self>, ScalarError>;
}

/// Parse an input value handed over by async-graphql.
///
/// async-graphql resolves inline literals and variables into the same constant
/// value before a scalar sees it, so literal semantics are tried first and
/// variable semantics cover the kinds the literal reader declines.
///
/// Because the two are indistinguishable here, an inline `true` or `null` for
/// a `Date` takes the variable coercion (1 ms and the epoch), and a `JSON`
/// variable takes the literal reading, so its integers come back as floats.
pub(crate) fn parse_input<T>(value: Value) -> InputValueResult<T>
where
    T: ScalarCodec + InputType,
{
    if let Some(parsed) = T::parse_literal(&Literal::from(&value))? {
        return Ok(parsed);
    }

    Ok(T::parse_value(value.into_json()?)?)
}

/// Response value for async-graphql.
pub(crate) fn to_output<T: ScalarCodec>(scalar: &T) -> Value {
    Value::from_json(scalar.serialize()).unwrap_or(Value::Null)
}

/// Register the custom scalars with a schema so they are part of the SDL even
/// when no field references them yet.
pub fn register_scalars<Query, Mutation, Subscription>(
    builder: SchemaBuilder<Query, Mutation, Subscription>,
) -> SchemaBuilder<Query, Mutation, Subscription>
where
    Query: ObjectType + 'static,
    Mutation: ObjectType + 'static,
    Subscription: SubscriptionType + 'static,
{
    builder
        .register_output_type::<ObjectIdScalar>()
        .register_output_type::<DateScalar>()
        .register_output_type::<JsonScalar>()
}
