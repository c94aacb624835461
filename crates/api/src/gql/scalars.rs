use std::fmt;

use async_graphql::{Enum, InputValueError, InputValueResult, Scalar, ScalarType, Value};

/// Opaque entity identifier, exposed as the `UUID` scalar.
///
/// Any string is accepted as a candidate; whether it names a stored record is
/// for the database to decide. Unknown identifiers simply match nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(pub String);

#[Scalar(name = "UUID")]
impl ScalarType for EntityId {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(s) => Ok(EntityId(s)),
            other => Err(InputValueError::expected_type(other)),
        }
    }

    fn is_valid(value: &Value) -> bool {
        matches!(value, Value::String(_))
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        EntityId(id)
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[graphql(name = "MemberTypeId")]
pub enum MemberTypeId {
    #[graphql(name = "basic")]
    Basic,
    #[graphql(name = "business")]
    Business,
}

impl From<infra::models::MemberTypeId> for MemberTypeId {
    fn from(id: infra::models::MemberTypeId) -> Self {
        match id {
            infra::models::MemberTypeId::Basic => MemberTypeId::Basic,
            infra::models::MemberTypeId::Business => MemberTypeId::Business,
        }
    }
}

impl From<MemberTypeId> for infra::models::MemberTypeId {
    fn from(id: MemberTypeId) -> Self {
        match id {
            MemberTypeId::Basic => infra::models::MemberTypeId::Basic,
            MemberTypeId::Business => infra::models::MemberTypeId::Business,
        }
    }
}
