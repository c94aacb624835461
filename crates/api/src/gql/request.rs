use async_graphql::{Request, Variables};
use serde::Deserialize;
use serde_json::{Map, Value};

/// The accepted body of `POST /graphql`. Anything beyond `query` and
/// `variables` is rejected before execution.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphQLBody {
    pub query: String,
    #[serde(default)]
    pub variables: Option<Map<String, Value>>,
}

impl GraphQLBody {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn into_request(self) -> Request {
        let request = Request::new(self.query);
        match self.variables {
            Some(vars) => request.variables(Variables::from_json(Value::Object(vars))),
            None => request,
        }
    }
}
