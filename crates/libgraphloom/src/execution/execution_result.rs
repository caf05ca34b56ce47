use async_graphql::ServerError;
use async_graphql::Value;
use indexmap::IndexMap;

/// The outcome of executing a [`Request`](crate::execution::Request).
///
/// Field-level failures land in `errors` while sibling fields still resolve,
/// so a result may carry both `data` and `errors`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExecutionResult {
    pub data: Value,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ServerError>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: IndexMap<String, Value>,
}
impl ExecutionResult {
    /// A result with no data and a single request-level error.
    pub(crate) fn halted(message: impl Into<String>) -> Self {
        Self {
            data: Value::Null,
            errors: vec![ServerError::new(message, None)],
            extensions: IndexMap::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_json(self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
impl From<async_graphql::Response> for ExecutionResult {
    fn from(response: async_graphql::Response) -> Self {
        Self {
            data: response.data,
            errors: response.errors,
            extensions: response.extensions.into_iter().collect(),
        }
    }
}
