use crate::directive::RequestContext;
use async_graphql::Name;
use async_graphql::Value;
use async_graphql::Variables;
use indexmap::IndexMap;
use serde::de::Error as _;

/// A single operation to execute against a built schema.
#[derive(Clone, Debug, Default)]
pub struct Request {
    pub context: RequestContext,
    pub operation_name: Option<String>,
    pub query: String,
    pub root_object: IndexMap<Name, Value>,
    pub variables: Variables,
}
impl Request {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    /// The object root-level fields (and the schema-level directive chain)
    /// resolve against.
    pub fn with_root_object(mut self, root_object: IndexMap<Name, Value>) -> Self {
        self.root_object = root_object;
        self
    }

    pub fn with_root_value(mut self, name: &str, value: Value) -> Self {
        self.root_object.insert(Name::new(name), value);
        self
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_json_variables(self, variables: serde_json::Value) -> Self {
        self.with_variables(Variables::from_json(variables))
    }

    /// Use a JSON object as the root object. Fails if `root` is not an
    /// object.
    pub fn with_json_root(self, root: serde_json::Value) -> serde_json::Result<Self> {
        match Value::from_json(root)? {
            Value::Object(root_object) => Ok(self.with_root_object(root_object)),
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object for the root value, found `{other}`",
            ))),
        }
    }
}
