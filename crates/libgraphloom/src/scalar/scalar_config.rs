use async_graphql::Value;
use std::sync::Arc;
use thiserror::Error;

/// Scalars provided by the execution engine. These cannot be re-registered.
pub const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

pub type ScalarFn = dyn Fn(&Value) -> Result<Value, ScalarError> + Send + Sync;

#[derive(Clone, Debug, Error, PartialEq)]
#[error("{0}")]
pub struct ScalarError(pub String);

/// Host-supplied behavior for a custom scalar declared in the schema.
///
/// * `serialize` maps a resolved runtime value to its wire representation.
/// * `parse_value` maps an incoming variable value to a runtime value.
/// * `parse_literal` maps an inline query literal to a runtime value.
///
/// All three default to passing the value through unchanged.
#[derive(Clone)]
pub struct ScalarConfig {
    name: String,
    description: Option<String>,
    serialize: Arc<ScalarFn>,
    parse_value: Arc<ScalarFn>,
    parse_literal: Arc<ScalarFn>,
}
impl ScalarConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            serialize: Arc::new(identity),
            parse_value: Arc::new(identity),
            parse_literal: Arc::new(identity),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_serialize<F>(mut self, serialize: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, ScalarError> + Send + Sync + 'static,
    {
        self.serialize = Arc::new(serialize);
        self
    }

    pub fn with_parse_value<F>(mut self, parse_value: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, ScalarError> + Send + Sync + 'static,
    {
        self.parse_value = Arc::new(parse_value);
        self
    }

    pub fn with_parse_literal<F>(mut self, parse_literal: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, ScalarError> + Send + Sync + 'static,
    {
        self.parse_literal = Arc::new(parse_literal);
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn serialize(&self, value: &Value) -> Result<Value, ScalarError> {
        (self.serialize)(value)
    }

    pub fn parse_value(&self, value: &Value) -> Result<Value, ScalarError> {
        (self.parse_value)(value)
    }

    pub fn parse_literal(&self, value: &Value) -> Result<Value, ScalarError> {
        (self.parse_literal)(value)
    }

    pub fn is_builtin_name(name: &str) -> bool {
        BUILTIN_SCALAR_NAMES.contains(&name)
    }
}
impl std::fmt::Debug for ScalarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarConfig")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

fn identity(value: &Value) -> Result<Value, ScalarError> {
    Ok(value.clone())
}
