use crate::directive::DirectiveConstructError;
use async_graphql::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, DirectiveConstructError>;

/// Arguments a directive constructor receives: the declaration's explicit
/// defaults overlaid with the arguments written at the usage site.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectiveArguments(IndexMap<String, Value>);
impl DirectiveArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.0
    }

    /// A required `String` argument.
    pub fn string(&self, name: &str) -> Result<String> {
        self.opt_string(name)?
            .ok_or_else(|| DirectiveConstructError::MissingArgument {
                argument: name.to_string(),
            })
    }

    pub fn opt_string(&self, name: &str) -> Result<Option<String>> {
        match self.non_null(name) {
            None => Ok(None),
            Some(Value::String(string)) => Ok(Some(string.to_string())),
            Some(other) => Err(invalid(name, "a string", other)),
        }
    }

    pub fn opt_boolean(&self, name: &str) -> Result<Option<bool>> {
        match self.non_null(name) {
            None => Ok(None),
            Some(Value::Boolean(boolean)) => Ok(Some(*boolean)),
            Some(other) => Err(invalid(name, "a boolean", other)),
        }
    }

    pub fn opt_int(&self, name: &str) -> Result<Option<i64>> {
        match self.non_null(name) {
            None => Ok(None),
            Some(Value::Number(number)) if number.is_i64() =>
                Ok(number.as_i64()),
            Some(other) => Err(invalid(name, "an integer", other)),
        }
    }

    /// An argument that may be written either as an enum value or as a
    /// string literal, returned as its name.
    pub fn enum_or_string(&self, name: &str) -> Result<Option<String>> {
        match self.non_null(name) {
            None => Ok(None),
            Some(Value::Enum(enum_name)) => Ok(Some(enum_name.to_string())),
            Some(Value::String(string)) => Ok(Some(string.to_string())),
            Some(other) => Err(invalid(name, "an enum value", other)),
        }
    }

    /// Fail if any argument other than `known` was passed.
    pub fn expect_only(&self, known: &[&str]) -> Result<()> {
        match self.0.keys().find(|name| !known.contains(&name.as_str())) {
            Some(unknown) => Err(DirectiveConstructError::UnknownArgument {
                argument: unknown.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn non_null(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| !matches!(value, Value::Null))
    }
}
impl From<IndexMap<String, Value>> for DirectiveArguments {
    fn from(args: IndexMap<String, Value>) -> Self {
        Self(args)
    }
}
impl<K: Into<String>> FromIterator<(K, Value)> for DirectiveArguments {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}

fn invalid(name: &str, expected: &'static str, found: &Value) -> DirectiveConstructError {
    DirectiveConstructError::InvalidArgument {
        argument: name.to_string(),
        expected,
        found: found.clone(),
    }
}
