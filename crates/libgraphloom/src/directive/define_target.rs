use async_graphql::Value;
use thiserror::Error;

/// The mutable, static definition of a field as seen by
/// [`Directive::define`](crate::directive::Directive::define).
///
/// `name` is informational: the field keeps the name it was declared with.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

/// The mutable, static definition of an enum value as seen by
/// [`Directive::define`](crate::directive::Directive::define).
///
/// `value` is the runtime representation the enum value maps to, which
/// defaults to the value's name as a string.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueConfig {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    pub value: Value,
}

#[derive(Debug)]
pub enum DefineTarget<'a> {
    Field(&'a mut FieldConfig),
    EnumValue(&'a mut EnumValueConfig),
}
impl DefineTarget<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Field(_) => "field",
            Self::EnumValue(_) => "enum value",
        }
    }

    /// Set the deprecation reason of whichever definition this targets.
    pub fn set_deprecation_reason(&mut self, reason: impl Into<String>) {
        let reason = Some(reason.into());
        match self {
            Self::Field(config) => config.deprecation_reason = reason,
            Self::EnumValue(config) => config.deprecation_reason = reason,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DefineError {
    #[error("Directive cannot be applied to a {0}")]
    UnsupportedTarget(&'static str),

    #[error("{0}")]
    Custom(String),
}
