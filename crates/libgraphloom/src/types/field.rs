use crate::directive::DirectiveChain;
use crate::loc;
use crate::types::ResolvedTypeRef;
use async_graphql::Value;
use indexmap::IndexMap;

/// A field defined on an [`ObjectType`](crate::types::ObjectType), together
/// with the directive chain that runs whenever it is resolved.
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) directives: DirectiveChain,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_ref: ResolvedTypeRef,
}
impl Field {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// Set when the field is deprecated, either via `@deprecated` or by some
    /// other directive's define hook.
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Directives in the order they were written on the field definition.
    pub fn directives(&self) -> &DirectiveChain {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_ref(&self) -> &ResolvedTypeRef {
        &self.type_ref
    }
}

/// An argument accepted by a [`Field`].
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_ref: ResolvedTypeRef,
}
impl Parameter {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &ResolvedTypeRef {
        &self.type_ref
    }
}
