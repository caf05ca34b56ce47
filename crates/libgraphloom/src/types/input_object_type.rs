use crate::loc;
use crate::types::ResolvedTypeRef;
use async_graphql::Value;
use indexmap::IndexMap;

#[derive(Clone, Debug)]
pub struct InputObjectType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub(crate) fn placeholder(name: &str, def_location: loc::FilePosition) -> Self {
        Self {
            def_location,
            description: None,
            fields: IndexMap::new(),
            name: name.to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// A field defined on an [`InputObjectType`]. Input fields carry no
/// directives.
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_ref: ResolvedTypeRef,
}
impl InputField {
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
