use crate::loc;
use crate::types::EnumPrivacy;
use async_graphql::Value;
use indexmap::IndexMap;

/// An enum type whose values each map to a runtime value.
///
/// Resolvers and directives see the runtime value; clients see the value's
/// name. By default the runtime value is the name itself as a string, which
/// `@enumVal(str: "...")` or a directive's define hook can override.
#[derive(Clone, Debug)]
pub struct EnumType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) privacy: EnumPrivacy,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub(crate) fn placeholder(name: &str, def_location: loc::FilePosition) -> Self {
        Self {
            def_location,
            description: None,
            name: name.to_string(),
            privacy: EnumPrivacy::default(),
            values: IndexMap::new(),
        }
    }

    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn privacy(&self) -> EnumPrivacy {
        self.privacy
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    /// The runtime value of the enum value called `name`.
    pub fn runtime_value_of(&self, name: &str) -> Option<&Value> {
        self.values.get(name).map(|enum_value| &enum_value.value)
    }

    /// The name of the first enum value whose runtime value is `runtime`.
    pub fn name_of(&self, runtime: &Value) -> Option<&str> {
        self.values.values()
            .find(|enum_value| &enum_value.value == runtime)
            .map(|enum_value| enum_value.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) value: Value,
}
impl EnumValue {
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
