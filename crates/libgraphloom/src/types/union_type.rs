use crate::loc;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions). Every
/// member is an object type.
#[derive(Clone, Debug)]
pub struct UnionType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub(crate) fn placeholder(name: &str, def_location: loc::FilePosition) -> Self {
        Self {
            def_location,
            description: None,
            members: vec![],
            name: name.to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Member type names in the order they were listed.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter().map(|name| name.as_str()).collect()
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.iter().any(|name| name == type_name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
