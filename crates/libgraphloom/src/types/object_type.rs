use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

#[derive(Clone, Debug)]
pub struct ObjectType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) name: String,
}
impl ObjectType {
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

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Base fields in declaration order, followed by fields added through
    /// `extend type` in the order the extensions were loaded.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
