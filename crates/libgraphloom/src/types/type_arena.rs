use crate::scalar::ScalarConfig;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::NamedTypeKind;
use crate::types::ObjectType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Name-indexed storage for every materialized type.
///
/// Types refer to each other by name only, so cyclic references (`A` has a
/// field of type `B` and `B` one of type `A`) need no special handling.
#[derive(Clone, Debug, Default)]
pub struct TypeArena {
    pub(crate) enums: IndexMap<String, EnumType>,
    pub(crate) input_objects: IndexMap<String, InputObjectType>,
    pub(crate) objects: IndexMap<String, ObjectType>,
    pub(crate) scalars: IndexMap<String, ScalarConfig>,
    pub(crate) unions: IndexMap<String, UnionType>,
}
impl TypeArena {
    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.enums.get(name)
    }

    pub fn enums(&self) -> &IndexMap<String, EnumType> {
        &self.enums
    }

    pub fn input_object(&self, name: &str) -> Option<&InputObjectType> {
        self.input_objects.get(name)
    }

    pub fn input_objects(&self) -> &IndexMap<String, InputObjectType> {
        &self.input_objects
    }

    pub fn object(&self, name: &str) -> Option<&ObjectType> {
        self.objects.get(name)
    }

    pub fn objects(&self) -> &IndexMap<String, ObjectType> {
        &self.objects
    }

    /// The registered config for a declared custom scalar. Built-in scalars
    /// have none.
    pub fn scalar(&self, name: &str) -> Option<&ScalarConfig> {
        self.scalars.get(name)
    }

    pub fn scalars(&self) -> &IndexMap<String, ScalarConfig> {
        &self.scalars
    }

    pub fn union_type(&self, name: &str) -> Option<&UnionType> {
        self.unions.get(name)
    }

    pub fn unions(&self) -> &IndexMap<String, UnionType> {
        &self.unions
    }

    /// Look `name` up in order scalars, objects, input objects, enums,
    /// unions.
    pub fn kind_of(&self, name: &str) -> Option<NamedTypeKind> {
        if ScalarConfig::is_builtin_name(name) || self.scalars.contains_key(name) {
            Some(NamedTypeKind::Scalar)
        } else if self.objects.contains_key(name) {
            Some(NamedTypeKind::Object)
        } else if self.input_objects.contains_key(name) {
            Some(NamedTypeKind::InputObject)
        } else if self.enums.contains_key(name) {
            Some(NamedTypeKind::Enum)
        } else if self.unions.contains_key(name) {
            Some(NamedTypeKind::Union)
        } else {
            None
        }
    }
}
