mod enum_privacy;
mod enum_type;
mod field;
mod input_object_type;
mod named_type_kind;
mod object_type;
mod resolved_type_ref;
mod type_annotation;
mod type_arena;
mod type_materializer;
mod union_type;

pub use enum_privacy::EnumPrivacy;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use field::Parameter;
pub use input_object_type::InputField;
pub use input_object_type::InputObjectType;
pub use named_type_kind::NamedTypeKind;
pub use object_type::ObjectType;
pub use resolved_type_ref::ResolvedTypeRef;
pub use type_annotation::TypeAnnotation;
pub use type_arena::TypeArena;
pub(crate) use type_materializer::TypeMaterializer;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
