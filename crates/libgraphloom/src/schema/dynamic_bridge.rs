use crate::execution::FieldResolver;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::TypeArena;
use crate::types::UnionType;
use async_graphql::dynamic;
use std::sync::Arc;

/// Translate a materialized [`TypeArena`] into the execution engine's
/// dynamic schema, wiring a [`FieldResolver`] into every object field.
pub(super) fn build_engine_schema(
    types: &Arc<TypeArena>,
    query_type: &str,
    mutation_type: Option<&str>,
) -> Result<dynamic::Schema, SchemaBuildError> {
    let mut builder = dynamic::Schema::build(query_type, mutation_type, None);

    for scalar in types.scalars().values() {
        let mut engine_scalar = dynamic::Scalar::new(scalar.name());
        if let Some(description) = scalar.description() {
            engine_scalar = engine_scalar.description(description);
        }
        builder = builder.register(engine_scalar);
    }
    for enum_type in types.enums().values() {
        builder = builder.register(engine_enum(enum_type));
    }
    for input_object in types.input_objects().values() {
        builder = builder.register(engine_input_object(input_object));
    }
    for union_type in types.unions().values() {
        builder = builder.register(engine_union(union_type));
    }
    for object in types.objects().values() {
        builder = builder.register(engine_object(types, object));
    }

    builder.finish().map_err(|err| SchemaBuildError::EngineSchema {
        message: err.to_string(),
    })
}

fn engine_enum(enum_type: &EnumType) -> dynamic::Enum {
    let mut engine_enum = dynamic::Enum::new(enum_type.name());
    if let Some(description) = enum_type.description() {
        engine_enum = engine_enum.description(description);
    }
    for enum_value in enum_type.values().values() {
        let mut item = dynamic::EnumItem::new(enum_value.name());
        if let Some(description) = enum_value.description() {
            item = item.description(description);
        }
        if enum_value.deprecation_reason().is_some() {
            item = item.deprecation(enum_value.deprecation_reason());
        }
        engine_enum = engine_enum.item(item);
    }
    engine_enum
}

fn engine_input_object(input_object: &InputObjectType) -> dynamic::InputObject {
    let mut engine_input = dynamic::InputObject::new(input_object.name());
    if let Some(description) = input_object.description() {
        engine_input = engine_input.description(description);
    }
    for input_field in input_object.fields().values() {
        let mut engine_field = dynamic::InputValue::new(
            input_field.name(),
            input_field.type_ref().annotation().to_engine_type_ref(),
        );
        if let Some(description) = input_field.description() {
            engine_field = engine_field.description(description);
        }
        if let Some(default_value) = input_field.default_value() {
            engine_field = engine_field.default_value(default_value.clone());
        }
        engine_input = engine_input.field(engine_field);
    }
    engine_input
}

fn engine_union(union_type: &UnionType) -> dynamic::Union {
    let mut engine_union = dynamic::Union::new(union_type.name());
    if let Some(description) = union_type.description() {
        engine_union = engine_union.description(description);
    }
    for member in union_type.member_type_names() {
        engine_union = engine_union.possible_type(member);
    }
    engine_union
}

fn engine_object(
    types: &Arc<TypeArena>,
    object: &ObjectType,
) -> dynamic::Object {
    let mut engine_object = dynamic::Object::new(object.name());
    if let Some(description) = object.description() {
        engine_object = engine_object.description(description);
    }
    for field in object.fields().values() {
        engine_object = engine_object.field(engine_field(types, field));
    }
    engine_object
}

fn engine_field(types: &Arc<TypeArena>, field: &Field) -> dynamic::Field {
    let resolver = Arc::new(FieldResolver::new(Arc::clone(types), field.clone()));
    let mut engine_field = dynamic::Field::new(
        field.name(),
        field.type_ref().annotation().to_engine_type_ref(),
        move |ctx| {
            let resolver = Arc::clone(&resolver);
            dynamic::FieldFuture::new(async move { resolver.resolve(ctx) })
        },
    );

    if let Some(description) = field.description() {
        engine_field = engine_field.description(description);
    }
    if field.deprecation_reason().is_some() {
        engine_field = engine_field.deprecation(field.deprecation_reason());
    }
    for param in field.parameters().values() {
        let mut engine_arg = dynamic::InputValue::new(
            param.name(),
            param.type_ref().annotation().to_engine_type_ref(),
        );
        if let Some(description) = param.description() {
            engine_arg = engine_arg.description(description);
        }
        if let Some(default_value) = param.default_value() {
            engine_arg = engine_arg.default_value(default_value.clone());
        }
        engine_field = engine_field.argument(engine_arg);
    }
    engine_field
}
