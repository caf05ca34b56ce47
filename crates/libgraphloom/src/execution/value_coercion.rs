use crate::directive::FieldArguments;
use crate::scalar::ScalarError;
use crate::types::Field;
use crate::types::NamedTypeKind;
use crate::types::ResolvedTypeRef;
use crate::types::TypeAnnotation;
use crate::types::TypeArena;
use crate::value;
use async_graphql::Name;
use async_graphql::Value;
use async_graphql::dynamic::FieldValue;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, CoercionError>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoercionError {
    #[error("Expected a list for `{type_name}`, found `{found}`")]
    ExpectedList {
        found: Value,
        type_name: String,
    },

    #[error("Expected an object for input type `{type_name}`, found `{found}`")]
    ExpectedObject {
        found: Value,
        type_name: String,
    },

    #[error("Scalar `{scalar_name}` rejected the value: {source}")]
    Scalar {
        scalar_name: String,
        #[source]
        source: ScalarError,
    },

    #[error("`{found}` is not a value of enum `{enum_name}`")]
    UnknownEnumValue {
        enum_name: String,
        found: Value,
    },

    #[error("Cannot tell which member of union `{union_name}` the value is without a `__typename` entry")]
    UnresolvedUnionMember {
        union_name: String,
    },
}

/// Whether an argument value was written inline in the query or supplied
/// through a variable. Custom scalars parse the two differently.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InputSource {
    Literal,
    Variable,
}

/// Coerce the engine-supplied arguments of `field` into their runtime
/// representation: custom scalars are parsed and enum names are replaced by
/// their runtime values.
pub(crate) fn coerce_arguments(
    types: &TypeArena,
    field: &Field,
    raw_args: &IndexMap<Name, Value>,
    is_variable: impl Fn(&str) -> bool,
) -> Result<FieldArguments> {
    let mut args = FieldArguments::new();
    for (arg_name, arg_value) in raw_args {
        let coerced = match field.parameters().get(arg_name.as_str()) {
            Some(param) => {
                let source =
                    if is_variable(arg_name.as_str()) {
                        InputSource::Variable
                    } else {
                        InputSource::Literal
                    };
                coerce_input(types, param.type_ref(), arg_value.clone(), source)?
            },
            None => arg_value.clone(),
        };
        args.insert(arg_name.to_string(), coerced);
    }
    Ok(args)
}

pub(crate) fn coerce_input(
    types: &TypeArena,
    type_ref: &ResolvedTypeRef,
    value: Value,
    source: InputSource,
) -> Result<Value> {
    input_value(types, type_ref.annotation(), type_ref.kind(), value, source)
}

fn input_value(
    types: &TypeArena,
    annotation: &TypeAnnotation,
    kind: NamedTypeKind,
    value: Value,
    source: InputSource,
) -> Result<Value> {
    match (annotation, value) {
        (_, Value::Null) => Ok(Value::Null),

        (TypeAnnotation::List { inner, .. }, Value::List(items)) =>
            items.into_iter()
                .map(|item| input_value(types, inner, kind, item, source))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),

        // A single value is accepted where a list is expected.
        (TypeAnnotation::List { inner, .. }, single) =>
            input_value(types, inner, kind, single, source),

        (TypeAnnotation::Named { name, .. }, value) =>
            input_named_value(types, name, kind, value, source),
    }
}

fn input_named_value(
    types: &TypeArena,
    type_name: &str,
    kind: NamedTypeKind,
    value: Value,
    source: InputSource,
) -> Result<Value> {
    match kind {
        NamedTypeKind::Scalar => {
            let Some(config) = types.scalar(type_name) else {
                return Ok(value);
            };
            let parsed = match source {
                InputSource::Literal => config.parse_literal(&value),
                InputSource::Variable => config.parse_value(&value),
            };
            parsed.map_err(|source| CoercionError::Scalar {
                scalar_name: type_name.to_string(),
                source,
            })
        },

        NamedTypeKind::Enum => {
            let Some(enum_type) = types.enum_type(type_name) else {
                return Ok(value);
            };
            let value_name = match &value {
                Value::Enum(name) => name.as_str(),
                Value::String(name) => name.as_str(),
                _ => "",
            };
            enum_type.runtime_value_of(value_name)
                .cloned()
                .ok_or_else(|| CoercionError::UnknownEnumValue {
                    enum_name: type_name.to_string(),
                    found: value.clone(),
                })
        },

        NamedTypeKind::InputObject => {
            let Some(input_object) = types.input_object(type_name) else {
                return Ok(value);
            };
            let Value::Object(entries) = value else {
                return Err(CoercionError::ExpectedObject {
                    found: value,
                    type_name: type_name.to_string(),
                });
            };
            let mut coerced = IndexMap::new();
            for (key, entry) in entries {
                let entry = match input_object.fields().get(key.as_str()) {
                    Some(input_field) =>
                        coerce_input(types, input_field.type_ref(), entry, source)?,
                    None => entry,
                };
                coerced.insert(key, entry);
            }
            Ok(Value::Object(coerced))
        },

        NamedTypeKind::Object | NamedTypeKind::Union => Ok(value),
    }
}

/// Convert the value a directive chain produced into what the engine
/// expects for a field of type `type_ref`.
pub(crate) fn coerce_output<'a>(
    types: &TypeArena,
    type_ref: &ResolvedTypeRef,
    value: Value,
) -> Result<Option<FieldValue<'a>>> {
    output_value(types, type_ref.annotation(), type_ref.kind(), value)
}

fn output_value<'a>(
    types: &TypeArena,
    annotation: &TypeAnnotation,
    kind: NamedTypeKind,
    value: Value,
) -> Result<Option<FieldValue<'a>>> {
    match (annotation, value) {
        (_, Value::Null) => Ok(None),

        (TypeAnnotation::List { inner, .. }, Value::List(items)) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                values.push(output_value(types, inner, kind, item)?.unwrap_or(FieldValue::NULL));
            }
            Ok(Some(FieldValue::list(values)))
        },

        (TypeAnnotation::List { .. }, found) =>
            Err(CoercionError::ExpectedList {
                found,
                type_name: annotation.to_graphql_string(),
            }),

        (TypeAnnotation::Named { name, .. }, value) =>
            output_named_value(types, name, kind, value).map(Some),
    }
}

fn output_named_value<'a>(
    types: &TypeArena,
    type_name: &str,
    kind: NamedTypeKind,
    value: Value,
) -> Result<FieldValue<'a>> {
    match kind {
        NamedTypeKind::Scalar => match types.scalar(type_name) {
            Some(config) => config.serialize(&value)
                .map(FieldValue::value)
                .map_err(|source| CoercionError::Scalar {
                    scalar_name: type_name.to_string(),
                    source,
                }),
            None => Ok(FieldValue::value(value)),
        },

        NamedTypeKind::Enum => {
            let Some(enum_type) = types.enum_type(type_name) else {
                return Ok(FieldValue::value(value));
            };
            match enum_type.name_of(&value) {
                Some(value_name) => Ok(FieldValue::value(Value::Enum(Name::new(value_name)))),
                None => Err(CoercionError::UnknownEnumValue {
                    enum_name: type_name.to_string(),
                    found: value,
                }),
            }
        },

        NamedTypeKind::Union => {
            let member_name = match value::object_entry(&value, "__typename") {
                Some(Value::String(member_name)) => member_name.to_string(),
                _ => return Err(CoercionError::UnresolvedUnionMember {
                    union_name: type_name.to_string(),
                }),
            };
            Ok(FieldValue::value(value).with_type(member_name))
        },

        NamedTypeKind::InputObject | NamedTypeKind::Object =>
            Ok(FieldValue::value(value)),
    }
}
