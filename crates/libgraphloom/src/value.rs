use crate::ast;
use crate::schema::SchemaBuildError;
use async_graphql::Name;
use async_graphql::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Convert a literal written in the schema document (a default value or a
/// directive argument) into the runtime [`Value`] representation.
///
/// `owner` names the declaration the literal belongs to and is only used for
/// error reporting.
pub(crate) fn const_value_from_ast(
    ast_value: &ast::schema::Value,
    owner: &str,
) -> Result<Value> {
    Ok(match ast_value {
        ast::schema::Value::Variable(variable_name) =>
            return Err(SchemaBuildError::VariableInConstContext {
                owner: owner.to_string(),
                variable_name: variable_name.to_string(),
            }),

        ast::schema::Value::Int(number) =>
            number.as_i64()
                .map(|int| Value::Number(int.into()))
                .unwrap_or(Value::Null),

        ast::schema::Value::Float(float) =>
            serde_json::Number::from_f64(*float)
                .map(Value::Number)
                .unwrap_or(Value::Null),

        ast::schema::Value::String(string) =>
            Value::String(string.to_string()),

        ast::schema::Value::Boolean(boolean) =>
            Value::Boolean(*boolean),

        ast::schema::Value::Null =>
            Value::Null,

        ast::schema::Value::Enum(enum_name) =>
            Value::Enum(Name::new(enum_name)),

        ast::schema::Value::List(values) =>
            Value::List(
                values.iter()
                    .map(|value| const_value_from_ast(value, owner))
                    .collect::<Result<Vec<_>>>()?,
            ),

        ast::schema::Value::Object(entries) => {
            let mut object = IndexMap::new();
            for (key, value) in entries.iter() {
                object.insert(Name::new(key), const_value_from_ast(value, owner)?);
            }
            Value::Object(object)
        },
    })
}

/// Look up `key` in `value` if it is an object.
pub(crate) fn object_entry<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(object) => object.get(key),
        _ => None,
    }
}
