use crate::directive::ExecutionHalt;
use crate::directive::FieldArguments;
use crate::directive::RequestContext;
use crate::execution::RootObject;
use crate::execution::value_coercion;
use crate::types::Field;
use crate::types::TypeArena;
use crate::value;
use async_graphql::Value;
use async_graphql::dynamic::FieldValue;
use async_graphql::dynamic::ResolverContext;
use std::sync::Arc;

/// Resolves one object field for the execution engine.
///
/// Each call reads the source value (the request's root object for
/// top-level selections, the parent's value otherwise) and the request
/// context, coerces the
/// arguments, runs the field's directive chain and coerces the result back
/// into the engine's representation.
pub(crate) struct FieldResolver {
    field: Field,
    types: Arc<TypeArena>,
}
impl FieldResolver {
    pub fn new(types: Arc<TypeArena>, field: Field) -> Self {
        Self {
            field,
            types,
        }
    }

    pub fn resolve<'a>(
        &self,
        ctx: ResolverContext<'a>,
    ) -> async_graphql::Result<Option<FieldValue<'a>>> {
        // Root types may also be selected below the top level.
        let is_top_level = ctx.ctx.path_node
            .as_ref()
            .is_none_or(|node| node.parent.is_none());
        let source =
            if is_top_level {
                ctx.ctx.data_opt::<RootObject>()
                    .map(|root| root.0.clone())
                    .unwrap_or(Value::Null)
            } else {
                ctx.parent_value.as_value()
                    .cloned()
                    .unwrap_or(Value::Null)
            };
        let context = ctx.ctx.data_opt::<RequestContext>()
            .cloned()
            .unwrap_or_default();

        let field_node = &ctx.ctx.item.node;
        let args = value_coercion::coerce_arguments(
            &self.types,
            &self.field,
            ctx.args.as_index_map(),
            |arg_name| matches!(
                field_node.get_argument(arg_name).map(|arg| &arg.node),
                Some(async_graphql_value::Value::Variable(_)),
            ),
        ).map_err(|err| async_graphql::Error::new(err.to_string()))?;

        tracing::trace!(
            "Resolving `{}` through {:?}.",
            self.field.name(),
            self.field.directives(),
        );
        let resolved = resolve_field_value(&self.field, &source, context, &args)
            .map_err(|halt| async_graphql::Error::new(halt.reason()))?;

        value_coercion::coerce_output(&self.types, self.field.type_ref(), resolved)
            .map_err(|err| async_graphql::Error::new(err.to_string()))
    }
}

/// Resolve `field` against `source`: start from `source[field.name]` (or
/// `null` when absent) and run the field's directive chain over it.
///
/// Context changes made by the chain stay local to this field.
pub fn resolve_field_value(
    field: &Field,
    source: &Value,
    context: RequestContext,
    field_args: &FieldArguments,
) -> Result<Value, ExecutionHalt> {
    let initial = value::object_entry(source, field.name())
        .cloned()
        .unwrap_or(Value::Null);
    let (resolved, _) = field.directives().execute(context, source, initial, field_args)?;
    Ok(resolved)
}
