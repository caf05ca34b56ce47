use crate::directive::FieldArguments;
use crate::execution::ExecutionResult;
use crate::execution::Request;
use crate::execution::RootObject;
use crate::schema::Schema;
use async_graphql::Value;

/// Execute `request` against `schema`.
///
/// The schema-level directive chain runs first, with the root object as both
/// source and initial value. If it yields an object, that object replaces the
/// root; its context becomes the context every field resolver sees. A halt
/// here fails the whole request.
pub(crate) async fn execute(schema: &Schema, request: Request) -> ExecutionResult {
    let Request {
        context,
        operation_name,
        query,
        root_object,
        variables,
    } = request;

    let root = Value::Object(root_object);
    let (root, context) =
        match schema.directives().execute(context, &root, root.clone(), &FieldArguments::new()) {
            Ok((replaced @ Value::Object(_), context)) => (replaced, context),
            Ok((_, context)) => (root, context),
            Err(halt) => {
                tracing::debug!("Schema-level directives halted the request: {halt}");
                return ExecutionResult::halted(halt.reason());
            },
        };

    let mut engine_request = async_graphql::Request::new(query)
        .variables(variables)
        .data(RootObject(root))
        .data(context);
    if let Some(operation_name) = operation_name {
        engine_request = engine_request.operation_name(operation_name);
    }

    schema.engine().execute(engine_request).await.into()
}
