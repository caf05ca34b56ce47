use async_graphql::Value;

/// The (possibly directive-replaced) root object of a request, attached to
/// the engine request as data so root-field resolvers can read it.
#[derive(Clone, Debug)]
pub(crate) struct RootObject(pub Value);
