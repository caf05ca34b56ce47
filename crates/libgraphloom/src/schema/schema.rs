use crate::directive::DirectiveChain;
use crate::schema::OperationKind;
use crate::types::ObjectType;
use crate::types::TypeArena;
use std::sync::Arc;

/// A fully assembled, executable schema.
///
/// Built at most once per [`GraphLoom`](crate::GraphLoom) and shared behind
/// an `Arc` by every request that executes against it.
pub struct Schema {
    pub(crate) directives: DirectiveChain,
    pub(crate) engine: async_graphql::dynamic::Schema,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) types: Arc<TypeArena>,
}
impl Schema {
    /// Directives written on the `schema { ... }` block. Run once per
    /// request, before any field resolves.
    pub fn directives(&self) -> &DirectiveChain {
        &self.directives
    }

    pub(crate) fn engine(&self) -> &async_graphql::dynamic::Schema {
        &self.engine
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }

    pub fn root_type(&self, operation: OperationKind) -> Option<&ObjectType> {
        match operation {
            OperationKind::Query => self.types.object(self.query_type.as_str()),
            OperationKind::Mutation => self.mutation_type.as_deref()
                .and_then(|type_name| self.types.object(type_name)),
        }
    }

    /// The schema rendered back to SDL by the execution engine.
    pub fn sdl(&self) -> String {
        self.engine.sdl()
    }

    pub fn types(&self) -> &TypeArena {
        &self.types
    }
}
impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("directives", &self.directives)
            .field("mutation_type", &self.mutation_type)
            .field("query_type", &self.query_type)
            .field("types", &self.types)
            .finish_non_exhaustive()
    }
}
