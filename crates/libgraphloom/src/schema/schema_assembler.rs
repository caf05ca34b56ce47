use crate::directive::DirectiveChain;
use crate::directive::DirectiveFactory;
use crate::directive::DirectiveSite;
use crate::directive::DirectiveStore;
use crate::registry::DefinitionRegistry;
use crate::scalar::ScalarConfig;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::dynamic_bridge;
use crate::types::TypeArena;
use crate::types::TypeMaterializer;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Runs every build step, in order, over a frozen set of registrations.
pub(crate) struct SchemaAssembler<'a> {
    directive_store: &'a DirectiveStore,
    registry: &'a DefinitionRegistry,
    scalars: &'a IndexMap<String, ScalarConfig>,
}
impl<'a> SchemaAssembler<'a> {
    pub fn new(
        registry: &'a DefinitionRegistry,
        directive_store: &'a DirectiveStore,
        scalars: &'a IndexMap<String, ScalarConfig>,
    ) -> Self {
        Self {
            directive_store,
            registry,
            scalars,
        }
    }

    pub fn assemble(&self) -> Result<Schema> {
        self.directive_store.validate_all_declared(self.registry)?;

        let factory = DirectiveFactory::new(self.registry, self.directive_store);
        let directives = match self.registry.schema_def() {
            Some(schema_def) => factory.build_chain(
                &schema_def.def.directives,
                DirectiveSite::SchemaDefinition,
                "schema",
            )?,
            None => DirectiveChain::new(),
        };
        tracing::debug!("Built schema-level directive chain {directives:?}.");

        let types = TypeMaterializer::new(self.registry, &factory, self.scalars)
            .materialize()?;
        let (query_type, mutation_type) = self.locate_roots(&types)?;
        tracing::debug!(
            "Resolved root types: query=`{query_type}`, mutation={mutation_type:?}.",
        );

        let types = Arc::new(types);
        let engine = dynamic_bridge::build_engine_schema(
            &types,
            query_type.as_str(),
            mutation_type.as_deref(),
        )?;

        Ok(Schema {
            directives,
            engine,
            mutation_type,
            query_type,
            types,
        })
    }

    fn locate_roots(&self, types: &TypeArena) -> Result<(String, Option<String>)> {
        let Some(schema_def) = self.registry.schema_def() else {
            let query_type = OperationKind::Query.default_type_name();
            if types.object(query_type).is_none() {
                return Err(SchemaBuildError::NoQueryOperationTypeDefined);
            }
            let mutation_type = OperationKind::Mutation.default_type_name();
            return Ok((
                query_type.to_string(),
                types.object(mutation_type).map(|_| mutation_type.to_string()),
            ));
        };

        if schema_def.def.subscription.is_some() {
            return Err(SchemaBuildError::UnsupportedOperationType {
                location: schema_def.location.clone(),
                operation: "subscription".to_string(),
            });
        }

        let query_type = schema_def.def.query.as_ref()
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        check_root_type(types, OperationKind::Query, query_type)?;

        if let Some(mutation_type) = &schema_def.def.mutation {
            check_root_type(types, OperationKind::Mutation, mutation_type)?;
        }

        Ok((query_type.to_string(), schema_def.def.mutation.clone()))
    }
}

fn check_root_type(
    types: &TypeArena,
    operation: OperationKind,
    type_name: &str,
) -> Result<()> {
    if types.object(type_name).is_some() {
        return Ok(());
    }
    Err(SchemaBuildError::MissingRootType {
        operation,
        type_name: type_name.to_string(),
    })
}
