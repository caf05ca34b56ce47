use crate::ast;
use crate::directive::DirectiveStore;
use crate::registry::DefinitionRegistry;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaAssembler;
use crate::schema::SchemaBuildError;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn assemble(sdl: &str) -> Result<Schema> {
    let document = ast::parse_schema_document(sdl)
        .map_err(|err| SchemaBuildError::ParseError {
            file: "str://test".into(),
            err: err.to_string(),
        })?;
    let mut registry = DefinitionRegistry::new();
    registry.ingest_document(Path::new("str://test"), document)?;

    SchemaAssembler::new(&registry, &DirectiveStore::new(), &IndexMap::new()).assemble()
}

mod root_types {
    use super::*;

    #[test]
    fn query_and_mutation_default_by_name() -> Result<()> {
        let schema = assemble(concat!(
            "type Query { hello: String }\n",
            "type Mutation { touch: Boolean }\n",
        ))?;

        assert_eq!(schema.query_type_name(), "Query");
        assert_eq!(schema.mutation_type_name(), Some("Mutation"));
        assert_eq!(
            schema.root_type(OperationKind::Mutation).map(|obj| obj.name()),
            Some("Mutation"),
        );
        Ok(())
    }

    #[test]
    fn mutation_is_optional() -> Result<()> {
        let schema = assemble("type Query { hello: String }")?;

        assert_eq!(schema.mutation_type_name(), None);
        assert!(schema.root_type(OperationKind::Mutation).is_none());
        Ok(())
    }

    #[test]
    fn schema_block_names_the_roots() -> Result<()> {
        let schema = assemble(concat!(
            "schema { query: Root, mutation: Writes }\n",
            "type Root { hello: String }\n",
            "type Writes { touch: Boolean }\n",
            "type Query { unused: Int }\n",
        ))?;

        assert_eq!(schema.query_type_name(), "Root");
        assert_eq!(schema.mutation_type_name(), Some("Writes"));
        Ok(())
    }

    #[test]
    fn missing_query_type_is_an_error() {
        let result = assemble("type Mutation { touch: Boolean }");

        assert!(matches!(result, Err(SchemaBuildError::NoQueryOperationTypeDefined)));
    }

    #[test]
    fn root_named_in_schema_block_must_exist() {
        let result = assemble(concat!(
            "schema { query: Query, mutation: Writes }\n",
            "type Query { hello: String }\n",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::MissingRootType { operation: OperationKind::Mutation, ref type_name })
                if type_name == "Writes",
        ));
    }

    #[test]
    fn subscriptions_are_rejected() {
        let result = assemble(concat!(
            "schema { query: Query, subscription: Events }\n",
            "type Query { hello: String }\n",
            "type Events { tick: Int }\n",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::UnsupportedOperationType { ref operation, .. })
                if operation == "subscription",
        ));
    }
}

#[test]
fn schema_directives_form_the_schema_chain() -> Result<()> {
    let schema = assemble(concat!(
        "schema @deprecated { query: Query }\n",
        "type Query { hello: String }\n",
    ));

    // `@deprecated` cannot be placed on the schema block.
    assert!(matches!(
        schema,
        Err(SchemaBuildError::ConstructionFailed { ref directive_name, ref owner, .. })
            if directive_name == "deprecated" && owner == "schema",
    ));

    let schema = assemble("schema { query: Query }\ntype Query { hello: String }")?;
    assert!(schema.directives().is_empty());
    Ok(())
}

#[test]
fn declared_directives_need_constructors() {
    let result = assemble(concat!(
        "directive @audit on FIELD_DEFINITION\n",
        "type Query { hello: String }\n",
    ));

    assert!(matches!(
        result,
        Err(SchemaBuildError::UndeclaredDirectiveConstructor { ref directive_name, .. })
            if directive_name == "audit",
    ));
}

#[test]
fn sdl_lists_materialized_types() -> Result<()> {
    let schema = assemble(concat!(
        "type Query { pet(kind: Kind = CAT): Pet, old: Int @deprecated(reason: \"gone\") }\n",
        "type Cat { meow: String }\n",
        "type Dog { woof: String }\n",
        "union Pet = Cat | Dog\n",
        "enum Kind @enumPrivacy(frontend: true) { CAT DOG }\n",
    ))?;

    let sdl = schema.sdl();
    for expected in ["type Query", "type Cat", "type Dog", "union Pet", "enum Kind"] {
        assert!(sdl.contains(expected), "missing `{expected}` in:\n{sdl}");
    }
    assert!(sdl.contains("gone"), "missing deprecation reason in:\n{sdl}");
    Ok(())
}
