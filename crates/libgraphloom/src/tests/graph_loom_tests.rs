use crate::GraphLoom;
use crate::SchemaBuildError;
use crate::directive::Directive;
use crate::directive::DirectiveDefinition;
use crate::execution::Request;
use crate::registry::RegistrationError;
use crate::scalar::ScalarConfig;
use crate::stock;
use serde_json::json;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("tests")
        .join("fixtures")
        .join(name)
}

struct Noop;
impl Directive for Noop {}

fn counting_definition(name: &str, calls: Arc<AtomicUsize>) -> DirectiveDefinition {
    DirectiveDefinition::new(name, move |_args, _site| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Noop) as Arc<dyn Directive>)
    })
}

mod building {
    use super::*;

    #[test]
    fn schema_is_built_once_and_shared() -> Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut loom = GraphLoom::new();
        loom.register_directive(counting_definition("tap", Arc::clone(&calls)))?;
        loom.load_str("type Query { a: Int @tap, b: Int @tap }")?;

        let first = loom.schema()?;
        let second = loom.schema()?;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        Ok(())
    }

    #[test]
    fn concurrent_builds_share_one_schema() -> Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut loom = GraphLoom::new();
        loom.register_directive(counting_definition("tap", Arc::clone(&calls)))?;
        loom.load_str("type Query { a: Int @tap }")?;

        let schemas = std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| scope.spawn(|| loom.schema()))
                .collect::<Vec<_>>();
            handles.into_iter()
                .map(|handle| handle.join().expect("builder thread panicked"))
                .collect::<Result<Vec<_>>>()
        })?;

        assert!(schemas.iter().all(|schema| Arc::ptr_eq(schema, &schemas[0])));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[test]
    fn validate_surfaces_build_errors() -> Result<()> {
        let mut loom = GraphLoom::new();
        loom.load_str("directive @audit on FIELD_DEFINITION\ntype Query { a: Int }")?;

        assert!(matches!(
            loom.validate(),
            Err(SchemaBuildError::UndeclaredDirectiveConstructor { ref directive_name, .. })
                if directive_name == "audit",
        ));
        assert!(!loom.is_frozen());
        Ok(())
    }

    #[test]
    fn used_but_unregistered_directive_fails_the_build() -> Result<()> {
        let mut loom = GraphLoom::new();
        loom.load_str("type Query { a: Int @audit }")?;

        assert!(matches!(
            loom.validate(),
            Err(SchemaBuildError::UnregisteredDirective { ref directive_name, ref owner })
                if directive_name == "audit" && owner == "Query.a",
        ));
        Ok(())
    }
}

mod registration {
    use super::*;

    #[test]
    fn scalars_may_be_replaced_but_directives_may_not() -> Result<()> {
        let mut loom = GraphLoom::new();
        loom.register_scalar(ScalarConfig::new("Date"))?;
        loom.register_scalar(ScalarConfig::new("Date").with_description("ISO-8601"))?;

        loom.register_directive(stock::ResolveString::definition())?;
        assert_eq!(
            loom.register_directive(stock::ResolveString::definition()),
            Err(RegistrationError::DirectiveAlreadyRegistered {
                name: "resolveString".to_string(),
            }),
        );

        loom.load_str("scalar Date\ntype Query { today: Date }")?;
        let schema = loom.schema()?;
        assert_eq!(
            schema.types().scalar("Date").and_then(|config| config.description()),
            Some("ISO-8601"),
        );
        Ok(())
    }

    #[test]
    fn builtin_scalars_cannot_be_registered() {
        let mut loom = GraphLoom::new();

        assert_eq!(
            loom.register_scalar(ScalarConfig::new("Int")),
            Err(RegistrationError::BuiltinScalarRedefinition {
                name: "Int".to_string(),
            }),
        );
    }

    #[test]
    fn intrinsic_directives_cannot_be_registered() {
        let mut loom = GraphLoom::new();

        assert_eq!(
            loom.register_directive(counting_definition("enumVal", Arc::new(AtomicUsize::new(0)))),
            Err(RegistrationError::ReservedDirectiveName {
                name: "enumVal".to_string(),
            }),
        );
    }

    #[test]
    fn everything_is_frozen_after_the_build() -> Result<()> {
        let mut loom = GraphLoom::new();
        loom.load_str("type Query { a: Int }")?;
        loom.validate()?;
        assert!(loom.is_frozen());

        assert_eq!(
            loom.register_directive(stock::GetContext::definition()),
            Err(RegistrationError::RegistryFrozen),
        );
        assert_eq!(
            loom.register_scalar(ScalarConfig::new("Date")),
            Err(RegistrationError::RegistryFrozen),
        );
        assert!(matches!(
            loom.load_str("type Other { a: Int }"),
            Err(SchemaBuildError::Registration(RegistrationError::RegistryFrozen)),
        ));
        Ok(())
    }

    #[test]
    fn declared_scalar_names_lists_loaded_scalars() -> Result<()> {
        let mut loom = GraphLoom::new();
        loom.load_str("scalar Date\nscalar String\ntype Query { a: Int }")?;

        assert_eq!(loom.declared_scalar_names(), vec!["Date", "String"]);
        Ok(())
    }
}

mod loading {
    use super::*;

    #[test]
    fn separate_loads_are_labelled_separately() -> Result<()> {
        let mut loom = GraphLoom::new();
        loom.load_str("type Query { a: Int }")?;
        let result = loom.load_str("type Query { b: Int }");

        match result {
            Err(SchemaBuildError::Registration(RegistrationError::DuplicateDeclaration {
                location1,
                location2,
                ..
            })) => {
                assert_eq!(location1.file, Some(PathBuf::from("str://0")));
                assert_eq!(location2.file, Some(PathBuf::from("str://1")));
            },
            other => panic!("expected a duplicate declaration, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn load_strs_joins_parts_into_one_document() -> Result<()> {
        let mut loom = GraphLoom::new();
        loom.load_strs(&[
            "type Query { viewer: User }",
            "type User { name: String }",
        ])?;

        let schema = loom.schema()?;
        assert!(schema.types().object("User").is_some());
        Ok(())
    }

    #[test]
    fn parse_errors_name_the_source() {
        let mut loom = GraphLoom::new();

        assert!(matches!(
            loom.load_str("type Query {"),
            Err(SchemaBuildError::ParseError { ref file, .. }) if *file == PathBuf::from("str://0"),
        ));
    }

    #[test]
    fn string_labels_keep_counting_past_u16() {
        let mut loom = GraphLoom::new();
        for _ in 0..=u16::MAX as usize {
            assert!(loom.load_str("}").is_err());
        }

        assert!(matches!(
            loom.load_str("}"),
            Err(SchemaBuildError::ParseError { ref file, .. }) if *file == PathBuf::from("str://65536"),
        ));
    }

    #[test]
    fn missing_files_are_reported() {
        let mut loom = GraphLoom::new();

        assert!(matches!(
            loom.load_file(fixture_path("does_not_exist.graphql")),
            Err(SchemaBuildError::SchemaFileReadError(_)),
        ));
    }

    #[tokio::test]
    async fn files_load_as_one_document_and_execute() -> Result<()> {
        let mut loom = GraphLoom::new();
        loom.register_directives(stock::definitions())?;
        loom.load_files(&[fixture_path("query.graphql"), fixture_path("user.graphql")])?;

        let request = Request::new("{ greeting viewer { name role } }")
            .with_json_root(json!({ "viewer": { "name": "ann", "role": "admin" } }))
            .expect("root is an object");
        let result = loom.execute(request).await?;

        assert!(result.is_ok(), "{:?}", result.errors);
        assert_eq!(
            result.into_json().expect("result converts to JSON"),
            json!({
                "data": {
                    "greeting": "hello",
                    "viewer": { "name": "ann", "role": "ADMIN" },
                },
            }),
        );
        Ok(())
    }
}
