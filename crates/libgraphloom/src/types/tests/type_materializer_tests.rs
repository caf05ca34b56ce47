use crate::ast;
use crate::directive::DirectiveFactory;
use crate::directive::DirectiveStore;
use crate::registry::DefinitionRegistry;
use crate::scalar::ScalarConfig;
use crate::schema::SchemaBuildError;
use crate::types::EnumPrivacy;
use crate::types::NamedTypeKind;
use crate::types::TypeArena;
use crate::types::TypeMaterializer;
use async_graphql::Value;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn materialize_with(
    sdl: &str,
    store: &DirectiveStore,
    scalars: &IndexMap<String, ScalarConfig>,
) -> Result<TypeArena> {
    let document = ast::parse_schema_document(sdl)
        .map_err(|err| SchemaBuildError::ParseError {
            file: "str://test".into(),
            err: err.to_string(),
        })?;
    let mut registry = DefinitionRegistry::new();
    registry.ingest_document(Path::new("str://test"), document)?;

    let factory = DirectiveFactory::new(&registry, store);
    TypeMaterializer::new(&registry, &factory, scalars).materialize()
}

fn materialize(sdl: &str) -> Result<TypeArena> {
    materialize_with(sdl, &DirectiveStore::new(), &IndexMap::new())
}

fn field_names(arena: &TypeArena, type_name: &str) -> Vec<String> {
    arena.object(type_name)
        .map(|obj| obj.fields().keys().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn mutually_referencing_types_materialize() -> Result<()> {
    let arena = materialize(concat!(
        "type Query { a: A }\n",
        "type A { b: B, me: A }\n",
        "type B { a: [A!]! }\n",
    ))?;

    let a_field = arena.object("B")
        .and_then(|b| b.field("a"))
        .expect("B.a exists");
    assert_eq!(a_field.type_ref().named_type(), "A");
    assert_eq!(a_field.type_ref().kind(), NamedTypeKind::Object);
    assert_eq!(a_field.type_ref().annotation().to_graphql_string(), "[A!]!");

    let me_field = arena.object("A")
        .and_then(|a| a.field("me"))
        .expect("A.me exists");
    assert_eq!(me_field.type_ref().named_type(), "A");
    Ok(())
}

#[test]
fn unknown_type_reference_is_reported() {
    let result = materialize("type Query { a: Missing }");

    assert!(matches!(
        result,
        Err(SchemaBuildError::UnknownNamedType { ref type_name, ref referenced_from })
            if type_name == "Missing" && referenced_from == "Query.a",
    ));
}

#[test]
fn arguments_resolve_with_defaults() -> Result<()> {
    let arena = materialize(concat!(
        "type Query { list(limit: Int = 10, color: Color = RED, filter: Filter): [String] }\n",
        "enum Color @enumPrivacy(frontend: true) { RED GREEN }\n",
        "input Filter { prefix: String = \"a\" }\n",
    ))?;

    let field = arena.object("Query")
        .and_then(|query| query.field("list"))
        .expect("Query.list exists");
    let params = field.parameters();
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["limit", "color", "filter"]);
    assert_eq!(params["limit"].default_value(), Some(&Value::from(10)));
    assert_eq!(params["color"].type_ref().kind(), NamedTypeKind::Enum);
    assert_eq!(params["filter"].type_ref().kind(), NamedTypeKind::InputObject);

    let filter = arena.input_object("Filter").expect("Filter exists");
    assert_eq!(
        filter.fields()["prefix"].default_value(),
        Some(&Value::String("a".to_string())),
    );
    Ok(())
}

mod extensions {
    use super::*;

    #[test]
    fn extension_fields_follow_base_fields() -> Result<()> {
        let arena = materialize(concat!(
            "extend type Query { c: Int }\n",
            "type Query { a: Int, b: Int }\n",
            "extend type Query { d: Int }\n",
        ))?;

        assert_eq!(field_names(&arena, "Query"), vec!["a", "b", "c", "d"]);
        Ok(())
    }

    #[test]
    fn duplicate_field_from_extension_is_rejected() {
        let result = materialize(concat!(
            "type Query { a: Int }\n",
            "extend type Query { a: String }\n",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldDefinition { ref type_name, ref field_name, .. })
                if type_name == "Query" && field_name == "a",
        ));
    }

    #[test]
    fn extending_an_undeclared_type_is_rejected() {
        let result = materialize(concat!(
            "type Query { a: Int }\n",
            "extend type Ghost { a: Int }\n",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { ref type_name, .. })
                if type_name == "Ghost",
        ));
    }
}

#[test]
fn names_shared_across_kinds_conflict() {
    let result = materialize(concat!(
        "type Query { a: Int }\n",
        "type Thing { a: Int }\n",
        "input Thing { a: Int }\n",
    ));
    assert!(matches!(
        result,
        Err(SchemaBuildError::ConflictingTypeName { ref type_name, .. }) if type_name == "Thing",
    ));

    let result = materialize("type Query { a: Int }\ntype String { a: Int }");
    assert!(matches!(
        result,
        Err(SchemaBuildError::ConflictingTypeName { ref type_name, ref kind1, .. })
            if type_name == "String" && kind1 == "scalar",
    ));
}

#[test]
fn union_members_must_be_objects() -> Result<()> {
    let arena = materialize(concat!(
        "type Query { pet: Pet }\n",
        "type Cat { meow: String }\n",
        "type Dog { woof: String }\n",
        "union Pet = Cat | Dog\n",
    ))?;
    assert_eq!(
        arena.union_type("Pet").map(|pet| pet.member_type_names()),
        Some(vec!["Cat", "Dog"]),
    );

    let result = materialize(concat!(
        "type Query { pet: Pet }\n",
        "input Cat { meow: String }\n",
        "union Pet = Cat\n",
    ));
    assert!(matches!(
        result,
        Err(SchemaBuildError::InvalidUnionMember { ref member_name, .. }) if member_name == "Cat",
    ));
    Ok(())
}

#[test]
fn directives_on_input_fields_are_rejected() {
    let result = materialize(concat!(
        "type Query { a: Int }\n",
        "input Filter { q: String @deprecated }\n",
    ));

    assert!(matches!(
        result,
        Err(SchemaBuildError::UnsupportedDirectiveSite { ref owner, ref site, .. })
            if owner == "Filter.q" && site == "INPUT_FIELD_DEFINITION",
    ));
}

#[test]
fn directives_on_arguments_are_rejected() {
    let result = materialize("type Query { a(x: Int @deprecated): Int }");

    assert!(matches!(
        result,
        Err(SchemaBuildError::UnsupportedDirectiveSite { ref site, .. })
            if site == "ARGUMENT_DEFINITION",
    ));
}

mod enums {
    use super::*;

    #[test]
    fn runtime_values_default_to_names_and_honor_enum_val() -> Result<()> {
        let arena = materialize(concat!(
            "type Query { c: Color }\n",
            "enum Color @enumPrivacy(backend: true, frontend: false) {\n",
            "  RED @enumVal(str: \"#f00\")\n",
            "  GREEN\n",
            "}\n",
        ))?;

        let color = arena.enum_type("Color").expect("Color exists");
        assert_eq!(color.privacy(), EnumPrivacy { backend: true, frontend: false });
        assert_eq!(color.runtime_value_of("RED"), Some(&Value::String("#f00".to_string())));
        assert_eq!(color.runtime_value_of("GREEN"), Some(&Value::String("GREEN".to_string())));
        assert_eq!(color.name_of(&Value::String("#f00".to_string())), Some("RED"));
        Ok(())
    }

    #[test]
    fn enum_val_requires_a_string() {
        let result = materialize(concat!(
            "type Query { c: Color }\n",
            "enum Color @enumPrivacy(frontend: true) { RED @enumVal(str: 1) }\n",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidEnumVal { ref value_name, .. }) if value_name == "RED",
        ));
    }

    #[test]
    fn enum_values_can_be_deprecated() -> Result<()> {
        let arena = materialize(concat!(
            "type Query { c: Color }\n",
            "enum Color @enumPrivacy(frontend: true) {\n",
            "  RED @deprecated(reason: \"use CRIMSON\")\n",
            "  CRIMSON\n",
            "}\n",
        ))?;

        let color = arena.enum_type("Color").expect("Color exists");
        assert_eq!(color.value("RED").and_then(|v| v.deprecation_reason()), Some("use CRIMSON"));
        assert_eq!(color.value("CRIMSON").and_then(|v| v.deprecation_reason()), None);
        Ok(())
    }
}

#[test]
fn deprecated_fields_use_the_default_reason() -> Result<()> {
    let arena = materialize("type Query { old: Int @deprecated, new: Int }")?;

    let query = arena.object("Query").expect("Query exists");
    assert_eq!(
        query.field("old").and_then(|f| f.deprecation_reason()),
        Some("No longer supported"),
    );
    assert_eq!(query.field("old").map(|f| f.directives().names()), Some(vec!["deprecated"]));
    assert_eq!(query.field("new").and_then(|f| f.deprecation_reason()), None);
    Ok(())
}

#[test]
fn declared_scalars_need_a_registered_config() -> Result<()> {
    let sdl = "scalar Date\ntype Query { today: Date }";

    let result = materialize(sdl);
    assert!(matches!(
        result,
        Err(SchemaBuildError::UnregisteredScalar { ref scalar_name, .. }) if scalar_name == "Date",
    ));

    let mut scalars = IndexMap::new();
    scalars.insert("Date".to_string(), ScalarConfig::new("Date"));
    let arena = materialize_with(sdl, &DirectiveStore::new(), &scalars)?;
    assert_eq!(arena.kind_of("Date"), Some(NamedTypeKind::Scalar));
    assert!(arena.scalar("Date").is_some());
    assert!(arena.scalar("String").is_none());
    Ok(())
}

#[test]
fn date_time_is_available_without_a_declaration() -> Result<()> {
    let arena = materialize("type Query { at: DateTime }")?;
    assert_eq!(arena.kind_of("DateTime"), Some(NamedTypeKind::Scalar));

    let arena = materialize("scalar DateTime\ntype Query { at: DateTime }")?;
    assert!(arena.scalar("DateTime").is_some());

    let arena = materialize("type Query { at: DateTime }\ntype DateTime { iso: String }")?;
    assert_eq!(arena.kind_of("DateTime"), Some(NamedTypeKind::Object));
    Ok(())
}
