use crate::directive::DirectiveArguments;
use crate::directive::DirectiveConstructError;
use async_graphql::Name;
use async_graphql::Value;

type Result<T> = std::result::Result<T, DirectiveConstructError>;

fn args() -> DirectiveArguments {
    vec![
        ("flag", Value::Boolean(true)),
        ("kind", Value::Enum(Name::new("SOURCE_KEY"))),
        ("limit", Value::from(3)),
        ("name", Value::String("hello".to_string())),
        ("nothing", Value::Null),
    ].into_iter().collect()
}

#[test]
fn typed_accessors() -> Result<()> {
    let args = args();

    assert_eq!(args.string("name")?, "hello");
    assert_eq!(args.opt_boolean("flag")?, Some(true));
    assert_eq!(args.opt_int("limit")?, Some(3));
    assert_eq!(args.enum_or_string("kind")?, Some("SOURCE_KEY".to_string()));
    assert_eq!(args.enum_or_string("name")?, Some("hello".to_string()));
    Ok(())
}

#[test]
fn null_counts_as_absent() -> Result<()> {
    let args = args();

    assert_eq!(args.opt_string("nothing")?, None);
    assert_eq!(
        args.string("nothing"),
        Err(DirectiveConstructError::MissingArgument {
            argument: "nothing".to_string(),
        }),
    );
    Ok(())
}

#[test]
fn wrong_type_is_reported() {
    let args = args();

    assert!(matches!(
        args.string("flag"),
        Err(DirectiveConstructError::InvalidArgument { ref argument, expected: "a string", .. })
            if argument == "flag",
    ));
    assert!(matches!(
        args.opt_int("name"),
        Err(DirectiveConstructError::InvalidArgument { .. }),
    ));
}

#[test]
fn unknown_arguments_are_reported() {
    let args = args();

    assert_eq!(args.expect_only(&["flag", "kind", "limit", "name", "nothing"]), Ok(()));
    assert_eq!(
        args.expect_only(&["flag"]),
        Err(DirectiveConstructError::UnknownArgument {
            argument: "kind".to_string(),
        }),
    );
}
