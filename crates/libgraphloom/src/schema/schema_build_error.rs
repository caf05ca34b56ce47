use crate::directive::DefineError;
use crate::directive::DirectiveConstructError;
use crate::directive::DirectiveSite;
use crate::file_reader::ReadContentError;
use crate::loc;
use crate::registry::RegistrationError;
use crate::schema::OperationKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("`{type_name}` is declared both as {kind1} and as {kind2}")]
    ConflictingTypeName {
        kind1: String,
        kind2: String,
        type_name: String,
    },

    #[error("Failed to construct `@{directive_name}` on `{owner}` ({site}): {source}")]
    ConstructionFailed {
        directive_name: String,
        owner: String,
        site: DirectiveSite,
        #[source]
        source: DirectiveConstructError,
    },

    #[error("`@{directive_name}` failed to define `{owner}`: {source}")]
    DefineFailed {
        directive_name: String,
        owner: String,
        #[source]
        source: DefineError,
    },

    #[error("Multiple fields named `{field_name}` were defined on `{type_name}` (second at {location})")]
    DuplicateFieldDefinition {
        field_name: String,
        location: loc::FilePosition,
        type_name: String,
    },

    #[error("The execution engine rejected the schema: {message}")]
    EngineSchema {
        message: String,
    },

    #[error("Enum `{enum_name}` at {location} must allow `backend` or `frontend` via @enumPrivacy")]
    EnumNotExposed {
        enum_name: String,
        location: loc::FilePosition,
    },

    #[error("Attempted to extend `{type_name}` at {location}, which is not a declared object type")]
    ExtensionOfUndefinedType {
        location: loc::FilePosition,
        type_name: String,
    },

    #[error("`@enumVal` on `{enum_name}.{value_name}` at {location} requires a `str: String` argument")]
    InvalidEnumVal {
        enum_name: String,
        location: loc::FilePosition,
        value_name: String,
    },

    #[error("Union `{union_name}` lists `{member_name}`, which is not an object type")]
    InvalidUnionMember {
        member_name: String,
        union_name: String,
    },

    #[error("Enum `{enum_name}` at {location} is missing the @enumPrivacy directive")]
    MissingEnumPrivacy {
        enum_name: String,
        location: loc::FilePosition,
    },

    #[error("The {operation} root type `{type_name}` is not a declared object type")]
    MissingRootType {
        operation: OperationKind,
        type_name: String,
    },

    #[error("No query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema document from {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error("Error loading schema file: {0}")]
    SchemaFileReadError(#[from] ReadContentError),

    #[error("Directive `@{directive_name}` is declared at {location} but no constructor is registered for it")]
    UndeclaredDirectiveConstructor {
        directive_name: String,
        location: loc::FilePosition,
    },

    #[error("`{referenced_from}` refers to an undefined type `{type_name}`")]
    UnknownNamedType {
        referenced_from: String,
        type_name: String,
    },

    #[error("`@{directive_name}` is used on `{owner}` but no constructor is registered for it")]
    UnregisteredDirective {
        directive_name: String,
        owner: String,
    },

    #[error("Scalar `{scalar_name}` is declared at {location} but no scalar config is registered for it")]
    UnregisteredScalar {
        location: loc::FilePosition,
        scalar_name: String,
    },

    #[error("Unsupported {kind} declaration `{name}` at {location}")]
    UnsupportedDeclaration {
        kind: String,
        location: loc::FilePosition,
        name: String,
    },

    #[error("`@{directive_name}` cannot be used at {site} (on `{owner}`)")]
    UnsupportedDirectiveSite {
        directive_name: String,
        owner: String,
        site: String,
    },

    #[error("The `{operation}` operation type declared at {location} is not supported")]
    UnsupportedOperationType {
        location: loc::FilePosition,
        operation: String,
    },

    #[error("`${variable_name}` cannot be used in a constant value on `{owner}`")]
    VariableInConstContext {
        owner: String,
        variable_name: String,
    },
}
