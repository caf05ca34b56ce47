use crate::loc;
use crate::registry::DeclarationKind;
use thiserror::Error;

/// Errors raised while registering declarations, directive constructors or
/// scalars. These are all recoverable by the caller picking another name.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RegistrationError {
    #[error("The builtin scalar `{name}` cannot be redefined")]
    BuiltinScalarRedefinition {
        name: String,
    },

    #[error("A constructor for directive `@{name}` is already registered")]
    DirectiveAlreadyRegistered {
        name: String,
    },

    #[error("Multiple {kind} declarations were defined with the name `{name}` (at {location1} and {location2})")]
    DuplicateDeclaration {
        kind: DeclarationKind,
        location1: loc::FilePosition,
        location2: loc::FilePosition,
        name: String,
    },

    #[error("The directive `@{name}` is handled by the engine itself and cannot be registered")]
    ReservedDirectiveName {
        name: String,
    },

    #[error("Declarations and registrations are frozen once the schema has been built")]
    RegistryFrozen,

    #[error("A schema declaration was already defined at {existing}, found another at {location}")]
    SchemaAlreadyDefined {
        existing: loc::FilePosition,
        location: loc::FilePosition,
    },
}
