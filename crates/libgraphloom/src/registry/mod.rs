mod declaration_kind;
mod definition_registry;
mod registration_error;

pub use declaration_kind::DeclarationKind;
pub use definition_registry::Declared;
pub use definition_registry::DefinitionRegistry;
pub use registration_error::RegistrationError;
