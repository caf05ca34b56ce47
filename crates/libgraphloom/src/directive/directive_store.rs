use crate::directive::DirectiveDefinition;
use crate::registry::DefinitionRegistry;
use crate::registry::RegistrationError;
use crate::schema::SchemaBuildError;
use crate::stock;
use std::collections::HashMap;

/// Directive names the engine understands without a registered constructor.
pub const BUILTIN_DIRECTIVE_NAMES: [&str; 3] = [
    "deprecated",
    "enumPrivacy",
    "enumVal",
];

/// Built-ins that receive mandatory handling and so can never be replaced.
const RESERVED_DIRECTIVE_NAMES: [&str; 2] = [
    "enumPrivacy",
    "enumVal",
];

/// Maps directive names to the constructors registered by the host.
#[derive(Debug, Default)]
pub struct DirectiveStore {
    definitions: HashMap<String, DirectiveDefinition>,
}
impl DirectiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        definition: DirectiveDefinition,
    ) -> Result<(), RegistrationError> {
        let name = definition.name();
        if RESERVED_DIRECTIVE_NAMES.contains(&name) {
            return Err(RegistrationError::ReservedDirectiveName {
                name: name.to_string(),
            });
        }
        if self.definitions.contains_key(name) {
            return Err(RegistrationError::DirectiveAlreadyRegistered {
                name: name.to_string(),
            });
        }

        tracing::debug!("Registered constructor for directive `@{name}`.");
        self.definitions.insert(name.to_string(), definition);
        Ok(())
    }

    /// The constructor to use for `name`. Host registrations win over the
    /// stock `@deprecated` fallback.
    pub fn lookup(&self, name: &str) -> Option<DirectiveDefinition> {
        match self.definitions.get(name) {
            Some(definition) => Some(definition.clone()),
            None if name == "deprecated" => Some(stock::Deprecated::definition()),
            None => None,
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Every `directive @name` declaration in the document must have a
    /// constructor or be one of the [`BUILTIN_DIRECTIVE_NAMES`].
    pub fn validate_all_declared(
        &self,
        registry: &DefinitionRegistry,
    ) -> Result<(), SchemaBuildError> {
        for (name, declared) in registry.directive_declarations() {
            if BUILTIN_DIRECTIVE_NAMES.contains(&name.as_str()) || self.is_registered(name) {
                continue;
            }
            return Err(SchemaBuildError::UndeclaredDirectiveConstructor {
                directive_name: name.to_string(),
                location: declared.location.clone(),
            });
        }
        Ok(())
    }
}
