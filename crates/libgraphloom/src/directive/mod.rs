mod construct_error;
mod define_target;
#[allow(clippy::module_inception)]
mod directive;
mod directive_arguments;
mod directive_chain;
mod directive_definition;
mod directive_factory;
mod directive_site;
mod directive_store;
mod request_context;
mod resolution;

pub use construct_error::DirectiveConstructError;
pub use define_target::DefineError;
pub use define_target::DefineTarget;
pub use define_target::EnumValueConfig;
pub use define_target::FieldConfig;
pub use directive::Directive;
pub use directive::FieldArguments;
pub use directive_arguments::DirectiveArguments;
pub use directive_chain::DirectiveChain;
pub use directive_definition::DirectiveConstructor;
pub use directive_definition::DirectiveDefinition;
pub(crate) use directive_factory::DirectiveFactory;
pub use directive_site::DirectiveSite;
pub use directive_store::BUILTIN_DIRECTIVE_NAMES;
pub use directive_store::DirectiveStore;
pub use request_context::RequestContext;
pub use resolution::ExecutionHalt;
pub use resolution::Resolution;

#[cfg(test)]
mod tests;
