use crate::directive::DefineTarget;
use crate::directive::Directive;
use crate::directive::EnumValueConfig;
use crate::directive::ExecutionHalt;
use crate::directive::FieldArguments;
use crate::directive::FieldConfig;
use crate::directive::RequestContext;
use crate::directive::Resolution;
use crate::schema::SchemaBuildError;
use async_graphql::Value;
use std::sync::Arc;

/// The ordered directive instances attached to one schema element, in the
/// order they were written in the document.
#[derive(Clone, Default)]
pub struct DirectiveChain {
    links: Vec<(String, Arc<dyn Directive>)>,
}
impl DirectiveChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, directive: Arc<dyn Directive>) {
        self.links.push((name.into(), directive));
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.links.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn directives(&self) -> impl Iterator<Item = &Arc<dyn Directive>> {
        self.links.iter().map(|(_, directive)| directive)
    }

    /// Run every directive in order, threading the value and context
    /// through. A [`Resolution::Stop`] ends the chain early with its value;
    /// an [`ExecutionHalt`] ends it with that error.
    pub fn execute(
        &self,
        context: RequestContext,
        source: &Value,
        initial: Value,
        field_args: &FieldArguments,
    ) -> Result<(Value, RequestContext), ExecutionHalt> {
        let mut value = initial;
        let mut context = context;
        for (name, directive) in &self.links {
            match directive.execute(context, source, value, field_args)? {
                Resolution::Continue(next_value, next_context) => {
                    value = next_value;
                    context = next_context;
                },
                Resolution::Stop(final_value, final_context) => {
                    tracing::trace!("Directive `@{name}` stopped the chain.");
                    return Ok((final_value, final_context));
                },
            }
        }
        Ok((value, context))
    }

    pub(crate) fn define_field(
        &self,
        owner: &str,
        config: &mut FieldConfig,
    ) -> Result<(), SchemaBuildError> {
        for (name, directive) in &self.links {
            directive.define(DefineTarget::Field(config))
                .map_err(|source| SchemaBuildError::DefineFailed {
                    directive_name: name.to_string(),
                    owner: owner.to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    pub(crate) fn define_enum_value(
        &self,
        owner: &str,
        config: &mut EnumValueConfig,
    ) -> Result<(), SchemaBuildError> {
        for (name, directive) in &self.links {
            directive.define(DefineTarget::EnumValue(config))
                .map_err(|source| SchemaBuildError::DefineFailed {
                    directive_name: name.to_string(),
                    owner: owner.to_string(),
                    source,
                })?;
        }
        Ok(())
    }
}
impl std::fmt::Debug for DirectiveChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.links.iter().map(|(name, _)| format!("@{name}")))
            .finish()
    }
}
