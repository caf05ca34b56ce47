use crate::directive::Directive;
use crate::directive::DirectiveArguments;
use crate::directive::DirectiveConstructError;
use crate::directive::DirectiveDefinition;
use crate::directive::DirectiveSite;
use crate::directive::ExecutionHalt;
use crate::directive::FieldArguments;
use crate::directive::RequestContext;
use crate::directive::Resolution;
use async_graphql::Value;
use std::sync::Arc;

/// `@resolveArg(argName: String!)`: resolve to the field argument called
/// `argName`.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolveArg {
    arg_name: String,
}
impl ResolveArg {
    pub const NAME: &'static str = "resolveArg";

    pub fn construct(
        args: DirectiveArguments,
        _site: DirectiveSite,
    ) -> Result<Arc<dyn Directive>, DirectiveConstructError> {
        Ok(Arc::new(Self {
            arg_name: args.string("argName")?,
        }))
    }

    pub fn definition() -> DirectiveDefinition {
        DirectiveDefinition::new(Self::NAME, Self::construct)
    }
}
impl Directive for ResolveArg {
    fn execute(
        &self,
        context: RequestContext,
        _source: &Value,
        _resolved: Value,
        field_args: &FieldArguments,
    ) -> Result<Resolution, ExecutionHalt> {
        match field_args.get(self.arg_name.as_str()) {
            Some(value) => Ok(Resolution::Continue(value.clone(), context)),
            None => Err(ExecutionHalt::new(format!(
                "key '{}' not found in args",
                self.arg_name,
            ))),
        }
    }
}
