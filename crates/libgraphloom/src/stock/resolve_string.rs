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

/// `@resolveString(val: String!)`: resolve to a constant string.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolveString {
    val: String,
}
impl ResolveString {
    pub const NAME: &'static str = "resolveString";

    pub fn construct(
        args: DirectiveArguments,
        _site: DirectiveSite,
    ) -> Result<Arc<dyn Directive>, DirectiveConstructError> {
        Ok(Arc::new(Self {
            val: args.string("val")?,
        }))
    }

    pub fn definition() -> DirectiveDefinition {
        DirectiveDefinition::new(Self::NAME, Self::construct)
    }
}
impl Directive for ResolveString {
    fn execute(
        &self,
        context: RequestContext,
        _source: &Value,
        _resolved: Value,
        _field_args: &FieldArguments,
    ) -> Result<Resolution, ExecutionHalt> {
        Ok(Resolution::Continue(Value::String(self.val.to_string()), context))
    }
}
