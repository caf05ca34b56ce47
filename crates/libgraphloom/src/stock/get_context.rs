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

/// `@getContext(key: String!)`: resolve to the context entry stored under
/// `key`, or `null` if there is none.
#[derive(Clone, Debug, PartialEq)]
pub struct GetContext {
    key: String,
}
impl GetContext {
    pub const NAME: &'static str = "getContext";

    pub fn construct(
        args: DirectiveArguments,
        _site: DirectiveSite,
    ) -> Result<Arc<dyn Directive>, DirectiveConstructError> {
        Ok(Arc::new(Self {
            key: args.string("key")?,
        }))
    }

    pub fn definition() -> DirectiveDefinition {
        DirectiveDefinition::new(Self::NAME, Self::construct)
    }
}
impl Directive for GetContext {
    fn execute(
        &self,
        context: RequestContext,
        _source: &Value,
        _resolved: Value,
        _field_args: &FieldArguments,
    ) -> Result<Resolution, ExecutionHalt> {
        let value = context.get(self.key.as_str())
            .cloned()
            .unwrap_or(Value::Null);
        Ok(Resolution::Continue(value, context))
    }
}
