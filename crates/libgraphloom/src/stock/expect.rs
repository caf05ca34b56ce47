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

/// `@expect(string: String!)`: fail the field unless the value resolved so
/// far is exactly the given string.
#[derive(Clone, Debug, PartialEq)]
pub struct Expect {
    expected: String,
}
impl Expect {
    pub const NAME: &'static str = "expect";

    pub fn construct(
        args: DirectiveArguments,
        site: DirectiveSite,
    ) -> Result<Arc<dyn Directive>, DirectiveConstructError> {
        if site != DirectiveSite::FieldDefinition {
            return Err(DirectiveConstructError::UnsupportedSite {
                site: site.to_string(),
            });
        }
        Ok(Arc::new(Self {
            expected: args.string("string")?,
        }))
    }

    pub fn definition() -> DirectiveDefinition {
        DirectiveDefinition::new(Self::NAME, Self::construct)
    }
}
impl Directive for Expect {
    fn execute(
        &self,
        context: RequestContext,
        _source: &Value,
        resolved: Value,
        _field_args: &FieldArguments,
    ) -> Result<Resolution, ExecutionHalt> {
        match &resolved {
            Value::String(string) if *string == self.expected =>
                Ok(Resolution::Continue(resolved, context)),
            Value::String(string) =>
                Err(ExecutionHalt::new(format!(
                    "expected string: '{}' but got: '{string}'",
                    self.expected,
                ))),
            other =>
                Err(ExecutionHalt::new(format!(
                    "expected string: '{}' but got: '{other}'",
                    self.expected,
                ))),
        }
    }
}
