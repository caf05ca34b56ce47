use crate::directive::Directive;
use crate::directive::DirectiveArguments;
use crate::directive::DirectiveConstructError;
use crate::directive::DirectiveDefinition;
use crate::directive::DirectiveSite;
use crate::directive::ExecutionHalt;
use crate::directive::FieldArguments;
use crate::directive::RequestContext;
use crate::directive::Resolution;
use crate::value;
use async_graphql::Value;
use std::sync::Arc;

/// Where [`SetContext`] takes the value it stores from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SetContextSource {
    /// `val` itself.
    String,
    /// The entry of the source object named by `val`.
    SourceKey,
    /// The field argument named by `val`.
    ArgKey,
}
impl SetContextSource {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "STRING" => Some(Self::String),
            "SOURCE_KEY" => Some(Self::SourceKey),
            "ARG_KEY" => Some(Self::ArgKey),
            _ => None,
        }
    }
}

/// `@setContext(key: String!, val: String!, valType: SetContextValType!)`:
/// store a value under `key` in the request context and pass the resolved
/// value through unchanged.
///
/// On the schema block the stored context is seen by every field of the
/// request; on a field it is only seen by later directives of that field.
#[derive(Clone, Debug, PartialEq)]
pub struct SetContext {
    key: String,
    on_schema: bool,
    val: String,
    val_type: SetContextSource,
}
impl SetContext {
    pub const NAME: &'static str = "setContext";

    pub fn construct(
        args: DirectiveArguments,
        site: DirectiveSite,
    ) -> Result<Arc<dyn Directive>, DirectiveConstructError> {
        let val_type_name = args.enum_or_string("valType")?
            .unwrap_or_else(|| "STRING".to_string());
        let val_type = SetContextSource::from_name(val_type_name.as_str())
            .ok_or_else(|| DirectiveConstructError::InvalidArgument {
                argument: "valType".to_string(),
                expected: "one of STRING, SOURCE_KEY, ARG_KEY",
                found: Value::String(val_type_name.to_string()),
            })?;

        Ok(Arc::new(Self {
            key: args.string("key")?,
            on_schema: site == DirectiveSite::SchemaDefinition,
            val: args.string("val")?,
            val_type,
        }))
    }

    pub fn definition() -> DirectiveDefinition {
        DirectiveDefinition::new(Self::NAME, Self::construct)
    }
}
impl Directive for SetContext {
    fn execute(
        &self,
        context: RequestContext,
        source: &Value,
        resolved: Value,
        field_args: &FieldArguments,
    ) -> Result<Resolution, ExecutionHalt> {
        let value = match self.val_type {
            SetContextSource::String => Value::String(self.val.to_string()),
            SetContextSource::SourceKey => {
                // On the schema block the root may already have been
                // replaced by an earlier directive.
                let object = if self.on_schema { &resolved } else { source };
                value::object_entry(object, self.val.as_str())
                    .cloned()
                    .unwrap_or(Value::Null)
            },
            SetContextSource::ArgKey => field_args.get(self.val.as_str())
                .cloned()
                .unwrap_or(Value::Null),
        };

        let context = context.with_value(self.key.as_str(), value);
        Ok(Resolution::Continue(resolved, context))
    }
}
