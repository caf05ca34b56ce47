use crate::directive::DefineError;
use crate::directive::DefineTarget;
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

#[derive(Clone, Debug, PartialEq)]
enum ValueSource {
    Constant(Value),
    Argument(String),
}

/// `@value(string: String, int: Int, bool: Boolean, arg: String)`.
///
/// On a field, resolves to the given constant (or to the field argument
/// named by `arg`). On an enum value, sets the value's runtime
/// representation to the constant. The last argument given wins.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueDirective {
    source: ValueSource,
}
impl ValueDirective {
    pub const NAME: &'static str = "value";

    pub fn construct(
        args: DirectiveArguments,
        _site: DirectiveSite,
    ) -> Result<Arc<dyn Directive>, DirectiveConstructError> {
        args.expect_only(&["arg", "bool", "int", "string"])?;

        let mut source = None;
        for (arg_name, _) in args.iter() {
            source = Some(match arg_name {
                "string" => ValueSource::Constant(Value::String(args.string(arg_name)?)),
                "int" => ValueSource::Constant(
                    args.opt_int(arg_name)?.map(Value::from).unwrap_or(Value::Null),
                ),
                "bool" => ValueSource::Constant(
                    args.opt_boolean(arg_name)?.map(Value::Boolean).unwrap_or(Value::Null),
                ),
                _ => ValueSource::Argument(args.string(arg_name)?),
            });
        }

        Ok(Arc::new(Self {
            source: source.unwrap_or(ValueSource::Constant(Value::Null)),
        }))
    }

    pub fn definition() -> DirectiveDefinition {
        DirectiveDefinition::new(Self::NAME, Self::construct)
    }
}
impl Directive for ValueDirective {
    fn execute(
        &self,
        context: RequestContext,
        _source: &Value,
        _resolved: Value,
        field_args: &FieldArguments,
    ) -> Result<Resolution, ExecutionHalt> {
        let value = match &self.source {
            ValueSource::Constant(value) => value.clone(),
            ValueSource::Argument(arg_name) => field_args.get(arg_name.as_str())
                .cloned()
                .unwrap_or(Value::Null),
        };
        Ok(Resolution::Continue(value, context))
    }

    fn define(&self, target: DefineTarget<'_>) -> Result<(), DefineError> {
        match (target, &self.source) {
            (DefineTarget::EnumValue(config), ValueSource::Constant(value)) => {
                config.value = value.clone();
                Ok(())
            },
            (DefineTarget::EnumValue(_), ValueSource::Argument(_)) =>
                Err(DefineError::Custom(
                    "`arg` has no meaning on an enum value".to_string(),
                )),
            (DefineTarget::Field(_), _) => Ok(()),
        }
    }
}
