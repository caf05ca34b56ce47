use crate::directive::DefineError;
use crate::directive::DefineTarget;
use crate::directive::Directive;
use crate::directive::DirectiveChain;
use crate::directive::ExecutionHalt;
use crate::directive::FieldArguments;
use crate::directive::FieldConfig;
use crate::directive::RequestContext;
use crate::directive::Resolution;
use crate::schema::SchemaBuildError;
use async_graphql::Value;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ExecutionHalt>;

struct Append(&'static str);
impl Directive for Append {
    fn execute(
        &self,
        context: RequestContext,
        _source: &Value,
        resolved: Value,
        _field_args: &FieldArguments,
    ) -> Result<Resolution> {
        let current = match resolved {
            Value::String(s) => s,
            _ => String::new(),
        };
        Ok(Resolution::Continue(Value::String(format!("{current}{}", self.0)), context))
    }
}

struct StopWith(&'static str);
impl Directive for StopWith {
    fn execute(
        &self,
        context: RequestContext,
        _source: &Value,
        _resolved: Value,
        _field_args: &FieldArguments,
    ) -> Result<Resolution> {
        Ok(Resolution::Stop(Value::String(self.0.to_string()), context))
    }
}

struct Fail;
impl Directive for Fail {
    fn execute(
        &self,
        _context: RequestContext,
        _source: &Value,
        _resolved: Value,
        _field_args: &FieldArguments,
    ) -> Result<Resolution> {
        Err(ExecutionHalt::new("boom"))
    }

    fn define(&self, _target: DefineTarget<'_>) -> std::result::Result<(), DefineError> {
        Err(DefineError::Custom("cannot define".to_string()))
    }
}

struct Remember;
impl Directive for Remember {
    fn execute(
        &self,
        context: RequestContext,
        _source: &Value,
        resolved: Value,
        _field_args: &FieldArguments,
    ) -> Result<Resolution> {
        let context = context.with_value("seen", resolved.clone());
        Ok(Resolution::Continue(resolved, context))
    }
}

struct PassThrough;
impl Directive for PassThrough {}

fn link(name: &str, directive: impl Directive + 'static) -> (&str, Arc<dyn Directive>) {
    (name, Arc::new(directive))
}

fn chain(links: Vec<(&str, Arc<dyn Directive>)>) -> DirectiveChain {
    let mut chain = DirectiveChain::new();
    for (name, directive) in links {
        chain.push(name, directive);
    }
    chain
}

fn run(chain: &DirectiveChain) -> Result<(Value, RequestContext)> {
    chain.execute(
        RequestContext::new(),
        &Value::Null,
        Value::String(String::new()),
        &FieldArguments::new(),
    )
}

#[test]
fn directives_run_in_order() -> Result<()> {
    let chain = chain(vec![
        link("a", Append("a")),
        link("b", Append("b")),
        link("c", Append("c")),
    ]);

    let (value, _) = run(&chain)?;
    assert_eq!(value, Value::String("abc".to_string()));
    assert_eq!(chain.names(), vec!["a", "b", "c"]);
    Ok(())
}

#[test]
fn empty_chain_returns_the_initial_value() -> Result<()> {
    let (value, context) = run(&DirectiveChain::new())?;
    assert_eq!(value, Value::String(String::new()));
    assert!(context.is_empty());
    Ok(())
}

#[test]
fn default_execute_passes_through() -> Result<()> {
    let chain = chain(vec![
        link("a", Append("a")),
        link("noop", PassThrough),
    ]);

    let (value, _) = run(&chain)?;
    assert_eq!(value, Value::String("a".to_string()));
    Ok(())
}

#[test]
fn stop_short_circuits_without_error() -> Result<()> {
    let chain = chain(vec![
        link("a", Append("a")),
        link("stop", StopWith("stopped")),
        link("fail", Fail),
    ]);

    let (value, _) = run(&chain)?;
    assert_eq!(value, Value::String("stopped".to_string()));
    Ok(())
}

#[test]
fn halt_ends_the_chain_with_an_error() {
    let chain = chain(vec![
        link("fail", Fail),
        link("a", Append("a")),
    ]);

    let result = run(&chain);
    assert_eq!(result.map(|(value, _)| value), Err(ExecutionHalt::new("boom")));
}

#[test]
fn context_is_threaded_through() -> Result<()> {
    let chain = chain(vec![
        link("a", Append("a")),
        link("remember", Remember),
        link("b", Append("b")),
    ]);

    let (value, context) = run(&chain)?;
    assert_eq!(value, Value::String("ab".to_string()));
    assert_eq!(context.get("seen"), Some(&Value::String("a".to_string())));
    Ok(())
}

#[test]
fn define_failures_name_the_directive() {
    let chain = chain(vec![
        link("noop", PassThrough),
        link("fail", Fail),
    ]);
    let mut config = FieldConfig {
        name: "field".to_string(),
        description: None,
        deprecation_reason: None,
    };

    let result = chain.define_field("Query.field", &mut config);
    assert!(matches!(
        result,
        Err(SchemaBuildError::DefineFailed { ref directive_name, ref owner, .. })
            if directive_name == "fail" && owner == "Query.field",
    ));
}
