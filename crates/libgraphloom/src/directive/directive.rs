use crate::directive::DefineError;
use crate::directive::DefineTarget;
use crate::directive::ExecutionHalt;
use crate::directive::RequestContext;
use crate::directive::Resolution;
use async_graphql::Value;
use indexmap::IndexMap;

/// Arguments passed to the field currently being resolved, after input
/// coercion. Empty for schema-level execution.
pub type FieldArguments = IndexMap<String, Value>;

/// A constructed directive instance attached to the schema, a field, or an
/// enum value.
///
/// Instances are built once per schema and shared across concurrent requests,
/// so implementations must not rely on interior state that differs between
/// requests. Per-request state belongs in the [`RequestContext`].
pub trait Directive: Send + Sync {
    /// Intercept value resolution.
    ///
    /// `source` is the parent value (the root object for schema-level and
    /// root-field chains), `resolved` is the value produced by the previous
    /// directive in the chain (or the default lookup for the first one).
    ///
    /// Returning [`Resolution::Stop`] ends the chain without error.
    fn execute(
        &self,
        context: RequestContext,
        _source: &Value,
        resolved: Value,
        _field_args: &FieldArguments,
    ) -> Result<Resolution, ExecutionHalt> {
        Ok(Resolution::Continue(resolved, context))
    }

    /// Adjust the static definition of the field or enum value this directive
    /// is attached to. Runs once, while the schema is being built.
    fn define(&self, _target: DefineTarget<'_>) -> Result<(), DefineError> {
        Ok(())
    }
}
