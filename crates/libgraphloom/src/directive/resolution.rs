use crate::directive::RequestContext;
use async_graphql::Value;
use thiserror::Error;

/// Outcome of one [`Directive::execute`](crate::directive::Directive::execute)
/// call.
#[derive(Clone, Debug)]
pub enum Resolution {
    /// Hand the value and context to the next directive in the chain.
    Continue(Value, RequestContext),

    /// End the chain here. The value becomes the result of the chain and no
    /// error is reported.
    Stop(Value, RequestContext),
}
impl Resolution {
    pub fn value(&self) -> &Value {
        match self {
            Self::Continue(value, _) | Self::Stop(value, _) => value,
        }
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Stop(..))
    }
}

/// Aborts a directive chain. Surfaces as an error on the field (or request)
/// whose chain was running.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{reason}")]
pub struct ExecutionHalt {
    reason: String,
}
impl ExecutionHalt {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }
}
