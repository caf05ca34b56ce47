//! Ready-made directives a host can register as-is.

mod deprecated;
mod expect;
mod get_context;
mod resolve_arg;
mod resolve_string;
mod set_context;
mod value_directive;

pub use deprecated::Deprecated;
pub use expect::Expect;
pub use get_context::GetContext;
pub use resolve_arg::ResolveArg;
pub use resolve_string::ResolveString;
pub use set_context::SetContext;
pub use set_context::SetContextSource;
pub use value_directive::ValueDirective;

use crate::directive::DirectiveDefinition;

/// Every stock directive except `@deprecated`, which is built in.
pub fn definitions() -> Vec<DirectiveDefinition> {
    vec![
        Expect::definition(),
        GetContext::definition(),
        ResolveArg::definition(),
        ResolveString::definition(),
        SetContext::definition(),
        ValueDirective::definition(),
    ]
}
