use crate::directive::Directive;
use crate::directive::DirectiveArguments;
use crate::directive::DirectiveConstructError;
use crate::directive::DirectiveSite;
use std::sync::Arc;

pub type DirectiveConstructor = dyn Fn(DirectiveArguments, DirectiveSite) -> Result<Arc<dyn Directive>, DirectiveConstructError>
    + Send
    + Sync;

/// A directive name paired with the constructor that builds an instance for
/// each usage of that directive in the schema document.
#[derive(Clone)]
pub struct DirectiveDefinition {
    name: String,
    constructor: Arc<DirectiveConstructor>,
}
impl DirectiveDefinition {
    pub fn new<F>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(DirectiveArguments, DirectiveSite) -> Result<Arc<dyn Directive>, DirectiveConstructError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            constructor: Arc::new(constructor),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn construct(
        &self,
        args: DirectiveArguments,
        site: DirectiveSite,
    ) -> Result<Arc<dyn Directive>, DirectiveConstructError> {
        (self.constructor)(args, site)
    }
}
impl std::fmt::Debug for DirectiveDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectiveDefinition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
