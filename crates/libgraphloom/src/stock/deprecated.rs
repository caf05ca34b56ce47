use crate::directive::DefineError;
use crate::directive::DefineTarget;
use crate::directive::Directive;
use crate::directive::DirectiveArguments;
use crate::directive::DirectiveConstructError;
use crate::directive::DirectiveDefinition;
use crate::directive::DirectiveSite;
use std::sync::Arc;

/// `@deprecated(reason: String)` on fields and enum values.
#[derive(Clone, Debug, PartialEq)]
pub struct Deprecated {
    reason: String,
}
impl Deprecated {
    pub const DEFAULT_REASON: &'static str = "No longer supported";
    pub const NAME: &'static str = "deprecated";

    pub fn construct(
        args: DirectiveArguments,
        site: DirectiveSite,
    ) -> Result<Arc<dyn Directive>, DirectiveConstructError> {
        if site == DirectiveSite::SchemaDefinition {
            return Err(DirectiveConstructError::UnsupportedSite {
                site: site.to_string(),
            });
        }
        let reason = args.opt_string("reason")?
            .unwrap_or_else(|| Self::DEFAULT_REASON.to_string());
        Ok(Arc::new(Self { reason }))
    }

    pub fn definition() -> DirectiveDefinition {
        DirectiveDefinition::new(Self::NAME, Self::construct)
    }

    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }
}
impl Directive for Deprecated {
    fn define(&self, mut target: DefineTarget<'_>) -> Result<(), DefineError> {
        target.set_deprecation_reason(self.reason.as_str());
        Ok(())
    }
}
