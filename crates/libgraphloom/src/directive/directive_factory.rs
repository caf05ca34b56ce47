use crate::ast;
use crate::directive::DirectiveArguments;
use crate::directive::DirectiveChain;
use crate::directive::DirectiveSite;
use crate::directive::DirectiveStore;
use crate::registry::DefinitionRegistry;
use crate::schema::SchemaBuildError;
use crate::value;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Turns the directive usages written on a schema element into a
/// [`DirectiveChain`] of constructed instances.
pub(crate) struct DirectiveFactory<'a> {
    registry: &'a DefinitionRegistry,
    store: &'a DirectiveStore,
}
impl<'a> DirectiveFactory<'a> {
    pub fn new(registry: &'a DefinitionRegistry, store: &'a DirectiveStore) -> Self {
        Self {
            registry,
            store,
        }
    }

    pub fn build_chain(
        &self,
        usages: &[ast::schema::Directive],
        site: DirectiveSite,
        owner: &str,
    ) -> Result<DirectiveChain> {
        let mut chain = DirectiveChain::new();
        for usage in usages {
            let directive_name = usage.name.as_str();
            match (directive_name, site) {
                // Applied by the materializer itself.
                ("enumVal", DirectiveSite::EnumValueDefinition) => continue,
                ("enumPrivacy", _) | ("enumVal", _) =>
                    return Err(SchemaBuildError::UnsupportedDirectiveSite {
                        directive_name: directive_name.to_string(),
                        owner: owner.to_string(),
                        site: site.to_string(),
                    }),
                _ => (),
            }

            let definition = self.store.lookup(directive_name)
                .ok_or_else(|| SchemaBuildError::UnregisteredDirective {
                    directive_name: directive_name.to_string(),
                    owner: owner.to_string(),
                })?;

            let args = self.merge_arguments(usage, owner)?;
            tracing::debug!(
                "Constructing `@{directive_name}` for `{owner}` ({site}) with {} argument(s).",
                args.len(),
            );
            let directive = definition.construct(args, site)
                .map_err(|source| SchemaBuildError::ConstructionFailed {
                    directive_name: directive_name.to_string(),
                    owner: owner.to_string(),
                    site,
                    source,
                })?;
            chain.push(directive_name, directive);
        }
        Ok(chain)
    }

    /// Declared defaults first, then usage-site arguments on top.
    fn merge_arguments(
        &self,
        usage: &ast::schema::Directive,
        owner: &str,
    ) -> Result<DirectiveArguments> {
        let mut args = DirectiveArguments::new();
        if let Some(declared) = self.registry.directive_declarations().get(usage.name.as_str()) {
            for param in &declared.def.arguments {
                if let Some(default_value) = &param.default_value {
                    args.insert(
                        param.name.as_str(),
                        value::const_value_from_ast(default_value, owner)?,
                    );
                }
            }
        }
        for (arg_name, arg_value) in &usage.arguments {
            args.insert(
                arg_name.as_str(),
                value::const_value_from_ast(arg_value, owner)?,
            );
        }
        Ok(args)
    }
}
