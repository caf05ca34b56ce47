use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;

/// Which sides of the API an enum is exposed to, as declared with the
/// intrinsic `@enumPrivacy(backend: Boolean, frontend: Boolean)` marker.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EnumPrivacy {
    pub backend: bool,
    pub frontend: bool,
}
impl EnumPrivacy {
    /// Read the marker off an enum declaration. Every enum must carry one
    /// with at least one side enabled, and no other directive.
    pub(crate) fn from_ast(
        enum_def: &ast::schema::EnumType,
        location: &loc::FilePosition,
    ) -> Result<Self, SchemaBuildError> {
        let mut privacy = None;
        for directive in &enum_def.directives {
            if directive.name != "enumPrivacy" {
                return Err(SchemaBuildError::UnsupportedDirectiveSite {
                    directive_name: directive.name.to_string(),
                    owner: enum_def.name.to_string(),
                    site: "ENUM".to_string(),
                });
            }
            let mut flags = Self::default();
            for (arg_name, arg_value) in &directive.arguments {
                let enabled = matches!(arg_value, ast::schema::Value::Boolean(true));
                match arg_name.as_str() {
                    "backend" => flags.backend = enabled,
                    "frontend" => flags.frontend = enabled,
                    _ => (),
                }
            }
            privacy = Some(flags);
        }

        let privacy = privacy.ok_or_else(|| SchemaBuildError::MissingEnumPrivacy {
            enum_name: enum_def.name.to_string(),
            location: location.clone(),
        })?;
        if !privacy.backend && !privacy.frontend {
            return Err(SchemaBuildError::EnumNotExposed {
                enum_name: enum_def.name.to_string(),
                location: location.clone(),
            });
        }
        Ok(privacy)
    }
}
