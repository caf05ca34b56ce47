use crate::types::NamedTypeKind;
use crate::types::TypeAnnotation;

/// A [`TypeAnnotation`] whose innermost name has been looked up in the
/// type arena.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedTypeRef {
    pub(crate) annotation: TypeAnnotation,
    pub(crate) kind: NamedTypeKind,
}
impl ResolvedTypeRef {
    pub fn annotation(&self) -> &TypeAnnotation {
        &self.annotation
    }

    pub fn kind(&self) -> NamedTypeKind {
        self.kind
    }

    pub fn named_type(&self) -> &str {
        self.annotation.innermost_name()
    }
}
