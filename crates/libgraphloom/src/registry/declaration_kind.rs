/// The kind of a named declaration collected from a schema document.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DeclarationKind {
    Directive,
    Enum,
    InputObject,
    Object,
    ObjectExtension,
    Scalar,
    Schema,
    Union,
}
impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directive => "directive",
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Object => "object",
            Self::ObjectExtension => "object extension",
            Self::Scalar => "scalar",
            Self::Schema => "schema",
            Self::Union => "union",
        }
    }
}
impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
