/// What kind of named type a [`TypeAnnotation`](crate::types::TypeAnnotation)
/// terminates in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NamedTypeKind {
    Enum,
    InputObject,
    Object,
    Scalar,
    Union,
}
impl NamedTypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }

    /// Whether values of this kind may appear in field arguments.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Enum | Self::InputObject | Self::Scalar)
    }
}
impl std::fmt::Display for NamedTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
