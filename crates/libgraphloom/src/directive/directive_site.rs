/// Where a directive usage appears in the schema document.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveSite {
    SchemaDefinition,
    FieldDefinition,
    EnumValueDefinition,
}
impl DirectiveSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SchemaDefinition => "SCHEMA",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::EnumValueDefinition => "ENUM_VALUE",
        }
    }
}
impl std::fmt::Display for DirectiveSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
