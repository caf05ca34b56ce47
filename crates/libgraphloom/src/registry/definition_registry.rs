use crate::ast;
use crate::loc;
use crate::registry::DeclarationKind;
use crate::registry::RegistrationError;
use crate::schema::SchemaBuildError;
use crate::types::EnumPrivacy;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// A declaration as it appeared in the schema document, along with where it
/// was declared.
#[derive(Clone, Debug)]
pub struct Declared<T> {
    pub def: T,
    pub location: loc::FilePosition,
}

/// Collects every declaration of a schema document, partitioned by kind and
/// keyed by name.
///
/// Nothing here is resolved: type references stay names until the
/// [`TypeMaterializer`](crate::types::TypeMaterializer) runs.
#[derive(Debug, Default)]
pub struct DefinitionRegistry {
    directives: IndexMap<String, Declared<ast::schema::DirectiveDefinition>>,
    enums: IndexMap<String, Declared<ast::schema::EnumType>>,
    extensions: IndexMap<String, Vec<Declared<ast::schema::ObjectTypeExtension>>>,
    input_objects: IndexMap<String, Declared<ast::schema::InputObjectType>>,
    objects: IndexMap<String, Declared<ast::schema::ObjectType>>,
    scalars: IndexMap<String, Declared<ast::schema::ScalarType>>,
    schema: Option<Declared<ast::schema::SchemaDefinition>>,
    unions: IndexMap<String, Declared<ast::schema::UnionType>>,
}
impl DefinitionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directive_declarations(
        &self,
    ) -> &IndexMap<String, Declared<ast::schema::DirectiveDefinition>> {
        &self.directives
    }

    pub fn enums(&self) -> &IndexMap<String, Declared<ast::schema::EnumType>> {
        &self.enums
    }

    /// Extension field lists registered for the object type named
    /// `type_name`, in document order.
    pub fn extensions_for(
        &self,
        type_name: &str,
    ) -> &[Declared<ast::schema::ObjectTypeExtension>] {
        self.extensions
            .get(type_name)
            .map(|exts| exts.as_slice())
            .unwrap_or(&[])
    }

    pub fn extensions(
        &self,
    ) -> &IndexMap<String, Vec<Declared<ast::schema::ObjectTypeExtension>>> {
        &self.extensions
    }

    pub fn input_objects(&self) -> &IndexMap<String, Declared<ast::schema::InputObjectType>> {
        &self.input_objects
    }

    pub fn objects(&self) -> &IndexMap<String, Declared<ast::schema::ObjectType>> {
        &self.objects
    }

    pub fn scalars(&self) -> &IndexMap<String, Declared<ast::schema::ScalarType>> {
        &self.scalars
    }

    pub fn schema_def(&self) -> Option<&Declared<ast::schema::SchemaDefinition>> {
        self.schema.as_ref()
    }

    pub fn unions(&self) -> &IndexMap<String, Declared<ast::schema::UnionType>> {
        &self.unions
    }

    /// Visit every definition of an already-parsed document.
    pub fn ingest_document(
        &mut self,
        file_path: &Path,
        document: ast::schema::Document,
    ) -> Result<()> {
        for def in document.definitions {
            self.visit_ast_def(file_path, def)?;
        }
        Ok(())
    }

    pub fn register_directive_declaration(
        &mut self,
        location: loc::FilePosition,
        def: ast::schema::DirectiveDefinition,
    ) -> std::result::Result<(), RegistrationError> {
        let name = def.name.to_string();
        insert_unique(&mut self.directives, DeclarationKind::Directive, name, Declared {
            def,
            location,
        })
    }

    pub fn register_enum(
        &mut self,
        location: loc::FilePosition,
        def: ast::schema::EnumType,
    ) -> std::result::Result<(), RegistrationError> {
        let name = def.name.to_string();
        insert_unique(&mut self.enums, DeclarationKind::Enum, name, Declared {
            def,
            location,
        })
    }

    /// Queue extra fields for the object type named `type_name`. They are
    /// appended after the base type's own fields during materialization.
    pub fn register_extension(
        &mut self,
        type_name: &str,
        location: loc::FilePosition,
        ext: ast::schema::ObjectTypeExtension,
    ) {
        self.extensions
            .entry(type_name.to_string())
            .or_default()
            .push(Declared { def: ext, location });
    }

    pub fn register_input_object(
        &mut self,
        location: loc::FilePosition,
        def: ast::schema::InputObjectType,
    ) -> std::result::Result<(), RegistrationError> {
        let name = def.name.to_string();
        insert_unique(&mut self.input_objects, DeclarationKind::InputObject, name, Declared {
            def,
            location,
        })
    }

    pub fn register_object(
        &mut self,
        location: loc::FilePosition,
        def: ast::schema::ObjectType,
    ) -> std::result::Result<(), RegistrationError> {
        let name = def.name.to_string();
        insert_unique(&mut self.objects, DeclarationKind::Object, name, Declared {
            def,
            location,
        })
    }

    pub fn register_scalar(
        &mut self,
        location: loc::FilePosition,
        def: ast::schema::ScalarType,
    ) -> std::result::Result<(), RegistrationError> {
        let name = def.name.to_string();
        insert_unique(&mut self.scalars, DeclarationKind::Scalar, name, Declared {
            def,
            location,
        })
    }

    pub fn register_schema(
        &mut self,
        location: loc::FilePosition,
        def: ast::schema::SchemaDefinition,
    ) -> std::result::Result<(), RegistrationError> {
        if let Some(existing) = &self.schema {
            return Err(RegistrationError::SchemaAlreadyDefined {
                existing: existing.location.clone(),
                location,
            });
        }
        self.schema = Some(Declared { def, location });
        Ok(())
    }

    pub fn register_union(
        &mut self,
        location: loc::FilePosition,
        def: ast::schema::UnionType,
    ) -> std::result::Result<(), RegistrationError> {
        let name = def.name.to_string();
        insert_unique(&mut self.unions, DeclarationKind::Union, name, Declared {
            def,
            location,
        })
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::DirectiveDefinition(directive_def) => {
                let location = loc::FilePosition::from_pos(Some(file_path), directive_def.position);
                tracing::debug!("Registering directive declaration `@{}`.", directive_def.name);
                Ok(self.register_directive_declaration(location, directive_def)?)
            },

            Definition::SchemaDefinition(schema_def) => {
                let location = loc::FilePosition::from_pos(Some(file_path), schema_def.position);
                Ok(self.register_schema(location, schema_def)?)
            },

            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),

            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(file_path, type_ext),
        }
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) => {
                let location = loc::FilePosition::from_pos(Some(file_path), enum_def.position);
                // Rejects enums without a usable `@enumPrivacy` marker.
                EnumPrivacy::from_ast(&enum_def, &location)?;
                Ok(self.register_enum(location, enum_def)?)
            },

            TypeDefinition::InputObject(inputobj_def) => {
                let location = loc::FilePosition::from_pos(Some(file_path), inputobj_def.position);
                Ok(self.register_input_object(location, inputobj_def)?)
            },

            TypeDefinition::Interface(iface_def) =>
                Err(SchemaBuildError::UnsupportedDeclaration {
                    kind: "interface".to_string(),
                    location: loc::FilePosition::from_pos(Some(file_path), iface_def.position),
                    name: iface_def.name,
                }),

            TypeDefinition::Object(obj_def) => {
                let location = loc::FilePosition::from_pos(Some(file_path), obj_def.position);
                Ok(self.register_object(location, obj_def)?)
            },

            TypeDefinition::Scalar(scalar_def) => {
                if let Some(directive) = scalar_def.directives.first() {
                    return Err(SchemaBuildError::UnsupportedDirectiveSite {
                        directive_name: directive.name.to_string(),
                        owner: scalar_def.name.to_string(),
                        site: "SCALAR".to_string(),
                    });
                }
                let location = loc::FilePosition::from_pos(Some(file_path), scalar_def.position);
                Ok(self.register_scalar(location, scalar_def)?)
            },

            TypeDefinition::Union(union_def) => {
                let location = loc::FilePosition::from_pos(Some(file_path), union_def.position);
                Ok(self.register_union(location, union_def)?)
            },
        }
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (kind, name, pos) = match ext {
            TypeExtension::Object(obj_ext) => {
                let location = loc::FilePosition::from_pos(Some(file_path), obj_ext.position);
                let type_name = obj_ext.name.to_string();
                self.register_extension(type_name.as_str(), location, obj_ext);
                return Ok(());
            },
            TypeExtension::Enum(ext) => ("enum extension", ext.name, ext.position),
            TypeExtension::InputObject(ext) => ("input object extension", ext.name, ext.position),
            TypeExtension::Interface(ext) => ("interface extension", ext.name, ext.position),
            TypeExtension::Scalar(ext) => ("scalar extension", ext.name, ext.position),
            TypeExtension::Union(ext) => ("union extension", ext.name, ext.position),
        };

        Err(SchemaBuildError::UnsupportedDeclaration {
            kind: kind.to_string(),
            location: loc::FilePosition::from_pos(Some(file_path), pos),
            name,
        })
    }
}

fn insert_unique<T>(
    map: &mut IndexMap<String, Declared<T>>,
    kind: DeclarationKind,
    name: String,
    declared: Declared<T>,
) -> std::result::Result<(), RegistrationError> {
    if let Some(existing) = map.get(name.as_str()) {
        return Err(RegistrationError::DuplicateDeclaration {
            kind,
            location1: existing.location.clone(),
            location2: declared.location,
            name,
        });
    }
    map.insert(name, declared);
    Ok(())
}
