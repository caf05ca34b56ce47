use crate::ast;
use crate::directive::DirectiveFactory;
use crate::directive::DirectiveSite;
use crate::directive::EnumValueConfig;
use crate::directive::FieldConfig;
use crate::loc;
use crate::registry::DefinitionRegistry;
use crate::scalar;
use crate::scalar::ScalarConfig;
use crate::schema::SchemaBuildError;
use crate::types::EnumPrivacy;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ResolvedTypeRef;
use crate::types::TypeAnnotation;
use crate::types::TypeArena;
use crate::types::UnionType;
use crate::value;
use async_graphql::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Builds a [`TypeArena`] from the registry in two phases.
///
/// Phase one allocates an empty placeholder for every object, input object,
/// enum and union so that any name can be looked up regardless of where (or
/// whether cyclically) it is referenced. Phase two fills the placeholders in,
/// resolving type references and constructing directive chains.
pub(crate) struct TypeMaterializer<'a> {
    factory: &'a DirectiveFactory<'a>,
    registry: &'a DefinitionRegistry,
    scalars: &'a IndexMap<String, ScalarConfig>,
}
impl<'a> TypeMaterializer<'a> {
    pub fn new(
        registry: &'a DefinitionRegistry,
        factory: &'a DirectiveFactory<'a>,
        scalars: &'a IndexMap<String, ScalarConfig>,
    ) -> Self {
        Self {
            factory,
            registry,
            scalars,
        }
    }

    pub fn materialize(&self) -> Result<TypeArena> {
        self.check_name_collisions()?;
        self.check_extension_targets()?;

        let mut arena = self.allocate()?;
        tracing::debug!(
            "Allocated {} object, {} input object, {} enum and {} union placeholder(s).",
            arena.objects.len(),
            arena.input_objects.len(),
            arena.enums.len(),
            arena.unions.len(),
        );

        self.fill_enums(&mut arena)?;
        self.fill_input_objects(&mut arena)?;
        self.fill_unions(&mut arena)?;
        self.fill_objects(&mut arena)?;
        Ok(arena)
    }

    fn check_name_collisions(&self) -> Result<()> {
        let mut seen = HashMap::<&str, &'static str>::new();
        for name in crate::scalar::BUILTIN_SCALAR_NAMES {
            seen.insert(name, "scalar");
        }

        let declared = self.registry.scalars().keys().map(|name| (name, "scalar"))
            .chain(self.registry.objects().keys().map(|name| (name, "object")))
            .chain(self.registry.input_objects().keys().map(|name| (name, "input object")))
            .chain(self.registry.enums().keys().map(|name| (name, "enum")))
            .chain(self.registry.unions().keys().map(|name| (name, "union")));

        for (name, kind) in declared {
            match seen.get(name.as_str()) {
                // Re-declaring a built-in scalar is harmless.
                Some(&"scalar") if kind == "scalar" => (),
                Some(existing_kind) =>
                    return Err(SchemaBuildError::ConflictingTypeName {
                        kind1: existing_kind.to_string(),
                        kind2: kind.to_string(),
                        type_name: name.to_string(),
                    }),
                None => {
                    seen.insert(name.as_str(), kind);
                },
            }
        }
        Ok(())
    }

    fn check_extension_targets(&self) -> Result<()> {
        for (type_name, exts) in self.registry.extensions() {
            if self.registry.objects().contains_key(type_name) {
                continue;
            }
            if let Some(ext) = exts.first() {
                return Err(SchemaBuildError::ExtensionOfUndefinedType {
                    location: ext.location.clone(),
                    type_name: type_name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn allocate(&self) -> Result<TypeArena> {
        let mut arena = TypeArena::default();

        for (name, declared) in self.registry.scalars() {
            if ScalarConfig::is_builtin_name(name) {
                continue;
            }
            let config = self.scalars.get(name)
                .cloned()
                .or_else(|| scalar::stock_scalar(name))
                .ok_or_else(|| SchemaBuildError::UnregisteredScalar {
                    location: declared.location.clone(),
                    scalar_name: name.to_string(),
                })?;
            arena.scalars.insert(name.to_string(), config);
        }

        // DateTime is in scope without a declaration unless the name is taken.
        let date_time = scalar::DATE_TIME_SCALAR_NAME;
        if !self.is_declared(date_time) {
            let config = self.scalars.get(date_time)
                .cloned()
                .unwrap_or_else(scalar::date_time);
            arena.scalars.insert(date_time.to_string(), config);
        }

        for (name, declared) in self.registry.objects() {
            arena.objects.insert(
                name.to_string(),
                ObjectType::placeholder(name, declared.location.clone()),
            );
        }
        for (name, declared) in self.registry.input_objects() {
            arena.input_objects.insert(
                name.to_string(),
                InputObjectType::placeholder(name, declared.location.clone()),
            );
        }
        for (name, declared) in self.registry.enums() {
            arena.enums.insert(
                name.to_string(),
                EnumType::placeholder(name, declared.location.clone()),
            );
        }
        for (name, declared) in self.registry.unions() {
            arena.unions.insert(
                name.to_string(),
                UnionType::placeholder(name, declared.location.clone()),
            );
        }
        Ok(arena)
    }

    fn is_declared(&self, name: &str) -> bool {
        self.registry.scalars().contains_key(name)
            || self.registry.objects().contains_key(name)
            || self.registry.input_objects().contains_key(name)
            || self.registry.enums().contains_key(name)
            || self.registry.unions().contains_key(name)
    }

    fn fill_enums(&self, arena: &mut TypeArena) -> Result<()> {
        for (name, declared) in self.registry.enums() {
            let enum_def = &declared.def;
            let privacy = EnumPrivacy::from_ast(enum_def, &declared.location)?;

            let mut values = IndexMap::new();
            for value_def in &enum_def.values {
                let enum_value = self.build_enum_value(name, value_def, &declared.location)?;
                values.insert(enum_value.name.to_string(), enum_value);
            }

            if let Some(enum_type) = arena.enums.get_mut(name) {
                enum_type.description = enum_def.description.clone();
                enum_type.privacy = privacy;
                enum_type.values = values;
            }
        }
        Ok(())
    }

    fn build_enum_value(
        &self,
        enum_name: &str,
        value_def: &ast::schema::EnumValue,
        enum_location: &loc::FilePosition,
    ) -> Result<EnumValue> {
        let owner = format!("{enum_name}.{}", value_def.name);
        let location = loc::FilePosition::from_pos(enum_location.file.as_ref(), value_def.position);

        let mut runtime_value = Value::String(value_def.name.to_string());
        for directive in value_def.directives.iter().filter(|d| d.name == "enumVal") {
            runtime_value = match directive.arguments.iter().find(|(arg, _)| arg == "str") {
                Some((_, ast::schema::Value::String(string))) => Value::String(string.to_string()),
                _ => return Err(SchemaBuildError::InvalidEnumVal {
                    enum_name: enum_name.to_string(),
                    location,
                    value_name: value_def.name.to_string(),
                }),
            };
        }

        let chain = self.factory.build_chain(
            &value_def.directives,
            DirectiveSite::EnumValueDefinition,
            owner.as_str(),
        )?;
        let mut config = EnumValueConfig {
            name: value_def.name.to_string(),
            description: value_def.description.clone(),
            deprecation_reason: None,
            value: runtime_value,
        };
        chain.define_enum_value(owner.as_str(), &mut config)?;

        Ok(EnumValue {
            deprecation_reason: config.deprecation_reason,
            description: config.description,
            name: value_def.name.to_string(),
            value: config.value,
        })
    }

    fn fill_input_objects(&self, arena: &mut TypeArena) -> Result<()> {
        for (name, declared) in self.registry.input_objects() {
            let mut fields = IndexMap::new();
            for field_def in &declared.def.fields {
                let owner = format!("{name}.{}", field_def.name);
                if let Some(directive) = field_def.directives.first() {
                    return Err(SchemaBuildError::UnsupportedDirectiveSite {
                        directive_name: directive.name.to_string(),
                        owner,
                        site: "INPUT_FIELD_DEFINITION".to_string(),
                    });
                }
                let type_ref = resolve_type_ref(arena, &field_def.value_type, owner.as_str())?;
                let default_value = field_def.default_value.as_ref()
                    .map(|default| value::const_value_from_ast(default, owner.as_str()))
                    .transpose()?;
                fields.insert(field_def.name.to_string(), InputField {
                    default_value,
                    description: field_def.description.clone(),
                    name: field_def.name.to_string(),
                    type_ref,
                });
            }

            if let Some(input_object) = arena.input_objects.get_mut(name) {
                input_object.description = declared.def.description.clone();
                input_object.fields = fields;
            }
        }
        Ok(())
    }

    fn fill_unions(&self, arena: &mut TypeArena) -> Result<()> {
        for (name, declared) in self.registry.unions() {
            for member in &declared.def.types {
                if !arena.objects.contains_key(member) {
                    return Err(SchemaBuildError::InvalidUnionMember {
                        member_name: member.to_string(),
                        union_name: name.to_string(),
                    });
                }
            }
            if let Some(union_type) = arena.unions.get_mut(name) {
                union_type.description = declared.def.description.clone();
                union_type.members = declared.def.types.clone();
            }
        }
        Ok(())
    }

    fn fill_objects(&self, arena: &mut TypeArena) -> Result<()> {
        for (name, declared) in self.registry.objects() {
            let mut fields = IndexMap::<String, Field>::new();
            let base_fields = declared.def.fields.iter()
                .map(|field_def| (field_def, &declared.location));
            let ext_fields = self.registry.extensions_for(name).iter()
                .flat_map(|ext| ext.def.fields.iter().map(move |field_def| (field_def, &ext.location)));

            for (field_def, type_location) in base_fields.chain(ext_fields) {
                let location = loc::FilePosition::from_pos(type_location.file.as_ref(), field_def.position);
                if fields.contains_key(field_def.name.as_str()) {
                    return Err(SchemaBuildError::DuplicateFieldDefinition {
                        field_name: field_def.name.to_string(),
                        location,
                        type_name: name.to_string(),
                    });
                }
                let field = self.build_field(arena, name, field_def, location)?;
                fields.insert(field.name.to_string(), field);
            }

            if let Some(object) = arena.objects.get_mut(name) {
                object.description = declared.def.description.clone();
                object.fields = fields;
            }
        }
        Ok(())
    }

    fn build_field(
        &self,
        arena: &TypeArena,
        type_name: &str,
        field_def: &ast::schema::Field,
        def_location: loc::FilePosition,
    ) -> Result<Field> {
        let owner = format!("{type_name}.{}", field_def.name);
        let type_ref = resolve_type_ref(arena, &field_def.field_type, owner.as_str())?;

        let mut parameters = IndexMap::new();
        for param_def in &field_def.arguments {
            let param_owner = format!("{owner}({}:)", param_def.name);
            if let Some(directive) = param_def.directives.first() {
                return Err(SchemaBuildError::UnsupportedDirectiveSite {
                    directive_name: directive.name.to_string(),
                    owner: param_owner,
                    site: "ARGUMENT_DEFINITION".to_string(),
                });
            }
            let param_type = resolve_type_ref(arena, &param_def.value_type, param_owner.as_str())?;
            let default_value = param_def.default_value.as_ref()
                .map(|default| value::const_value_from_ast(default, param_owner.as_str()))
                .transpose()?;
            parameters.insert(param_def.name.to_string(), Parameter {
                default_value,
                description: param_def.description.clone(),
                name: param_def.name.to_string(),
                type_ref: param_type,
            });
        }

        let directives = self.factory.build_chain(
            &field_def.directives,
            DirectiveSite::FieldDefinition,
            owner.as_str(),
        )?;
        let mut config = FieldConfig {
            name: field_def.name.to_string(),
            description: field_def.description.clone(),
            deprecation_reason: None,
        };
        directives.define_field(owner.as_str(), &mut config)?;

        Ok(Field {
            def_location,
            deprecation_reason: config.deprecation_reason,
            description: config.description,
            directives,
            name: field_def.name.to_string(),
            parameters,
            type_ref,
        })
    }
}

fn resolve_type_ref(
    arena: &TypeArena,
    ast_type: &ast::schema::Type,
    referenced_from: &str,
) -> Result<ResolvedTypeRef> {
    let annotation = TypeAnnotation::from_ast_type(ast_type);
    let kind = arena.kind_of(annotation.innermost_name())
        .ok_or_else(|| SchemaBuildError::UnknownNamedType {
            referenced_from: referenced_from.to_string(),
            type_name: annotation.innermost_name().to_string(),
        })?;
    Ok(ResolvedTypeRef {
        annotation,
        kind,
    })
}
