use crate::ast;
use async_graphql::dynamic::TypeRef;

/// The annotated type of a field, argument, or input field with its
/// `NonNull` wrappers folded into `nullable` flags.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}
impl TypeAnnotation {
    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::schema::Type, nullable: bool) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::List {
                    inner: Box::new(Self::from_ast_type_impl(inner, true)),
                    nullable,
                },

            ast::schema::Type::NamedType(name) =>
                Self::Named {
                    name: name.to_string(),
                    nullable,
                },

            ast::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap this annotation down to the name of the type it
    /// ultimately refers to.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_name(),
            Self::Named { name, .. } => name.as_str(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } | Self::Named { nullable, .. } => *nullable,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        let (inner, nullable) = match self {
            Self::List { inner, nullable } => (format!("[{}]", inner.to_graphql_string()), nullable),
            Self::Named { name, nullable } => (name.to_string(), nullable),
        };
        if *nullable {
            inner
        } else {
            format!("{inner}!")
        }
    }

    pub(crate) fn to_engine_type_ref(&self) -> TypeRef {
        let (type_ref, nullable) = match self {
            Self::List { inner, nullable } =>
                (TypeRef::List(Box::new(inner.to_engine_type_ref())), *nullable),
            Self::Named { name, nullable } =>
                (TypeRef::named(name.as_str()), *nullable),
        };
        if nullable {
            type_ref
        } else {
            TypeRef::NonNull(Box::new(type_ref))
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
