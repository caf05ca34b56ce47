use crate::ast;
use crate::directive::DirectiveDefinition;
use crate::directive::DirectiveStore;
use crate::execution;
use crate::execution::ExecutionResult;
use crate::execution::Request;
use crate::file_reader;
use crate::registry::DefinitionRegistry;
use crate::registry::RegistrationError;
use crate::scalar::ScalarConfig;
use crate::schema::Schema;
use crate::schema::SchemaAssembler;
use crate::schema::SchemaBuildError;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Collects schema documents, directive constructors and scalar configs, then
/// assembles them (once) into an executable [`Schema`].
///
/// ```ignore
/// let mut loom = GraphLoom::new();
/// loom.register_directives(libgraphloom::stock::definitions())?;
/// loom.load_str("type Query { hello: String @resolveString(val: \"world\") }")?;
/// let result = loom.execute(Request::new("{ hello }")).await?;
/// ```
///
/// Once the schema has been built every further registration or load fails
/// with [`RegistrationError::RegistryFrozen`].
#[derive(Debug, Default)]
pub struct GraphLoom {
    build_lock: Mutex<()>,
    directive_store: DirectiveStore,
    registry: DefinitionRegistry,
    scalars: IndexMap<String, ScalarConfig>,
    schema: OnceLock<Arc<Schema>>,
    str_load_counter: usize,
}
impl GraphLoom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of every scalar declared by the loaded documents, built-ins
    /// included if they were re-declared.
    pub fn declared_scalar_names(&self) -> Vec<&str> {
        self.registry.scalars()
            .keys()
            .map(|name| name.as_str())
            .collect()
    }

    pub fn is_frozen(&self) -> bool {
        self.schema.get().is_some()
    }

    pub fn register_directive(
        &mut self,
        definition: DirectiveDefinition,
    ) -> std::result::Result<(), RegistrationError> {
        self.ensure_not_frozen()?;
        self.directive_store.register(definition)
    }

    pub fn register_directives(
        &mut self,
        definitions: impl IntoIterator<Item = DirectiveDefinition>,
    ) -> std::result::Result<(), RegistrationError> {
        for definition in definitions {
            self.register_directive(definition)?;
        }
        Ok(())
    }

    /// Register the behavior of a custom scalar. Registering the same name
    /// again replaces the earlier config.
    pub fn register_scalar(
        &mut self,
        config: ScalarConfig,
    ) -> std::result::Result<(), RegistrationError> {
        self.ensure_not_frozen()?;
        if ScalarConfig::is_builtin_name(config.name()) {
            return Err(RegistrationError::BuiltinScalarRedefinition {
                name: config.name().to_string(),
            });
        }
        if self.scalars.contains_key(config.name()) {
            tracing::warn!("Overwriting previously registered scalar `{}`.", config.name());
        }
        self.scalars.insert(config.name().to_string(), config);
        Ok(())
    }

    pub fn register_scalars(
        &mut self,
        configs: impl IntoIterator<Item = ScalarConfig>,
    ) -> std::result::Result<(), RegistrationError> {
        for config in configs {
            self.register_scalar(config)?;
        }
        Ok(())
    }

    pub fn load_str(&mut self, content: &str) -> Result<()> {
        let ctr = self.str_load_counter;
        self.str_load_counter = self.str_load_counter.wrapping_add(1);
        self.load_document(PathBuf::from(format!("str://{ctr}")), content)
    }

    /// Join `contents` with newlines and load them as one document, so
    /// declarations in one part may reference types declared in another.
    pub fn load_strs(&mut self, contents: &[&str]) -> Result<()> {
        self.load_str(contents.join("\n").as_str())
    }

    /// Read every file, concatenate them in order and load the result as one
    /// document.
    pub fn load_files<P: AsRef<Path>>(&mut self, file_paths: &[P]) -> Result<()> {
        let content = file_reader::read_concatenated(file_paths)?;
        let file_path = match file_paths {
            [single] => single.as_ref().to_path_buf(),
            _ => PathBuf::from(
                file_paths.iter()
                    .map(|path| path.as_ref().display().to_string())
                    .collect::<Vec<_>>()
                    .join("+"),
            ),
        };
        self.load_document(file_path, content.as_str())
    }

    pub fn load_file(&mut self, file_path: impl AsRef<Path>) -> Result<()> {
        self.load_files(&[file_path])
    }

    /// Build the schema, discarding it. Surfaces any build error early.
    pub fn validate(&self) -> Result<()> {
        self.schema().map(|_| ())
    }

    /// The assembled schema. Built on the first call and cached; later calls
    /// (from any thread) return the same `Arc`.
    pub fn schema(&self) -> Result<Arc<Schema>> {
        if let Some(schema) = self.schema.get() {
            return Ok(Arc::clone(schema));
        }

        let _guard = self.build_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(schema) = self.schema.get() {
            return Ok(Arc::clone(schema));
        }

        tracing::debug!("Assembling schema.");
        let schema = SchemaAssembler::new(&self.registry, &self.directive_store, &self.scalars)
            .assemble()?;
        tracing::debug!(
            "Schema assembled with {} object type(s).",
            schema.types().objects().len(),
        );
        Ok(Arc::clone(self.schema.get_or_init(|| Arc::new(schema))))
    }

    /// Build the schema if needed, then execute `request` against it.
    pub async fn execute(&self, request: Request) -> Result<ExecutionResult> {
        let schema = self.schema()?;
        Ok(execution::execute(&schema, request).await)
    }

    fn ensure_not_frozen(&self) -> std::result::Result<(), RegistrationError> {
        if self.is_frozen() {
            return Err(RegistrationError::RegistryFrozen);
        }
        Ok(())
    }

    fn load_document(&mut self, file_path: PathBuf, content: &str) -> Result<()> {
        self.ensure_not_frozen()?;
        let document = ast::parse_schema_document(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;
        tracing::debug!(
            "Loading {} definition(s) from {}.",
            document.definitions.len(),
            file_path.display(),
        );
        self.registry.ingest_document(file_path.as_path(), document)
    }
}
