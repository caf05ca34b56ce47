mod dynamic_bridge;
mod operation_kind;
#[allow(clippy::module_inception)]
mod schema;
mod schema_assembler;
mod schema_build_error;

pub use operation_kind::OperationKind;
pub use schema::Schema;
pub(crate) use schema_assembler::SchemaAssembler;
pub use schema_build_error::SchemaBuildError;

#[cfg(test)]
mod tests;
