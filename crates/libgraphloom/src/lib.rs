pub mod ast;
pub mod directive;
pub mod execution;
pub mod file_reader;
mod graph_loom;
pub mod loc;
pub mod registry;
pub mod scalar;
pub mod schema;
pub mod stock;
pub mod types;
mod value;

pub use graph_loom::GraphLoom;
pub use schema::Schema;
pub use schema::SchemaBuildError;

#[cfg(test)]
mod tests;
