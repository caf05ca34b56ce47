mod execution_result;
mod executor;
mod field_resolver;
mod request;
mod root_object;
mod value_coercion;

pub use execution_result::ExecutionResult;
pub(crate) use executor::execute;
pub(crate) use field_resolver::FieldResolver;
pub use field_resolver::resolve_field_value;
pub use request::Request;
pub(crate) use root_object::RootObject;
pub use value_coercion::CoercionError;
