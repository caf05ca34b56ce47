mod date_time;
mod scalar_config;

pub use date_time::DATE_TIME_SCALAR_NAME;
pub use date_time::date_time;
pub(crate) use date_time::stock_scalar;
pub use scalar_config::BUILTIN_SCALAR_NAMES;
pub use scalar_config::ScalarConfig;
pub use scalar_config::ScalarError;
pub use scalar_config::ScalarFn;
