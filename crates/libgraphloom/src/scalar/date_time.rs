use crate::scalar::ScalarConfig;
use crate::scalar::ScalarError;
use async_graphql::Value;

/// Name of the stock date-time scalar. Available without a `scalar`
/// declaration.
pub const DATE_TIME_SCALAR_NAME: &str = "DateTime";

/// An RFC 3339 timestamp, carried at runtime as a normalized string.
pub fn date_time() -> ScalarConfig {
    ScalarConfig::new(DATE_TIME_SCALAR_NAME)
        .with_description("An RFC 3339 date-time string.")
        .with_serialize(normalize_rfc3339)
        .with_parse_value(normalize_rfc3339)
        .with_parse_literal(normalize_rfc3339)
}

/// Scalar configs provided without registration, keyed by scalar name.
pub(crate) fn stock_scalar(name: &str) -> Option<ScalarConfig> {
    match name {
        DATE_TIME_SCALAR_NAME => Some(date_time()),
        _ => None,
    }
}

fn normalize_rfc3339(value: &Value) -> Result<Value, ScalarError> {
    let Value::String(string) = value else {
        return Err(ScalarError(format!(
            "{DATE_TIME_SCALAR_NAME} expects an RFC 3339 string, found `{value}`",
        )));
    };
    chrono::DateTime::parse_from_rfc3339(string.as_str())
        .map(|parsed| Value::String(parsed.to_rfc3339()))
        .map_err(|err| ScalarError(format!("`{string}` is not an RFC 3339 date-time: {err}")))
}
