use async_graphql::Value;
use thiserror::Error;

/// Raised by a directive constructor when it cannot build an instance from
/// the arguments (or site) it was given.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DirectiveConstructError {
    #[error("Invalid value for argument `{argument}`: expected {expected}, found `{found}`")]
    InvalidArgument {
        argument: String,
        expected: &'static str,
        found: Value,
    },

    #[error("Missing required argument `{argument}`")]
    MissingArgument {
        argument: String,
    },

    #[error("Unknown argument `{argument}`")]
    UnknownArgument {
        argument: String,
    },

    #[error("Directive cannot be used at {site}")]
    UnsupportedSite {
        site: String,
    },

    #[error("{0}")]
    Custom(String),
}
