//! Error type shared by the serialization layer and the models

use thiserror::Error;

/// Errors raised while reading or writing Graph models
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown {type_name} value: {value:?}")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
    },

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("value {value} does not fit in {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("invalid {kind} value {value:?}: {reason}")]
    InvalidFormat {
        kind: &'static str,
        value: String,
        reason: String,
    },

    #[error("serialization writer: {0}")]
    Writer(String),

    /// A family field deserializer ran against a different variant than the
    /// one it was built for.
    #[error("field deserializer does not match the active {expected} variant")]
    VariantMismatch { expected: &'static str },

    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn mismatch(expected: &'static str, found: &serde_json::Value) -> Self {
        Error::TypeMismatch {
            expected,
            found: describe(found),
        }
    }
}

/// Short description of a JSON value's kind for error messages
fn describe(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => format!("boolean {}", b),
        serde_json::Value::Number(n) => format!("number {}", n),
        serde_json::Value::String(s) => format!("string {:?}", s),
        serde_json::Value::Array(arr) => format!("array of {} items", arr.len()),
        serde_json::Value::Object(_) => "object".to_string(),
    }
}
