use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single named request delivered over a channel.
///
/// The method name is compared exactly (case-sensitive) against the handler's
/// registered set. Arguments are an opaque JSON payload; handlers that take no
/// arguments ignore them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// The method identifier (e.g. `"getPlatformVersion"`).
    pub method: String,

    /// Optional argument payload, opaque to the dispatch layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
}

impl MethodCall {
    /// Creates a call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: None,
        }
    }

    /// Creates a call carrying a JSON argument payload.
    pub fn with_args(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args: Some(args),
        }
    }
}
