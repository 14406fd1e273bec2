use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The single response to a [`MethodCall`](crate::MethodCall).
///
/// `NotImplemented` is the distinguished reply for a method name the handler
/// does not recognize. It is a normal branch of dispatch, not a fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum MethodReply {
    /// The handler recognized the method and produced a payload.
    Success(Value),

    /// No handler entry for the requested method name.
    NotImplemented,
}

impl MethodReply {
    /// Wraps a payload as a successful reply.
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success(value.into())
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }

    /// The payload as a string slice, if this is a string-valued success.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Success(value) => value.as_str(),
            Self::NotImplemented => None,
        }
    }
}
