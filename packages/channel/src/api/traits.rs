use crate::api::call::MethodCall;
use crate::api::reply::MethodReply;
use anyhow::Result;
use async_trait::async_trait;

/// The seam a plugin implements to answer calls on its channel.
///
/// Implementations must be `Send + Sync`: the host may deliver calls from
/// several threads at once, and each invocation is independent. A handler
/// returns `MethodReply::NotImplemented` for method names it does not
/// recognize; an `Err` is reserved for genuine faults inside the handler and
/// surfaces to the host as a dispatch error, never as a reply.
#[async_trait]
pub trait MethodCallHandler: Send + Sync {
    /// Answers a single call. Every call yields exactly one reply.
    async fn on_method_call(&self, call: MethodCall) -> Result<MethodReply>;
}
