use crate::api::call::MethodCall;
use crate::api::registry::ChannelRegistry;
use crate::api::reply::MethodReply;
use crate::api::traits::MethodCallHandler;
use crate::error::ChannelError;
use std::sync::{Arc, Mutex};

/// A stand-in for the host runtime, for use in plugin tests.
///
/// Owns a [`ChannelRegistry`] the way a real host would and records every
/// call it delivers, so tests can assert on the traffic after the fact.
#[derive(Default)]
pub struct MockHost {
    registry: ChannelRegistry,
    delivered: Arc<Mutex<Vec<(String, MethodCall)>>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// The host-owned registry, for wiring plugins up.
    pub fn registry_mut(&mut self) -> &mut ChannelRegistry {
        &mut self.registry
    }

    /// Delivers a no-argument call to `channel`.
    pub async fn call(&self, channel: &str, method: &str) -> Result<MethodReply, ChannelError> {
        self.deliver(channel, MethodCall::new(method)).await
    }

    /// Delivers an arbitrary call to `channel`, recording it.
    pub async fn deliver(
        &self,
        channel: &str,
        call: MethodCall,
    ) -> Result<MethodReply, ChannelError> {
        self.delivered
            .lock()
            .unwrap()
            .push((channel.to_string(), call.clone()));
        self.registry.dispatch(channel, call).await
    }

    /// Every `(channel, call)` pair delivered so far.
    pub fn delivered(&self) -> Vec<(String, MethodCall)> {
        self.delivered.lock().unwrap().clone()
    }
}

/// Drives a single handler directly, without going through a registry.
pub struct TestRunner<H: MethodCallHandler> {
    handler: H,
}

impl<H: MethodCallHandler> TestRunner<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Delivers a no-argument call to the handler.
    pub async fn call(&self, method: &str) -> anyhow::Result<MethodReply> {
        self.handler.on_method_call(MethodCall::new(method)).await
    }

    /// Delivers an arbitrary call to the handler.
    pub async fn deliver(&self, call: MethodCall) -> anyhow::Result<MethodReply> {
        self.handler.on_method_call(call).await
    }
}
