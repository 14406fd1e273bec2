use crate::api::call::MethodCall;
use crate::api::reply::MethodReply;
use crate::api::traits::MethodCallHandler;
use crate::error::ChannelError;
use std::collections::HashMap;
use std::sync::Arc;

/// The host-owned association of channel names to handlers.
///
/// Registration happens once, while the host wires up its plugins; after
/// that the registry is read-only and can be shared across threads freely.
/// Handlers are stored as `Arc<dyn MethodCallHandler>`, so a plugin may be
/// bound to more than one channel if the host wants that.
#[derive(Default)]
pub struct ChannelRegistry {
    channels: HashMap<String, Arc<dyn MethodCallHandler>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a handler to a channel name.
    ///
    /// Each channel name can carry exactly one handler; registering the same
    /// name twice is a host wiring mistake and reports as an error.
    pub fn register(
        &mut self,
        channel: impl Into<String>,
        handler: Arc<dyn MethodCallHandler>,
    ) -> Result<(), ChannelError> {
        let channel = channel.into();
        if self.channels.contains_key(&channel) {
            return Err(ChannelError::DuplicateChannel(channel));
        }
        tracing::debug!("Registered channel: {}", channel);
        self.channels.insert(channel, handler);
        Ok(())
    }

    pub fn contains(&self, channel: &str) -> bool {
        self.channels.contains_key(channel)
    }

    /// Registered channel names, sorted for stable output.
    pub fn channels(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.channels.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Delivers one call to the handler bound to `channel`.
    ///
    /// Dispatching to a channel nobody registered is a host misconfiguration
    /// and reports as an error; an unknown *method* on a known channel is the
    /// handler's business and comes back as `MethodReply::NotImplemented`.
    pub async fn dispatch(
        &self,
        channel: &str,
        call: MethodCall,
    ) -> Result<MethodReply, ChannelError> {
        let handler = self
            .channels
            .get(channel)
            .ok_or_else(|| ChannelError::UnknownChannel(channel.to_string()))?;

        tracing::debug!("Dispatching {}#{}", channel, call.method);
        let reply = handler.on_method_call(call).await?;
        Ok(reply)
    }
}
