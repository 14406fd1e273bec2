//! # Scout Channel
//!
//! The method-channel contract between a host runtime and its plugins.
//! A plugin binds a channel name to a [`MethodCallHandler`]; the host owns
//! the [`ChannelRegistry`] and delivers named calls through it.
//!
//! ## Core Components
//!
//! *   **`MethodCall` / `MethodReply`**: The request/response pair. Every
//!     call yields exactly one reply; an unknown method name yields the
//!     `NotImplemented` reply, which is a normal outcome rather than an error.
//! *   **`MethodCallHandler` Trait**: The seam a plugin implements to answer
//!     calls on its channel.
//! *   **`ChannelRegistry`**: The host-owned association of channel names to
//!     handlers. The library never owns one.
//!
//! ## Example
//!
//! ```rust,no_run
//! use scout_channel::prelude::*;
//! use std::sync::Arc;
//!
//! struct EchoPlugin;
//!
//! #[async_trait]
//! impl MethodCallHandler for EchoPlugin {
//!     async fn on_method_call(&self, call: MethodCall) -> Result<MethodReply> {
//!         match call.method.as_str() {
//!             "echo" => Ok(MethodReply::success(call.args.unwrap_or_default())),
//!             _ => Ok(MethodReply::NotImplemented),
//!         }
//!     }
//! }
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut registry = ChannelRegistry::new();
//! registry.register("echo_channel", Arc::new(EchoPlugin))?;
//! let reply = registry.dispatch("echo_channel", MethodCall::new("echo")).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod descriptor;
pub mod error;
pub mod prelude;

// Facade re-exports
pub use api::call::MethodCall;
pub use api::registry::ChannelRegistry;
pub use api::reply::MethodReply;
pub use api::traits::MethodCallHandler;
pub use async_trait::async_trait;
pub use descriptor::PluginDescriptor;
pub use error::ChannelError;
pub use semver;
pub use serde_json;
