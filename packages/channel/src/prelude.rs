pub use crate::api::call::MethodCall;
pub use crate::api::registry::ChannelRegistry;
pub use crate::api::reply::MethodReply;
pub use crate::api::test::{MockHost, TestRunner};
pub use crate::api::traits::MethodCallHandler;
pub use crate::descriptor::PluginDescriptor;
pub use crate::error::ChannelError;
pub use anyhow::Result;
pub use async_trait::async_trait;
