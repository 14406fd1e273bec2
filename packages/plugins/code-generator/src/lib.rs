//! The `scout_code_generator` plugin.
//!
//! Serves exactly one method, `getPlatformVersion`, answering with the host
//! OS version string; every other method name comes back `NotImplemented`.

use anyhow::Result;
use scout_channel::semver::Version;
use scout_channel::{
    async_trait, ChannelError, ChannelRegistry, MethodCall, MethodCallHandler, MethodReply,
    PluginDescriptor,
};
use scout_platform::VersionReporter;
use std::sync::Arc;

/// The channel this plugin serves.
pub const CHANNEL: &str = "scout_code_generator";

/// The one method the plugin implements. Matching is exact and
/// case-sensitive.
pub const GET_PLATFORM_VERSION: &str = "getPlatformVersion";

pub struct CodeGeneratorPlugin {
    descriptor: PluginDescriptor,
}

impl CodeGeneratorPlugin {
    pub fn new() -> Self {
        let version =
            Version::parse(env!("CARGO_PKG_VERSION")).expect("Cargo always emits valid SemVer");
        Self {
            descriptor: PluginDescriptor::new(env!("CARGO_PKG_NAME"), version, CHANNEL),
        }
    }

    pub fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    /// Binds a fresh plugin instance to its channel in the host's registry.
    ///
    /// The registry stays host-owned; this is the whole registration surface.
    pub fn register(registry: &mut ChannelRegistry) -> Result<(), ChannelError> {
        let plugin = Self::new();
        tracing::debug!("Registering {} on {}", plugin.descriptor.name, CHANNEL);
        registry.register(CHANNEL, Arc::new(plugin))
    }
}

impl Default for CodeGeneratorPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MethodCallHandler for CodeGeneratorPlugin {
    async fn on_method_call(&self, call: MethodCall) -> Result<MethodReply> {
        match call.method.as_str() {
            GET_PLATFORM_VERSION => Ok(MethodReply::success(VersionReporter::report())),
            _ => Ok(MethodReply::NotImplemented),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn descriptor_names_the_channel() {
        let plugin = CodeGeneratorPlugin::new();
        assert_eq!(plugin.descriptor().channel, CHANNEL);
        assert_eq!(plugin.descriptor().name, "scout-code-generator");
    }

    #[test]
    fn cargo_metadata_agrees_with_the_built_in_descriptor() {
        let loaded = PluginDescriptor::load(Path::new(env!("CARGO_MANIFEST_DIR"))).unwrap();
        assert_eq!(loaded, CodeGeneratorPlugin::new().descriptor().clone());
    }
}
