use crate::error::ChannelError;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Plugin metadata: what the plugin is called and which channel it serves.
///
/// Descriptors load from the plugin's directory in priority order:
///
/// 1. `plugin.toml` (a standalone `[plugin]` table)
/// 2. `Cargo.toml` (`[package.metadata.plugin]`, name/version from `[package]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub name: String,
    pub version: Version,
    /// The channel name the plugin binds (e.g. `"scout_code_generator"`).
    pub channel: String,
}

#[derive(Deserialize)]
struct PluginFile {
    plugin: PluginDescriptor,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>, version: Version, channel: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version,
            channel: channel.into(),
        }
    }

    /// Loads the descriptor from `dir`, trying each source in priority order.
    pub fn load(dir: &Path) -> Result<Self, ChannelError> {
        let plugin_toml = dir.join("plugin.toml");
        if plugin_toml.exists() {
            return Self::from_plugin_toml(&plugin_toml);
        }

        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists() {
            tracing::debug!("No plugin.toml; reading Cargo.toml metadata");
            return Self::from_cargo_metadata(&cargo_toml);
        }

        Err(ChannelError::Descriptor(format!(
            "no plugin.toml or Cargo.toml in {}",
            dir.display()
        )))
    }

    fn from_plugin_toml(path: &Path) -> Result<Self, ChannelError> {
        let content = std::fs::read_to_string(path)?;
        let file: PluginFile = toml::from_str(&content)
            .map_err(|e| ChannelError::Descriptor(format!("{}: {}", path.display(), e)))?;
        file.plugin.validated()
    }

    fn from_cargo_metadata(path: &Path) -> Result<Self, ChannelError> {
        let content = std::fs::read_to_string(path)?;
        let value: toml::Value = content
            .parse()
            .map_err(|e| ChannelError::Descriptor(format!("{}: {}", path.display(), e)))?;

        let package = value
            .get("package")
            .ok_or_else(|| ChannelError::Descriptor("missing [package] table".to_string()))?;

        let channel = package
            .get("metadata")
            .and_then(|m| m.get("plugin"))
            .and_then(|p| p.get("channel"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                ChannelError::Descriptor(
                    "missing [package.metadata.plugin] channel entry".to_string(),
                )
            })?;

        let name = package
            .get("name")
            .and_then(|n| n.as_str())
            .ok_or_else(|| ChannelError::Descriptor("missing package name".to_string()))?;

        let version = package
            .get("version")
            .and_then(|v| v.as_str())
            .unwrap_or("0.0.0");
        let version = Version::parse(version)
            .map_err(|e| ChannelError::Descriptor(format!("bad package version: {}", e)))?;

        Self::new(name, version, channel).validated()
    }

    fn validated(self) -> Result<Self, ChannelError> {
        if self.channel.is_empty() {
            return Err(ChannelError::Descriptor(
                "channel name must be non-empty".to_string(),
            ));
        }
        Ok(self)
    }
}
