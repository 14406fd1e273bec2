use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsType {
    MacOS,
    Linux,
    Windows,
    FreeBSD,
    OpenBSD,
    Unknown,
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsType::MacOS => write!(f, "macOS"),
            OsType::Linux => write!(f, "Linux"),
            OsType::Windows => write!(f, "Windows"),
            OsType::FreeBSD => write!(f, "FreeBSD"),
            OsType::OpenBSD => write!(f, "OpenBSD"),
            OsType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// CPU architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
    X86_64,
    Aarch64,
    Arm,
    I686,
    Unknown,
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Architecture::X86_64 => write!(f, "x86_64"),
            Architecture::Aarch64 => write!(f, "aarch64"),
            Architecture::Arm => write!(f, "arm"),
            Architecture::I686 => write!(f, "i686"),
            Architecture::Unknown => write!(f, "unknown"),
        }
    }
}

/// Everything the probe knows about the host.
///
/// Only `os_type` and `os_version` feed the channel's version label; the rest
/// is available to library consumers that want more than the label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub os_type: OsType,
    pub os_version: String,
    pub arch: Architecture,
    pub distro: Option<String>, // For Linux distributions
    pub kernel_version: Option<String>,
}

impl PlatformInfo {
    /// Probes the current host.
    pub fn detect() -> Self {
        let info = os_info::get();
        let os_type = classify(info.os_type());

        Self {
            os_type,
            os_version: info.version().to_string(),
            arch: arch_from_target(),
            distro: distro_label(&info, os_type),
            kernel_version: sysinfo::System::kernel_version(),
        }
    }

    /// The human-readable version string shipped over the channel,
    /// e.g. `"macOS 14.1"` or `"Windows 10.0.22631"`.
    ///
    /// Falls back to the bare OS label when the release version could not be
    /// determined; it never fails.
    pub fn version_label(&self) -> String {
        if self.os_version.is_empty() || self.os_version == "Unknown" {
            return self.os_type.to_string();
        }
        format!("{} {}", self.os_type, self.os_version)
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version_label(), self.arch)?;
        if let Some(distro) = &self.distro {
            write!(f, " [{}]", distro)?;
        }
        Ok(())
    }
}

fn classify(kind: os_info::Type) -> OsType {
    use os_info::Type;
    match kind {
        Type::Macos => OsType::MacOS,
        Type::Windows => OsType::Windows,
        Type::FreeBSD | Type::DragonFly => OsType::FreeBSD,
        Type::OpenBSD | Type::NetBSD => OsType::OpenBSD,
        Type::Unknown | Type::Android | Type::Emscripten | Type::Redox => OsType::Unknown,
        // Every other type os_info reports on desktop targets is a Linux
        // flavor (Ubuntu, Debian, Arch, NixOS, ...).
        _ => OsType::Linux,
    }
}

fn arch_from_target() -> Architecture {
    match std::env::consts::ARCH {
        "x86_64" => Architecture::X86_64,
        "aarch64" => Architecture::Aarch64,
        "arm" => Architecture::Arm,
        "x86" | "i686" => Architecture::I686,
        _ => Architecture::Unknown,
    }
}

fn distro_label(info: &os_info::Info, os_type: OsType) -> Option<String> {
    if os_type != OsType::Linux {
        return None;
    }
    // os_info's Display for the type is the distribution name ("Ubuntu", ...).
    Some(info.os_type().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_finds_a_real_platform() {
        let info = PlatformInfo::detect();

        assert_ne!(info.os_type, OsType::Unknown);
        assert_ne!(info.arch, Architecture::Unknown);
        println!("Detected platform: {}", info);
    }

    #[test]
    fn version_label_contains_the_os_name() {
        let info = PlatformInfo::detect();
        let label = info.version_label();

        assert!(!label.is_empty());
        assert!(label.starts_with(&info.os_type.to_string()));
    }

    #[test]
    fn version_label_falls_back_to_the_bare_os_label() {
        let info = PlatformInfo {
            os_type: OsType::MacOS,
            os_version: "Unknown".to_string(),
            arch: Architecture::Aarch64,
            distro: None,
            kernel_version: None,
        };

        assert_eq!(info.version_label(), "macOS");
    }

    #[test]
    fn distro_is_linux_only() {
        let info = PlatformInfo::detect();
        if info.os_type != OsType::Linux {
            assert!(info.distro.is_none());
        }
    }
}
