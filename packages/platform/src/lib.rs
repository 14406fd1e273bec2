//! Host platform probe: OS and architecture detection plus the version
//! reporter behind the `getPlatformVersion` channel method.

pub mod info;
pub mod report;

pub use info::{Architecture, OsType, PlatformInfo};
pub use report::VersionReporter;
