use crate::info::PlatformInfo;

/// Answers "what OS is this?" for the channel surface.
///
/// Stateless: every call probes the host again. The query is local and
/// non-blocking.
pub struct VersionReporter;

impl VersionReporter {
    /// The host OS version as a single descriptive string.
    pub fn report() -> String {
        PlatformInfo::detect().version_label()
    }
}
