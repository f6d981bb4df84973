//! Platform detection and platform-to-URL resolution.
//!
//! Pure helpers with no I/O: callers use these to compute the ordered
//! candidate URL list they hand to [`Binary::create`](crate::Binary::create).
//! The install lifecycle itself never consults the platform.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Platform Detection
// ============================================================================

/// An OS/architecture pair a binary can be published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    LinuxX64,
    LinuxArm64,
    MacosX64,
    MacosArm64,
    WindowsX64,
}

impl Platform {
    /// The platform this crate was compiled for, or `None` when it is not
    /// one binaries are published for.
    pub fn detect() -> Option<Self> {
        if cfg!(all(target_os = "linux", target_arch = "x86_64")) {
            Some(Self::LinuxX64)
        } else if cfg!(all(target_os = "linux", target_arch = "aarch64")) {
            Some(Self::LinuxArm64)
        } else if cfg!(all(target_os = "macos", target_arch = "x86_64")) {
            Some(Self::MacosX64)
        } else if cfg!(all(target_os = "macos", target_arch = "aarch64")) {
            Some(Self::MacosArm64)
        } else if cfg!(all(target_os = "windows", target_arch = "x86_64")) {
            Some(Self::WindowsX64)
        } else {
            None
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LinuxX64 => "Linux (x86_64)",
            Self::LinuxArm64 => "Linux (ARM64)",
            Self::MacosX64 => "macOS (Intel)",
            Self::MacosArm64 => "macOS (Apple Silicon)",
            Self::WindowsX64 => "Windows (x86_64)",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Platform URL Maps
// ============================================================================

/// Per-platform download URLs for one tool, plus platform-independent
/// fallback mirrors.
#[derive(Debug, Clone, Default)]
pub struct PlatformUrls {
    pub linux_x64: Option<String>,
    pub linux_arm64: Option<String>,
    pub macos_x64: Option<String>,
    pub macos_arm64: Option<String>,
    pub windows_x64: Option<String>,
    /// Mirrors tried after the platform-specific URL, in list order.
    pub fallbacks: Vec<String>,
}

impl PlatformUrls {
    /// Returns the URL for the given platform, if the tool publishes one.
    pub fn get(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::LinuxX64 => self.linux_x64.as_deref(),
            Platform::LinuxArm64 => self.linux_arm64.as_deref(),
            Platform::MacosX64 => self.macos_x64.as_deref(),
            Platform::MacosArm64 => self.macos_arm64.as_deref(),
            Platform::WindowsX64 => self.windows_x64.as_deref(),
        }
    }

    /// Returns the URL for the detected platform.
    pub fn for_current(&self) -> Option<&str> {
        Platform::detect().and_then(|platform| self.get(platform))
    }

    /// Builds the ordered candidate list for `platform`, suitable for
    /// [`Binary::create`](crate::Binary::create): the platform-specific URL
    /// first (the primary), then the `fallbacks` in list order.
    ///
    /// Empty when the tool publishes nothing for `platform` and has no
    /// fallbacks; `Binary::create` rejects an empty list.
    pub fn candidates(&self, platform: Platform) -> Vec<String> {
        let mut list = Vec::with_capacity(1 + self.fallbacks.len());
        if let Some(url) = self.get(platform) {
            list.push(url.to_string());
        }
        list.extend(self.fallbacks.iter().cloned());
        list
    }

    /// [`candidates`](Self::candidates) for the detected platform; only the
    /// fallbacks when detection fails.
    pub fn candidates_for_current(&self) -> Vec<String> {
        match Platform::detect() {
            Some(platform) => self.candidates(platform),
            None => self.fallbacks.clone(),
        }
    }
}

/// Builds a GitHub release-asset URL.
///
/// `https://github.com/<owner>/<repo>/releases/download/<tag>/<asset>`
pub fn github_release_url(owner: &str, repo: &str, tag: &str, asset: &str) -> String {
    format!("https://github.com/{owner}/{repo}/releases/download/{tag}/{asset}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_is_stable() {
        // Whatever this test host is, detection must not change between calls.
        assert_eq!(Platform::detect(), Platform::detect());
    }

    #[test]
    fn platform_urls_lookup() {
        let urls = PlatformUrls {
            linux_x64: Some("https://example.com/tool-linux-x64".to_string()),
            macos_arm64: Some("https://example.com/tool-macos-arm64".to_string()),
            ..Default::default()
        };

        assert_eq!(
            urls.get(Platform::LinuxX64),
            Some("https://example.com/tool-linux-x64")
        );
        assert_eq!(
            urls.get(Platform::MacosArm64),
            Some("https://example.com/tool-macos-arm64")
        );
        assert_eq!(urls.get(Platform::WindowsX64), None);
    }

    #[test]
    fn candidates_put_platform_url_before_fallbacks() {
        let urls = PlatformUrls {
            linux_x64: Some("https://example.com/tool-linux-x64".to_string()),
            fallbacks: vec![
                "https://mirror-a.example.com/tool".to_string(),
                "https://mirror-b.example.com/tool".to_string(),
            ],
            ..Default::default()
        };

        assert_eq!(
            urls.candidates(Platform::LinuxX64),
            vec![
                "https://example.com/tool-linux-x64",
                "https://mirror-a.example.com/tool",
                "https://mirror-b.example.com/tool",
            ]
        );

        // No platform URL published: only the mirrors remain, same order.
        assert_eq!(
            urls.candidates(Platform::WindowsX64),
            vec![
                "https://mirror-a.example.com/tool",
                "https://mirror-b.example.com/tool",
            ]
        );
    }

    #[test]
    fn candidates_feed_binary_create() {
        let urls = PlatformUrls {
            linux_x64: Some("https://example.com/tool-linux-x64".to_string()),
            fallbacks: vec!["https://mirror.example.com/tool".to_string()],
            ..Default::default()
        };

        let candidates = urls.candidates(Platform::LinuxX64);
        let bin = crate::Binary::create("tool", &candidates, None).unwrap();
        assert_eq!(bin.urls().len(), 2);
        assert_eq!(bin.urls()[0].as_str(), "https://example.com/tool-linux-x64");

        // An empty candidate list is rejected at construction.
        let none = PlatformUrls::default().candidates(Platform::LinuxX64);
        assert!(crate::Binary::create("tool", &none, None).is_err());
    }

    #[test]
    fn github_release_url_shape() {
        let url = github_release_url("astral-sh", "uv", "0.5.14", "uv-x86_64-unknown-linux-gnu.tar.gz");
        assert_eq!(
            url,
            "https://github.com/astral-sh/uv/releases/download/0.5.14/uv-x86_64-unknown-linux-gnu.tar.gz"
        );
    }

    #[test]
    fn display_names_are_readable() {
        assert_eq!(Platform::LinuxX64.to_string(), "Linux (x86_64)");
        assert_eq!(Platform::MacosArm64.to_string(), "macOS (Apple Silicon)");
    }
}
