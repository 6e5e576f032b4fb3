//! Platform applicability flags.
//!
//! Configurations and individual layer parameters record which operating
//! systems they apply to. On disk this is an array of platform tokens.

use std::fmt;
use tracing::warn;

/// A supported platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOS,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Linux, Platform::MacOS];

    /// The platform this binary was built for.
    pub const fn current() -> Platform {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOS
        } else {
            Platform::Linux
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Platform::Windows => "WINDOWS",
            Platform::Linux => "LINUX",
            Platform::MacOS => "MACOS",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Platform::ALL.into_iter().find(|p| p.token() == token)
    }

    const fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

/// Bitset over [`Platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformFlags(u32);

impl PlatformFlags {
    pub const NONE: PlatformFlags = PlatformFlags(0);
    pub const ALL: PlatformFlags = PlatformFlags(
        Platform::Windows.bit() | Platform::Linux.bit() | Platform::MacOS.bit(),
    );

    pub fn contains(self, platform: Platform) -> bool {
        self.0 & platform.bit() != 0
    }

    pub fn insert(&mut self, platform: Platform) {
        self.0 |= platform.bit();
    }

    /// Build flags from on-disk tokens. Unknown tokens are skipped.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut flags = PlatformFlags::NONE;
        for token in tokens {
            match Platform::from_token(token.as_ref()) {
                Some(platform) => flags.insert(platform),
                None => warn!(token = token.as_ref(), "ignoring unknown platform token"),
            }
        }
        flags
    }

    pub fn tokens(self) -> Vec<String> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.contains(*p))
            .map(|p| p.token().to_string())
            .collect()
    }

    pub fn includes_current(self) -> bool {
        self.contains(Platform::current())
    }
}

impl Default for PlatformFlags {
    fn default() -> Self {
        PlatformFlags::ALL
    }
}

impl fmt::Display for PlatformFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_platform() {
        for platform in Platform::ALL {
            assert!(PlatformFlags::ALL.contains(platform));
        }
        assert!(PlatformFlags::ALL.includes_current());
    }

    #[test]
    fn tokens_round_trip() {
        let flags = PlatformFlags::from_tokens(&["LINUX", "MACOS"]);
        assert!(!flags.contains(Platform::Windows));
        assert_eq!(flags.tokens(), vec!["LINUX", "MACOS"]);
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let flags = PlatformFlags::from_tokens(&["WINDOWS", "FUCHSIA"]);
        assert_eq!(flags.tokens(), vec!["WINDOWS"]);
    }

    #[test]
    fn empty_token_list_means_no_platform() {
        let flags = PlatformFlags::from_tokens::<&str>(&[]);
        assert_eq!(flags, PlatformFlags::NONE);
        assert!(!flags.includes_current());
    }
}
