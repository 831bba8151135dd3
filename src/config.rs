//! Compile-time layout of the two launcher entry points.
//!
//! Nothing here is read from disk or the environment: the packaging tooling
//! decides where the native binary lives, and the launcher only mirrors that
//! contract.

/// Base name of the native tool, before any platform suffix.
pub const BINARY_BASE_NAME: &str = "gather";

/// Subdirectory next to the launcher reserved for a bundled copy.
pub const BUNDLED_SUBDIR: &str = "bin";

/// Where to look and what to tell the user when nothing is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub base_name: &'static str,
    /// `None` skips the bundled probe entirely.
    pub bundled_subdir: Option<&'static str>,
    pub reinstall_hint: &'static str,
    pub message_style: MessageStyle,
}

/// Wording of the resolution failure diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// `Could not find the 'gather' binary. Reinstall the package: ...`
    Binary,
    /// `Error: could not find 'gather' on PATH.` followed by the hint on its own line.
    SearchPath,
}

impl Layout {
    /// Installed package: bundled copy first, then PATH.
    pub const fn packaged() -> Self {
        Self {
            base_name: BINARY_BASE_NAME,
            bundled_subdir: Some(BUNDLED_SUBDIR),
            reinstall_hint: "pip install gather",
            message_style: MessageStyle::Binary,
        }
    }

    /// Tool-style install where only PATH is consulted.
    pub const fn search_path_only() -> Self {
        Self {
            base_name: BINARY_BASE_NAME,
            bundled_subdir: None,
            reinstall_hint: "uv tool install gather",
            message_style: MessageStyle::SearchPath,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::packaged()
    }
}
