/// Operating system families the launcher knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
    Other,
}

/// What a platform family can do for us. One row per [`Platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    pub platform: Platform,
    /// Appended to the binary base name, e.g. `.exe`.
    pub exe_suffix: &'static str,
    /// Unix-style mode bits are present and can be repaired.
    pub unix_permissions: bool,
    /// The process image can be replaced in place (`execvp`).
    pub process_replacement: bool,
    /// Searched when `PATH` is unset, matching libc's `execvp` fallback.
    pub default_search_path: Option<&'static str>,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(unix)]
        {
            Platform::Unix
        }
        #[cfg(windows)]
        {
            Platform::Windows
        }
        #[cfg(not(any(unix, windows)))]
        {
            Platform::Other
        }
    }

    pub const fn profile(self) -> PlatformProfile {
        match self {
            Platform::Unix => PlatformProfile {
                platform: self,
                exe_suffix: "",
                unix_permissions: true,
                process_replacement: true,
                default_search_path: Some("/bin:/usr/bin"),
            },
            // Spawning keeps a parent around so console signals are translated by the OS.
            Platform::Windows => PlatformProfile {
                platform: self,
                exe_suffix: ".exe",
                unix_permissions: false,
                process_replacement: false,
                default_search_path: None,
            },
            Platform::Other => PlatformProfile {
                platform: self,
                exe_suffix: "",
                unix_permissions: false,
                process_replacement: false,
                default_search_path: None,
            },
        }
    }
}

impl PlatformProfile {
    pub fn current() -> Self {
        Platform::current().profile()
    }

    pub fn exe_name(&self, base: &str) -> String {
        format!("{base}{}", self.exe_suffix)
    }
}
