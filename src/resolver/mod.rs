use crate::config::Layout;
use crate::error::{LaunchError, Result};
use crate::fsutil;
use crate::platform::PlatformProfile;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// One place the native binary may live. Probed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateLocation {
    /// Fixed path beside the launcher's own install.
    Bundled(PathBuf),
    /// Name handed to the executable search over PATH.
    SearchPath(String),
}

impl fmt::Display for CandidateLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateLocation::Bundled(p) => write!(f, "bundled {}", p.display()),
            CandidateLocation::SearchPath(name) => write!(f, "PATH lookup of {name}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Bundled,
    SearchPath,
}

/// The file the launcher will hand control to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExecutable {
    pub path: PathBuf,
    pub origin: Origin,
}

/// Finds the native binary for one launcher layout.
///
/// All inputs are captured up front so that resolution is a pure function of
/// them plus the filesystem.
#[derive(Debug, Clone)]
pub struct Resolver {
    layout: Layout,
    profile: PlatformProfile,
    install_dir: Option<PathBuf>,
    search_path: Option<OsString>,
    cwd: Option<PathBuf>,
}

impl Resolver {
    pub fn new(layout: Layout, profile: PlatformProfile) -> Self {
        Self { layout, profile, install_dir: None, search_path: None, cwd: None }
    }

    /// Captures the running launcher's directory, `PATH` and working directory.
    ///
    /// An unset `PATH` falls back to the platform's default search path, as
    /// `execvp` does.
    pub fn from_env(layout: Layout, profile: PlatformProfile) -> Result<Self> {
        let search_path = std::env::var_os("PATH")
            .or_else(|| profile.default_search_path.map(OsString::from));
        let mut resolver = Self::new(layout, profile).search_path(search_path);
        // only needed when PATH has relative entries; checked there
        if let Ok(dir) = std::env::current_dir() {
            resolver = resolver.cwd(dir);
        }
        if layout.bundled_subdir.is_some() {
            let exe = std::env::current_exe().map_err(|source| LaunchError::Environment {
                what: "the launcher's own location",
                source,
            })?;
            resolver = resolver.install_dir(install_dir_of(&exe));
        }
        Ok(resolver)
    }

    pub fn install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_dir = Some(dir.into());
        self
    }

    pub fn search_path(mut self, paths: Option<OsString>) -> Self {
        self.search_path = paths;
        self
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// The PATH-style list that will be searched, if any.
    pub fn search_path_list(&self) -> Option<&OsStr> {
        self.search_path.as_deref()
    }

    pub fn profile(&self) -> &PlatformProfile {
        &self.profile
    }

    pub fn exe_name(&self) -> String {
        self.profile.exe_name(self.layout.base_name)
    }

    /// Probe order: bundled copy (when the layout has one), then PATH.
    pub fn candidates(&self) -> Vec<CandidateLocation> {
        let name = self.exe_name();
        let mut out = Vec::with_capacity(2);
        if let (Some(subdir), Some(dir)) = (self.layout.bundled_subdir, &self.install_dir) {
            out.push(CandidateLocation::Bundled(dir.join(subdir).join(&name)));
        }
        out.push(CandidateLocation::SearchPath(name));
        out
    }

    pub fn resolve(&self) -> Result<ResolvedExecutable> {
        for candidate in self.candidates() {
            tracing::debug!(%candidate, "probing");
            if let Some(found) = self.probe(candidate)? {
                tracing::debug!(path = %found.path.display(), origin = ?found.origin, "resolved");
                return Ok(found);
            }
        }
        Err(LaunchError::Resolution {
            exe: self.exe_name(),
            hint: self.layout.reinstall_hint,
            style: self.layout.message_style,
        })
    }

    fn probe(&self, candidate: CandidateLocation) -> Result<Option<ResolvedExecutable>> {
        match candidate {
            CandidateLocation::Bundled(path) => Ok(fsutil::entry_exists(&path)
                .then_some(ResolvedExecutable { path, origin: Origin::Bundled })),
            CandidateLocation::SearchPath(name) => {
                let Some(paths) = self.absolute_search_path()? else {
                    tracing::debug!(%name, "no search path");
                    return Ok(None);
                };
                let cwd = self.cwd.as_deref().unwrap_or(Path::new(""));
                match which::which_in(&name, Some(paths), cwd) {
                    Ok(path) => Ok(Some(ResolvedExecutable { path, origin: Origin::SearchPath })),
                    Err(e) => {
                        tracing::debug!(%name, error = %e, "not on PATH");
                        Ok(None)
                    }
                }
            }
        }
    }

    /// The search path with relative entries (including empty ones, which
    /// mean the working directory) anchored at `cwd`, so hits are absolute.
    fn absolute_search_path(&self) -> Result<Option<OsString>> {
        let Some(raw) = &self.search_path else {
            return Ok(None);
        };
        let mut dirs = Vec::new();
        for entry in std::env::split_paths(raw) {
            if entry.is_absolute() {
                dirs.push(entry);
                continue;
            }
            let Some(cwd) = &self.cwd else {
                return Err(LaunchError::Environment {
                    what: "the working directory for a relative PATH entry",
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "current directory is unavailable",
                    ),
                });
            };
            dirs.push(cwd.join(entry));
        }
        let joined = std::env::join_paths(dirs).map_err(|e| LaunchError::Environment {
            what: "the search path",
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
        })?;
        Ok(Some(joined))
    }
}

/// Directory holding the launcher, with symlinks to the launcher resolved.
pub fn install_dir_of(exe: &Path) -> PathBuf {
    let real = std::fs::canonicalize(exe).unwrap_or_else(|_| exe.to_path_buf());
    real.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."))
}
