#[cfg(unix)]
use crate::error::LaunchError;
use crate::error::Result;
use crate::platform::PlatformProfile;
use std::io::ErrorKind;
use std::path::Path;

#[cfg(unix)]
const EXEC_BITS: u32 = 0o111;
#[cfg(unix)]
const OWNER_EXEC: u32 = 0o100;

/// True when a directory entry exists at `p`, whatever it points to.
///
/// Dangling symlinks, directories and empty files all count: deciding whether
/// the entry can actually run is left to the OS at delegation time.
pub fn entry_exists(p: &Path) -> bool {
    std::fs::symlink_metadata(p).is_ok()
}

/// Adds owner, group and other execute bits when the owner bit is missing.
///
/// Returns `Ok(true)` if the mode was rewritten. When the owner bit is already
/// set nothing is written, so the file's change time stays put. Platforms
/// without Unix mode bits are a no-op.
pub fn ensure_executable(p: &Path, profile: &PlatformProfile) -> Result<bool> {
    if !profile.unix_permissions {
        return Ok(false);
    }
    ensure_executable_unix(p)
}

#[cfg(unix)]
fn ensure_executable_unix(p: &Path) -> Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    let meta = match std::fs::metadata(p) {
        Ok(m) => m,
        // dangling symlink: let exec report it
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %p.display(), "no target behind entry, skipping permission check");
            return Ok(false);
        }
        Err(source) => {
            return Err(LaunchError::Permission { path: p.to_path_buf(), source });
        }
    };
    let mode = meta.permissions().mode();
    if mode & OWNER_EXEC != 0 {
        return Ok(false);
    }
    let repaired = mode | EXEC_BITS;
    std::fs::set_permissions(p, std::fs::Permissions::from_mode(repaired))
        .map_err(|source| LaunchError::Permission { path: p.to_path_buf(), source })?;
    tracing::warn!(
        path = %p.display(),
        from = %format!("{:o}", mode & 0o7777),
        to = %format!("{:o}", repaired & 0o7777),
        "added missing execute permission"
    );
    Ok(true)
}

#[cfg(not(unix))]
fn ensure_executable_unix(_p: &Path) -> Result<bool> {
    Ok(false)
}

/// Best-effort explanation for why running `p` might have failed.
pub fn diagnose(p: &Path) -> Option<&'static str> {
    let link = std::fs::symlink_metadata(p).ok()?;
    match std::fs::metadata(p) {
        Err(e) if e.kind() == ErrorKind::NotFound && link.file_type().is_symlink() => {
            Some("path is a dangling symlink")
        }
        Err(_) => None,
        Ok(m) if m.is_dir() => Some("path is a directory"),
        Ok(m) if m.is_file() && m.len() == 0 => Some("file is empty"),
        Ok(m) if !m.is_file() => Some("path is not a regular file"),
        Ok(_) => None,
    }
}
