use crate::error::{LaunchError, Result};
use crate::fsutil;
use crate::platform::PlatformProfile;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// How control is handed to the native binary. Chosen once from the platform
/// profile, never switched at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Replace the launcher's process image (`execvp`).
    Replace,
    /// Run a child, wait for it, and report its exit status.
    Spawn,
}

impl Strategy {
    pub fn for_profile(profile: &PlatformProfile) -> Self {
        if profile.process_replacement {
            Strategy::Replace
        } else {
            Strategy::Spawn
        }
    }

    /// Runs `program` with `args` as argv[1..].
    ///
    /// `Replace` only ever returns an error; on success this process becomes
    /// the target. `Spawn` returns the exit code the launcher must exit with.
    pub fn delegate(self, program: &Path, args: &[OsString]) -> Result<i32> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        tracing::debug!(strategy = ?self, program = %program.display(), argc = args.len(), "delegating");
        match self {
            Strategy::Replace => Err(replace(cmd, program)),
            Strategy::Spawn => {
                let status = cmd.status().map_err(|e| delegation_error(program, "spawn", e))?;
                Ok(exit_code(status))
            }
        }
    }
}

#[cfg(unix)]
fn replace(mut cmd: Command, program: &Path) -> LaunchError {
    use std::os::unix::process::CommandExt;
    let err = cmd.exec();
    delegation_error(program, "execute", err)
}

#[cfg(not(unix))]
fn replace(_cmd: Command, program: &Path) -> LaunchError {
    let err = std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "process replacement is not available on this platform",
    );
    delegation_error(program, "execute", err)
}

fn delegation_error(program: &Path, action: &'static str, source: std::io::Error) -> LaunchError {
    LaunchError::Delegation {
        path: program.to_path_buf(),
        action,
        hint: fsutil::diagnose(program),
        source,
    }
}

/// Exit code that reproduces `status` for the calling shell.
///
/// A child killed by signal N maps to `128 + N`, as POSIX shells report it.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    1
}
