//! Resolve, normalize permissions, delegate: the whole life of a launcher process.

use crate::config::Layout;
use crate::delegate::Strategy;
use crate::error::{LaunchError, Result};
use crate::fsutil;
use crate::logging;
use crate::platform::PlatformProfile;
use crate::resolver::Resolver;
use std::ffi::OsString;

/// Exit status when the launcher itself fails, as opposed to the target.
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Debug, Clone)]
pub struct Launcher {
    resolver: Resolver,
    strategy: Strategy,
}

impl Launcher {
    pub fn new(resolver: Resolver, strategy: Strategy) -> Self {
        Self { resolver, strategy }
    }

    pub fn from_env(layout: Layout) -> Result<Self> {
        let profile = PlatformProfile::current();
        let resolver = Resolver::from_env(layout, profile)?;
        Ok(Self::new(resolver, Strategy::for_profile(&profile)))
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Runs the pipeline once. With [`Strategy::Replace`] a successful call
    /// never returns.
    pub fn run(&self, args: &[OsString]) -> Result<i32> {
        let resolved = self.resolver.resolve()?;
        if fsutil::ensure_executable(&resolved.path, self.resolver.profile())? {
            tracing::debug!(path = %resolved.path.display(), "permissions repaired");
        }
        self.strategy.delegate(&resolved.path, args)
    }
}

/// Shared `main` for the launcher binaries. Never returns.
pub fn run_main(bin: &str, layout: Layout) -> ! {
    logging::init();
    let code = match real_main(layout) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", render_error(bin, e));
            FAILURE_EXIT_CODE
        }
    };
    std::process::exit(code)
}

fn real_main(layout: Layout) -> Result<i32> {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    Launcher::from_env(layout)?.run(&args)
}

/// The diagnostic printed to stderr when the launcher itself fails.
pub fn render_error(bin: &str, err: LaunchError) -> String {
    match err {
        // already phrased for the user
        err @ LaunchError::Resolution { .. } => err.to_string(),
        // `{:#}` prints the whole source chain on one line
        other => format!("{bin} error: {:#}", anyhow::Error::new(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MessageStyle;
    use std::path::PathBuf;

    #[test]
    fn resolution_error_is_printed_as_is() {
        let err = LaunchError::Resolution {
            exe: "gather".into(),
            hint: "pip install gather",
            style: MessageStyle::Binary,
        };
        assert_eq!(
            render_error("gather-shim", err),
            "Could not find the 'gather' binary. Reinstall the package: pip install gather"
        );
    }

    #[test]
    fn other_errors_carry_bin_prefix_and_source() {
        let err = LaunchError::Permission {
            path: PathBuf::from("/opt/gather/bin/gather"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only file system"),
        };
        assert_eq!(
            render_error("gather-shim", err),
            "gather-shim error: failed to make '/opt/gather/bin/gather' executable: read-only file system"
        );
    }
}
