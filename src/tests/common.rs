use crate::config::BINARY_BASE_NAME;
use crate::platform::PlatformProfile;
use once_cell::sync::Lazy;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Points `PATH` somewhere else for the lifetime of the guard.
pub struct PathGuard {
    _lock: MutexGuard<'static, ()>,
    prev: Option<OsString>,
}

impl PathGuard {
    pub fn set(value: impl AsRef<OsStr>) -> Self {
        let lock = lock_env();
        let prev = env::var_os("PATH");
        env::set_var("PATH", value);
        Self { _lock: lock, prev }
    }

    pub fn unset() -> Self {
        let lock = lock_env();
        let prev = env::var_os("PATH");
        env::remove_var("PATH");
        Self { _lock: lock, prev }
    }
}

impl Drop for PathGuard {
    fn drop(&mut self) {
        match &self.prev {
            Some(val) => env::set_var("PATH", val),
            None => env::remove_var("PATH"),
        }
    }
}

pub fn exe_name() -> String {
    PlatformProfile::current().exe_name(BINARY_BASE_NAME)
}

pub fn search_path<P: AsRef<Path>>(dirs: &[P]) -> Option<OsString> {
    Some(env::join_paths(dirs.iter().map(|d| d.as_ref())).expect("join PATH entries"))
}

/// Writes a shell script named like the native tool into `dir`.
pub fn write_tool(dir: &Path, body: &str, mode: u32) -> PathBuf {
    std::fs::create_dir_all(dir).expect("create tool dir");
    let p = dir.join(exe_name());
    std::fs::write(&p, format!("#!/bin/sh\n{body}\n")).expect("write tool");
    set_mode(&p, mode);
    p
}

#[cfg(unix)]
pub fn set_mode(p: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(p, std::fs::Permissions::from_mode(mode)).expect("chmod");
}

#[cfg(not(unix))]
pub fn set_mode(_p: &Path, _mode: u32) {}
