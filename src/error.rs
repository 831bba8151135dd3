use crate::config::MessageStyle;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LaunchError>;

#[derive(Debug, Error)]
pub enum LaunchError {
    /// No candidate location produced a file.
    #[error("{}", not_found_message(.exe, .hint, .style))]
    Resolution {
        exe: String,
        hint: &'static str,
        style: MessageStyle,
    },

    /// The execute bits were missing and could not be added.
    #[error("failed to make '{}' executable", .path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OS refused to run the resolved file.
    #[error("failed to {action} '{}'{}", .path.display(), hint_suffix(.hint))]
    Delegation {
        path: PathBuf,
        action: &'static str,
        hint: Option<&'static str>,
        #[source]
        source: std::io::Error,
    },

    /// The launcher could not inspect its own process context.
    #[error("cannot determine {what}")]
    Environment {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },
}

fn not_found_message(exe: &str, hint: &str, style: &MessageStyle) -> String {
    match style {
        MessageStyle::Binary => {
            format!("Could not find the '{exe}' binary. Reinstall the package: {hint}")
        }
        MessageStyle::SearchPath => {
            format!("Error: could not find '{exe}' on PATH.\nReinstall the package: {hint}")
        }
    }
}

fn hint_suffix(hint: &Option<&'static str>) -> String {
    match hint {
        Some(h) => format!(" ({h})"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_message_names_binary_and_hint() {
        let err = LaunchError::Resolution {
            exe: "gather".into(),
            hint: "pip install gather",
            style: MessageStyle::Binary,
        };
        assert_eq!(
            err.to_string(),
            "Could not find the 'gather' binary. Reinstall the package: pip install gather"
        );
    }

    #[test]
    fn search_path_message_is_two_lines() {
        let err = LaunchError::Resolution {
            exe: "gather.exe".into(),
            hint: "uv tool install gather",
            style: MessageStyle::SearchPath,
        };
        let msg = err.to_string();
        let lines: Vec<&str> = msg.lines().collect();
        assert_eq!(
            lines,
            [
                "Error: could not find 'gather.exe' on PATH.",
                "Reinstall the package: uv tool install gather"
            ]
        );
    }

    #[test]
    fn delegation_message_carries_hint() {
        let err = LaunchError::Delegation {
            path: PathBuf::from("/opt/gather/bin/gather"),
            action: "execute",
            hint: Some("path is a directory"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(
            err.to_string(),
            "failed to execute '/opt/gather/bin/gather' (path is a directory)"
        );
    }
}
