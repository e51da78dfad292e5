//! Path helpers for the Zellij sandbox, where the host's home directory is
//! mounted at `/host`.

use std::path::PathBuf;

/// File name of the plugin's trace log inside [`data_dir`].
pub const LOG_FILE_NAME: &str = "profile-deck.log";

/// Returns the plugin's data directory.
///
/// `/host` points to the cwd of the last focused terminal, or the folder
/// Zellij was started from, so this usually resolves to
/// `~/.local/share/zellij/profile-deck`.
///
/// # Examples
///
/// ```
/// use profile_deck::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/profile-deck"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("profile-deck")
}

/// Path of the trace log file.
#[must_use]
pub fn log_file() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use profile_deck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_as_prefix() {
        assert_eq!(expand_tilde("~user/theme.toml"), "~user/theme.toml");
        assert_eq!(expand_tilde("themes/~/x.toml"), "themes/~/x.toml");
    }

    #[test]
    fn log_file_lives_in_data_dir() {
        assert_eq!(log_file().parent(), Some(data_dir().as_path()));
        assert!(log_file().ends_with(LOG_FILE_NAME));
    }
}
