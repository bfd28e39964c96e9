//! Path handling for the Zellij plugin sandbox, where the host filesystem is
//! mounted under `/host`.

use std::path::PathBuf;

/// Returns the data directory for Vitrine's trace output.
///
/// Resolves to `/host/.local/share/zellij/vitrine` inside the sandbox. `/host`
/// points to the cwd of the last focused terminal, or the folder Zellij was
/// started from, so this is usually `~/.local/share/zellij/vitrine`.
///
/// # Examples
///
/// ```
/// use vitrine::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/vitrine");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("vitrine")
}

/// Expands tilde paths to use the `/host` prefix.
///
/// Used for the `theme_file` option, which users write relative to their home.
///
/// # Examples
///
/// ```
/// use vitrine::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
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
    fn tilde_only_expands_at_the_start() {
        assert_eq!(expand_tilde("~/x"), "/host/x");
        assert_eq!(expand_tilde("a/~/x"), "a/~/x");
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }

    #[test]
    fn data_dir_lives_under_zellij_share() {
        assert!(get_data_dir().ends_with("zellij/vitrine"));
    }
}
