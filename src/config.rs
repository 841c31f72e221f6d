use std::path::PathBuf;

use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".book-browser";
/// Log file written inside the application data directory.
const LOG_FILE_NAME: &str = "book-browser.log";
/// Repository the application always starts with.
pub const DEFAULT_REPOSITORY_KIND: &str = "inMemory";

/// Startup settings. Nothing is read from disk, flags or the environment; the
/// values are fixed at compile time apart from the resolved home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub repository_kind: String,
    /// `None` when no home directory could be located; logging is skipped.
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            repository_kind: DEFAULT_REPOSITORY_KIND.to_string(),
            log_path: log_path(),
        }
    }
}

/// Resolve the absolute path to the log file inside the user's home.
fn log_path() -> Option<PathBuf> {
    let base_dirs = BaseDirs::new()?;
    Some(base_dirs.home_dir().join(DATA_DIR_NAME).join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_the_in_memory_repository() {
        let config = AppConfig::default();
        assert_eq!(config.repository_kind, "inMemory");
    }

    #[test]
    fn log_path_lives_under_the_data_dir() {
        if let Some(path) = AppConfig::default().log_path {
            assert!(path.ends_with(".book-browser/book-browser.log"));
        }
    }
}
