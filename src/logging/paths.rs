use std::fs;
use std::path::PathBuf;

/// Resolve and create the log directory
///
/// Relative paths are taken from the current working directory.
pub fn get_log_directory(dir: &str) -> Result<PathBuf, std::io::Error> {
    ensure_directory_exists(PathBuf::from(dir))
}

fn ensure_directory_exists(path: PathBuf) -> Result<PathBuf, std::io::Error> {
    if !path.exists() {
        fs::create_dir_all(&path)?;
    }
    Ok(path)
}
