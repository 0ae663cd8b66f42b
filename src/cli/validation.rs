//! CLI argument validation functions

use std::fs;
use std::path::PathBuf;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Validate a callback path is empty or an absolute path without a query
pub fn validate_callback_path(path_str: &str) -> Result<String, String> {
    if path_str.is_empty() {
        return Ok(String::new());
    }

    if !path_str.starts_with('/') {
        return Err(format!("Callback path must start with '/', got: '{}'", path_str));
    }

    if path_str.contains(char::is_whitespace) {
        return Err("Callback path cannot contain whitespace".to_string());
    }

    if path_str.contains(['?', '#']) {
        return Err("Callback path cannot contain a query or fragment".to_string());
    }

    Ok(path_str.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_file_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{}}").unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path).unwrap(), file.path());
    }

    #[test]
    fn test_config_file_path_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_config_file_path(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("not a file"));
    }

    #[test]
    fn test_callback_path() {
        assert_eq!(validate_callback_path("").unwrap(), "");
        assert_eq!(validate_callback_path("/tabs/drink-menu").unwrap(), "/tabs/drink-menu");
        assert!(validate_callback_path("tabs").is_err());
        assert!(validate_callback_path("/a b").is_err());
        assert!(validate_callback_path("/a?x=1").is_err());
    }
}
