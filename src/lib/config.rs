//! Loading the lock configuration

use lockwatch_core::LockConfig;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::Path;

/// Load a lock configuration from a JSON file, or the built-in Ballard Locks
pub fn load_lock_config(path: Option<&Path>) -> Result<LockConfig> {
    let Some(path) = path else {
        log::debug!("Using built-in Ballard Locks zones");
        return Ok(LockConfig::ballard_locks());
    };

    let text = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Cannot read zone configuration {}", path.display()))?;
    let config = LockConfig::from_json(&text)
        .into_diagnostic()
        .wrap_err_with(|| format!("Invalid zone configuration {}", path.display()))?;

    log::info!(
        "Loaded '{}' with {} zones from {}",
        config.name,
        config.zones.len(),
        path.display()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin() {
        let config = load_lock_config(None).unwrap();
        assert_eq!(config, LockConfig::ballard_locks());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut config = LockConfig::ballard_locks();
        config.name = "Custom".to_string();
        write!(file, "{}", serde_json::to_string_pretty(&config).unwrap()).unwrap();
        file.flush().unwrap();

        assert_eq!(load_lock_config(Some(file.path())).unwrap(), config);
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name": "x", "eastSide": "a", "zones": []}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let err = load_lock_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Invalid zone configuration"));

        let dir = tempfile::tempdir().unwrap();
        assert!(load_lock_config(Some(&dir.path().join("none.json"))).is_err());
    }
}
