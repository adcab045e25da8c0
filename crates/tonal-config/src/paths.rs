use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Variable de entorno que fuerza un directorio base (modo portable / tests).
pub const BASE_DIR_ENV: &str = "TONAL_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct TonalPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub cache_dir: PathBuf,
}

impl TonalPaths {
  pub fn new() -> Result<Self, ConfigError> {
    let paths = match std::env::var(BASE_DIR_ENV) {
      Ok(env_base) => Self::from_base(env_base),
      Err(_) => {
        let proj_dirs = ProjectDirs::from("com", "tonal", "tonal").ok_or(ConfigError::Directories)?;
        Self {
          base_dir: proj_dirs.config_dir().to_path_buf(),
          config_dir: proj_dirs.config_dir().to_path_buf(),
          data_dir: proj_dirs.data_dir().to_path_buf(),
          cache_dir: proj_dirs.cache_dir().to_path_buf(),
        }
      }
    };

    paths.ensure_dirs()?;
    tracing::debug!(base_dir = %paths.base_dir.display(), "resolved tonal paths");

    Ok(paths)
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  /// Layout portable: `config/`, `data/` y `cache/` cuelgan de `base`.
  ///
  /// No toca el disco; usar [`TonalPaths::ensure_dirs`] para crear los directorios.
  pub fn from_base(base: impl AsRef<Path>) -> Self {
    let base = base.as_ref().to_path_buf();
    Self {
      config_dir: base.join("config"),
      data_dir: base.join("data"),
      cache_dir: base.join("cache"),
      base_dir: base,
    }
  }

  pub fn ensure_dirs(&self) -> Result<(), ConfigError> {
    std::fs::create_dir_all(&self.config_dir)?;
    std::fs::create_dir_all(&self.data_dir)?;
    std::fs::create_dir_all(&self.cache_dir)?;
    Ok(())
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("tonal.toml")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  struct EnvVarGuard {
    key: String,
    original: Option<String>,
  }

  impl EnvVarGuard {
    fn new(key: &str, value: &str) -> Self {
      let original = std::env::var(key).ok();
      unsafe { std::env::set_var(key, value) };
      EnvVarGuard { key: key.to_owned(), original }
    }
  }

  impl Drop for EnvVarGuard {
    fn drop(&mut self) {
      match &self.original {
        Some(val) => unsafe { std::env::set_var(&self.key, val) },
        None => unsafe { std::env::remove_var(&self.key) },
      }
    }
  }

  #[test]
  fn test_tonal_base_dir_override() {
    let tmp = tempdir().unwrap();
    let _env = EnvVarGuard::new(BASE_DIR_ENV, tmp.path().to_str().unwrap());

    let paths = TonalPaths::new().unwrap();

    assert_eq!(paths.base_dir, tmp.path());
    assert_eq!(paths.config_dir, tmp.path().join("config"));
    assert_eq!(paths.data_dir, tmp.path().join("data"));
    assert_eq!(paths.cache_dir, tmp.path().join("cache"));

    assert!(paths.config_dir.exists());
    assert!(paths.data_dir.exists());
    assert!(paths.cache_dir.exists());
  }

  #[test]
  fn test_from_base_does_not_create_dirs() {
    let tmp = tempdir().unwrap();
    let paths = TonalPaths::from_base(tmp.path().join("portable"));

    assert_eq!(paths.config_file(), tmp.path().join("portable").join("config").join("tonal.toml"));
    assert!(!paths.config_dir.exists());

    paths.ensure_dirs().unwrap();
    assert!(paths.config_dir.exists());
  }
}
