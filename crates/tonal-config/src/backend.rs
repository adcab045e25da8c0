use crate::io::atomic_write_str;
use crate::paths::{ConfigError, TonalPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;

// toml_edit para escribir preservando comentarios y otras secciones
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: TonalPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: TonalPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &TonalPaths {
    &self.paths
  }

  /// Como [`ConfigBackend::load_section`], pero un fichero o sección ausente
  /// devuelve `T::default()` en lugar de error.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    use std::io::ErrorKind;

    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        tracing::debug!(section, path = %path.display(), "config file missing, using defaults");
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      tracing::debug!(section, "config section missing, using defaults");
      return Ok(T::default());
    };

    decode_section(section, table)
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table
    .clone()
    .try_into()
    .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    use std::io::ErrorKind;

    let path = self.paths.config_file();

    // 1) Leer config actual como DocumentMut o crear doc vacío si no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) Serializar la sección con `toml` (serde). Sale sin cabecera:
    //      "foo = 1\nbar = 2\n"
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    // 3) Reinterpretarla como tabla de toml_edit.
    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    // 4) Reemplazar sólo esa sección; el resto del documento queda intacto.
    doc[section] = section_item;

    atomic_write_str(&path, &doc.to_string())?;
    tracing::debug!(section, path = %path.display(), "config section saved");

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
  struct Limits {
    max_len: usize,
    label: Option<String>,
  }

  impl Default for Limits {
    fn default() -> Self {
      Limits { max_len: 10, label: None }
    }
  }

  fn backend_in(dir: &std::path::Path) -> TomlConfigBackend {
    let paths = TonalPaths::from_base(dir);
    paths.ensure_dirs().unwrap();
    TomlConfigBackend::new(paths)
  }

  #[test]
  fn test_missing_file_yields_default() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let limits: Limits = backend.load_section_with_default("limits").unwrap();
    assert_eq!(limits, Limits::default());

    let strict: Result<Limits, _> = backend.load_section("limits");
    assert!(matches!(strict, Err(ConfigError::Io(_))));
  }

  #[test]
  fn test_save_then_load_section() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let limits = Limits { max_len: 42, label: Some("catalog".into()) };
    backend.save_section("limits", &limits).unwrap();

    let loaded: Limits = backend.load_section("limits").unwrap();
    assert_eq!(loaded, limits);
    assert!(!backend.paths().config_file().with_extension("tmp").exists());
  }

  #[test]
  fn test_save_preserves_other_sections_and_comments() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    let file = backend.paths().config_file();

    fs::write(&file, "# user notes\n[other]\nkeep = true\n").unwrap();
    backend.save_section("limits", &Limits { max_len: 3, label: None }).unwrap();

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("# user notes"));
    assert!(content.contains("keep = true"));

    let loaded: Limits = backend.load_section_with_default("limits").unwrap();
    assert_eq!(loaded.max_len, 3);
  }

  #[test]
  fn test_missing_section_is_an_error_for_strict_load() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    fs::write(backend.paths().config_file(), "[other]\nkeep = true\n").unwrap();

    let strict: Result<Limits, _> = backend.load_section("limits");
    assert!(matches!(strict, Err(ConfigError::Other(msg)) if msg.contains("[limits]")));

    let lenient: Limits = backend.load_section_with_default("limits").unwrap();
    assert_eq!(lenient, Limits::default());
  }
}
