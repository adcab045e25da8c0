use serde::{Deserialize, Serialize};
use tonal_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, TomlConfigBackend};

const SECTION: &str = "catalog";

/// Sección `[catalog]` de `tonal.toml`: límites que aplica el catálogo al dar
/// de alta canciones.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
  pub max_title_len: usize,
  pub max_author_len: usize,
}

impl Default for CatalogConfig {
  fn default() -> Self {
    CatalogConfig { max_title_len: 255, max_author_len: 255 }
  }
}

impl CatalogConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    self.save_to(&CONFIG_BACKEND)
  }

  /// Lee la sección (o sus valores por defecto) y la vuelve a escribir para
  /// que el fichero refleje los valores en uso.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: CatalogConfig = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save_to(&self, backend: &TomlConfigBackend) -> Result<(), ConfigError> {
    backend.save_section(SECTION, self)
  }
}
